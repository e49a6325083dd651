use anyhow::Context;
use clap::Parser;
use mnemogrid_core::*;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use input::TerminalInput;
use settings::Settings;
use store::FileHighScoreStore;
use terminal::{TerminalBell, TerminalGuard, TerminalRenderer, terminal_layout};

mod input;
mod settings;
mod store;
mod terminal;

const FRAME: Duration = Duration::from_millis(16);

#[derive(Parser, Debug)]
#[command(version, about = "Remember the flashed tiles, then pick them again", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// TOML file with session settings, flags below take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Grid size of the first round
    #[arg(long)]
    grid_size: Option<Coord>,

    /// Lives at the start of every game
    #[arg(long)]
    lives: Option<Points>,

    /// Tiles flashed in the first round
    #[arg(long)]
    reveal: Option<CellCount>,

    /// How long tiles stay visible, in milliseconds
    #[arg(long)]
    memorize_ms: Option<u32>,

    /// Where the high score is kept
    #[arg(long)]
    high_score_file: Option<String>,

    /// Do not ring the terminal bell
    #[arg(long)]
    mute: bool,
}

impl Args {
    fn apply(&self, settings: &mut Settings) {
        let session = &mut settings.session;
        if let Some(grid_size) = self.grid_size {
            session.initial_grid_size = grid_size;
        }
        if let Some(lives) = self.lives {
            session.initial_lives = lives;
        }
        if let Some(reveal) = self.reveal {
            session.initial_reveal_count = reveal;
        }
        if let Some(memorize_ms) = self.memorize_ms {
            session.memorize_ms = memorize_ms;
        }
        if let Some(path) = &self.high_score_file {
            session.high_score_key = path.clone();
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        settings.mute |= self.mute;
    }
}

/// Frame loop: input is drained and the memorization timer advanced once per frame, never blocking on either.
fn run<R, A, S, Sel>(
    session: &mut SessionController<R, A, S, Sel>,
    input: &mut impl InputSource,
) -> anyhow::Result<()>
where
    R: Renderer,
    A: AudioSink,
    S: HighScoreStore,
    Sel: RevealSelector,
{
    let mut last_frame = Instant::now();
    loop {
        let now = Instant::now();
        let elapsed = u32::try_from(now.duration_since(last_frame).as_millis()).unwrap_or(u32::MAX);
        last_frame = now;

        if session.pump(input, elapsed)? == Flow::Quit {
            return Ok(());
        }
        std::thread::sleep(FRAME);
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let mut settings = Settings::load(args.config.as_deref())?;
    args.apply(&mut settings);
    let (columns, rows) = crossterm::terminal::size().context("Could not read the terminal size")?;
    settings.session.layout = terminal_layout(columns, rows);
    settings
        .session
        .validate()
        .context("Invalid session settings")?;

    let seed = settings.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let _terminal = TerminalGuard::enter().context("Could not set up the terminal")?;
    let store = FileHighScoreStore::new(&settings.session.high_score_key);
    let renderer = TerminalRenderer::new(std::io::stdout(), settings.session.layout);
    let audio = (!settings.mute).then(|| TerminalBell::new(std::io::stdout()));

    let mut session = SessionController::new(
        settings.session,
        renderer,
        audio,
        store,
        RandomRevealSelector::new(seed),
    )
    .context("Could not start a session")?;

    log::debug!("Game started");
    run(&mut session, &mut TerminalInput)
}

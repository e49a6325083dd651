use mnemogrid_core::{HighScoreStore, PersistenceError, Points};
use std::io::ErrorKind;
use std::path::PathBuf;

/// High score kept as a plain-text integer in a single file.
#[derive(Clone, Debug)]
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn load(&mut self) -> Result<Points, PersistenceError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::debug!("No high score at {}, first run", self.path.display());
                return Ok(0);
            }
            Err(err) => {
                return Err(PersistenceError::Read(format!(
                    "{}: {}",
                    self.path.display(),
                    err
                )));
            }
        };
        text.trim().parse().map_err(|err| {
            PersistenceError::Read(format!("{}: {} ({:?})", self.path.display(), err, text))
        })
    }

    fn save(&mut self, high_score: Points) -> Result<(), PersistenceError> {
        std::fs::write(&self.path, high_score.to_string()).map_err(|err| {
            PersistenceError::Write(format!("{}: {}", self.path.display(), err))
        })
    }
}

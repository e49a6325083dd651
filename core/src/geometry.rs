use serde::{Deserialize, Serialize};

use crate::*;

/// Pixel position on the host's screen.
pub type Pixel = i32;

/// Screen area the board is drawn into, below a HUD strip of `hud_height`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenLayout {
    pub width: Pixel,
    pub height: Pixel,
    pub hud_height: Pixel,
    pub gap: Pixel,
}

impl Default for ScreenLayout {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            hud_height: 100,
            gap: 10,
        }
    }
}

impl ScreenLayout {
    /// Geometry of a `grid_size` board: square cells filling the height under the HUD, centred horizontally.
    pub fn geometry(&self, grid_size: Coord) -> GridGeometry {
        let n = Pixel::from(grid_size.max(1));
        let total_gap = self.gap * (n + 1);
        let cell_size = (self.height - self.hud_height - total_gap).div_euclid(n);
        let offset_x = (self.width - (cell_size * n + total_gap)).div_euclid(2);
        GridGeometry {
            grid_size,
            cell_size,
            gap: self.gap,
            offset_x,
            offset_y: self.hud_height,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridGeometry {
    pub grid_size: Coord,
    pub cell_size: Pixel,
    pub gap: Pixel,
    pub offset_x: Pixel,
    pub offset_y: Pixel,
}

impl GridGeometry {
    const fn stride(&self) -> Pixel {
        self.cell_size + self.gap
    }

    /// Maps a pixel to the cell under it, `None` when it falls outside the grid.
    pub fn cell_at(&self, x: Pixel, y: Pixel) -> Option<Coord2> {
        let stride = self.stride();
        if stride <= 0 {
            return None;
        }
        let col = (x - self.offset_x).div_euclid(stride);
        let row = (y - self.offset_y).div_euclid(stride);
        let size = Pixel::from(self.grid_size);
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some((row as Coord, col as Coord))
        } else {
            None
        }
    }

    /// Top-left corner a renderer draws the cell at.
    pub fn cell_origin(&self, (row, col): Coord2) -> (Pixel, Pixel) {
        let stride = self.stride();
        (
            self.offset_x + Pixel::from(col) * stride + self.gap,
            self.offset_y + Pixel::from(row) * stride + self.gap,
        )
    }

    /// A pixel that [`cell_at`](Self::cell_at) maps back to `coords`.
    pub fn cell_center(&self, (row, col): Coord2) -> (Pixel, Pixel) {
        let stride = self.stride();
        (
            self.offset_x + Pixel::from(col) * stride + stride / 2,
            self.offset_y + Pixel::from(row) * stride + stride / 2,
        )
    }
}

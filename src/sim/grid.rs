//! Game board grid model
//!
//! All gameplay positions are integer grid cells. The board is the inclusive
//! rectangle of cells the snake may occupy, derived from the window size,
//! cell size and the padding reserved for the border wall and scoreboard.

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Inclusive rectangle of valid grid cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub left: i32,
    pub right: i32,
    pub bottom: i32,
    pub top: i32,
}

impl Default for Board {
    fn default() -> Self {
        Self::from_window()
    }
}

impl Board {
    /// The playable board for the configured window
    ///
    /// One extra cell inside the padding on the left/bottom keeps the snake
    /// clear of the border wall.
    pub fn from_window() -> Self {
        Self {
            left: PAD_LEFT + 1,
            right: COLUMNS - PAD_RIGHT,
            bottom: PAD_BOTTOM + 1,
            top: ROWS - PAD_TOP,
        }
    }

    /// Whether a cell lies on the board (bounds are legal positions)
    #[inline]
    pub fn contains(&self, cell: IVec2) -> bool {
        cell.x >= self.left && cell.x <= self.right && cell.y >= self.bottom && cell.y <= self.top
    }

    /// Board width in cells
    pub fn width(&self) -> i32 {
        self.right - self.left + 1
    }

    /// Board height in cells
    pub fn height(&self) -> i32 {
        self.top - self.bottom + 1
    }

    /// Total number of cells on the board
    pub fn cell_count(&self) -> usize {
        (self.width() * self.height()) as usize
    }

    /// Draw a uniformly random cell, with optional padding from each edge
    pub fn random_cell<R: Rng>(
        &self,
        rng: &mut R,
        pad_left: i32,
        pad_right: i32,
        pad_bottom: i32,
        pad_top: i32,
    ) -> IVec2 {
        let x = rng.random_range(self.left + pad_left..=self.right - pad_right);
        let y = rng.random_range(self.bottom + pad_bottom..=self.top - pad_top);
        IVec2::new(x, y)
    }

    /// Iterate every cell on the board, column-major from the bottom-left
    pub fn cells(&self) -> impl Iterator<Item = IVec2> + '_ {
        (self.left..=self.right)
            .flat_map(move |x| (self.bottom..=self.top).map(move |y| IVec2::new(x, y)))
    }
}

//! Snake Arcade - a grid-based arcade snake game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, game state)
//! - `theme`: Colour themes handed to the rendering collaborator
//! - `settings`: Configuration persistence
//!
//! Rendering, windowing and input-device binding live outside this crate;
//! the sim only exposes grid cells, colour tokens and score strings.

pub mod settings;
pub mod sim;
pub mod theme;

pub use settings::Settings;
pub use theme::{Rgb, THEMES, Theme};

use glam::{IVec2, Vec2};

/// Game version shown on the main menu
pub const VERSION: &str = "v.0.9.0";

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const TICK_DT: f32 = 1.0 / 60.0;

    /// Application window, in pixels
    pub const WINDOW_WIDTH: u32 = 400;
    pub const WINDOW_HEIGHT: u32 = 640;

    /// One grid square, in pixels
    pub const CELL: u32 = 16;
    /// Grid dimensions, in cells
    pub const COLUMNS: i32 = (WINDOW_WIDTH / CELL) as i32;
    pub const ROWS: i32 = (WINDOW_HEIGHT / CELL) as i32;

    /// Padding between the game board and the window borders, in cells
    pub const PAD_LEFT: i32 = 1;
    pub const PAD_RIGHT: i32 = 1;
    pub const PAD_TOP: i32 = 6;
    pub const PAD_BOTTOM: i32 = 1;

    /// Snake speed, in cells per second
    pub const START_SPEED: f32 = 6.0;
    pub const MIN_SPEED: f32 = 6.0;
    pub const MAX_SPEED: f32 = 16.0;
    /// Manual and milestone speed adjustments step by one cell/second
    pub const SPEED_STEP: f32 = 1.0;

    /// Speed of the snake looping the title on the main menu
    pub const MENU_SPEED: f32 = 12.0;
    /// The menu snake stops growing past this many segments
    pub const MENU_BODY_CAP: usize = 16;
    /// Ticks before the title loop starts moving
    pub const MENU_START_DELAY_TICKS: u32 = 60;
    /// Ticks the title loop halts on a theme change
    pub const THEME_PAUSE_TICKS: u32 = 30;
    /// Cells of track the menu food keeps ahead of the snake
    pub const MENU_FOOD_LEAD: i32 = 6;

    /// Default death-flash interval, in ticks
    pub const FLASH_INTERVAL_TICKS: u32 = 30;
}

/// Convert a grid cell to the pixel centre of that cell
///
/// Rectangles are drawn from their centre, so each cell centre sits half a
/// cell back from the cell's far pixel corner.
#[inline]
pub fn cell_to_pixel(cell: IVec2) -> Vec2 {
    let size = consts::CELL as f32;
    Vec2::new(
        cell.x as f32 * size - size / 2.0,
        cell.y as f32 * size - size / 2.0,
    )
}

/// Convert a pixel position to the grid cell containing it
#[inline]
pub fn pixel_to_cell(pos: Vec2) -> IVec2 {
    let size = consts::CELL as f32;
    IVec2::new((pos.x / size).ceil() as i32, (pos.y / size).ceil() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_pixel_round_trip() {
        let cell = IVec2::new(12, 27);
        let px = cell_to_pixel(cell);
        assert_eq!(px, Vec2::new(184.0, 424.0));
        assert_eq!(pixel_to_cell(px), cell);
    }

    #[test]
    fn test_grid_dimensions() {
        assert_eq!(consts::COLUMNS, 25);
        assert_eq!(consts::ROWS, 40);
    }
}

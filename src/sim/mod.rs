//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod food;
pub mod grid;
pub mod score;
pub mod snake;
pub mod state;
pub mod tick;

pub use collision::{hits_food, hits_own_body, hits_wall};
pub use food::{Food, PlacementError, Track, place_along_track, place_randomly};
pub use grid::Board;
pub use score::{Mode, Score};
pub use snake::{Direction, Snake};
pub use state::{GameState, Screen, TITLE_TRACK};
pub use tick::{TickInput, tick};

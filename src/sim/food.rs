//! Food entity and placement policies
//!
//! Two interchangeable strategies: uniform random placement with bounded
//! rejection sampling for gameplay, and track-following placement that keeps
//! the menu food a fixed arc length ahead of the title-loop snake.

use std::fmt;

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::grid::Board;
use super::snake::Direction;

/// Rejection-sampling attempts before falling back to a free-cell scan
const MAX_PLACEMENT_ATTEMPTS: u32 = 128;

/// Food placement failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Every board cell is occupied by the snake
    BoardFull,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::BoardFull => write!(f, "no free cell left on the board"),
        }
    }
}

impl std::error::Error for PlacementError {}

/// A piece of food for the snake to eat
///
/// Never destroyed, only repositioned; the counters accumulate over a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    pub position: IVec2,
    pub spawned: u32,
    pub eaten: u32,
}

impl Food {
    pub fn new(position: IVec2) -> Self {
        Self {
            position,
            spawned: 1,
            eaten: 0,
        }
    }
}

/// Draw a uniformly random free cell on the board
///
/// Samples with rejection up to a fixed bound, then falls back to choosing
/// among the remaining free cells so a near-full board cannot stall the tick.
/// Errors only when the snake occupies the entire board.
pub fn place_randomly<R: Rng>(
    rng: &mut R,
    board: &Board,
    occupied: &[IVec2],
) -> Result<IVec2, PlacementError> {
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let cell = board.random_cell(rng, 0, 0, 0, 0);
        if !occupied.contains(&cell) {
            return Ok(cell);
        }
    }
    let free: Vec<IVec2> = board.cells().filter(|c| !occupied.contains(c)).collect();
    if free.is_empty() {
        return Err(PlacementError::BoardFull);
    }
    Ok(free[rng.random_range(0..free.len())])
}

/// Closed rectangular track described by its four corner cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub top_left: IVec2,
    pub top_right: IVec2,
    pub bottom_right: IVec2,
    pub bottom_left: IVec2,
}

/// Place food a fixed cell distance ahead of a snake looping the track
///
/// Projects along the current travel axis; when the projection overshoots the
/// next clockwise corner, the remainder turns onto the perpendicular edge and
/// the along-edge coordinate clamps to one cell past the corner so the food
/// stays visibly on the track. A stationary snake leaves the target at its
/// head.
pub fn place_along_track(head: IVec2, direction: Direction, track: &Track, distance: i32) -> IVec2 {
    match direction {
        Direction::Left => {
            let x = head.x - distance;
            if x < track.bottom_left.x {
                let overshoot = (x - track.bottom_left.x).abs();
                IVec2::new(track.bottom_left.x - 1, track.bottom_left.y + overshoot)
            } else {
                IVec2::new(x, head.y)
            }
        }
        Direction::Right => {
            let x = head.x + distance;
            if x > track.top_right.x {
                let overshoot = x - track.top_right.x;
                IVec2::new(track.top_right.x + 1, track.top_right.y - overshoot)
            } else {
                IVec2::new(x, head.y)
            }
        }
        Direction::Up => {
            let y = head.y + distance;
            if y > track.top_left.y {
                let overshoot = y - track.top_left.y;
                IVec2::new(track.top_left.x + overshoot, track.top_left.y + 1)
            } else {
                IVec2::new(head.x, y)
            }
        }
        Direction::Down => {
            let y = head.y - distance;
            if y < track.bottom_right.y {
                let overshoot = (y - track.bottom_right.y).abs();
                IVec2::new(track.bottom_right.x - overshoot, track.bottom_right.y - 1)
            } else {
                IVec2::new(head.x, y)
            }
        }
        Direction::None => head,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn title_track() -> Track {
        Track {
            top_left: IVec2::new(4, 36),
            top_right: IVec2::new(21, 37),
            bottom_right: IVec2::new(22, 28),
            bottom_left: IVec2::new(5, 27),
        }
    }

    #[test]
    fn test_random_placement_avoids_body() {
        let board = Board::from_window();
        let mut rng = Pcg32::seed_from_u64(42);
        // A long body column through the middle of the board.
        let occupied: Vec<IVec2> = (board.bottom..=board.top).map(|y| IVec2::new(13, y)).collect();
        for _ in 0..200 {
            let cell = place_randomly(&mut rng, &board, &occupied).unwrap();
            assert!(board.contains(cell));
            assert!(!occupied.contains(&cell));
        }
    }

    #[test]
    fn test_random_placement_finds_last_free_cell() {
        let board = Board {
            left: 1,
            right: 3,
            bottom: 1,
            top: 3,
        };
        let gap = IVec2::new(2, 2);
        let occupied: Vec<IVec2> = board.cells().filter(|&c| c != gap).collect();
        let mut rng = Pcg32::seed_from_u64(1);
        assert_eq!(place_randomly(&mut rng, &board, &occupied), Ok(gap));
    }

    #[test]
    fn test_random_placement_board_full() {
        let board = Board {
            left: 1,
            right: 2,
            bottom: 1,
            top: 2,
        };
        let occupied: Vec<IVec2> = board.cells().collect();
        let mut rng = Pcg32::seed_from_u64(1);
        assert_eq!(
            place_randomly(&mut rng, &board, &occupied),
            Err(PlacementError::BoardFull)
        );
    }

    #[test]
    fn test_track_placement_straight_ahead() {
        let track = title_track();
        let food = place_along_track(IVec2::new(12, 27), Direction::Left, &track, 6);
        assert_eq!(food, IVec2::new(6, 27));
    }

    #[test]
    fn test_track_placement_turns_each_corner() {
        let track = title_track();
        // Left edge: 2 cells short of the bottom-left corner, 4 spill upward.
        assert_eq!(
            place_along_track(IVec2::new(7, 27), Direction::Left, &track, 6),
            IVec2::new(4, 31)
        );
        // Top edge: overshoot past top-right turns down the right edge.
        assert_eq!(
            place_along_track(IVec2::new(19, 37), Direction::Right, &track, 6),
            IVec2::new(22, 33)
        );
        // Left edge going up: overshoot past top-left turns onto the top edge.
        assert_eq!(
            place_along_track(IVec2::new(4, 34), Direction::Up, &track, 6),
            IVec2::new(8, 37)
        );
        // Right edge going down: overshoot past bottom-right turns onto the
        // bottom edge.
        assert_eq!(
            place_along_track(IVec2::new(22, 30), Direction::Down, &track, 6),
            IVec2::new(18, 27)
        );
    }

    #[test]
    fn test_track_placement_stationary() {
        let track = title_track();
        let head = IVec2::new(12, 27);
        assert_eq!(place_along_track(head, Direction::None, &track, 6), head);
    }
}

//! The snake entity and its per-axis motion engine
//!
//! The tricky part of Snake Arcade: the head moves continuously in cells per
//! second, but gameplay is strictly cell-based. The motion engine accumulates
//! `speed * dt` along the travel axis and "commits" each time a full cell has
//! been covered, snapping the continuous coordinate back onto the grid,
//! shifting the body and only then applying any queued direction change.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::food::Track;

/// Ticks the body stays visible at the start of each death-flash cycle
const FLASH_LEAD_IN: u32 = 5;

/// Axis-aligned travel direction; `None` is stationary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// One-cell step in this direction
    #[inline]
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::None => IVec2::ZERO,
            Direction::Up => IVec2::new(0, 1),
            Direction::Down => IVec2::new(0, -1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }

    /// The reversing direction (stationary reverses to stationary)
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Direction::None => Direction::None,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// The hero character
///
/// Grows in length after eating food and dies after colliding with a wall or
/// its own body. Can speed up/down between a minimum and maximum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snake {
    /// Continuous head coordinate, in cells; meaningful only mid-transit
    pub head: Vec2,
    /// Last committed integer head position, used to measure travel distance
    prev: IVec2,
    /// Current travel direction
    pub direction: Direction,
    /// Requested direction, applied at the next commit
    pub pending: Direction,
    /// Direction captured while halted (pause, menu theme change)
    pub last_direction: Direction,
    /// Body segments, head first; never shorter than three cells
    pub segments: Vec<IVec2>,
    /// Speed in cells per second
    pub speed: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    /// Set by the food collision check, consumed by the next commit
    pub eating: bool,
    pub alive: bool,
    /// Death-flash counter, ticks since the current flash cycle began
    pub ticks_dead: u32,
}

impl Snake {
    /// Create a snake aligned along the axis it will travel
    ///
    /// The body trails behind the head so the first few commits shift it
    /// forward naturally. A stationary snake aligns as if travelling left.
    pub fn new(head: IVec2, speed: f32, direction: Direction) -> Self {
        let trail = match direction {
            Direction::None => Direction::Left,
            d => d,
        }
        .delta();
        let segments = (0..3).map(|i| head - trail * i).collect();
        Self {
            head: head.as_vec2(),
            prev: head,
            direction,
            pending: Direction::None,
            last_direction: Direction::None,
            segments,
            speed,
            min_speed: crate::consts::MIN_SPEED,
            max_speed: crate::consts::MAX_SPEED,
            eating: false,
            alive: true,
            ticks_dead: 0,
        }
    }

    /// The committed head cell; collision checks run against this
    #[inline]
    pub fn head_cell(&self) -> IVec2 {
        self.prev
    }

    /// The tail cell (vacated on the tick the head advances)
    #[inline]
    pub fn tail_cell(&self) -> IVec2 {
        // Alignment in new() guarantees at least three segments.
        self.segments[self.segments.len() - 1]
    }

    /// Advance the continuous head by `speed * dt` along the travel axis,
    /// committing a one-cell transition when a full cell has been covered
    pub fn advance(&mut self, dt: f32) {
        if !self.alive || self.direction == Direction::None {
            return;
        }
        let step = self.direction.delta().as_vec2() * self.speed * dt;
        self.head += step;
        if self.distance_travelled() >= 1.0 {
            self.commit();
        }
    }

    /// Distance covered since the last commit, along the travel axis
    fn distance_travelled(&self) -> f32 {
        let travelled = (self.head - self.prev.as_vec2()).abs();
        match self.direction {
            Direction::Up | Direction::Down => travelled.y,
            Direction::Left | Direction::Right => travelled.x,
            Direction::None => 0.0,
        }
    }

    /// Finalize a one-cell transition
    ///
    /// The continuous coordinate rounds toward the direction of motion: it
    /// may overshoot the cell boundary by a fraction, which must be dropped
    /// rather than rounded to nearest.
    fn commit(&mut self) {
        match self.direction {
            Direction::Up => self.head.y = self.head.y.floor(),
            Direction::Right => self.head.x = self.head.x.floor(),
            Direction::Down => self.head.y = self.head.y.ceil(),
            Direction::Left => self.head.x = self.head.x.ceil(),
            Direction::None => return,
        }
        self.prev += self.direction.delta();
        self.update_body();
        self.apply_pending();
    }

    /// Shift or grow the body for the new head cell
    ///
    /// Sole mutator of segment count: eating keeps the tail for one commit
    /// (net +1), otherwise the tail cell is vacated.
    fn update_body(&mut self) {
        self.segments.insert(0, self.prev);
        if self.eating {
            self.eating = false;
        } else {
            self.segments.pop();
        }
    }

    /// Apply the queued direction change, suppressing reversals
    ///
    /// Deferred to commit time so a flip can never take effect mid-cell and
    /// fold the snake into its own neck.
    fn apply_pending(&mut self) {
        if self.pending != Direction::None && self.pending != self.direction.opposite() {
            self.direction = self.pending;
        }
    }

    /// Increase speed up to the maximum
    pub fn increase_speed(&mut self, increment: f32) {
        self.speed = (self.speed + increment).min(self.max_speed);
    }

    /// Decrease speed down to the minimum
    pub fn decrease_speed(&mut self, increment: f32) {
        self.speed = (self.speed - increment).max(self.min_speed);
    }

    /// Raise the speed floor, never past the maximum
    ///
    /// Current speed is lifted onto the new floor if it was below it.
    pub fn raise_min_speed(&mut self, increment: f32) {
        self.min_speed = (self.min_speed + increment).min(self.max_speed);
        self.speed = self.speed.max(self.min_speed);
    }

    /// Queue the clockwise turn for the title-loop track
    ///
    /// Compares the committed head against the four corner cells; an exact
    /// match queues the direction of the next edge.
    pub fn follow_track(&mut self, track: &Track) {
        let head = self.head_cell();
        if head == track.bottom_left {
            self.pending = Direction::Up;
        } else if head == track.top_left {
            self.pending = Direction::Right;
        } else if head == track.top_right {
            self.pending = Direction::Down;
        } else if head == track.bottom_right {
            self.pending = Direction::Left;
        }
    }

    /// Advance the death-flash counter (no-op while alive)
    ///
    /// The counter wraps at `interval`; cosmetic only.
    pub fn tick_flash(&mut self, interval: u32) {
        if self.alive {
            return;
        }
        self.ticks_dead += 1;
        if self.ticks_dead > interval {
            self.ticks_dead = 0;
        }
    }

    /// Whether the rendering collaborator should skip the body this tick
    ///
    /// Toggling between drawn and hidden produces the death flash.
    pub fn body_hidden(&self) -> bool {
        !self.alive && self.ticks_dead > FLASH_LEAD_IN
    }
}

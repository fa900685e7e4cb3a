//! Scoring and milestone tracking
//!
//! Each difficulty mode sets the per-food point value and, optionally, a
//! milestone amount. Reaching a milestone exactly ratchets the snake's speed
//! floor in the caller.

use serde::{Deserialize, Serialize};

/// Difficulty mode, active outside the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Easy => "easy",
            Mode::Normal => "normal",
            Mode::Hard => "hard",
        }
    }

    /// Points awarded per food item
    pub fn food_points(&self) -> u32 {
        match self {
            Mode::Easy => 50,
            Mode::Normal => 100,
            Mode::Hard => 200,
        }
    }

    /// Score interval between speed milestones (None disables milestones)
    pub fn milestone_amount(&self) -> Option<u32> {
        match self {
            Mode::Easy => None,
            Mode::Normal => Some(500),
            Mode::Hard => Some(600),
        }
    }
}

/// Running score for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Score {
    pub total: u32,
    food_points: u32,
    milestone_amount: Option<u32>,
    /// Last total at which a milestone fired; only ever advances
    milestone_checkpoint: u32,
}

impl Score {
    pub fn new(food_points: u32, milestone_amount: Option<u32>) -> Self {
        Self {
            total: 0,
            food_points,
            milestone_amount,
            milestone_checkpoint: 0,
        }
    }

    /// Score table for a difficulty mode
    pub fn for_mode(mode: Mode) -> Self {
        Self::new(mode.food_points(), mode.milestone_amount())
    }

    /// Add the value of one food item
    pub fn add_food_points(&mut self) {
        self.total += self.food_points;
    }

    /// Check whether a milestone score has been reached
    ///
    /// Exact-equality test on the running total: true exactly when the total
    /// minus the milestone amount equals the last checkpoint, which then
    /// advances so the next check stays accurate.
    pub fn check_milestone(&mut self) -> bool {
        let Some(amount) = self.milestone_amount else {
            return false;
        };
        if self.total >= amount && self.total - amount == self.milestone_checkpoint {
            self.milestone_checkpoint += amount;
            true
        } else {
            false
        }
    }

    /// The score as a six-digit string padded with leading zeros
    pub fn padded(&self) -> String {
        format!("{:06}", self.total)
    }
}

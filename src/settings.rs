//! Game settings and preferences
//!
//! Persisted as JSON next to the executable; the sim reads these once per
//! session so a file edited mid-game takes effect on the next restart.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Mode;

/// Configurable options recognized by the core
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Difficulty mode for new sessions
    pub mode: Mode,
    /// Theme index into [`crate::theme::THEMES`]
    pub theme_index: usize,

    // === Movement ===
    /// Starting speed for gameplay sessions, cells per second
    pub start_speed: f32,
    pub min_speed: f32,
    pub max_speed: f32,

    // === Menu animation ===
    /// Segment count past which the title-loop snake stops growing
    pub menu_body_cap: usize,
    /// Ticks before the title loop starts moving
    pub menu_start_delay: u32,
    /// Ticks the title loop halts on a theme change
    pub theme_pause: u32,
    /// Cells of track the menu food keeps ahead of the snake
    pub menu_food_lead: i32,

    // === Presentation ===
    /// Death-flash interval handed to the rendering collaborator, in ticks
    pub flash_interval: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: Mode::Normal,
            theme_index: 0,
            start_speed: START_SPEED,
            min_speed: MIN_SPEED,
            max_speed: MAX_SPEED,
            menu_body_cap: MENU_BODY_CAP,
            menu_start_delay: MENU_START_DELAY_TICKS,
            theme_pause: THEME_PAUSE_TICKS,
            menu_food_lead: MENU_FOOD_LEAD,
            flash_interval: FLASH_INTERVAL_TICKS,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Settings>(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings.normalized()
                }
                Err(err) => {
                    log::warn!("Ignoring malformed settings file: {err}");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings as pretty-printed JSON
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Clamp loaded values into a playable range
    ///
    /// A hand-edited file must not be able to violate the speed ordering the
    /// sim relies on.
    pub fn normalized(mut self) -> Self {
        if self.max_speed < self.min_speed {
            self.max_speed = self.min_speed;
        }
        self.start_speed = self.start_speed.clamp(self.min_speed, self.max_speed);
        self.theme_index %= crate::theme::THEMES.len();
        if self.menu_food_lead < 1 {
            self.menu_food_lead = MENU_FOOD_LEAD;
        }
        if self.flash_interval == 0 {
            self.flash_interval = FLASH_INTERVAL_TICKS;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_json_round_trip() {
        let settings = Settings {
            mode: Mode::Hard,
            theme_index: 3,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_normalized_repairs_speed_ordering() {
        let settings = Settings {
            min_speed: 10.0,
            max_speed: 4.0,
            start_speed: 1.0,
            ..Default::default()
        }
        .normalized();
        assert!(settings.min_speed <= settings.max_speed);
        assert!(settings.start_speed >= settings.min_speed);
        assert!(settings.start_speed <= settings.max_speed);
    }

    #[test]
    fn test_normalized_wraps_theme_index() {
        let settings = Settings {
            theme_index: 99,
            ..Default::default()
        }
        .normalized();
        assert!(settings.theme_index < crate::theme::THEMES.len());
    }
}

//! Session state and setup
//!
//! One `GameState` owns everything a session needs: snake, food, score,
//! board, mode, RNG and the menu-loop bookkeeping. Components receive it
//! explicitly; nothing in the sim reaches for shared globals.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::MENU_SPEED;
use crate::settings::Settings;
use crate::theme::{self, Theme};

use super::food::{Food, Track, place_randomly};
use super::grid::Board;
use super::score::{Mode, Score};
use super::snake::{Direction, Snake};

/// The closed track the menu snake loops clockwise around the title
///
/// Corners are offset by one cell from the travelled path because a queued
/// turn only takes effect at the commit after the corner match.
pub const TITLE_TRACK: Track = Track {
    top_left: IVec2::new(4, 36),
    top_right: IVec2::new(21, 37),
    bottom_right: IVec2::new(22, 28),
    bottom_left: IVec2::new(5, 27),
};

/// Menu snake spawn: head position and food position flanking the title
const MENU_HEAD: IVec2 = IVec2::new(12, 27);
const MENU_FOOD: IVec2 = IVec2::new(6, 27);

/// Current screen of the game state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    /// Title screen with the looping snake animation
    MainMenu,
    /// Active gameplay
    Running,
    /// Gameplay halted, direction captured for resume
    Paused,
    /// Run ended; the death flash plays over the final board
    GameOver,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub settings: Settings,
    pub screen: Screen,
    /// Difficulty of the current or next session
    pub mode: Mode,
    pub board: Board,
    pub theme_index: usize,
    pub snake: Snake,
    pub food: Food,
    pub score: Score,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Shared timer for the menu start delay and theme-change pause
    pub menu_timer: u32,
    /// The title loop has left its initial standstill
    pub loop_started: bool,
    /// The title loop is halted for a theme change
    pub loop_paused: bool,
}

impl GameState {
    /// Create a new game state on the main menu
    pub fn new(seed: u64, settings: Settings) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            screen: Screen::MainMenu,
            mode: settings.mode,
            board: Board::from_window(),
            theme_index: settings.theme_index,
            snake: menu_snake(&settings),
            food: Food::new(MENU_FOOD),
            score: Score::for_mode(settings.mode),
            settings,
            time_ticks: 0,
            menu_timer: 0,
            loop_started: false,
            loop_paused: false,
        };
        state.setup_menu();
        state
    }

    /// Rebuild the menu session: snake and food posed around the title
    pub fn setup_menu(&mut self) {
        self.snake = menu_snake(&self.settings);
        self.food = Food::new(MENU_FOOD);
        self.score = Score::for_mode(self.mode);
        self.menu_timer = 0;
        self.loop_started = false;
        self.loop_paused = false;
        self.screen = Screen::MainMenu;
    }

    /// Start a gameplay session: random spawn, random food, fresh score
    ///
    /// The spawn keeps two cells of margin from the side walls and more from
    /// the bottom and top so the snake cannot die in its opening moments.
    pub fn setup_game(&mut self) {
        self.mode = self.settings.mode;
        let head = self.board.random_cell(&mut self.rng, 2, 2, 5, 14);
        let mut snake = Snake::new(head, self.settings.start_speed, Direction::Up);
        snake.min_speed = self.settings.min_speed;
        snake.max_speed = self.settings.max_speed;
        self.snake = snake;
        self.score = Score::for_mode(self.mode);
        self.respawn_food();
        self.menu_timer = 0;
        self.loop_started = false;
        self.loop_paused = false;
        self.screen = Screen::Running;
        log::info!(
            "session started: mode {}, spawn ({}, {})",
            self.mode.as_str(),
            head.x,
            head.y
        );
    }

    /// Move the food to a random free cell
    ///
    /// A full board is the one placement failure; the food then stays where
    /// it is and the session simply carries on.
    pub fn respawn_food(&mut self) {
        match place_randomly(&mut self.rng, &self.board, &self.snake.segments) {
            Ok(position) => {
                self.food.position = position;
                self.food.spawned += 1;
            }
            Err(err) => {
                log::warn!("food placement failed ({err}); leaving food in place");
            }
        }
    }

    /// Advance to the next colour theme
    pub fn cycle_theme(&mut self) {
        self.theme_index = theme::next_index(self.theme_index);
        log::debug!("theme switched to {}", self.theme().name);
    }

    /// The active colour theme
    pub fn theme(&self) -> &'static Theme {
        &theme::THEMES[self.theme_index]
    }
}

fn menu_snake(settings: &Settings) -> Snake {
    let mut snake = Snake::new(MENU_HEAD, MENU_SPEED, Direction::None);
    snake.min_speed = settings.min_speed;
    snake.max_speed = settings.max_speed;
    snake.speed = snake.speed.clamp(snake.min_speed, snake.max_speed);
    snake
}

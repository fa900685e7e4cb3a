//! Snake Arcade entry point
//!
//! Headless demo driver: runs the deterministic simulation without a
//! renderer and logs what happens. Pass a seed as the first argument to
//! replay a specific run.

use std::path::Path;

use snake_arcade::consts::TICK_DT;
use snake_arcade::settings::Settings;
use snake_arcade::sim::{Direction, GameState, Screen, TickInput, tick};

const SETTINGS_FILE: &str = "settings.json";

/// Ticks to idle on the menu so the title loop gets going
const MENU_TICKS: u32 = 600;
/// Upper bound on a demo session
const MAX_SESSION_TICKS: u32 = 36_000;

fn main() {
    env_logger::init();
    log::info!("Snake Arcade {} (headless) starting...", snake_arcade::VERSION);

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
        });
    log::info!("seed: {seed}");

    let settings = Settings::load(Path::new(SETTINGS_FILE));
    let mut state = GameState::new(seed, settings);

    // Let the title animation run a few laps, with one theme change.
    let idle = TickInput::default();
    for i in 0..MENU_TICKS {
        let mut input = idle;
        input.cycle_theme = i == 300;
        tick(&mut state, &input, TICK_DT);
    }
    log::info!(
        "menu loop ran {} ticks, snake length {}, theme {}",
        MENU_TICKS,
        state.snake.segments.len(),
        state.theme().name
    );

    // Start a session and steer with a crude wall-avoiding autopilot until
    // the snake dies or the tick budget runs out.
    tick(&mut state, &TickInput { start: true, ..Default::default() }, TICK_DT);
    let mut ticks = 0;
    while state.screen == Screen::Running && ticks < MAX_SESSION_TICKS {
        let input = TickInput {
            direction: autopilot(&state),
            ..Default::default()
        };
        tick(&mut state, &input, TICK_DT);
        ticks += 1;
    }

    println!(
        "seed {seed}: survived {ticks} ticks, ate {} food, final score {}",
        state.food.eaten,
        state.score.padded()
    );
}

/// Steer clockwise along the walls: turn one cell before running out of
/// board. No food seeking, just survival until the body catches up with it.
fn autopilot(state: &GameState) -> Option<Direction> {
    let head = state.snake.head_cell();
    let board = &state.board;
    match state.snake.direction {
        Direction::Up if head.y >= board.top - 1 => Some(Direction::Right),
        Direction::Right if head.x >= board.right - 1 => Some(Direction::Down),
        Direction::Down if head.y <= board.bottom + 1 => Some(Direction::Left),
        Direction::Left if head.x <= board.left + 1 => Some(Direction::Up),
        _ => None,
    }
}

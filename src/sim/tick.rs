//! Fixed-timestep state machine driver
//!
//! `tick` advances a `GameState` by one frame: it applies the player's
//! intents for that frame, then runs the per-screen update. Everything is
//! deterministic given the same seed and input sequence, which is what makes
//! replay and headless testing possible.

use crate::consts::SPEED_STEP;

use super::collision::{hits_food, hits_own_body, hits_wall};
use super::food::place_along_track;
use super::snake::Direction;
use super::state::{GameState, Screen, TITLE_TRACK};

/// Player intents for a single tick
///
/// The frontend translates raw input events into this struct; the sim never
/// sees keycodes. All fields default to "no intent".
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Begin a gameplay session from the menu
    pub start: bool,
    /// Halt an active session
    pub pause: bool,
    /// Resume a paused session
    pub resume: bool,
    /// Start a fresh session after game over
    pub restart: bool,
    /// Return to the menu after game over
    pub return_to_menu: bool,
    /// Switch to the next colour theme
    pub cycle_theme: bool,
    /// Queue a travel direction for the next commit
    pub direction: Option<Direction>,
    pub speed_up: bool,
    pub speed_down: bool,
}

/// Advance the simulation by one tick of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    apply_input(state, input);
    state.time_ticks += 1;
    match state.screen {
        Screen::MainMenu => menu_tick(state, dt),
        Screen::Running | Screen::Paused | Screen::GameOver => game_tick(state, dt),
    }
}

/// Apply the intents that are legal on the current screen
///
/// Illegal intents (resume on the menu, start during a run) are dropped
/// silently so a frontend can send the full struct every frame.
fn apply_input(state: &mut GameState, input: &TickInput) {
    if input.cycle_theme {
        handle_theme_change(state);
    }
    match state.screen {
        Screen::MainMenu => {
            if input.start {
                state.setup_game();
                return;
            }
            if input.speed_up {
                state.snake.increase_speed(SPEED_STEP);
            }
            if input.speed_down {
                state.snake.decrease_speed(SPEED_STEP);
            }
        }
        Screen::Running => {
            if input.pause {
                state.snake.last_direction = state.snake.direction;
                state.snake.direction = Direction::None;
                state.screen = Screen::Paused;
                log::debug!("paused at score {}", state.score.padded());
                return;
            }
            if let Some(direction) = input.direction {
                state.snake.pending = direction;
            }
            if input.speed_up {
                state.snake.increase_speed(SPEED_STEP);
            }
            if input.speed_down {
                state.snake.decrease_speed(SPEED_STEP);
            }
        }
        Screen::Paused => {
            if input.resume {
                state.snake.direction = state.snake.last_direction;
                state.screen = Screen::Running;
                log::debug!("resumed");
            }
        }
        Screen::GameOver => {
            if input.restart {
                state.setup_game();
            } else if input.return_to_menu {
                state.setup_menu();
                log::debug!("returned to menu");
            }
        }
    }
}

/// Theme switching is legal everywhere; on the menu it also halts the title
/// loop so the palette change reads as a deliberate beat.
fn handle_theme_change(state: &mut GameState) {
    state.cycle_theme();
    if state.screen == Screen::MainMenu && !state.loop_paused {
        state.snake.last_direction = state.snake.direction;
        state.snake.direction = Direction::None;
    }
}

/// Title-screen animation: the snake laps the track and eats the food that
/// keeps being dropped ahead of it, growing up to a fixed cap.
fn menu_tick(state: &mut GameState, dt: f32) {
    if state.snake.direction == Direction::None {
        if !state.loop_started {
            // Initial standstill before the loop sets off.
            state.menu_timer += 1;
            if state.menu_timer >= state.settings.menu_start_delay {
                state.menu_timer = 0;
                state.loop_started = true;
                state.snake.direction = Direction::Left;
            }
        } else {
            // Halted for a theme change; resume on the prior heading.
            state.loop_paused = true;
            state.menu_timer += 1;
            if state.menu_timer >= state.settings.theme_pause {
                state.menu_timer = 0;
                state.loop_paused = false;
                state.snake.direction = state.snake.last_direction;
            }
        }
    }

    if hits_food(state.snake.head_cell(), state.food.position) {
        state.snake.eating = true;
        if state.snake.segments.len() >= state.settings.menu_body_cap {
            state.snake.eating = false;
        }
        state.food.position = place_along_track(
            state.snake.head_cell(),
            state.snake.direction,
            &TITLE_TRACK,
            state.settings.menu_food_lead,
        );
        state.food.spawned += 1;
    }

    state.snake.follow_track(&TITLE_TRACK);
    state.snake.advance(dt);
}

/// Gameplay update: food, walls, self-collision, death flash, motion
///
/// Runs for `Paused` and `GameOver` too; a halted or dead snake has
/// direction `None` and does not move, so the checks are inert there.
fn game_tick(state: &mut GameState, dt: f32) {
    let head = state.snake.head_cell();

    if state.snake.alive && hits_food(head, state.food.position) {
        state.snake.eating = true;
        state.food.eaten += 1;
        state.score.add_food_points();
        log::debug!("food eaten, score {}", state.score.padded());
        state.respawn_food();
        if state.score.check_milestone() {
            state.snake.increase_speed(SPEED_STEP);
            state.snake.raise_min_speed(SPEED_STEP);
            log::info!(
                "milestone at {}: speed floor raised to {}",
                state.score.padded(),
                state.snake.min_speed
            );
        }
    }

    if state.snake.alive
        && (hits_wall(&state.board, head) || hits_own_body(&state.snake.segments))
    {
        state.snake.alive = false;
        state.snake.direction = Direction::None;
        state.snake.pending = Direction::None;
        log::info!("snake died at ({}, {})", head.x, head.y);
    }

    if !state.snake.alive {
        state.snake.tick_flash(state.settings.flash_interval);
        if state.screen != Screen::GameOver {
            state.screen = Screen::GameOver;
            log::info!("game over, final score {}", state.score.padded());
        }
    }

    state.snake.advance(dt);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{MENU_START_DELAY_TICKS, TICK_DT, THEME_PAUSE_TICKS};
    use crate::settings::Settings;
    use crate::sim::snake::Snake;
    use glam::IVec2;

    fn menu_state(seed: u64) -> GameState {
        GameState::new(seed, Settings::default())
    }

    fn running_state(seed: u64) -> GameState {
        let mut state = menu_state(seed);
        state.setup_game();
        state
    }

    fn run_ticks(state: &mut GameState, n: u32) {
        let idle = TickInput::default();
        for _ in 0..n {
            tick(state, &idle, TICK_DT);
        }
    }

    #[test]
    fn test_menu_loop_starts_after_delay() {
        let mut state = menu_state(1);
        run_ticks(&mut state, MENU_START_DELAY_TICKS - 1);
        assert_eq!(state.snake.direction, Direction::None);
        run_ticks(&mut state, 1);
        assert_eq!(state.snake.direction, Direction::Left);
    }

    #[test]
    fn test_menu_snake_laps_the_track() {
        // Long enough for several full laps; the snake must stay on the
        // one-cell-outside path traced by the track corners.
        let mut state = menu_state(2);
        run_ticks(&mut state, 3600);
        assert_eq!(state.screen, Screen::MainMenu);
        let head = state.snake.head_cell();
        let on_path = head.y == 27
            || head.x == 4
            || head.y == 37
            || head.x == 22;
        assert!(on_path, "menu snake left the track at {head}");
        assert_ne!(state.snake.direction, Direction::None);
    }

    #[test]
    fn test_track_corners_queue_turns() {
        let corners = [
            (TITLE_TRACK.bottom_left, Direction::Up),
            (TITLE_TRACK.top_left, Direction::Right),
            (TITLE_TRACK.top_right, Direction::Down),
            (TITLE_TRACK.bottom_right, Direction::Left),
        ];
        for (corner, expected) in corners {
            let mut snake = Snake::new(corner, 12.0, Direction::Left);
            snake.follow_track(&TITLE_TRACK);
            assert_eq!(snake.pending, expected, "corner {corner}");
        }
        // Off-corner cells leave the queued direction alone.
        let mut snake = Snake::new(IVec2::new(10, 27), 12.0, Direction::Left);
        snake.follow_track(&TITLE_TRACK);
        assert_eq!(snake.pending, Direction::None);
    }

    #[test]
    fn test_menu_growth_is_capped() {
        let mut state = menu_state(3);
        let cap = state.settings.menu_body_cap;
        run_ticks(&mut state, 20_000);
        assert_eq!(state.snake.segments.len(), cap);
        assert!(state.food.spawned > 1);
    }

    #[test]
    fn test_theme_change_pauses_menu_loop() {
        let mut state = menu_state(4);
        run_ticks(&mut state, MENU_START_DELAY_TICKS + 30);
        let heading = state.snake.direction;
        assert_ne!(heading, Direction::None);
        let before = state.theme_index;

        let input = TickInput { cycle_theme: true, ..Default::default() };
        tick(&mut state, &input, TICK_DT);
        assert_ne!(state.theme_index, before);
        assert_eq!(state.snake.direction, Direction::None);

        run_ticks(&mut state, THEME_PAUSE_TICKS - 1);
        assert_eq!(state.snake.direction, Direction::None);
        run_ticks(&mut state, 1);
        assert_eq!(state.snake.direction, heading);
        assert!(!state.loop_paused);
    }

    #[test]
    fn test_start_enters_running() {
        let mut state = menu_state(5);
        let input = TickInput { start: true, ..Default::default() };
        tick(&mut state, &input, TICK_DT);
        assert_eq!(state.screen, Screen::Running);
        assert_eq!(state.snake.direction, Direction::Up);
        assert_eq!(state.score.total, 0);
        assert_eq!(state.snake.segments.len(), 3);
    }

    #[test]
    fn test_pause_halts_and_resume_restores() {
        let mut state = running_state(6);
        run_ticks(&mut state, 30);
        let heading = state.snake.direction;

        let pause = TickInput { pause: true, ..Default::default() };
        tick(&mut state, &pause, TICK_DT);
        assert_eq!(state.screen, Screen::Paused);
        assert_eq!(state.snake.direction, Direction::None);

        let frozen = state.snake.head_cell();
        run_ticks(&mut state, 120);
        assert_eq!(state.snake.head_cell(), frozen);

        let resume = TickInput { resume: true, ..Default::default() };
        tick(&mut state, &resume, TICK_DT);
        assert_eq!(state.screen, Screen::Running);
        assert_eq!(state.snake.direction, heading);
    }

    #[test]
    fn test_resume_is_ignored_outside_pause() {
        let mut state = running_state(7);
        let resume = TickInput { resume: true, ..Default::default() };
        tick(&mut state, &resume, TICK_DT);
        assert_eq!(state.screen, Screen::Running);
    }

    #[test]
    fn test_eating_scores_and_respawns_food() {
        let mut state = running_state(8);
        let head = state.snake.head_cell();
        let before = state.snake.segments.len();
        let spawned = state.food.spawned;
        // Plant the food directly in the snake's path.
        state.food.position = head + IVec2::new(0, 1);
        let idle = TickInput::default();
        for _ in 0..60 {
            tick(&mut state, &idle, TICK_DT);
            if state.food.eaten == 1 {
                break;
            }
        }
        assert_eq!(state.food.eaten, 1);
        assert_eq!(state.food.spawned, spawned + 1);
        assert_eq!(state.score.total, state.mode.food_points());
        // Park the food out of the climb so only one meal is counted, then
        // let the growth commit land.
        state.food.position = IVec2::new(state.board.left, state.board.bottom);
        run_ticks(&mut state, 30);
        assert_eq!(state.snake.segments.len(), before + 1);
        assert_eq!(state.score.total, state.mode.food_points());
    }

    #[test]
    fn test_wall_collision_ends_the_run() {
        let mut state = running_state(9);
        // Aim straight up; the top wall is at most 32 cells away.
        run_ticks(&mut state, 3600);
        assert_eq!(state.screen, Screen::GameOver);
        assert!(!state.snake.alive);
        assert_eq!(state.snake.direction, Direction::None);
        assert!(hits_wall(&state.board, state.snake.head_cell()));
    }

    #[test]
    fn test_death_flash_advances_after_game_over() {
        let mut state = running_state(10);
        run_ticks(&mut state, 3600);
        assert_eq!(state.screen, Screen::GameOver);
        let frozen = state.snake.head_cell();
        let flash_interval = state.settings.flash_interval;
        run_ticks(&mut state, flash_interval + 10);
        // The corpse stays put while the flash counter keeps cycling.
        assert_eq!(state.snake.head_cell(), frozen);
        assert!(state.snake.ticks_dead <= state.settings.flash_interval);
    }

    #[test]
    fn test_restart_and_menu_return_from_game_over() {
        let mut state = running_state(11);
        run_ticks(&mut state, 3600);
        assert_eq!(state.screen, Screen::GameOver);

        let restart = TickInput { restart: true, ..Default::default() };
        tick(&mut state, &restart, TICK_DT);
        assert_eq!(state.screen, Screen::Running);
        assert!(state.snake.alive);
        assert_eq!(state.score.total, 0);

        run_ticks(&mut state, 3600);
        assert_eq!(state.screen, Screen::GameOver);
        let back = TickInput { return_to_menu: true, ..Default::default() };
        tick(&mut state, &back, TICK_DT);
        assert_eq!(state.screen, Screen::MainMenu);
        assert_eq!(state.snake.direction, Direction::None);
    }

    #[test]
    fn test_direction_input_ignored_while_paused() {
        let mut state = running_state(12);
        let pause = TickInput { pause: true, ..Default::default() };
        tick(&mut state, &pause, TICK_DT);

        let steer = TickInput { direction: Some(Direction::Left), ..Default::default() };
        tick(&mut state, &steer, TICK_DT);
        assert_eq!(state.snake.pending, Direction::None);
    }

    #[test]
    fn test_same_seed_same_story() {
        let script = |state: &mut GameState| {
            tick(state, &TickInput { start: true, ..Default::default() }, TICK_DT);
            for i in 0..600u32 {
                let mut input = TickInput::default();
                if i == 50 {
                    input.direction = Some(Direction::Right);
                }
                if i == 200 {
                    input.direction = Some(Direction::Down);
                }
                if i == 300 {
                    input.speed_up = true;
                }
                tick(state, &input, TICK_DT);
            }
        };
        let mut a = menu_state(42);
        let mut b = menu_state(42);
        script(&mut a);
        script(&mut b);
        assert_eq!(a.snake.segments, b.snake.segments);
        assert_eq!(a.snake.head, b.snake.head);
        assert_eq!(a.food.position, b.food.position);
        assert_eq!(a.score.total, b.score.total);
        assert_eq!(a.screen, b.screen);
    }
}

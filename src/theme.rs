//! Colour themes
//!
//! The core treats colours as opaque tokens; the rendering collaborator maps
//! each named role to whatever its pipeline needs. Themes are fixed structs
//! rather than keyed tables so a missing role cannot slip through.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// An opaque RGB colour token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// One colour per semantic role in the game's presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    /// Window background; the death flash repaints the snake in this colour
    pub bg: Rgb,
    /// Border wall
    pub fg: Rgb,
    pub board: Rgb,
    pub head: Rgb,
    pub eye: Rgb,
    pub pupil: Rgb,
    /// Body segments band through these three colours in turn
    pub body_1: Rgb,
    pub body_2: Rgb,
    pub body_3: Rgb,
    pub snake_border: Rgb,
    pub food: Rgb,
    pub food_border: Rgb,
    pub scoreboard: Rgb,
    pub score_text: Rgb,
    pub score_num: Rgb,
    pub game_over: Rgb,
    pub small_text: Rgb,
    /// One colour per letter of the title
    pub title: [Rgb; 5],
    pub subtitle: Rgb,
}

const BLACK: Rgb = Rgb(0, 0, 0);
const WHITE: Rgb = Rgb(255, 255, 255);

// CMYK palette
const CYAN: Rgb = Rgb(0, 174, 239);
const MAGENTA: Rgb = Rgb(236, 0, 140);
const YELLOW: Rgb = Rgb(255, 242, 0);

// Glamour palette
const GLAMOUR_HIGHLIGHT: Rgb = Rgb(254, 246, 248);
const GLAMOUR_LOWLIGHT: Rgb = Rgb(254, 150, 183);
const GLAMOUR_PALE: Rgb = Rgb(255, 200, 212);
const GLAMOUR_PINK_LIGHT: Rgb = Rgb(253, 0, 97);
const GLAMOUR_PINK_MID: Rgb = Rgb(219, 0, 84);
const GLAMOUR_PINK_DARK: Rgb = Rgb(184, 0, 71);

// Greyscale palette
const GREY_25: Rgb = Rgb(191, 191, 191);
const GREY_50: Rgb = Rgb(128, 128, 128);
const GREY_75: Rgb = Rgb(64, 64, 64);

// Jungle palette
const JUNGLE_GREEN_1: Rgb = Rgb(0, 255, 145);
const JUNGLE_GREEN_2: Rgb = Rgb(160, 255, 145);
const JUNGLE_GREEN_3: Rgb = Rgb(215, 255, 145);
const JUNGLE_PURPLE: Rgb = Rgb(34, 4, 70);
const JUNGLE_PURPLE_TINT: Rgb = Rgb(89, 67, 116);

// Medals palette
const MEDALS_BRONZE: Rgb = Rgb(238, 96, 52);
const MEDALS_GOLD: Rgb = Rgb(255, 194, 40);
const MEDALS_GREY: Rgb = Rgb(31, 31, 31);
const MEDALS_GREY_TINT: Rgb = Rgb(87, 87, 87);
const MEDALS_SILVER: Rgb = Rgb(198, 202, 214);

// Mobile palette
const MOBILE_ARMY: Rgb = Rgb(38, 50, 4);
const MOBILE_LIME: Rgb = Rgb(167, 204, 0);

// Scuba palette
const SCUBA_BLUE: Rgb = Rgb(3, 3, 56);
const SCUBA_BLUE_TINT: Rgb = Rgb(66, 66, 106);
const SCUBA_CORAL_AQUA: Rgb = Rgb(0, 213, 198);
const SCUBA_CORAL_PINK: Rgb = Rgb(255, 118, 195);
const SCUBA_CORAL_ORANGE: Rgb = Rgb(255, 166, 93);

pub const JUNGLE: Theme = Theme {
    name: "jungle",
    bg: JUNGLE_PURPLE,
    fg: JUNGLE_PURPLE_TINT,
    board: JUNGLE_PURPLE,
    head: JUNGLE_GREEN_1,
    eye: JUNGLE_GREEN_1,
    pupil: JUNGLE_PURPLE,
    body_1: JUNGLE_GREEN_2,
    body_2: JUNGLE_GREEN_3,
    body_3: JUNGLE_GREEN_1,
    snake_border: JUNGLE_PURPLE,
    food: WHITE,
    food_border: JUNGLE_PURPLE,
    scoreboard: JUNGLE_PURPLE,
    score_text: JUNGLE_GREEN_1,
    score_num: WHITE,
    game_over: JUNGLE_GREEN_1,
    small_text: WHITE,
    title: [
        JUNGLE_GREEN_1,
        JUNGLE_GREEN_2,
        JUNGLE_GREEN_3,
        JUNGLE_GREEN_2,
        JUNGLE_GREEN_1,
    ],
    subtitle: WHITE,
};

pub const SCUBA: Theme = Theme {
    name: "scuba",
    bg: SCUBA_BLUE,
    fg: SCUBA_BLUE_TINT,
    board: SCUBA_BLUE,
    head: SCUBA_CORAL_AQUA,
    eye: SCUBA_CORAL_AQUA,
    pupil: SCUBA_BLUE,
    body_1: SCUBA_CORAL_ORANGE,
    body_2: SCUBA_CORAL_PINK,
    body_3: SCUBA_CORAL_AQUA,
    snake_border: SCUBA_BLUE,
    food: WHITE,
    food_border: SCUBA_BLUE,
    scoreboard: SCUBA_BLUE,
    score_text: SCUBA_CORAL_AQUA,
    score_num: WHITE,
    game_over: SCUBA_CORAL_AQUA,
    small_text: WHITE,
    title: [
        SCUBA_CORAL_AQUA,
        SCUBA_CORAL_ORANGE,
        SCUBA_CORAL_PINK,
        SCUBA_CORAL_ORANGE,
        SCUBA_CORAL_AQUA,
    ],
    subtitle: WHITE,
};

pub const MEDALS: Theme = Theme {
    name: "medals",
    bg: MEDALS_GREY,
    fg: MEDALS_GREY_TINT,
    board: MEDALS_GREY,
    head: MEDALS_GOLD,
    eye: MEDALS_GOLD,
    pupil: MEDALS_GREY,
    body_1: MEDALS_SILVER,
    body_2: MEDALS_BRONZE,
    body_3: MEDALS_GOLD,
    snake_border: MEDALS_GREY,
    food: WHITE,
    food_border: MEDALS_GREY,
    scoreboard: MEDALS_GREY,
    score_text: MEDALS_GOLD,
    score_num: WHITE,
    game_over: MEDALS_GOLD,
    small_text: WHITE,
    title: [
        MEDALS_GOLD,
        MEDALS_SILVER,
        MEDALS_BRONZE,
        MEDALS_SILVER,
        MEDALS_GOLD,
    ],
    subtitle: WHITE,
};

pub const CMYK: Theme = Theme {
    name: "cmyk",
    bg: BLACK,
    fg: GREY_75,
    board: BLACK,
    head: CYAN,
    eye: CYAN,
    pupil: BLACK,
    body_1: MAGENTA,
    body_2: YELLOW,
    body_3: CYAN,
    snake_border: BLACK,
    food: WHITE,
    food_border: BLACK,
    scoreboard: BLACK,
    score_text: CYAN,
    score_num: WHITE,
    game_over: CYAN,
    small_text: WHITE,
    title: [CYAN, MAGENTA, YELLOW, MAGENTA, CYAN],
    subtitle: WHITE,
};

pub const GREYSCALE: Theme = Theme {
    name: "greyscale",
    bg: BLACK,
    fg: GREY_75,
    board: BLACK,
    head: WHITE,
    eye: WHITE,
    pupil: BLACK,
    body_1: GREY_25,
    body_2: GREY_50,
    body_3: WHITE,
    snake_border: BLACK,
    food: WHITE,
    food_border: BLACK,
    scoreboard: BLACK,
    score_text: GREY_25,
    score_num: WHITE,
    game_over: GREY_25,
    small_text: WHITE,
    title: [WHITE, GREY_25, GREY_50, GREY_25, WHITE],
    subtitle: WHITE,
};

pub const GLAMOUR: Theme = Theme {
    name: "glamour",
    bg: GLAMOUR_PALE,
    fg: GLAMOUR_LOWLIGHT,
    board: GLAMOUR_PALE,
    head: GLAMOUR_PINK_LIGHT,
    eye: GLAMOUR_PINK_LIGHT,
    pupil: GLAMOUR_PALE,
    body_1: GLAMOUR_PINK_MID,
    body_2: GLAMOUR_PINK_DARK,
    body_3: GLAMOUR_PINK_LIGHT,
    snake_border: GLAMOUR_PALE,
    food: GLAMOUR_HIGHLIGHT,
    food_border: GLAMOUR_PALE,
    scoreboard: GLAMOUR_PALE,
    score_text: GLAMOUR_PINK_LIGHT,
    score_num: GLAMOUR_HIGHLIGHT,
    game_over: GLAMOUR_PINK_LIGHT,
    small_text: GLAMOUR_PINK_DARK,
    title: [
        GLAMOUR_PINK_LIGHT,
        GLAMOUR_PINK_MID,
        GLAMOUR_PINK_DARK,
        GLAMOUR_PINK_MID,
        GLAMOUR_PINK_LIGHT,
    ],
    subtitle: GLAMOUR_HIGHLIGHT,
};

pub const MOBILE: Theme = Theme {
    name: "mobile",
    bg: MOBILE_LIME,
    fg: MOBILE_ARMY,
    board: MOBILE_LIME,
    head: MOBILE_ARMY,
    eye: MOBILE_ARMY,
    pupil: MOBILE_LIME,
    body_1: MOBILE_ARMY,
    body_2: MOBILE_ARMY,
    body_3: MOBILE_ARMY,
    snake_border: MOBILE_LIME,
    food: MOBILE_ARMY,
    food_border: MOBILE_LIME,
    scoreboard: MOBILE_ARMY,
    score_text: MOBILE_LIME,
    score_num: MOBILE_LIME,
    game_over: MOBILE_ARMY,
    small_text: MOBILE_ARMY,
    title: [
        MOBILE_ARMY,
        MOBILE_ARMY,
        MOBILE_ARMY,
        MOBILE_ARMY,
        MOBILE_ARMY,
    ],
    subtitle: MOBILE_ARMY,
};

/// All themes, ordered for in-application cycling
pub const THEMES: [Theme; 7] = [JUNGLE, SCUBA, MEDALS, CMYK, GREYSCALE, GLAMOUR, MOBILE];

/// The theme after `index`, wrapping around the list
pub fn next_index(index: usize) -> usize {
    (index + 1) % THEMES.len()
}

/// A random theme index different from the one in use
pub fn random_index<R: Rng>(rng: &mut R, current: usize) -> usize {
    loop {
        let pick = rng.random_range(0..THEMES.len());
        if pick != current {
            return pick;
        }
    }
}

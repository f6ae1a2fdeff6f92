/// Glyph art for every sprite set. Spaces are transparent.

use crate::entities::{Facing, FireDirection, SpriteSet};

const PLANE_NEUTRAL: &[&str] = &["  ▲  ", "◄███►", " /█\\ "];
const PLANE_UP: &[&str] = &["  ▲  ", " /█\\ ", "/ █ \\"];
const PLANE_DOWN: &[&str] = &["\\ █ /", " \\█/ ", "  ▼  "];
const PLANE_LEFT: &[&str] = &[" ◄█  ", "◄███═", " ◄█  "];
const PLANE_RIGHT: &[&str] = &["  █► ", "═███►", "  █► "];

const RAIDER: &[&str] = &["«▼»", "╚═╝"];
const CRATE: &[&str] = &["┌──┐", "│╳╳│", "└──┘"];
const HEART: &[&str] = &["♥"];

const BULLET_UP: &str = "║";
const BULLET_DOWN: &str = "↓";

const EXPLOSION_STAGES: &[&[&str]] = &[
    &["*"],
    &[" * ", "*#*", " * "],
    &[" \\|/ ", "-*#*-", " /|\\ "],
    &["\\ | /", " *#* ", "-#@#-", " *#* ", "/ | \\"],
    &[".  '  .", " ' . ' ", ".  *  .", " ' . ' ", ".  '  ."],
];

pub fn art(set: SpriteSet, facing: Facing) -> &'static [&'static str] {
    match set {
        SpriteSet::Plane => match facing {
            Facing::Neutral => PLANE_NEUTRAL,
            Facing::Up => PLANE_UP,
            Facing::Down => PLANE_DOWN,
            Facing::Left => PLANE_LEFT,
            Facing::Right => PLANE_RIGHT,
        },
        SpriteSet::Raider => RAIDER,
        SpriteSet::Crate => CRATE,
        SpriteSet::Heart => HEART,
    }
}

pub fn bullet(direction: FireDirection) -> &'static str {
    match direction {
        FireDirection::Up => BULLET_UP,
        FireDirection::Down => BULLET_DOWN,
    }
}

/// Spread the sheet's frames evenly over the available stages.
pub fn explosion(frame: u32, frame_count: u32) -> &'static [&'static str] {
    let stages = EXPLOSION_STAGES.len();
    let idx = if frame_count == 0 {
        0
    } else {
        (frame as usize * stages / frame_count as usize).min(stages - 1)
    };
    EXPLOSION_STAGES[idx]
}

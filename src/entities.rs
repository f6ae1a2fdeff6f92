/// All game entity types — plain data plus the per-kind tuning tables.
///
/// Behaviour lives in `motion` (per-entity) and `collision` / `compute`
/// (whole-world).

use std::ops::{BitOr, BitOrAssign};

use crate::audio::SoundCue;
use crate::timer::Ticker;
use crate::vector::Vec2;

// ── World geometry ────────────────────────────────────────────────────────────

pub const SCREEN_WIDTH: f64 = 800.0;
pub const SCREEN_HEIGHT: f64 = 600.0;

/// Right edge used by the soft push-back rule.
pub const RIGHT_BOUND: f64 = 780.0;
/// Bottom edge used by the soft push-back rule.
pub const BOTTOM_BOUND: f64 = 560.0;
/// The enemy is confined to the upper part of the screen.
pub const ENEMY_BOTTOM_BOUND: f64 = 260.0;

// ── Tuning ────────────────────────────────────────────────────────────────────

pub const START_LIVES: i32 = 10;
pub const BULLET_SPEED: f64 = 1000.0;

pub const EXPLOSION_FRAMES: u32 = 15;
pub const EXPLOSION_FRAME_SIZE: f64 = 128.0;
/// Seconds between explosion animation ticks.
pub const EXPLOSION_TICK: f64 = 0.25;

/// Engine sound hysteresis band, in units/sec.
pub const ENGINE_START_SPEED: f64 = 35.0;
pub const ENGINE_STOP_SPEED: f64 = 25.0;
/// Seconds between cabin hum cues while the engine runs.
pub const ENGINE_CABIN_INTERVAL: f64 = 1.0;

// ── Direction mask ────────────────────────────────────────────────────────────

/// Bitwise combination of movement requests for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Direction(u8);

impl Direction {
    pub const NONE: Direction = Direction(0);
    pub const FORWARD: Direction = Direction(1);
    pub const BACKWARD: Direction = Direction(2);
    pub const LEFT: Direction = Direction(4);
    pub const RIGHT: Direction = Direction(8);

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn contains(self, other: Direction) -> bool {
        self.0 & other.0 == other.0 && other.0 != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Direction {
    type Output = Direction;

    fn bitor(self, rhs: Direction) -> Direction {
        Direction(self.0 | rhs.0)
    }
}

impl BitOrAssign for Direction {
    fn bitor_assign(&mut self, rhs: Direction) {
        self.0 |= rhs.0;
    }
}

// ── Entity kinds & configuration ──────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Player,
    Player2,
    Enemy,
    Crate,
    Lives,
}

/// Which glyph family draws the entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpriteSet {
    Plane,
    Raider,
    Crate,
    Heart,
}

/// Directional sprite variant selected with the numpad.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Facing {
    #[default]
    Neutral,
    Up,
    Down,
    Left,
    Right,
}

/// Which way a twin cannon fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FireDirection {
    Up,
    Down,
}

/// Twin-cannon layout for bullet-capable entities.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cannon {
    pub direction: FireDirection,
    /// Horizontal offsets of the two muzzles from the entity centre.
    pub muzzle_x: [f64; 2],
    /// Vertical offset of both muzzles from the entity centre.
    pub muzzle_y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntityConfig {
    pub acceleration: f64,
    pub right_bound: f64,
    pub bottom_bound: f64,
    pub sprite: SpriteSet,
    pub width: f64,
    pub height: f64,
    pub cannon: Option<Cannon>,
}

const PLAYER_CANNON: Cannon = Cannon {
    direction: FireDirection::Up,
    muzzle_x: [-15.0, 10.0],
    muzzle_y: -30.0,
};

const ENEMY_CANNON: Cannon = Cannon {
    direction: FireDirection::Down,
    muzzle_x: [-15.0, 10.0],
    muzzle_y: 35.0,
};

pub const BULLET_WIDTH: f64 = 10.0;
pub const BULLET_HEIGHT: f64 = 20.0;

fn acceleration(kind: EntityKind) -> f64 {
    match kind {
        EntityKind::Player => 3.1,
        EntityKind::Player2 => 5.1,
        EntityKind::Enemy => 0.1,
        EntityKind::Crate => 0.2,
        EntityKind::Lives => 0.2,
    }
}

fn bottom_bound(kind: EntityKind) -> f64 {
    match kind {
        EntityKind::Enemy => ENEMY_BOTTOM_BOUND,
        _ => BOTTOM_BOUND,
    }
}

impl EntityConfig {
    pub fn for_kind(kind: EntityKind) -> Self {
        let (sprite, width, height, cannon) = match kind {
            EntityKind::Player | EntityKind::Player2 => {
                (SpriteSet::Plane, 64.0, 64.0, Some(PLAYER_CANNON))
            }
            EntityKind::Enemy => (SpriteSet::Raider, 40.0, 40.0, Some(ENEMY_CANNON)),
            EntityKind::Crate => (SpriteSet::Crate, 64.0, 64.0, None),
            EntityKind::Lives => (SpriteSet::Heart, 32.0, 32.0, None),
        };
        EntityConfig {
            acceleration: acceleration(kind),
            right_bound: RIGHT_BOUND,
            bottom_bound: bottom_bound(kind),
            sprite,
            width,
            height,
            cannon,
        }
    }
}

// ── Sprites ───────────────────────────────────────────────────────────────────

/// A positioned, moving rectangle. Position is the centre.
#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    pub position: Vec2,
    pub velocity: Vec2,
    pub width: f64,
    pub height: f64,
}

impl Sprite {
    pub fn new(width: f64, height: f64) -> Self {
        Sprite {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            width,
            height,
        }
    }
}

/// A sprite sheet played one frame per tick.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimatedSprite {
    pub position: Vec2,
    pub frame: u32,
    pub frame_count: u32,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExplosionState {
    #[default]
    Idle,
    Exploding,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpeedState {
    #[default]
    Stopped,
    Started,
}

/// The two reusable bullet slots of a twin cannon.
#[derive(Clone, Debug, PartialEq)]
pub struct Bullets {
    pub cannon: Cannon,
    pub slots: [Sprite; 2],
    pub in_flight: bool,
}

// ── Moving entity ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct MovingEntity {
    pub kind: EntityKind,
    pub config: EntityConfig,
    pub sprite: Sprite,
    pub facing: Facing,
    pub explosion: AnimatedSprite,
    pub explosion_state: ExplosionState,
    /// Index of the next explosion frame to show.
    pub explosion_counter: u32,
    /// Drives `advance_explosion` while exploding.
    pub ticker: Ticker,
    pub bullets: Option<Bullets>,
    pub speed_state: SpeedState,
    /// Seconds since the last engine cue.
    pub cue_timer: f64,
    /// Cues raised since the controller last drained them.
    pub cues: Vec<SoundCue>,
}

// ── Session & world ───────────────────────────────────────────────────────────

/// Lives and score, threaded through the collision engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Session {
    pub lives: i32,
    pub score: i32,
}

impl Default for Session {
    fn default() -> Self {
        Session {
            lives: START_LIVES,
            score: 0,
        }
    }
}

/// Everything the game loop owns.
#[derive(Clone, Debug)]
pub struct World {
    pub player: MovingEntity,
    pub player2: MovingEntity,
    pub enemy: MovingEntity,
    pub crates: [MovingEntity; 2],
    pub heart: MovingEntity,
    /// Vertical scroll of the background, in world units.
    pub background_offset: f64,
    pub session: Session,
    pub frame: u64,
}

impl World {
    pub fn entities(&self) -> [&MovingEntity; 6] {
        [
            &self.player,
            &self.player2,
            &self.crates[0],
            &self.crates[1],
            &self.enemy,
            &self.heart,
        ]
    }

    pub fn entities_mut(&mut self) -> [&mut MovingEntity; 6] {
        let [crate_a, crate_b] = &mut self.crates;
        [
            &mut self.player,
            &mut self.player2,
            crate_a,
            crate_b,
            &mut self.enemy,
            &mut self.heart,
        ]
    }
}

/// Whole-world game logic: world construction and the per-frame sequence.
///
/// The terminal host in `main` owns events and presenting. Apart from the
/// save file, everything here works on plain values so it can be driven from
/// tests with a seeded `AiDriver` and a fixed `dt`.

use std::path::Path;

use crate::ai::{AiDriver, AiMoves};
use crate::assets::Background;
use crate::audio::SoundCue;
use crate::collision::{resolve_collisions, CollisionReport};
use crate::display::{draw_world, BackBuffer};
use crate::entities::{EntityKind, MovingEntity, Session, World, SCREEN_HEIGHT};
use crate::input::{Action, FrameInput};
use crate::save::{load_into_world, save_world};
use crate::vector::Vec2;

// ── Starting layout ───────────────────────────────────────────────────────────

pub const PLAYER_START: Vec2 = Vec2::new(400.0, 400.0);
pub const PLAYER2_START: Vec2 = Vec2::new(100.0, 400.0);
pub const ENEMY_START: Vec2 = Vec2::new(300.0, 200.0);
pub const CRATE_STARTS: [Vec2; 2] = [Vec2::new(200.0, 100.0), Vec2::new(600.0, 50.0)];
pub const HEART_START: Vec2 = Vec2::new(400.0, 200.0);

/// Background scroll per frame, in world units.
pub const BACKGROUND_SCROLL: f64 = 2.0;
/// Where the scroll offset restarts once it reaches the screen height.
pub const BACKGROUND_WRAP_TO: f64 = -120.0;

pub fn init_world() -> World {
    World {
        player: MovingEntity::new(EntityKind::Player, PLAYER_START),
        player2: MovingEntity::new(EntityKind::Player2, PLAYER2_START),
        enemy: MovingEntity::new(EntityKind::Enemy, ENEMY_START),
        crates: [
            MovingEntity::new(EntityKind::Crate, CRATE_STARTS[0]),
            MovingEntity::new(EntityKind::Crate, CRATE_STARTS[1]),
        ],
        heart: MovingEntity::new(EntityKind::Lives, HEART_START),
        background_offset: 0.0,
        session: Session::default(),
        frame: 0,
    }
}

// ── Input-driven transitions ──────────────────────────────────────────────────

/// Apply an edge-triggered action. `Quit` is the host's business.
pub fn apply_action(world: &mut World, action: Action) {
    match action {
        Action::PlayerShoot => world.player.shoot(),
        Action::Player2Shoot => world.player2.shoot(),
        Action::ExplodePlayer => world.player.trigger_explosion(),
        Action::ExplodePlayer2 => world.player2.trigger_explosion(),
        Action::Quit => {}
    }
}

/// Feed this frame's direction masks to every entity.
pub fn move_entities(world: &mut World, input: &FrameInput, ai: &AiMoves) {
    world.player.move_by(input.player);
    world.player2.move_by(input.player2);
    world.enemy.move_by(ai.enemy);
    if ai.enemy_shoots {
        world.enemy.shoot();
    }
    world.crates[0].move_by(ai.crates[0]);
    world.crates[1].move_by(ai.crates[1]);
    world.heart.move_by(ai.heart);

    if let Some(facing) = input.facing {
        world.player.face(facing);
    }
}

/// Handle the save (M) and load (L) keys. Failures are logged and leave the
/// world as it was.
pub fn persist_positions(world: &mut World, input: &FrameInput, save_file: &Path) {
    if input.save {
        match save_world(save_file, world) {
            Ok(()) => tracing::info!(path = %save_file.display(), "positions saved"),
            Err(err) => tracing::warn!("save failed: {err}"),
        }
    }
    if input.load {
        match load_into_world(save_file, world) {
            Ok(()) => tracing::info!(path = %save_file.display(), "positions loaded"),
            Err(err) => tracing::warn!("load failed, positions unchanged: {err}"),
        }
    }
}

pub fn update_entities(world: &mut World, dt: f64) {
    for entity in world.entities_mut() {
        entity.update(dt);
    }
}

/// Advance every running explosion ticker by `dt`.
pub fn tick_explosions(world: &mut World, dt: f64) {
    for entity in world.entities_mut() {
        entity.tick_explosion(dt);
    }
}

/// Scroll the background and wrap it back above the screen.
pub fn scroll_background(world: &mut World) {
    world.background_offset += BACKGROUND_SCROLL;
    if world.background_offset >= SCREEN_HEIGHT {
        world.background_offset = BACKGROUND_WRAP_TO;
    }
}

pub fn drain_cues(world: &mut World) -> Vec<SoundCue> {
    world
        .entities_mut()
        .into_iter()
        .flat_map(|e| e.drain_cues())
        .collect()
}

// ── Per-frame sequence ────────────────────────────────────────────────────────

/// What happened during one frame, for the host to act on.
#[derive(Debug, Default)]
pub struct FrameOutcome {
    pub collisions: CollisionReport,
    pub cues: Vec<SoundCue>,
}

/// Run one frame: move, save/load, update, explosion ticks, draw,
/// collisions.
///
/// Edge-triggered actions must already have been applied with
/// `apply_action`; the host presents `buffer` afterwards.
pub fn advance_frame(
    world: &mut World,
    input: &FrameInput,
    dt: f64,
    ai: &mut AiDriver,
    buffer: &mut BackBuffer,
    background: &Background,
    save_file: &Path,
) -> FrameOutcome {
    world.frame += 1;

    let moves = ai.roll();
    move_entities(world, input, &moves);
    persist_positions(world, input, save_file);
    update_entities(world, dt);
    tick_explosions(world, dt);

    draw_world(buffer, world, background);
    scroll_background(world);

    let session = world.session;
    let (session, collisions) = resolve_collisions(world, session);
    world.session = session;

    FrameOutcome {
        collisions,
        cues: drain_cues(world),
    }
}

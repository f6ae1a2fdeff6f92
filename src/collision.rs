/// Collision & scoring engine.
///
/// Sprites are treated as circles whose diameter is their width. Each check
/// reports at most one hit per frame; all checks run every frame in a fixed
/// order and every hit they report is applied.

use crate::entities::{MovingEntity, Session, World};
use crate::vector::Vec2;

/// Circle-overlap test used by every pair check.
pub fn hits(a: Vec2, a_width: f64, b: Vec2, b_width: f64) -> bool {
    a.distance(b) <= (a_width + b_width) / 2.0
}

/// Which checks fired during one collision pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub players_collided: bool,
    pub player_hit_crate: bool,
    pub bullet_hit_crate: bool,
    pub bullet_hit_enemy: bool,
    pub enemy_hit_player: bool,
    pub life_collected: bool,
}

impl CollisionReport {
    pub fn any(&self) -> bool {
        self.players_collided
            || self.player_hit_crate
            || self.bullet_hit_crate
            || self.bullet_hit_enemy
            || self.enemy_hit_player
            || self.life_collected
    }
}

fn body_hits(a: &MovingEntity, b: &MovingEntity) -> bool {
    hits(a.position(), a.width(), b.position(), b.width())
}

fn bullet_hits(shooter: &MovingEntity, target: &MovingEntity) -> bool {
    match (shooter.bullet_position(), shooter.bullet_width()) {
        (Some(pos), Some(width)) => hits(pos, width, target.position(), target.width()),
        _ => false,
    }
}

fn explode_if_idle(entity: &mut MovingEntity) {
    if !entity.is_exploding() {
        entity.trigger_explosion();
    }
}

// ── Individual checks (in pass order) ─────────────────────────────────────────

/// Mutual kill between the two players.
pub fn check_players(world: &mut World) -> bool {
    let (p1, p2) = (&mut world.player, &mut world.player2);
    if !p1.is_exploding() && !p2.is_exploding() && body_hits(p1, p2) {
        p1.trigger_explosion();
        p2.trigger_explosion();
        return true;
    }
    false
}

/// Player rams a crate; both blow up.
pub fn check_player_crates(world: &mut World) -> bool {
    for crate_ in world.crates.iter_mut() {
        if !crate_.is_exploding() && body_hits(&world.player, crate_) {
            crate_.trigger_explosion();
            explode_if_idle(&mut world.player);
            return true;
        }
    }
    false
}

/// Player's bullet destroys a crate.
pub fn check_bullet_crates(world: &mut World) -> bool {
    for crate_ in world.crates.iter_mut() {
        if !crate_.is_exploding() && bullet_hits(&world.player, crate_) {
            crate_.trigger_explosion();
            return true;
        }
    }
    false
}

/// Player's bullet destroys the enemy.
pub fn check_bullet_enemy(world: &mut World) -> bool {
    if !world.enemy.is_exploding() && bullet_hits(&world.player, &world.enemy) {
        world.enemy.trigger_explosion();
        return true;
    }
    false
}

/// Enemy body, then enemy bullet, against the player.
pub fn check_enemy_player(world: &mut World) -> bool {
    if world.player.is_exploding() {
        return false;
    }
    if body_hits(&world.enemy, &world.player) || bullet_hits(&world.enemy, &world.player) {
        world.player.trigger_explosion();
        return true;
    }
    false
}

/// Player picks up the extra life.
pub fn check_life_pickup(world: &mut World) -> bool {
    if !world.heart.is_exploding() && body_hits(&world.player, &world.heart) {
        world.heart.trigger_explosion();
        return true;
    }
    false
}

// ── Full pass ─────────────────────────────────────────────────────────────────

/// Run every check once and return the session with the lives/score deltas
/// applied.
pub fn resolve_collisions(world: &mut World, session: Session) -> (Session, CollisionReport) {
    let report = CollisionReport {
        players_collided: check_players(world),
        player_hit_crate: check_player_crates(world),
        bullet_hit_crate: check_bullet_crates(world),
        bullet_hit_enemy: check_bullet_enemy(world),
        enemy_hit_player: check_enemy_player(world),
        life_collected: check_life_pickup(world),
    };

    let mut next = session;
    if report.player_hit_crate {
        next.lives -= 1;
    }
    if report.bullet_hit_crate {
        next.score += 1;
    }
    if report.bullet_hit_enemy {
        next.score += 1;
    }
    if report.enemy_hit_player {
        next.lives -= 1;
    }
    if report.life_collected {
        next.lives += 1;
    }

    if report.any() {
        tracing::debug!(?report, lives = next.lives, score = next.score, "collisions");
    }
    (next, report)
}

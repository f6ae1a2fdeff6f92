/// Random drift for the non-player entities.
///
/// One die roll per frame picks a direction for the enemy, both crates and
/// the life pickup at once; rolls 2 and 4 also make the enemy fire.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::entities::Direction;

/// Directions chosen for one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AiMoves {
    pub roll: u8,
    pub enemy: Direction,
    pub crates: [Direction; 2],
    pub heart: Direction,
    pub enemy_shoots: bool,
}

/// Map a die roll in `1..=4` to this frame's moves.
pub fn moves_for_roll(roll: u8) -> AiMoves {
    use Direction as D;
    let (enemy, crate_a, crate_b, heart, enemy_shoots) = match roll {
        1 => (D::FORWARD, D::LEFT, D::BACKWARD, D::FORWARD, false),
        2 => (D::BACKWARD, D::FORWARD, D::RIGHT, D::RIGHT, true),
        3 => (D::LEFT, D::RIGHT, D::LEFT, D::BACKWARD, false),
        4 => (D::RIGHT, D::BACKWARD, D::FORWARD, D::LEFT, true),
        _ => (D::NONE, D::NONE, D::NONE, D::NONE, false),
    };
    AiMoves {
        roll,
        enemy,
        crates: [crate_a, crate_b],
        heart,
        enemy_shoots,
    }
}

/// How the die is seeded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Seeding {
    /// Seed once; rolls vary frame to frame.
    Once,
    /// Reseed from the wall-clock second before every roll, so every frame
    /// within the same second rolls the same number.
    EveryFrame,
}

pub struct AiDriver {
    rng: StdRng,
    seeding: Seeding,
}

fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

impl AiDriver {
    pub fn new(seed: Option<u64>, seeding: Seeding) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        AiDriver { rng, seeding }
    }

    /// Deterministic driver for tests and replays.
    pub fn seeded(seed: u64) -> Self {
        Self::new(Some(seed), Seeding::Once)
    }

    pub fn roll(&mut self) -> AiMoves {
        if self.seeding == Seeding::EveryFrame {
            self.rng = StdRng::seed_from_u64(wall_clock_seed());
        }
        moves_for_roll(self.rng.gen_range(1..=4))
    }
}

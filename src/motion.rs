/// Per-entity behaviour: movement, integration, engine sound, explosions
/// and the twin cannon.

use crate::audio::SoundCue;
use crate::entities::{
    AnimatedSprite, Bullets, Direction, EntityConfig, EntityKind, ExplosionState, Facing,
    FireDirection, MovingEntity, SpeedState, Sprite, BULLET_HEIGHT, BULLET_SPEED,
    BULLET_WIDTH, ENGINE_CABIN_INTERVAL, ENGINE_START_SPEED, ENGINE_STOP_SPEED,
    EXPLOSION_FRAMES, EXPLOSION_FRAME_SIZE, EXPLOSION_TICK, SCREEN_HEIGHT,
};
use crate::timer::Ticker;
use crate::vector::Vec2;

/// Where idle bullets wait: just past the edge they fly towards, so the
/// first shot always counts as "off screen".
fn parked_bullet_y(direction: FireDirection) -> f64 {
    match direction {
        FireDirection::Up => -BULLET_HEIGHT,
        FireDirection::Down => SCREEN_HEIGHT + BULLET_HEIGHT,
    }
}

impl MovingEntity {
    pub fn new(kind: EntityKind, position: Vec2) -> Self {
        let config = EntityConfig::for_kind(kind);
        let mut sprite = Sprite::new(config.width, config.height);
        sprite.position = position;

        let bullets = config.cannon.map(|cannon| {
            let mut slot = Sprite::new(BULLET_WIDTH, BULLET_HEIGHT);
            slot.position = Vec2::new(position.x, parked_bullet_y(cannon.direction));
            Bullets {
                cannon,
                slots: [slot.clone(), slot],
                in_flight: false,
            }
        });

        MovingEntity {
            kind,
            config,
            sprite,
            facing: Facing::Neutral,
            explosion: AnimatedSprite {
                position,
                frame: 0,
                frame_count: EXPLOSION_FRAMES,
                width: EXPLOSION_FRAME_SIZE,
                height: EXPLOSION_FRAME_SIZE,
            },
            explosion_state: ExplosionState::Idle,
            explosion_counter: 0,
            ticker: Ticker::new(EXPLOSION_TICK),
            bullets,
            speed_state: SpeedState::Stopped,
            cue_timer: 0.0,
            cues: Vec::new(),
        }
    }

    pub fn position(&self) -> Vec2 {
        self.sprite.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.sprite.velocity
    }

    pub fn width(&self) -> f64 {
        self.sprite.width
    }

    /// Position of the first bullet slot, the one collisions look at.
    pub fn bullet_position(&self) -> Option<Vec2> {
        self.bullets.as_ref().map(|b| b.slots[0].position)
    }

    pub fn bullet_width(&self) -> Option<f64> {
        self.bullets.as_ref().map(|b| b.slots[0].width)
    }

    // ── Movement ──────────────────────────────────────────────────────────────

    /// Apply one frame of directional acceleration, then the edge rules.
    ///
    /// Each axis checks its low edge right after the decreasing delta and
    /// its high edge right after the increasing one, so an entity resting on
    /// the top/left edge can still accelerate away from it. Exploding
    /// entities ignore movement requests.
    pub fn move_by(&mut self, mask: Direction) {
        if self.is_exploding() {
            return;
        }
        let accel = self.config.acceleration;
        let half_w = self.sprite.width / 2.0;
        let half_h = self.sprite.height / 2.0;
        let s = &mut self.sprite;

        if mask.contains(Direction::LEFT) {
            s.velocity.x -= accel;
        }
        if s.position.x < half_w {
            s.velocity.x = 0.0;
        }

        if mask.contains(Direction::RIGHT) {
            s.velocity.x += accel;
        }
        if s.position.x > self.config.right_bound - half_w {
            s.velocity.x = 0.0;
            s.position.x -= 1.0;
        }

        if mask.contains(Direction::FORWARD) {
            s.velocity.y -= accel;
        }
        if s.position.y < half_h {
            s.velocity.y = 0.0;
        }

        if mask.contains(Direction::BACKWARD) {
            s.velocity.y += accel;
        }
        if s.position.y > self.config.bottom_bound - half_h {
            s.velocity.y = 0.0;
            s.position.y -= 1.0;
        }
    }

    /// Swap to a directional sprite. The replacement keeps the position but
    /// starts at rest.
    pub fn face(&mut self, facing: Facing) {
        self.facing = facing;
        self.sprite.velocity = Vec2::ZERO;
    }

    // ── Time integration ─────────────────────────────────────────────────────

    pub fn update(&mut self, dt: f64) {
        if let Some(bullets) = self.bullets.as_mut() {
            for slot in bullets.slots.iter_mut() {
                slot.position += slot.velocity * dt;
            }
        }
        // Bullets already fired keep flying; the wreck itself stays put.
        if !self.is_exploding() {
            self.sprite.position += self.sprite.velocity * dt;
        }

        let speed = self.sprite.velocity.magnitude();
        self.cue_timer += dt;

        match self.speed_state {
            SpeedState::Stopped => {
                if speed > ENGINE_START_SPEED {
                    self.speed_state = SpeedState::Started;
                    self.cues.push(SoundCue::EngineStart);
                    self.cue_timer = 0.0;
                }
            }
            SpeedState::Started => {
                if speed < ENGINE_STOP_SPEED {
                    self.speed_state = SpeedState::Stopped;
                    self.cues.push(SoundCue::EngineStop);
                    self.cue_timer = 0.0;
                } else if self.cue_timer > ENGINE_CABIN_INTERVAL {
                    self.cues.push(SoundCue::EngineCabin);
                    self.cue_timer = 0.0;
                }
            }
        }
    }

    // ── Explosion ─────────────────────────────────────────────────────────────

    pub fn is_exploding(&self) -> bool {
        self.explosion_state == ExplosionState::Exploding
    }

    /// Start the explosion animation at the current position.
    ///
    /// Calling this mid-animation restarts it; callers check
    /// `is_exploding` first.
    pub fn explode(&mut self) {
        self.explosion.position = self.sprite.position;
        self.explosion.frame = 0;
        self.explosion_counter = 0;
        self.explosion_state = ExplosionState::Exploding;
        self.cues.push(SoundCue::Explosion);
        tracing::debug!(kind = ?self.kind, x = self.sprite.position.x, y = self.sprite.position.y, "explode");
    }

    /// Show the next explosion frame. Returns `false` once the animation has
    /// finished (or if nothing is exploding), `true` while more frames remain.
    pub fn advance_explosion(&mut self) -> bool {
        if !self.is_exploding() {
            return false;
        }
        self.explosion.frame = self.explosion_counter;
        self.explosion_counter += 1;
        if self.explosion_counter >= self.explosion.frame_count {
            self.explosion_state = ExplosionState::Idle;
            self.explosion_counter = 0;
            self.sprite.velocity = Vec2::ZERO;
            self.speed_state = SpeedState::Stopped;
            return false;
        }
        true
    }

    /// Explode and schedule the animation ticks on this entity's own ticker.
    pub fn trigger_explosion(&mut self) {
        self.explode();
        self.ticker.start();
    }

    /// Feed frame time to the explosion ticker, advancing one animation frame
    /// per elapsed period and stopping the ticker when the animation ends.
    pub fn tick_explosion(&mut self, dt: f64) {
        for _ in 0..self.ticker.advance(dt) {
            if !self.advance_explosion() {
                self.ticker.stop();
                break;
            }
        }
    }

    // ── Shooting ──────────────────────────────────────────────────────────────

    /// Fire the twin cannon. Bullets still on screen keep their position and
    /// only have their speed reassigned.
    pub fn shoot(&mut self) {
        let origin = self.sprite.position;
        let Some(bullets) = self.bullets.as_mut() else {
            return;
        };
        let cannon = bullets.cannon;

        let off_screen = match cannon.direction {
            FireDirection::Up => bullets.slots[0].position.y < 0.0,
            FireDirection::Down => bullets.slots[0].position.y > SCREEN_HEIGHT,
        };
        if off_screen {
            for (slot, dx) in bullets.slots.iter_mut().zip(cannon.muzzle_x) {
                slot.position = Vec2::new(origin.x + dx, origin.y + cannon.muzzle_y);
            }
        }

        let vy = match cannon.direction {
            FireDirection::Up => -BULLET_SPEED,
            FireDirection::Down => BULLET_SPEED,
        };
        for slot in bullets.slots.iter_mut() {
            slot.velocity.y = vy;
        }
        bullets.in_flight = true;
        tracing::trace!(kind = ?self.kind, repositioned = off_screen, "shoot");
    }

    /// Hand queued sound cues to the caller.
    pub fn drain_cues(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.cues)
    }
}

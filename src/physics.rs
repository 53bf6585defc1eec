//! Minimal arcade body for the bird.
//!
//! Stands in for the external physics engine: it integrates gravity, keeps
//! the bird inside the world when asked to, and reports overlap with
//! obstacle members. The game core never calls into this module; hosts feed
//! it the core's [`PhysicsCommand`]s and pass its overlap verdict back in.

use crate::constants::{BIRD_BOUNCE, BIRD_SIZE, GRAVITY_ZERO};
use crate::game::{Hitbox, ObstaclePair, PhysicsCommand, SessionConfig};

#[derive(Debug, Clone, PartialEq)]
pub struct BirdBody {
    pub x: f64,
    pub y: f64,
    /// px/s, positive = down.
    pub velocity_y: f64,
    /// px/s².
    pub gravity_y: f64,
    pub collide_world_bounds: bool,
    world_height: f64,
}

impl BirdBody {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            x: config.bird_x(),
            y: config.bird_start_y(),
            velocity_y: 0.0,
            gravity_y: GRAVITY_ZERO,
            collide_world_bounds: true,
            world_height: config.screen_height,
        }
    }

    pub fn apply(&mut self, command: &PhysicsCommand) {
        match *command {
            PhysicsCommand::SetVelocityY(v) => self.velocity_y = v,
            PhysicsCommand::SetGravityY(g) => self.gravity_y = g,
            PhysicsCommand::SetCollideWorldBounds(on) => self.collide_world_bounds = on,
            PhysicsCommand::ResetBird { x, y } => {
                self.x = x;
                self.y = y;
            }
        }
    }

    pub fn apply_all(&mut self, commands: &[PhysicsCommand]) {
        for command in commands {
            self.apply(command);
        }
    }

    /// Integrate one step of `dt` seconds.
    pub fn step(&mut self, dt: f64) {
        self.velocity_y += self.gravity_y * dt;
        self.y += self.velocity_y * dt;

        if !self.collide_world_bounds {
            return;
        }

        let half = BIRD_SIZE / 2.0;
        if self.y < half {
            self.y = half;
            self.velocity_y = -self.velocity_y * BIRD_BOUNCE;
        } else if self.y > self.world_height - half {
            self.y = self.world_height - half;
            self.velocity_y = -self.velocity_y * BIRD_BOUNCE;
        }
    }

    pub fn hitbox(&self) -> Hitbox {
        Hitbox {
            center_x: self.x,
            center_y: self.y,
            width: BIRD_SIZE,
            height: BIRD_SIZE,
        }
    }

    /// True when the bird touches either member of any pair.
    pub fn overlaps_any<'a, I>(&self, pairs: I) -> bool
    where
        I: IntoIterator<Item = &'a ObstaclePair>,
    {
        let bird = self.hitbox();
        pairs
            .into_iter()
            .any(|pair| bird.intersects(&pair.top_member()) || bird.intersects(&pair.bottom_member()))
    }
}

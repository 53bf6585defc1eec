//! Outputs a tick hands back to its collaborators.

use super::types::GameState;
use serde::{Deserialize, Serialize};

/// Instructions for the physics collaborator that owns the bird's body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PhysicsCommand {
    /// Overwrite vertical velocity (px/s, positive = down).
    SetVelocityY(f64),
    SetGravityY(f64),
    SetCollideWorldBounds(bool),
    ResetBird { x: f64, y: f64 },
}

/// Things that happened during a tick, for logging, audio or statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Transition { from: GameState, to: GameState },
    Restarted,
    Flapped,
    Scored { pair_id: u64, score: u32 },
    SpedUp { score: u32, scroll_speed: f64 },
    Spawned { pair_id: u64, gap_center: f64, gap_width: f64 },
    Recycled { pair_id: u64 },
}

/// Collects commands and events while a tick runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Effects {
    pub physics: Vec<PhysicsCommand>,
    pub events: Vec<GameEvent>,
}

impl Effects {
    pub fn command(&mut self, command: PhysicsCommand) {
        self.physics.push(command);
    }

    pub fn event(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

//! Skyward - side-scrolling obstacle-avoidance game core.
//!
//! The library holds the simulation (`game`), a stand-in physics body for
//! hosts (`physics`) and the headless simulator. The terminal front end
//! lives in the binary.

pub mod constants;
pub mod game;
pub mod physics;
pub mod simulator;

pub use constants::*;
pub use game::{tick, GameSession, GameState, SessionConfig, TickInput, TickOutput};

//! Side-scrolling obstacle course.
//!
//! The bird stays at a fixed column while obstacle pairs scroll in from the
//! right. This module owns gap placement, scrolling, scoring, the speed ramp
//! and the play/pause/finish state machine. Drawing, input capture and the
//! bird's physics belong to the host, which talks to the core through
//! [`tick`].

pub mod effects;
pub mod logic;
pub mod scoring;
pub mod scroll;
pub mod spawner;
pub mod state_machine;
pub mod types;

pub use effects::*;
pub use logic::*;
pub use state_machine::TickInput;
pub use types::*;

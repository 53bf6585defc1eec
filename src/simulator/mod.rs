//! Headless simulator for difficulty analysis.
//!
//! Plays seeded sessions with an autopilot to measure how far a steady
//! player gets, how often the speed ramps up, and how far consecutive gaps
//! jump. Uses the same `tick` as the terminal game.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{autopilot, run_simulation, simulate_single_run};

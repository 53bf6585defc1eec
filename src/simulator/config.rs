//! Simulation configuration.

use crate::game::SessionConfig;

/// Configuration for a batch of headless runs.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of sessions to play
    pub num_runs: u32,

    /// Base seed; run `i` uses `seed + i`, wrapping (None = entropy)
    pub seed: Option<u64>,

    /// Ticks after which a run is cut off if the bird is still alive
    pub max_ticks_per_run: u64,

    /// Screen geometry shared by every run
    pub session: SessionConfig,

    /// Autopilot aims this fraction of the gap width below the gap center
    pub aim_offset: f64,

    /// Console verbosity (0 = report only, 1 = banner and report, 2 = per run lines too)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seed: Some(42),
            max_ticks_per_run: 36_000,
            session: SessionConfig::default(),
            aim_offset: 0.15,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Banner and configuration block before the batch starts
    pub fn shows_header(&self) -> bool {
        self.verbosity >= 1
    }

    /// One line per finished run
    pub fn shows_run_lines(&self) -> bool {
        self.verbosity >= 2
    }

    /// Small deterministic batch for tests and smoke runs
    pub fn quick(seed: u64) -> Self {
        Self {
            num_runs: 5,
            seed: Some(seed),
            max_ticks_per_run: 5_000,
            verbosity: 0,
            ..Default::default()
        }
    }
}

//! Obstacle pair generation.
//!
//! Gap widths come from a weighted table that favours the narrow end. Gap
//! centers are drawn over the whole screen, then clamped so the gap stays on
//! screen and never jumps more than `gap_step` from the previous pair.

use super::types::{GameSession, ObstaclePair, SessionConfig};
use crate::constants::GAP_WIDTH_TABLE;
use log::debug;
use rand::Rng;

/// Sum of all gap width weights.
pub fn total_gap_weight() -> u32 {
    GAP_WIDTH_TABLE.iter().map(|(_, weight)| weight).sum()
}

/// Roll a gap width from the weighted table.
pub fn draw_gap_width<R: Rng>(rng: &mut R) -> f64 {
    let mut roll = rng.gen_range(0..total_gap_weight());
    for &(width, weight) in &GAP_WIDTH_TABLE {
        if roll < weight {
            return width;
        }
        roll -= weight;
    }
    GAP_WIDTH_TABLE[GAP_WIDTH_TABLE.len() - 1].0
}

/// Clamp a raw candidate center into the legal interval.
///
/// Upper bounds are applied first (screen bottom, previous + step), then the
/// lower bounds (screen top, previous - step). When the two intervals
/// conflict, the lower bounds win.
pub fn place_gap_center(
    candidate: f64,
    gap_width: f64,
    previous_center: f64,
    config: &SessionConfig,
) -> f64 {
    let half_gap = gap_width / 2.0;
    let step = config.gap_step();

    candidate
        .min(config.screen_height - half_gap)
        .min(previous_center + step)
        .max(half_gap)
        .max(previous_center - step)
}

/// Create the next obstacle pair just off the right edge.
///
/// Records the new gap center as the session's previous center. The caller
/// decides where the pair goes.
pub fn spawn_pair<R: Rng>(session: &mut GameSession, rng: &mut R) -> ObstaclePair {
    let config = session.config;
    let gap_width = draw_gap_width(rng);
    let candidate = rng.gen_range(0.0..config.screen_height);
    let gap_center = place_gap_center(
        candidate,
        gap_width,
        session.difficulty.previous_gap_center,
        &config,
    );
    session.difficulty.previous_gap_center = gap_center;

    let id = session.next_pair_id;
    session.next_pair_id += 1;

    debug!(
        "spawn pair {} (gap {:.0} at {:.1}, candidate {:.1})",
        id, gap_width, gap_center, candidate
    );

    ObstaclePair::new(id, config.spawn_x(), gap_center, gap_width)
}

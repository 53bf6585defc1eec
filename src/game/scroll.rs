//! Per-tick obstacle movement, spawning and recycling.

use super::effects::{Effects, GameEvent};
use super::scoring::score_passed_pairs;
use super::spawner::spawn_pair;
use super::types::GameSession;
use log::debug;
use rand::Rng;

/// Advance the course by one tick.
///
/// Order: move every pair, score (and speed up), spawn behind the newest
/// pair, recycle the oldest pair. Only call this while playing.
pub fn advance<R: Rng>(session: &mut GameSession, rng: &mut R, fx: &mut Effects) {
    let speed = session.difficulty.scroll_speed;
    for pair in session.obstacles.iter_mut() {
        pair.x -= speed;
    }

    score_passed_pairs(session, speed, fx);

    let spawn_below = session.config.screen_width - session.config.spawn_spacing();
    let needs_spawn = session
        .obstacles
        .back()
        .map_or(true, |newest| newest.x < spawn_below);
    if needs_spawn {
        let pair = spawn_pair(session, rng);
        fx.event(GameEvent::Spawned {
            pair_id: pair.id,
            gap_center: pair.gap_center,
            gap_width: pair.gap_width,
        });
        session.obstacles.push_back(pair);
    }

    let recycle_below = session.config.recycle_x();
    if session
        .obstacles
        .front()
        .is_some_and(|oldest| oldest.x < recycle_below)
    {
        if let Some(pair) = session.obstacles.pop_front() {
            debug!("recycle pair {}", pair.id);
            fx.event(GameEvent::Recycled { pair_id: pair.id });
        }
    }
}

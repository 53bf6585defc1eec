//! Score tracking and the speed ramp that rides on it.

use super::effects::{Effects, GameEvent};
use super::types::{DifficultyState, GameSession, ScoreState};
use crate::constants::SPEEDUP_SCORE_INTERVAL;
use log::{debug, info};

/// True when a pair at `x` has just crossed the bird this tick.
///
/// Pairs move exactly `scroll_speed` per tick, so the window of width
/// `scroll_speed + 1` catches every crossing; the extra pixel absorbs
/// rounding.
pub fn in_score_window(x: f64, bird_x: f64, scroll_speed: f64) -> bool {
    x <= bird_x && x >= bird_x - scroll_speed - 1.0
}

/// Speed up every `SPEEDUP_SCORE_INTERVAL` points, at most once per milestone.
/// Returns true when the speed changed.
pub fn apply_speedup(score: &mut ScoreState, difficulty: &mut DifficultyState) -> bool {
    if score.counter > score.last_speedup_threshold
        && score.counter % SPEEDUP_SCORE_INTERVAL == 0
    {
        difficulty.scroll_speed *= difficulty.speedup_multiplier();
        difficulty.speedups += 1;
        score.last_speedup_threshold = score.counter;
        true
    } else {
        false
    }
}

/// Count pairs that crossed the bird during this tick's move.
///
/// `moved_by` is the displacement applied this tick; a speed-up triggered
/// here only takes effect on the next move.
pub fn score_passed_pairs(session: &mut GameSession, moved_by: f64, fx: &mut Effects) {
    let bird_x = session.config.bird_x();
    let GameSession {
        obstacles,
        score,
        difficulty,
        ..
    } = session;

    for pair in obstacles.iter_mut() {
        if pair.scored || !in_score_window(pair.x, bird_x, moved_by) {
            continue;
        }
        pair.scored = true;
        score.counter += 1;
        debug!("passed pair {}, score {}", pair.id, score.counter);
        fx.event(GameEvent::Scored {
            pair_id: pair.id,
            score: score.counter,
        });

        if apply_speedup(score, difficulty) {
            info!(
                "speed up at score {}: {:.3} px/tick",
                score.counter, difficulty.scroll_speed
            );
            fx.event(GameEvent::SpedUp {
                score: score.counter,
                scroll_speed: difficulty.scroll_speed,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::ObstaclePair;

    fn session_with_pair_at(x: f64) -> GameSession {
        let mut session = GameSession::default();
        session
            .obstacles
            .push_back(ObstaclePair::new(0, x, 300.0, 150.0));
        session
    }

    #[test]
    fn test_score_window_edges() {
        assert!(in_score_window(200.0, 200.0, 2.4));
        assert!(in_score_window(196.7, 200.0, 2.4));
        assert!(!in_score_window(200.1, 200.0, 2.4));
        assert!(!in_score_window(196.5, 200.0, 2.4));
    }

    #[test]
    fn test_pair_in_window_scores_once() {
        let mut session = session_with_pair_at(199.0);
        let mut fx = Effects::default();

        score_passed_pairs(&mut session, 2.4, &mut fx);
        assert_eq!(session.score.counter, 1);
        assert!(session.obstacles[0].scored);

        // Still inside the window on a second pass, but already counted
        session.obstacles[0].x = 197.0;
        score_passed_pairs(&mut session, 2.4, &mut fx);
        assert_eq!(session.score.counter, 1);
        assert_eq!(
            fx.events,
            vec![GameEvent::Scored {
                pair_id: 0,
                score: 1
            }]
        );
    }

    #[test]
    fn test_pair_outside_window_not_scored() {
        let mut session = session_with_pair_at(250.0);
        let mut fx = Effects::default();
        score_passed_pairs(&mut session, 2.4, &mut fx);
        assert_eq!(session.score.counter, 0);
        assert!(fx.events.is_empty());
    }

    #[test]
    fn test_speedup_at_multiple_of_ten() {
        let mut session = session_with_pair_at(199.0);
        session.score.counter = 9;
        let mut fx = Effects::default();

        score_passed_pairs(&mut session, 2.4, &mut fx);

        assert_eq!(session.score.counter, 10);
        assert_eq!(session.score.last_speedup_threshold, 10);
        assert_eq!(session.difficulty.speedups, 1);
        assert!((session.scroll_speed() - 2.4 * 1.15).abs() < 1e-9);
        assert!(fx
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::SpedUp { score: 10, .. })));
    }

    #[test]
    fn test_speedup_fires_once_per_milestone() {
        let mut score = ScoreState {
            counter: 20,
            last_speedup_threshold: 10,
        };
        let mut difficulty = DifficultyState::new(&Default::default());

        assert!(apply_speedup(&mut score, &mut difficulty));
        let after_first = difficulty.scroll_speed;
        assert!(!apply_speedup(&mut score, &mut difficulty));
        assert!((difficulty.scroll_speed - after_first).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_speedup_off_milestone() {
        let mut score = ScoreState {
            counter: 11,
            last_speedup_threshold: 10,
        };
        let mut difficulty = DifficultyState::new(&Default::default());
        assert!(!apply_speedup(&mut score, &mut difficulty));
        assert_eq!(difficulty.speedups, 0);
    }

    #[test]
    fn test_no_speedup_at_zero() {
        let mut score = ScoreState::new();
        let mut difficulty = DifficultyState::new(&Default::default());
        assert!(!apply_speedup(&mut score, &mut difficulty));
    }
}

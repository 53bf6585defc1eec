//! The per-frame entry point.

use super::effects::{Effects, GameEvent, PhysicsCommand};
use super::scroll::advance;
use super::state_machine::{process_input, process_overlap, TickInput};
use super::types::{GameSession, GameState, Hud, ObstaclePair};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Everything a host needs after one tick: what to draw and what to tell
/// the physics engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickOutput {
    pub state: GameState,
    pub score: u32,
    pub scroll_speed: f64,
    /// Oldest first.
    pub obstacles: Vec<ObstaclePair>,
    pub hud: Hud,
    pub physics: Vec<PhysicsCommand>,
    pub events: Vec<GameEvent>,
}

impl TickOutput {
    /// Whether the run ended during this tick.
    pub fn crashed(&self) -> bool {
        self.events.iter().any(|e| {
            matches!(
                e,
                GameEvent::Transition {
                    from: GameState::Play,
                    to: GameState::Finish,
                }
            )
        })
    }
}

/// Run one simulation step.
///
/// `overlap` is the physics collaborator's verdict for this frame, computed
/// before the core runs. Input is applied first, then the course scrolls
/// (only while playing), then the overlap is evaluated.
pub fn tick<R: Rng>(
    session: &mut GameSession,
    input: TickInput,
    overlap: bool,
    rng: &mut R,
) -> TickOutput {
    session.tick_count += 1;
    let mut fx = Effects::default();

    process_input(session, input, rng, &mut fx);

    if session.state == GameState::Play {
        advance(session, rng, &mut fx);
    }

    process_overlap(session, overlap, &mut fx);

    TickOutput {
        physics: fx.physics,
        events: fx.events,
        ..snapshot(session)
    }
}

/// Current state of a session without advancing it.
pub fn snapshot(session: &GameSession) -> TickOutput {
    TickOutput {
        state: session.state,
        score: session.score.counter,
        scroll_speed: session.difficulty.scroll_speed,
        obstacles: session.obstacles.iter().cloned().collect(),
        hud: session.hud.clone(),
        physics: Vec::new(),
        events: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn started_session(rng: &mut ChaCha8Rng) -> GameSession {
        let mut session = GameSession::default();
        tick(&mut session, TickInput::flap(), false, rng);
        tick(&mut session, TickInput::flap(), false, rng);
        session
    }

    #[test]
    fn test_idle_ticks_do_nothing_before_start() {
        let mut session = GameSession::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        for _ in 0..50 {
            let out = tick(&mut session, TickInput::NONE, false, &mut rng);
            assert_eq!(out.state, GameState::Finish);
            assert!(out.obstacles.is_empty());
            assert!(out.physics.is_empty());
        }
        assert_eq!(session.tick_count, 50);
    }

    #[test]
    fn test_paused_course_does_not_move() {
        let mut session = GameSession::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        tick(&mut session, TickInput::flap(), false, &mut rng);
        let x = session.obstacles[0].x;

        for _ in 0..30 {
            tick(&mut session, TickInput::NONE, false, &mut rng);
        }

        assert!((session.obstacles[0].x - x).abs() < f64::EPSILON);
    }

    #[test]
    fn test_resume_tick_moves_course() {
        let mut session = GameSession::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        tick(&mut session, TickInput::flap(), false, &mut rng);

        let out = tick(&mut session, TickInput::flap(), false, &mut rng);

        assert_eq!(out.state, GameState::Play);
        assert!((out.obstacles[0].x - (830.0 - 2.4)).abs() < 1e-9);
    }

    #[test]
    fn test_overlap_finishes_in_same_tick() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut session = started_session(&mut rng);

        let out = tick(&mut session, TickInput::NONE, true, &mut rng);

        assert_eq!(out.state, GameState::Finish);
        assert!(out.crashed());
        assert!(out.hud.finish_message.is_some());

        let out = tick(&mut session, TickInput::NONE, true, &mut rng);
        assert!(!out.crashed());
        assert!(out.physics.is_empty());
    }

    #[test]
    fn test_overlap_after_pause_input_is_ignored() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut session = started_session(&mut rng);

        let out = tick(&mut session, TickInput::toggle_pause(), true, &mut rng);

        assert_eq!(out.state, GameState::Pause);
    }

    #[test]
    fn test_output_mirrors_session() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut session = started_session(&mut rng);

        let out = tick(&mut session, TickInput::NONE, false, &mut rng);

        assert_eq!(out.score, session.score.counter);
        assert_eq!(out.obstacles.len(), session.obstacles.len());
        assert_eq!(out.hud, session.hud);
        assert!((out.scroll_speed - session.scroll_speed()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_snapshot_has_no_effects() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let session = started_session(&mut rng);

        let snap = snapshot(&session);

        assert_eq!(snap.state, GameState::Play);
        assert_eq!(snap.obstacles.len(), 1);
        assert!(snap.physics.is_empty());
        assert!(snap.events.is_empty());
    }

    #[test]
    fn test_output_serializes() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut session = GameSession::default();
        let out = tick(&mut session, TickInput::flap(), false, &mut rng);

        let json = serde_json::to_string(&out).unwrap();
        let back: TickOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(back.state, GameState::Pause);
        assert_eq!(back.obstacles.len(), 1);
    }
}

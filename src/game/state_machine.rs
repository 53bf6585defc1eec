//! Play / Pause / Finish transitions and their side effects.
//!
//! ```text
//!            flap                   pause
//!   Pause ----------> Play ----------------> Pause
//!     ^                 |
//!     |                 | overlap
//!     |  restart        v
//!     +------------- Finish  <- initial state
//!            flap
//! ```
//!
//! Restart always lands in Pause; the player has to flap once more to move.

use super::effects::{Effects, GameEvent, PhysicsCommand};
use super::spawner::spawn_pair;
use super::types::{GameSession, GameState};
use crate::constants::{FINISH_MESSAGE_TEXT, FLAP_VELOCITY, GRAVITY, GRAVITY_ZERO};
use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Edge-triggered player input for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub flap: bool,
    pub toggle_pause: bool,
}

impl TickInput {
    pub const NONE: TickInput = TickInput {
        flap: false,
        toggle_pause: false,
    };

    pub fn flap() -> Self {
        Self {
            flap: true,
            ..Self::NONE
        }
    }

    pub fn toggle_pause() -> Self {
        Self {
            toggle_pause: true,
            ..Self::NONE
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.flap && !self.toggle_pause
    }
}

fn transition(session: &mut GameSession, to: GameState, fx: &mut Effects) {
    let from = session.state;
    session.state = to;
    info!("state {} -> {}", from.name(), to.name());
    fx.event(GameEvent::Transition { from, to });
}

/// Freeze the bird in place and show the pause prompt.
pub fn set_pause(session: &mut GameSession, fx: &mut Effects) {
    transition(session, GameState::Pause, fx);
    fx.command(PhysicsCommand::SetGravityY(GRAVITY_ZERO));
    fx.command(PhysicsCommand::SetVelocityY(0.0));
    session.hud.pause_message_visible = true;
}

pub fn set_play(session: &mut GameSession, fx: &mut Effects) {
    transition(session, GameState::Play, fx);
    session.hud.pause_message_visible = false;
    fx.command(PhysicsCommand::SetGravityY(GRAVITY));
}

/// End the run: death flourish, bird may leave the screen, final score shown.
pub fn set_finish(session: &mut GameSession, fx: &mut Effects) {
    transition(session, GameState::Finish, fx);
    fx.command(PhysicsCommand::SetVelocityY(-FLAP_VELOCITY));
    fx.command(PhysicsCommand::SetCollideWorldBounds(false));
    session.hud.score_visible = false;
    session.hud.finish_message = Some(format!(
        "Your score: {}\n{}",
        session.score.counter, FINISH_MESSAGE_TEXT
    ));
}

/// Discard the run and set up a fresh course, ending in Pause.
///
/// The previous gap center is kept, so the first pair of the new run
/// continues from where the last course left off.
pub fn restart<R: Rng>(session: &mut GameSession, rng: &mut R, fx: &mut Effects) {
    session.hud.finish_message = None;
    session.obstacles.clear();
    session.score.reset();
    let config = session.config;
    session.difficulty.reset_speed(&config);
    session.hud.score_visible = true;

    fx.command(PhysicsCommand::SetCollideWorldBounds(true));
    fx.command(PhysicsCommand::ResetBird {
        x: config.bird_x(),
        y: config.bird_start_y(),
    });

    let pair = spawn_pair(session, rng);
    fx.event(GameEvent::Spawned {
        pair_id: pair.id,
        gap_center: pair.gap_center,
        gap_width: pair.gap_width,
    });
    session.obstacles.push_back(pair);
    fx.event(GameEvent::Restarted);

    set_pause(session, fx);
}

/// Flap impulse; resumes play first when paused.
pub fn flap(session: &mut GameSession, fx: &mut Effects) {
    if session.state == GameState::Pause {
        set_play(session, fx);
    }
    fx.command(PhysicsCommand::SetVelocityY(-FLAP_VELOCITY));
    fx.event(GameEvent::Flapped);
}

/// Apply this tick's input. Pause is polled before flap.
pub fn process_input<R: Rng>(
    session: &mut GameSession,
    input: TickInput,
    rng: &mut R,
    fx: &mut Effects,
) {
    if input.toggle_pause && session.state == GameState::Play {
        set_pause(session, fx);
    }

    if input.flap {
        if session.state == GameState::Finish {
            restart(session, rng, fx);
        } else {
            flap(session, fx);
        }
    }
}

/// React to the physics collaborator's overlap signal.
///
/// Only a playing session can crash; signals in any other state are ignored.
/// Returns true when this call ended the run.
pub fn process_overlap(session: &mut GameSession, overlap: bool, fx: &mut Effects) -> bool {
    if overlap && session.state == GameState::Play {
        set_finish(session, fx);
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::ObstaclePair;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    /// Session that has been restarted and resumed, ready to scroll.
    fn playing_session() -> GameSession {
        let mut session = GameSession::default();
        let mut fx = Effects::default();
        process_input(&mut session, TickInput::flap(), &mut rng(), &mut fx);
        process_input(&mut session, TickInput::flap(), &mut rng(), &mut fx);
        session
    }

    #[test]
    fn test_first_flap_restarts_into_pause() {
        let mut session = GameSession::default();
        let mut fx = Effects::default();

        process_input(&mut session, TickInput::flap(), &mut rng(), &mut fx);

        assert_eq!(session.state, GameState::Pause);
        assert_eq!(session.obstacles.len(), 1);
        assert_eq!(session.score.counter, 0);
        assert!(session.hud.pause_message_visible);
        assert!(session.hud.score_visible);
        // Restart does not flap
        assert!(!fx.events.contains(&GameEvent::Flapped));
        assert!(fx.physics.contains(&PhysicsCommand::SetGravityY(GRAVITY_ZERO)));
        assert!(fx.physics.contains(&PhysicsCommand::ResetBird { x: 200.0, y: 200.0 }));
        assert!(fx.physics.contains(&PhysicsCommand::SetCollideWorldBounds(true)));
    }

    #[test]
    fn test_flap_in_pause_starts_play() {
        let mut session = GameSession::default();
        let mut fx = Effects::default();
        process_input(&mut session, TickInput::flap(), &mut rng(), &mut fx);

        let mut fx = Effects::default();
        process_input(&mut session, TickInput::flap(), &mut rng(), &mut fx);

        assert_eq!(session.state, GameState::Play);
        assert!(!session.hud.pause_message_visible);
        assert_eq!(
            fx.physics,
            vec![
                PhysicsCommand::SetGravityY(GRAVITY),
                PhysicsCommand::SetVelocityY(-FLAP_VELOCITY),
            ]
        );
    }

    #[test]
    fn test_flap_in_play_only_impulses() {
        let mut session = playing_session();
        let mut fx = Effects::default();

        process_input(&mut session, TickInput::flap(), &mut rng(), &mut fx);

        assert_eq!(session.state, GameState::Play);
        assert_eq!(fx.physics, vec![PhysicsCommand::SetVelocityY(-FLAP_VELOCITY)]);
        assert_eq!(fx.events, vec![GameEvent::Flapped]);
    }

    #[test]
    fn test_toggle_pause_freezes_bird() {
        let mut session = playing_session();
        let mut fx = Effects::default();

        process_input(&mut session, TickInput::toggle_pause(), &mut rng(), &mut fx);

        assert_eq!(session.state, GameState::Pause);
        assert!(session.hud.pause_message_visible);
        assert!(fx.physics.contains(&PhysicsCommand::SetVelocityY(0.0)));
        assert!(fx.physics.contains(&PhysicsCommand::SetGravityY(GRAVITY_ZERO)));
    }

    #[test]
    fn test_toggle_pause_ignored_outside_play() {
        let mut session = GameSession::default();
        let mut fx = Effects::default();
        process_input(&mut session, TickInput::toggle_pause(), &mut rng(), &mut fx);
        assert_eq!(session.state, GameState::Finish);

        process_input(&mut session, TickInput::flap(), &mut rng(), &mut fx);
        let mut fx = Effects::default();
        process_input(&mut session, TickInput::toggle_pause(), &mut rng(), &mut fx);
        assert_eq!(session.state, GameState::Pause);
        assert!(fx.events.is_empty());
    }

    #[test]
    fn test_pause_and_flap_same_tick_resumes() {
        let mut session = playing_session();
        let mut fx = Effects::default();
        let input = TickInput {
            flap: true,
            toggle_pause: true,
        };

        process_input(&mut session, input, &mut rng(), &mut fx);

        assert_eq!(session.state, GameState::Play);
    }

    #[test]
    fn test_pause_keeps_obstacles() {
        let mut session = playing_session();
        session
            .obstacles
            .push_back(ObstaclePair::new(9, 500.0, 300.0, 150.0));
        let before = session.obstacles.clone();
        let mut fx = Effects::default();

        process_input(&mut session, TickInput::toggle_pause(), &mut rng(), &mut fx);

        assert_eq!(session.obstacles, before);
    }

    #[test]
    fn test_overlap_finishes_play() {
        let mut session = playing_session();
        session.score.counter = 4;
        let mut fx = Effects::default();

        assert!(process_overlap(&mut session, true, &mut fx));

        assert_eq!(session.state, GameState::Finish);
        assert!(!session.hud.score_visible);
        let message = session.hud.finish_message.as_deref().unwrap();
        assert!(message.starts_with("Your score: 4\n"));
        assert!(message.contains("Press SPACE to restart"));
        assert!(fx.physics.contains(&PhysicsCommand::SetVelocityY(-FLAP_VELOCITY)));
        assert!(fx.physics.contains(&PhysicsCommand::SetCollideWorldBounds(false)));
    }

    #[test]
    fn test_overlap_ignored_outside_play() {
        let mut session = GameSession::default();
        let mut fx = Effects::default();
        assert!(!process_overlap(&mut session, true, &mut fx));

        process_input(&mut session, TickInput::flap(), &mut rng(), &mut fx);
        assert_eq!(session.state, GameState::Pause);
        assert!(!process_overlap(&mut session, true, &mut fx));
        assert_eq!(session.state, GameState::Pause);
    }

    #[test]
    fn test_no_overlap_is_noop() {
        let mut session = playing_session();
        let mut fx = Effects::default();
        assert!(!process_overlap(&mut session, false, &mut fx));
        assert_eq!(session.state, GameState::Play);
        assert!(fx.physics.is_empty());
    }

    #[test]
    fn test_restart_resets_run_but_not_gap_center() {
        let mut session = playing_session();
        session.score.counter = 27;
        session.score.last_speedup_threshold = 20;
        session.difficulty.scroll_speed = 5.0;
        for id in 0..4 {
            session
                .obstacles
                .push_back(ObstaclePair::new(100 + id, 100.0 * id as f64, 300.0, 150.0));
        }
        let mut fx = Effects::default();
        process_overlap(&mut session, true, &mut fx);
        let gap_before = session.difficulty.previous_gap_center;

        let mut restart_rng = rng();
        process_input(&mut session, TickInput::flap(), &mut restart_rng, &mut fx);

        assert_eq!(session.state, GameState::Pause);
        assert_eq!(session.obstacles.len(), 1);
        assert_eq!(session.score.counter, 0);
        assert_eq!(session.score.last_speedup_threshold, 1);
        assert!((session.scroll_speed() - 2.4).abs() < 1e-9);
        assert!(session.hud.finish_message.is_none());

        // The new pair was placed relative to the old previous center
        let pair = &session.obstacles[0];
        assert!((pair.gap_center - gap_before).abs() <= session.config.gap_step() + 1e-9);
        assert!((session.difficulty.previous_gap_center - pair.gap_center).abs() < f64::EPSILON);
    }
}

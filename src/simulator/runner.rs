//! Headless session runner.
//!
//! Drives the same `tick` the terminal game uses, with `BirdBody` standing in
//! for the physics engine and a simple autopilot pressing the flap key.

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::constants::TICK_INTERVAL_MS;
use crate::game::{tick, GameEvent, GameSession, GameState, ObstaclePair, TickInput};
use crate::physics::BirdBody;
use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Run the whole batch and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let seed = config.seed.map(|s| s.wrapping_add(run_idx as u64));
        let mut rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        let stats = simulate_single_run(config, seed, &mut rng);
        if config.shows_run_lines() {
            println!(
                "Run {}/{} - score {}, ticks {}, speed {:.2}, crashed {}",
                run_idx + 1,
                config.num_runs,
                stats.score,
                stats.ticks,
                stats.final_scroll_speed,
                stats.crashed
            );
        }
        all_runs.push(stats);
    }

    SimReport::from_runs(all_runs, config.max_ticks_per_run)
}

/// The next pair the bird still has to get through.
fn next_pair<'a>(obstacles: &'a [ObstaclePair], bird: &BirdBody) -> Option<&'a ObstaclePair> {
    obstacles
        .iter()
        .find(|pair| pair.top_member().right() >= bird.hitbox().left())
}

/// Decide whether to flap this tick.
///
/// Waiting or finished sessions always get a flap, which starts or resumes
/// play. While playing, flap when the bird sinks below its aim point.
pub fn autopilot(
    state: GameState,
    obstacles: &[ObstaclePair],
    bird: &BirdBody,
    aim_offset: f64,
) -> TickInput {
    if state != GameState::Play {
        return TickInput::flap();
    }

    let aim = match next_pair(obstacles, bird) {
        Some(pair) => pair.gap_center + pair.gap_width * aim_offset,
        None => bird.y,
    };

    if bird.y > aim && bird.velocity_y >= 0.0 {
        TickInput::flap()
    } else {
        TickInput::NONE
    }
}

/// Play one session from a fresh start until the first crash or the tick cap.
pub fn simulate_single_run(
    config: &SimConfig,
    seed: Option<u64>,
    rng: &mut ChaCha8Rng,
) -> RunStats {
    let dt = TICK_INTERVAL_MS as f64 / 1000.0;
    let mut session = GameSession::new(config.session);
    let mut bird = BirdBody::new(&config.session);
    let mut obstacles: Vec<ObstaclePair> = Vec::new();

    let mut stats = RunStats {
        seed,
        ..Default::default()
    };
    let mut last_gap_center: Option<f64> = None;
    let mut played = false;

    while stats.ticks < config.max_ticks_per_run {
        // Session starts in Finish; only stop on a Finish reached from Play
        if played && session.state == GameState::Finish {
            break;
        }

        let input = autopilot(session.state, &obstacles, &bird, config.aim_offset);
        let overlap = bird.overlaps_any(&obstacles);
        let out = tick(&mut session, input, overlap, rng);

        bird.apply_all(&out.physics);
        bird.step(dt);

        for event in &out.events {
            match *event {
                GameEvent::Spawned { gap_center, .. } => {
                    if let Some(previous) = last_gap_center {
                        let jump = (gap_center - previous).abs();
                        stats.max_gap_jump = stats.max_gap_jump.max(jump);
                    }
                    last_gap_center = Some(gap_center);
                    stats.pairs_spawned += 1;
                }
                GameEvent::SpedUp { .. } => stats.speedups += 1,
                GameEvent::Flapped => stats.flaps += 1,
                GameEvent::Transition {
                    to: GameState::Play,
                    ..
                } => played = true,
                _ => {}
            }
        }

        if out.crashed() {
            stats.crashed = true;
            debug!("crash at tick {} with score {}", stats.ticks, out.score);
        }

        stats.score = out.score;
        stats.final_scroll_speed = out.scroll_speed;
        obstacles = out.obstacles;
        stats.ticks += 1;
    }

    info!(
        "run (seed {:?}) finished: score {}, {} ticks",
        seed, stats.score, stats.ticks
    );
    stats
}

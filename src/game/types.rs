//! Session state for the obstacle course.
//!
//! Everything the simulation mutates lives in [`GameSession`], so several
//! sessions can run side by side (the simulator does exactly that).

use crate::constants::*;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Play/pause/finish state. A fresh session starts in `Finish`, so the first
/// flap runs a full restart instead of a resume.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Play,
    Pause,
    #[default]
    Finish,
}

impl GameState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Play => "Play",
            Self::Pause => "Pause",
            Self::Finish => "Finish",
        }
    }
}

/// Screen geometry. Every other tuning value is a constant or derived from this.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub screen_width: f64,
    pub screen_height: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            screen_width: GAME_WIDTH,
            screen_height: GAME_HEIGHT,
        }
    }
}

impl SessionConfig {
    pub fn new(screen_width: f64, screen_height: f64) -> Self {
        Self {
            screen_width,
            screen_height,
        }
    }

    /// Fixed horizontal position of the bird.
    pub fn bird_x(&self) -> f64 {
        self.screen_width / 4.0
    }

    /// Vertical position the bird is respawned at on restart.
    pub fn bird_start_y(&self) -> f64 {
        self.screen_height / 2.0 - 100.0
    }

    /// Scroll speed at the start of every session, in px per tick.
    pub fn initial_scroll_speed(&self) -> f64 {
        self.screen_width * ACCELERATION
    }

    /// Horizontal distance the newest pair travels before the next one spawns.
    pub fn spawn_spacing(&self) -> f64 {
        self.screen_width / 5.0
    }

    /// Largest vertical move of the gap center between consecutive pairs.
    pub fn gap_step(&self) -> f64 {
        self.screen_height / 4.0
    }

    /// New pairs appear just past the right edge.
    pub fn spawn_x(&self) -> f64 {
        self.screen_width + PIPE_WIDTH / 2.0
    }

    /// Pairs left of this are fully off screen.
    pub fn recycle_x(&self) -> f64 {
        -PIPE_WIDTH / 2.0
    }
}

/// Axis-aligned box given by its center, the way the arcade physics
/// collaborator positions bodies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hitbox {
    pub center_x: f64,
    pub center_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Hitbox {
    pub fn left(&self) -> f64 {
        self.center_x - self.width / 2.0
    }

    pub fn right(&self) -> f64 {
        self.center_x + self.width / 2.0
    }

    pub fn top(&self) -> f64 {
        self.center_y - self.height / 2.0
    }

    pub fn bottom(&self) -> f64 {
        self.center_y + self.height / 2.0
    }

    /// Strict overlap: touching edges do not count.
    pub fn intersects(&self, other: &Hitbox) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// A top/bottom obstacle pair sharing one x position and a vertical gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstaclePair {
    pub id: u64,
    /// Horizontal center of both members.
    pub x: f64,
    pub gap_center: f64,
    pub gap_width: f64,
    /// Set once the bird has passed this pair and it has been counted.
    pub scored: bool,
}

impl ObstaclePair {
    pub fn new(id: u64, x: f64, gap_center: f64, gap_width: f64) -> Self {
        Self {
            id,
            x,
            gap_center,
            gap_width,
            scored: false,
        }
    }

    /// Distance from the gap center to the center of either member.
    fn member_offset(&self) -> f64 {
        (self.gap_width + PIPE_HEIGHT) / 2.0
    }

    pub fn top_member(&self) -> Hitbox {
        Hitbox {
            center_x: self.x,
            center_y: self.gap_center - self.member_offset(),
            width: PIPE_WIDTH,
            height: PIPE_HEIGHT,
        }
    }

    pub fn bottom_member(&self) -> Hitbox {
        Hitbox {
            center_x: self.x,
            center_y: self.gap_center + self.member_offset(),
            width: PIPE_WIDTH,
            height: PIPE_HEIGHT,
        }
    }

    pub fn gap_top(&self) -> f64 {
        self.gap_center - self.gap_width / 2.0
    }

    pub fn gap_bottom(&self) -> f64 {
        self.gap_center + self.gap_width / 2.0
    }
}

/// Pairs passed in the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreState {
    pub counter: u32,
    /// Score at which the last speed-up fired.
    pub last_speedup_threshold: u32,
}

impl ScoreState {
    pub fn new() -> Self {
        Self {
            counter: 0,
            last_speedup_threshold: 1,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for ScoreState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyState {
    /// Leftward displacement of every pair per tick.
    pub scroll_speed: f64,
    pub acceleration_factor: f64,
    /// Gap center of the most recently spawned pair. Survives restarts.
    pub previous_gap_center: f64,
    /// Speed-ups applied in the current session.
    pub speedups: u32,
}

impl DifficultyState {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            scroll_speed: config.initial_scroll_speed(),
            acceleration_factor: ACCELERATION,
            previous_gap_center: config.screen_height / 2.0,
            speedups: 0,
        }
    }

    /// Factor applied to `scroll_speed` at each milestone.
    pub fn speedup_multiplier(&self) -> f64 {
        1.0 + self.acceleration_factor * SPEEDUP_GAIN
    }

    /// Back to the starting speed. `previous_gap_center` is left alone.
    pub fn reset_speed(&mut self, config: &SessionConfig) {
        self.scroll_speed = config.initial_scroll_speed();
        self.speedups = 0;
    }
}

/// Visibility of the overlay texts owned by the presentation collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    pub pause_message_visible: bool,
    pub score_visible: bool,
    /// Full finish text including the final score, when shown.
    pub finish_message: Option<String>,
}

impl Hud {
    pub fn score_text(counter: u32) -> String {
        format!("{}{}", SCORE_MESSAGE_TEXT, counter)
    }
}

/// One independent game: state machine, obstacle course, score and difficulty.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub config: SessionConfig,
    pub state: GameState,
    /// Spawn order, oldest (leftmost) first.
    pub obstacles: VecDeque<ObstaclePair>,
    pub score: ScoreState,
    pub difficulty: DifficultyState,
    pub hud: Hud,
    pub next_pair_id: u64,
    /// Ticks processed since creation, across restarts.
    pub tick_count: u64,
}

impl GameSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            state: GameState::Finish,
            obstacles: VecDeque::new(),
            score: ScoreState::new(),
            difficulty: DifficultyState::new(&config),
            hud: Hud::default(),
            next_pair_id: 0,
            tick_count: 0,
        }
    }

    pub fn bird_x(&self) -> f64 {
        self.config.bird_x()
    }

    pub fn scroll_speed(&self) -> f64 {
        self.difficulty.scroll_speed
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

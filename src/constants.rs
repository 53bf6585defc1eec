// Screen dimensions (world pixels, y axis points down)
pub const GAME_WIDTH: f64 = 800.0;
pub const GAME_HEIGHT: f64 = 600.0;

// Host timing: one core tick per rendered frame
pub const TICK_INTERVAL_MS: u64 = 16;

// Bird
pub const BIRD_SIZE: f64 = 32.0; // 16px sprite drawn at 2x
pub const BIRD_BOUNCE: f64 = 0.2;
pub const GRAVITY: f64 = 300.0;
pub const GRAVITY_ZERO: f64 = 0.0;
pub const FLAP_VELOCITY: f64 = 350.0;

// Scroll speed ramp
pub const ACCELERATION: f64 = 0.003;
pub const SPEEDUP_SCORE_INTERVAL: u32 = 10;
/// Scales `acceleration_factor` into the per-milestone speed multiplier.
pub const SPEEDUP_GAIN: f64 = 50.0;

// Obstacles
pub const PIPE_WIDTH: f64 = 60.0;
pub const PIPE_HEIGHT: f64 = 480.0;

/// Candidate gap widths in px with their draw weights, widest first.
/// Weights lean toward the narrow end: 1 : 4 : 8 : 6 : 3.
pub const GAP_WIDTH_TABLE: [(f64, u32); 5] = [
    (200.0, 1),
    (175.0, 4),
    (150.0, 8),
    (130.0, 6),
    (110.0, 3),
];

// HUD text
pub const PAUSE_MESSAGE_TEXT: &str = "Press SPACE to play\n\nESCAPE to pause";
pub const FINISH_MESSAGE_TEXT: &str = "Game Finished!\n\nPress SPACE to restart";
pub const SCORE_MESSAGE_TEXT: &str = "Score: ";

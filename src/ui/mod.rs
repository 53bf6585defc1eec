//! Terminal presentation. Reads tick output, never mutates the session.

pub mod game_common;
pub mod play_scene;

use ratatui::Frame;
use skyward::game::{SessionConfig, TickOutput};
use skyward::physics::BirdBody;

pub fn draw_ui(frame: &mut Frame, config: &SessionConfig, output: &TickOutput, bird: &BirdBody) {
    let area = frame.size();
    play_scene::render_game(frame, area, config, output, bird);
}

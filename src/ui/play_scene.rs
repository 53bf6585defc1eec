//! Terminal rendering of the obstacle course.

use crate::ui::game_common::{draw_message_box, draw_scene_frame, draw_side_panel, status_line};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use skyward::constants::{PAUSE_MESSAGE_TEXT, PIPE_WIDTH};
use skyward::game::{GameState, Hud, ObstaclePair, SessionConfig, TickOutput};
use skyward::physics::BirdBody;

const CONTROLS: [(&str, &str); 3] = [("[Space]", "Flap"), ("[Esc]", "Pause"), ("[Q]", "Quit")];

/// What one terminal cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Pipe,
    Bird,
}

/// Sample the world at the center of terminal cell (`col`, `row`).
pub fn cell_at(
    col: u16,
    row: u16,
    cols: u16,
    rows: u16,
    config: &SessionConfig,
    obstacles: &[ObstaclePair],
    bird: &BirdBody,
) -> Cell {
    let cell_w = config.screen_width / cols.max(1) as f64;
    let cell_h = config.screen_height / rows.max(1) as f64;
    let x = (col as f64 + 0.5) * cell_w;
    let y = (row as f64 + 0.5) * cell_h;

    if (bird.x - x).abs() <= cell_w / 2.0 && (bird.y - y).abs() <= cell_h / 2.0 {
        return Cell::Bird;
    }

    let in_pipe = obstacles.iter().any(|pair| {
        (pair.x - x).abs() <= PIPE_WIDTH / 2.0 && (y < pair.gap_top() || y > pair.gap_bottom())
    });
    if in_pipe {
        Cell::Pipe
    } else {
        Cell::Empty
    }
}

/// Render the whole game screen.
pub fn render_game(
    frame: &mut Frame,
    area: Rect,
    config: &SessionConfig,
    output: &TickOutput,
    bird: &BirdBody,
) {
    let layout = draw_scene_frame(frame, area);

    render_play_area(frame, layout.field, config, output, bird);
    render_overlay(frame, layout.field, output.state, &output.hud);
    render_status(frame, layout.status, output);
    if let Some(side) = layout.side {
        render_info_panel(frame, side, output);
    }
}

fn render_play_area(
    frame: &mut Frame,
    area: Rect,
    config: &SessionConfig,
    output: &TickOutput,
    bird: &BirdBody,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let bird_char = if bird.velocity_y < -50.0 {
        "▲"
    } else if bird.velocity_y > 200.0 {
        "▼"
    } else {
        "►"
    };

    let mut lines = Vec::with_capacity(area.height as usize);
    for row in 0..area.height {
        let spans: Vec<Span> = (0..area.width)
            .map(|col| {
                match cell_at(
                    col,
                    row,
                    area.width,
                    area.height,
                    config,
                    &output.obstacles,
                    bird,
                ) {
                    Cell::Bird => Span::styled(
                        bird_char,
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Cell::Pipe => Span::styled("█", Style::default().fg(Color::Green)),
                    Cell::Empty => Span::raw(" "),
                }
            })
            .collect();
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_overlay(frame: &mut Frame, area: Rect, state: GameState, hud: &Hud) {
    if let Some(message) = &hud.finish_message {
        draw_message_box(frame, area, message, Color::Red);
    } else if hud.pause_message_visible {
        draw_message_box(frame, area, PAUSE_MESSAGE_TEXT, Color::Red);
    } else if state == GameState::Finish {
        draw_message_box(frame, area, "Press SPACE to start", Color::Yellow);
    }
}

fn render_status(frame: &mut Frame, area: Rect, output: &TickOutput) {
    let (text, color) = match output.state {
        GameState::Play if output.hud.score_visible => (Hud::score_text(output.score), Color::Green),
        GameState::Play => (String::new(), Color::Green),
        GameState::Pause => ("Paused".to_string(), Color::Yellow),
        GameState::Finish => ("Game over".to_string(), Color::Red),
    };
    frame.render_widget(Paragraph::new(status_line(&text, color, &CONTROLS)), area);
}

fn render_info_panel(frame: &mut Frame, area: Rect, output: &TickOutput) {
    let inner = draw_side_panel(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    let score = if output.hud.score_visible || output.state == GameState::Finish {
        output.score.to_string()
    } else {
        "-".to_string()
    };

    let lines = vec![
        Line::from(Span::styled(
            format!(" {} ", output.state.name()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Score: ", label),
            Span::styled(score, value),
        ]),
        Line::from(vec![
            Span::styled(" Speed: ", label),
            Span::styled(format!("{:.2}", output.scroll_speed), value),
        ]),
        Line::from(vec![
            Span::styled(" Pipes: ", label),
            Span::styled(output.obstacles.len().to_string(), value),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

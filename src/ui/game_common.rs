//! Screen frame, status line and overlay boxes around the play field.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const TITLE: &str = " Skyward ";
const SIDE_PANEL_WIDTH: u16 = 22;
/// Below this inner width the side panel is dropped and the field gets it all.
const MIN_WIDTH_WITH_SIDE_PANEL: u16 = 60;

/// Areas inside the outer border.
pub struct SceneLayout {
    pub field: Rect,
    /// Single line under the field.
    pub status: Rect,
    pub side: Option<Rect>,
}

/// Split the inner area of `outer` into field, status line and side panel.
pub fn split_scene(outer: Rect) -> SceneLayout {
    let inner = Block::default().borders(Borders::ALL).inner(outer);

    let (left, side) = if inner.width >= MIN_WIDTH_WITH_SIDE_PANEL {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(SIDE_PANEL_WIDTH)])
            .split(inner);
        (cols[0], Some(cols[1]))
    } else {
        (inner, None)
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(left);

    SceneLayout {
        field: rows[0],
        status: rows[1],
        side,
    }
}

/// Clear the screen, draw the outer border and return the scene areas.
pub fn draw_scene_frame(frame: &mut Frame, area: Rect) -> SceneLayout {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(TITLE)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);
    split_scene(area)
}

/// Status text in `color`, then the key hints dimmed.
pub fn status_line<'a>(status: &'a str, color: Color, hints: &[(&'a str, &'a str)]) -> Line<'a> {
    let mut spans = vec![Span::styled(
        status,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )];
    for (key, action) in hints {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(*key, Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

/// Bordered side panel; returns the inner area.
pub fn draw_side_panel(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Area for a bordered box fitting `text`, centered in `area`.
pub fn centered_box(area: Rect, text: &str) -> Rect {
    let width = text
        .lines()
        .map(|l| l.chars().count() as u16)
        .max()
        .unwrap_or(0)
        .saturating_add(4)
        .min(area.width);
    let height = (text.lines().count() as u16).saturating_add(2).min(area.height);
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

/// Message box drawn over `area`. Multi-line text is split on `\n`.
pub fn draw_message_box(frame: &mut Frame, area: Rect, text: &str, color: Color) {
    let style = Style::default().fg(color).add_modifier(Modifier::BOLD);
    let lines: Vec<Line> = text.lines().map(|line| Line::styled(line, style)).collect();
    let box_area = centered_box(area, text);

    frame.render_widget(Clear, box_area);
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );
    frame.render_widget(paragraph, box_area);
}

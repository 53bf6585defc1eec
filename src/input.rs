//! Keyboard mapping for the terminal host.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use skyward::game::TickInput;

/// UI-agnostic key actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Flap,        // Space or Up
    TogglePause, // Esc or P
    Quit,        // Q or Ctrl-C
    Other,
}

pub fn map_key(key: &KeyEvent) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }
    match key.code {
        KeyCode::Char(' ') | KeyCode::Up => KeyAction::Flap,
        KeyCode::Esc | KeyCode::Char('p') | KeyCode::Char('P') => KeyAction::TogglePause,
        KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
        _ => KeyAction::Other,
    }
}

/// Collects key presses between two ticks.
///
/// Several presses of the same key within one frame still count once, and
/// repeat/release events from held keys are dropped.
#[derive(Debug, Default)]
pub struct InputBuffer {
    pending: TickInput,
    quit: bool,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match map_key(key) {
            KeyAction::Flap => self.pending.flap = true,
            KeyAction::TogglePause => self.pending.toggle_pause = true,
            KeyAction::Quit => self.quit = true,
            KeyAction::Other => {}
        }
    }

    /// Hand out this frame's input and start a fresh frame.
    pub fn take(&mut self) -> TickInput {
        std::mem::take(&mut self.pending)
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }
}

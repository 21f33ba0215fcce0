//! Keyboard input mapping

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::accumulator::Command;

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward a command to the calculator
    Command(Command),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        // Release/repeat reports would double every keystroke
        if kind != KeyEventKind::Press {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char(c) => Self::action_for_char(c),
            KeyCode::Enter => KeyAction::Command(Command::Evaluate),
            KeyCode::Backspace => KeyAction::Command(Command::Backspace),
            KeyCode::Esc | KeyCode::Delete => KeyAction::Command(Command::Clear),
            _ => KeyAction::None,
        }
    }

    /// Maps a typed character to an action
    #[must_use]
    pub fn action_for_char(c: char) -> KeyAction {
        Command::from_char(c).map_or(KeyAction::None, KeyAction::Command)
    }
}

//! TUI application state

use ratatui::layout::Rect;
use tracing::trace;

use crate::core::accumulator::Command;
use crate::core::Accumulator;

use super::input::KeyAction;
use super::keypad::Keypad;

/// Calculator application state
#[derive(Debug, Default)]
pub struct CalculatorApp {
    accumulator: Accumulator,
    keypad: Keypad,
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates a new calculator app with empty buffers
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the calculator state
    #[must_use]
    pub fn accumulator(&self) -> &Accumulator {
        &self.accumulator
    }

    /// Returns the keypad, including its highlight state
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Secondary display line (committed expression)
    #[must_use]
    pub fn expression_line(&self) -> &str {
        self.accumulator.expression_line()
    }

    /// Primary display line (formatted operand or error marker)
    #[must_use]
    pub fn operand_line(&self) -> String {
        self.accumulator.operand_line()
    }

    /// True while the operand shows the error marker
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.accumulator.is_error()
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Applies a command and highlights its button
    pub fn apply(&mut self, command: Command) {
        trace!(?command, "applying command");
        self.accumulator.apply(command);
        self.keypad.highlight(command);
    }

    /// Applies a keyboard action
    pub fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Command(command) => self.apply(command),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Handles a mouse click at terminal position (x, y) given where the
    /// keypad was drawn. Returns the command issued, if a button was hit.
    pub fn click(&mut self, keypad_area: Rect, x: u16, y: u16) -> Option<Command> {
        let command = self.keypad.command_at(keypad_area, x, y)?;
        self.apply(command);
        Some(command)
    }
}

//! Unified calculator driver
//!
//! Scenarios are written once against [`CalculatorDriver`] and run against
//! both the bare accumulator and the full TUI application, so the keypad,
//! key mapping and core state machine are held to the same behaviour.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::accumulator::Command;
use crate::core::{Accumulator, ERROR_MARKER};
use crate::tui::{CalculatorApp, InputHandler};

/// Abstract driver for calculator interactions
///
/// # Example
///
/// ```rust
/// use desk_calculator::driver::{CalculatorDriver, HeadlessDriver};
///
/// let mut driver = HeadlessDriver::new();
/// driver.type_keys("12+7");
/// assert_eq!(driver.expression_line(), "12+");
/// assert_eq!(driver.operand_line(), "7");
/// ```
pub trait CalculatorDriver {
    /// Issues one command
    fn press(&mut self, command: Command);

    /// Replays a key script; characters without a command are skipped
    fn type_keys(&mut self, script: &str) {
        for command in script.chars().filter_map(Command::from_char) {
            self.press(command);
        }
    }

    /// Secondary display line
    fn expression_line(&self) -> String;

    /// Primary display line
    fn operand_line(&self) -> String;

    /// True while the error marker is shown
    fn is_error(&self) -> bool {
        self.operand_line() == ERROR_MARKER
    }
}

/// Driver over the bare accumulator
#[derive(Debug, Default)]
pub struct HeadlessDriver {
    accumulator: Accumulator,
}

impl HeadlessDriver {
    /// Creates a driver with empty buffers
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the underlying accumulator
    #[must_use]
    pub fn accumulator(&self) -> &Accumulator {
        &self.accumulator
    }
}

impl CalculatorDriver for HeadlessDriver {
    fn press(&mut self, command: Command) {
        self.accumulator.apply(command);
    }

    fn expression_line(&self) -> String {
        self.accumulator.expression_line().to_string()
    }

    fn operand_line(&self) -> String {
        self.accumulator.operand_line()
    }
}

/// TUI driver: keys go through the same input mapping as a real terminal
#[derive(Debug, Default)]
pub struct TuiDriver {
    app: CalculatorApp,
    input: InputHandler,
}

impl TuiDriver {
    /// Creates a new TUI driver
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a TUI driver with an existing app
    #[must_use]
    pub fn with_app(app: CalculatorApp) -> Self {
        Self {
            app,
            input: InputHandler::new(),
        }
    }

    /// Returns a reference to the underlying app
    #[must_use]
    pub fn app(&self) -> &CalculatorApp {
        &self.app
    }

    /// Returns a mutable reference to the underlying app
    pub fn app_mut(&mut self) -> &mut CalculatorApp {
        &mut self.app
    }

    /// Sends a key event through the input handler
    pub fn send_key(&mut self, event: KeyEvent) {
        let action = self.input.handle_key(event);
        self.app.handle_action(action);
    }

    /// Key a terminal would deliver for a script character
    fn key_for(c: char) -> KeyEvent {
        let code = match c {
            '<' => KeyCode::Backspace,
            '\n' | '\r' => KeyCode::Enter,
            _ => KeyCode::Char(c),
        };
        KeyEvent::new(code, KeyModifiers::NONE)
    }
}

impl CalculatorDriver for TuiDriver {
    fn press(&mut self, command: Command) {
        self.app.apply(command);
    }

    fn type_keys(&mut self, script: &str) {
        for c in script.chars() {
            self.send_key(Self::key_for(c));
        }
    }

    fn expression_line(&self) -> String {
        self.app.expression_line().to_string()
    }

    fn operand_line(&self) -> String {
        self.app.operand_line()
    }
}

// ===== Unified scenarios =====
// These work with ANY CalculatorDriver implementation

/// Verifies the four binary operators
///
/// # Panics
///
/// Panics if the driver shows an unexpected result.
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    for (script, expected) in [("2+3=", "5"), ("10-4=", "6"), ("6*7=", "42"), ("20/4=", "5")] {
        driver.press(Command::Clear);
        driver.type_keys(script);
        assert_eq!(driver.operand_line(), expected, "script {script}");
        assert_eq!(driver.expression_line(), "");
    }
}

/// Verifies precedence and left associativity
///
/// # Panics
///
/// Panics if the driver shows an unexpected result.
pub fn verify_precedence<D: CalculatorDriver>(driver: &mut D) {
    for (script, expected) in [("2+3*4=", "14"), ("8-3-2=", "3"), ("8/4/2=", "1")] {
        driver.press(Command::Clear);
        driver.type_keys(script);
        assert_eq!(driver.operand_line(), expected, "script {script}");
    }
}

/// Verifies the committed line while an expression is being built
///
/// # Panics
///
/// Panics if the display lines differ from the expected state.
pub fn verify_display_lines<D: CalculatorDriver>(driver: &mut D) {
    driver.press(Command::Clear);
    driver.type_keys("12+7");
    assert_eq!(driver.expression_line(), "12+");
    assert_eq!(driver.operand_line(), "7");

    driver.press(Command::Clear);
    driver.type_keys("5+*");
    assert_eq!(driver.expression_line(), "5×");
    assert_eq!(driver.operand_line(), "0");

    driver.press(Command::Clear);
    driver.type_keys("2.50");
    assert_eq!(driver.operand_line(), "2.5");
}

/// Verifies square and square root
///
/// # Panics
///
/// Panics if the driver shows an unexpected result.
pub fn verify_unary<D: CalculatorDriver>(driver: &mut D) {
    driver.press(Command::Clear);
    driver.type_keys("3s");
    assert_eq!(driver.operand_line(), "9");

    driver.press(Command::Clear);
    driver.type_keys("16r");
    assert_eq!(driver.operand_line(), "4");

    driver.press(Command::Clear);
    driver.type_keys("2r");
    assert_eq!(driver.operand_line(), "1.4142135623730951");
}

/// Verifies the error marker and its recovery paths
///
/// # Panics
///
/// Panics if a failure does not show the error marker.
pub fn verify_error_handling<D: CalculatorDriver>(driver: &mut D) {
    driver.press(Command::Clear);
    driver.type_keys("5/0=");
    assert!(driver.is_error());
    assert_eq!(driver.expression_line(), "5÷");

    driver.press(Command::Clear);
    assert!(!driver.is_error());
    assert_eq!(driver.operand_line(), "0");

    driver.type_keys("0-4=r");
    assert!(driver.is_error());
    assert_eq!(driver.expression_line(), "");

    driver.press(Command::Clear);
    driver.type_keys("5+=");
    assert!(driver.is_error());
    assert_eq!(driver.expression_line(), "5+");
}

/// Runs every scenario
pub fn run_all_scenarios<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_precedence(driver);
    verify_display_lines(driver);
    verify_unary(driver);
    verify_error_handling(driver);
}

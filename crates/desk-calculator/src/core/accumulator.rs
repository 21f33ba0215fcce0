//! Two-buffer expression accumulator behind the keypad
//!
//! The committed expression holds finished `<operand><operator>` pairs
//! using the display glyphs (`×`, `÷`); the current operand is the number
//! being typed. Evaluation swaps the glyphs for ASCII operators and hands
//! the text to [`Evaluator`].

use tracing::{debug, trace};

use crate::core::evaluator::Evaluator;
use crate::core::format::{self, ResultKind};
use crate::core::{CalcError, CalcResult, Calculator, Operation, ERROR_MARKER};

/// Operator as entered on the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `×`
    Multiply,
    /// `÷`
    Divide,
}

impl Op {
    /// All keypad operators, in display order
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Glyph shown in the committed expression
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// The evaluator operation this glyph stands for
    #[must_use]
    pub const fn operation(self) -> Operation {
        match self {
            Self::Add => Operation::Add,
            Self::Subtract => Operation::Subtract,
            Self::Multiply => Operation::Multiply,
            Self::Divide => Operation::Divide,
        }
    }

    /// Maps a typed or displayed character to an operator
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' | '×' | 'x' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }
}

/// One user action on the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Append a digit (0-9)
    Digit(u8),
    /// Append a decimal point
    Point,
    /// Commit the operand with an operator
    Operator(Op),
    /// Evaluate the whole expression (`=`)
    Evaluate,
    /// Reset both buffers (`C`)
    Clear,
    /// Drop the last operand character (`⌫`)
    Backspace,
    /// Square the operand (`x²`)
    Square,
    /// Square root of the operand (`√`)
    SquareRoot,
}

impl Command {
    /// Maps a key script character to a command.
    ///
    /// Accepts the keyboard bindings plus `<` for backspace, so a whole
    /// session can be written as one string (`"3*4="`).
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        if let Some(d) = c.to_digit(10) {
            return Some(Self::Digit(d as u8));
        }
        if let Some(op) = Op::from_char(c) {
            return Some(Self::Operator(op));
        }
        match c {
            '.' => Some(Self::Point),
            '=' | '\n' | '\r' => Some(Self::Evaluate),
            'c' | 'C' => Some(Self::Clear),
            '<' => Some(Self::Backspace),
            's' => Some(Self::Square),
            'r' => Some(Self::SquareRoot),
            _ => None,
        }
    }
}

/// Calculator state: committed expression plus current operand
#[derive(Debug, Clone, Default)]
pub struct Accumulator {
    committed: String,
    current: String,
    evaluator: Evaluator,
}

impl Accumulator {
    /// Creates an accumulator with both buffers empty
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The committed expression, with display glyphs
    #[must_use]
    pub fn committed(&self) -> &str {
        &self.committed
    }

    /// The raw current operand
    #[must_use]
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Secondary display line
    #[must_use]
    pub fn expression_line(&self) -> &str {
        &self.committed
    }

    /// Primary display line: the formatted operand or the error marker
    #[must_use]
    pub fn operand_line(&self) -> String {
        format::display_operand(&self.current).into_owned()
    }

    /// True while the operand holds the error marker
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.current == ERROR_MARKER
    }

    /// True when both buffers are empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.committed.is_empty() && self.current.is_empty()
    }

    /// Dispatches a single command
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Digit(d) => {
                if let Some(c) = char::from_digit(u32::from(d), 10) {
                    self.append_digit_or_point(c);
                }
            }
            Command::Point => self.append_digit_or_point('.'),
            Command::Operator(op) => self.append_operator(op),
            Command::Evaluate => self.evaluate(),
            Command::Clear => self.clear(),
            Command::Backspace => self.backspace(),
            Command::Square => self.square(),
            Command::SquareRoot => self.sqrt(),
        }
    }

    /// Appends a digit or decimal point to the operand.
    ///
    /// A second point is ignored. Characters other than ASCII digits and
    /// `.` are ignored as well.
    pub fn append_digit_or_point(&mut self, token: char) {
        if !(token.is_ascii_digit() || token == '.') {
            trace!(%token, "ignoring non-numeric token");
            return;
        }
        if token == '.' && self.current.contains('.') {
            return;
        }
        self.current.push(token);
        trace!(current = %self.current, "operand updated");
    }

    /// Commits the operand followed by `op`.
    ///
    /// With an empty operand the pending operator is replaced instead;
    /// with both buffers empty nothing happens.
    pub fn append_operator(&mut self, op: Op) {
        if self.is_empty() {
            return;
        }

        if self.current.is_empty() {
            self.committed.pop();
        } else {
            self.committed.push_str(&self.current);
            self.current.clear();
        }
        self.committed.push(op.glyph());
        trace!(committed = %self.committed, "operator committed");
    }

    /// Resets both buffers
    pub fn clear(&mut self) {
        self.committed.clear();
        self.current.clear();
    }

    /// Removes the last operand character; the committed expression is
    /// never touched.
    pub fn backspace(&mut self) {
        self.current.pop();
    }

    /// Replaces the operand with its square
    pub fn square(&mut self) {
        self.apply_unary("square", |value| Calculator::multiply(value, value));
    }

    /// Replaces the operand with its square root; negative operands fail
    pub fn sqrt(&mut self) {
        self.apply_unary("sqrt", |value| {
            if value < 0.0 {
                Err(CalcError::NegativeRoot(value))
            } else {
                Ok(value.sqrt())
            }
        });
    }

    /// The full expression with ASCII operators, as handed to the evaluator
    #[must_use]
    pub fn canonical_expression(&self) -> String {
        self.committed
            .chars()
            .chain(self.current.chars())
            .map(|c| match c {
                '×' => '*',
                '÷' => '/',
                other => other,
            })
            .collect()
    }

    /// Evaluates committed expression + operand.
    ///
    /// On success the committed expression is cleared and the operand holds
    /// the result, rendered as an integer only when the expression has no
    /// division and no decimal or exponent literal. On failure the operand becomes the error marker and the
    /// committed expression is kept.
    pub fn evaluate(&mut self) {
        if self.is_empty() {
            return;
        }

        let expression = self.canonical_expression();
        match self.evaluator.evaluate_str(&expression) {
            Ok(value) => {
                debug!(%expression, value, "evaluated");
                self.committed.clear();
                self.current = format::result_text(value, ResultKind::of(&expression));
            }
            Err(err) => self.fail("evaluate", &err),
        }
    }

    fn apply_unary(&mut self, name: &str, f: impl FnOnce(f64) -> CalcResult<f64>) {
        if self.current.is_empty() {
            return;
        }

        match parse_operand(&self.current).and_then(f) {
            Ok(value) => {
                debug!(operation = name, operand = %self.current, value, "unary applied");
                self.current = format::float_text(value);
            }
            Err(err) => self.fail(name, &err),
        }
    }

    fn fail(&mut self, operation: &str, err: &CalcError) {
        debug!(operation, error = %err, "operation failed");
        self.current = ERROR_MARKER.to_string();
    }
}

fn parse_operand(text: &str) -> CalcResult<f64> {
    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| CalcError::InvalidOperand(text.to_string()))
}

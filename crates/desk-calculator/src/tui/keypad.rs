//! Clickable keypad for the TUI calculator
//!
//! The grid mirrors a desk calculator:
//!
//! ```text
//! [ C ] [ x²] [ √ ] [ ÷ ]
//! [ 7 ] [ 8 ] [ 9 ] [ × ]
//! [ 4 ] [ 5 ] [ 6 ] [ - ]
//! [ 1 ] [ 2 ] [ 3 ] [ + ]
//! [ ⌫ ] [ . ] [ 0 ] [ = ]
//! ```

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::{accumulator::Command, Op};

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Text on the button
    pub label: &'static str,
    /// Whether the button is currently highlighted
    pub pressed: bool,
    /// The command this button issues
    pub action: Command,
}

impl KeypadButton {
    /// Creates a button
    #[must_use]
    pub const fn new(label: &'static str, action: Command) -> Self {
        Self {
            label,
            pressed: false,
            action,
        }
    }

    /// Creates a digit button
    #[must_use]
    pub const fn digit(d: u8) -> Self {
        const LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        Self::new(LABELS[(d % 10) as usize], Command::Digit(d % 10))
    }

    /// Creates an operator button labelled with the display glyph
    #[must_use]
    pub const fn operator(op: Op) -> Self {
        let label = match op {
            Op::Add => "+",
            Op::Subtract => "-",
            Op::Multiply => "×",
            Op::Divide => "÷",
        };
        Self::new(label, Command::Operator(op))
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    /// Label width in terminal cells
    #[must_use]
    pub fn label_width(&self) -> u16 {
        self.label.chars().count() as u16
    }
}

/// The 5x4 keypad grid
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order
    buttons: Vec<KeypadButton>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard layout
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            // Row 1: C x² √ ÷
            KeypadButton::new("C", Command::Clear),
            KeypadButton::new("x²", Command::Square),
            KeypadButton::new("√", Command::SquareRoot),
            KeypadButton::operator(Op::Divide),
            // Row 2: 7 8 9 ×
            KeypadButton::digit(7),
            KeypadButton::digit(8),
            KeypadButton::digit(9),
            KeypadButton::operator(Op::Multiply),
            // Row 3: 4 5 6 -
            KeypadButton::digit(4),
            KeypadButton::digit(5),
            KeypadButton::digit(6),
            KeypadButton::operator(Op::Subtract),
            // Row 4: 1 2 3 +
            KeypadButton::digit(1),
            KeypadButton::digit(2),
            KeypadButton::digit(3),
            KeypadButton::operator(Op::Add),
            // Row 5: ⌫ . 0 =
            KeypadButton::new("⌫", Command::Backspace),
            KeypadButton::new(".", Command::Point),
            KeypadButton::digit(0),
            KeypadButton::new("=", Command::Evaluate),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds the button issuing `command`
    #[must_use]
    pub fn find_button(&self, command: Command) -> Option<usize> {
        self.buttons.iter().position(|b| b.action == command)
    }

    /// Sets a button as pressed by index
    pub fn press_button(&mut self, index: usize) {
        if let Some(btn) = self.buttons.get_mut(index) {
            btn.set_pressed(true);
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Highlights only the button for `command`
    pub fn highlight(&mut self, command: Command) {
        self.release_all();
        if let Some(idx) = self.find_button(command) {
            self.press_button(idx);
        }
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Returns an iterator over buttons with their (row, col) positions
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.buttons.iter().enumerate().map(move |(i, btn)| {
            let row = i / self.cols;
            let col = i % self.cols;
            ((row, col), btn)
        })
    }

    /// Converts a click position to a button index.
    ///
    /// `area` is the whole widget including its border; border cells and
    /// positions outside never hit.
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let inner_x = rel_x - 1;
        let inner_y = rel_y - 1;

        let btn_width = (area.width - 2) / self.cols as u16;
        let btn_height = (area.height - 2) / self.rows as u16;

        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = (inner_x / btn_width) as usize;
        let row = (inner_y / btn_height) as usize;

        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    /// Command of the button under a click, if any
    #[must_use]
    pub fn command_at(&self, area: Rect, x: u16, y: u16) -> Option<Command> {
        self.hit_test(area, x, y)
            .and_then(|idx| self.get_button(idx))
            .map(|btn| btn.action)
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }

    fn button_style(btn: &KeypadButton) -> Style {
        if btn.pressed {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        match btn.action {
            Command::Digit(_) | Command::Point => Style::default().fg(Color::White),
            Command::Operator(_) | Command::Evaluate => Style::default()
                .fg(Color::Rgb(0xff, 0x95, 0x00))
                .add_modifier(Modifier::BOLD),
            Command::Clear => Style::default().fg(Color::Red),
            Command::Backspace | Command::Square | Command::SquareRoot => {
                Style::default().fg(Color::Gray)
            }
        }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        let (rows, cols) = self.keypad.dimensions();
        if inner.width < cols as u16 || inner.height < rows as u16 {
            return;
        }

        let btn_width = inner.width / cols as u16;
        let btn_height = inner.height / rows as u16;

        for ((row, col), btn) in self.keypad.buttons_with_positions() {
            let x = inner.x + (col as u16 * btn_width);
            let y = inner.y + (row as u16 * btn_height);

            let label_width = btn.label_width() + 2;
            if btn_width < label_width {
                continue;
            }

            let label = format!("[{}]", btn.label);
            let label_x = x + (btn_width - label_width) / 2;
            let label_y = y + btn_height / 2;

            buf.set_span(
                label_x,
                label_y,
                &Span::styled(label, Self::button_style(btn)),
                btn_width,
            );
        }
    }
}

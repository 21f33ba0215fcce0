//! TUI rendering
//!
//! The screen is a two-line display above the keypad, with a shortcut
//! sidebar on the right.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Title drawn on the outer border
pub const DEMO_TITLE: &str = " Desk Calculator ";

/// Keyboard shortcuts listed in the sidebar
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9 .", "Digits"),
    ("+ - * /", "Operators"),
    ("Enter =", "Evaluate"),
    ("Bksp", "Delete"),
    ("Esc c", "Clear"),
    ("s", "Square"),
    ("r", "Sqrt"),
    ("q", "Quit"),
];

/// Screen regions, computed once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Two-line display
    pub display: Rect,
    /// Clickable keypad
    pub keypad: Rect,
    /// Shortcut sidebar
    pub help: Rect,
}

/// Splits the terminal area into display, keypad and help regions
#[must_use]
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([
            Constraint::Min(26),    // Display + keypad
            Constraint::Length(24), // Help sidebar
        ])
        .split(area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Display
            Constraint::Min(12),   // Keypad
        ])
        .split(columns[0]);

    ScreenLayout {
        display: rows[0],
        keypad: rows[1],
        help: columns[1],
    }
}

/// Renders the calculator UI to the frame and returns the regions used,
/// so clicks can be hit-tested against the keypad that was drawn
pub fn render(app: &CalculatorApp, frame: &mut Frame) -> ScreenLayout {
    let area = frame.area();
    let layout = screen_layout(area);
    frame.render_widget(CalculatorUI::new(app), area);
    layout
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    /// Renders the committed expression above the current operand
    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let operand_style = if self.app.is_error() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };

        let lines = vec![
            Line::from(Span::styled(
                self.app.expression_line(),
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(self.app.operand_line(), operand_style)),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }

    fn render_help_sidebar(area: Rect, buf: &mut Buffer) {
        let shortcuts: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>8}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        List::new(shortcuts)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(DEMO_TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let layout = screen_layout(area);
        self.render_display(layout.display, buf);
        KeypadWidget::new(self.app.keypad()).render(layout.keypad, buf);
        Self::render_help_sidebar(layout.help, buf);
    }
}

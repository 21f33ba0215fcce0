//! Terminal session: raw mode, alternate screen and the event loop

use std::io;

use crossterm::{
    cursor::Show,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, layout::Rect, Terminal};
use tracing::{debug, info, warn};

use super::app::CalculatorApp;
use super::input::InputHandler;
use super::ui::render;
use crate::error::{AppError, AppResult};

/// Runs the interactive calculator until the user quits
///
/// # Errors
///
/// Returns [`crate::error::AppError::Io`] if the terminal cannot be set up,
/// drawn to or restored.
pub fn run() -> AppResult<()> {
    let session = TerminalSession::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    info!("terminal session started");
    let mut app = CalculatorApp::new();
    let result = run_app(&mut terminal, &mut app);

    let restored = session.restore();
    info!("terminal session ended");

    result.and(restored.map_err(AppError::from))
}

/// Raw mode, alternate screen and mouse capture for the lifetime of the
/// value. Dropping it without [`TerminalSession::restore`] (an early `?`
/// or a panic) still puts the terminal back.
struct TerminalSession {
    active: bool,
}

impl TerminalSession {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let session = Self { active: true };
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        Ok(session)
    }

    fn restore(mut self) -> io::Result<()> {
        self.active = false;
        restore_terminal()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if self.active {
            if let Err(err) = restore_terminal() {
                warn!(error = %err, "terminal restore failed");
            }
        }
    }
}

/// Runs every restore step even when an earlier one fails
fn restore_terminal() -> io::Result<()> {
    let mut stdout = io::stdout();
    first_error([
        disable_raw_mode(),
        execute!(stdout, LeaveAlternateScreen, DisableMouseCapture),
        execute!(stdout, Show),
    ])
}

/// The first error among already evaluated steps, if any
fn first_error(steps: impl IntoIterator<Item = io::Result<()>>) -> io::Result<()> {
    steps.into_iter().fold(Ok(()), |first, step| first.and(step))
}

/// Draw/read loop over any backend
///
/// # Errors
///
/// Returns [`crate::error::AppError::Io`] on draw or event read failure.
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut CalculatorApp) -> AppResult<()> {
    let input = InputHandler::new();

    while !app.should_quit() {
        let mut keypad_area = Rect::default();
        let view: &CalculatorApp = app;
        terminal.draw(|frame| keypad_area = render(view, frame).keypad)?;
        handle_event(app, &input, &event::read()?, keypad_area);
    }

    Ok(())
}

/// Applies one terminal event. `keypad_area` is where the keypad was last
/// drawn, for mouse hit-testing.
pub fn handle_event(app: &mut CalculatorApp, input: &InputHandler, event: &Event, keypad_area: Rect) {
    match event {
        Event::Key(key) => app.handle_action(input.handle_key(*key)),
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => {
            if let Some(command) = app.click(keypad_area, *column, *row) {
                debug!(?command, column, row, "keypad click");
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn step(log: &mut Vec<&'static str>, name: &'static str, fails: bool) -> io::Result<()> {
        log.push(name);
        if fails {
            Err(io::Error::other(name))
        } else {
            Ok(())
        }
    }

    fn keypad() -> Rect {
        Rect::new(0, 0, 22, 12)
    }

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    fn click(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_key_event_applies_command() {
        let mut app = CalculatorApp::new();
        let input = InputHandler::new();
        for c in "9*9=".chars() {
            handle_event(&mut app, &input, &key(c), keypad());
        }
        assert_eq!(app.operand_line(), "81");
    }

    #[test]
    fn test_quit_key() {
        let mut app = CalculatorApp::new();
        handle_event(&mut app, &InputHandler::new(), &key('q'), keypad());
        assert!(app.should_quit());
    }

    #[test]
    fn test_left_click_presses_button() {
        let mut app = CalculatorApp::new();
        let event = click(MouseEventKind::Down(MouseButton::Left), 3, 3);
        handle_event(&mut app, &InputHandler::new(), &event, keypad());
        assert_eq!(app.operand_line(), "7");
    }

    #[test]
    fn test_other_mouse_events_ignored() {
        let mut app = CalculatorApp::new();
        let input = InputHandler::new();
        handle_event(
            &mut app,
            &input,
            &click(MouseEventKind::Down(MouseButton::Right), 3, 3),
            keypad(),
        );
        handle_event(
            &mut app,
            &input,
            &click(MouseEventKind::Up(MouseButton::Left), 3, 3),
            keypad(),
        );
        assert!(app.accumulator().is_empty());
    }

    #[test]
    fn test_resize_ignored() {
        let mut app = CalculatorApp::new();
        handle_event(&mut app, &InputHandler::new(), &Event::Resize(80, 24), keypad());
        assert!(app.accumulator().is_empty());
        assert!(!app.should_quit());
    }

    #[test]
    fn test_restore_steps_all_run_after_failure() {
        let mut log = Vec::new();
        let outcome = first_error([
            step(&mut log, "raw mode", true),
            step(&mut log, "alternate screen", false),
            step(&mut log, "cursor", false),
        ]);
        assert_eq!(log, ["raw mode", "alternate screen", "cursor"]);
        assert_eq!(outcome.unwrap_err().to_string(), "raw mode");
    }

    #[test]
    fn test_restore_reports_first_failure() {
        let mut log = Vec::new();
        let outcome = first_error([
            step(&mut log, "raw mode", false),
            step(&mut log, "alternate screen", true),
            step(&mut log, "cursor", true),
        ]);
        assert_eq!(outcome.unwrap_err().to_string(), "alternate screen");
    }

    #[test]
    fn test_restore_succeeds_when_every_step_does() {
        let mut log = Vec::new();
        assert!(first_error([step(&mut log, "raw mode", false), step(&mut log, "cursor", false)]).is_ok());
        assert_eq!(log.len(), 2);
    }
}

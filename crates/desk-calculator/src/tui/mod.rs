//! Terminal front end: keypad, key mapping, rendering and the event loop

mod app;
mod input;
mod keypad;
mod runner;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use runner::{handle_event, run, run_app};
pub use ui::{render, screen_layout, CalculatorUI, ScreenLayout, DEMO_TITLE, HELP_SHORTCUTS};

//! Desk calculator binary
//!
//! ## Usage
//!
//! ```bash
//! desk-calculator                  # Interactive keypad in the terminal
//! desk-calculator --keys '3*4='    # Replay keys, print both display lines
//! desk-calculator -v --log-file calc.log
//! ```

use std::process::ExitCode;

use clap::Parser;
use desk_calculator::{
    cli::Cli,
    config::AppConfig,
    driver::{CalculatorDriver, HeadlessDriver},
    error::AppResult,
    logging, tui,
};
use tracing::info;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let config = AppConfig::from_cli(&cli)?;

    if cli.show_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    let sink = logging::init(&config)?;
    info!(?sink, verbosity = ?config.verbosity, "desk-calculator {}", env!("CARGO_PKG_VERSION"));

    match &config.keys {
        Some(script) => {
            replay(script);
            Ok(())
        }
        None => tui::run(),
    }
}

/// Headless mode: committed expression on the first line, operand on the second
fn replay(script: &str) {
    let mut driver = HeadlessDriver::new();
    driver.type_keys(script);
    info!(script, error = driver.is_error(), "replay finished");
    println!("{}", driver.expression_line());
    println!("{}", driver.operand_line());
}

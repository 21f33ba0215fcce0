//! Command-line definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// Desk calculator: a keypad calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "desk-calculator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to this file (the TUI logs nowhere otherwise)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Replay a key script without the TUI, print both display lines and exit
    #[arg(long, value_name = "SCRIPT", allow_hyphen_values = true)]
    pub keys: Option<String>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    pub show_config: bool,
}

//! Desk Calculator - a keypad calculator for the terminal
//!
//! The core is an expression accumulator: a committed expression that
//! always ends in an operator, plus the operand being typed. Evaluation goes
//! through a small recursive-descent parser for `+ - * /`, never through a
//! general-purpose evaluator.
//!
//! # Example
//!
//! ```rust
//! use desk_calculator::prelude::*;
//!
//! let mut acc = Accumulator::new();
//! for c in "12+7*2".chars() {
//!     acc.apply(Command::from_char(c).unwrap());
//! }
//! assert_eq!(acc.expression_line(), "12+7×");
//! assert_eq!(acc.operand_line(), "2");
//!
//! acc.evaluate();
//! assert_eq!(acc.operand_line(), "26");
//!
//! // Failures show the error marker and keep the committed expression
//! for c in "5/0=".chars() {
//!     acc.apply(Command::from_char(c).unwrap());
//! }
//! assert!(acc.is_error());
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod cli;
pub mod config;
pub mod core;
pub mod driver;
pub mod error;
pub mod logging;
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::accumulator::Command;
    pub use crate::core::evaluator::Evaluator;
    pub use crate::core::parser::{AstNode, Parser, Token, Tokenizer};
    pub use crate::core::{
        Accumulator, CalcError, CalcResult, Calculator, Op, Operation, ERROR_MARKER,
    };
    pub use crate::driver::{CalculatorDriver, HeadlessDriver, TuiDriver};
}

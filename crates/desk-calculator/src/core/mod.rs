//! Calculator core: accumulator, evaluator and display formatting
//!
//! Everything in here is pure and synchronous. The front ends only
//! forward button presses and render the two text lines.

pub mod accumulator;
pub mod evaluator;
pub mod format;
mod operations;
pub mod parser;

pub use accumulator::{Accumulator, Op};
pub use operations::{Calculator, Operation};

use thiserror::Error;

/// Text shown on the operand line after any failed operation
pub const ERROR_MARKER: &str = "Error";

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Reasons an operation can fail.
///
/// All variants are shown to the user as [`ERROR_MARKER`]; the detail only
/// reaches the logs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,
    /// Result is not a finite number
    #[error("Overflow: result exceeds maximum value")]
    Overflow,
    /// Invalid expression syntax
    #[error("Invalid expression: {0}")]
    Parse(String),
    /// Nothing to evaluate
    #[error("Empty expression")]
    EmptyExpression,
    /// Operand text is not a number
    #[error("Invalid operand: '{0}'")]
    InvalidOperand(String),
    /// Square root of a negative number
    #[error("Square root of negative number {0}")]
    NegativeRoot(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_error_display_division_by_zero() {
        let err = CalcError::DivisionByZero;
        assert_eq!(format!("{err}"), "Division by zero");
    }

    #[test]
    fn test_calc_error_display_overflow() {
        let err = CalcError::Overflow;
        assert_eq!(format!("{err}"), "Overflow: result exceeds maximum value");
    }

    #[test]
    fn test_calc_error_display_parse() {
        let err = CalcError::Parse("unexpected token".into());
        assert_eq!(format!("{err}"), "Invalid expression: unexpected token");
    }

    #[test]
    fn test_calc_error_display_empty_expression() {
        assert_eq!(CalcError::EmptyExpression.to_string(), "Empty expression");
    }

    #[test]
    fn test_calc_error_display_invalid_operand() {
        let err = CalcError::InvalidOperand("1.2.3".into());
        assert_eq!(err.to_string(), "Invalid operand: '1.2.3'");
    }

    #[test]
    fn test_calc_error_display_negative_root() {
        let err = CalcError::NegativeRoot(-4.0);
        assert_eq!(err.to_string(), "Square root of negative number -4");
    }

    #[test]
    fn test_calc_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::DivisionByZero);
        assert!(err.to_string().contains("Division"));
    }

    #[test]
    fn test_error_marker_text() {
        assert_eq!(ERROR_MARKER, "Error");
    }
}

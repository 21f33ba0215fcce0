//! Property-based tests for the expression accumulator

use desk_calculator::core::accumulator::Command;
use desk_calculator::core::format::{self, ResultKind};
use desk_calculator::core::{Accumulator, Op, ERROR_MARKER};
use proptest::prelude::*;

// ===== Strategy definitions =====

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Add),
        Just(Op::Subtract),
        Just(Op::Multiply),
        Just(Op::Divide),
    ]
}

/// Any command a user can issue
fn command_strategy() -> impl Strategy<Value = Command> {
    prop_oneof![
        4 => (0u8..=9).prop_map(Command::Digit),
        1 => Just(Command::Point),
        2 => op_strategy().prop_map(Command::Operator),
        1 => Just(Command::Evaluate),
        1 => Just(Command::Clear),
        1 => Just(Command::Backspace),
        1 => Just(Command::Square),
        1 => Just(Command::SquareRoot),
    ]
}

fn commands_strategy() -> impl Strategy<Value = Vec<Command>> {
    prop::collection::vec(command_strategy(), 0..40)
}

/// Digit runs with at most one decimal point
fn operand_strategy() -> impl Strategy<Value = String> {
    "[0-9]{0,8}(\\.[0-9]{0,6})?"
}

fn run(commands: &[Command]) -> Accumulator {
    let mut acc = Accumulator::new();
    for command in commands {
        acc.apply(*command);
    }
    acc
}

fn is_glyph(c: char) -> bool {
    Op::ALL.iter().any(|op| op.glyph() == c)
}

proptest! {
    /// Typing an operand character by character reproduces it exactly
    #[test]
    fn prop_operand_reconstruction(operand in operand_strategy()) {
        let mut acc = Accumulator::new();
        for c in operand.chars() {
            acc.append_digit_or_point(c);
        }
        prop_assert_eq!(acc.current(), operand.as_str());
        prop_assert_eq!(acc.committed(), "");
    }

    /// A second point never changes an operand that already has one
    #[test]
    fn prop_second_point_is_noop(int_part in "[0-9]{0,5}", frac in "[0-9]{0,5}") {
        let operand = format!("{int_part}.{frac}");
        let mut acc = Accumulator::new();
        for c in operand.chars() {
            acc.append_digit_or_point(c);
        }
        acc.append_digit_or_point('.');
        prop_assert_eq!(acc.current(), operand.as_str());
    }

    /// Clearing twice is the same as clearing once: both buffers empty
    #[test]
    fn prop_clear_idempotent(commands in commands_strategy()) {
        let mut once = run(&commands);
        once.clear();
        let mut twice = run(&commands);
        twice.clear();
        twice.clear();

        prop_assert!(once.is_empty());
        prop_assert_eq!(once.committed(), twice.committed());
        prop_assert_eq!(once.current(), twice.current());
        prop_assert_eq!(twice.operand_line(), "0");
    }

    /// The committed expression is empty or ends with an operator glyph
    #[test]
    fn prop_committed_ends_with_operator(commands in commands_strategy()) {
        let acc = run(&commands);
        if let Some(last) = acc.committed().chars().last() {
            prop_assert!(is_glyph(last), "committed {:?}", acc.committed());
        }
    }

    /// The committed expression never holds two operators in a row
    #[test]
    fn prop_no_adjacent_operators(commands in commands_strategy()) {
        let acc = run(&commands);
        let chars: Vec<char> = acc.committed().chars().collect();
        for pair in chars.windows(2) {
            prop_assert!(!(is_glyph(pair[0]) && is_glyph(pair[1])), "committed {:?}", acc.committed());
        }
    }

    /// Backspace only ever touches the current operand
    #[test]
    fn prop_backspace_keeps_committed(commands in commands_strategy()) {
        let mut acc = run(&commands);
        let committed = acc.committed().to_string();
        let mut expected = acc.current().to_string();
        expected.pop();

        acc.backspace();
        prop_assert_eq!(acc.committed(), committed.as_str());
        prop_assert_eq!(acc.current(), expected.as_str());
    }

    /// Integer addition, subtraction and multiplication evaluate exactly
    #[test]
    fn prop_binary_evaluation(a in 0u32..100_000, b in 0u32..100_000, op in op_strategy()) {
        prop_assume!(op != Op::Divide);
        let (x, y) = (f64::from(a), f64::from(b));
        let expected = match op {
            Op::Add => x + y,
            Op::Subtract => x - y,
            _ => x * y,
        };

        let mut acc = Accumulator::new();
        for c in a.to_string().chars() {
            acc.append_digit_or_point(c);
        }
        acc.append_operator(op);
        for c in b.to_string().chars() {
            acc.append_digit_or_point(c);
        }
        acc.evaluate();

        prop_assert_eq!(acc.committed(), "");
        prop_assert_eq!(acc.current(), format::result_text(expected, ResultKind::Integer));
        prop_assert!(!acc.current().contains('.'));
    }

    /// Any expression with a division renders its result as a float
    #[test]
    fn prop_division_result_is_float(a in 0u32..100_000, b in 1u32..100_000) {
        let mut acc = Accumulator::new();
        for c in a.to_string().chars() {
            acc.append_digit_or_point(c);
        }
        acc.append_operator(Op::Divide);
        for c in b.to_string().chars() {
            acc.append_digit_or_point(c);
        }
        acc.evaluate();

        let expected = f64::from(a) / f64::from(b);
        prop_assert_eq!(acc.current(), format::float_text(expected));
        prop_assert!(acc.current().contains(['.', 'e']));
    }

    /// Dividing anything by zero shows the error marker and keeps the expression
    #[test]
    fn prop_divide_by_zero(a in 0u32..1_000_000) {
        let mut acc = Accumulator::new();
        for c in a.to_string().chars() {
            acc.append_digit_or_point(c);
        }
        acc.append_operator(Op::Divide);
        acc.append_digit_or_point('0');
        acc.evaluate();

        prop_assert_eq!(acc.current(), ERROR_MARKER);
        prop_assert_eq!(acc.committed(), format!("{a}÷"));
    }

    /// The operand line is never empty
    #[test]
    fn prop_operand_line_never_empty(commands in commands_strategy()) {
        prop_assert!(!run(&commands).operand_line().is_empty());
    }
}

//! Text rendering for the operand line and for computed numbers

use std::borrow::Cow;

use crate::core::ERROR_MARKER;

/// Number type an expression evaluates to.
///
/// Expressions made only of integer literals joined by `+ - *` stay integers;
/// any division, decimal point or exponent makes the result a float.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    /// Rendered without a fraction (`12`)
    Integer,
    /// Rendered as a float literal (`2.0`)
    Float,
}

impl ResultKind {
    /// Classifies an ASCII expression as handed to the evaluator
    #[must_use]
    pub fn of(expression: &str) -> Self {
        if expression.contains(['/', '.', 'e', 'E']) {
            Self::Float
        } else {
            Self::Integer
        }
    }
}

/// Renders the current operand for the primary display line.
///
/// - empty operand renders as `0`
/// - the error marker and exponent forms (`1e+20`) render verbatim
/// - trailing zeros after the point are stripped; if that empties the
///   fraction the point goes too (`9.0` → `9`), but a point typed with
///   nothing after it stays (`5.` → `5.`)
/// - an empty integer part renders as `0` (`.5` → `0.5`, `.` → `0.`)
#[must_use]
pub fn display_operand(operand: &str) -> Cow<'_, str> {
    if operand.is_empty() {
        return Cow::Borrowed("0");
    }
    if operand == ERROR_MARKER || operand.contains(['e', 'E']) {
        return Cow::Borrowed(operand);
    }
    let Some((int_part, frac_part)) = operand.split_once('.') else {
        return Cow::Borrowed(operand);
    };

    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let trimmed = frac_part.trim_end_matches('0');

    if frac_part.is_empty() {
        Cow::Owned(format!("{int_part}."))
    } else if trimmed.is_empty() {
        Cow::Owned(int_part.to_string())
    } else {
        Cow::Owned(format!("{int_part}.{trimmed}"))
    }
}

/// Renders a float the way a float literal prints: `9.0`, `2.5`, `1e+20`,
/// `1e-07`.
///
/// Exponents carry an explicit sign and at least two digits. Used for
/// square and square root, whose results are always floats.
#[must_use]
pub fn float_text(value: f64) -> String {
    // -0.0 + 0.0 == +0.0
    let text = format!("{:?}", value + 0.0);
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = exponent
                .strip_prefix('-')
                .map_or(("+", exponent), |digits| ("-", digits));
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => text,
    }
}

/// Renders an evaluation result: integer expressions without a fraction
/// (`12`, `-3`), float expressions as [`float_text`] (`2.0`, `2.5`).
#[must_use]
pub fn result_text(value: f64, kind: ResultKind) -> String {
    match kind {
        ResultKind::Integer if value.fract() == 0.0 => format!("{}", value + 0.0),
        _ => float_text(value),
    }
}

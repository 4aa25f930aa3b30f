use crate::core::{Operator, Result};
use crate::utils::error::CalcError;

/// Applies `op` to `a` and `b`.
///
/// Fails with [`CalcError::UnknownOperator`] when `op` is not exactly one of
/// `+ - * /`, and with [`CalcError::DivisionByZero`] for `/` with `b == 0`.
pub fn calculate(a: f64, op: &str, b: f64) -> Result<f64> {
    let operator: Operator = op.parse()?;
    let result = operator.apply(a, b)?;
    tracing::trace!(a, b, %operator, result, "calculated");
    Ok(result)
}

/// Parses operand text as an `f64`, ignoring surrounding whitespace.
///
/// A single `_` is accepted between two digits (`1_000`, `1_0.2_5e1_0`) and
/// stripped before parsing. Any other underscore makes the literal invalid.
pub fn parse_operand(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    let digits = strip_digit_separators(trimmed);
    // "_" is not part of the float grammar, so a rejected separator is left in
    // place and the parse below fails on it.
    digits
        .as_deref()
        .unwrap_or(trimmed)
        .parse::<f64>()
        .map_err(|source| CalcError::ParseError {
            input: trimmed.to_string(),
            source,
        })
}

/// Returns `text` without its digit separators, or `None` when there are none
/// or one of them is not flanked by digits on both sides.
fn strip_digit_separators(text: &str) -> Option<String> {
    if !text.contains('_') {
        return None;
    }

    let bytes = text.as_bytes();
    let well_placed = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
    });

    well_placed.then(|| text.replace('_', ""))
}

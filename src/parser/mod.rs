//! Operand input validator.
//!
//! Turns a raw whitespace-delimited line into a list of `f64` operands,
//! enforcing the operand limit and per-token numeric validity. Every
//! front-end path (terminal and web form) goes through this module, so
//! the float-range check applies uniformly.

use crate::model::ValidateError;

/// Parse a raw input line into an ordered operand list.
///
/// The line is trimmed, then split on single spaces; consecutive spaces
/// produce empty tokens, which are rejected as invalid. Checks run in
/// this order:
///
/// 1. empty line → [`ValidateError::EmptyInput`];
/// 2. token count above `max_operands` →
///    [`ValidateError::TooManyOperands`] (before any token is parsed);
/// 3. per token, in input order, short-circuiting on the first failure:
///    not a numeric literal (or NaN) → [`ValidateError::InvalidToken`];
///    magnitude beyond `f64` (e.g. `1e999`) →
///    [`ValidateError::OutOfFloatRange`].
///
/// On success the parsed values preserve input order.
pub fn parse_operands(input: &str, max_operands: usize) -> Result<Vec<f64>, ValidateError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ValidateError::EmptyInput);
    }

    let tokens: Vec<&str> = input.split(' ').collect();
    if tokens.len() > max_operands {
        return Err(ValidateError::TooManyOperands {
            limit: max_operands,
        });
    }

    tokens.iter().map(|raw| parse_token(raw.trim())).collect()
}

/// Parse a single trimmed token into a finite `f64`.
fn parse_token(token: &str) -> Result<f64, ValidateError> {
    let invalid = || ValidateError::InvalidToken {
        token: token.to_string(),
    };

    if token.is_empty() {
        return Err(invalid());
    }

    let value: f64 = token.parse().map_err(|_| invalid())?;
    if value.is_nan() {
        return Err(invalid());
    }
    if value.is_infinite() {
        return Err(ValidateError::OutOfFloatRange {
            token: token.to_string(),
        });
    }

    Ok(value)
}

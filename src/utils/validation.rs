use crate::domain::model::Operand;
use crate::utils::error::{Result, SumError};
use regex::Regex;
use std::sync::LazyLock;

// Sign, digits with optional fraction (or a bare fraction), optional exponent.
// Single underscores may separate digits. Only ASCII digits are accepted.
static DECIMAL_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[+-]?(?:[0-9](?:_?[0-9])*(?:\.(?:[0-9](?:_?[0-9])*)?)?|\.[0-9](?:_?[0-9])*)(?:[eE][+-]?[0-9](?:_?[0-9])*)?$",
    )
    .expect("decimal literal pattern is valid")
});

/// Converts one line of user text into a finite operand value.
pub fn parse_operand(operand: Operand, text: &str) -> Result<f64> {
    let trimmed = text.trim();
    let invalid = || SumError::InvalidInput {
        operand,
        value: text.to_string(),
    };

    if !DECIMAL_LITERAL.is_match(trimmed) {
        return Err(invalid());
    }

    let value: f64 = trimmed.replace('_', "").parse().map_err(|_| invalid())?;

    // Literals such as 1e999 overflow to infinity.
    if !value.is_finite() {
        return Err(invalid());
    }

    Ok(value)
}

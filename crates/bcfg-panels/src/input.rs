//! Numeric form input.
//!
//! Text typed into a numeric field is never rejected. A value that does not
//! parse, is not finite, or is zero is replaced by the field's fallback
//! before it reaches the store.
//!
//! The whole field must be a number: text with a trailing unit such as `24m`
//! falls back rather than keeping its numeric prefix, and infinities fall
//! back as well.

use serde::Serialize;

/// Width used when the width field holds no usable number.
pub const WIDTH_FALLBACK: f64 = 12.0;
/// Eave height used when the eave field holds no usable number.
pub const EAVE_HEIGHT_FALLBACK: f64 = 6.0;
/// Crane capacity used when the crane field holds no usable number.
pub const CRANE_CAPACITY_FALLBACK: f64 = 0.0;

pub const EAVE_HEIGHT_MIN: f64 = 3.0;
pub const EAVE_HEIGHT_MAX: f64 = 15.0;
/// Width bounds when no template is known.
pub const WIDTH_MIN: f64 = 6.0;
pub const WIDTH_MAX: f64 = 100.0;
/// Step of every numeric spinner.
pub const INPUT_STEP: f64 = 0.5;

/// Parse `raw`, substituting `fallback` for blank, malformed, non-finite or
/// zero input.
pub fn number_or(raw: &str, fallback: f64) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value != 0.0 => value,
        _ => fallback,
    }
}

/// Inclusive bounds shown on a numeric field. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NumericBounds {
    pub min: f64,
    pub max: Option<f64>,
    pub step: f64,
}

impl NumericBounds {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max: Some(max),
            step: INPUT_STEP,
        }
    }

    /// Lower bound only.
    pub fn at_least(min: f64) -> Self {
        Self {
            min,
            max: None,
            step: INPUT_STEP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(number_or("24", WIDTH_FALLBACK), 24.0);
        assert_eq!(number_or(" 7.5 ", EAVE_HEIGHT_FALLBACK), 7.5);
        assert_eq!(number_or("-3", WIDTH_FALLBACK), -3.0);
    }

    #[test]
    fn falls_back_on_unusable_input() {
        assert_eq!(number_or("", WIDTH_FALLBACK), 12.0);
        assert_eq!(number_or("abc", EAVE_HEIGHT_FALLBACK), 6.0);
        assert_eq!(number_or("0", WIDTH_FALLBACK), 12.0);
        assert_eq!(number_or("NaN", EAVE_HEIGHT_FALLBACK), 6.0);
        assert_eq!(number_or("inf", WIDTH_FALLBACK), 12.0);
        assert_eq!(number_or("x", CRANE_CAPACITY_FALLBACK), 0.0);
    }

    #[test]
    fn numeric_prefix_is_not_enough() {
        assert_eq!(number_or("24m", WIDTH_FALLBACK), 12.0);
        assert_eq!(number_or("7.5 t", CRANE_CAPACITY_FALLBACK), 0.0);
        assert_eq!(number_or("Infinity", EAVE_HEIGHT_FALLBACK), 6.0);
    }
}

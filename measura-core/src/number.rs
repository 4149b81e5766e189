//! Numeric coefficients
//!
//! Unit definitions arrive with their numerator, denominator and offset as
//! text. They are validated here, once, and stored as `f64`.

use thiserror::Error;

/// Error type for coefficient parsing
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumberError {
    #[error("Invalid number format: {0}")]
    ParseError(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("value must not be zero")]
    Zero,

    #[error("value is not finite: {0}")]
    NotFinite(String),
}

/// Parse a coefficient from text
/// Supports: "12", "25.4", "-32", "1.0e-3", "1200/3937"
pub fn parse_coefficient(s: &str) -> Result<f64, NumberError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(NumberError::ParseError(s.to_string()));
    }

    // Handle rational format "a/b"
    let value = if let Some((num_str, den_str)) = s.split_once('/') {
        let num = parse_plain(num_str.trim())?;
        let den = parse_plain(den_str.trim())?;
        if den == 0.0 {
            return Err(NumberError::DivisionByZero);
        }
        num / den
    } else {
        parse_plain(s)?
    };

    if !value.is_finite() {
        return Err(NumberError::NotFinite(s.to_string()));
    }
    Ok(value)
}

fn parse_plain(s: &str) -> Result<f64, NumberError> {
    // f64's parser accepts "inf" and "NaN"; coefficients must be plain numbers
    if !s.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')) {
        return Err(NumberError::ParseError(s.to_string()));
    }
    s.parse::<f64>()
        .map_err(|_| NumberError::ParseError(s.to_string()))
}

/// Validate a coefficient that may be used as a multiplier or divisor
pub fn require_non_zero(value: f64) -> Result<f64, NumberError> {
    if !value.is_finite() {
        return Err(NumberError::NotFinite(value.to_string()));
    }
    if value == 0.0 {
        return Err(NumberError::Zero);
    }
    Ok(value)
}

/// Validate an additive coefficient
pub fn require_finite(value: f64) -> Result<f64, NumberError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(NumberError::NotFinite(value.to_string()))
    }
}

/// Compare two doubles to within `ulps` units in the last place,
/// scaled to the magnitude of the operands.
///
/// Differences below the smallest normal double always compare equal.
pub fn almost_equal(x: f64, y: f64, ulps: u32) -> bool {
    let diff = (x - y).abs();
    diff < f64::EPSILON * (x + y).abs() * ulps as f64 || diff < f64::MIN_POSITIVE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_coefficient("12"), Ok(12.0));
        assert_eq!(parse_coefficient(" -32 "), Ok(-32.0));
    }

    #[test]
    fn test_parse_scientific() {
        assert_eq!(parse_coefficient("1.0e-3"), Ok(0.001));
        assert_eq!(parse_coefficient("9.80665"), Ok(9.80665));
    }

    #[test]
    fn test_parse_rational() {
        assert_eq!(parse_coefficient("1200/3937"), Ok(1200.0 / 3937.0));
        assert_eq!(parse_coefficient("1/0"), Err(NumberError::DivisionByZero));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(parse_coefficient("abc"), Err(NumberError::ParseError(_))));
        assert!(matches!(parse_coefficient(""), Err(NumberError::ParseError(_))));
        assert!(matches!(parse_coefficient("inf"), Err(NumberError::ParseError(_))));
        assert!(matches!(parse_coefficient("NaN"), Err(NumberError::ParseError(_))));
        assert!(matches!(parse_coefficient("1e999"), Err(NumberError::NotFinite(_))));
    }

    #[test]
    fn test_require_non_zero() {
        assert_eq!(require_non_zero(0.0), Err(NumberError::Zero));
        assert_eq!(require_non_zero(-0.0), Err(NumberError::Zero));
        assert_eq!(require_non_zero(2.5), Ok(2.5));
        assert!(require_non_zero(f64::NAN).is_err());
    }

    #[test]
    fn test_almost_equal() {
        assert!(almost_equal(1.0, 1.0, 1));
        assert!(almost_equal(0.0, 0.0, 1));
        assert!(almost_equal(1.0, 1.0 + f64::EPSILON, 1));
        assert!(!almost_equal(1.0, 1.0 + 8.0 * f64::EPSILON, 1));
        assert!(almost_equal(1.0, 1.0 + 8.0 * f64::EPSILON, 10));
        assert!(!almost_equal(0.0, 1e-200, 1000));
    }
}

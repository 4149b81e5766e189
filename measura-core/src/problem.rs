//! Conversion outcomes
//!
//! A conversion never fails with an `Err`. It always produces a value, and
//! reports anything unusual about it through a [`ProblemCode`].

use std::fmt;
use serde::{Serialize, Deserialize};

/// Why a conversion result may not be meaningful
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProblemCode {
    #[default]
    NoProblem,
    /// Source and target belong to different phenomena
    UncomparableUnits,
    /// An inverted unit was involved and the value to invert was exactly zero
    InvertingZero,
    /// A unit could not be resolved, or belongs to another registry
    InvalidUnitName,
}

impl ProblemCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProblemCode::NoProblem => "NO_PROBLEM",
            ProblemCode::UncomparableUnits => "UNCOMPARABLE_UNITS",
            ProblemCode::InvertingZero => "INVERTING_ZERO",
            ProblemCode::InvalidUnitName => "INVALID_UNIT_NAME",
        }
    }
}

impl fmt::Display for ProblemCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A converted value plus the problem code describing it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    pub value: f64,
    pub problem: ProblemCode,
}

impl Conversion {
    pub fn ok(value: f64) -> Self {
        Conversion { value, problem: ProblemCode::NoProblem }
    }

    pub fn problem(value: f64, problem: ProblemCode) -> Self {
        Conversion { value, problem }
    }

    /// Result for units of different phenomena. The value is NaN.
    pub fn uncomparable() -> Self {
        Self::problem(f64::NAN, ProblemCode::UncomparableUnits)
    }

    /// Result for an attempt to take the reciprocal of zero
    pub fn inverting_zero() -> Self {
        Self::problem(0.0, ProblemCode::InvertingZero)
    }

    /// Result for a unit that cannot be resolved. The value is NaN.
    pub fn invalid_unit() -> Self {
        Self::problem(f64::NAN, ProblemCode::InvalidUnitName)
    }

    pub fn is_ok(&self) -> bool {
        self.problem == ProblemCode::NoProblem
    }

    /// The value, if the conversion reported no problem
    pub fn ok_value(&self) -> Option<f64> {
        self.is_ok().then_some(self.value)
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.problem {
            ProblemCode::NoProblem => write!(f, "{}", self.value),
            problem => write!(f, "{} ({})", self.value, problem),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_no_problem() {
        assert_eq!(ProblemCode::default(), ProblemCode::NoProblem);
        assert!(Conversion::ok(3.0).is_ok());
    }

    #[test]
    fn test_uncomparable_is_nan() {
        let c = Conversion::uncomparable();
        assert!(c.value.is_nan());
        assert_eq!(c.problem, ProblemCode::UncomparableUnits);
        assert_eq!(c.ok_value(), None);
    }

    #[test]
    fn test_inverting_zero() {
        let c = Conversion::inverting_zero();
        assert_eq!(c.value, 0.0);
        assert!(!c.is_ok());
    }

    #[test]
    fn test_display() {
        assert_eq!(Conversion::ok(1.5).to_string(), "1.5");
        assert_eq!(Conversion::inverting_zero().to_string(), "0 (INVERTING_ZERO)");
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&ProblemCode::InvertingZero).unwrap();
        assert_eq!(json, "\"INVERTING_ZERO\"");
        let back: ProblemCode = serde_json::from_str("\"UNCOMPARABLE_UNITS\"").unwrap();
        assert_eq!(back, ProblemCode::UncomparableUnits);
    }
}

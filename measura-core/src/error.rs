//! Registration errors
//!
//! Every failure while building a registry is reported synchronously to the
//! caller that attempted the registration. Nothing is retried: bad input is a
//! hard failure for that single definition, and the caller decides whether to
//! abandon the whole load or skip the definition.

use crate::NumberError;
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const DUPLICATE_NAME: &str = "DUPLICATE_NAME";
    pub const INVALID_NAME: &str = "INVALID_NAME";
    pub const INVALID_DEFINITION: &str = "INVALID_DEFINITION";
    pub const UNKNOWN_PHENOMENON: &str = "UNKNOWN_PHENOMENON";
    pub const UNKNOWN_UNIT_SYSTEM: &str = "UNKNOWN_UNIT_SYSTEM";
    pub const UNKNOWN_REFERENCE: &str = "UNKNOWN_REFERENCE";
    pub const SIGNATURE_MISMATCH: &str = "SIGNATURE_MISMATCH";
    pub const INVALID_INVERSION: &str = "INVALID_INVERSION";
}

/// Error raised while registering phenomena, unit systems, units or constants
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitsError {
    #[error("Duplicate name: {0} is already registered")]
    DuplicateName(String),

    #[error("Invalid name: '{0}'")]
    InvalidName(String),

    #[error("Invalid definition for {name}: {reason}")]
    InvalidDefinition { name: String, reason: String },

    #[error("Unknown phenomenon: {0}")]
    UnknownPhenomenon(String),

    #[error("Unknown unit system: {0}")]
    UnknownUnitSystem(String),

    #[error("{name} references unknown name {reference}")]
    UnknownReference { name: String, reference: String },

    #[error("Signature of {name} ({signature}) does not match phenomenon {phenomenon} ({expected})")]
    SignatureMismatch {
        name: String,
        signature: String,
        phenomenon: String,
        expected: String,
    },

    #[error("Cannot register {name} as the inverse of {base}: {reason}")]
    InvalidInversion {
        name: String,
        base: String,
        reason: String,
    },
}

impl UnitsError {
    pub fn invalid_definition(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDefinition {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// A coefficient that failed numeric validation
    pub fn invalid_coefficient(name: &str, field: &str, err: NumberError) -> Self {
        Self::invalid_definition(name, format!("{}: {}", field, err))
    }

    pub fn unknown_reference(name: impl Into<String>, reference: impl Into<String>) -> Self {
        Self::UnknownReference {
            name: name.into(),
            reference: reference.into(),
        }
    }

    pub fn invalid_inversion(name: &str, base: &str, reason: impl Into<String>) -> Self {
        Self::InvalidInversion {
            name: name.to_string(),
            base: base.to_string(),
            reason: reason.into(),
        }
    }

    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::DuplicateName(_) => codes::DUPLICATE_NAME,
            Self::InvalidName(_) => codes::INVALID_NAME,
            Self::InvalidDefinition { .. } => codes::INVALID_DEFINITION,
            Self::UnknownPhenomenon(_) => codes::UNKNOWN_PHENOMENON,
            Self::UnknownUnitSystem(_) => codes::UNKNOWN_UNIT_SYSTEM,
            Self::UnknownReference { .. } => codes::UNKNOWN_REFERENCE,
            Self::SignatureMismatch { .. } => codes::SIGNATURE_MISMATCH,
            Self::InvalidInversion { .. } => codes::INVALID_INVERSION,
        }
    }

    /// Suggestion for fixing the definition
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::DuplicateName(_) => "Pick a name that is not used by another unit or constant",
            Self::InvalidName(_) => "Names must be non-empty and use letters, digits, '_' or '$'",
            Self::InvalidDefinition { .. } => "Check the definition expression and its coefficients",
            Self::UnknownPhenomenon(_) => "Register the phenomenon before the units that use it",
            Self::UnknownUnitSystem(_) => "Register the unit system before the units that use it",
            Self::UnknownReference { .. } => "Register referenced units and constants first",
            Self::SignatureMismatch { .. } => "The definition must describe the same dimensions as its phenomenon",
            Self::InvalidInversion { .. } => "Only regular units without an offset can be inverted",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(UnitsError::DuplicateName("M".into()).code(), codes::DUPLICATE_NAME);
        assert_eq!(
            UnitsError::invalid_definition("FT", "bad").code(),
            codes::INVALID_DEFINITION
        );
        assert_eq!(
            UnitsError::invalid_inversion("X", "Y", "nested").code(),
            codes::INVALID_INVERSION
        );
    }

    #[test]
    fn test_coefficient_error_is_invalid_definition() {
        let err = UnitsError::invalid_coefficient("FT", "denominator", NumberError::Zero);
        match &err {
            UnitsError::InvalidDefinition { name, reason } => {
                assert_eq!(name, "FT");
                assert!(reason.starts_with("denominator"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_display() {
        let err = UnitsError::unknown_reference("KM", "KILO");
        assert_eq!(err.to_string(), "KM references unknown name KILO");
    }
}

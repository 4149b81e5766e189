//! Measura Units - Unit registry and conversion engine
//!
//! Units are defined relative to other units of the same phenomenon, forming
//! definition chains that end in a canonical base unit. Conversions follow
//! those chains, so closely related units convert exactly.
//!
//! Building blocks:
//! - Phenomena (LENGTH, PRESSURE, ...) with a dimensional signature
//! - Unit systems (SI, USCUSTOM, ...) tagging units
//! - Regular units with numerator, denominator and offset coefficients
//! - Constants (MILLI, STD_G, ...) usable as scale factors in definitions
//! - Inverted units (HORIZONTAL_PER_VERTICAL) converting by reciprocal
//!
//! Conversions never fail with an error; they return a [`Conversion`] that
//! carries a [`ProblemCode`] when the units are unrelated, unknown, or the
//! value cannot be inverted.

mod signature;
mod expr;
mod unit;
mod config;
mod lookup;
mod registry;
mod convert;
mod definition;
mod units;

pub use signature::Signature;
pub use expr::{Expression, Factor, ParseError};
pub use unit::{
    Coefficients, Phenomenon, PhenomenonId, Unit, UnitId, UnitKind, UnitSystem, UnitSystemId,
};
pub use config::RegistryConfig;
pub use lookup::{LookupOptions, LookupStrategy};
pub use registry::{RegistryBuilder, UnitRegistry};
pub use convert::Converter;
pub use definition::Definition;
pub use units::{register_standard_units, standard_registry, standard_registry_with};

pub use measura_core::{Conversion, ProblemCode, UnitsError};

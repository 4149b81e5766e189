//! Declarative definitions
//!
//! Registrations expressed as data, so a unit library can be shipped as
//! JSON (or any serde format) instead of code. Coefficients are carried as
//! text and validated when applied.

use serde::{Serialize, Deserialize};
use measura_core::{UnitsError, parse_coefficient};
use crate::{Coefficients, RegistryBuilder};

/// One registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Definition {
    Phenomenon {
        name: String,
        definition: String,
    },
    UnitSystem {
        name: String,
    },
    Unit {
        phenomenon: String,
        unit_system: Option<String>,
        name: String,
        definition: String,
        numerator: Option<String>,
        denominator: Option<String>,
        offset: Option<String>,
    },
    Constant {
        phenomenon: String,
        name: String,
        definition: String,
        numerator: Option<String>,
        denominator: Option<String>,
    },
    InvertedUnit {
        inverts: String,
        unit_system: Option<String>,
        name: String,
    },
    LegacyName {
        legacy: String,
        current: String,
    },
}

impl Definition {
    /// Name being registered
    pub fn name(&self) -> &str {
        match self {
            Definition::Phenomenon { name, .. }
            | Definition::UnitSystem { name }
            | Definition::Unit { name, .. }
            | Definition::Constant { name, .. }
            | Definition::InvertedUnit { name, .. } => name,
            Definition::LegacyName { legacy, .. } => legacy,
        }
    }
}

fn coefficient(name: &str, field: &str, text: Option<&str>) -> Result<Option<f64>, UnitsError> {
    text.map(|t| parse_coefficient(t).map_err(|e| UnitsError::invalid_coefficient(name, field, e)))
        .transpose()
}

impl RegistryBuilder {
    /// Apply a single definition
    pub fn apply(&mut self, definition: &Definition) -> Result<(), UnitsError> {
        match definition {
            Definition::Phenomenon { name, definition } => {
                self.register_phenomenon(name, definition)?;
            }
            Definition::UnitSystem { name } => {
                self.register_unit_system(name)?;
            }
            Definition::Unit { phenomenon, unit_system, name, definition, numerator, denominator, offset } => {
                let coefficients = Coefficients {
                    numerator: coefficient(name, "numerator", numerator.as_deref())?,
                    denominator: coefficient(name, "denominator", denominator.as_deref())?,
                    offset: coefficient(name, "offset", offset.as_deref())?,
                };
                self.register_unit(phenomenon, unit_system.as_deref(), name, definition, coefficients)?;
            }
            Definition::Constant { phenomenon, name, definition, numerator, denominator } => {
                let numerator = coefficient(name, "numerator", numerator.as_deref())?;
                let denominator = coefficient(name, "denominator", denominator.as_deref())?;
                self.register_constant(phenomenon, name, definition, numerator, denominator)?;
            }
            Definition::InvertedUnit { inverts, unit_system, name } => {
                self.register_inverted_unit(inverts, unit_system.as_deref(), name)?;
            }
            Definition::LegacyName { legacy, current } => {
                self.add_legacy_name(legacy, current)?;
            }
        }
        Ok(())
    }

    /// Apply definitions in order, stopping at the first failure.
    /// Returns the number applied.
    pub fn load<'a>(&mut self, definitions: impl IntoIterator<Item = &'a Definition>) -> Result<usize, UnitsError> {
        let mut count = 0;
        for definition in definitions {
            self.apply(definition)?;
            count += 1;
        }
        Ok(count)
    }
}

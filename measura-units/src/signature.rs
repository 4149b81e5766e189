//! Dimensional signatures
//!
//! A signature is the exponent vector of a quantity over the base phenomena
//! known to a registry (LENGTH, MASS, TIME, ...). Unlike a fixed SI vector the
//! set of base phenomena is open: any phenomenon defined as itself is a base.

use std::collections::BTreeMap;
use std::fmt;
use serde::{Serialize, Deserialize};

/// Exponents of a quantity over named base phenomena.
///
/// Zero exponents are never stored, so two signatures compare equal exactly
/// when they describe the same dimensions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    exponents: BTreeMap<String, i32>,
}

impl Signature {
    /// Dimensionless signature (no exponents)
    pub fn dimensionless() -> Self {
        Signature::default()
    }

    /// Signature of a base phenomenon
    pub fn base(name: &str) -> Self {
        let mut exponents = BTreeMap::new();
        exponents.insert(name.to_string(), 1);
        Signature { exponents }
    }

    pub fn is_dimensionless(&self) -> bool {
        self.exponents.is_empty()
    }

    /// Exponent of one base phenomenon (0 if absent)
    pub fn exponent(&self, base: &str) -> i32 {
        self.exponents.get(base).copied().unwrap_or(0)
    }

    /// Iterate (base phenomenon, exponent) pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.exponents.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Multiply signatures (add exponents). `None` if an exponent overflows.
    pub fn multiply(&self, other: &Signature) -> Option<Signature> {
        let mut result = self.clone();
        for (name, &exp) in &other.exponents {
            result.add_exponent(name, exp)?;
        }
        Some(result)
    }

    /// Divide signatures (subtract exponents)
    pub fn divide(&self, other: &Signature) -> Option<Signature> {
        self.multiply(&other.invert()?)
    }

    /// Raise to integer power (multiply exponents). `None` if an exponent
    /// overflows.
    pub fn power(&self, exp: i32) -> Option<Signature> {
        if exp == 0 {
            return Some(Signature::dimensionless());
        }
        let exponents = self.exponents.iter()
            .map(|(k, &v)| v.checked_mul(exp).map(|e| (k.clone(), e)))
            .collect::<Option<BTreeMap<_, _>>>()?;
        Some(Signature { exponents })
    }

    /// Invert signature (negate exponents)
    pub fn invert(&self) -> Option<Signature> {
        self.power(-1)
    }

    fn add_exponent(&mut self, name: &str, exp: i32) -> Option<()> {
        let sum = self.exponent(name).checked_add(exp)?;
        if sum == 0 {
            self.exponents.remove(name);
        } else {
            self.exponents.insert(name.to_string(), sum);
        }
        Some(())
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exponents.is_empty() {
            return write!(f, "1");
        }
        let parts: Vec<String> = self.exponents.iter()
            .map(|(name, &exp)| {
                if exp == 1 {
                    name.clone()
                } else {
                    format!("{}({})", name, exp)
                }
            })
            .collect();
        write!(f, "{}", parts.join("*"))
    }
}

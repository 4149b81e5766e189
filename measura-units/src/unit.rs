//! Phenomena, unit systems and units

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::Signature;

/// Handle to a unit inside one registry.
///
/// Carries the owning registry's tag, so a handle from another registry is
/// detected instead of silently indexing the wrong unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitId {
    pub(crate) registry: u64,
    pub(crate) index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhenomenonId(pub(crate) usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitSystemId(pub(crate) usize);

/// A physical quantity category such as LENGTH or PRESSURE
#[derive(Debug, Clone, PartialEq)]
pub struct Phenomenon {
    pub(crate) id: PhenomenonId,
    pub(crate) name: String,
    pub(crate) definition: String,
    pub(crate) signature: Signature,
    pub(crate) units: Vec<UnitId>,
    /// Unit defined as itself, the canonical base of this phenomenon
    pub(crate) root: Option<UnitId>,
}

impl Phenomenon {
    pub fn id(&self) -> PhenomenonId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// A base phenomenon is defined as itself
    pub fn is_base(&self) -> bool {
        self.signature == Signature::base(&self.name)
    }

    /// Units (and constants) registered under this phenomenon, in registration order
    pub fn units(&self) -> &[UnitId] {
        &self.units
    }

    pub fn root(&self) -> Option<UnitId> {
        self.root
    }

    /// Check whether a unit can be converted to units of this phenomenon
    pub fn is_compatible(&self, unit: &Unit) -> bool {
        unit.phenomenon == self.id
    }
}

/// A grouping label such as SI or USCUSTOM
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitSystem {
    pub(crate) id: UnitSystemId,
    pub(crate) name: String,
}

impl UnitSystem {
    pub fn id(&self) -> UnitSystemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Numeric coefficients supplied when registering a unit.
///
/// Unset values read as numerator 1, denominator 1 and offset 0, but the
/// unit remembers which ones were given explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    pub numerator: Option<f64>,
    pub denominator: Option<f64>,
    pub offset: Option<f64>,
}

impl Coefficients {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn numerator(value: f64) -> Self {
        Self::new().with_numerator(value)
    }

    pub fn ratio(numerator: f64, denominator: f64) -> Self {
        Self::new().with_numerator(numerator).with_denominator(denominator)
    }

    pub fn offset(value: f64) -> Self {
        Self::new().with_offset(value)
    }

    pub fn with_numerator(mut self, value: f64) -> Self {
        self.numerator = Some(value);
        self
    }

    pub fn with_denominator(mut self, value: f64) -> Self {
        self.denominator = Some(value);
        self
    }

    pub fn with_offset(mut self, value: f64) -> Self {
        self.offset = Some(value);
        self
    }
}

/// The three kinds of unit a registry holds
#[derive(Debug, Clone, PartialEq)]
pub enum UnitKind {
    Regular {
        definition: String,
        coefficients: Coefficients,
    },
    Constant {
        definition: String,
        coefficients: Coefficients,
    },
    /// Reciprocal of another unit, e.g. horizontal-per-vertical slope
    Inverted {
        inverts: UnitId,
    },
}

/// One hop of a definition chain: `parent = (value + offset) * factor`
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Step {
    pub factor: f64,
    pub offset: f64,
}

impl Step {
    pub(crate) const IDENTITY: Step = Step { factor: 1.0, offset: 0.0 };

    pub(crate) fn up(&self, value: f64) -> f64 {
        (value + self.offset) * self.factor
    }

    pub(crate) fn down(&self, value: f64) -> f64 {
        value / self.factor - self.offset
    }
}

/// How a unit relates to its phenomenon's canonical base, derived once at
/// registration
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Resolution {
    /// Next unit in the definition chain; `None` means the canonical base
    pub parent: Option<UnitId>,
    pub step: Step,
    /// Composed mapping: `base = value * scale + base_offset`
    pub scale: f64,
    pub base_offset: f64,
    pub signature: Signature,
}

impl Resolution {
    pub(crate) fn root(signature: Signature) -> Self {
        Resolution {
            parent: None,
            step: Step::IDENTITY,
            scale: 1.0,
            base_offset: 0.0,
            signature,
        }
    }
}

/// A registered unit or constant
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub(crate) id: UnitId,
    pub(crate) name: String,
    pub(crate) phenomenon: PhenomenonId,
    pub(crate) system: Option<UnitSystemId>,
    pub(crate) kind: UnitKind,
    pub(crate) resolution: Resolution,
}

impl Unit {
    pub fn id(&self) -> UnitId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phenomenon(&self) -> PhenomenonId {
        self.phenomenon
    }

    /// Unit system; constants have none
    pub fn unit_system(&self) -> Option<UnitSystemId> {
        self.system
    }

    pub fn kind(&self) -> &UnitKind {
        &self.kind
    }

    pub fn signature(&self) -> &Signature {
        &self.resolution.signature
    }

    /// Definition expression; inverted units have none
    pub fn definition(&self) -> Option<&str> {
        match &self.kind {
            UnitKind::Regular { definition, .. } | UnitKind::Constant { definition, .. } => {
                Some(definition)
            }
            UnitKind::Inverted { .. } => None,
        }
    }

    fn coefficients(&self) -> Option<&Coefficients> {
        match &self.kind {
            UnitKind::Regular { coefficients, .. } | UnitKind::Constant { coefficients, .. } => {
                Some(coefficients)
            }
            UnitKind::Inverted { .. } => None,
        }
    }

    /// Numerator, defaulting to 1.0; `None` for inverted units
    pub fn numerator(&self) -> Option<f64> {
        self.coefficients().map(|c| c.numerator.unwrap_or(1.0))
    }

    /// Denominator, defaulting to 1.0; `None` for inverted units
    pub fn denominator(&self) -> Option<f64> {
        self.coefficients().map(|c| c.denominator.unwrap_or(1.0))
    }

    /// Offset, defaulting to 0.0; `None` for inverted units
    pub fn offset(&self) -> Option<f64> {
        self.coefficients().map(|c| c.offset.unwrap_or(0.0))
    }

    pub fn has_numerator(&self) -> bool {
        self.coefficients().is_some_and(|c| c.numerator.is_some())
    }

    pub fn has_denominator(&self) -> bool {
        self.coefficients().is_some_and(|c| c.denominator.is_some())
    }

    pub fn has_offset(&self) -> bool {
        self.coefficients().is_some_and(|c| c.offset.is_some())
    }

    pub fn is_constant(&self) -> bool {
        matches!(self.kind, UnitKind::Constant { .. })
    }

    pub fn is_inverted(&self) -> bool {
        matches!(self.kind, UnitKind::Inverted { .. })
    }

    /// The unit this one is the reciprocal of
    pub fn inverts(&self) -> Option<UnitId> {
        match self.kind {
            UnitKind::Inverted { inverts } => Some(inverts),
            _ => None,
        }
    }

    /// Factor to the canonical base of the phenomenon. For an inverted unit
    /// this is the reciprocal of the factor of the unit it inverts.
    pub fn scale(&self) -> f64 {
        self.resolution.scale
    }

    /// Offset (in base units) to the canonical base of the phenomenon; always
    /// 0 for inverted units
    pub fn base_offset(&self) -> f64 {
        self.resolution.base_offset
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

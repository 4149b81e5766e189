//! Unit registry
//!
//! Phenomena, unit systems, units and constants are registered into a
//! [`RegistryBuilder`] in dependency order: a definition may only mention
//! names that are already registered. [`RegistryBuilder::build`] freezes the
//! builder into a [`UnitRegistry`], which is read-only and safe to share
//! between threads.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use measura_core::{UnitsError, require_finite, require_non_zero};
use tracing::{debug, info, warn};
use crate::expr::{Expression, Factor};
use crate::unit::{Resolution, Step};
use crate::{
    Coefficients, LookupOptions, LookupStrategy, Phenomenon, PhenomenonId, RegistryConfig,
    Signature, Unit, UnitId, UnitKind, UnitSystem, UnitSystemId,
};

static NEXT_REGISTRY_TAG: AtomicU64 = AtomicU64::new(1);

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn exponent_overflow(name: &str) -> UnitsError {
    UnitsError::invalid_definition(name, "exponent out of range")
}

/// Storage shared by the builder and the frozen registry
#[derive(Debug, Clone)]
struct Tables {
    tag: u64,
    config: RegistryConfig,
    phenomena: Vec<Phenomenon>,
    systems: Vec<UnitSystem>,
    units: Vec<Unit>,
    phenomenon_names: HashMap<String, PhenomenonId>,
    system_names: HashMap<String, UnitSystemId>,
    unit_names: HashMap<String, UnitId>,
    legacy_names: HashMap<String, UnitId>,
}

impl Tables {
    fn new(config: RegistryConfig) -> Self {
        Tables {
            tag: NEXT_REGISTRY_TAG.fetch_add(1, Ordering::Relaxed),
            config,
            phenomena: Vec::new(),
            systems: Vec::new(),
            units: Vec::new(),
            phenomenon_names: HashMap::new(),
            system_names: HashMap::new(),
            unit_names: HashMap::new(),
            legacy_names: HashMap::new(),
        }
    }

    fn unit(&self, id: UnitId) -> Option<&Unit> {
        if id.registry != self.tag {
            return None;
        }
        self.units.get(id.index)
    }

    fn owns(&self, unit: &Unit) -> bool {
        self.unit(unit.id).is_some()
    }

    fn exact_unit(&self, name: &str) -> Option<&Unit> {
        self.unit_names.get(name).and_then(|id| self.unit(*id))
    }

    fn qualified_unit(&self, name: &str) -> Option<&Unit> {
        if !name.contains(':') {
            return None;
        }
        let bare = self.config.strip_qualifier(name, false)?;
        self.exact_unit(bare)
    }

    fn lookup_phenomenon(&self, name: &str) -> Option<&Phenomenon> {
        let bare = self.config.strip_qualifier(name, false)?;
        self.phenomenon_names.get(bare).and_then(|id| self.phenomena.get(id.0))
    }

    fn lookup_unit_system(&self, name: &str) -> Option<&UnitSystem> {
        let bare = self.config.strip_qualifier(name, false)?;
        self.system_names.get(bare).and_then(|id| self.systems.get(id.0))
    }

    /// The unit followed by each parent in its definition chain
    fn chain<'a>(&'a self, unit: &'a Unit) -> impl Iterator<Item = &'a Unit> + 'a {
        std::iter::successors(Some(unit), move |u| {
            u.resolution.parent.and_then(|p| self.unit(p))
        })
    }

    /// A unit is affine if any hop of its chain carries an offset
    fn is_affine(&self, unit: &Unit) -> bool {
        self.chain(unit).any(|u| u.resolution.step.offset != 0.0)
    }
}

/// Mutable registry under construction
#[derive(Debug, Clone)]
pub struct RegistryBuilder {
    tables: Tables,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        RegistryBuilder { tables: Tables::new(config) }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.tables.config
    }

    /// Register a phenomenon. A definition equal to its own name makes it a
    /// base phenomenon; "1" makes it dimensionless.
    pub fn register_phenomenon(&mut self, name: &str, definition: &str) -> Result<PhenomenonId, UnitsError> {
        self.add_phenomenon(name, definition)
            .inspect_err(|e| warn!(code = e.code(), name, error = %e, "phenomenon registration failed"))
    }

    pub fn register_unit_system(&mut self, name: &str) -> Result<UnitSystemId, UnitsError> {
        self.add_unit_system(name)
            .inspect_err(|e| warn!(code = e.code(), name, error = %e, "unit system registration failed"))
    }

    /// Register a regular unit defined in terms of already registered units
    /// and constants.
    pub fn register_unit(
        &mut self,
        phenomenon: &str,
        unit_system: Option<&str>,
        name: &str,
        definition: &str,
        coefficients: Coefficients,
    ) -> Result<UnitId, UnitsError> {
        self.add_defined_unit(phenomenon, unit_system, name, definition, coefficients, false)
            .inspect_err(|e| warn!(code = e.code(), name, error = %e, "unit registration failed"))
    }

    /// Register a constant. Constants have no unit system and no offset.
    pub fn register_constant(
        &mut self,
        phenomenon: &str,
        name: &str,
        definition: &str,
        numerator: Option<f64>,
        denominator: Option<f64>,
    ) -> Result<UnitId, UnitsError> {
        let coefficients = Coefficients { numerator, denominator, offset: None };
        self.add_defined_unit(phenomenon, None, name, definition, coefficients, true)
            .inspect_err(|e| warn!(code = e.code(), name, error = %e, "constant registration failed"))
    }

    /// Register the reciprocal of an existing unit
    pub fn register_inverted_unit(
        &mut self,
        inverts: &str,
        unit_system: Option<&str>,
        name: &str,
    ) -> Result<UnitId, UnitsError> {
        self.add_inverted_unit(inverts, unit_system, name)
            .inspect_err(|e| warn!(code = e.code(), name, error = %e, "inverted unit registration failed"))
    }

    /// Map a name from the previous unit library onto a registered unit
    pub fn add_legacy_name(&mut self, legacy: &str, current: &str) -> Result<(), UnitsError> {
        if legacy.trim().is_empty() {
            return Err(UnitsError::InvalidName(legacy.to_string()));
        }
        if self.tables.legacy_names.contains_key(legacy) {
            return Err(UnitsError::DuplicateName(legacy.to_string()));
        }
        let id = self.tables.exact_unit(current)
            .map(|u| u.id)
            .ok_or_else(|| UnitsError::unknown_reference(legacy, current))?;
        self.tables.legacy_names.insert(legacy.to_string(), id);
        Ok(())
    }

    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.tables.unit(id)
    }

    /// Exact or qualified lookup of a unit registered so far
    pub fn lookup_unit(&self, name: &str) -> Option<&Unit> {
        self.tables.exact_unit(name).or_else(|| self.tables.qualified_unit(name))
    }

    pub fn lookup_phenomenon(&self, name: &str) -> Option<&Phenomenon> {
        self.tables.lookup_phenomenon(name)
    }

    pub fn len(&self) -> usize {
        self.tables.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.units.is_empty()
    }

    /// Freeze the builder into a read-only registry
    pub fn build(self) -> UnitRegistry {
        let mut folded_names = HashMap::new();
        for unit in &self.tables.units {
            folded_names.entry(unit.name.to_ascii_uppercase()).or_insert(unit.id);
        }
        info!(
            units = self.tables.units.len(),
            phenomena = self.tables.phenomena.len(),
            unit_systems = self.tables.systems.len(),
            "unit registry frozen"
        );
        UnitRegistry { tables: self.tables, folded_names }
    }

    fn add_phenomenon(&mut self, name: &str, definition: &str) -> Result<PhenomenonId, UnitsError> {
        if !is_valid_name(name) {
            return Err(UnitsError::InvalidName(name.to_string()));
        }
        if self.tables.phenomenon_names.contains_key(name) {
            return Err(UnitsError::DuplicateName(name.to_string()));
        }
        let expr = Expression::parse(definition)
            .map_err(|e| UnitsError::invalid_definition(name, e.to_string()))?;

        let signature = if expr.is_self_reference(name) {
            Signature::base(name)
        } else {
            let mut signature = Signature::dimensionless();
            for factor in &expr.factors {
                if factor.constant {
                    return Err(UnitsError::invalid_definition(
                        name,
                        format!("constant [{}] in a phenomenon definition", factor.name),
                    ));
                }
                self.check_qualifier(name, factor)?;
                let referenced = self.tables.phenomenon_names.get(&factor.name)
                    .and_then(|id| self.tables.phenomena.get(id.0))
                    .ok_or_else(|| UnitsError::unknown_reference(name, factor.name.as_str()))?;
                signature = referenced.signature.power(factor.exponent)
                    .and_then(|p| signature.multiply(&p))
                    .ok_or_else(|| exponent_overflow(name))?;
            }
            signature
        };

        let id = PhenomenonId(self.tables.phenomena.len());
        debug!(phenomenon = name, %signature, "registered phenomenon");
        self.tables.phenomena.push(Phenomenon {
            id,
            name: name.to_string(),
            definition: definition.to_string(),
            signature,
            units: Vec::new(),
            root: None,
        });
        self.tables.phenomenon_names.insert(name.to_string(), id);
        Ok(id)
    }

    fn add_unit_system(&mut self, name: &str) -> Result<UnitSystemId, UnitsError> {
        if !is_valid_name(name) {
            return Err(UnitsError::InvalidName(name.to_string()));
        }
        if self.tables.system_names.contains_key(name) {
            return Err(UnitsError::DuplicateName(name.to_string()));
        }
        let id = UnitSystemId(self.tables.systems.len());
        debug!(unit_system = name, "registered unit system");
        self.tables.systems.push(UnitSystem { id, name: name.to_string() });
        self.tables.system_names.insert(name.to_string(), id);
        Ok(id)
    }

    fn check_new_unit_name(&self, name: &str) -> Result<(), UnitsError> {
        if !is_valid_name(name) {
            return Err(UnitsError::InvalidName(name.to_string()));
        }
        if self.tables.unit_names.contains_key(name) {
            return Err(UnitsError::DuplicateName(name.to_string()));
        }
        Ok(())
    }

    fn find_phenomenon(&self, name: &str) -> Result<PhenomenonId, UnitsError> {
        self.tables.lookup_phenomenon(name)
            .map(|p| p.id)
            .ok_or_else(|| UnitsError::UnknownPhenomenon(name.to_string()))
    }

    fn find_unit_system(&self, name: Option<&str>) -> Result<Option<UnitSystemId>, UnitsError> {
        name.map(|n| {
            self.tables.lookup_unit_system(n)
                .map(|s| s.id)
                .ok_or_else(|| UnitsError::UnknownUnitSystem(n.to_string()))
        })
        .transpose()
    }

    fn check_qualifier(&self, owner: &str, factor: &Factor) -> Result<(), UnitsError> {
        match &factor.qualifier {
            Some(q) if *q != self.tables.config.alias && *q != self.tables.config.schema_name => {
                Err(UnitsError::unknown_reference(owner, format!("{}:{}", q, factor.name)))
            }
            _ => Ok(()),
        }
    }

    fn validate_coefficients(name: &str, coefficients: &Coefficients) -> Result<(), UnitsError> {
        if let Some(n) = coefficients.numerator {
            require_non_zero(n).map_err(|e| UnitsError::invalid_coefficient(name, "numerator", e))?;
        }
        if let Some(d) = coefficients.denominator {
            require_non_zero(d).map_err(|e| UnitsError::invalid_coefficient(name, "denominator", e))?;
        }
        if let Some(o) = coefficients.offset {
            require_finite(o).map_err(|e| UnitsError::invalid_coefficient(name, "offset", e))?;
        }
        Ok(())
    }

    fn add_defined_unit(
        &mut self,
        phenomenon: &str,
        unit_system: Option<&str>,
        name: &str,
        definition: &str,
        coefficients: Coefficients,
        constant: bool,
    ) -> Result<UnitId, UnitsError> {
        self.check_new_unit_name(name)?;
        let phenomenon_id = self.find_phenomenon(phenomenon)?;
        let system = self.find_unit_system(unit_system)?;
        Self::validate_coefficients(name, &coefficients)?;
        let expr = Expression::parse(definition)
            .map_err(|e| UnitsError::invalid_definition(name, e.to_string()))?;

        let expected = &self.tables.phenomena[phenomenon_id.0];
        let resolution = self.resolve(name, &expr, &coefficients, expected)?;
        if resolution.signature != expected.signature {
            return Err(UnitsError::SignatureMismatch {
                name: name.to_string(),
                signature: resolution.signature.to_string(),
                phenomenon: expected.name.clone(),
                expected: expected.signature.to_string(),
            });
        }

        let kind = if constant {
            UnitKind::Constant { definition: definition.to_string(), coefficients }
        } else {
            UnitKind::Regular { definition: definition.to_string(), coefficients }
        };
        debug!(
            unit = name,
            phenomenon,
            constant,
            scale = resolution.scale,
            "registered unit"
        );
        let id = self.push_unit(name, phenomenon_id, system, kind, resolution);
        if expr.is_self_reference(name) {
            self.tables.phenomena[phenomenon_id.0].root = Some(id);
        }
        Ok(id)
    }

    /// Derive how a definition maps onto its phenomenon's canonical base
    fn resolve(
        &self,
        name: &str,
        expr: &Expression,
        coefficients: &Coefficients,
        phenomenon: &Phenomenon,
    ) -> Result<Resolution, UnitsError> {
        let ratio = coefficients.numerator.unwrap_or(1.0) / coefficients.denominator.unwrap_or(1.0);
        let offset = coefficients.offset.unwrap_or(0.0);

        if expr.is_self_reference(name) {
            if ratio != 1.0 || offset != 0.0 {
                return Err(UnitsError::invalid_definition(
                    name,
                    "a unit defined as itself cannot carry a ratio or offset",
                ));
            }
            // The canonical base of a derived phenomenon is a product of roots
            if !phenomenon.is_base() && !phenomenon.signature.is_dimensionless() {
                return Err(UnitsError::invalid_definition(
                    name,
                    format!("{} is a derived phenomenon and cannot have a root unit", phenomenon.name),
                ));
            }
            if let Some(root) = phenomenon.root.and_then(|id| self.tables.unit(id)) {
                return Err(UnitsError::invalid_definition(
                    name,
                    format!("{} already has the root unit {}", phenomenon.name, root.name),
                ));
            }
            return Ok(Resolution::root(phenomenon.signature.clone()));
        }

        let mut factors: Vec<(&Factor, &Unit)> = Vec::with_capacity(expr.factors.len());
        for factor in &expr.factors {
            self.check_qualifier(name, factor)?;
            let unit = self.tables.exact_unit(&factor.name)
                .ok_or_else(|| UnitsError::unknown_reference(name, factor.name.as_str()))?;
            if factor.constant && !unit.is_constant() {
                return Err(UnitsError::invalid_definition(
                    name,
                    format!("[{}] is not a constant", factor.name),
                ));
            }
            if unit.is_inverted() {
                return Err(UnitsError::invalid_definition(
                    name,
                    format!("inverted unit {} cannot appear in a definition", factor.name),
                ));
            }
            factors.push((factor, unit));
        }

        let signature = factors.iter()
            .try_fold(Signature::dimensionless(), |sig, (f, u)| {
                u.signature().power(f.exponent).and_then(|p| sig.multiply(&p))
            })
            .ok_or_else(|| exponent_overflow(name))?;

        let parents: Vec<&(&Factor, &Unit)> = factors.iter().filter(|(f, _)| !f.constant).collect();
        let resolution = match parents.as_slice() {
            // A single plain reference: chain onto it, constants scale the hop
            [(f, parent)] if f.exponent == 1 => {
                let factor = factors.iter()
                    .filter(|(f, _)| f.constant)
                    .fold(ratio, |k, (f, u)| k * u.scale().powi(f.exponent));
                Resolution {
                    parent: Some(parent.id),
                    step: Step { factor, offset },
                    scale: factor * parent.scale(),
                    base_offset: offset * factor * parent.scale() + parent.base_offset(),
                    signature,
                }
            }
            // Products and powers hang directly off the canonical base
            _ => {
                if let Some((f, _)) = factors.iter().find(|(_, u)| self.tables.is_affine(u)) {
                    return Err(UnitsError::invalid_definition(
                        name,
                        format!("{} has an offset and cannot appear in a product or power", f.name),
                    ));
                }
                let factor = factors.iter()
                    .fold(ratio, |k, (f, u)| k * u.scale().powi(f.exponent));
                Resolution {
                    parent: None,
                    step: Step { factor, offset },
                    scale: factor,
                    base_offset: offset * factor,
                    signature,
                }
            }
        };
        require_non_zero(resolution.scale)
            .map_err(|e| UnitsError::invalid_coefficient(name, "scale", e))?;
        Ok(resolution)
    }

    fn add_inverted_unit(
        &mut self,
        inverts: &str,
        unit_system: Option<&str>,
        name: &str,
    ) -> Result<UnitId, UnitsError> {
        self.check_new_unit_name(name)?;
        let base = self.tables.exact_unit(inverts)
            .ok_or_else(|| UnitsError::unknown_reference(name, inverts))?;
        if base.is_inverted() {
            return Err(UnitsError::invalid_inversion(name, inverts, "the base is itself an inverted unit"));
        }
        if base.is_constant() {
            return Err(UnitsError::invalid_inversion(name, inverts, "constants cannot be inverted"));
        }
        if self.tables.is_affine(base) {
            return Err(UnitsError::invalid_inversion(name, inverts, "the base has an offset"));
        }
        let (base_id, phenomenon) = (base.id, base.phenomenon);
        let resolution = Resolution {
            scale: 1.0 / base.scale(),
            ..Resolution::root(base.signature().clone())
        };
        let system = self.find_unit_system(unit_system)?;

        debug!(unit = name, inverts, scale = resolution.scale, "registered inverted unit");
        Ok(self.push_unit(
            name,
            phenomenon,
            system,
            UnitKind::Inverted { inverts: base_id },
            resolution,
        ))
    }

    fn push_unit(
        &mut self,
        name: &str,
        phenomenon: PhenomenonId,
        system: Option<UnitSystemId>,
        kind: UnitKind,
        resolution: Resolution,
    ) -> UnitId {
        let id = UnitId { registry: self.tables.tag, index: self.tables.units.len() };
        self.tables.units.push(Unit {
            id,
            name: name.to_string(),
            phenomenon,
            system,
            kind,
            resolution,
        });
        self.tables.unit_names.insert(name.to_string(), id);
        self.tables.phenomena[phenomenon.0].units.push(id);
        id
    }
}

/// Frozen, read-only unit registry
#[derive(Debug, Clone)]
pub struct UnitRegistry {
    tables: Tables,
    folded_names: HashMap<String, UnitId>,
}

impl UnitRegistry {
    pub fn config(&self) -> &RegistryConfig {
        &self.tables.config
    }

    /// Look up a unit or constant by bare or qualified name, using the
    /// registry's default case handling
    pub fn lookup_unit(&self, name: &str) -> Option<&Unit> {
        let options = LookupOptions { case_insensitive: self.tables.config.case_insensitive };
        self.lookup_unit_with(name, options)
    }

    pub fn lookup_unit_with(&self, name: &str, options: LookupOptions) -> Option<&Unit> {
        self.lookup_unit_by(name, options.strategies())
    }

    /// Try each strategy in order and return the first match
    pub fn lookup_unit_by(&self, name: &str, strategies: &[LookupStrategy]) -> Option<&Unit> {
        strategies.iter().find_map(|strategy| self.match_strategy(name, *strategy))
    }

    fn match_strategy(&self, name: &str, strategy: LookupStrategy) -> Option<&Unit> {
        match strategy {
            LookupStrategy::Exact => self.tables.exact_unit(name),
            LookupStrategy::Qualified => self.tables.qualified_unit(name),
            LookupStrategy::CaseInsensitive => {
                let bare = self.tables.config.strip_qualifier(name, true)?;
                self.folded_names.get(&bare.to_ascii_uppercase())
                    .and_then(|id| self.tables.unit(*id))
            }
        }
    }

    /// Resolve a name from the previous unit library
    pub fn lookup_unit_using_legacy_name(&self, legacy: &str) -> Option<&Unit> {
        self.tables.legacy_names.get(legacy).and_then(|id| self.tables.unit(*id))
    }

    pub fn lookup_phenomenon(&self, name: &str) -> Option<&Phenomenon> {
        self.tables.lookup_phenomenon(name)
    }

    pub fn lookup_unit_system(&self, name: &str) -> Option<&UnitSystem> {
        self.tables.lookup_unit_system(name)
    }

    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.tables.unit(id)
    }

    pub fn phenomenon(&self, id: PhenomenonId) -> Option<&Phenomenon> {
        self.tables.phenomena.get(id.0)
    }

    pub fn unit_system(&self, id: UnitSystemId) -> Option<&UnitSystem> {
        self.tables.systems.get(id.0)
    }

    /// The phenomenon a unit belongs to
    pub fn phenomenon_of(&self, unit: &Unit) -> Option<&Phenomenon> {
        if !self.owns(unit) {
            return None;
        }
        self.phenomenon(unit.phenomenon)
    }

    /// Units and constants of exactly this phenomenon
    pub fn units_of<'a>(&'a self, phenomenon: &'a Phenomenon) -> impl Iterator<Item = &'a Unit> + 'a {
        phenomenon.units.iter().filter_map(move |id| self.tables.unit(*id))
    }

    pub fn all_units(&self) -> &[Unit] {
        &self.tables.units
    }

    pub fn all_phenomena(&self) -> &[Phenomenon] {
        &self.tables.phenomena
    }

    pub fn all_unit_systems(&self) -> &[UnitSystem] {
        &self.tables.systems
    }

    pub fn len(&self) -> usize {
        self.tables.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.units.is_empty()
    }

    /// Whether the unit was handed out by this registry
    pub fn owns(&self, unit: &Unit) -> bool {
        self.tables.owns(unit)
    }

    pub(crate) fn chain<'a>(&'a self, unit: &'a Unit) -> impl Iterator<Item = &'a Unit> + 'a {
        self.tables.chain(unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use measura_core::codes;

    fn length_builder() -> RegistryBuilder {
        let mut b = RegistryBuilder::new();
        b.register_phenomenon("LENGTH", "LENGTH").unwrap();
        b.register_phenomenon("NUMBER", "1").unwrap();
        b.register_phenomenon("AREA", "LENGTH(2)").unwrap();
        b.register_unit_system("SI").unwrap();
        b.register_unit_system("USCUSTOM").unwrap();
        b.register_constant("NUMBER", "ONE", "ONE", None, None).unwrap();
        b.register_constant("NUMBER", "MILLI", "ONE", Some(1.0e-3), None).unwrap();
        b.register_unit("LENGTH", Some("SI"), "M", "M", Coefficients::new()).unwrap();
        b.register_unit("LENGTH", Some("SI"), "MM", "[MILLI]*M", Coefficients::new()).unwrap();
        b.register_unit("LENGTH", Some("USCUSTOM"), "IN", "MM", Coefficients::numerator(25.4)).unwrap();
        b.register_unit("LENGTH", Some("USCUSTOM"), "FT", "IN", Coefficients::numerator(12.0)).unwrap();
        b
    }

    #[test]
    fn test_phenomenon_signatures() {
        let b = length_builder();
        let area = b.lookup_phenomenon("AREA").unwrap();
        assert_eq!(area.signature().exponent("LENGTH"), 2);
        assert!(b.lookup_phenomenon("LENGTH").unwrap().is_base());
        assert!(b.lookup_phenomenon("NUMBER").unwrap().signature().is_dimensionless());
    }

    #[test]
    fn test_resolution_chain() {
        let b = length_builder();
        let ft = b.lookup_unit("FT").unwrap();
        let inch = b.lookup_unit("IN").unwrap();
        assert_eq!(ft.resolution.parent, Some(inch.id()));
        assert_eq!(ft.resolution.step.factor, 12.0);
        assert!((ft.scale() - 0.3048).abs() < 1e-15);

        let m = b.lookup_unit("M").unwrap();
        assert_eq!(m.resolution.parent, None);
        assert_eq!(m.scale(), 1.0);
    }

    #[test]
    fn test_duplicate_name() {
        let mut b = length_builder();
        let err = b.register_unit("LENGTH", Some("SI"), "FT", "M", Coefficients::new()).unwrap_err();
        assert_eq!(err.code(), codes::DUPLICATE_NAME);

        // Units and constants share one namespace
        let err = b.register_constant("NUMBER", "M", "ONE", None, None).unwrap_err();
        assert_eq!(err, UnitsError::DuplicateName("M".into()));
    }

    #[test]
    fn test_zero_coefficients_rejected() {
        let mut b = length_builder();
        let err = b.register_unit("LENGTH", None, "BAD", "M", Coefficients::numerator(0.0)).unwrap_err();
        assert_eq!(err.code(), codes::INVALID_DEFINITION);
        let err = b.register_unit("LENGTH", None, "BAD", "M", Coefficients::ratio(1.0, 0.0)).unwrap_err();
        assert_eq!(err.code(), codes::INVALID_DEFINITION);
        let err = b.register_unit("LENGTH", None, "BAD", "M", Coefficients::offset(f64::NAN)).unwrap_err();
        assert_eq!(err.code(), codes::INVALID_DEFINITION);
        assert!(b.lookup_unit("BAD").is_none());
    }

    #[test]
    fn test_unknown_references() {
        let mut b = length_builder();
        assert_eq!(
            b.register_unit("VOLUME", None, "CUB_M", "M(3)", Coefficients::new()).unwrap_err(),
            UnitsError::UnknownPhenomenon("VOLUME".into())
        );
        assert_eq!(
            b.register_unit("LENGTH", Some("IMPERIAL"), "YRD", "FT", Coefficients::numerator(3.0)).unwrap_err(),
            UnitsError::UnknownUnitSystem("IMPERIAL".into())
        );
        assert_eq!(
            b.register_unit("LENGTH", None, "KM", "[KILO]*M", Coefficients::new()).unwrap_err(),
            UnitsError::unknown_reference("KM", "KILO")
        );
        let err = b.register_unit("LENGTH", None, "YRD", "other:FT", Coefficients::new()).unwrap_err();
        assert_eq!(err.code(), codes::UNKNOWN_REFERENCE);
    }

    #[test]
    fn test_invalid_names() {
        let mut b = length_builder();
        assert_eq!(
            b.register_unit("LENGTH", None, "", "M", Coefficients::new()).unwrap_err(),
            UnitsError::InvalidName(String::new())
        );
        let err = b.register_unit("LENGTH", None, "CUB.M", "M", Coefficients::new()).unwrap_err();
        assert_eq!(err.code(), codes::INVALID_NAME);
    }

    #[test]
    fn test_malformed_definition() {
        let mut b = length_builder();
        let err = b.register_unit("LENGTH", None, "X", "M*", Coefficients::new()).unwrap_err();
        assert_eq!(err.code(), codes::INVALID_DEFINITION);
        let err = b.register_unit("LENGTH", None, "X", "[M]*MILLI", Coefficients::new()).unwrap_err();
        assert_eq!(err.code(), codes::INVALID_DEFINITION);
    }

    #[test]
    fn test_signature_mismatch() {
        let mut b = length_builder();
        let err = b.register_unit("LENGTH", None, "SQ_M", "M(2)", Coefficients::new()).unwrap_err();
        assert_eq!(err.code(), codes::SIGNATURE_MISMATCH);
        assert!(b.register_unit("AREA", None, "SQ_M", "M(2)", Coefficients::new()).is_ok());
    }

    #[test]
    fn test_inverted_rules() {
        let mut b = length_builder();
        b.register_unit("LENGTH", None, "OFFSET_M", "M", Coefficients::offset(1.0)).unwrap();
        b.register_unit("LENGTH", None, "CHILD_M", "OFFSET_M", Coefficients::new()).unwrap();

        let inv = b.register_inverted_unit("FT", None, "PER_FT").unwrap();
        let inv = b.unit(inv).unwrap();
        assert!(inv.is_inverted());
        assert_eq!(inv.phenomenon(), b.lookup_unit("FT").unwrap().phenomenon());
        assert_eq!(inv.scale(), 1.0 / b.lookup_unit("FT").unwrap().scale());
        assert_eq!(inv.base_offset(), 0.0);

        for (base, name) in [("PER_FT", "FT_AGAIN"), ("MILLI", "INV_MILLI"), ("OFFSET_M", "INV_OFF"), ("CHILD_M", "INV_CHILD")] {
            let err = b.register_inverted_unit(base, None, name).unwrap_err();
            assert_eq!(err.code(), codes::INVALID_INVERSION, "inverting {}", base);
        }
        assert_eq!(
            b.register_inverted_unit("NOPE", None, "INV_NOPE").unwrap_err(),
            UnitsError::unknown_reference("INV_NOPE", "NOPE")
        );
    }

    #[test]
    fn test_one_root_per_base_phenomenon() {
        let mut b = length_builder();
        let m = b.lookup_unit("M").unwrap().id();
        assert_eq!(b.lookup_phenomenon("LENGTH").unwrap().root(), Some(m));

        let err = b.register_unit("LENGTH", None, "FT2", "FT2", Coefficients::new()).unwrap_err();
        assert_eq!(err.code(), codes::INVALID_DEFINITION);
        let err = b.register_unit("AREA", None, "AREA_ROOT", "AREA_ROOT", Coefficients::new()).unwrap_err();
        assert_eq!(err.code(), codes::INVALID_DEFINITION);
        assert!(b.lookup_unit("FT2").is_none());
        assert_eq!(b.lookup_phenomenon("AREA").unwrap().root(), None);

        b.register_phenomenon("TIME", "TIME").unwrap();
        let s = b.register_unit("TIME", None, "S", "S", Coefficients::new()).unwrap();
        assert_eq!(b.lookup_phenomenon("TIME").unwrap().root(), Some(s));
    }

    #[test]
    fn test_exponent_out_of_range() {
        let mut b = length_builder();
        let err = b.register_phenomenon("HUGE", "AREA(2000000000)").unwrap_err();
        assert_eq!(err.code(), codes::INVALID_DEFINITION);
        assert!(b.lookup_phenomenon("HUGE").is_none());

        let err = b
            .register_unit("AREA", None, "HUGE_M", "M(2000000000)*M(2000000000)", Coefficients::new())
            .unwrap_err();
        assert_eq!(err.code(), codes::INVALID_DEFINITION);

        // Scale underflows to zero
        let err = b.register_unit("LENGTH", None, "TINY_M", "MM(400)*M(-399)", Coefficients::new()).unwrap_err();
        assert_eq!(err.code(), codes::INVALID_DEFINITION);
    }

    #[test]
    fn test_offset_units_only_chain_directly() {
        let mut b = length_builder();
        b.register_unit("LENGTH", None, "OFFSET_M", "M", Coefficients::offset(1.0)).unwrap();
        assert!(b.register_unit("LENGTH", None, "OFFSET_MM", "[MILLI]*OFFSET_M", Coefficients::new()).is_ok());

        let err = b.register_unit("LENGTH", None, "OFFSET_ONE", "OFFSET_M*ONE", Coefficients::new()).unwrap_err();
        assert_eq!(err.code(), codes::INVALID_DEFINITION);
        let err = b.register_unit("AREA", None, "SQ_OFFSET_M", "OFFSET_M(2)", Coefficients::new()).unwrap_err();
        assert_eq!(err.code(), codes::INVALID_DEFINITION);
        let err = b.register_unit("AREA", None, "OFFSET_MM_M", "OFFSET_MM*M", Coefficients::new()).unwrap_err();
        assert_eq!(err.code(), codes::INVALID_DEFINITION);
    }

    #[test]
    fn test_lookup_strategies() {
        let reg = length_builder().build();
        assert_eq!(reg.lookup_unit("FT").unwrap().name(), "FT");
        assert_eq!(reg.lookup_unit("u:FT").unwrap().name(), "FT");
        assert_eq!(reg.lookup_unit("Units:FT").unwrap().name(), "FT");
        assert!(reg.lookup_unit("ft").is_none());
        assert!(reg.lookup_unit("other:FT").is_none());
        assert_eq!(reg.lookup_unit_with("ft", LookupOptions::case_insensitive()).unwrap().name(), "FT");
        assert_eq!(reg.lookup_unit_with("U:ft", LookupOptions::case_insensitive()).unwrap().name(), "FT");
        assert_eq!(reg.lookup_unit_by("u:FT", &[LookupStrategy::Exact]), None);
    }

    #[test]
    fn test_config_case_insensitive_default() {
        let mut b = RegistryBuilder::with_config(RegistryConfig::new().with_case_insensitive(true));
        b.register_phenomenon("LENGTH", "LENGTH").unwrap();
        b.register_unit("LENGTH", None, "M", "M", Coefficients::new()).unwrap();
        let reg = b.build();
        assert_eq!(reg.lookup_unit("m").unwrap().name(), "M");
    }

    #[test]
    fn test_legacy_names() {
        let mut b = length_builder();
        b.add_legacy_name("FOOT", "FT").unwrap();
        assert_eq!(b.add_legacy_name("FOOT", "IN").unwrap_err(), UnitsError::DuplicateName("FOOT".into()));
        assert_eq!(b.add_legacy_name("YARD", "YRD").unwrap_err().code(), codes::UNKNOWN_REFERENCE);
        let reg = b.build();
        assert_eq!(reg.lookup_unit_using_legacy_name("FOOT").unwrap().name(), "FT");
        assert!(reg.lookup_unit_using_legacy_name("FT").is_none());
    }

    #[test]
    fn test_units_of_phenomenon() {
        let reg = length_builder().build();
        let length = reg.lookup_phenomenon("LENGTH").unwrap();
        let names: Vec<&str> = reg.units_of(length).map(|u| u.name()).collect();
        assert_eq!(names, vec!["M", "MM", "IN", "FT"]);
        for unit in reg.units_of(length) {
            assert!(length.is_compatible(unit));
            assert_eq!(unit.signature(), length.signature());
        }
        let number = reg.lookup_phenomenon("NUMBER").unwrap();
        assert!(reg.units_of(number).all(|u| u.is_constant()));
    }

    #[test]
    fn test_constants_have_no_unit_system() {
        let reg = length_builder().build();
        let milli = reg.lookup_unit("MILLI").unwrap();
        assert!(milli.is_constant());
        assert_eq!(milli.unit_system(), None);
        assert!(!milli.has_offset());
        assert_eq!(milli.scale(), 1.0e-3);
    }

    #[test]
    fn test_foreign_units() {
        let a = length_builder().build();
        let b = length_builder().build();
        let ft = b.lookup_unit("FT").unwrap();
        assert!(!a.owns(ft));
        assert!(b.owns(ft));
        assert!(a.phenomenon_of(ft).is_none());
    }
}

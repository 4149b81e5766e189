//! Registry-wide properties of the standard unit library

use std::sync::{Arc, OnceLock};
use std::thread;

use measura_core::codes;
use measura_units::{
    register_standard_units, standard_registry, standard_registry_with, Coefficients, Conversion,
    LookupOptions, ProblemCode, RegistryBuilder, RegistryConfig, UnitId, UnitRegistry,
};
use proptest::prelude::*;

fn registry() -> &'static UnitRegistry {
    static REGISTRY: OnceLock<UnitRegistry> = OnceLock::new();
    REGISTRY.get_or_init(|| standard_registry().unwrap())
}

fn all_units() -> Vec<UnitId> {
    registry().all_units().iter().map(|u| u.id()).collect()
}

fn pairs(same_phenomenon: bool) -> Vec<(UnitId, UnitId)> {
    let reg = registry();
    let mut out = Vec::new();
    for a in reg.all_units() {
        for b in reg.all_units() {
            if (a.phenomenon() == b.phenomenon()) == same_phenomenon {
                out.push((a.id(), b.id()));
            }
        }
    }
    out
}

proptest! {
    #[test]
    fn identity_is_exact(id in prop::sample::select(all_units()), value in -1.0e12f64..1.0e12) {
        let reg = registry();
        let unit = reg.unit(id).unwrap();
        prop_assert_eq!(reg.convert(value, unit, unit), Conversion::ok(value));
    }

    #[test]
    fn round_trip_recovers_value(
        (from, to) in prop::sample::select(pairs(true)),
        value in -1.0e6f64..1.0e6,
    ) {
        prop_assume!(value != 0.0);
        let reg = registry();
        let (a, b) = (reg.unit(from).unwrap(), reg.unit(to).unwrap());

        let there = reg.convert(value, a, b);
        prop_assert!(there.is_ok(), "{} -> {}: {}", a.name(), b.name(), there);
        let back = reg.convert(there.value, b, a);
        prop_assert!(back.is_ok(), "{} -> {}: {}", b.name(), a.name(), back);
        prop_assert!(
            (back.value - value).abs() <= 1.0e-9 * (1.0 + value.abs()),
            "{} {} -> {} -> {}", value, a.name(), b.name(), back.value
        );
    }

    #[test]
    fn different_phenomena_are_uncomparable(
        (from, to) in prop::sample::select(pairs(false)),
        value in prop::num::f64::ANY,
    ) {
        let reg = registry();
        let result = reg.convert(value, reg.unit(from).unwrap(), reg.unit(to).unwrap());
        prop_assert_eq!(result.problem, ProblemCode::UncomparableUnits);
        prop_assert!(result.value.is_nan());
    }
}

#[test]
fn test_every_unit_belongs_to_its_phenomenon() {
    let reg = registry();
    for phenomenon in reg.all_phenomena() {
        for unit in reg.units_of(phenomenon) {
            assert_eq!(unit.phenomenon(), phenomenon.id());
            assert!(phenomenon.is_compatible(unit));
            assert_eq!(unit.signature(), phenomenon.signature(), "{}", unit.name());
        }
    }
    let listed: usize = reg.all_phenomena().iter().map(|p| p.units().len()).sum();
    assert_eq!(listed, reg.len());
}

#[test]
fn test_concurrent_conversions() {
    let reg = Arc::new(standard_registry().unwrap());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let reg = Arc::clone(&reg);
            thread::spawn(move || {
                let ft = reg.lookup_unit("FT").unwrap();
                let mm = reg.lookup_unit("MM").unwrap();
                let converter = reg.converter(ft, mm);
                (0..1000).all(|n| {
                    let value = (i * 1000 + n) as f64;
                    converter.convert(value) == reg.convert(value, ft, mm)
                })
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn test_zero_coefficients_rejected() {
    let mut b = RegistryBuilder::new();
    register_standard_units(&mut b).unwrap();
    let err = b
        .register_unit("LENGTH", None, "ZERO_FT", "M", Coefficients::numerator(0.0))
        .unwrap_err();
    assert_eq!(err.code(), codes::INVALID_DEFINITION);
    assert!(b
        .register_unit("LENGTH", None, "INF_FT", "M", Coefficients::ratio(1.0, 0.0))
        .is_err());
    assert!(b.lookup_unit("ZERO_FT").is_none());
    assert!(b.lookup_unit("INF_FT").is_none());
}

#[test]
fn test_case_insensitive_only_when_requested() {
    let reg = registry();
    assert!(reg.lookup_unit("ft").is_none());
    assert!(reg.lookup_unit("u:ft").is_none());
    assert_eq!(
        reg.lookup_unit_with("u:ft", LookupOptions::case_insensitive()).map(|u| u.name()),
        Some("FT")
    );

    let relaxed = standard_registry_with(RegistryConfig::new().with_case_insensitive(true)).unwrap();
    assert_eq!(relaxed.lookup_unit("kg").map(|u| u.name()), Some("KG"));
    assert_eq!(relaxed.lookup_unit("Units:Kg").map(|u| u.name()), Some("KG"));
}

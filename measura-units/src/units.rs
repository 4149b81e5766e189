//! Standard unit library - phenomena, unit systems, constants and ~150 units
//! organized by category

use measura_core::UnitsError;
use crate::{Coefficients, RegistryBuilder, RegistryConfig, UnitRegistry};

const SI: Option<&str> = Some("SI");
const METRIC: Option<&str> = Some("METRIC");
const USCUSTOM: Option<&str> = Some("USCUSTOM");
const USSURVEY: Option<&str> = Some("USSURVEY");
const INTERNATIONAL: Option<&str> = Some("INTERNATIONAL");
const MARITIME: Option<&str> = Some("MARITIME");

fn none() -> Coefficients {
    Coefficients::new()
}

fn num(value: f64) -> Coefficients {
    Coefficients::numerator(value)
}

fn den(value: f64) -> Coefficients {
    Coefficients::new().with_denominator(value)
}

/// Build the standard registry with the default configuration
pub fn standard_registry() -> Result<UnitRegistry, UnitsError> {
    standard_registry_with(RegistryConfig::default())
}

pub fn standard_registry_with(config: RegistryConfig) -> Result<UnitRegistry, UnitsError> {
    let mut b = RegistryBuilder::with_config(config);
    register_standard_units(&mut b)?;
    Ok(b.build())
}

/// Register the whole standard library into an existing builder
pub fn register_standard_units(b: &mut RegistryBuilder) -> Result<(), UnitsError> {
    register_phenomena(b)?;
    register_unit_systems(b)?;
    register_constants(b)?;
    register_length_units(b)?;
    register_mass_units(b)?;
    register_time_units(b)?;
    register_temperature_units(b)?;
    register_current_units(b)?;
    register_amount_units(b)?;
    register_luminosity_units(b)?;
    register_angle_units(b)?;
    register_ratio_units(b)?;
    register_area_units(b)?;
    register_volume_units(b)?;
    register_velocity_units(b)?;
    register_acceleration_units(b)?;
    register_force_units(b)?;
    register_pressure_units(b)?;
    register_energy_units(b)?;
    register_power_units(b)?;
    register_frequency_units(b)?;
    register_viscosity_units(b)?;
    register_flow_units(b)?;
    register_concentration_units(b)?;
    register_legacy_names(b)?;
    Ok(())
}

fn register_phenomena(b: &mut RegistryBuilder) -> Result<(), UnitsError> {
    // Base phenomena
    for name in ["LENGTH", "MASS", "TIME", "TEMPERATURE", "CURRENT", "MOLE", "LUMINOSITY", "ANGLE"] {
        b.register_phenomenon(name, name)?;
    }
    b.register_phenomenon("NUMBER", "1")?;

    // Derived
    b.register_phenomenon("LENGTH_RATIO", "LENGTH*LENGTH(-1)")?;
    b.register_phenomenon("SLOPE", "LENGTH*LENGTH(-1)")?;
    b.register_phenomenon("AREA", "LENGTH(2)")?;
    b.register_phenomenon("VOLUME", "LENGTH(3)")?;
    b.register_phenomenon("VELOCITY", "LENGTH*TIME(-1)")?;
    b.register_phenomenon("ACCELERATION", "LENGTH*TIME(-2)")?;
    b.register_phenomenon("FORCE", "MASS*ACCELERATION")?;
    b.register_phenomenon("PRESSURE", "FORCE*AREA(-1)")?;
    b.register_phenomenon("WORK", "FORCE*LENGTH")?;
    b.register_phenomenon("TORQUE", "FORCE*LENGTH")?;
    b.register_phenomenon("POWER", "WORK*TIME(-1)")?;
    b.register_phenomenon("FREQUENCY", "TIME(-1)")?;
    b.register_phenomenon("DYNAMIC_VISCOSITY", "PRESSURE*TIME")?;
    b.register_phenomenon("FLOW", "VOLUME*TIME(-1)")?;
    b.register_phenomenon("MASS_FLOW", "MASS*TIME(-1)")?;
    b.register_phenomenon("SPECIFIC_ENERGY", "WORK*MASS(-1)")?;
    b.register_phenomenon("MOLAR_CONCENTRATION", "MOLE*VOLUME(-1)")?;
    b.register_phenomenon("FORCE_DENSITY", "FORCE*VOLUME(-1)")?;
    Ok(())
}

fn register_unit_systems(b: &mut RegistryBuilder) -> Result<(), UnitsError> {
    for name in ["SI", "METRIC", "USCUSTOM", "USSURVEY", "INTERNATIONAL", "MARITIME"] {
        b.register_unit_system(name)?;
    }
    Ok(())
}

fn register_constants(b: &mut RegistryBuilder) -> Result<(), UnitsError> {
    b.register_constant("NUMBER", "ONE", "ONE", None, None)?;

    // Decimal prefixes
    let prefixes = [
        ("PICO", 1.0e-12),
        ("NANO", 1.0e-9),
        ("MICRO", 1.0e-6),
        ("MILLI", 1.0e-3),
        ("CENTI", 1.0e-2),
        ("DECI", 1.0e-1),
        ("HECTO", 1.0e2),
        ("KILO", 1.0e3),
        ("MEGA", 1.0e6),
        ("GIGA", 1.0e9),
    ];
    for (name, value) in prefixes {
        b.register_constant("NUMBER", name, "ONE", Some(value), None)?;
    }

    b.register_constant("NUMBER", "PI", "ONE", Some(3.1415926535897932384626433832795), None)?;
    Ok(())
}

fn register_length_units(b: &mut RegistryBuilder) -> Result<(), UnitsError> {
    // SI length units
    b.register_unit("LENGTH", SI, "M", "M", none())?;
    b.register_unit("LENGTH", SI, "MM", "[MILLI]*M", none())?;
    b.register_unit("LENGTH", SI, "CM", "[CENTI]*M", none())?;
    b.register_unit("LENGTH", SI, "DM", "[DECI]*M", none())?;
    b.register_unit("LENGTH", SI, "KM", "[KILO]*M", none())?;
    b.register_unit("LENGTH", SI, "MU", "[MICRO]*M", none())?;

    // US customary, defined from the international inch
    b.register_unit("LENGTH", USCUSTOM, "IN", "MM", num(25.4))?;
    b.register_unit("LENGTH", USCUSTOM, "FT", "IN", num(12.0))?;
    b.register_unit("LENGTH", USCUSTOM, "YRD", "FT", num(3.0))?;
    b.register_unit("LENGTH", USCUSTOM, "CHAIN", "FT", num(66.0))?;
    b.register_unit("LENGTH", USCUSTOM, "MILE", "YRD", num(1760.0))?;

    b.register_unit("LENGTH", USSURVEY, "US_SURVEY_FT", "M", Coefficients::ratio(1200.0, 3937.0))?;
    b.register_unit("LENGTH", USSURVEY, "US_SURVEY_MILE", "US_SURVEY_FT", num(5280.0))?;

    b.register_unit("LENGTH", MARITIME, "NAUT_MILE", "M", num(1852.0))?;
    Ok(())
}

fn register_mass_units(b: &mut RegistryBuilder) -> Result<(), UnitsError> {
    b.register_unit("MASS", SI, "KG", "KG", none())?;
    b.register_unit("MASS", SI, "G", "[MILLI]*KG", none())?;
    b.register_unit("MASS", SI, "MG", "[MILLI]*G", none())?;
    b.register_unit("MASS", SI, "MKG", "[MICRO]*G", none())?;
    b.register_unit("MASS", SI, "NG", "[NANO]*G", none())?;
    b.register_unit("MASS", METRIC, "TONNE", "[KILO]*KG", none())?;

    b.register_unit("MASS", USCUSTOM, "LBM", "KG", num(0.45359237))?;
    b.register_unit("MASS", USCUSTOM, "KIPM", "[KILO]*LBM", none())?;
    b.register_unit("MASS", USCUSTOM, "SHORT_TON_MASS", "LBM", num(2000.0))?;
    Ok(())
}

fn register_time_units(b: &mut RegistryBuilder) -> Result<(), UnitsError> {
    b.register_unit("TIME", SI, "S", "S", none())?;
    b.register_unit("TIME", SI, "MS", "[MILLI]*S", none())?;
    b.register_unit("TIME", INTERNATIONAL, "MIN", "S", num(60.0))?;
    b.register_unit("TIME", INTERNATIONAL, "HR", "MIN", num(60.0))?;
    b.register_unit("TIME", INTERNATIONAL, "DAY", "HR", num(24.0))?;
    b.register_unit("TIME", INTERNATIONAL, "WEEK", "DAY", num(7.0))?;
    b.register_unit("TIME", INTERNATIONAL, "YR", "DAY", num(365.0))?;
    Ok(())
}

fn register_temperature_units(b: &mut RegistryBuilder) -> Result<(), UnitsError> {
    b.register_unit("TEMPERATURE", SI, "K", "K", none())?;
    b.register_unit("TEMPERATURE", METRIC, "CELSIUS", "K", Coefficients::offset(273.15))?;
    b.register_unit(
        "TEMPERATURE",
        USCUSTOM,
        "FAHRENHEIT",
        "CELSIUS",
        Coefficients::ratio(5.0, 9.0).with_offset(-32.0),
    )?;
    b.register_unit("TEMPERATURE", USCUSTOM, "RANKINE", "K", Coefficients::ratio(5.0, 9.0))?;
    Ok(())
}

fn register_current_units(b: &mut RegistryBuilder) -> Result<(), UnitsError> {
    b.register_unit("CURRENT", SI, "A", "A", none())?;
    b.register_unit("CURRENT", SI, "KILOAMPERE", "[KILO]*A", none())?;
    b.register_unit("CURRENT", SI, "MILLIAMPERE", "[MILLI]*A", none())?;
    b.register_unit("CURRENT", SI, "MICROAMPERE", "[MICRO]*A", none())?;
    Ok(())
}

fn register_amount_units(b: &mut RegistryBuilder) -> Result<(), UnitsError> {
    b.register_unit("MOLE", SI, "MOL", "MOL", none())?;
    b.register_unit("MOLE", SI, "KMOL", "[KILO]*MOL", none())?;
    b.register_unit("MOLE", SI, "MICROMOL", "[MICRO]*MOL", none())?;
    b.register_unit("MOLE", SI, "NMOL", "[NANO]*MOL", none())?;
    b.register_unit("MOLE", SI, "PICOMOL", "[PICO]*MOL", none())?;
    b.register_unit("MOLE", USCUSTOM, "LB_MOL", "MOL", num(453.59237))?;
    Ok(())
}

fn register_luminosity_units(b: &mut RegistryBuilder) -> Result<(), UnitsError> {
    b.register_unit("LUMINOSITY", SI, "CD", "CD", none())?;
    Ok(())
}

fn register_angle_units(b: &mut RegistryBuilder) -> Result<(), UnitsError> {
    b.register_unit("ANGLE", SI, "RAD", "RAD", none())?;
    b.register_unit("ANGLE", METRIC, "ARC_DEG", "[PI]*RAD", den(180.0))?;
    b.register_unit("ANGLE", METRIC, "ARC_MINUTE", "ARC_DEG", den(60.0))?;
    b.register_unit("ANGLE", METRIC, "ARC_SECOND", "ARC_MINUTE", den(60.0))?;
    b.register_unit("ANGLE", METRIC, "REVOLUTION", "[PI]*RAD", num(2.0))?;
    Ok(())
}

fn register_ratio_units(b: &mut RegistryBuilder) -> Result<(), UnitsError> {
    b.register_unit("NUMBER", INTERNATIONAL, "PERCENT", "ONE", den(100.0))?;

    b.register_unit("LENGTH_RATIO", SI, "M_PER_M", "M*M(-1)", none())?;
    b.register_unit("LENGTH_RATIO", SI, "MM_PER_M", "MM*M(-1)", none())?;

    // Slopes; HORIZONTAL_PER_VERTICAL is the reciprocal (run over rise)
    b.register_unit("SLOPE", SI, "VERTICAL_PER_HORIZONTAL", "M*M(-1)", none())?;
    b.register_unit("SLOPE", INTERNATIONAL, "PERCENT_SLOPE", "VERTICAL_PER_HORIZONTAL", den(100.0))?;
    b.register_inverted_unit("VERTICAL_PER_HORIZONTAL", INTERNATIONAL, "HORIZONTAL_PER_VERTICAL")?;
    Ok(())
}

fn register_area_units(b: &mut RegistryBuilder) -> Result<(), UnitsError> {
    b.register_unit("AREA", SI, "SQ_M", "M(2)", none())?;
    b.register_unit("AREA", SI, "SQ_MM", "MM(2)", none())?;
    b.register_unit("AREA", SI, "SQ_MU", "MU(2)", none())?;
    b.register_unit("AREA", SI, "SQ_DM", "DM(2)", none())?;
    b.register_unit("AREA", SI, "SQ_KM", "KM(2)", none())?;
    b.register_unit("AREA", METRIC, "ARE", "[HECTO]*SQ_M", none())?;
    b.register_unit("AREA", METRIC, "HECTARE", "[HECTO]*ARE", none())?;

    b.register_unit("AREA", USCUSTOM, "SQ_IN", "IN(2)", none())?;
    b.register_unit("AREA", USCUSTOM, "SQ_FT", "FT(2)", none())?;
    b.register_unit("AREA", USCUSTOM, "SQ_YRD", "YRD(2)", none())?;
    b.register_unit("AREA", USCUSTOM, "THOUSAND_SQ_FT", "[KILO]*SQ_FT", none())?;
    b.register_unit("AREA", USCUSTOM, "ACRE", "CHAIN(2)", num(10.0))?;
    Ok(())
}

fn register_volume_units(b: &mut RegistryBuilder) -> Result<(), UnitsError> {
    b.register_unit("VOLUME", SI, "CUB_M", "M(3)", none())?;
    b.register_unit("VOLUME", SI, "CUB_DM", "DM(3)", none())?;
    b.register_unit("VOLUME", SI, "CUB_MM", "MM(3)", none())?;
    b.register_unit("VOLUME", METRIC, "LITRE", "CUB_DM", none())?;

    b.register_unit("VOLUME", USCUSTOM, "CUB_IN", "IN(3)", none())?;
    b.register_unit("VOLUME", USCUSTOM, "CUB_FT", "FT(3)", none())?;
    b.register_unit("VOLUME", USCUSTOM, "GALLON", "IN(3)", num(231.0))?;
    b.register_unit("VOLUME", USCUSTOM, "ACRE_FT", "ACRE*FT", none())?;
    b.register_unit("VOLUME", USCUSTOM, "ACRE_IN", "ACRE*IN", none())?;
    Ok(())
}

fn register_velocity_units(b: &mut RegistryBuilder) -> Result<(), UnitsError> {
    b.register_unit("VELOCITY", SI, "M_PER_SEC", "M*S(-1)", none())?;
    b.register_unit("VELOCITY", METRIC, "KM_PER_HR", "KM*HR(-1)", none())?;
    b.register_unit("VELOCITY", USCUSTOM, "FT_PER_SEC", "FT*S(-1)", none())?;
    b.register_unit("VELOCITY", USCUSTOM, "MPH", "MILE*HR(-1)", none())?;
    b.register_unit("VELOCITY", MARITIME, "KNOT", "NAUT_MILE*HR(-1)", none())?;
    Ok(())
}

fn register_acceleration_units(b: &mut RegistryBuilder) -> Result<(), UnitsError> {
    b.register_unit("ACCELERATION", SI, "M_PER_SEC_SQ", "M*S(-2)", none())?;
    b.register_unit("ACCELERATION", METRIC, "CM_PER_SEC_SQ", "CM*S(-2)", none())?;
    b.register_unit("ACCELERATION", USCUSTOM, "FT_PER_SEC_SQ", "FT*S(-2)", none())?;

    // Standard gravity
    b.register_constant("ACCELERATION", "STD_G", "M*S(-2)", Some(9.80665), None)?;
    Ok(())
}

fn register_force_units(b: &mut RegistryBuilder) -> Result<(), UnitsError> {
    b.register_unit("FORCE", SI, "N", "KG*M*S(-2)", none())?;
    b.register_unit("FORCE", SI, "KN", "[KILO]*N", none())?;
    b.register_unit("FORCE", METRIC, "DYNE", "G*CM*S(-2)", none())?;

    b.register_unit("FORCE", USCUSTOM, "LBF", "[STD_G]*LBM", none())?;
    b.register_unit("FORCE", USCUSTOM, "KPF", "[KILO]*LBF", none())?;
    b.register_unit("FORCE", USCUSTOM, "PDL", "LBM*FT*S(-2)", none())?;
    b.register_unit("FORCE", USCUSTOM, "SHORT_TON_FORCE", "LBF", num(2000.0))?;
    b.register_unit("FORCE", USCUSTOM, "LONG_TON_FORCE", "LBF", num(2240.0))?;

    // The slug is the mass accelerated at 1 ft/s^2 by one pound-force
    b.register_unit("MASS", USCUSTOM, "SLUG", "LBF*S(2)*FT(-1)", none())?;
    Ok(())
}

fn register_pressure_units(b: &mut RegistryBuilder) -> Result<(), UnitsError> {
    b.register_unit("PRESSURE", SI, "PA", "N*M(-2)", none())?;
    b.register_unit("PRESSURE", SI, "KILOPASCAL", "[KILO]*PA", none())?;
    b.register_unit("PRESSURE", SI, "PA_GAUGE", "PA", Coefficients::offset(101325.0))?;
    b.register_unit("PRESSURE", SI, "KILOPASCAL_GAUGE", "[KILO]*PA_GAUGE", none())?;

    b.register_unit("PRESSURE", USCUSTOM, "PSI", "LBF*IN(-2)", none())?;
    b.register_unit("PRESSURE", USCUSTOM, "KSI", "[KILO]*PSI", none())?;
    b.register_unit("PRESSURE", USCUSTOM, "LBF_PER_SQ_FT", "LBF*FT(-2)", none())?;

    b.register_unit("PRESSURE", INTERNATIONAL, "ATM", "PA", num(101325.0))?;
    b.register_unit("PRESSURE", INTERNATIONAL, "TORR", "ATM", den(760.0))?;
    b.register_unit("PRESSURE", METRIC, "BAR", "[KILO]*PA", num(100.0))?;
    b.register_unit("PRESSURE", METRIC, "BAR_GAUGE", "BAR", Coefficients::offset(1.01325))?;
    Ok(())
}

fn register_energy_units(b: &mut RegistryBuilder) -> Result<(), UnitsError> {
    b.register_unit("WORK", SI, "J", "N*M", none())?;
    b.register_unit("WORK", SI, "KJ", "[KILO]*J", none())?;
    b.register_unit("WORK", SI, "MEGAJ", "[MEGA]*J", none())?;
    b.register_unit("WORK", INTERNATIONAL, "BTU", "J", num(1.05505585262e3))?;

    b.register_unit("TORQUE", SI, "N_M", "N*M", none())?;
    b.register_unit("TORQUE", USCUSTOM, "LBF_FT", "LBF*FT", none())?;

    b.register_unit("SPECIFIC_ENERGY", SI, "J_PER_KG", "J*KG(-1)", none())?;
    b.register_unit("SPECIFIC_ENERGY", SI, "KJ_PER_KG", "KJ*KG(-1)", none())?;
    b.register_unit("SPECIFIC_ENERGY", SI, "MEGAJ_PER_KG", "MEGAJ*KG(-1)", none())?;
    b.register_unit("SPECIFIC_ENERGY", USCUSTOM, "BTU_PER_LBM", "BTU*LBM(-1)", none())?;
    Ok(())
}

fn register_power_units(b: &mut RegistryBuilder) -> Result<(), UnitsError> {
    b.register_unit("POWER", SI, "W", "J*S(-1)", none())?;
    b.register_unit("POWER", SI, "KW", "[KILO]*W", none())?;
    b.register_unit("POWER", SI, "MEGAW", "[MEGA]*W", none())?;
    b.register_unit("POWER", USCUSTOM, "HP", "LBF*FT*S(-1)", num(550.0))?;

    b.register_unit("WORK", METRIC, "KWH", "KW*HR", none())?;
    Ok(())
}

fn register_frequency_units(b: &mut RegistryBuilder) -> Result<(), UnitsError> {
    b.register_unit("FREQUENCY", SI, "HZ", "S(-1)", none())?;
    b.register_unit("FREQUENCY", SI, "KHZ", "[KILO]*HZ", none())?;
    b.register_unit("FREQUENCY", SI, "MHZ", "[MEGA]*HZ", none())?;
    Ok(())
}

fn register_viscosity_units(b: &mut RegistryBuilder) -> Result<(), UnitsError> {
    b.register_unit("DYNAMIC_VISCOSITY", SI, "PA_S", "PA*S", none())?;
    b.register_unit("DYNAMIC_VISCOSITY", METRIC, "POISE", "[DECI]*PA_S", none())?;
    b.register_unit("DYNAMIC_VISCOSITY", METRIC, "CENTIPOISE", "[CENTI]*POISE", none())?;
    b.register_unit("DYNAMIC_VISCOSITY", USCUSTOM, "LBM_PER_FT_S", "LBM*FT(-1)*S(-1)", none())?;
    Ok(())
}

fn register_flow_units(b: &mut RegistryBuilder) -> Result<(), UnitsError> {
    b.register_unit("FLOW", SI, "CUB_M_PER_SEC", "CUB_M*S(-1)", none())?;
    b.register_unit("FLOW", SI, "CUB_M_PER_MIN", "CUB_M*MIN(-1)", none())?;
    b.register_unit("FLOW", METRIC, "LITRE_PER_SEC", "LITRE*S(-1)", none())?;
    b.register_unit("FLOW", USCUSTOM, "CUB_IN_PER_SEC", "CUB_IN*S(-1)", none())?;
    b.register_unit("FLOW", USCUSTOM, "CUB_IN_PER_MIN", "CUB_IN*MIN(-1)", none())?;
    b.register_unit("FLOW", USCUSTOM, "CUB_FT_PER_MIN", "CUB_FT*MIN(-1)", none())?;
    b.register_unit("FLOW", USCUSTOM, "ACRE_FT_PER_DAY", "ACRE_FT*DAY(-1)", none())?;
    b.register_unit("FLOW", USCUSTOM, "ACRE_IN_PER_DAY", "ACRE_IN*DAY(-1)", none())?;

    b.register_unit("MASS_FLOW", SI, "KG_PER_SEC", "KG*S(-1)", none())?;
    b.register_unit("MASS_FLOW", SI, "G_PER_SEC", "G*S(-1)", none())?;
    Ok(())
}

fn register_concentration_units(b: &mut RegistryBuilder) -> Result<(), UnitsError> {
    b.register_unit("MOLAR_CONCENTRATION", SI, "MOL_PER_CUB_DM", "MOL*CUB_DM(-1)", none())?;
    b.register_unit("MOLAR_CONCENTRATION", SI, "MICROMOL_PER_CUB_DM", "MICROMOL*CUB_DM(-1)", none())?;
    b.register_unit("MOLAR_CONCENTRATION", SI, "NMOL_PER_CUB_DM", "NMOL*CUB_DM(-1)", none())?;
    b.register_unit("MOLAR_CONCENTRATION", SI, "PICOMOL_PER_CUB_DM", "PICOMOL*CUB_DM(-1)", none())?;
    b.register_unit("MOLAR_CONCENTRATION", USCUSTOM, "MOL_PER_CUB_FT", "MOL*CUB_FT(-1)", none())?;

    b.register_unit("FORCE_DENSITY", SI, "N_PER_CUB_M", "N*CUB_M(-1)", none())?;
    b.register_unit("FORCE_DENSITY", USCUSTOM, "N_PER_CUB_FT", "N*CUB_FT(-1)", none())?;
    b.register_unit("FORCE_DENSITY", USCUSTOM, "KN_PER_CUB_FT", "[KILO]*N_PER_CUB_FT", none())?;
    Ok(())
}

/// Names used by the previous unit library
fn register_legacy_names(b: &mut RegistryBuilder) -> Result<(), UnitsError> {
    let legacy = [
        ("KELVIN", "K"),
        ("METRE", "M"),
        ("FOOT", "FT"),
        ("POUND", "LBM"),
        ("POUND_FORCE", "LBF"),
        ("DEGREE", "ARC_DEG"),
        ("ATMOSPHERE", "ATM"),
        ("FOOT_SQUARED", "SQ_FT"),
        ("YARD_SQUARED", "SQ_YRD"),
        ("MILLIMETRE_SQUARED", "SQ_MM"),
        ("THOUSAND_FOOT_SQUARED", "THOUSAND_SQ_FT"),
        ("POUND_FORCE_PER_FOOT_SQUARED", "LBF_PER_SQ_FT"),
        ("SQ.MU", "SQ_MU"),
        ("SQ.MM", "SQ_MM"),
        ("SQ.DM", "SQ_DM"),
        ("SQ.FT", "SQ_FT"),
        ("CUB.M/SEC", "CUB_M_PER_SEC"),
        ("CUB.M/MIN", "CUB_M_PER_MIN"),
        ("CUB.IN/SEC", "CUB_IN_PER_SEC"),
        ("CUB.IN/MIN", "CUB_IN_PER_MIN"),
        ("CUB.FT/MIN", "CUB_FT_PER_MIN"),
        ("ACRE_FT/DAY", "ACRE_FT_PER_DAY"),
        ("ACRE_IN/DAY", "ACRE_IN_PER_DAY"),
        ("KG/SEC", "KG_PER_SEC"),
        ("G/SEC", "G_PER_SEC"),
        ("M/SEC.SQ", "M_PER_SEC_SQ"),
        ("CM/SEC.SQ", "CM_PER_SEC_SQ"),
        ("FT/SEC.SQ", "FT_PER_SEC_SQ"),
        ("PA-S", "PA_S"),
        ("LBM/(FT*S)", "LBM_PER_FT_S"),
        ("LB-MOL", "LB_MOL"),
        ("J/KG", "J_PER_KG"),
        ("KJ/KG", "KJ_PER_KG"),
        ("MEGAJ/KG", "MEGAJ_PER_KG"),
        ("BTU/LBM", "BTU_PER_LBM"),
        ("MOL/CUB.DM", "MOL_PER_CUB_DM"),
        ("MICROMOL/CUB.DM", "MICROMOL_PER_CUB_DM"),
        ("NMOL/CUB.DM", "NMOL_PER_CUB_DM"),
        ("PICOMOL/CUB.DM", "PICOMOL_PER_CUB_DM"),
        ("MOL/CUB.FT", "MOL_PER_CUB_FT"),
        ("N/CUB.M", "N_PER_CUB_M"),
        ("N/CUB.FT", "N_PER_CUB_FT"),
        ("KN/CUB.FT", "KN_PER_CUB_FT"),
        ("HORIZONTAL/VERTICAL", "HORIZONTAL_PER_VERTICAL"),
        ("VERTICAL/HORIZONTAL", "VERTICAL_PER_HORIZONTAL"),
    ];
    for (old, current) in legacy {
        b.add_legacy_name(old, current)?;
    }
    Ok(())
}

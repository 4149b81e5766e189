//! Unit conversion
//!
//! A conversion between two regular units walks both definition chains up to
//! their nearest shared ancestor (or the canonical base when they share
//! none), applies the source hops forward and the target hops backward.
//! Taking the shortest path keeps conversions between closely related units
//! exact: FAHRENHEIT to CELSIUS never passes through KELVIN.
//!
//! Inverted units are handled by taking a reciprocal on the appropriate side
//! of that linear path.

use measura_core::Conversion;
use crate::unit::Step;
use crate::{Unit, UnitRegistry};

/// Hops from a source unit up to a shared ancestor, then down to the target
#[derive(Debug, Clone, PartialEq)]
struct Path {
    up: Vec<Step>,
    /// Target hops in application order (ancestor first)
    down: Vec<Step>,
}

impl Path {
    fn apply(&self, value: f64) -> f64 {
        let shared = self.up.iter().fold(value, |v, step| step.up(v));
        self.down.iter().fold(shared, |v, step| step.down(v))
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Route {
    Identity,
    /// Every input yields this result
    Fixed(Conversion),
    Linear(Path),
    /// Reciprocal of the input, then the path
    FromInverted(Path),
    /// The path, then the reciprocal of the result
    ToInverted(Path),
}

/// A resolved conversion between two units, reusable for many values
#[derive(Debug, Clone, PartialEq)]
pub struct Converter {
    route: Route,
}

impl Converter {
    pub fn convert(&self, value: f64) -> Conversion {
        match &self.route {
            Route::Identity => Conversion::ok(value),
            Route::Fixed(result) => *result,
            Route::Linear(path) => Conversion::ok(path.apply(value)),
            Route::FromInverted(path) => {
                if value == 0.0 {
                    return Conversion::inverting_zero();
                }
                Conversion::ok(path.apply(1.0 / value))
            }
            Route::ToInverted(path) => {
                let linear = path.apply(value);
                if linear == 0.0 {
                    return Conversion::inverting_zero();
                }
                Conversion::ok(1.0 / linear)
            }
        }
    }

    /// False when the units cannot be converted at all
    pub fn is_convertible(&self) -> bool {
        !matches!(self.route, Route::Fixed(_))
    }
}

impl UnitRegistry {
    /// Convert `value` from one unit to another
    pub fn convert(&self, value: f64, from: &Unit, to: &Unit) -> Conversion {
        self.converter(from, to).convert(value)
    }

    /// Resolve the conversion path between two units once
    pub fn converter(&self, from: &Unit, to: &Unit) -> Converter {
        Converter { route: self.route(from, to) }
    }

    /// Look both units up by name, then convert
    pub fn convert_by_name(&self, value: f64, from: &str, to: &str) -> Conversion {
        match (self.lookup_unit(from), self.lookup_unit(to)) {
            (Some(from), Some(to)) => self.convert(value, from, to),
            _ => Conversion::invalid_unit(),
        }
    }

    /// Express a value of `unit` in the canonical base of its phenomenon
    pub fn to_base(&self, value: f64, unit: &Unit) -> Conversion {
        if !self.owns(unit) {
            return Conversion::invalid_unit();
        }
        match unit.inverts() {
            None => Conversion::ok(value * unit.scale() + unit.base_offset()),
            Some(id) => {
                let Some(base) = self.unit(id) else {
                    return Conversion::invalid_unit();
                };
                if value == 0.0 {
                    return Conversion::inverting_zero();
                }
                Conversion::ok((1.0 / value) * base.scale())
            }
        }
    }

    /// Express a canonical-base value in `unit`
    pub fn from_base(&self, value: f64, unit: &Unit) -> Conversion {
        if !self.owns(unit) {
            return Conversion::invalid_unit();
        }
        match unit.inverts() {
            None => Conversion::ok((value - unit.base_offset()) / unit.scale()),
            Some(id) => {
                let Some(base) = self.unit(id) else {
                    return Conversion::invalid_unit();
                };
                let linear = value / base.scale();
                if linear == 0.0 {
                    return Conversion::inverting_zero();
                }
                Conversion::ok(1.0 / linear)
            }
        }
    }

    fn route(&self, from: &Unit, to: &Unit) -> Route {
        if from.id() == to.id() {
            return Route::Identity;
        }
        if !self.owns(from) || !self.owns(to) {
            return Route::Fixed(Conversion::invalid_unit());
        }
        if from.phenomenon() != to.phenomenon() {
            return Route::Fixed(Conversion::uncomparable());
        }

        let inverted_base = |unit: &Unit| unit.inverts().map(|id| self.unit(id));
        match (inverted_base(from), inverted_base(to)) {
            // 1/a -> 1/b is the linear map b -> a
            (Some(Some(a)), Some(Some(b))) => Route::Linear(self.path(b, a)),
            (Some(Some(a)), None) => Route::FromInverted(self.path(a, to)),
            (None, Some(Some(b))) => Route::ToInverted(self.path(from, b)),
            (None, None) => Route::Linear(self.path(from, to)),
            _ => Route::Fixed(Conversion::invalid_unit()),
        }
    }

    fn path(&self, from: &Unit, to: &Unit) -> Path {
        let from_chain: Vec<&Unit> = self.chain(from).collect();
        let to_chain: Vec<&Unit> = self.chain(to).collect();

        let shared = to_chain.iter()
            .find(|t| from_chain.iter().any(|f| f.id() == t.id()))
            .map(|u| u.id());

        let up = from_chain.iter()
            .take_while(|u| Some(u.id()) != shared)
            .map(|u| u.resolution.step)
            .collect();
        let mut down: Vec<Step> = to_chain.iter()
            .take_while(|u| Some(u.id()) != shared)
            .map(|u| u.resolution.step)
            .collect();
        down.reverse();

        Path { up, down }
    }
}

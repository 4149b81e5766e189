//! Measura Core - Fundamental types
//!
//! This crate provides the core types shared by the measura crates:
//! - `UnitsError`: Registration failures with machine-readable codes
//! - `Conversion` / `ProblemCode`: Conversion results
//! - Coefficient parsing and ULP comparison for `f64`

mod number;
mod problem;
mod error;

pub use number::{NumberError, parse_coefficient, require_non_zero, require_finite, almost_equal};
pub use problem::{ProblemCode, Conversion};
pub use error::{UnitsError, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{UnitsError, NumberError, ProblemCode, Conversion};
    pub use crate::error::codes;
}

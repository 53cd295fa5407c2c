//! Measurement module
//!
//! Unit catalog, unit conversion and serving scaling for recipe ingredients.

pub mod converter;
pub mod scaling;
pub mod units;

pub use converter::{convert_to_system, convert_unit, system_target, ConvertedAmount};
pub use scaling::{format_amount, scale_amount_by_servings};
pub use units::{
    all_units, category_of, factor_of, lookup, normalize_unit, MeasureError, Unit, UnitCategory,
    UnitSystem,
};

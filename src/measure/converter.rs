//! Unit conversion functions
//!
//! Converts amounts between units of the same category and picks a display
//! unit for a measurement system. Every "cannot convert" outcome is `None`.

use super::units::{
    category_of, factor_of, lookup, normalize_unit, UnitCategory, UnitSystem, G_PER_LB,
    ML_PER_CUP, ML_PER_TBSP,
};

// ============================================================================
// System Target Thresholds (in base units)
// ============================================================================

/// At or above this many grams, metric weights display in kilograms
pub const METRIC_KG_THRESHOLD: f64 = 1000.0;
/// At or above this many grams, imperial weights display in pounds
pub const IMPERIAL_LB_THRESHOLD: f64 = G_PER_LB;
/// At or above this many milliliters, metric volumes display in liters
pub const METRIC_L_THRESHOLD: f64 = 1000.0;
/// Below one tablespoon, imperial volumes display in teaspoons
pub const IMPERIAL_TBSP_THRESHOLD: f64 = ML_PER_TBSP;
/// Below a quarter cup, imperial volumes display in tablespoons
pub const IMPERIAL_CUP_THRESHOLD: f64 = ML_PER_CUP / 4.0;
/// At or above four cups, imperial volumes display in fluid ounces
pub const IMPERIAL_FL_OZ_THRESHOLD: f64 = ML_PER_CUP * 4.0;

/// An amount paired with the unit it is expressed in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvertedAmount {
    pub amount: f64,
    pub unit: &'static str,
}

/// Convert an amount from one unit to another
///
/// Identical units (after normalization, including two missing units) return
/// the amount untouched. Otherwise both units must be registered weight or
/// volume units of the same category.
pub fn convert_unit(amount: f64, from_unit: Option<&str>, to_unit: Option<&str>) -> Option<f64> {
    let from = normalize_unit(from_unit);
    let to = normalize_unit(to_unit);

    if from == to {
        return Some(amount);
    }

    if from.is_empty() || to.is_empty() {
        return None;
    }

    let from_category = category_of(Some(from.as_str()));
    let to_category = category_of(Some(to.as_str()));
    if from_category != to_category || !from_category.is_convertible() {
        return None;
    }

    let from_factor = factor_of(from_category, &from)?;
    let to_factor = factor_of(to_category, &to)?;

    Some(amount * from_factor / to_factor)
}

/// Pick the display unit for an amount already expressed in base units
pub fn system_target(
    category: UnitCategory,
    system: UnitSystem,
    base_amount: f64,
) -> Option<&'static str> {
    let magnitude = base_amount.abs();

    let target = match (category, system) {
        (UnitCategory::Weight, UnitSystem::Metric) => {
            if magnitude < METRIC_KG_THRESHOLD { "g" } else { "kg" }
        }
        (UnitCategory::Weight, UnitSystem::Imperial) => {
            if magnitude < IMPERIAL_LB_THRESHOLD { "oz" } else { "lb" }
        }
        (UnitCategory::Volume, UnitSystem::Metric) => {
            if magnitude < METRIC_L_THRESHOLD { "ml" } else { "l" }
        }
        (UnitCategory::Volume, UnitSystem::Imperial) => {
            if magnitude < IMPERIAL_TBSP_THRESHOLD {
                "tsp"
            } else if magnitude < IMPERIAL_CUP_THRESHOLD {
                "tbsp"
            } else if magnitude < IMPERIAL_FL_OZ_THRESHOLD {
                "cup"
            } else {
                "fl oz"
            }
        }
        (UnitCategory::Count | UnitCategory::Unknown, _) => return None,
    };

    Some(target)
}

/// Re-express an amount in the canonical unit of a measurement system
pub fn convert_to_system(
    amount: f64,
    unit: Option<&str>,
    system: UnitSystem,
) -> Option<ConvertedAmount> {
    let source = lookup(unit)?;
    if !source.category.is_convertible() {
        return None;
    }

    let base_amount = amount * source.factor?;
    let target = system_target(source.category, system, base_amount)?;
    let converted = convert_unit(amount, Some(source.id), Some(target))?;

    tracing::debug!(
        "Converted {} {} to {} {} ({})",
        amount,
        source.id,
        converted,
        target,
        system
    );

    Some(ConvertedAmount {
        amount: converted,
        unit: target,
    })
}

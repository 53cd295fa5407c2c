//! Unit catalog
//!
//! Static registry of the measurement units recipes are written in. Each unit
//! carries a category and, for weight and volume, a factor relative to the
//! category's base unit (grams and milliliters).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when parsing catalog enums from user input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeasureError {
    #[error("unknown unit system '{0}' (expected metric or imperial)")]
    UnknownSystem(String),

    #[error("unknown unit category '{0}' (expected weight, volume, count or unknown)")]
    UnknownCategory(String),
}

/// Category of a measurement unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitCategory {
    /// Mass units, base unit grams
    Weight,
    /// Volume units, base unit milliliters
    Volume,
    /// Discrete or unitless quantities (piece, pinch, no unit at all)
    Count,
    /// Anything the catalog does not recognize
    Unknown,
}

impl UnitCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitCategory::Weight => "weight",
            UnitCategory::Volume => "volume",
            UnitCategory::Count => "count",
            UnitCategory::Unknown => "unknown",
        }
    }

    /// Whether amounts in this category can be converted to other units
    pub fn is_convertible(&self) -> bool {
        matches!(self, UnitCategory::Weight | UnitCategory::Volume)
    }

    /// Base unit all factors in this category are relative to
    pub fn base_unit(&self) -> Option<&'static str> {
        match self {
            UnitCategory::Weight => Some("g"),
            UnitCategory::Volume => Some("ml"),
            UnitCategory::Count | UnitCategory::Unknown => None,
        }
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitCategory {
    type Err = MeasureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weight" => Ok(UnitCategory::Weight),
            "volume" => Ok(UnitCategory::Volume),
            "count" => Ok(UnitCategory::Count),
            "unknown" => Ok(UnitCategory::Unknown),
            _ => Err(MeasureError::UnknownCategory(s.to_string())),
        }
    }
}

/// Measurement system a reader prefers to see amounts in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    Metric,
    Imperial,
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitSystem {
    type Err = MeasureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" => Ok(UnitSystem::Metric),
            "imperial" => Ok(UnitSystem::Imperial),
            _ => Err(MeasureError::UnknownSystem(s.to_string())),
        }
    }
}

/// A registered unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Unit {
    /// Canonical identifier ("g", "fl oz", "piece", "" for no unit)
    pub id: &'static str,
    /// Human-readable name
    pub label: &'static str,
    pub category: UnitCategory,
    /// Base units per one of this unit; None for count units
    pub factor: Option<f64>,
}

const fn weight(id: &'static str, label: &'static str, factor: f64) -> Unit {
    Unit { id, label, category: UnitCategory::Weight, factor: Some(factor) }
}

const fn volume(id: &'static str, label: &'static str, factor: f64) -> Unit {
    Unit { id, label, category: UnitCategory::Volume, factor: Some(factor) }
}

const fn count(id: &'static str, label: &'static str) -> Unit {
    Unit { id, label, category: UnitCategory::Count, factor: None }
}

// ============================================================================
// Conversion Table
// ============================================================================

/// Grams per ounce
pub const G_PER_OZ: f64 = 28.35;
/// Grams per pound
pub const G_PER_LB: f64 = 453.592;
/// Milliliters per teaspoon
pub const ML_PER_TSP: f64 = 4.93;
/// Milliliters per tablespoon
pub const ML_PER_TBSP: f64 = 14.79;
/// Milliliters per cup
pub const ML_PER_CUP: f64 = 236.59;
/// Milliliters per fluid ounce
pub const ML_PER_FL_OZ: f64 = 29.57;

static UNITS: [Unit; 20] = [
    weight("g", "gram", 1.0),
    weight("kg", "kilogram", 1000.0),
    weight("mg", "milligram", 0.001),
    weight("oz", "ounce", G_PER_OZ),
    weight("lb", "pound", G_PER_LB),
    volume("ml", "milliliter", 1.0),
    volume("l", "liter", 1000.0),
    volume("tsp", "teaspoon", ML_PER_TSP),
    volume("tbsp", "tablespoon", ML_PER_TBSP),
    volume("cup", "cup", ML_PER_CUP),
    volume("pint", "pint", 473.18),
    volume("quart", "quart", 946.35),
    volume("gallon", "gallon", 3785.41),
    volume("fl oz", "fluid ounce", ML_PER_FL_OZ),
    count("piece", "piece"),
    count("slice", "slice"),
    count("pinch", "pinch"),
    count("bunch", "bunch"),
    count("each", "each"),
    count("", "no unit"),
];

/// Map spelled-out and plural forms onto a canonical identifier
fn canonical_id(normalized: &str) -> &str {
    match normalized {
        "gram" | "grams" | "gr" => "g",
        "kilogram" | "kilograms" | "kgs" => "kg",
        "milligram" | "milligrams" => "mg",
        "ounce" | "ounces" => "oz",
        "lbs" | "pound" | "pounds" => "lb",
        "milliliter" | "milliliters" | "millilitre" | "millilitres" => "ml",
        "liter" | "liters" | "litre" | "litres" => "l",
        "teaspoon" | "teaspoons" | "tsps" => "tsp",
        "tablespoon" | "tablespoons" | "tbs" | "tbsps" => "tbsp",
        "cups" => "cup",
        "pints" => "pint",
        "quarts" => "quart",
        "gallons" => "gallon",
        "floz" | "fl. oz" | "fl.oz" | "fluid ounce" | "fluid ounces" => "fl oz",
        "pieces" => "piece",
        "slices" => "slice",
        "pinches" => "pinch",
        "bunches" => "bunch",
        other => other,
    }
}

/// Trim and lowercase a unit string, then resolve aliases
pub fn normalize_unit(unit: Option<&str>) -> String {
    let lower = unit.unwrap_or("").trim().to_lowercase();
    canonical_id(&lower).to_string()
}

/// Look up a registered unit by identifier or alias
pub fn lookup(unit: Option<&str>) -> Option<&'static Unit> {
    let id = normalize_unit(unit);
    UNITS.iter().find(|u| u.id == id)
}

/// Determine the category of a unit; missing or empty units count as `Count`
pub fn category_of(unit: Option<&str>) -> UnitCategory {
    lookup(unit)
        .map(|u| u.category)
        .unwrap_or(UnitCategory::Unknown)
}

/// Base-unit factor for a unit within the given category
///
/// Only weight and volume units have factors. Asking for a count or unknown
/// unit, or for a unit under the wrong category, yields None.
pub fn factor_of(category: UnitCategory, unit: &str) -> Option<f64> {
    if !category.is_convertible() {
        return None;
    }
    lookup(Some(unit))
        .filter(|u| u.category == category)
        .and_then(|u| u.factor)
}

/// Every registered unit, optionally restricted to one category
pub fn all_units(category: Option<UnitCategory>) -> Vec<&'static Unit> {
    UNITS
        .iter()
        .filter(|u| category.map_or(true, |c| u.category == c))
        .collect()
}

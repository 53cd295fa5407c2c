//! Ingredient model
//!
//! An ingredient line of a recipe and how it renders for a chosen serving
//! count and unit system.

use serde::Serialize;

use crate::measure::{convert_to_system, format_amount, scale_amount_by_servings, UnitSystem};

/// An ingredient as stored on a recipe
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: Option<f64>,
    pub unit: Option<String>,
    pub notes: Option<String>,
}

/// An ingredient ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientDisplay {
    pub name: String,
    pub amount: String,
    pub unit: String,
    /// True when the unit was switched to the requested system
    pub converted: bool,
    pub notes: Option<String>,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, amount: Option<f64>, unit: Option<&str>) -> Self {
        Self {
            name: name.into(),
            amount,
            unit: unit.map(str::to_string),
            notes: None,
        }
    }

    /// Render this ingredient for `servings` out of a recipe written for
    /// `original_servings`
    ///
    /// Scaling happens first so the system unit is chosen from the scaled
    /// magnitude; formatting happens once, at the end. When no system is
    /// requested or the unit has no system equivalent, the original unit is
    /// kept.
    pub fn display(
        &self,
        original_servings: f64,
        servings: f64,
        system: Option<UnitSystem>,
    ) -> IngredientDisplay {
        let unit = self.unit.as_deref().map(str::trim).unwrap_or("");
        let scaled = scale_amount_by_servings(self.amount, original_servings, servings);

        let converted = match (scaled, system) {
            (Some(amount), Some(system)) => convert_to_system(amount, Some(unit), system),
            _ => None,
        };

        let (amount, unit, was_converted) = match converted {
            Some(c) => (Some(c.amount), c.unit.to_string(), true),
            None => (scaled, unit.to_string(), false),
        };

        IngredientDisplay {
            name: self.name.clone(),
            amount: format_amount(amount),
            unit,
            converted: was_converted,
            notes: self.notes.clone(),
        }
    }
}

//! Recipe model
//!
//! A recipe with the serving count its ingredient amounts are written for.

use serde::Serialize;

use super::{Ingredient, IngredientDisplay};
use crate::measure::UnitSystem;

/// A recipe as written
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    pub name: String,
    /// Servings the ingredient amounts are written for
    pub servings: f64,
    pub ingredients: Vec<Ingredient>,
}

/// A recipe rendered for a serving count and unit system
#[derive(Debug, Clone, Serialize)]
pub struct RecipeView {
    pub name: String,
    pub original_servings: f64,
    pub servings: f64,
    /// None when amounts are shown in their original units
    pub unit_system: Option<UnitSystem>,
    pub ingredients: Vec<IngredientDisplay>,
}

impl Recipe {
    /// Render every ingredient for the requested servings and unit system
    pub fn view(&self, servings: f64, system: Option<UnitSystem>) -> RecipeView {
        let ingredients = self
            .ingredients
            .iter()
            .map(|i| i.display(self.servings, servings, system))
            .collect();

        RecipeView {
            name: self.name.clone(),
            original_servings: self.servings,
            servings,
            unit_system: system,
            ingredients,
        }
    }
}

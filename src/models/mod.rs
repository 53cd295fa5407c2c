//! Data models
//!
//! Recipe and ingredient structs as handed over by the household app.

mod ingredient;
mod recipe;

pub use ingredient::{Ingredient, IngredientDisplay};
pub use recipe::{Recipe, RecipeView};

//! Recipe MCP Tools
//!
//! Renders a recipe's ingredients for a requested serving count and unit
//! system.

use crate::measure::UnitSystem;
use crate::models::{Ingredient, Recipe, RecipeView};

/// Largest serving count a recipe can be scaled to
pub const MAX_SERVINGS: f64 = 1000.0;

/// Scale and convert a recipe for display
///
/// `servings` must be a whole number of at least one. The original serving
/// count is not validated: zero or less leaves amounts unscaled.
pub fn scale_recipe(
    name: &str,
    original_servings: f64,
    servings: f64,
    system: Option<UnitSystem>,
    ingredients: Vec<Ingredient>,
) -> Result<RecipeView, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Recipe name cannot be empty".to_string());
    }

    if !servings.is_finite() || servings < 1.0 || servings.fract() != 0.0 {
        return Err(format!("servings must be a whole number of at least 1, got {}", servings));
    }

    if servings > MAX_SERVINGS {
        return Err(format!("servings cannot exceed {}", MAX_SERVINGS));
    }

    if let Some(blank) = ingredients.iter().position(|i| i.name.trim().is_empty()) {
        return Err(format!("Ingredient {} has an empty name", blank + 1));
    }

    let recipe = Recipe {
        name: name.to_string(),
        servings: original_servings,
        ingredients,
    };

    let view = recipe.view(servings, system);

    tracing::info!(
        "Scaled '{}' from {} to {} servings ({} ingredients, {})",
        view.name,
        original_servings,
        servings,
        view.ingredients.len(),
        system.map_or("original units", |s| s.as_str())
    );

    Ok(view)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredients() -> Vec<Ingredient> {
        vec![
            Ingredient::new("rice", Some(1.0), Some("cup")),
            Ingredient::new("water", Some(500.0), Some("ml")),
        ]
    }

    #[test]
    fn test_scale_recipe() {
        let view = scale_recipe("Rice", 2.0, 4.0, None, ingredients()).unwrap();
        assert_eq!(view.ingredients[0].amount, "2");
        assert_eq!(view.ingredients[0].unit, "cup");
        assert_eq!(view.ingredients[1].amount, "1000");
    }

    #[test]
    fn test_scale_recipe_imperial() {
        let view = scale_recipe("Rice", 2.0, 4.0, Some(UnitSystem::Imperial), ingredients()).unwrap();
        assert_eq!(view.ingredients[0].unit, "cup");
        assert_eq!(view.ingredients[0].amount, "2");
        assert_eq!(view.ingredients[1].unit, "fl oz");
        assert_eq!(view.ingredients[1].amount, "33.82");
    }

    #[test]
    fn test_zero_original_servings_leaves_amounts() {
        let view = scale_recipe("Rice", 0.0, 6.0, None, ingredients()).unwrap();
        assert_eq!(view.ingredients[1].amount, "500");
    }

    #[test]
    fn test_rejects_invalid_servings() {
        assert!(scale_recipe("Rice", 2.0, 0.0, None, ingredients()).is_err());
        assert!(scale_recipe("Rice", 2.0, 1.5, None, ingredients()).is_err());
        assert!(scale_recipe("Rice", 2.0, f64::NAN, None, ingredients()).is_err());
        assert!(scale_recipe("Rice", 2.0, 5000.0, None, ingredients()).is_err());
        assert!(scale_recipe("Rice", 2.0, 1000.0, None, ingredients()).is_ok());
    }

    #[test]
    fn test_rejects_blank_names() {
        assert!(scale_recipe("  ", 2.0, 2.0, None, ingredients()).is_err());

        let mut bad = ingredients();
        bad.push(Ingredient::new(" ", Some(1.0), Some("g")));
        let err = scale_recipe("Rice", 2.0, 2.0, None, bad).unwrap_err();
        assert!(err.contains("Ingredient 3"));
    }
}

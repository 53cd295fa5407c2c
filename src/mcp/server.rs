//! Hearth MCP Server Implementation
//!
//! Exposes the conversion and scaling tools over MCP.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::measure::UnitSystem;
use crate::models::{Ingredient, RecipeView};
use crate::tools::conversions;
use crate::tools::recipes;
use crate::tools::status::StatusTracker;

/// Hearth MCP Service
#[derive(Clone)]
pub struct HearthService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    /// System used when a call does not name one; None keeps original units
    default_unit_system: Option<UnitSystem>,
    tool_router: ToolRouter<HearthService>,
}

impl HearthService {
    pub fn new(default_unit_system: Option<UnitSystem>) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(default_unit_system))),
            default_unit_system,
            tool_router: Self::tool_router(),
        }
    }

    /// Scale a recipe, using the configured unit system when the call names none
    fn render_recipe(&self, p: ScaleRecipeParams) -> Result<RecipeView, McpError> {
        let system = conversions::resolve_unit_system(p.unit_system.as_deref(), self.default_unit_system)
            .map_err(|e| McpError::invalid_params(e, None))?;
        let ingredients = p
            .ingredients
            .into_iter()
            .map(|i| Ingredient {
                name: i.name,
                amount: i.amount,
                unit: i.unit,
                notes: i.notes,
            })
            .collect();
        recipes::scale_recipe(&p.name, p.original_servings, p.servings, system, ingredients)
            .map_err(|e| McpError::invalid_params(e, None))
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListUnitsParams {
    /// Only list units of this category (weight, volume, count)
    pub category: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertUnitParams {
    pub amount: f64,
    /// Unit the amount is in (omit for unitless amounts)
    pub from_unit: Option<String>,
    /// Unit to convert to
    pub to_unit: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertToSystemParams {
    pub amount: f64,
    pub unit: Option<String>,
    /// "metric" or "imperial"
    pub unit_system: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ScaleAmountParams {
    pub amount: Option<f64>,
    /// Servings the amount is written for
    pub original_servings: f64,
    /// Servings wanted
    pub servings: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct FormatAmountParams {
    pub amount: Option<f64>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct IngredientParams {
    pub name: String,
    pub amount: Option<f64>,
    pub unit: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ScaleRecipeParams {
    /// Name of the recipe
    pub name: String,
    /// Servings the ingredient amounts are written for
    pub original_servings: f64,
    /// Servings wanted (whole number, at least 1)
    pub servings: f64,
    /// "metric", "imperial" or "original" (default: server setting)
    pub unit_system: Option<String>,
    pub ingredients: Vec<IngredientParams>,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl HearthService {
    // --- Status ---

    #[tool(description = "Get the current status of the Hearth service including build info, default unit system, and process information")]
    async fn hearth_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        to_json(&tracker.get_status())
    }

    #[tool(description = "Get instructions for converting and scaling recipe amounts. Call this when unsure which conversion tool to use.")]
    fn conversion_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::CONVERSION_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(CONVERSION_INSTRUCTIONS)]))
    }

    // --- Units ---

    #[tool(description = "List recognized units with their category and base-unit factor")]
    fn list_units(&self, Parameters(p): Parameters<ListUnitsParams>) -> Result<CallToolResult, McpError> {
        let result = conversions::list_units(p.category.as_deref())
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Convert an amount between two units of the same category (weight or volume). Returns null converted_amount when no conversion exists.")]
    fn convert_unit(&self, Parameters(p): Parameters<ConvertUnitParams>) -> Result<CallToolResult, McpError> {
        let result = conversions::convert_unit(p.amount, p.from_unit.as_deref(), p.to_unit.as_deref());
        to_json(&result)
    }

    #[tool(description = "Convert an amount to the display unit of a measurement system (metric or imperial), picked by magnitude")]
    fn convert_to_system(&self, Parameters(p): Parameters<ConvertToSystemParams>) -> Result<CallToolResult, McpError> {
        let result = conversions::convert_to_system(p.amount, p.unit.as_deref(), &p.unit_system)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    // --- Scaling ---

    #[tool(description = "Scale an ingredient amount from one serving count to another")]
    fn scale_amount(&self, Parameters(p): Parameters<ScaleAmountParams>) -> Result<CallToolResult, McpError> {
        let result = conversions::scale_amount(p.amount, p.original_servings, p.servings);
        to_json(&result)
    }

    #[tool(description = "Format an amount for display (whole numbers without decimals, otherwise up to two decimals)")]
    fn format_amount(&self, Parameters(p): Parameters<FormatAmountParams>) -> Result<CallToolResult, McpError> {
        to_json(&conversions::format(p.amount))
    }

    #[tool(description = "Scale a recipe's ingredients to a new serving count and optionally convert them to metric or imperial units. Scaling is applied before conversion.")]
    fn scale_recipe(&self, Parameters(p): Parameters<ScaleRecipeParams>) -> Result<CallToolResult, McpError> {
        to_json(&self.render_recipe(p)?)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for HearthService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "hearth".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Hearth recipe units".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Hearth - recipe unit conversion and serving scaling. \
                 Call conversion_instructions first if unsure. \
                 Units: list_units, convert_unit, convert_to_system. \
                 Scaling: scale_amount, format_amount, scale_recipe (scales before converting). \
                 Status: hearth_status."
                    .into(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(unit_system: Option<&str>) -> ScaleRecipeParams {
        ScaleRecipeParams {
            name: "Soup".to_string(),
            original_servings: 2.0,
            servings: 4.0,
            unit_system: unit_system.map(str::to_string),
            ingredients: vec![
                IngredientParams {
                    name: "stock".to_string(),
                    amount: Some(1.0),
                    unit: Some("cup".to_string()),
                    notes: Some("low sodium".to_string()),
                },
                IngredientParams {
                    name: "carrots".to_string(),
                    amount: Some(3.0),
                    unit: None,
                    notes: None,
                },
            ],
        }
    }

    #[test]
    fn test_render_recipe_uses_server_default() {
        let service = HearthService::new(Some(UnitSystem::Metric));
        let view = service.render_recipe(params(None)).unwrap();
        assert_eq!(view.unit_system, Some(UnitSystem::Metric));
        assert_eq!(view.ingredients[0].amount, "473.18");
        assert_eq!(view.ingredients[0].unit, "ml");
        assert_eq!(view.ingredients[0].notes.as_deref(), Some("low sodium"));
        assert_eq!(view.ingredients[1].amount, "6");
        assert_eq!(view.ingredients[1].unit, "");
    }

    #[test]
    fn test_render_recipe_call_overrides_default() {
        let service = HearthService::new(Some(UnitSystem::Metric));
        let view = service.render_recipe(params(Some("original"))).unwrap();
        assert_eq!(view.unit_system, None);
        assert_eq!(view.ingredients[0].amount, "2");
        assert_eq!(view.ingredients[0].unit, "cup");
    }

    #[test]
    fn test_render_recipe_without_default_keeps_units() {
        let service = HearthService::new(None);
        let view = service.render_recipe(params(None)).unwrap();
        assert_eq!(view.ingredients[0].unit, "cup");
        assert!(!view.ingredients[0].converted);
    }

    #[test]
    fn test_render_recipe_rejects_bad_input() {
        let service = HearthService::new(None);
        assert!(service.render_recipe(params(Some("cubits"))).is_err());

        let mut zero = params(None);
        zero.servings = 0.0;
        assert!(service.render_recipe(zero).is_err());
    }
}

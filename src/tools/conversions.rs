//! Conversion MCP Tools
//!
//! Thin request/response layer over the measurement engine.

use serde::Serialize;

use crate::measure::{
    self, all_units, category_of, format_amount, normalize_unit, scale_amount_by_servings,
    UnitCategory, UnitSystem,
};

/// A unit as listed by list_units
#[derive(Debug, Serialize)]
pub struct UnitSummary {
    pub id: &'static str,
    pub label: &'static str,
    pub category: UnitCategory,
    pub base_unit: Option<&'static str>,
    /// Base units per one of this unit
    pub factor: Option<f64>,
}

/// Response for list_units
#[derive(Debug, Serialize)]
pub struct ListUnitsResponse {
    pub units: Vec<UnitSummary>,
    pub count: usize,
}

/// Response for convert_unit
#[derive(Debug, Serialize)]
pub struct ConvertUnitResponse {
    pub amount: f64,
    pub from_unit: String,
    pub to_unit: String,
    pub from_category: UnitCategory,
    pub to_category: UnitCategory,
    /// None when the units cannot be converted
    pub converted_amount: Option<f64>,
    pub formatted: String,
}

/// Response for convert_to_system
#[derive(Debug, Serialize)]
pub struct ConvertToSystemResponse {
    pub amount: f64,
    pub unit: String,
    pub unit_system: UnitSystem,
    pub category: UnitCategory,
    pub converted_amount: Option<f64>,
    pub converted_unit: Option<&'static str>,
    pub formatted: String,
}

/// Response for scale_amount
#[derive(Debug, Serialize)]
pub struct ScaleAmountResponse {
    pub amount: Option<f64>,
    pub original_servings: f64,
    pub servings: f64,
    pub scaled_amount: Option<f64>,
    pub formatted: String,
}

/// Response for format_amount
#[derive(Debug, Serialize)]
pub struct FormatAmountResponse {
    pub amount: Option<f64>,
    pub formatted: String,
}

/// Resolve a requested unit system, falling back to the configured default
///
/// "original" (or an empty string) explicitly asks for original units.
pub fn resolve_unit_system(
    requested: Option<&str>,
    default: Option<UnitSystem>,
) -> Result<Option<UnitSystem>, String> {
    match requested.map(str::trim) {
        None => Ok(default),
        Some(s) if s.is_empty() || s.eq_ignore_ascii_case("original") => Ok(None),
        Some(s) => s.parse::<UnitSystem>().map(Some).map_err(|e| e.to_string()),
    }
}

/// Resolve the service-wide default unit system from a configured value
///
/// Unset, empty or "original" keeps original units. An unrecognized value is
/// logged and also keeps original units.
pub fn default_unit_system(configured: Option<&str>) -> Option<UnitSystem> {
    let configured = configured?;
    match resolve_unit_system(Some(configured), None) {
        Ok(system) => system,
        Err(e) => {
            tracing::warn!("Ignoring configured unit system: {}. Using original units.", e);
            None
        }
    }
}

/// List registered units, optionally filtered by category
pub fn list_units(category: Option<&str>) -> Result<ListUnitsResponse, String> {
    let category = category
        .map(|c| c.parse::<UnitCategory>())
        .transpose()
        .map_err(|e| e.to_string())?;

    let units: Vec<UnitSummary> = all_units(category)
        .into_iter()
        .map(|u| UnitSummary {
            id: u.id,
            label: u.label,
            category: u.category,
            base_unit: u.category.base_unit(),
            factor: u.factor,
        })
        .collect();

    Ok(ListUnitsResponse {
        count: units.len(),
        units,
    })
}

/// Convert between two units
pub fn convert_unit(amount: f64, from_unit: Option<&str>, to_unit: Option<&str>) -> ConvertUnitResponse {
    let converted = measure::convert_unit(amount, from_unit, to_unit);

    ConvertUnitResponse {
        amount,
        from_unit: normalize_unit(from_unit),
        to_unit: normalize_unit(to_unit),
        from_category: category_of(from_unit),
        to_category: category_of(to_unit),
        converted_amount: converted,
        formatted: format_amount(converted),
    }
}

/// Convert an amount into the canonical unit of a measurement system
pub fn convert_to_system(
    amount: f64,
    unit: Option<&str>,
    unit_system: &str,
) -> Result<ConvertToSystemResponse, String> {
    let system = unit_system.parse::<UnitSystem>().map_err(|e| e.to_string())?;
    let converted = measure::convert_to_system(amount, unit, system);

    Ok(ConvertToSystemResponse {
        amount,
        unit: normalize_unit(unit),
        unit_system: system,
        category: category_of(unit),
        converted_amount: converted.map(|c| c.amount),
        converted_unit: converted.map(|c| c.unit),
        formatted: format_amount(converted.map(|c| c.amount)),
    })
}

/// Scale a single amount between serving counts
pub fn scale_amount(amount: Option<f64>, original_servings: f64, servings: f64) -> ScaleAmountResponse {
    let scaled = scale_amount_by_servings(amount, original_servings, servings);

    ScaleAmountResponse {
        amount,
        original_servings,
        servings,
        scaled_amount: scaled,
        formatted: format_amount(scaled),
    }
}

pub fn format(amount: Option<f64>) -> FormatAmountResponse {
    FormatAmountResponse {
        amount,
        formatted: format_amount(amount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_unit_system() {
        assert_eq!(resolve_unit_system(None, None), Ok(None));
        assert_eq!(resolve_unit_system(None, Some(UnitSystem::Metric)), Ok(Some(UnitSystem::Metric)));
        assert_eq!(resolve_unit_system(Some("original"), Some(UnitSystem::Metric)), Ok(None));
        assert_eq!(resolve_unit_system(Some(""), Some(UnitSystem::Imperial)), Ok(None));
        assert_eq!(resolve_unit_system(Some("Imperial"), None), Ok(Some(UnitSystem::Imperial)));
        assert!(resolve_unit_system(Some("nautical"), None).is_err());
    }

    #[test]
    fn test_default_unit_system_falls_back_on_invalid() {
        assert_eq!(default_unit_system(None), None);
        assert_eq!(default_unit_system(Some("")), None);
        assert_eq!(default_unit_system(Some("Original")), None);
        assert_eq!(default_unit_system(Some(" metric ")), Some(UnitSystem::Metric));
        assert_eq!(default_unit_system(Some("imperial")), Some(UnitSystem::Imperial));
        assert_eq!(default_unit_system(Some("cubits")), None);
    }

    #[test]
    fn test_list_units() {
        let all = list_units(None).unwrap();
        assert_eq!(all.count, all.units.len());
        let fl_oz = all.units.iter().find(|u| u.id == "fl oz").unwrap();
        assert_eq!(fl_oz.base_unit, Some("ml"));
        assert_eq!(fl_oz.factor, Some(29.57));

        let volumes = list_units(Some("volume")).unwrap();
        assert_eq!(volumes.count, 9);

        assert!(list_units(Some("length")).is_err());
    }

    #[test]
    fn test_convert_unit_response() {
        let result = convert_unit(2.0, Some("Cups"), Some("ml"));
        assert_eq!(result.from_unit, "cup");
        assert_eq!(result.from_category, UnitCategory::Volume);
        assert_eq!(result.formatted, "473.18");

        let blocked = convert_unit(2.0, Some("g"), Some("cup"));
        assert_eq!(blocked.converted_amount, None);
        assert_eq!(blocked.formatted, "");
    }

    #[test]
    fn test_convert_to_system_response() {
        let result = convert_to_system(1.0, Some("cup"), "metric").unwrap();
        assert_eq!(result.converted_unit, Some("ml"));
        assert_eq!(result.formatted, "236.59");

        let count = convert_to_system(2.0, None, "imperial").unwrap();
        assert_eq!(count.category, UnitCategory::Count);
        assert_eq!(count.converted_amount, None);

        assert!(convert_to_system(1.0, Some("cup"), "cubits").is_err());
    }

    #[test]
    fn test_scale_and_format() {
        let scaled = scale_amount(Some(200.0), 4.0, 8.0);
        assert_eq!(scaled.formatted, "400");

        let neutral = scale_amount(Some(1.25), 0.0, 6.0);
        assert_eq!(neutral.scaled_amount, Some(1.25));

        assert_eq!(format(Some(2.33333)).formatted, "2.33");
        assert_eq!(format(None).formatted, "");
    }
}

//! Hearth Status Tool
//!
//! Provides runtime status information and usage notes for the service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::measure::{all_units, UnitSystem};

/// Usage guide for assistants calling the conversion tools
pub const CONVERSION_INSTRUCTIONS: &str = r#"
# Hearth Conversion Instructions

Hearth converts and scales recipe ingredient amounts for display.

## Tools

| Tool | Use it to |
|------|-----------|
| `list_units` | See every recognized unit, its category and base factor |
| `convert_unit` | Convert an amount between two units of the same category |
| `convert_to_system` | Show an amount in metric or imperial units |
| `scale_amount` | Rescale one amount for a different number of servings |
| `format_amount` | Format a number the way recipes display it |
| `scale_recipe` | Scale and convert a whole ingredient list in one call |

## Categories

- **weight**: g, kg, mg, oz, lb (base unit: g)
- **volume**: ml, l, tsp, tbsp, cup, pint, quart, gallon, fl oz (base unit: ml)
- **count**: piece, slice, pinch, bunch, each, or no unit at all

Count and unrecognized units are never converted. Converting between
categories (for example g to cup) is not possible without a density and
returns no result.

## Display Units by System

Amounts are scaled first, then the display unit is picked from the scaled
amount:

| Category | Metric | Imperial |
|----------|--------|----------|
| weight | g below 1000 g, else kg | oz below 1 lb, else lb |
| volume | ml below 1000 ml, else l | tsp below 1 tbsp, tbsp below 1/4 cup, cup below 4 cups, else fl oz |

## Formatting

Whole numbers print without decimals ("3"). Other amounts round to two
decimals with trailing zeros removed ("2.5", "2.33").

## Example

```
scale_recipe(
  name: "Pancakes",
  original_servings: 4,
  servings: 8,
  unit_system: "metric",
  ingredients: [
    { name: "flour", amount: 200, unit: "g" },
    { name: "milk", amount: 1.5, unit: "cup" },
    { name: "eggs", amount: 2 }
  ]
)
```

Pass `unit_system: "original"` to keep every ingredient in the unit it was
written in.
"#;

/// Runtime status of the Hearth service
#[derive(Debug, Clone, Serialize)]
pub struct HearthStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Conversion configuration
    pub default_unit_system: Option<UnitSystem>,
    pub registered_units: usize,

    /// Process information
    pub started_at: String,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    started_at: chrono::DateTime<chrono::Utc>,
    default_unit_system: Option<UnitSystem>,
}

impl StatusTracker {
    pub fn new(default_unit_system: Option<UnitSystem>) -> Self {
        Self {
            start_time: Instant::now(),
            started_at: chrono::Utc::now(),
            default_unit_system,
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> HearthStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        HearthStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            default_unit_system: self.default_unit_system,
            registered_units: all_units(None).len(),
            started_at: self.started_at.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

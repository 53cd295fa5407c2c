//! Hearth Tools module
//!
//! MCP tool implementations for recipe unit conversion.

pub mod conversions;
pub mod recipes;
pub mod status;

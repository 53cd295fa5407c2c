//! Hearth Library
//!
//! Unit conversion and serving scaling for household recipes.

pub mod build_info;
pub mod mcp;
pub mod measure;
pub mod models;
pub mod tools;

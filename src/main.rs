//! Hearth
//!
//! An MCP server for recipe unit conversion and serving scaling.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use hearth::build_info;
use hearth::mcp::HearthService;
use hearth::measure::UnitSystem;
use hearth::tools::conversions;

/// Read the default unit system from the environment
fn get_default_unit_system() -> Option<UnitSystem> {
    let value = std::env::var("HEARTH_UNIT_SYSTEM").ok();
    conversions::default_unit_system(value.as_deref())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr; stdout carries the MCP stream
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("hearth=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    let default_unit_system = get_default_unit_system();
    tracing::info!(
        "Default unit system: {}",
        default_unit_system.map_or("original units", |s| s.as_str())
    );

    let service = HearthService::new(default_unit_system);

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}

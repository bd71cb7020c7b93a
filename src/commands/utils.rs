//! Smaller commands: validate, observation, health and version.

use crate::commands::models::ConnectionArgs;
use crate::commands::tree::{connect, print_tree_summary, validate_connection};
use crate::output::read_tree;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Validate a trace tree JSON file
pub fn validate_tree_file(file_path: PathBuf) -> Result<()> {
    println!("Validating trace tree: {}", file_path.display());

    let tree = read_tree(&file_path)?;

    println!("✓ Valid trace tree JSON");
    print_tree_summary(&tree);

    Ok(())
}

/// Fetch one observation and print it as JSON
pub fn show_observation(connection: &ConnectionArgs, observation_id: &str) -> Result<()> {
    validate_connection(connection)?;

    if observation_id.trim().is_empty() {
        anyhow::bail!("Observation ID cannot be empty");
    }

    let observation = connect(connection)?
        .observations()
        .get(observation_id)
        .with_context(|| format!("Failed to fetch observation {}", observation_id))?;

    println!("{}", serde_json::to_string_pretty(&observation)?);

    Ok(())
}

/// Print API health
pub fn show_health(connection: &ConnectionArgs) -> Result<()> {
    validate_connection(connection)?;

    let health = connect(connection)?
        .health()
        .context("Failed to reach the API")?;

    println!("Status: {}", health.status);
    if let Some(version) = health.version {
        println!("Version: {}", version);
    }

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("Langfuse Trace v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Fetches Langfuse traces and rebuilds their observation trees.");
}

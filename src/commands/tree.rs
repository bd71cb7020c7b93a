//! Tree command implementation.
//!
//! The tree command:
//! 1. Fetches the trace with its flat observation list
//! 2. Rebuilds the observation hierarchy
//! 3. Logs a summary
//! 4. Optionally writes the tree as JSON and prints it

use crate::client::LangfuseClient;
use crate::commands::models::{ConnectionArgs, TreeArgs};
use crate::output::{render_tree, write_tree};
use crate::traces::{count_nodes, forest_depth, TraceTree};
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the tree command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Transport, authentication or non-2xx API responses
/// * Response decoding errors
/// * File write errors
///
/// # Example
/// ```ignore
/// let args = TreeArgs {
///     connection: ConnectionArgs { public_key: "pk-lf-...".into(), secret_key: "sk-lf-...".into(), ..Default::default() },
///     trace_id: "37ae885d46abc96bde952bcc387304b7".to_string(),
///     output_json: Some(PathBuf::from("trace.json")),
///     print_tree: true,
/// };
///
/// execute_tree(args)?;
/// ```
pub fn execute_tree(args: TreeArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Fetching trace tree for: {}", args.trace_id);
    info!("API endpoint: {}", args.connection.base_url);

    let client = connect(&args.connection)?;

    let tree = client
        .traces()
        .get_tree(&args.trace_id)
        .with_context(|| format!("Failed to fetch trace {}", args.trace_id))?;

    log_summary(&tree);

    if let Some(path) = &args.output_json {
        write_tree(&tree, path).context("Failed to write trace tree JSON")?;
        info!("Trace tree written to: {}", path.display());
    }

    if args.print_tree {
        print_tree_summary(&tree);
    }

    info!(
        "Tree built in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}

/// Build an API client from connection arguments
pub fn connect(connection: &ConnectionArgs) -> Result<LangfuseClient> {
    LangfuseClient::new(connection.to_config()).context("Failed to create API client")
}

fn log_summary(tree: &TraceTree) {
    info!(
        "Trace {}: {} observations in {} roots, depth {}",
        tree.header.id,
        count_nodes(&tree.root_node),
        tree.root_node.len(),
        forest_depth(&tree.root_node)
    );
    debug!(
        "Total cost: {:.4}, latency: {:.2}s",
        tree.header.total_cost.unwrap_or_default(),
        tree.header.latency.unwrap_or_default()
    );
}

/// Print a human-readable summary and the hierarchy to stdout
pub fn print_tree_summary(tree: &TraceTree) {
    println!("Trace Summary:");
    println!("  ID: {}", tree.header.id);
    println!("  Name: {}", tree.header.name.as_deref().unwrap_or("-"));
    println!(
        "  Total Cost: {:.4}",
        tree.header.total_cost.unwrap_or_default()
    );
    println!("  Latency: {:.2}s", tree.header.latency.unwrap_or_default());
    println!("  Root Observation Nodes: {}", tree.root_node.len());
    println!("  Total Observations: {}", count_nodes(&tree.root_node));
    println!("  Depth: {}", forest_depth(&tree.root_node));
    println!();
    println!("Observation Tree Structure:");
    print!("{}", render_tree(&tree.root_node));
}

/// Validate connection settings
///
/// **Public** - can be called before any network request
pub fn validate_connection(connection: &ConnectionArgs) -> Result<()> {
    if connection.base_url.is_empty() {
        anyhow::bail!("Base URL cannot be empty");
    }

    if !connection.base_url.starts_with("http://") && !connection.base_url.starts_with("https://")
    {
        anyhow::bail!("Base URL must start with http:// or https://");
    }

    if connection.public_key.is_empty() {
        anyhow::bail!("Public key is required (--public-key or LANGFUSE_PUBLIC_KEY)");
    }

    if connection.secret_key.is_empty() {
        anyhow::bail!("Secret key is required (--secret-key or LANGFUSE_SECRET_KEY)");
    }

    Ok(())
}

/// Validate tree arguments
///
/// **Public** - can be called before execute_tree for early validation
pub fn validate_args(args: &TreeArgs) -> Result<()> {
    validate_connection(&args.connection)?;

    if args.trace_id.trim().is_empty() {
        anyhow::bail!("Trace ID cannot be empty");
    }

    if let Some(path) = &args.output_json {
        if path.as_os_str().is_empty() {
            anyhow::bail!("Output path cannot be empty");
        }
    }

    Ok(())
}

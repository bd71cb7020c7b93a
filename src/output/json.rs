//! JSON trace tree writer and reader.
//!
//! Writes TraceTree structs to JSON files with proper formatting and reads
//! them back, however deep the observation hierarchy is.

use crate::traces::TraceTree;
use crate::utils::error::OutputError;
use log::{debug, info};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Write a trace tree to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `tree` - Trace tree to write
/// * `output_path` - Path to output JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
///
/// # Example
/// ```ignore
/// let tree = client.traces().get_tree(trace_id)?;
/// write_tree(&tree, "trace.json")?;
/// ```
pub fn write_tree(tree: &TraceTree, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing trace tree to: {}", output_path.display());

    super::validate_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, tree).map_err(OutputError::SerializationFailed)?;

    info!(
        "Trace tree written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Serialize a trace tree to a pretty JSON string
pub fn tree_to_string(tree: &TraceTree) -> Result<String, OutputError> {
    serde_json::to_string_pretty(tree).map_err(OutputError::SerializationFailed)
}

fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

/// Read a trace tree from a JSON file
///
/// Nesting depth is not limited: every level of a tree costs two levels of
/// JSON nesting, so deep traces would otherwise hit the parser's default
/// recursion limit even though `write_tree` wrote them fine. The stack grows
/// on demand while parsing.
///
/// # Errors
/// * `OutputError::ReadFailed` - File cannot be opened or read
/// * `OutputError::ParseFailed` - Content is not a trace tree JSON
pub fn read_tree(input_path: impl AsRef<Path>) -> Result<TraceTree, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading trace tree from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::ReadFailed)?;

    let mut deserializer = serde_json::Deserializer::from_reader(BufReader::new(file));
    deserializer.disable_recursion_limit();

    let tree = TraceTree::deserialize(serde_stacker::Deserializer::new(&mut deserializer))
        .map_err(|e| {
            if e.is_io() {
                OutputError::ReadFailed(e.into())
            } else {
                OutputError::ParseFailed(e)
            }
        })?;
    deserializer.end().map_err(OutputError::ParseFailed)?;

    debug!(
        "Trace tree loaded: trace {}, {} roots",
        tree.header.id,
        tree.root_node.len()
    );

    Ok(tree)
}

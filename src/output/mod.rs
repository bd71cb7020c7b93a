//! Output writers for trace trees.
//!
//! This module handles:
//! - JSON trace trees on disk (write and read back)
//! - Indented text rendering of the observation hierarchy

pub mod json;
pub mod text;

// Re-export main functions
pub use json::{read_tree, tree_to_string, write_tree};
pub use text::render_tree;

use crate::utils::error::OutputError;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

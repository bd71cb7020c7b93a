//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod tree;
pub mod utils;

// Re-export main command functions
pub use models::{ConnectionArgs, TreeArgs};
pub use tree::{execute_tree, validate_args, validate_connection};
pub use utils::{display_version, show_health, show_observation, validate_tree_file};

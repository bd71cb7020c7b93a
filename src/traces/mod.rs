//! Traces and the reconstruction of their observation hierarchy.

pub mod client;
pub mod tree;
pub mod types;

// Re-export main types and functions
pub use client::TracesClient;
pub use tree::{build_observation_tree, count_nodes, flatten_forest, forest_depth, ObservationNode};
pub use types::{CreateTraceRequest, Trace, TraceHeader, TraceTree, UpdateTraceRequest};

//! Langfuse Trace
//!
//! Typed blocking client for the Langfuse public API, centred on
//! rebuilding a trace's flat observation list into an ordered tree.
//!
//! This crate provides the core implementation for the
//! `langfuse-trace` CLI tool.
//!
//! ## Getting Started
//!
//! ```ignore
//! use langfuse_trace::LangfuseClient;
//!
//! let client = LangfuseClient::from_env()?;
//! let tree = client.traces().get_tree("37ae885d46abc96bde952bcc387304b7")?;
//! print!("{}", langfuse_trace::output::render_tree(&tree.root_node));
//! ```
//!
//! The tree builder is also usable on its own, see
//! [`traces::build_observation_tree`].

pub mod api;
pub mod client;
pub mod commands;
pub mod observations;
pub mod output;
pub mod traces;
pub mod utils;

pub use client::LangfuseClient;
pub use traces::{build_observation_tree, ObservationNode, Trace, TraceTree};

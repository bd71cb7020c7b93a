//! Langfuse Trace CLI
//!
//! Fetches traces from the Langfuse API and prints or stores their
//! observation hierarchy.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use langfuse_trace::commands::{
    display_version, execute_tree, show_health, show_observation, validate_args,
    validate_tree_file, ConnectionArgs, TreeArgs,
};

/// Langfuse Trace - observation trees for Langfuse traces
#[derive(Parser, Debug)]
#[command(name = "langfuse-trace")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    connection: Connection,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// API connection flags, defaulting from the environment
#[derive(Args, Debug)]
struct Connection {
    /// API base URL
    #[arg(
        long,
        global = true,
        env = "LANGFUSE_BASE_URL",
        default_value = "https://cloud.langfuse.com"
    )]
    base_url: String,

    /// Project public key
    #[arg(long, global = true, env = "LANGFUSE_PUBLIC_KEY", hide_env_values = true)]
    public_key: Option<String>,

    /// Project secret key
    #[arg(long, global = true, env = "LANGFUSE_SECRET_KEY", hide_env_values = true)]
    secret_key: Option<String>,
}

impl From<Connection> for ConnectionArgs {
    fn from(connection: Connection) -> Self {
        Self {
            base_url: connection.base_url,
            public_key: connection.public_key.unwrap_or_default(),
            secret_key: connection.secret_key.unwrap_or_default(),
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch a trace and rebuild its observation tree
    Tree {
        /// Trace ID to fetch
        #[arg(short, long)]
        trace: String,

        /// Output path for the JSON trace tree
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the summary and hierarchy to stdout
        #[arg(short, long)]
        print: bool,
    },

    /// Fetch a single observation with its full payload
    Observation {
        /// Observation ID to fetch
        #[arg(short, long)]
        id: String,
    },

    /// Check API health
    Health,

    /// Validate a trace tree JSON file
    Validate {
        /// Path to trace tree JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let connection = ConnectionArgs::from(cli.connection);

    // Execute command
    match cli.command {
        Commands::Tree {
            trace,
            output,
            print,
        } => {
            let args = TreeArgs {
                connection,
                trace_id: trace,
                output_json: output,
                print_tree: print,
            };

            // Validate args first
            validate_args(&args)?;

            execute_tree(args)?;
        }

        Commands::Observation { id } => {
            show_observation(&connection, &id)?;
        }

        Commands::Health => {
            show_health(&connection)?;
        }

        Commands::Validate { file } => {
            validate_tree_file(file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

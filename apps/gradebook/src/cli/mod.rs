//! # Gradebook CLI Module
//!
//! This module implements the CLI interface for Gradebook.
//!
//! ## Available Commands
//!
//! - `server` - Start the GraphQL HTTP server
//! - `status` - Show dataset sizes
//! - `schema` - Print the GraphQL schema (SDL)
//! - `query` - Run one GraphQL document against the dataset

mod commands;

use crate::config::Config;
use clap::{Parser, Subcommand};
use gradebook_core::GradebookError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Gradebook - students, courses and grades over GraphQL
///
/// Records are loaded from JSON files at startup and kept in memory.
/// Changes made through mutations last until the process exits.
#[derive(Parser, Debug)]
#[command(name = "gradebook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory containing student.json, course.json and grade.json
    #[arg(short = 'D', long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP server
    Server {
        /// Host to bind to
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Show dataset sizes
    Status,

    /// Print the GraphQL schema in SDL form
    Schema,

    /// Execute a GraphQL document against the dataset
    Query {
        /// The GraphQL document, e.g. '{ students { name } }'
        document: String,

        /// Variables as a JSON object
        #[arg(long)]
        variables: Option<String>,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Resolve configuration from the file, environment and global flags.
pub fn resolve_config(cli: &Cli) -> Result<Config, GradebookError> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(dir) = &cli.data_dir {
        config.data.dir.clone_from(dir);
    }
    Ok(config)
}

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), GradebookError> {
    let config = resolve_config(&cli)?;
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Server { host, port }) => cmd_server(config, host, port).await,
        Some(Commands::Schema) => {
            cmd_schema();
            Ok(())
        }
        Some(Commands::Query {
            document,
            variables,
        }) => cmd_query(&config, &document, variables.as_deref()).await,
        Some(Commands::Status) | None => cmd_status(&config, json_mode),
    }
}

// =============================================================================
// TESTS
// =============================================================================

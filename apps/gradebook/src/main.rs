//! # Gradebook - GraphQL Server
//!
//! The main binary for the Gradebook record service.
//!
//! This application provides:
//! - GraphQL endpoint with a GraphiQL explorer (async-graphql on axum)
//! - CLI interface for inspecting and querying the dataset
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                 apps/gradebook (THE BINARY)             │
//! │                                                         │
//! │  ┌─────────────┐    ┌──────────────┐    ┌───────────┐   │
//! │  │   CLI       │    │  HTTP API    │    │  Config   │   │
//! │  │  (clap)     │    │ (axum +      │    │  (toml)   │   │
//! │  │             │    │ async-graphql│    │           │   │
//! │  └──────┬──────┘    └──────┬───────┘    └─────┬─────┘   │
//! │         └──────────────────┼──────────────────┘         │
//! │                            ▼                            │
//! │                   ┌────────────────┐                    │
//! │                   │ gradebook-core │                    │
//! │                   │  (THE LOGIC)   │                    │
//! │                   └────────────────┘                    │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Start the HTTP server
//! gradebook server --host 0.0.0.0 --port 3000
//!
//! # CLI operations
//! gradebook status
//! gradebook schema
//! gradebook query '{ courses { name student { name } } }'
//! ```

use clap::Parser;
use gradebook::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    // GRADEBOOK_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("GRADEBOOK_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "gradebook=info,tower_http=debug".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    let cli = cli::Cli::parse();

    if !cli.quiet {
        print_banner();
    }

    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the Gradebook startup banner.
fn print_banner() {
    println!(
        r#"
   ___              _       _                 _
  / __|_ _ __ _ __| |___  | |__  ___  ___  | |__
 | (_ | '_/ _` / _` / -_) | '_ \/ _ \/ _ \ | / /
  \___|_| \__,_\__,_\___| |_.__/\___/\___/ |_\_\

  Gradebook GraphQL Server v{}
"#,
        env!("CARGO_PKG_VERSION")
    );
}

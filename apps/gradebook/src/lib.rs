//! # Gradebook
//!
//! GraphQL server over the in-memory records of `gradebook-core`.
//!
//! The binary in `main.rs` only sets up logging and hands off to [`cli`];
//! everything else lives here so integration tests can reach it.

pub mod api;
pub mod cli;
pub mod config;

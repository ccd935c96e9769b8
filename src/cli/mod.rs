//! CLI module
//!
//! Command-line interface for working with Token headers.
//!
//! # Commands
//!
//! - `parse` - Read a header value and print its fields
//! - `build` - Validate credential fields and print the header value
//! - `normalize` - Re-render a header value in canonical form

mod commands;
mod runner;

pub use commands::{Cli, Commands, FieldArgs, OutputFormat};
pub use runner::Runner;

//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, FieldArgs, OutputFormat};
use crate::config;
use crate::credentials::{CredentialFields, TokenCredentials};
use crate::error::Result;
use serde_json::{json, Value};
use std::io;
use std::path::Path;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command and print its output
    pub fn run(&self) -> Result<()> {
        let output = self.execute()?;
        println!("{output}");
        Ok(())
    }

    /// Run the CLI command and return its output
    pub fn execute(&self) -> Result<String> {
        match &self.cli.command {
            Commands::Parse { header } => self.parse(header.as_deref()),
            Commands::Build { config, fields } => self.build(config.as_deref(), fields),
            Commands::Normalize { header } => self.normalize(header.as_deref()),
        }
    }

    /// Parse a header and describe its fields
    fn parse(&self, header: Option<&str>) -> Result<String> {
        let raw = read_header(header)?;
        let credentials = TokenCredentials::parse(&raw)?;

        Ok(self.format_message(&json!({
            "scheme": credentials.scheme(),
            "credentials": credentials,
        })))
    }

    /// Build a header from a credentials file and/or flags
    fn build(&self, config_path: Option<&Path>, args: &FieldArgs) -> Result<String> {
        let fields = match config_path {
            Some(path) => config::load_fields(path)?,
            None => CredentialFields::new(),
        };
        let fields = fields.merge(CredentialFields::from(args));

        let credentials = TokenCredentials::from_fields(fields)?;
        Ok(credentials.to_header())
    }

    /// Parse a header and render it in canonical order
    fn normalize(&self, header: Option<&str>) -> Result<String> {
        let raw = read_header(header)?;
        Ok(TokenCredentials::parse(&raw)?.to_header())
    }

    /// Format a message
    fn format_message(&self, msg: &Value) -> String {
        match self.cli.format {
            OutputFormat::Json => serde_json::to_string(msg).unwrap_or_default(),
            OutputFormat::Pretty => serde_json::to_string_pretty(msg).unwrap_or_default(),
        }
    }
}

/// Take the header from the argument, falling back to stdin
fn read_header(header: Option<&str>) -> Result<String> {
    match header {
        Some(header) => Ok(header.to_string()),
        None => {
            debug!("Reading header from stdin");
            Ok(io::read_to_string(io::stdin())?)
        }
    }
}

//! CLI commands and argument parsing

use crate::credentials::CredentialFields;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Token HTTP authentication scheme tool
#[derive(Parser, Debug)]
#[command(name = "token-auth")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a Token header value and print its fields
    Parse {
        /// Header value (read from stdin when omitted)
        header: Option<String>,
    },

    /// Build a Token header value from credential fields
    Build {
        /// Credentials file (YAML or JSON); flags override its values
        #[arg(short = 'C', long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Parse a Token header value and print it in canonical form
    Normalize {
        /// Header value (read from stdin when omitted)
        header: Option<String>,
    },
}

/// Credential fields given on the command line
#[derive(Args, Debug, Default)]
pub struct FieldArgs {
    /// Token identifying the credential subject
    #[arg(long)]
    pub token: Option<String>,

    /// Coverage: none, base or base+body-sha-256
    #[arg(long)]
    pub coverage: Option<String>,

    #[arg(long)]
    pub nonce: Option<String>,

    /// Signature value, passed through unchecked
    #[arg(long)]
    pub auth: Option<String>,

    #[arg(long)]
    pub timestamp: Option<String>,
}

impl From<&FieldArgs> for CredentialFields {
    fn from(args: &FieldArgs) -> Self {
        Self {
            token: args.token.clone(),
            coverage: args.coverage.clone(),
            nonce: args.nonce.clone(),
            auth: args.auth.clone(),
            timestamp: args.timestamp.clone(),
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one message per line)
    Json,
    /// Human-readable output
    Pretty,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_build_flags() {
        let cli = Cli::try_parse_from([
            "token-auth",
            "build",
            "--token",
            "t",
            "--coverage",
            "base",
            "--timestamp",
            "1",
        ])
        .unwrap();

        match cli.command {
            Commands::Build { config, fields } => {
                assert!(config.is_none());
                let fields = CredentialFields::from(&fields);
                assert_eq!(fields.token.as_deref(), Some("t"));
                assert_eq!(fields.coverage.as_deref(), Some("base"));
                assert_eq!(fields.nonce, None);
                assert_eq!(fields.timestamp.as_deref(), Some("1"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_format() {
        let cli = Cli::try_parse_from(["token-auth", "parse", "x", "--format", "pretty"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Pretty);
        assert!(matches!(cli.command, Commands::Parse { header: Some(_) }));
    }
}

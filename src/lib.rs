//! # token-auth
//!
//! Parsing, validation and serialization of the `Token` HTTP authentication
//! scheme:
//!
//! ```text
//! Authorization: Token token="h480djs93hd8", coverage="base", nonce="dj83hs9s", auth="...", timestamp="137131200"
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use token_auth::{Coverage, TokenCredentials};
//!
//! // Reading a header sent by a client
//! let header = TokenCredentials::parse(r#"Token token="h480djs93hd8", nonce="dj83hs9s""#)?;
//! assert_eq!(header.token(), "h480djs93hd8");
//! assert_eq!(header.coverage(), &Coverage::Base);
//!
//! // Declaring credentials for an outgoing request
//! let credentials = TokenCredentials::builder().token("h480djs93hd8").build()?;
//! assert_eq!(credentials.to_header(), r#"Token token="h480djs93hd8""#);
//! # Ok::<(), token_auth::Error>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! raw header ──► codec::extract ──► AttributeMap ──► TokenCredentials ──► codec::render ──► header
//! ```
//!
//! The `auth`, `nonce` and `timestamp` values are carried as opaque strings.
//! Signature checking, replay protection and clock checks belong to the
//! HTTP layer that uses this crate.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::unused_self)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Attribute names, attribute map and coverage
pub mod types;

/// Header string <-> attribute map
pub mod codec;

/// Validated credential model
pub mod credentials;

/// Credential definition files
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use codec::SCHEME;
pub use credentials::{CredentialFields, CredentialsBuilder, TokenCredentials};
pub use error::{Error, Result};
pub use types::{AttributeMap, Coverage};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

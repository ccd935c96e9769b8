//! Token credentials
//!
//! `TokenCredentials` is the validated form of a Token attribute list. It
//! is built in one of two ways, each with its own default policy:
//!
//! - [`TokenCredentials::from_header_attributes`] / [`TokenCredentials::parse`]
//!   read a header received from a peer. Only `token` is required and a
//!   missing coverage means `base`.
//! - [`TokenCredentials::from_fields`] / [`TokenCredentials::builder`] declare
//!   outgoing credentials. A missing coverage means `none`, and the
//!   cryptographic coverages require `nonce`, `auth` and `timestamp`.
//!   Built credentials with coverage `none` render the token only.
//!
//! Both paths trim surrounding whitespace from every value before storing it.

mod token;
mod types;

pub use token::TokenCredentials;
pub use types::{CredentialFields, CredentialsBuilder};

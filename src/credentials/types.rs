//! Credential input types
//!
//! Unvalidated field sets used by the builder path. Nothing here enforces
//! the scheme rules; that happens in [`TokenCredentials::from_fields`].

use super::TokenCredentials;
use crate::error::Result;
use serde::{Deserialize, Deserializer, Serialize};

/// Raw credential fields before validation
///
/// Deserializable from YAML or JSON credential files. `timestamp` accepts
/// either a string or an integer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CredentialFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<String>,

    #[serde(
        default,
        deserialize_with = "string_or_integer",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<String>,
}

impl CredentialFields {
    /// Create an empty field set
    pub fn new() -> Self {
        Self::default()
    }

    /// Overlay `overrides` on top of these fields, field by field
    pub fn merge(self, overrides: CredentialFields) -> Self {
        Self {
            token: overrides.token.or(self.token),
            coverage: overrides.coverage.or(self.coverage),
            nonce: overrides.nonce.or(self.nonce),
            auth: overrides.auth.or(self.auth),
            timestamp: overrides.timestamp.or(self.timestamp),
        }
    }
}

fn string_or_integer<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Unsigned(u64),
        Signed(i64),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(s) => s,
        Raw::Unsigned(n) => n.to_string(),
        Raw::Signed(n) => n.to_string(),
    }))
}

/// Fluent builder for outgoing credentials
///
/// ```
/// use token_auth::TokenCredentials;
///
/// let credentials = TokenCredentials::builder()
///     .token("h480djs93hd8")
///     .coverage("base")
///     .nonce("dj83hs9s")
///     .auth("djosJKDKJSD8743243/jdk33klY=")
///     .timestamp(137_131_200)
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     credentials.to_header(),
///     r#"Token token="h480djs93hd8", coverage="base", nonce="dj83hs9s", auth="djosJKDKJSD8743243/jdk33klY=", timestamp="137131200""#
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct CredentialsBuilder {
    fields: CredentialFields,
}

impl CredentialsBuilder {
    /// Create a builder with no fields set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the token
    #[must_use]
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.fields.token = Some(token.into());
        self
    }

    /// Set the coverage by wire name
    #[must_use]
    pub fn coverage(mut self, coverage: impl Into<String>) -> Self {
        self.fields.coverage = Some(coverage.into());
        self
    }

    /// Set the nonce
    #[must_use]
    pub fn nonce(mut self, nonce: impl Into<String>) -> Self {
        self.fields.nonce = Some(nonce.into());
        self
    }

    /// Set the auth value
    #[must_use]
    pub fn auth(mut self, auth: impl Into<String>) -> Self {
        self.fields.auth = Some(auth.into());
        self
    }

    /// Set the timestamp (string or integer epoch)
    #[must_use]
    pub fn timestamp(mut self, timestamp: impl ToString) -> Self {
        self.fields.timestamp = Some(timestamp.to_string());
        self
    }

    /// Validate the collected fields
    pub fn build(self) -> Result<TokenCredentials> {
        TokenCredentials::from_fields(self.fields)
    }
}

impl From<CredentialFields> for CredentialsBuilder {
    fn from(fields: CredentialFields) -> Self {
        Self { fields }
    }
}

//! Validated Token credentials

use super::{CredentialFields, CredentialsBuilder};
use crate::codec;
use crate::error::{Error, Result};
use crate::types::{AttributeMap, Coverage, AUTH, COVERAGE, NONCE, TIMESTAMP, TOKEN};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Which constructor produced a credential set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    /// Read off a header; every stored field is rendered back
    Header,
    /// Declared through `from_fields`; coverage `none` renders the token only
    Fields,
}

/// A validated, immutable Token credential set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenCredentials {
    #[serde(skip)]
    origin: Origin,
    token: String,
    coverage: Coverage,
    #[serde(skip_serializing_if = "Option::is_none")]
    nonce: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    auth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
}

impl TokenCredentials {
    // ========================================================================
    // Header reading
    // ========================================================================

    /// Parse a header string (with or without the `Token` scheme literal)
    pub fn parse(raw: &str) -> Result<Self> {
        Self::from_header_attributes(&codec::extract(raw))
    }

    /// Build credentials from attributes read off a header
    ///
    /// Requires a non-empty `token`. An absent or empty `coverage` becomes
    /// `base`; any other coverage value is carried as-is. `nonce`, `auth`
    /// and `timestamp` are optional here even under a cryptographic
    /// coverage.
    pub fn from_header_attributes(attributes: &AttributeMap) -> Result<Self> {
        let read = |name: &str| attributes.get(name).map(|value| value.trim().to_string());

        let token = read(TOKEN)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| Error::missing_attribute(TOKEN))?;

        let coverage = read(COVERAGE)
            .filter(|coverage| !coverage.is_empty())
            .map_or(Coverage::Base, |coverage| Coverage::from_header_value(&coverage));

        let credentials = Self {
            origin: Origin::Header,
            token,
            coverage,
            nonce: read(NONCE),
            auth: read(AUTH),
            timestamp: read(TIMESTAMP),
        };

        debug!(
            coverage = %credentials.coverage,
            has_nonce = credentials.nonce.is_some(),
            has_auth = credentials.auth.is_some(),
            has_timestamp = credentials.timestamp.is_some(),
            "Parsed Token header attributes"
        );
        Ok(credentials)
    }

    // ========================================================================
    // Credential building
    // ========================================================================

    /// Start building outgoing credentials
    pub fn builder() -> CredentialsBuilder {
        CredentialsBuilder::new()
    }

    /// Validate outgoing credential fields
    ///
    /// Checks run in the order token, coverage, nonce, auth, timestamp and
    /// stop at the first failure. A supplied coverage must name a known
    /// mode, even when blank; other blank values count as missing.
    pub fn from_fields(fields: CredentialFields) -> Result<Self> {
        let CredentialFields {
            token,
            coverage,
            nonce,
            auth,
            timestamp,
        } = fields;

        let token = non_blank(token).ok_or_else(|| Error::missing_field(TOKEN))?;

        let coverage = match coverage {
            Some(value) => value.trim().parse::<Coverage>()?,
            None => Coverage::None,
        };

        let nonce = non_blank(nonce);
        let auth = non_blank(auth);
        let timestamp = non_blank(timestamp);

        if coverage.is_cryptographic() {
            for (name, value) in [(NONCE, &nonce), (AUTH, &auth), (TIMESTAMP, &timestamp)] {
                if value.is_none() {
                    return Err(Error::missing_field(name));
                }
            }
        }

        debug!(coverage = %coverage, "Built Token credentials");
        Ok(Self {
            origin: Origin::Fields,
            token,
            coverage,
            nonce,
            auth,
            timestamp,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Authentication scheme name, always `Token`
    pub fn scheme(&self) -> &'static str {
        codec::SCHEME
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn coverage(&self) -> &Coverage {
        &self.coverage
    }

    pub fn nonce(&self) -> Option<&str> {
        self.nonce.as_deref()
    }

    pub fn auth(&self) -> Option<&str> {
        self.auth.as_deref()
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }

    // ========================================================================
    // Serialization
    // ========================================================================

    /// Attributes that appear on the wire
    ///
    /// Credentials built with coverage `none` emit only the token; the other
    /// fields are kept in memory but suppressed here. Credentials read off a
    /// header always emit their coverage, so the output reads back the same.
    pub fn to_attributes(&self) -> AttributeMap {
        let mut attributes = AttributeMap::new();
        attributes.insert(TOKEN.to_string(), self.token.clone());

        if self.origin == Origin::Fields && self.coverage == Coverage::None {
            return attributes;
        }

        attributes.insert(COVERAGE.to_string(), self.coverage.to_string());
        for (name, value) in [
            (NONCE, &self.nonce),
            (AUTH, &self.auth),
            (TIMESTAMP, &self.timestamp),
        ] {
            if let Some(value) = value {
                attributes.insert(name.to_string(), value.clone());
            }
        }
        attributes
    }

    /// Render the full header value, e.g. `Token token="..", coverage=".."`
    pub fn to_header(&self) -> String {
        codec::render(&self.to_attributes())
    }
}

/// Trim a value, treating blank as absent
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

impl fmt::Display for TokenCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_header())
    }
}

impl FromStr for TokenCredentials {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

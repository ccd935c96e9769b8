//! Common types used throughout token-auth
//!
//! Attribute names, the attribute map produced by the codec, and the
//! `Coverage` enum shared by both credential construction paths.

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Type Aliases
// ============================================================================

/// Attribute name to attribute value, as extracted from a header string
pub type AttributeMap = HashMap<String, String>;

// ============================================================================
// Attribute Names
// ============================================================================

pub const TOKEN: &str = "token";
pub const COVERAGE: &str = "coverage";
pub const NONCE: &str = "nonce";
pub const AUTH: &str = "auth";
pub const TIMESTAMP: &str = "timestamp";

/// Order in which attributes are rendered on the wire
pub const FIELD_ORDER: [&str; 5] = [TOKEN, COVERAGE, NONCE, AUTH, TIMESTAMP];

// ============================================================================
// Coverage
// ============================================================================

/// Cryptographic scope of a Token credential
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Coverage {
    /// No signing
    #[default]
    None,
    /// Sign the core request data
    Base,
    /// Sign the core request data plus a SHA-256 body digest
    BaseBodySha256,
    /// Value read from a header that is not one of the known modes.
    /// Never produced by the builder path.
    Unrecognized(String),
}

impl Coverage {
    /// Wire name of this coverage
    pub fn as_str(&self) -> &str {
        match self {
            Coverage::None => "none",
            Coverage::Base => "base",
            Coverage::BaseBodySha256 => "base+body-sha-256",
            Coverage::Unrecognized(value) => value,
        }
    }

    /// Whether nonce, auth and timestamp are part of this coverage
    pub fn is_cryptographic(&self) -> bool {
        matches!(self, Coverage::Base | Coverage::BaseBodySha256)
    }

    /// Map a header value onto a coverage without rejecting unknown names
    pub fn from_header_value(value: &str) -> Self {
        value
            .parse()
            .unwrap_or_else(|_| Coverage::Unrecognized(value.to_string()))
    }
}

impl FromStr for Coverage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "none" => Ok(Coverage::None),
            "base" => Ok(Coverage::Base),
            "base+body-sha-256" => Ok(Coverage::BaseBodySha256),
            other => Err(Error::unsupported_coverage(other)),
        }
    }
}

impl fmt::Display for Coverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Coverage {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Coverage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

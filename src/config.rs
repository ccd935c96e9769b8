//! Credential definition files
//!
//! Outgoing credentials can be kept in a YAML or JSON file:
//!
//! ```yaml
//! token: h480djs93hd8
//! coverage: base
//! nonce: dj83hs9s
//! auth: djosJKDKJSD8743243/jdk33klY=
//! timestamp: 137131200
//! ```
//!
//! Loading only deserializes the fields; validation happens when the
//! fields are turned into [`TokenCredentials`](crate::TokenCredentials).

use crate::credentials::CredentialFields;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load credential fields from a file
///
/// Files ending in `.json` are read as JSON, everything else as YAML.
pub fn load_fields(path: impl AsRef<Path>) -> Result<CredentialFields> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::config(format!("Credentials file '{}' not found", path.display()))
        } else {
            Error::config(format!(
                "Failed to read credentials file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    debug!("Loading credential fields from {}", path.display());
    if is_json {
        Ok(serde_json::from_str(&content)?)
    } else {
        load_fields_from_str(&content)
    }
}

/// Load credential fields from a YAML (or JSON) string
pub fn load_fields_from_str(content: &str) -> Result<CredentialFields> {
    Ok(serde_yaml::from_str(content)?)
}

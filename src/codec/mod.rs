//! Header codec
//!
//! Converts between the textual attribute list of the Token scheme and an
//! [`AttributeMap`]:
//!
//! ```text
//! Token token="h480djs93hd8", coverage="base", nonce="dj83hs9s", auth="...", timestamp="137131200"
//! ```
//!
//! Extraction scans for `name="value"` pairs anywhere in the input, so
//! separators, line breaks and indentation have no effect and text that
//! does not form a pair is ignored. Rendering always emits the known
//! attributes in a fixed order.

use crate::types::{AttributeMap, FIELD_ORDER};
use regex::Regex;
use std::sync::LazyLock;

/// Authentication scheme literal
pub const SCHEME: &str = "Token";

/// Regex for matching attribute pairs: name="value" with an ASCII word name
static ATTRIBUTE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"([A-Za-z0-9_]+)="([^"]*)""#).unwrap());

/// Extract all `name="value"` pairs from a header string
///
/// A name that appears more than once keeps its last value.
pub fn extract(raw: &str) -> AttributeMap {
    ATTRIBUTE_REGEX
        .captures_iter(raw)
        .map(|cap| (cap[1].to_string(), cap[2].to_string()))
        .collect()
}

/// Render the known attributes of a map as a Token header value
///
/// Attributes outside the scheme's field set are not rendered.
pub fn render(attributes: &AttributeMap) -> String {
    let pairs: Vec<String> = FIELD_ORDER
        .iter()
        .filter_map(|name| {
            attributes
                .get(*name)
                .map(|value| format!("{name}=\"{value}\""))
        })
        .collect();

    format!("{SCHEME} {}", pairs.join(", "))
}

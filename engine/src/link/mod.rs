//! Shareable link encoding
//!
//! Serializes a [`GridRequest`] to a URL query string and back. The encoded
//! form carries the four inputs that determine a grid: names (in original
//! order), seed, and the optional axis labels.
//!
//! # Format
//!
//! ```text
//! names=Alice,Bob%20Jr.,Carol&seed=42&col_team=Chiefs&row_team=Eagles
//! ```
//!
//! Names are comma-joined with each name percent-encoded individually, so
//! commas inside a name survive the round trip. Label keys are omitted when
//! the label is absent. Unknown keys are ignored on decode.
//!
//! CRITICAL: Name order must round-trip exactly. The shuffle depends on the
//! seed AND the input order, so a re-sorted name list produces a different
//! grid from the same seed.

use thiserror::Error;

use crate::generator::GridRequest;

/// Errors that can occur while decoding a share link
#[derive(Debug, Error, PartialEq)]
pub enum LinkError {
    #[error("Link is missing the 'names' parameter")]
    MissingNames,

    #[error("Link is missing the 'seed' parameter")]
    MissingSeed,

    #[error("Seed '{value}' is not a 32-bit integer")]
    InvalidSeed { value: String },

    #[error("Invalid percent-escape in '{value}'")]
    InvalidEscape { value: String },
}

/// Encode a request as a query string
///
/// # Example
/// ```
/// use squares_grid_core_rs::{link, GridRequest};
///
/// let request = GridRequest {
///     names: vec!["Alice".to_string(), "Bob Jr.".to_string()],
///     seed: 42,
///     col_label: Some("Chiefs".to_string()),
///     row_label: None,
/// };
///
/// let query = link::encode(&request);
/// assert_eq!(query, "names=Alice,Bob%20Jr.&seed=42&col_team=Chiefs");
/// ```
pub fn encode(request: &GridRequest) -> String {
    let names = request
        .names
        .iter()
        .map(|name| escape(name))
        .collect::<Vec<_>>()
        .join(",");

    let mut query = format!("names={}&seed={}", names, request.seed);
    if let Some(col) = &request.col_label {
        query.push_str("&col_team=");
        query.push_str(&escape(col));
    }
    if let Some(row) = &request.row_label {
        query.push_str("&row_team=");
        query.push_str(&escape(row));
    }
    query
}

/// Decode a query string back into a request
///
/// Accepts a bare query string, one with a leading `?`, or a full URL
/// (everything up to and including the last `?` is stripped). Name-count
/// validation is deferred to the generator; this layer only checks that
/// the parameters are present and well-formed.
///
/// # Errors
/// - [`LinkError::MissingNames`] / [`LinkError::MissingSeed`] for absent keys
/// - [`LinkError::InvalidSeed`] if the seed does not parse as i32
/// - [`LinkError::InvalidEscape`] for malformed percent-escapes or
///   non-UTF-8 decoded bytes
pub fn decode(input: &str) -> Result<GridRequest, LinkError> {
    let query = match input.rsplit_once('?') {
        Some((_, q)) => q,
        None => input,
    };

    let mut names: Option<Vec<String>> = None;
    let mut seed: Option<&str> = None;
    let mut col_label: Option<String> = None;
    let mut row_label: Option<String> = None;

    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        match key {
            "names" => {
                let decoded = value
                    .split(',')
                    .filter(|f| !f.is_empty())
                    .map(unescape)
                    .collect::<Result<Vec<_>, _>>()?;
                names = Some(decoded);
            }
            "seed" => seed = Some(value),
            "col_team" => col_label = Some(unescape(value)?),
            "row_team" => row_label = Some(unescape(value)?),
            // Unknown keys are ignored for forward compatibility
            _ => {}
        }
    }

    let names = names.ok_or(LinkError::MissingNames)?;
    let seed_raw = seed.ok_or(LinkError::MissingSeed)?;
    let seed = seed_raw
        .parse::<i32>()
        .map_err(|_| LinkError::InvalidSeed {
            value: seed_raw.to_string(),
        })?;

    Ok(GridRequest {
        names,
        seed,
        col_label,
        row_label,
    })
}

/// Percent-encode a value for use in the query string
///
/// Keeps RFC 3986 unreserved characters; everything else (including the
/// comma used as the name separator) becomes `%XX`.
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => {
                out.push('%');
                out.push_str(&format!("{:02X}", byte));
            }
        }
    }
    out
}

/// Reverse of [`escape`]; also accepts `+` as space
fn unescape(value: &str) -> Result<String, LinkError> {
    let invalid = || LinkError::InvalidEscape {
        value: value.to_string(),
    };

    let mut bytes = Vec::with_capacity(value.len());
    let mut iter = value.bytes();
    while let Some(byte) = iter.next() {
        match byte {
            b'%' => {
                let hi = iter.next().ok_or_else(invalid)?;
                let lo = iter.next().ok_or_else(invalid)?;
                let hex = [hi, lo];
                let hex = std::str::from_utf8(&hex).map_err(|_| invalid())?;
                let decoded = u8::from_str_radix(hex, 16).map_err(|_| invalid())?;
                bytes.push(decoded);
            }
            b'+' => bytes.push(b' '),
            _ => bytes.push(byte),
        }
    }

    String::from_utf8(bytes).map_err(|_| invalid())
}

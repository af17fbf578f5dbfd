//! Query-string and form-body construction
//!
//! The exchange signs the exact text of the query string and POST body, so
//! parameters are kept as plain `key=value` pairs joined with `&` in the
//! order the caller supplied them. No percent-encoding and no re-ordering
//! happens here — a re-encoded or re-ordered payload would produce a
//! signature the server rejects.

use chrono::{DateTime, Utc};

/// Ordered `key=value` parameter list
///
/// Renders to the `&`-joined form the derivatives API expects, preserving
/// insertion order.
#[derive(Debug, Default, Clone)]
pub struct Params {
    pairs: Vec<(String, String)>,
}

impl Params {
    /// Create an empty parameter list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter, keeping insertion order
    pub fn push(mut self, key: &str, value: impl ToString) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Append a parameter only when the value is present
    pub fn push_opt(self, key: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.push(key, value),
            None => self,
        }
    }

    /// True when no parameters were added
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Render as `key=value&key=value` in insertion order
    pub fn encode(&self) -> String {
        let rendered: Vec<String> = self
            .pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect();
        rendered.join("&")
    }
}

/// Split an `&`-joined form body back into individual fields
///
/// Each pair is split on the first `=` only, so values that themselves
/// contain `=` (base64, embedded JSON) come through intact. A pair without
/// `=` becomes a field with an empty value.
pub fn split_form(body: &str) -> Vec<(&str, &str)> {
    body.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (key, value),
            None => (pair, ""),
        })
        .collect()
}

/// Format a timestamp the way the API expects: `yyyy-MM-ddTHH:mm:ss.fffZ`
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

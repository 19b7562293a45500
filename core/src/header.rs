//! Header entries and the operations over header lists.
//!
//! Requests and responses carry headers as an ordered `Vec<Header>`. The
//! same key may appear in several entries; `combined_value` folds them into
//! one string for lookups and `to_mapping` folds them into the multi-value
//! map handed to a transport.

use std::collections::HashMap;

/// A header key with one or more values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub key: String,
    pub values: Vec<String>,
}

impl Header {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            values: vec![value.into()],
        }
    }

    pub fn with_values<I, S>(key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key: key.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// This entry's values joined with `,`.
    pub fn value(&self) -> String {
        self.values.join(",")
    }

    /// Header names are case-insensitive (RFC 9110 § 5.1).
    pub fn matches(&self, key: &str) -> bool {
        self.key.eq_ignore_ascii_case(key)
    }
}

/// Returns every value stored under `key`, in encounter order, joined with
/// `,` (RFC 9110 § 5.3). Duplicates are kept. Returns an empty string when
/// no entry matches.
pub fn combined_value(headers: &[Header], key: &str) -> String {
    // Not every field can be combined with a comma (Set-Cookie), but such
    // fields must not appear more than once in a well-formed header block.
    headers
        .iter()
        .filter(|h| h.matches(key))
        .flat_map(|h| h.values.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(",")
}

/// Folds a header list into a key to values map for a transport request.
///
/// Returns `None` for an empty list so "no header block" stays distinct from
/// an empty map. Entries sharing a key are merged, values kept in order.
pub fn to_mapping(headers: &[Header]) -> Option<HashMap<String, Vec<String>>> {
    if headers.is_empty() {
        return None;
    }

    let mut mapping: HashMap<String, Vec<String>> = HashMap::new();
    for header in headers {
        mapping
            .entry(header.key.clone())
            .or_default()
            .extend(header.values.iter().cloned());
    }
    Some(mapping)
}

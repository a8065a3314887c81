//! Exact and fuzzy attribute lookups

use crate::app::models::Record;

/// How keys are compared during the fuzzy pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyMatching {
    /// Compare lower-cased keys
    #[default]
    CaseInsensitive,
    /// Compare lower-cased keys with separators removed (space / \ - _ . :)
    Compact,
}

impl KeyMatching {
    /// Normalize a key for comparison under this mode
    pub fn normalize(&self, key: &str) -> String {
        let lowered = key.to_lowercase();
        match self {
            KeyMatching::CaseInsensitive => lowered,
            KeyMatching::Compact => lowered
                .chars()
                .filter(|c| !matches!(c, ' ' | '/' | '\\' | '-' | '_' | '.' | ':'))
                .collect(),
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Exact pass: first candidate key with a non-blank value
pub fn resolve_exact(record: &Record, keys: &[&str]) -> String {
    keys.iter()
        .filter_map(|key| record.attributes.get(key))
        .find(|value| !is_blank(value))
        .map(str::to_string)
        .unwrap_or_default()
}

/// Fuzzy pass: first attribute whose key contains a candidate
///
/// Candidates are tried in order; for each candidate the attributes are
/// scanned in record order and the first non-blank hit wins.
pub fn resolve_fuzzy(record: &Record, keys: &[&str], matching: KeyMatching) -> String {
    for key in keys {
        let needle = matching.normalize(key);
        if needle.is_empty() {
            continue;
        }
        let hit = record
            .attributes
            .iter()
            .find(|(name, value)| !is_blank(value) && matching.normalize(name).contains(&needle));
        if let Some((_, value)) = hit {
            return value.to_string();
        }
    }
    String::new()
}

/// Two-pass resolution with case-insensitive key matching
///
/// # Arguments
///
/// * `record` - Record to read from
/// * `keys` - Candidate keys in priority order
///
/// # Returns
///
/// The exact-pass value if any, else the fuzzy-pass value, else `""`
pub fn resolve(record: &Record, keys: &[&str]) -> String {
    resolve_with(record, keys, KeyMatching::CaseInsensitive)
}

/// Two-pass resolution with a chosen fuzzy matching mode
pub fn resolve_with(record: &Record, keys: &[&str], matching: KeyMatching) -> String {
    let exact = resolve_exact(record, keys);
    if !exact.is_empty() {
        return exact;
    }
    resolve_fuzzy(record, keys, matching)
}

/// First non-blank value of a fixed list, or `""`
pub fn first_non_empty<I, S>(values: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .find(|value| !is_blank(value.as_ref()))
        .map(|value| value.as_ref().to_string())
        .unwrap_or_default()
}

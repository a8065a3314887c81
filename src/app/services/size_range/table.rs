//! Canonical nominal size table and token conversion

use crate::constants::NOMINAL_SIZES;
use serde::Serialize;
use std::sync::LazyLock;

/// One entry of the canonical size table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NominalSize {
    /// Position in the table, smallest size is 0
    pub index: usize,
    /// Inch token, e.g. "1 1/2"
    pub inch: &'static str,
    /// DN token, e.g. "DN40"
    pub dn: &'static str,
}

static SIZES: LazyLock<Vec<NominalSize>> = LazyLock::new(|| {
    NOMINAL_SIZES
        .iter()
        .enumerate()
        .map(|(index, &(inch, dn))| NominalSize { index, inch, dn })
        .collect()
});

/// The canonical size table, smallest first
pub fn canonical_sizes() -> &'static [NominalSize] {
    &SIZES
}

/// Normalize a size token for table lookup
///
/// Upper-cases, strips inch decorations (`"`, `INCH`, `IN`, `NPS`), folds
/// fraction glyphs, turns `1-1/2` into `1 1/2`, collapses whitespace and
/// joins `DN 50` into `DN50`.
pub fn normalize_token(raw: &str) -> String {
    let mut token = raw.trim().to_uppercase();

    for (glyph, text) in [('½', " 1/2"), ('¼', " 1/4"), ('¾', " 3/4")] {
        token = token.replace(glyph, text);
    }
    for decoration in ["\"", "''", "INCHES", "INCH", "NPS", "IN"] {
        token = token.replace(decoration, " ");
    }

    let mut token = token.split_whitespace().collect::<Vec<_>>().join(" ");

    // "1-1/2" style mixed numbers
    if let Some((whole, fraction)) = token.split_once('-') {
        if !whole.is_empty()
            && whole.chars().all(|c| c.is_ascii_digit())
            && fraction.contains('/')
        {
            token = format!("{} {}", whole, fraction);
        }
    }

    if let Some(rest) = token.strip_prefix("DN") {
        token = format!("DN{}", rest.trim_start());
    }
    token
}

/// Table index of an inch or DN token
pub fn index_of(token: &str) -> Option<usize> {
    let normalized = normalize_token(token);
    if normalized.is_empty() {
        return None;
    }
    let is_metric = normalized.starts_with("DN");
    canonical_sizes()
        .iter()
        .find(|size| {
            if is_metric {
                size.dn == normalized
            } else {
                size.inch == normalized
            }
        })
        .map(|size| size.index)
}

/// Inch token for a size; unknown tokens are returned unchanged
pub fn to_inch_token(token: &str) -> String {
    match index_of(token) {
        Some(index) => canonical_sizes()[index].inch.to_string(),
        None => token.to_string(),
    }
}

/// DN token for a size; unknown tokens are returned unchanged
pub fn to_metric_token(token: &str) -> String {
    match index_of(token) {
        Some(index) => canonical_sizes()[index].dn.to_string(),
        None => token.to_string(),
    }
}

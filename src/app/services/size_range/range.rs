//! Size range resolution and expansion

use super::table::{NominalSize, canonical_sizes, index_of};
use tracing::debug;

/// Inclusive range of table indices, always `min_index <= max_index`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeRange {
    pub min_index: usize,
    pub max_index: usize,
}

impl SizeRange {
    /// Build a range from two tokens, swapping reversed bounds
    ///
    /// Returns `None` when either token is blank or not in the table.
    pub fn from_tokens(min: &str, max: &str) -> Option<Self> {
        let (Some(a), Some(b)) = (index_of(min), index_of(max)) else {
            if !min.trim().is_empty() || !max.trim().is_empty() {
                debug!("Size range '{}'..'{}' not in size table", min, max);
            }
            return None;
        };
        Some(Self {
            min_index: a.min(b),
            max_index: a.max(b),
        })
    }

    /// Number of sizes in the range
    pub fn len(&self) -> usize {
        self.max_index - self.min_index + 1
    }

    /// A range always holds at least one size
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Sizes in the range, ascending
    pub fn sizes(&self) -> &'static [NominalSize] {
        &canonical_sizes()[self.min_index..=self.max_index]
    }
}

/// Expand a min/max token pair into ascending nominal sizes
///
/// Reversed bounds are swapped, so `expand(a, b) == expand(b, a)`. When either
/// bound is unknown the result is empty.
pub fn expand(min: &str, max: &str) -> Vec<NominalSize> {
    SizeRange::from_tokens(min, max)
        .map(|range| range.sizes().to_vec())
        .unwrap_or_default()
}

/// Which token a size table shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeLabel {
    Inch,
    Metric,
}

impl SizeLabel {
    /// Label for a size in this representation
    pub fn label(&self, size: &NominalSize) -> &'static str {
        match self {
            SizeLabel::Inch => size.inch,
            SizeLabel::Metric => size.dn,
        }
    }
}

//! Tests for the size table and range expansion


/// Inch labels of an expanded run
pub fn inch_labels(sizes: &[crate::app::services::size_range::NominalSize]) -> Vec<&'static str> {
    sizes.iter().map(|size| size.inch).collect()
}

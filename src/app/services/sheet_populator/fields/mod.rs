//! Field extraction shared by the datasheet and summary writers
//!
//! Each logical slot is a static list of [`FieldRule`]s resolved against a
//! record. Extraction produces plain structs of strings; the writers only
//! decide where the strings go.
//!
//! - [`datasheet`] - Per-item fields with exact key matching
//! - [`summary`] - Class summary fields with exact-then-compact fuzzy matching
//!
//! [`FieldRule`]: crate::app::services::attribute_resolver::FieldRule

pub mod datasheet;
pub mod summary;

pub use datasheet::{BoltFields, GasketFields, PipingPartFields, ValveFields};
pub use summary::{BoltSummary, GasketSummary, PipingPartSummary, ValveSummary};

use crate::app::services::attribute_resolver::{FieldRule, first_non_empty};

/// Record code when nothing more specific resolved
pub(crate) fn or_name(value: String, name: &str) -> String {
    first_non_empty([value.as_str(), name])
}

/// Whether a value is a bare numeric code such as `1765`
pub fn is_numeric_code(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit())
}

/// Upper-case a pressure or temperature value and strip its unit decorations
pub fn strip_units(raw: &str) -> String {
    const DECORATIONS: &[&str] = &["BAR(G)", "BAR (G)", "(G)", "BARG", "BAR", "°C", "DEGC"];

    if raw.trim().is_empty() {
        return String::new();
    }
    DECORATIONS
        .iter()
        .fold(raw.to_uppercase(), |text, unit| text.replace(unit, ""))
        .trim()
        .to_string()
}

/// `"<min> / +<max> BARG"`, or whichever bound exists with `BARG`
pub fn format_pressure_range(min_raw: &str, max_raw: &str) -> String {
    let min = strip_units(min_raw);
    let mut max = strip_units(max_raw);
    if !max.is_empty() && !max.starts_with('-') && !max.starts_with('+') {
        max.insert(0, '+');
    }

    let range = match (min.is_empty(), max.is_empty()) {
        (false, false) => format!("{} / {}", min, max),
        (true, true) => return String::new(),
        _ => format!("{}{}", min, max),
    };
    format!("{} BARG", range)
}

/// `"<t> °C"`, empty when no temperature is given
pub fn format_temperature(raw: &str) -> String {
    let value = strip_units(raw);
    if value.is_empty() {
        value
    } else {
        format!("{} °C", value)
    }
}

/// Join two values with `separator`, dropping blanks
pub fn join_if(a: &str, separator: &str, b: &str) -> String {
    match (a.trim().is_empty(), b.trim().is_empty()) {
        (true, true) => String::new(),
        (true, false) => b.to_string(),
        (false, true) => a.to_string(),
        (false, false) => format!("{}{}{}", a, separator, b),
    }
}

pub(crate) const SIZE_MIN: &[FieldRule] = &[FieldRule::exact(&["Size (Min)", "Size min"])];
pub(crate) const SIZE_MAX: &[FieldRule] = &[FieldRule::exact(&["Size (Max)", "Size max"])];

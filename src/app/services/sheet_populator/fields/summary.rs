//! Pipe class summary fields
//!
//! Summary slots use exact matching first, then a contains pass over keys with
//! separators removed ([`KeyMatching::Compact`]), so "Inside/Outside" finds
//! "Inside / Outside Ring".

use super::{is_numeric_code, join_if};
use crate::app::models::Record;
use crate::app::services::attribute_resolver::{
    FieldRule, KeyMatching, first_non_empty, first_non_empty_resolved_with, resolve_exact,
    resolve_with,
};

fn resolve_rules(record: &Record, rules: &[FieldRule]) -> String {
    first_non_empty_resolved_with(record, rules, KeyMatching::Compact)
}

fn resolve_groups(record: &Record, groups: &[Vec<String>]) -> String {
    first_non_empty(groups.iter().map(|group| {
        let keys: Vec<&str> = group.iter().map(String::as_str).collect();
        resolve_with(record, &keys, KeyMatching::Compact)
    }))
}

const ITEM_CODE: &[FieldRule] = &[FieldRule::fuzzy(&["Code", "Item code", "Part code"])];
const COMMENT_FALLBACK: &[FieldRule] = &[
    FieldRule::fuzzy(&["Additional Comment"]),
    FieldRule::fuzzy(&["Comment", "Item Tag", "Tag"]),
];

/// Replace a bare numeric type (e.g. `1765`) with the item's comments
fn readable_type(record: &Record, type_text: String) -> String {
    if is_numeric_code(&type_text) {
        first_non_empty([resolve_rules(record, COMMENT_FALLBACK), type_text])
    } else {
        type_text
    }
}

/// Item code for column N: code, else tag-like comments
fn item_code(record: &Record, fallback: &'static [FieldRule]) -> String {
    first_non_empty([resolve_rules(record, ITEM_CODE), resolve_rules(record, fallback)])
}

// =============================================================================
// Piping parts
// =============================================================================

const PP_TYPE: &[FieldRule] = &[
    FieldRule::fuzzy(&["Type"]),
    FieldRule::fuzzy(&["Body/Fitting type", "Body / Fitting type"]),
];
const PP_SEAM_WELD: &[FieldRule] = &[
    FieldRule::fuzzy(&["Seamless / Welded", "Seamless/Welded"]),
    FieldRule::fuzzy(&["Seamless - Welded"]),
    FieldRule::fuzzy(&["Seamless"]),
    FieldRule::fuzzy(&["Welded"]),
];
const PP_MATERIAL: &[FieldRule] = &[FieldRule::fuzzy(&["Material", "Material number"])];
const PP_STANDARD: &[FieldRule] = &[FieldRule::fuzzy(&["Acc to Standard", "Material Standard"])];
const PP_CONNECTION: &[FieldRule] =
    &[FieldRule::fuzzy(&["Piping connection 1", "End Connection 1"])];
const PP_SIZE_MIN: &[FieldRule] = &[FieldRule::fuzzy(&["Size min", "Size (Min)"])];
const PP_SIZE_MAX: &[FieldRule] = &[FieldRule::fuzzy(&["Size max", "Size (Max)"])];
const PP_SCHEDULE: &[FieldRule] = &[FieldRule::fuzzy(&[
    "Schedule",
    "Pipe schedule no",
    "Pipe schedule number",
])];
const PP_SORTING: &[FieldRule] = &[FieldRule::fuzzy(&["Sorting for piping class"])];
const PP_CODE_FALLBACK: &[FieldRule] = &[FieldRule::fuzzy(&[
    "Comment",
    "Additional Comment",
    "Item Tag",
    "Tag",
])];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipingPartSummary {
    /// Code used for ordering within a group
    pub sort_code: String,
    /// First character of the sorting attribute, `"0"` when absent
    pub group_key: String,
    pub type_text: String,
    pub seam_weld: String,
    pub material: String,
    pub standard: String,
    pub connection: String,
    pub size_min: String,
    pub size_max: String,
    /// `SCH<n>`, else class, else rating
    pub schedule_class: String,
    pub item_code: String,
}

impl PipingPartSummary {
    pub fn extract(record: &Record) -> Self {
        let schedule = resolve_rules(record, PP_SCHEDULE);
        let schedule_class = if schedule.trim().is_empty() {
            first_non_empty([
                resolve_exact(record, &["Class"]),
                resolve_exact(record, &["Rating"]),
            ])
        } else {
            format!("SCH{}", schedule.trim())
        };

        let group_key = resolve_rules(record, PP_SORTING)
            .trim()
            .chars()
            .next()
            .map(String::from)
            .unwrap_or_else(|| "0".to_string());

        Self {
            sort_code: resolve_rules(record, ITEM_CODE),
            group_key,
            type_text: readable_type(record, resolve_rules(record, PP_TYPE)),
            seam_weld: resolve_rules(record, PP_SEAM_WELD),
            material: resolve_rules(record, PP_MATERIAL),
            standard: resolve_rules(record, PP_STANDARD),
            connection: resolve_rules(record, PP_CONNECTION),
            size_min: resolve_rules(record, PP_SIZE_MIN),
            size_max: resolve_rules(record, PP_SIZE_MAX),
            schedule_class,
            item_code: item_code(record, PP_CODE_FALLBACK),
        }
    }

    /// Ordering rank of the group: 1..4 for known groups, 99 otherwise
    pub fn group_rank(&self) -> u8 {
        match self.group_key.as_str() {
            "1" => 1,
            "2" => 2,
            "3" => 3,
            "4" => 4,
            _ => 99,
        }
    }
}

// =============================================================================
// Bolting
// =============================================================================

const TAG_FALLBACK: &[FieldRule] = &[FieldRule::fuzzy(&["Comment", "Item Tag", "Tag"])];
const BOLT_STANDARD: &[FieldRule] = &[FieldRule::fuzzy(&["Acc to standard", "Standard"])];
const BOLT_MATERIAL: &[FieldRule] = &[
    FieldRule::fuzzy(&["Material - Bolts", "Material bolts", "Bolts material"]),
    FieldRule::contains(&["bolt material"]),
];
const NUT_MATERIAL: &[FieldRule] = &[
    FieldRule::fuzzy(&["Material - Nuts", "Material nuts", "Nuts material"]),
    FieldRule::contains(&["nut material"]),
];
const COATING: &[FieldRule] = &[FieldRule::fuzzy(&["Coating", "Finish", "Surface coating"])];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoltSummary {
    pub type_text: String,
    pub standard: String,
    /// Bolt material with ` - <coating>` unless the coating is NONE
    pub bolt_material: String,
    pub nut_material: String,
    pub item_code: String,
}

impl BoltSummary {
    pub fn extract(record: &Record) -> Self {
        let coating = resolve_rules(record, COATING);
        let coating = if coating.trim().eq_ignore_ascii_case("NONE") {
            String::new()
        } else {
            coating
        };

        Self {
            type_text: readable_type(record, resolve_rules(record, &[FieldRule::fuzzy(&["Type"])])),
            standard: resolve_rules(record, BOLT_STANDARD),
            bolt_material: join_if(&resolve_rules(record, BOLT_MATERIAL), " - ", &coating),
            nut_material: join_if(&resolve_rules(record, NUT_MATERIAL), " - ", &coating),
            item_code: item_code(record, TAG_FALLBACK),
        }
    }
}

// =============================================================================
// Gaskets
// =============================================================================

const RING: &[FieldRule] = &[
    FieldRule::fuzzy(&["Inside / Outside Ring"]),
    FieldRule::contains(&["Inside/Outside", "Inside Outside"]),
];
const GASKET_MATERIALS: [[&[FieldRule]; 2]; 2] = [
    [
        &[FieldRule::fuzzy(&["Material 1 column 1", "Material 1 col 1"])],
        &[FieldRule::fuzzy(&["Material 1 column 2", "Material 1 col 2"])],
    ],
    [
        &[FieldRule::fuzzy(&["Material 2 column 1", "Material 2 col 1"])],
        &[FieldRule::fuzzy(&["Material 2 column 2", "Material 2 col 2"])],
    ],
];
const GASKET_STANDARD: &[FieldRule] = &[
    FieldRule::fuzzy(&["Acc to Standard", "Standard"]),
    FieldRule::contains(&["ansi", "asme", "dn"]),
];
const THICKNESS: &[FieldRule] = &[FieldRule::fuzzy(&["Thickness"])];
const GASKET_CLASS: &[FieldRule] = &[FieldRule::fuzzy(&["Class"])];
const SIZE_MIN: &[FieldRule] = &[
    FieldRule::fuzzy(&["Size min", "Size (Min)"]),
    FieldRule::contains(&["min size"]),
];
const SIZE_MAX: &[FieldRule] = &[
    FieldRule::fuzzy(&["Size max", "Size (Max)"]),
    FieldRule::contains(&["max size"]),
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GasketSummary {
    pub type_text: String,
    pub ring: String,
    /// Material, standard and thickness lines, blanks dropped
    pub description_lines: Vec<String>,
    pub size_min: String,
    pub size_max: String,
    pub class: String,
    pub item_code: String,
}

impl GasketSummary {
    pub fn extract(record: &Record) -> Self {
        let mut description_lines: Vec<String> = GASKET_MATERIALS
            .iter()
            .filter_map(|[left, right]| {
                let left = resolve_rules(record, left);
                if left.trim().is_empty() {
                    return None;
                }
                Some(join_if(&left, " - ", &resolve_rules(record, right)))
            })
            .collect();

        let standard = resolve_rules(record, GASKET_STANDARD);
        if !standard.trim().is_empty() {
            description_lines.push(standard);
        }
        let thickness = resolve_rules(record, THICKNESS);
        if !thickness.trim().is_empty() {
            description_lines.push(format!("THICKNESS = {}", thickness));
        }

        Self {
            type_text: readable_type(record, resolve_rules(record, &[FieldRule::fuzzy(&["Type"])])),
            ring: resolve_rules(record, RING),
            description_lines,
            size_min: resolve_rules(record, SIZE_MIN),
            size_max: resolve_rules(record, SIZE_MAX),
            class: resolve_rules(record, GASKET_CLASS),
            item_code: item_code(record, TAG_FALLBACK),
        }
    }
}

// =============================================================================
// Valves
// =============================================================================

const VALVE_TYPE: &[FieldRule] = &[FieldRule::fuzzy(&["Type", "Valve Type"])];
const ADDITIONAL_1: &[FieldRule] =
    &[FieldRule::fuzzy(&["Additional specification 1", "Remark 1"])];
const ADDITIONAL_2: &[FieldRule] =
    &[FieldRule::fuzzy(&["Additional specification 2", "Remark 2"])];
const MOUNTING: &[FieldRule] = &[
    FieldRule::fuzzy(&["Piping connection 1"]),
    FieldRule::fuzzy(&["Piping connection"]),
    FieldRule::fuzzy(&["End connection", "Ends", "Connection"]),
    FieldRule::contains(&["MOUNTING BETWEEN FLANGES", "MOUNTING", "FLANGE"]),
];
const VALVE_SIZE_MIN: &[FieldRule] = &[
    FieldRule::fuzzy(&["Size min", "Size (Min)", "DN min"]),
    FieldRule::contains(&["min size"]),
];
const VALVE_SIZE_MAX: &[FieldRule] = &[
    FieldRule::fuzzy(&["Size max", "Size (Max)", "DN max"]),
    FieldRule::contains(&["max size"]),
];
const DESIGN_CODE: &[FieldRule] = &[
    FieldRule::fuzzy(&["Design code"]),
    FieldRule::fuzzy(&["DIN/ANSI", "DIN / ANSI"]),
    FieldRule::fuzzy(&["Standard"]),
    FieldRule::contains(&["design code", "din", "ansi"]),
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValveSummary {
    /// First comma part, and the remaining parts when there are more than two
    pub type_lines: [String; 2],
    /// `LABEL : VALUE` material lines, additional specifications, mounting
    pub description_lines: Vec<String>,
    pub size_min: String,
    pub size_max: String,
    pub design_code: String,
    pub item_code: String,
}

impl ValveSummary {
    pub fn extract(record: &Record) -> Self {
        let raw_type = readable_type(record, resolve_rules(record, VALVE_TYPE));

        let mut description_lines: Vec<String> = (1..=4)
            .filter_map(|line| material_line(record, line))
            .collect();
        for rules in [ADDITIONAL_1, ADDITIONAL_2, MOUNTING] {
            let value = resolve_rules(record, rules);
            if !value.trim().is_empty() {
                description_lines.push(value.trim().to_string());
            }
        }

        Self {
            type_lines: split_valve_type(&raw_type),
            description_lines,
            size_min: resolve_rules(record, VALVE_SIZE_MIN),
            size_max: resolve_rules(record, VALVE_SIZE_MAX),
            design_code: resolve_rules(record, DESIGN_CODE),
            item_code: item_code(record, TAG_FALLBACK),
        }
    }
}

/// Split a valve type on commas into a first line and an optional second line
pub fn split_valve_type(raw: &str) -> [String; 2] {
    let parts: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();

    let first = parts.first().map(|part| part.to_string()).unwrap_or_default();
    let second = if parts.len() > 2 {
        parts[1..].join(", ")
    } else {
        String::new()
    };
    [first, second]
}

/// `LABEL : VALUE` for material line `index`; label alone when no value
fn material_line(record: &Record, index: usize) -> Option<String> {
    let label = resolve_groups(
        record,
        &[
            vec![
                format!("Description {} (C1)", index),
                format!("Description{} (C1)", index),
            ],
            vec![
                format!("Material {} column 1", index),
                format!("Material {} col 1", index),
            ],
        ],
    );
    if label.trim().is_empty() {
        return None;
    }

    let value = resolve_groups(
        record,
        &[
            vec![
                format!("Description {} (C3)", index),
                format!("Description{} (C3)", index),
            ],
            vec![
                format!("Description {} (C2)", index),
                format!("Description{} (C2)", index),
            ],
            vec![
                format!("Material {} column 3", index),
                format!("Material {} col 3", index),
            ],
            vec![
                format!("Material {} column 2", index),
                format!("Material {} col 2", index),
            ],
        ],
    );

    Some(join_if(label.trim(), " : ", value.trim()))
}

//! Per-item datasheet fields
//!
//! Slots resolve with exact (case-insensitive) key matching unless a rule is
//! explicitly a contains rule. A fuzzy hit on a datasheet would put, say,
//! "JLE Pipe Class" into the CLASS cell.

use super::{SIZE_MAX, SIZE_MIN, format_pressure_range, format_temperature, or_name};
use crate::app::models::{Record, SubCategory};
use crate::app::services::attribute_resolver::{
    FieldRule, first_non_empty, first_non_empty_resolved, resolve_exact,
};
use crate::app::services::classifier::sub_category_of;

// =============================================================================
// Piping parts
// =============================================================================

mod piping_part_rules {
    use super::FieldRule;

    pub const CODE: &[FieldRule] = &[FieldRule::exact(&["Comment", "Device designation", "Code"])];
    pub const TYPE: &[FieldRule] =
        &[FieldRule::exact(&["Additional Comment", "Type", "Specification"])];
    pub const SEAM_WELD: &[FieldRule] = &[FieldRule::exact(&["Seamless / Welded"])];
    pub const BODY_FITTING_TYPE: &[FieldRule] = &[FieldRule::exact(&["Body/Fitting type"])];
    pub const MATERIAL: &[FieldRule] = &[FieldRule::exact(&["Material number", "Material"])];
    pub const ACC_TO_STANDARD: &[FieldRule] = &[FieldRule::exact(&[
        "Material Standard",
        "Acc to Standard",
        "ACC. TO STANDARD",
    ])];
    pub const SCHEDULE: &[FieldRule] = &[FieldRule::exact(&["Pipe schedule no", "Schedule"])];
    pub const RATING: &[FieldRule] = &[FieldRule::exact(&["Rating"])];
    pub const CLASS: &[FieldRule] = &[FieldRule::exact(&["Class"])];
    pub const LENGTH: &[FieldRule] = &[FieldRule::exact(&["Length"])];
    pub const PIPING_CLASS: &[FieldRule] = &[FieldRule::exact(&[
        "JLE Pipe Class",
        "JLE Pipe Class 1",
        "Piping class",
    ])];
}

#[derive(Debug, Clone, PartialEq)]
pub struct PipingPartFields {
    pub code: String,
    pub type_text: String,
    pub seam_weld: String,
    pub material: String,
    pub acc_to_standard: String,
    pub schedule: String,
    /// Class, else rating
    pub class_or_rating: String,
    pub rating: String,
    pub length: String,
    pub piping_connections: [String; 2],
    pub additional_specifications: [String; 2],
    pub colour_marks: [String; 2],
    pub piping_class: String,
    pub size_min: String,
    pub size_max: String,
    pub sub_category: SubCategory,
}

impl PipingPartFields {
    pub fn extract(record: &Record) -> Self {
        use piping_part_rules::*;

        let body_fitting = first_non_empty_resolved(record, BODY_FITTING_TYPE);

        let mut seam_weld = first_non_empty_resolved(record, SEAM_WELD);
        if seam_weld.is_empty() && !body_fitting.trim().is_empty() {
            let upper = body_fitting.to_uppercase();
            seam_weld = if upper.contains("SEAMLESS") {
                "SEAMLESS".to_string()
            } else if upper.contains("WELDED") {
                "WELDED".to_string()
            } else {
                body_fitting.clone()
            };
        }

        let mut length = first_non_empty_resolved(record, LENGTH);
        if length.is_empty() && body_fitting.to_uppercase().contains("LENGTH") {
            length = body_fitting.clone();
        }

        let rating = first_non_empty_resolved(record, RATING);
        let class_or_rating =
            first_non_empty([first_non_empty_resolved(record, CLASS), rating.clone()]);

        Self {
            code: or_name(first_non_empty_resolved(record, CODE), &record.name),
            type_text: first_non_empty_resolved(record, TYPE),
            seam_weld,
            material: first_non_empty_resolved(record, MATERIAL),
            acc_to_standard: first_non_empty_resolved(record, ACC_TO_STANDARD),
            schedule: first_non_empty_resolved(record, SCHEDULE),
            class_or_rating,
            rating,
            length,
            piping_connections: [
                resolve_exact(record, &["Piping Connection 1"]),
                resolve_exact(record, &["Piping Connection 2"]),
            ],
            additional_specifications: [
                resolve_exact(record, &["Additional specification 1"]),
                resolve_exact(record, &["Additional specification 2"]),
            ],
            colour_marks: [
                resolve_exact(record, &["Color Mark 1"]),
                resolve_exact(record, &["Color Mark 2"]),
            ],
            piping_class: first_non_empty_resolved(record, PIPING_CLASS),
            size_min: first_non_empty_resolved(record, SIZE_MIN),
            size_max: first_non_empty_resolved(record, SIZE_MAX),
            sub_category: sub_category_of(record),
        }
    }
}

// =============================================================================
// Gaskets
// =============================================================================

mod gasket_rules {
    use super::FieldRule;

    pub const CODE: &[FieldRule] = &[FieldRule::exact(&["Device designation", "Code", "Comment"])];
    pub const TYPE: &[FieldRule] = &[FieldRule::exact(&[
        "Additional Comment",
        "Type",
        "Specification",
        "Comment",
    ])];
    pub const RING: &[FieldRule] = &[FieldRule::exact(&["Gasket Inside/Outside Ring"])];
    pub const ACC_TO_STANDARD: &[FieldRule] = &[FieldRule::exact(&[
        "Material Standard",
        "Acc to Standard",
        "ACC. TO STANDARD",
    ])];
    pub const CLASS: &[FieldRule] = &[FieldRule::exact(&["Class"])];
    pub const FACING: &[FieldRule] = &[FieldRule::exact(&["Facing", "Flange Facing"])];
    pub const THICKNESS: &[FieldRule] = &[FieldRule::exact(&["Thickness"])];
    pub const PRESSURE_MIN: &[FieldRule] = &[
        FieldRule::exact(&["JLE Design pressure min"]),
        FieldRule::contains(&["JLE Design pressure min", "Design pressure min"]),
    ];
    pub const PRESSURE_MAX: &[FieldRule] = &[
        FieldRule::exact(&["JLE Design pressure max"]),
        FieldRule::contains(&["JLE Design pressure max", "Design pressure max"]),
    ];
    pub const TEMPERATURE: &[FieldRule] = &[
        FieldRule::exact(&["JLE Design temperature max", "Design temperature"]),
        FieldRule::contains(&["Design temperature"]),
    ];

    /// Left (C1) and right (C2) material columns for lines 1..4
    pub const MATERIALS: [[&[&str]; 2]; 4] = [
        [
            &["Description 1 (C1)", "Material 1 column 1"],
            &["Description 1 (C2)", "Material 1 column 2"],
        ],
        [
            &["Description 2 (C1)", "Material 2 column 1"],
            &["Description 2 (C2)", "Material 2 column 2"],
        ],
        [
            &["Description 3 (C1)", "Material 3 column 1"],
            &["Description 3 (C2)", "Material 3 column 2"],
        ],
        [
            &["Description 4 (C1)", "Material 4 column 1"],
            &["Description 4 (C2)", "Material 4 column 2"],
        ],
    ];
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GasketFields {
    pub code: String,
    /// Type, with a second `WITH <RING>` line when a ring is given
    pub type_text: String,
    /// `(left, right)` material columns, lines 1..4
    pub materials: [(String, String); 4],
    pub acc_to_standard: String,
    pub class: String,
    pub facing: String,
    pub thickness: String,
    pub design_pressure: String,
    pub design_temperature: String,
    pub size_min: String,
    pub size_max: String,
}

impl GasketFields {
    pub fn extract(record: &Record) -> Self {
        use gasket_rules::*;

        let type_base = first_non_empty_resolved(record, TYPE);
        let ring = first_non_empty_resolved(record, RING);
        let type_text = if ring.is_empty() {
            type_base
        } else {
            format!("{}\nWITH {}", type_base, ring.to_uppercase())
        };

        let materials = MATERIALS.map(|[left, right]| {
            (resolve_exact(record, left), resolve_exact(record, right))
        });

        Self {
            code: or_name(first_non_empty_resolved(record, CODE), &record.name),
            type_text,
            materials,
            acc_to_standard: first_non_empty_resolved(record, ACC_TO_STANDARD),
            class: first_non_empty_resolved(record, CLASS),
            facing: first_non_empty_resolved(record, FACING),
            thickness: first_non_empty_resolved(record, THICKNESS),
            design_pressure: format_pressure_range(
                &first_non_empty_resolved(record, PRESSURE_MIN),
                &first_non_empty_resolved(record, PRESSURE_MAX),
            ),
            design_temperature: format_temperature(&first_non_empty_resolved(record, TEMPERATURE)),
            size_min: first_non_empty_resolved(record, SIZE_MIN),
            size_max: first_non_empty_resolved(record, SIZE_MAX),
        }
    }
}

// =============================================================================
// Valves
// =============================================================================

mod valve_rules {
    use super::FieldRule;

    pub const CODE: &[FieldRule] = &[FieldRule::exact(&[
        "Code",
        "Device designation",
        "Tag",
        "Valve code",
        "Comment",
    ])];
    pub const TYPE: &[FieldRule] = &[FieldRule::exact(&[
        "Additional Comment",
        "Valve Type",
        "Type",
        "Specification",
        "Comment",
    ])];
    pub const MEDIUM: &[FieldRule] = &[
        FieldRule::exact(&["Fluid Name"]),
        FieldRule::contains(&["Fluid Name"]),
        FieldRule::exact(&["Medium", "Media", "Fluid", "Service"]),
    ];
    pub const CORROSIVE: &[FieldRule] = &[
        FieldRule::exact(&["Corrosive Component"]),
        FieldRule::contains(&["Corrosive Component"]),
        FieldRule::exact(&["Corrosive", "Corrosion component", "Corrosive media"]),
    ];
    pub const PRESSURE_MIN: &[FieldRule] = &[
        FieldRule::exact(&["JLE Design pressure min"]),
        FieldRule::contains(&["JLE Design pressure min", "Design pressure min"]),
    ];
    pub const PRESSURE_MAX: &[FieldRule] = &[
        FieldRule::exact(&["JLE Design pressure max"]),
        FieldRule::contains(&["JLE Design pressure max", "Design pressure max"]),
    ];
    pub const TEMPERATURE: &[FieldRule] = &[
        FieldRule::exact(&["JLE Design temperature max"]),
        FieldRule::contains(&["JLE Design temperature max"]),
        FieldRule::exact(&["Design temperature 1", "Design temperature"]),
    ];
    pub const PRESSURE_2: &[FieldRule] = &[FieldRule::exact(&[
        "Design pressure 2",
        "Design pressure 2 (bar g)",
        "DP2",
    ])];
    pub const TEMPERATURE_2: &[FieldRule] = &[FieldRule::exact(&[
        "Design temperature 2",
        "Design temperature 2 (°C)",
        "DT2",
    ])];
    pub const PRESSURE_3: &[FieldRule] = &[FieldRule::exact(&[
        "Design pressure 3",
        "Design pressure 3 (bar g)",
        "DP3",
    ])];
    pub const TEMPERATURE_3: &[FieldRule] = &[FieldRule::exact(&[
        "Design temperature 3",
        "Design temperature 3 (°C)",
        "DT3",
    ])];
    pub const DESIGN_CODE: &[FieldRule] =
        &[FieldRule::exact(&["Design code", "Standard", "Code"])];
    pub const MATERIAL_GROUP: &[FieldRule] = &[FieldRule::exact(&["Material Group"])];
    pub const MATERIAL_NUMBER: &[FieldRule] = &[FieldRule::exact(&["Material number", "Material"])];
    pub const END_CONNECTION: &[FieldRule] = &[
        FieldRule::exact(&["Piping Connection 1"]),
        FieldRule::contains(&["Piping Connection 1"]),
        FieldRule::exact(&[
            "Piping connection",
            "End connection",
            "Connection",
            "Ends",
            "Flange Facing",
            "Facing",
        ]),
    ];
    pub const ADDITIONAL_1: &[FieldRule] = &[
        FieldRule::exact(&["Additional specification 1", "Remark 1"]),
        FieldRule::contains(&["Remark 1"]),
    ];
    pub const ADDITIONAL_2: &[FieldRule] = &[
        FieldRule::exact(&["Additional specification 2", "Remark 2"]),
        FieldRule::contains(&["Remark 2"]),
    ];
    pub const OPERATION: &[FieldRule] = &[FieldRule::exact(&["Operation", "Operator"])];
    pub const PIPING_CLASS: &[FieldRule] = &[FieldRule::exact(&[
        "Piping class",
        "Pipe class",
        "JLE Possible Pipe Class",
        "JLE Pipe Class",
        "JLE Pipe Class 1",
    ])];
    pub const SIZE_MIN_ANY_UNIT: &[FieldRule] = &[
        FieldRule::exact(&["Size (Min)"]),
        FieldRule::contains(&["Size (Min)"]),
        FieldRule::exact(&["Size min", "MIN SIZE", "DN min"]),
    ];
    pub const SIZE_MAX_ANY_UNIT: &[FieldRule] = &[
        FieldRule::exact(&["Size (Max)"]),
        FieldRule::contains(&["Size (Max)"]),
        FieldRule::exact(&["Size max", "MAX SIZE", "DN max"]),
    ];

    /// Description keys per line (1..4) and column (C1..C3)
    pub const DESCRIPTIONS: [[&str; 3]; 4] = [
        ["Description 1 (C1)", "Description 1 (C2)", "Description 1 (C3)"],
        ["Description 2 (C1)", "Description 2 (C2)", "Description 2 (C3)"],
        ["Description 3 (C1)", "Description 3 (C2)", "Description 3 (C3)"],
        ["Description 4 (C1)", "Description 4 (C2)", "Description 4 (C3)"],
    ];
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValveFields {
    pub code: String,
    pub type_text: String,
    pub medium: String,
    pub corrosive_component: String,
    /// Design pressure/temperature sets 1..3 as `(pressure, temperature)`
    pub design_conditions: [(String, String); 3],
    pub design_code: String,
    pub rating: String,
    pub class: String,
    /// Material block, line-major: `descriptions[line][column]`
    pub descriptions: [[String; 3]; 4],
    pub end_connection: String,
    pub operation: String,
    pub additional_specifications: [String; 2],
    pub piping_class: String,
    pub size_min: String,
    pub size_max: String,
}

impl ValveFields {
    pub fn extract(record: &Record) -> Self {
        use valve_rules::*;

        let pressure_min = first_non_empty_resolved(record, PRESSURE_MIN);
        let pressure_max = first_non_empty_resolved(record, PRESSURE_MAX);
        let pressure_1 = match (pressure_min.trim(), pressure_max.trim()) {
            ("", max) => max.to_string(),
            (min, "") => min.to_string(),
            (min, max) => format!("{} / {}", min, max),
        };

        let mut descriptions =
            DESCRIPTIONS.map(|line| line.map(|key| resolve_exact(record, &[key])));
        if descriptions[0][1].is_empty() {
            descriptions[0][1] = first_non_empty_resolved(record, MATERIAL_GROUP);
        }
        if descriptions[1][2].is_empty() {
            descriptions[1][2] = first_non_empty_resolved(record, MATERIAL_NUMBER);
        }

        Self {
            code: or_name(first_non_empty_resolved(record, CODE), &record.name),
            type_text: first_non_empty_resolved(record, TYPE),
            medium: first_non_empty_resolved(record, MEDIUM),
            corrosive_component: first_non_empty_resolved(record, CORROSIVE),
            design_conditions: [
                (pressure_1, first_non_empty_resolved(record, TEMPERATURE)),
                (
                    first_non_empty_resolved(record, PRESSURE_2),
                    first_non_empty_resolved(record, TEMPERATURE_2),
                ),
                (
                    first_non_empty_resolved(record, PRESSURE_3),
                    first_non_empty_resolved(record, TEMPERATURE_3),
                ),
            ],
            design_code: first_non_empty_resolved(record, DESIGN_CODE),
            rating: resolve_exact(record, &["Rating"]),
            class: resolve_exact(record, &["Class"]),
            descriptions,
            end_connection: first_non_empty_resolved(record, END_CONNECTION),
            operation: first_non_empty_resolved(record, OPERATION),
            additional_specifications: [
                first_non_empty_resolved(record, ADDITIONAL_1),
                first_non_empty_resolved(record, ADDITIONAL_2),
            ],
            piping_class: first_non_empty_resolved(record, PIPING_CLASS),
            size_min: first_non_empty_resolved(record, SIZE_MIN_ANY_UNIT),
            size_max: first_non_empty_resolved(record, SIZE_MAX_ANY_UNIT),
        }
    }

    /// Label for the rating/class row: RATING wins over CLASS
    pub fn rating_label(&self) -> Option<&'static str> {
        if !self.rating.trim().is_empty() {
            Some("RATING")
        } else if !self.class.trim().is_empty() {
            Some("CLASS")
        } else {
            None
        }
    }
}

// =============================================================================
// Bolting
// =============================================================================

mod bolt_rules {
    use super::FieldRule;

    pub const CODE: &[FieldRule] = &[FieldRule::exact(&["Device designation", "Code"])];
    pub const TYPE: &[FieldRule] =
        &[FieldRule::exact(&["Additional Comment", "Type", "Comment"])];
    pub const BOLT_MATERIAL: &[FieldRule] = &[FieldRule::exact(&[
        "Material - Bolts",
        "Material number",
        "Bolt Material",
        "Bolts Material",
    ])];
    pub const NUT_MATERIAL: &[FieldRule] = &[FieldRule::exact(&[
        "Material - Nuts",
        "Nut Material",
        "Nuts Material",
    ])];
    pub const COATING: &[FieldRule] = &[FieldRule::exact(&["Coating"])];
    pub const ACC_TO_STANDARD: &[FieldRule] = &[FieldRule::exact(&[
        "Acc to standard",
        "ACC. TO STANDARD",
        "Material Standard",
    ])];
    pub const REMARKS: &[FieldRule] =
        &[FieldRule::exact(&["Remark 1", "Remark 2", "Remarks"])];
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoltFields {
    pub code: String,
    pub type_text: String,
    pub bolt_material: String,
    pub nut_material: String,
    pub coating: String,
    pub acc_to_standard: String,
    pub remarks: String,
}

impl BoltFields {
    pub fn extract(record: &Record) -> Self {
        use bolt_rules::*;

        Self {
            code: or_name(first_non_empty_resolved(record, CODE), &record.name),
            type_text: first_non_empty_resolved(record, TYPE),
            bolt_material: first_non_empty_resolved(record, BOLT_MATERIAL),
            nut_material: first_non_empty_resolved(record, NUT_MATERIAL),
            coating: first_non_empty_resolved(record, COATING),
            acc_to_standard: first_non_empty_resolved(record, ACC_TO_STANDARD),
            remarks: first_non_empty_resolved(record, REMARKS),
        }
    }
}

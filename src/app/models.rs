//! Data models for catalog records and datasheet categories
//!
//! This module contains the catalog tree as loaded from disk, the flattened
//! records handed to the generators, the case-insensitive attribute map they
//! carry, and the category types produced by classification.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Attribute Map
// =============================================================================

/// Case-insensitive attribute map that keeps insertion order
///
/// Keys compare without regard to case. Inserting a key that already exists
/// under another casing replaces the stored value (last write wins) but keeps
/// the original position, so "first attribute whose key contains ..." scans
/// stay stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "IndexMap<String, String>",
    into = "IndexMap<String, String>"
)]
pub struct AttributeMap {
    entries: IndexMap<String, (String, String)>,
}

impl AttributeMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an attribute
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let folded = key.to_lowercase();
        self.entries.insert(folded, (key, value.into()));
    }

    /// Look up a value by key, ignoring case
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(&key.to_lowercase())
            .map(|(_, value)| value.as_str())
    }

    /// Whether a key is present, ignoring case
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(&key.to_lowercase())
    }

    /// Iterate `(key, value)` pairs in insertion order, with original key casing
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .values()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<IndexMap<String, String>> for AttributeMap {
    fn from(map: IndexMap<String, String>) -> Self {
        let mut attributes = Self::new();
        for (key, value) in map {
            attributes.insert(key, value);
        }
        attributes
    }
}

impl From<AttributeMap> for IndexMap<String, String> {
    fn from(map: AttributeMap) -> Self {
        map.entries.into_values().collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttributeMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut attributes = Self::new();
        for (key, value) in iter {
            attributes.insert(key, value);
        }
        attributes
    }
}

// =============================================================================
// Catalog Tree
// =============================================================================

/// One node of the catalog tree as stored in the catalog document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Node name as shown in the catalog
    pub name: String,

    /// Flat attribute map of the node
    #[serde(default, skip_serializing_if = "AttributeMap::is_empty")]
    pub attributes: AttributeMap,

    /// Child nodes; a node without children is a leaf item
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<CatalogItem>,
}

impl CatalogItem {
    /// Create a node without attributes or children
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder-style attribute insertion
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key, value);
        self
    }

    /// Builder-style child insertion
    pub fn with_child(mut self, child: CatalogItem) -> Self {
        self.children.push(child);
        self
    }

    /// Whether the node has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

// =============================================================================
// Records
// =============================================================================

/// A catalog item prepared for classification and population
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Catalog node name
    pub name: String,

    /// Top-level folder the record was collected under (e.g. "Valves")
    #[serde(default)]
    pub folder: String,

    /// Ancestor folder names from the collection root down to the parent
    #[serde(default)]
    pub path: Vec<String>,

    /// Attributes of the catalog node
    #[serde(default)]
    pub attributes: AttributeMap,
}

impl Record {
    /// Create a record with a name and no attributes
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Build a record from a catalog node
    pub fn from_item(item: &CatalogItem, folder: &str, path: &[String]) -> Self {
        Self {
            name: item.name.clone(),
            folder: folder.to_string(),
            path: path.to_vec(),
            attributes: item.attributes.clone(),
        }
    }

    /// Builder-style attribute insertion
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key, value);
        self
    }

    /// Builder-style folder tag
    pub fn with_folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = folder.into();
        self
    }

    /// Display code: the `Code` attribute, or the name when it is blank
    pub fn code(&self) -> &str {
        match self.attributes.get("Code") {
            Some(code) if !code.trim().is_empty() => code,
            _ => &self.name,
        }
    }
}

// =============================================================================
// Categories
// =============================================================================

/// Datasheet category a record is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    PipingPart,
    Gasket,
    Valve,
    Bolt,
}

impl Category {
    /// All categories in workbook order
    pub const ALL: [Category; 4] = [
        Category::PipingPart,
        Category::Gasket,
        Category::Valve,
        Category::Bolt,
    ];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Category::PipingPart => "Piping part",
            Category::Gasket => "Gasket",
            Category::Valve => "Valve",
            Category::Bolt => "Bolt",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Piping part sub-category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubCategory {
    Pipe,
    Fittings,
    BranchFittings,
    Flanges,
    Other,
}

impl SubCategory {
    /// Section title written on datasheets and summaries
    pub fn title(&self) -> &'static str {
        match self {
            SubCategory::Pipe => "PIPE",
            SubCategory::Fittings => "FITTINGS",
            SubCategory::BranchFittings => "BRANCH FITTINGS",
            SubCategory::Flanges => "FLANGES",
            SubCategory::Other => "PIPING PARTS",
        }
    }

    /// Sub-category for a summary sorting group code ("1".."4")
    pub fn from_group_code(code: &str) -> Option<Self> {
        match code.trim() {
            "1" => Some(SubCategory::Pipe),
            "2" => Some(SubCategory::Fittings),
            "3" => Some(SubCategory::BranchFittings),
            "4" => Some(SubCategory::Flanges),
            _ => None,
        }
    }
}

impl fmt::Display for SubCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

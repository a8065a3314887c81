//! Catalog document and folder lookup

use crate::app::models::CatalogItem;
use crate::config::CatalogConfig;
use crate::{Error, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, info, warn};

/// Name given to the synthesized root when a document lists top-level items
const DEFAULT_ROOT_NAME: &str = "Catalogs";

/// A catalog file holds either the root node or the list of top-level nodes
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Root(CatalogItem),
    Items(Vec<CatalogItem>),
}

/// Loaded catalog tree
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    root: CatalogItem,
}

impl Catalog {
    pub fn new(root: CatalogItem) -> Self {
        Self { root }
    }

    /// Load a catalog document from JSON
    ///
    /// # Arguments
    ///
    /// * `path` - Catalog JSON file; either a root node or an array of
    ///   top-level nodes
    ///
    /// # Returns
    ///
    /// The catalog, or a format error when the document has no items
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            Error::io(format!("Failed to open catalog '{}'", path.display()), e)
        })?;
        let document: CatalogDocument = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| {
                Error::json(path.display().to_string(), "Invalid catalog document", e)
            })?;

        let root = match document {
            CatalogDocument::Root(root) => root,
            CatalogDocument::Items(children) => CatalogItem {
                name: DEFAULT_ROOT_NAME.to_string(),
                children,
                ..CatalogItem::default()
            },
        };

        if root.is_leaf() {
            return Err(Error::catalog_format(format!(
                "Catalog '{}' contains no items",
                path.display()
            )));
        }

        let catalog = Self::new(root);
        info!(
            "Loaded catalog '{}' ({} node(s))",
            path.display(),
            catalog.node_count()
        );
        Ok(catalog)
    }

    pub fn root(&self) -> &CatalogItem {
        &self.root
    }

    /// Total number of nodes below the root
    pub fn node_count(&self) -> usize {
        fn count(node: &CatalogItem) -> usize {
            node.children.iter().map(|c| 1 + count(c)).sum()
        }
        count(&self.root)
    }

    /// Follow folder names from the root, comparing normalized names
    pub fn find_path<S: AsRef<str>>(&self, segments: &[S]) -> Option<&CatalogItem> {
        segments
            .iter()
            .try_fold(&self.root, |node, segment| child(node, segment.as_ref()))
    }

    /// Category folders under the materials folder, in configured order
    ///
    /// Returns `None` when the materials folder itself is missing. Individual
    /// category folders that are missing are skipped with a warning.
    pub fn material_folders(&self, config: &CatalogConfig) -> Option<Vec<&CatalogItem>> {
        let Some(materials) = self.find_path(config.materials_path.as_slice()) else {
            debug!(
                "Materials folder '{}' not found",
                config.materials_path.join(" / ")
            );
            return None;
        };

        let folders = config
            .material_folders
            .iter()
            .filter_map(|name| {
                let folder = child(materials, name);
                if folder.is_none() {
                    warn!("Catalog folder '{}' not found under materials", name);
                }
                folder
            })
            .collect();
        Some(folders)
    }
}

/// Characters dropped from folder names before comparison
const FOLDER_KEY_IGNORED: &[char] = &[
    ' ', '/', '\\', '-', '_', '.', ':', '(', ')', ',', '\'', '"', '&',
];

/// Folder comparison key: lower-case without spaces or punctuation
pub fn normalize_folder_key(name: &str) -> String {
    name.chars()
        .filter(|c| !FOLDER_KEY_IGNORED.contains(c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Direct child of `node` whose normalized name equals `name`'s
pub fn child<'a>(node: &'a CatalogItem, name: &str) -> Option<&'a CatalogItem> {
    let wanted = normalize_folder_key(name);
    node.children
        .iter()
        .find(|candidate| normalize_folder_key(&candidate.name) == wanted)
}

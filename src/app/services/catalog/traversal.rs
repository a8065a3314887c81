//! Depth-first traversal of the catalog tree

use super::document::Catalog;
use crate::app::models::{CatalogItem, Record};
use crate::config::CatalogConfig;
use tracing::{debug, info};

impl Catalog {
    /// Leaf records under the material folders, tagged with their folder
    ///
    /// Falls back to every top-level folder when the materials folder is
    /// missing; a top-level leaf is collected with an empty folder tag.
    pub fn collect_leaf_records(&self, config: &CatalogConfig) -> Vec<Record> {
        let mut records = Vec::new();

        match self.material_folders(config) {
            Some(folders) => {
                for folder in folders {
                    collect_leaves(folder, &folder.name, &mut Vec::new(), &mut records);
                }
            }
            None => {
                info!("Materials folder missing; collecting every top-level folder");
                for top in &self.root().children {
                    if top.is_leaf() {
                        records.push(Record::from_item(top, "", &[]));
                    } else {
                        collect_leaves(top, &top.name, &mut Vec::new(), &mut records);
                    }
                }
            }
        }

        debug!("Collected {} leaf record(s)", records.len());
        records
    }

    /// Leaf records of the material folders only, with no fallback
    pub fn material_records(&self, config: &CatalogConfig) -> Vec<Record> {
        let mut records = Vec::new();
        for folder in self.material_folders(config).unwrap_or_default() {
            collect_leaves(folder, &folder.name, &mut Vec::new(), &mut records);
        }
        records
    }

    /// Every node of the material folders, folders included, depth-first
    ///
    /// Covers the whole tree when the materials folder is missing or holds
    /// none of the configured category folders.
    pub fn walk_nodes(&self, config: &CatalogConfig) -> Vec<&CatalogItem> {
        let mut nodes = Vec::new();
        match self.material_folders(config) {
            Some(folders) if !folders.is_empty() => {
                for folder in folders {
                    push_subtree(folder, &mut nodes);
                }
            }
            _ => {
                for top in &self.root().children {
                    push_subtree(top, &mut nodes);
                }
            }
        }
        nodes
    }
}

fn collect_leaves(
    node: &CatalogItem,
    folder: &str,
    path: &mut Vec<String>,
    out: &mut Vec<Record>,
) {
    path.push(node.name.clone());
    for child in &node.children {
        if child.is_leaf() {
            out.push(Record::from_item(child, folder, path));
        } else {
            collect_leaves(child, folder, path, out);
        }
    }
    path.pop();
}

fn push_subtree<'a>(node: &'a CatalogItem, out: &mut Vec<&'a CatalogItem>) {
    out.push(node);
    for child in &node.children {
        push_subtree(child, out);
    }
}

//! Tests for catalog loading and traversal


use crate::app::models::CatalogItem;

/// Catalog root with the standard materials layout
pub fn create_test_catalog_root() -> CatalogItem {
    CatalogItem::new("Catalogs").with_child(
        CatalogItem::new("JLE").with_child(
            CatalogItem::new("Materials")
                .with_child(
                    CatalogItem::new("Pipe & Fittings")
                        .with_child(
                            CatalogItem::new("Pipes")
                                .with_child(
                                    CatalogItem::new("Pipe 1/2-24")
                                        .with_attribute("Code", "PP-001")
                                        .with_attribute("JLE Pipe Class", "150JX00, 300JX01"),
                                ),
                        )
                        .with_child(
                            CatalogItem::new("Elbow 90").with_attribute("Code", "PP-002"),
                        ),
                )
                .with_child(
                    CatalogItem::new("Valves").with_child(
                        CatalogItem::new("Ball valve")
                            .with_attribute("Code", "BV-1")
                            .with_attribute("JLE Possible Pipe Class", "150JX00"),
                    ),
                )
                .with_child(
                    CatalogItem::new("Bolts and Nuts")
                        .with_child(CatalogItem::new("Stud bolt").with_attribute("Code", "BN-1")),
                ),
        ),
    )
}

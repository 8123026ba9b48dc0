//! Persisted catalog state.

use homecraft_core::{Product, ProductId};
use serde::{Deserialize, Serialize};

fn default_next_id() -> u64 {
    1
}

/// The catalog state as it round-trips through the blob store.
///
/// Every field defaults independently, so blobs written by older layouts
/// still deserialize.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CatalogSnapshot {
    /// Ordered product collection
    #[serde(default)]
    pub products: Vec<Product>,
    /// Id of the product currently selected for editing, if any
    #[serde(default)]
    pub selected: Option<ProductId>,
    /// Next id to assign; strictly greater than every id ever assigned
    #[serde(default = "default_next_id")]
    pub next_id: u64,
}

impl Default for CatalogSnapshot {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            selected: None,
            next_id: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default() {
        let snapshot: CatalogSnapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.products.is_empty());
        assert_eq!(snapshot.selected, None);
        assert_eq!(snapshot.next_id, 1);
    }

    #[test]
    fn test_round_trip() {
        let snapshot = CatalogSnapshot {
            products: vec![Product {
                id: 1.into(),
                title: "Shoe".to_string(),
                img: "http://x/y.png".to_string(),
                price: 100000.0,
                description: "desc".to_string(),
                rate: 4,
            }],
            selected: Some(1.into()),
            next_id: 2,
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: CatalogSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}

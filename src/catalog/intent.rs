//! Intents for the product catalog.

use crate::machine::Intent;

use super::product::{Product, ProductId};

/// Intents that can be dispatched to the catalog reducer.
#[derive(Debug, Clone)]
pub enum CatalogIntent {
    /// Append a product to the end of the catalog.
    Add { product: Product },

    /// Replace every entry matching `product_id` with `updated`, position
    /// preserved. An unknown id is a no-op.
    Edit {
        product_id: ProductId,
        updated: Product,
    },

    /// Remove every entry matching `product_id`. An unknown id is a no-op.
    Delete { product_id: ProductId },
}

impl Intent for CatalogIntent {}

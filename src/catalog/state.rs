//! Catalog state: the ordered product collection.

use crate::machine::Snapshot;

use super::product::{Product, ProductId};

/// Ordered collection of products, insertion order preserved.
///
/// A value of this type is an immutable snapshot: transitions build a new
/// `CatalogState` instead of mutating the previous one, so the view layer
/// can hold a snapshot and read it without synchronization.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogState {
    products: Vec<Product>,
}

impl Snapshot for CatalogState {}

impl CatalogState {
    /// Empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a state from an existing product sequence, keeping its order.
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Consume the state, yielding the product sequence.
    pub fn into_products(self) -> Vec<Product> {
        self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// All products in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// First product matching `id`, if any.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.products.iter().any(|p| &p.id == id)
    }

    /// Category projection: entries whose category equals `filter`, in
    /// original relative order. An empty filter selects the whole catalog.
    ///
    /// This is a derived view, recomputed on every call and never cached,
    /// so it cannot drift from the snapshot it was taken from.
    pub fn filter_by_category(&self, filter: &str) -> Vec<&Product> {
        if filter.is_empty() {
            return self.products.iter().collect();
        }
        self.products
            .iter()
            .filter(|p| p.category == filter)
            .collect()
    }
}

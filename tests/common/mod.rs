//! Shared test helpers.

#![allow(dead_code)]

use chrono::NaiveDate;
use stockroom::catalog::{CatalogState, Product, ProductId};

/// Minimal product with the fields most tests care about.
pub fn make_product(id: &str, category: &str, price: f64) -> Product {
    Product {
        id: ProductId::new(id),
        description: format!("{} item", category),
        category: category.to_string(),
        price,
        can_expire: false,
        expiry_date: None,
        is_on_special: false,
    }
}

/// Product with a shelf life, for tests touching the expiry fields.
pub fn make_perishable(id: &str, category: &str, expires: NaiveDate) -> Product {
    Product {
        id: ProductId::new(id),
        description: format!("{} item", category),
        category: category.to_string(),
        price: 1.0,
        can_expire: true,
        expiry_date: Some(expires),
        is_on_special: false,
    }
}

/// Catalog seeded with the classic three-category fixture.
pub fn seeded_catalog() -> CatalogState {
    CatalogState::from_products(vec![
        make_product("1", "meat", 5.0),
        make_product("2", "vegetables", 2.0),
        make_product("3", "furniture", 120.0),
    ])
}

pub fn ids(state: &CatalogState) -> Vec<&str> {
    state.products().iter().map(|p| p.id.as_str()).collect()
}

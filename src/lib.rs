//! In-memory product catalog store with unidirectional data flow.
//!
//! This crate is the state-machine core of a product catalog editor. A
//! host application (the view layer) dispatches add/edit/delete intents
//! into a [`store::CatalogStore`]; the store applies them through the
//! pure [`catalog::CatalogReducer`] and notifies subscribers with each
//! new snapshot. The catalog itself is never mutated in place: every
//! transition produces a fresh [`catalog::CatalogState`] value.
//!
//! ```
//! use stockroom::catalog::{CatalogIntent, Product, ProductId};
//! use stockroom::store::CatalogStore;
//!
//! let store = CatalogStore::new();
//! store.dispatch(CatalogIntent::Add {
//!     product: Product {
//!         id: ProductId::random(),
//!         description: "Carrots".to_string(),
//!         category: "vegetables".to_string(),
//!         price: 2.0,
//!         can_expire: true,
//!         expiry_date: None,
//!         is_on_special: false,
//!     },
//! });
//! assert_eq!(store.snapshot().len(), 1);
//! ```

pub mod catalog;
pub mod config;
pub mod logging;
pub mod machine;
pub mod store;

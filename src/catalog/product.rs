//! Product records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque product identifier.
///
/// Assigned when the product is created and immutable thereafter. Any
/// string is accepted as an id; [`ProductId::random`] is the recommended
/// source for fresh ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Wrap a caller-supplied id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh id.
    ///
    /// UUIDv4 rather than a wall-clock-derived string, so rapid
    /// successive adds cannot collide.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A single catalog entry.
///
/// Fields other than `id` are free-form; nothing beyond the types is
/// validated. `expiry_date` is only meaningful when `can_expire` is set,
/// but the pairing is not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub description: String,
    /// Exact-match filter key, see `CatalogState::filter_by_category`.
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub can_expire: bool,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_on_special: bool,
}

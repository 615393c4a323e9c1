use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub filter: FilterConfig,
}

/// Store behavior settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// How to admit an `Add` whose id is already in the catalog.
    #[serde(default)]
    pub duplicate_ids: DuplicateIdPolicy,
}

/// Settings for hosts building a category-filter control.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Category names offered by the host's filter dropdown. Filtering
    /// itself accepts any string; this list is only the suggestions.
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            categories: default_categories(),
        }
    }
}

fn default_categories() -> Vec<String> {
    vec![
        "vegetables".to_string(),
        "meat".to_string(),
        "furniture".to_string(),
    ]
}

/// Admission policy for an `Add` whose id is already in the catalog.
///
/// `Allow` reproduces the historical permissive behavior; the other two
/// are opt-in hardenings. All three keep dispatch total: a rejected add
/// degrades to a logged no-op rather than an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateIdPolicy {
    /// Append anyway; the catalog may then hold two entries with one id.
    #[default]
    Allow,
    /// Drop the add.
    Reject,
    /// Rewrite the add into an edit of the existing entry.
    Replace,
}

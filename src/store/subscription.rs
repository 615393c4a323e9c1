//! Subscription bookkeeping for store listeners.

use std::sync::Arc;

use crate::catalog::CatalogState;

/// Identifies a registered listener so it can be torn down again.
///
/// Ids are handed out by `CatalogStore::subscribe` from a monotonic
/// counter and are never reused within one store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

/// Callback invoked with the new snapshot after every applied transition.
pub(crate) type Listener = Arc<dyn Fn(&CatalogState) + Send + Sync>;

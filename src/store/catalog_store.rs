//! Thread-safe catalog container with dispatch/subscribe semantics.
//!
//! The store owns the single process-wide catalog snapshot. View layers
//! hold a cloned handle, dispatch intents into it, and register listeners
//! to re-render after each transition.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::catalog::{CatalogIntent, CatalogReducer, CatalogState};
use crate::config::{CatalogConfig, DuplicateIdPolicy};
use crate::machine::Reducer;

use super::subscription::{Listener, SubscriptionId};

/// Thread-safe catalog store with interior mutability.
///
/// Cloning the store clones the handle, not the catalog: all clones share
/// one snapshot and one listener registry. Intents apply atomically under
/// a write lock, in dispatch order, so concurrent dispatchers observe a
/// single sequential history and no transition ever sees a
/// partially-applied state.
#[derive(Clone)]
pub struct CatalogStore {
    inner: Arc<RwLock<StoreInner>>,
    policy: DuplicateIdPolicy,
}

struct StoreInner {
    state: CatalogState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl CatalogStore {
    /// Create an empty store with the default (permissive) admission policy.
    pub fn new() -> Self {
        Self::with_policy(DuplicateIdPolicy::default())
    }

    /// Create an empty store with an explicit duplicate-id policy.
    pub fn with_policy(policy: DuplicateIdPolicy) -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner {
                state: CatalogState::default(),
                listeners: Vec::new(),
                next_subscription: 0,
            })),
            policy,
        }
    }

    /// Create an empty store configured per `config`.
    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::with_policy(config.store.duplicate_ids)
    }

    /// The admission policy this store was built with.
    pub fn policy(&self) -> DuplicateIdPolicy {
        self.policy
    }

    /// Get a clone of the current snapshot.
    ///
    /// Multiple readers can call this concurrently; the returned value is
    /// detached from the store and safe to read without synchronization.
    pub fn snapshot(&self) -> CatalogState {
        self.inner.read().state.clone()
    }

    /// Apply an intent and notify subscribers.
    ///
    /// The transition runs under the write lock; listeners run after the
    /// lock is released, each receiving the snapshot the transition
    /// produced. Every admitted dispatch notifies, including identity
    /// transitions (edit/delete of an unknown id), so views re-render
    /// deterministically from dispatch alone.
    ///
    /// Returns `true` if the snapshot changed.
    pub fn dispatch(&self, intent: CatalogIntent) -> bool {
        let (changed, snapshot, listeners) = {
            let mut inner = self.inner.write();

            let Some(intent) = admit(self.policy, &inner.state, intent) else {
                return false;
            };

            let next = CatalogReducer::reduce(inner.state.clone(), intent);
            let changed = next != inner.state;
            inner.state = next;

            let listeners: Vec<Listener> = inner
                .listeners
                .iter()
                .map(|(_, listener)| Arc::clone(listener))
                .collect();
            (changed, inner.state.clone(), listeners)
        };

        tracing::debug!(products = snapshot.len(), changed, "Catalog transition applied");

        for listener in &listeners {
            listener(&snapshot);
        }

        changed
    }

    /// Register a listener called after every applied transition.
    ///
    /// Registration is explicit; keep the returned id to tear the
    /// listener down with [`CatalogStore::unsubscribe`] when the view is
    /// discarded. Listeners see post-transition snapshots only, never a
    /// replay of history.
    pub fn subscribe(
        &self,
        listener: impl Fn(&CatalogState) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let mut inner = self.inner.write();
        let id = SubscriptionId(inner.next_subscription);
        inner.next_subscription += 1;
        inner.listeners.push((id, Arc::new(listener)));
        id
    }

    /// Remove a previously registered listener.
    ///
    /// Returns `false` when the id was already removed or never existed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.write();
        let before = inner.listeners.len();
        inner.listeners.retain(|(sid, _)| *sid != id);
        inner.listeners.len() != before
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply the duplicate-id admission policy to an intent.
///
/// Runs under the store's write lock, so the collision check and the
/// transition it gates are one atomic step. Returns the intent to reduce,
/// or `None` when the dispatch is dropped.
fn admit(
    policy: DuplicateIdPolicy,
    state: &CatalogState,
    intent: CatalogIntent,
) -> Option<CatalogIntent> {
    let CatalogIntent::Add { product } = intent else {
        return Some(intent);
    };

    if !state.contains(&product.id) {
        return Some(CatalogIntent::Add { product });
    }

    match policy {
        DuplicateIdPolicy::Allow => Some(CatalogIntent::Add { product }),
        DuplicateIdPolicy::Reject => {
            tracing::warn!(id = %product.id, "Duplicate product id rejected");
            None
        }
        DuplicateIdPolicy::Replace => {
            let product_id = product.id.clone();
            Some(CatalogIntent::Edit {
                product_id,
                updated: product,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Product, ProductId};

    fn product(id: &str) -> Product {
        Product {
            id: ProductId::new(id),
            description: String::new(),
            category: "meat".to_string(),
            price: 5.0,
            can_expire: false,
            expiry_date: None,
            is_on_special: false,
        }
    }

    #[test]
    fn admit_passes_fresh_add_through() {
        let state = CatalogState::default();
        let intent = CatalogIntent::Add {
            product: product("1"),
        };
        assert!(matches!(
            admit(DuplicateIdPolicy::Reject, &state, intent),
            Some(CatalogIntent::Add { .. })
        ));
    }

    #[test]
    fn admit_rewrites_colliding_add_under_replace() {
        let state = CatalogState::from_products(vec![product("1")]);
        let intent = CatalogIntent::Add {
            product: product("1"),
        };
        assert!(matches!(
            admit(DuplicateIdPolicy::Replace, &state, intent),
            Some(CatalogIntent::Edit { .. })
        ));
    }

    #[test]
    fn admit_drops_colliding_add_under_reject() {
        let state = CatalogState::from_products(vec![product("1")]);
        let intent = CatalogIntent::Add {
            product: product("1"),
        };
        assert!(admit(DuplicateIdPolicy::Reject, &state, intent).is_none());
    }

    #[test]
    fn admit_never_touches_edit_or_delete() {
        let state = CatalogState::from_products(vec![product("1")]);
        let intent = CatalogIntent::Delete {
            product_id: ProductId::new("1"),
        };
        assert!(matches!(
            admit(DuplicateIdPolicy::Reject, &state, intent),
            Some(CatalogIntent::Delete { .. })
        ));
    }
}

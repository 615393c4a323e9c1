//! Reducer for the product catalog.

use crate::machine::Reducer;

use super::intent::CatalogIntent;
use super::state::CatalogState;

/// Reducer for catalog transitions.
///
/// Pure function — admission policy, logging, and subscriber notification
/// are handled by the store around the reduce call. `Add` performs no
/// uniqueness check of its own: a colliding id leaves the catalog with
/// two entries sharing that id, and `Edit`/`Delete` then act on all of
/// them.
pub struct CatalogReducer;

impl Reducer for CatalogReducer {
    type State = CatalogState;
    type Intent = CatalogIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let mut products = state.into_products();

        match intent {
            CatalogIntent::Add { product } => {
                products.push(product);
            }

            CatalogIntent::Edit {
                product_id,
                updated,
            } => {
                for slot in products.iter_mut().filter(|p| p.id == product_id) {
                    *slot = updated.clone();
                }
            }

            CatalogIntent::Delete { product_id } => {
                products.retain(|p| p.id != product_id);
            }
        }

        CatalogState::from_products(products)
    }
}

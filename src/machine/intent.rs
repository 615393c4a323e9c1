//! Base trait for intents (requested state changes).

/// Marker trait for intent objects.
///
/// Intents describe a desired change to the catalog, dispatched by the
/// view layer in response to user actions. They carry the full payload
/// of the change and are consumed by a reducer to produce the next
/// snapshot.
pub trait Intent: Send + 'static {}

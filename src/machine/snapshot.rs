//! Base trait for state snapshots.

/// Marker trait for snapshot values.
///
/// Snapshots should be:
/// - Immutable (Clone to create new snapshots)
/// - Self-contained (all data needed to render a view)
/// - Comparable (PartialEq for detecting changes)
pub trait Snapshot: Clone + PartialEq + Default + Send + 'static {}

//! Reducer trait.

use super::intent::Intent;
use super::snapshot::Snapshot;

/// Reducer transforms snapshots based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> State
pub trait Reducer {
    /// The snapshot type this reducer operates on.
    type State: Snapshot;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the next snapshot.
    ///
    /// Total and side-effect-free: every (state, intent) pair maps to a
    /// defined next state, and unmatched cases degrade to identity
    /// rather than failing.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

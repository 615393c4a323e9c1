//! State-machine primitives for unidirectional data flow.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ Snapshot ──→ View
//!    ↑                                 │
//!    └─────────────────────────────────┘
//! ```
//!
//! - **Snapshot**: immutable value holding the catalog at a point in time
//! - **Intent**: a requested state change
//! - **Reducer**: pure function that maps (snapshot, intent) to the next snapshot

mod intent;
mod reducer;
mod snapshot;

pub use intent::Intent;
pub use reducer::Reducer;
pub use snapshot::Snapshot;

//! # Algorithms Module
//!
//! Update verification, snapshot application, the pending update buffer
//! and SSZ merkleization.

pub mod pending_updates;
pub mod snapshot_applier;
pub mod ssz;
pub mod update_verifier;

pub use pending_updates::{PendingUpdates, PushOutcome};
pub use snapshot_applier::apply_update;
pub use ssz::{compute_domain, compute_signing_root, header_root, merkleize};
pub use update_verifier::UpdateVerifier;

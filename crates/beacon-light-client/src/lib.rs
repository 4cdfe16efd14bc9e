//! # Beacon Light Client Sync
//!
//! Sync committee light client for the beacon chain.
//!
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Follow the chain head from a trusted checkpoint without downloading
//! blocks, using:
//! - Block headers signed by the current (or next) sync committee
//! - Aggregate BLS signatures over `compute_signing_root(header, domain)`
//! - Committee rotation at sync committee period boundaries
//!
//! ## Commit Rules
//!
//! | Path | Description |
//! |------|-------------|
//! | Quorum | More than 2/3 of the committee signed a finalized header; commit immediately |
//! | Timeout | No quorum within the update timeout; commit the best-supported pending update |
//!
//! ## Module Structure
//!
//! ```text
//! beacon-light-client/
//! ├── domain/          # Headers, committees, snapshots, updates, errors, invariants
//! ├── algorithms/      # Update verification, snapshot application, pending buffer, SSZ
//! ├── ports/           # API trait (inbound) + crypto/chain-spec/proof/observer traits (outbound)
//! ├── adapters/        # blst, SSZ chain spec, proof checker, tracing/prometheus observers
//! ├── application/     # SyncProtocolService owning snapshot and pending state
//! └── config.rs        # SyncProtocolConfig
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-exports
#[cfg(feature = "metrics")]
pub use adapters::PrometheusObserver;
pub use adapters::{BlstCrypto, PendingProofChecker, SszChainSpec, TracingObserver};
pub use algorithms::{apply_update, PendingUpdates, PushOutcome, UpdateVerifier};
pub use application::SyncProtocolService;
pub use config::SyncProtocolConfig;
pub use domain::{
    BeaconBlockHeader, BlsPublicKey, BlsSignature, BranchKind, CommitKind, CryptoError, Domain,
    DomainType, ForkInfo, LightClientError, LightClientSnapshot, LightClientUpdate,
    ProcessOutcome, ProofStatus, Root, Slot, SyncCommittee, SyncCommitteeBits, SyncState,
    VerifiedUpdate, Version, ZERO_HASH,
};
pub use ports::{
    BranchProofChecker, ChainSpecHelpers, LightClientSyncApi, MockSyncCrypto, NoopObserver,
    ObservedEvent, RecordingObserver, SyncCommitteeCrypto, SyncObserver,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

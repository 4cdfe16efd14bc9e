//! # Outbound Ports
//!
//! Capabilities the sync protocol consumes: BLS crypto, chain-spec
//! helpers, merkle branch checking and an observer for logging/metrics.

use crate::domain::{
    BeaconBlockHeader, BlsPublicKey, BlsSignature, CommitKind, CryptoError, Domain, DomainType,
    ForkInfo, LightClientError, LightClientSnapshot, LightClientUpdate, ProofStatus, Root, Slot,
    VerifiedUpdate,
};
use parking_lot::Mutex;

/// BLS capability. Keys and signatures stay opaque to the core.
pub trait SyncCommitteeCrypto: Send + Sync {
    /// Decoded public key.
    type PublicKey;
    /// Decoded signature.
    type Signature;

    /// Decode and validate a committee member key.
    fn decode_public_key(&self, key: &BlsPublicKey) -> Result<Self::PublicKey, CryptoError>;

    /// Decode an aggregate signature.
    fn decode_signature(&self, signature: &BlsSignature) -> Result<Self::Signature, CryptoError>;

    /// Verify `signature` as the aggregate of all `keys` over `message`.
    fn fast_aggregate_verify(
        &self,
        keys: &[Self::PublicKey],
        signature: &Self::Signature,
        message: &Root,
    ) -> bool;
}

/// Chain-spec helpers. Must match the chain's hashing bit-for-bit.
pub trait ChainSpecHelpers: Send + Sync {
    /// `compute_domain(domain_type, fork_version, genesis_validators_root)`.
    fn compute_domain(&self, domain_type: DomainType, fork: &ForkInfo) -> Result<Domain, CryptoError>;

    /// `compute_signing_root(header, domain)`.
    fn compute_signing_root(
        &self,
        header: &BeaconBlockHeader,
        domain: &Domain,
    ) -> Result<Root, CryptoError>;
}

/// Merkle branch checks for updates that carry proofs.
///
/// Called only when the branch is expected to hold a real proof; the
/// all-zero placeholder branches are checked by the verifier itself.
pub trait BranchProofChecker: Send + Sync {
    /// Check `finality_branch` proves `finality_header` against `header`.
    fn check_finality_branch(
        &self,
        update: &LightClientUpdate,
    ) -> Result<ProofStatus, LightClientError>;

    /// Check `next_sync_committee_branch` proves `next_sync_committee`.
    fn check_next_sync_committee_branch(
        &self,
        update: &LightClientUpdate,
    ) -> Result<ProofStatus, LightClientError>;
}

/// Injected logging / metrics capability. All hooks default to no-ops.
pub trait SyncObserver: Send + Sync {
    /// Update rejected; state unchanged.
    fn on_rejected(&self, _update_slot: Slot, _error: &LightClientError) {}

    /// Verified update added to the pending buffer.
    fn on_buffered(&self, _update: &VerifiedUpdate, _pending: usize) {}

    /// Pending update evicted to make room for a better-supported one.
    fn on_evicted(&self, _update: &VerifiedUpdate) {}

    /// Verified update not buffered because the buffer holds better updates.
    fn on_dropped(&self, _update: &VerifiedUpdate, _pending: usize) {}

    /// Snapshot advanced.
    fn on_committed(&self, _kind: CommitKind, _snapshot: &LightClientSnapshot, _rotated: bool) {}
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl SyncObserver for NoopObserver {}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

/// Length of a compressed BLS public key accepted by the mock.
pub const MOCK_PUBKEY_LEN: usize = 48;
/// Length of a compressed BLS signature accepted by the mock.
pub const MOCK_SIGNATURE_LEN: usize = 96;

/// Mock BLS capability: length-checked decoding, configurable verification.
#[derive(Debug)]
pub struct MockSyncCrypto {
    /// Result returned by `fast_aggregate_verify`.
    pub verify_result: bool,
    /// Every verification seen: (key count, signing root).
    pub verifications: Mutex<Vec<(usize, Root)>>,
}

impl Default for MockSyncCrypto {
    fn default() -> Self {
        Self {
            verify_result: true,
            verifications: Mutex::new(Vec::new()),
        }
    }
}

impl MockSyncCrypto {
    /// Mock whose signatures never verify.
    pub fn rejecting() -> Self {
        Self {
            verify_result: false,
            ..Default::default()
        }
    }

    /// Snapshot of recorded verifications.
    pub fn recorded(&self) -> Vec<(usize, Root)> {
        self.verifications.lock().clone()
    }
}

impl SyncCommitteeCrypto for MockSyncCrypto {
    type PublicKey = Vec<u8>;
    type Signature = Vec<u8>;

    fn decode_public_key(&self, key: &BlsPublicKey) -> Result<Self::PublicKey, CryptoError> {
        if key.as_bytes().len() != MOCK_PUBKEY_LEN {
            return Err(CryptoError::InvalidPublicKey(format!(
                "expected {} bytes, got {}",
                MOCK_PUBKEY_LEN,
                key.as_bytes().len()
            )));
        }
        Ok(key.0.clone())
    }

    fn decode_signature(&self, signature: &BlsSignature) -> Result<Self::Signature, CryptoError> {
        if signature.as_bytes().len() != MOCK_SIGNATURE_LEN {
            return Err(CryptoError::InvalidSignature(format!(
                "expected {} bytes, got {}",
                MOCK_SIGNATURE_LEN,
                signature.as_bytes().len()
            )));
        }
        Ok(signature.0.clone())
    }

    fn fast_aggregate_verify(
        &self,
        keys: &[Self::PublicKey],
        _signature: &Self::Signature,
        message: &Root,
    ) -> bool {
        self.verifications.lock().push((keys.len(), *message));
        self.verify_result
    }
}

/// Event captured by [`RecordingObserver`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ObservedEvent {
    /// Rejection with its reason label.
    Rejected {
        /// Update slot
        slot: Slot,
        /// `LightClientError::reason()`
        reason: &'static str,
    },
    /// Buffered update.
    Buffered {
        /// Update slot
        slot: Slot,
        /// Pending count after buffering
        pending: usize,
    },
    /// Evicted update.
    Evicted {
        /// Update slot
        slot: Slot,
    },
    /// Dropped update.
    Dropped {
        /// Update slot
        slot: Slot,
    },
    /// Snapshot commit.
    Committed {
        /// Commit path
        kind: CommitKind,
        /// New snapshot slot
        slot: Slot,
        /// Committees rotated
        rotated: bool,
    },
}

/// Observer that records every event, for assertions.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<ObservedEvent>>,
}

impl RecordingObserver {
    /// Recorded events in order.
    pub fn events(&self) -> Vec<ObservedEvent> {
        self.events.lock().clone()
    }
}

impl SyncObserver for RecordingObserver {
    fn on_rejected(&self, update_slot: Slot, error: &LightClientError) {
        self.events.lock().push(ObservedEvent::Rejected {
            slot: update_slot,
            reason: error.reason(),
        });
    }

    fn on_buffered(&self, update: &VerifiedUpdate, pending: usize) {
        self.events.lock().push(ObservedEvent::Buffered {
            slot: update.slot(),
            pending,
        });
    }

    fn on_evicted(&self, update: &VerifiedUpdate) {
        self.events
            .lock()
            .push(ObservedEvent::Evicted { slot: update.slot() });
    }

    fn on_dropped(&self, update: &VerifiedUpdate, _pending: usize) {
        self.events
            .lock()
            .push(ObservedEvent::Dropped { slot: update.slot() });
    }

    fn on_committed(&self, kind: CommitKind, snapshot: &LightClientSnapshot, rotated: bool) {
        self.events.lock().push(ObservedEvent::Committed {
            kind,
            slot: snapshot.slot(),
            rotated,
        });
    }
}

//! # Domain Value Objects
//!
//! Immutable value types for the light client sync protocol.

use serde::{Deserialize, Serialize};

/// Slot number.
pub type Slot = u64;

/// 32-byte SSZ root / SHA-256 digest.
pub type Root = [u8; 32];

/// Fork version (4 bytes).
pub type Version = [u8; 4];

/// Signature domain type (4 bytes).
pub type DomainType = [u8; 4];

/// Signature domain (domain type || fork data root prefix).
pub type Domain = [u8; 32];

/// The all-zero root.
pub const ZERO_HASH: Root = [0u8; 32];

/// Compressed BLS public key bytes, opaque to the core.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlsPublicKey(pub Vec<u8>);

impl BlsPublicKey {
    /// Wrap raw key bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Compressed BLS signature bytes, opaque to the core.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlsSignature(pub Vec<u8>);

impl BlsSignature {
    /// Wrap raw signature bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// True if no bytes were supplied.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Outcome of a merkle branch check.
///
/// `ProofPending` marks a branch whose inclusion proof is not verified yet;
/// a checker that completes the verification returns `ProofVerified`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProofStatus {
    /// No proof supplied and none required (all-zero branch).
    NoProofExpected,
    /// Proof supplied but inclusion not checked.
    ProofPending,
    /// Inclusion proof checked against the header's state root.
    ProofVerified,
}

/// Which branch of an update a proof belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BranchKind {
    /// `finality_branch`, proving `finality_header`.
    Finality,
    /// `next_sync_committee_branch`, proving `next_sync_committee`.
    NextSyncCommittee,
}

impl std::fmt::Display for BranchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BranchKind::Finality => write!(f, "finality"),
            BranchKind::NextSyncCommittee => write!(f, "next sync committee"),
        }
    }
}

/// Why a snapshot commit happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommitKind {
    /// Supermajority of the committee signed an update with a finality proof.
    Quorum,
    /// Update timeout elapsed; best pending update was committed.
    Timeout,
}

impl CommitKind {
    /// Short label for logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitKind::Quorum => "quorum",
            CommitKind::Timeout => "timeout",
        }
    }
}

/// Service state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SyncState {
    /// Snapshot stable, no pending updates.
    Idle,
    /// Pending updates buffered, waiting for quorum or timeout.
    Accumulating,
}

/// Result of a successful `process_update` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProcessOutcome {
    /// Update buffered; no snapshot change.
    Buffered {
        /// Pending updates after buffering.
        pending: usize,
    },
    /// Update verified but not kept: the buffer is full of better-supported updates.
    Dropped {
        /// Pending updates (unchanged).
        pending: usize,
    },
    /// Snapshot advanced.
    Committed {
        /// Commit path taken.
        kind: CommitKind,
        /// New snapshot header slot.
        slot: Slot,
        /// Committees rotated by this commit.
        rotated: bool,
    },
}

impl ProcessOutcome {
    /// True if the snapshot changed.
    pub fn is_commit(&self) -> bool {
        matches!(self, ProcessOutcome::Committed { .. })
    }
}

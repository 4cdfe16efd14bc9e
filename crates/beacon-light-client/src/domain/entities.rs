//! # Domain Entities
//!
//! Core entities for the light client sync protocol: headers, sync
//! committees, the trusted snapshot and candidate updates.

use super::errors::LightClientError;
use super::value_objects::{BlsPublicKey, BlsSignature, ProofStatus, Root, Slot, Version, ZERO_HASH};
use bitvec::prelude::*;
use serde::{Deserialize, Serialize};

/// Sync committee participation bits, one per committee member.
pub type SyncCommitteeBits = BitVec<u8, Lsb0>;

/// Beacon block header.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeaconBlockHeader {
    /// Slot of the block.
    pub slot: Slot,
    /// Index of the proposing validator.
    pub proposer_index: u64,
    /// Root of the parent block.
    pub parent_root: Root,
    /// Post-state root.
    pub state_root: Root,
    /// Block body root.
    pub body_root: Root,
}

impl BeaconBlockHeader {
    /// Header at `slot` with the given state root; other fields zero.
    pub fn at_slot(slot: Slot, state_root: Root) -> Self {
        Self {
            slot,
            state_root,
            ..Default::default()
        }
    }

    /// True for the zero-valued header, i.e. "no finality proof supplied".
    pub fn is_zero(&self) -> bool {
        self.slot == 0
            && self.proposer_index == 0
            && self.parent_root == ZERO_HASH
            && self.state_root == ZERO_HASH
            && self.body_root == ZERO_HASH
    }
}

/// Sync committee: ordered public keys, replaced wholesale on rotation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncCommittee {
    pubkeys: Vec<BlsPublicKey>,
}

impl SyncCommittee {
    /// Create a committee from its ordered members.
    pub fn new(pubkeys: Vec<BlsPublicKey>) -> Self {
        Self { pubkeys }
    }

    /// Ordered member keys.
    pub fn pubkeys(&self) -> &[BlsPublicKey] {
        &self.pubkeys
    }

    /// Member count.
    pub fn len(&self) -> usize {
        self.pubkeys.len()
    }

    /// True if the committee has no members.
    pub fn is_empty(&self) -> bool {
        self.pubkeys.is_empty()
    }

    /// Keys of the members whose participation bit is set.
    pub fn participants<'a>(
        &'a self,
        bits: &'a SyncCommitteeBits,
    ) -> impl Iterator<Item = &'a BlsPublicKey> + 'a {
        self.pubkeys
            .iter()
            .zip(bits.iter().by_vals())
            .filter_map(|(pk, set)| set.then_some(pk))
    }
}

/// Fork information carried by an update.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForkInfo {
    /// Fork version the committee signed under.
    pub current_version: Version,
    /// Genesis validators root mixed into the signing domain.
    pub genesis_validators_root: Root,
}

impl ForkInfo {
    /// Fork info for `current_version` with a zero genesis validators root.
    pub fn new(current_version: Version) -> Self {
        Self {
            current_version,
            genesis_validators_root: ZERO_HASH,
        }
    }
}

/// The light client's trusted view of the chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightClientSnapshot {
    /// Latest trusted header.
    pub header: BeaconBlockHeader,
    /// Committee signing in the snapshot's period.
    pub current_sync_committee: SyncCommittee,
    /// Committee signing in the following period.
    pub next_sync_committee: SyncCommittee,
}

impl LightClientSnapshot {
    /// Snapshot from a trusted checkpoint.
    pub fn new(
        header: BeaconBlockHeader,
        current_sync_committee: SyncCommittee,
        next_sync_committee: SyncCommittee,
    ) -> Self {
        Self {
            header,
            current_sync_committee,
            next_sync_committee,
        }
    }

    /// Snapshot header slot.
    pub fn slot(&self) -> Slot {
        self.header.slot
    }
}

/// Candidate update received from the network.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightClientUpdate {
    /// Attested header.
    pub header: BeaconBlockHeader,
    /// Finalized header, zero-valued when no finality proof is supplied.
    pub finality_header: BeaconBlockHeader,
    /// Inclusion proof of `finality_header`.
    pub finality_branch: Vec<Root>,
    /// Committee for the period after the update's period.
    pub next_sync_committee: SyncCommittee,
    /// Inclusion proof of `next_sync_committee`.
    pub next_sync_committee_branch: Vec<Root>,
    /// Which committee members signed.
    pub sync_committee_bits: SyncCommitteeBits,
    /// Aggregate signature of the participating members.
    pub sync_committee_signature: BlsSignature,
    /// Fork the signature was produced under.
    pub fork: ForkInfo,
}

impl LightClientUpdate {
    /// Number of participating committee members.
    pub fn participants(&self) -> u64 {
        self.sync_committee_bits.count_ones() as u64
    }

    /// Size of the participation bitfield.
    pub fn committee_bits_len(&self) -> u64 {
        self.sync_committee_bits.len() as u64
    }

    /// True if a finality header was supplied.
    pub fn has_finality_proof(&self) -> bool {
        !self.finality_header.is_zero()
    }
}

/// An update that passed verification against a specific snapshot.
///
/// Only the update verifier constructs this type, so anything holding one
/// has been verified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifiedUpdate {
    update: LightClientUpdate,
    participants: u64,
    finality_proof: ProofStatus,
    committee_proof: ProofStatus,
}

impl VerifiedUpdate {
    pub(crate) fn new(
        update: LightClientUpdate,
        finality_proof: ProofStatus,
        committee_proof: ProofStatus,
    ) -> Self {
        let participants = update.participants();
        Self {
            update,
            participants,
            finality_proof,
            committee_proof,
        }
    }

    /// The verified update.
    pub fn update(&self) -> &LightClientUpdate {
        &self.update
    }

    /// Participating committee members.
    pub fn participants(&self) -> u64 {
        self.participants
    }

    /// Finality branch check result.
    pub fn finality_proof(&self) -> ProofStatus {
        self.finality_proof
    }

    /// Next committee branch check result.
    pub fn committee_proof(&self) -> ProofStatus {
        self.committee_proof
    }

    /// Attested header slot.
    pub fn slot(&self) -> Slot {
        self.update.header.slot
    }

    /// Unwrap the update.
    pub fn into_inner(self) -> LightClientUpdate {
        self.update
    }
}

/// Check a committee has the configured size.
pub fn ensure_committee_size(
    committee: &SyncCommittee,
    expected: usize,
) -> Result<(), LightClientError> {
    if committee.len() != expected {
        return Err(LightClientError::InvalidCommitteeSize {
            got: committee.len(),
            expected,
        });
    }
    Ok(())
}

//! Shared fixtures for unit tests.

use bitvec::prelude::*;

use crate::domain::{
    BeaconBlockHeader, BlsPublicKey, BlsSignature, ForkInfo, LightClientSnapshot,
    LightClientUpdate, Slot, SyncCommittee, ZERO_HASH,
};

/// Committee size used by `SyncProtocolConfig::for_testing`.
pub const TEST_COMMITTEE_SIZE: usize = 10;

/// Committee of `size` distinct 48-byte keys tagged with `tag`.
pub fn test_committee(tag: u8, size: usize) -> SyncCommittee {
    SyncCommittee::new(
        (0..size)
            .map(|i| {
                let mut key = vec![tag; 48];
                key[1] = i as u8;
                BlsPublicKey::new(key)
            })
            .collect(),
    )
}

/// Snapshot at `slot` with current committee C0 and next committee C1.
pub fn test_snapshot(slot: Slot) -> LightClientSnapshot {
    LightClientSnapshot::new(
        BeaconBlockHeader::at_slot(slot, [0x11; 32]),
        test_committee(0xC0, TEST_COMMITTEE_SIZE),
        test_committee(0xC1, TEST_COMMITTEE_SIZE),
    )
}

/// Update at `slot` signed by the first `participants` members, no finality proof.
pub fn test_update(slot: Slot, participants: usize) -> LightClientUpdate {
    let mut bits = bitvec![u8, Lsb0; 0; TEST_COMMITTEE_SIZE];
    bits[..participants].fill(true);

    LightClientUpdate {
        header: BeaconBlockHeader::at_slot(slot, [slot as u8; 32]),
        finality_header: BeaconBlockHeader::default(),
        finality_branch: vec![ZERO_HASH; 6],
        next_sync_committee: test_committee(0xC2, TEST_COMMITTEE_SIZE),
        next_sync_committee_branch: vec![ZERO_HASH; 5],
        sync_committee_bits: bits,
        sync_committee_signature: BlsSignature::new(vec![0xAB; 96]),
        fork: ForkInfo::new([1, 0, 0, 0]),
    }
}

/// Attach a finality header (distinct from the attested header) and branch.
pub fn with_finality(mut update: LightClientUpdate) -> LightClientUpdate {
    update.finality_header = BeaconBlockHeader::at_slot(update.header.slot.saturating_sub(8), [0xF1; 32]);
    update.finality_branch = vec![[0x22; 32]; 6];
    update
}

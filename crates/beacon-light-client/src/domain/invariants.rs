//! # Domain Invariants
//!
//! Rules every accepted update and every snapshot must satisfy.

use super::errors::LightClientError;
use super::value_objects::{BranchKind, Root, Slot};

/// Sync committee period containing `slot`.
///
/// `slots_per_period` is validated non-zero by the configuration.
pub fn compute_sync_committee_period(slot: Slot, slots_per_period: u64) -> u64 {
    slot / slots_per_period
}

/// Invariant: the snapshot header slot never decreases.
pub fn invariant_slot_order(update_slot: Slot, snapshot_slot: Slot) -> Result<(), LightClientError> {
    if update_slot < snapshot_slot {
        return Err(LightClientError::SlotRegression {
            update_slot,
            snapshot_slot,
        });
    }
    Ok(())
}

/// Invariant: an update belongs to the snapshot's period or the next one.
pub fn invariant_period_eligible(
    update_period: u64,
    snapshot_period: u64,
) -> Result<(), LightClientError> {
    if update_period != snapshot_period && update_period != snapshot_period.saturating_add(1) {
        return Err(LightClientError::IneligiblePeriod {
            update_period,
            snapshot_period,
        });
    }
    Ok(())
}

/// Invariant: a branch that carries no proof is all `zero_hash`.
pub fn invariant_zero_branch(
    branch: &[Root],
    zero_hash: &Root,
    kind: BranchKind,
) -> Result<(), LightClientError> {
    if branch.iter().any(|node| node != zero_hash) {
        return Err(LightClientError::InvalidBranchProof(kind));
    }
    Ok(())
}

/// Strict two-thirds supermajority: `voted * 3 > total * 2`.
pub fn has_supermajority(voted: u64, total: u64) -> bool {
    (voted as u128) * 3 > (total as u128) * 2
}

//! # Snapshot Application
//!
//! Applies a verified update to the snapshot it was verified against.
//! No re-validation happens here.

use crate::config::SyncProtocolConfig;
use crate::domain::{compute_sync_committee_period, LightClientSnapshot, VerifiedUpdate};

/// Apply `update` to `snapshot`, returning the new snapshot and whether
/// the committees rotated.
///
/// Consumes the update, so the same verified value cannot be applied twice.
pub fn apply_update(
    snapshot: &LightClientSnapshot,
    update: VerifiedUpdate,
    config: &SyncProtocolConfig,
) -> (LightClientSnapshot, bool) {
    let slots_per_period = config.slots_per_sync_committee_period();
    let snapshot_period = compute_sync_committee_period(snapshot.header.slot, slots_per_period);
    let update = update.into_inner();
    let update_period = compute_sync_committee_period(update.header.slot, slots_per_period);

    if snapshot_period.checked_add(1) == Some(update_period) {
        let next = LightClientSnapshot {
            header: update.header,
            current_sync_committee: snapshot.next_sync_committee.clone(),
            next_sync_committee: update.next_sync_committee,
        };
        return (next, true);
    }

    let next = LightClientSnapshot {
        header: update.header,
        current_sync_committee: snapshot.current_sync_committee.clone(),
        next_sync_committee: snapshot.next_sync_committee.clone(),
    };
    (next, false)
}

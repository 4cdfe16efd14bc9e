//! Tracing Observer Adapter
//!
//! Implements `SyncObserver` by emitting structured `tracing` events.

use crate::domain::{CommitKind, LightClientError, LightClientSnapshot, Slot, VerifiedUpdate};
use crate::ports::outbound::SyncObserver;
use tracing::{debug, info, warn};

/// Observer logging every sync protocol event.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl SyncObserver for TracingObserver {
    fn on_rejected(&self, update_slot: Slot, error: &LightClientError) {
        warn!(
            update_slot,
            reason = error.reason(),
            error = %error,
            "[light-client] Rejected sync committee update"
        );
    }

    fn on_buffered(&self, update: &VerifiedUpdate, pending: usize) {
        debug!(
            update_slot = update.slot(),
            participants = update.participants(),
            pending,
            "[light-client] Buffered update awaiting quorum or timeout"
        );
    }

    fn on_evicted(&self, update: &VerifiedUpdate) {
        debug!(
            update_slot = update.slot(),
            participants = update.participants(),
            "[light-client] Evicted weakest pending update"
        );
    }

    fn on_dropped(&self, update: &VerifiedUpdate, pending: usize) {
        debug!(
            update_slot = update.slot(),
            participants = update.participants(),
            pending,
            "[light-client] Pending buffer full, update not kept"
        );
    }

    fn on_committed(&self, kind: CommitKind, snapshot: &LightClientSnapshot, rotated: bool) {
        info!(
            commit = kind.as_str(),
            slot = snapshot.header.slot,
            rotated,
            "[light-client] Snapshot advanced"
        );
    }
}

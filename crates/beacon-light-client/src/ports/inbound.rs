//! # Inbound Ports
//!
//! API trait defining what the light client sync protocol offers the rest
//! of the client.

use crate::domain::{
    LightClientError, LightClientSnapshot, LightClientUpdate, ProcessOutcome, Slot, SyncState,
};

/// Light client sync API - inbound port.
pub trait LightClientSyncApi: Send + Sync {
    /// Verify an update and buffer or commit it.
    ///
    /// `current_slot` comes from the caller's slot clock and must be
    /// non-decreasing across calls.
    ///
    /// # Errors
    /// Any rejection from update verification. State is unchanged on error.
    fn process_update(
        &self,
        update: LightClientUpdate,
        current_slot: Slot,
    ) -> Result<ProcessOutcome, LightClientError>;

    /// Copy of the current trusted snapshot.
    fn snapshot(&self) -> LightClientSnapshot;

    /// Current state machine state.
    fn state(&self) -> SyncState;

    /// Number of buffered, uncommitted updates.
    fn pending_len(&self) -> usize;
}

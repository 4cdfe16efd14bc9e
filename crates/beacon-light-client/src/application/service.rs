//! # Sync Protocol Service
//!
//! Owns the trusted snapshot and the pending update buffer, and decides
//! when a verified update is committed.
//!
//! ## Commit Policy
//!
//! | Path | Condition | Committed update |
//! |------|-----------|------------------|
//! | Quorum | `voted * 3 > total * 2`, a finality header supplied, and distinct from the attested header | The incoming update |
//! | Timeout | `current_slot > snapshot.slot + light_client_update_timeout` | Pending update with most participants (first seen wins ties) |
//!
//! Every commit empties the pending buffer, so buffered updates are always
//! verified against the snapshot they would be applied to.
//!
//! ## Concurrency
//!
//! The whole of `process_update` runs under one lock. Concurrent callers
//! are serialized; readers never observe a half-applied commit.

use parking_lot::Mutex;
use std::sync::Arc;

use crate::adapters::{PendingProofChecker, SszChainSpec, TracingObserver};
use crate::algorithms::{apply_update, PendingUpdates, PushOutcome, UpdateVerifier};
use crate::config::SyncProtocolConfig;
use crate::domain::{
    compute_sync_committee_period, ensure_committee_size, has_supermajority, CommitKind,
    LightClientError, LightClientSnapshot, LightClientUpdate, ProcessOutcome, Slot, SyncState,
    VerifiedUpdate,
};
use crate::ports::{
    BranchProofChecker, ChainSpecHelpers, LightClientSyncApi, SyncCommitteeCrypto, SyncObserver,
};

/// Mutable protocol state, guarded by the service lock.
#[derive(Debug)]
struct SyncProtocolState {
    snapshot: LightClientSnapshot,
    pending: PendingUpdates,
}

/// Light client sync protocol service.
pub struct SyncProtocolService<C, H = SszChainSpec, P = PendingProofChecker> {
    config: SyncProtocolConfig,
    crypto: Arc<C>,
    chain_spec: Arc<H>,
    proof_checker: Arc<P>,
    observer: Arc<dyn SyncObserver>,
    state: Mutex<SyncProtocolState>,
}

impl<C: SyncCommitteeCrypto> SyncProtocolService<C, SszChainSpec, PendingProofChecker> {
    /// Service with SSZ chain-spec helpers, the pending proof checker and
    /// tracing output.
    pub fn with_defaults(
        config: SyncProtocolConfig,
        checkpoint: LightClientSnapshot,
        crypto: C,
    ) -> Result<Self, LightClientError> {
        Self::new(
            config,
            checkpoint,
            Arc::new(crypto),
            Arc::new(SszChainSpec),
            Arc::new(PendingProofChecker),
            Arc::new(TracingObserver),
        )
    }
}

impl<C, H, P> SyncProtocolService<C, H, P>
where
    C: SyncCommitteeCrypto,
    H: ChainSpecHelpers,
    P: BranchProofChecker,
{
    /// Create a service from a trusted checkpoint snapshot.
    ///
    /// # Errors
    /// - `InvalidConfig` if the configuration is inconsistent
    /// - `InvalidCheckpoint` if a checkpoint committee has the wrong size
    pub fn new(
        config: SyncProtocolConfig,
        checkpoint: LightClientSnapshot,
        crypto: Arc<C>,
        chain_spec: Arc<H>,
        proof_checker: Arc<P>,
        observer: Arc<dyn SyncObserver>,
    ) -> Result<Self, LightClientError> {
        config.validate()?;
        ensure_committee_size(&checkpoint.current_sync_committee, config.sync_committee_size)
            .map_err(|e| LightClientError::InvalidCheckpoint(format!("current committee: {e}")))?;
        ensure_committee_size(&checkpoint.next_sync_committee, config.sync_committee_size)
            .map_err(|e| LightClientError::InvalidCheckpoint(format!("next committee: {e}")))?;

        tracing::info!(
            slot = checkpoint.header.slot,
            committee_size = config.sync_committee_size,
            "[light-client] Initialized from checkpoint"
        );

        let pending = PendingUpdates::new(config.max_pending_updates);
        Ok(Self {
            config,
            crypto,
            chain_spec,
            proof_checker,
            observer,
            state: Mutex::new(SyncProtocolState {
                snapshot: checkpoint,
                pending,
            }),
        })
    }

    /// Protocol configuration.
    pub fn config(&self) -> &SyncProtocolConfig {
        &self.config
    }

    /// Sync committee period of the current snapshot.
    pub fn current_period(&self) -> u64 {
        let slot = self.state.lock().snapshot.header.slot;
        compute_sync_committee_period(slot, self.config.slots_per_sync_committee_period())
    }

    fn verifier(&self) -> UpdateVerifier<'_, C, H, P> {
        UpdateVerifier::new(
            &self.config,
            self.crypto.as_ref(),
            self.chain_spec.as_ref(),
            self.proof_checker.as_ref(),
        )
    }

    /// Supermajority over a supplied finality header that differs from the
    /// attested header. Without a finality proof only the timeout commits.
    fn reaches_quorum(update: &VerifiedUpdate) -> bool {
        let update_ref = update.update();
        has_supermajority(update.participants(), update_ref.committee_bits_len())
            && update_ref.has_finality_proof()
            && update_ref.header != update_ref.finality_header
    }

    fn commit(
        &self,
        state: &mut SyncProtocolState,
        update: VerifiedUpdate,
        kind: CommitKind,
    ) -> ProcessOutcome {
        let (snapshot, rotated) = apply_update(&state.snapshot, update, &self.config);
        state.snapshot = snapshot;
        state.pending.clear();
        self.observer.on_committed(kind, &state.snapshot, rotated);
        ProcessOutcome::Committed {
            kind,
            slot: state.snapshot.header.slot,
            rotated,
        }
    }

    fn buffer(&self, state: &mut SyncProtocolState, update: VerifiedUpdate) -> ProcessOutcome {
        match state.pending.push(update) {
            PushOutcome::Appended => {}
            PushOutcome::Replaced(evicted) => self.observer.on_evicted(&evicted),
            PushOutcome::Rejected(dropped) => {
                let pending = state.pending.len();
                self.observer.on_dropped(&dropped, pending);
                return ProcessOutcome::Dropped { pending };
            }
        }

        let pending = state.pending.len();
        if let Some(latest) = state.pending.latest() {
            self.observer.on_buffered(latest, pending);
        }
        ProcessOutcome::Buffered { pending }
    }
}

impl<C, H, P> LightClientSyncApi for SyncProtocolService<C, H, P>
where
    C: SyncCommitteeCrypto,
    H: ChainSpecHelpers,
    P: BranchProofChecker,
{
    fn process_update(
        &self,
        update: LightClientUpdate,
        current_slot: Slot,
    ) -> Result<ProcessOutcome, LightClientError> {
        let mut state = self.state.lock();
        let update_slot = update.header.slot;

        let verified = match self.verifier().verify(update, &state.snapshot) {
            Ok(verified) => verified,
            Err(err) => {
                self.observer.on_rejected(update_slot, &err);
                return Err(err);
            }
        };

        if Self::reaches_quorum(&verified) {
            return Ok(self.commit(&mut state, verified, CommitKind::Quorum));
        }

        let outcome = self.buffer(&mut state, verified);

        let deadline = state
            .snapshot
            .header
            .slot
            .saturating_add(self.config.light_client_update_timeout);
        if current_slot > deadline {
            if let Some(best) = state.pending.take_best() {
                return Ok(self.commit(&mut state, best, CommitKind::Timeout));
            }
        }

        Ok(outcome)
    }

    fn snapshot(&self) -> LightClientSnapshot {
        self.state.lock().snapshot.clone()
    }

    fn state(&self) -> SyncState {
        if self.state.lock().pending.is_empty() {
            SyncState::Idle
        } else {
            SyncState::Accumulating
        }
    }

    fn pending_len(&self) -> usize {
        self.state.lock().pending.len()
    }
}

//! Prometheus Observer Adapter
//!
//! Implements `SyncObserver` with Prometheus metrics registered on a
//! caller-supplied registry.
//!
//! ## Metrics Exported
//!
//! - `light_client_updates_rejected_total{reason}` - Rejected updates by reason
//! - `light_client_updates_buffered_total` - Updates added to the pending buffer
//! - `light_client_updates_evicted_total` - Pending updates evicted by the bound
//! - `light_client_updates_dropped_total` - Verified updates not kept by the bound
//! - `light_client_commits_total{kind}` - Snapshot commits by path (quorum/timeout)
//! - `light_client_committee_rotations_total` - Commits that rotated committees
//! - `light_client_pending_updates` - Current pending buffer size
//! - `light_client_snapshot_slot` - Current snapshot header slot

use crate::domain::{CommitKind, LightClientError, LightClientSnapshot, Slot, VerifiedUpdate};
use crate::ports::outbound::SyncObserver;
use prometheus::{IntCounter, IntCounterVec, IntGauge, Opts, Registry};

/// Observer exporting sync protocol metrics.
#[derive(Clone, Debug)]
pub struct PrometheusObserver {
    rejected: IntCounterVec,
    buffered: IntCounter,
    evicted: IntCounter,
    dropped: IntCounter,
    commits: IntCounterVec,
    rotations: IntCounter,
    pending: IntGauge,
    snapshot_slot: IntGauge,
}

impl PrometheusObserver {
    /// Create the metrics and register them on `registry`.
    pub fn new(registry: &Registry) -> Result<Self, prometheus::Error> {
        let observer = Self {
            rejected: IntCounterVec::new(
                Opts::new(
                    "light_client_updates_rejected_total",
                    "Total number of rejected light client updates",
                ),
                &["reason"],
            )?,
            buffered: IntCounter::new(
                "light_client_updates_buffered_total",
                "Total number of updates added to the pending buffer",
            )?,
            evicted: IntCounter::new(
                "light_client_updates_evicted_total",
                "Total number of pending updates evicted by the buffer bound",
            )?,
            dropped: IntCounter::new(
                "light_client_updates_dropped_total",
                "Total number of verified updates not kept by the buffer bound",
            )?,
            commits: IntCounterVec::new(
                Opts::new("light_client_commits_total", "Total number of snapshot commits"),
                &["kind"],
            )?,
            rotations: IntCounter::new(
                "light_client_committee_rotations_total",
                "Total number of sync committee rotations",
            )?,
            pending: IntGauge::new(
                "light_client_pending_updates",
                "Number of buffered, uncommitted updates",
            )?,
            snapshot_slot: IntGauge::new(
                "light_client_snapshot_slot",
                "Header slot of the trusted snapshot",
            )?,
        };

        registry.register(Box::new(observer.rejected.clone()))?;
        registry.register(Box::new(observer.buffered.clone()))?;
        registry.register(Box::new(observer.evicted.clone()))?;
        registry.register(Box::new(observer.dropped.clone()))?;
        registry.register(Box::new(observer.commits.clone()))?;
        registry.register(Box::new(observer.rotations.clone()))?;
        registry.register(Box::new(observer.pending.clone()))?;
        registry.register(Box::new(observer.snapshot_slot.clone()))?;

        Ok(observer)
    }
}

impl SyncObserver for PrometheusObserver {
    fn on_rejected(&self, _update_slot: Slot, error: &LightClientError) {
        self.rejected.with_label_values(&[error.reason()]).inc();
    }

    fn on_buffered(&self, _update: &VerifiedUpdate, pending: usize) {
        self.buffered.inc();
        self.pending.set(i64::try_from(pending).unwrap_or(i64::MAX));
    }

    fn on_evicted(&self, _update: &VerifiedUpdate) {
        self.evicted.inc();
    }

    fn on_dropped(&self, _update: &VerifiedUpdate, _pending: usize) {
        self.dropped.inc();
    }

    fn on_committed(&self, kind: CommitKind, snapshot: &LightClientSnapshot, rotated: bool) {
        self.commits.with_label_values(&[kind.as_str()]).inc();
        if rotated {
            self.rotations.inc();
        }
        self.pending.set(0);
        self.snapshot_slot
            .set(i64::try_from(snapshot.header.slot).unwrap_or(i64::MAX));
    }
}

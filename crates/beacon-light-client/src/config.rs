//! # Sync Protocol Configuration
//!
//! Chain constants and service limits, supplied by the embedding client.

use serde::{Deserialize, Serialize};

use crate::domain::{DomainType, LightClientError, Root, ZERO_HASH};

/// Environment variable overriding `min_sync_committee_participants`.
pub const ENV_MIN_PARTICIPANTS: &str = "LC_MIN_SYNC_COMMITTEE_PARTICIPANTS";
/// Environment variable overriding `light_client_update_timeout`.
pub const ENV_UPDATE_TIMEOUT: &str = "LC_UPDATE_TIMEOUT_SLOTS";
/// Environment variable overriding `max_pending_updates`.
pub const ENV_MAX_PENDING: &str = "LC_MAX_PENDING_UPDATES";

/// Light client sync protocol configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncProtocolConfig {
    /// Members per sync committee.
    pub sync_committee_size: usize,

    /// Slots per epoch. With `1`, a period is `epochs_per_sync_committee_period` slots.
    pub slots_per_epoch: u64,

    /// Epochs per sync committee period.
    pub epochs_per_sync_committee_period: u64,

    /// Minimum participating members for an update to be considered.
    pub min_sync_committee_participants: u64,

    /// Slots after the snapshot slot before the best pending update is committed.
    pub light_client_update_timeout: u64,

    /// Signature domain type of sync committee messages.
    pub domain_sync_committee: DomainType,

    /// Value of an empty branch node.
    pub zero_hash: Root,

    /// Maximum buffered (verified, uncommitted) updates.
    pub max_pending_updates: usize,

    /// Reject updates whose branch proofs are only `ProofPending`.
    pub require_verified_proofs: bool,
}

impl Default for SyncProtocolConfig {
    fn default() -> Self {
        Self {
            sync_committee_size: 512,
            slots_per_epoch: 32,
            epochs_per_sync_committee_period: 256,
            min_sync_committee_participants: 1,
            light_client_update_timeout: 32 * 256,
            domain_sync_committee: [0x07, 0x00, 0x00, 0x00],
            zero_hash: ZERO_HASH,
            max_pending_updates: 64,
            require_verified_proofs: false,
        }
    }
}

impl SyncProtocolConfig {
    /// Create a config for testing (ten-member committee, 64-slot periods).
    pub fn for_testing() -> Self {
        Self {
            sync_committee_size: 10,
            slots_per_epoch: 1,
            epochs_per_sync_committee_period: 64,
            min_sync_committee_participants: 1,
            light_client_update_timeout: 32,
            max_pending_updates: 16,
            ..Self::default()
        }
    }

    /// Slots in one sync committee period.
    pub fn slots_per_sync_committee_period(&self) -> u64 {
        self.slots_per_epoch
            .saturating_mul(self.epochs_per_sync_committee_period)
    }

    /// Reject configurations the protocol cannot run with.
    pub fn validate(&self) -> Result<(), LightClientError> {
        if self.sync_committee_size == 0 {
            return Err(LightClientError::InvalidConfig(
                "sync_committee_size must be non-zero".to_string(),
            ));
        }
        if self.slots_per_sync_committee_period() == 0 {
            return Err(LightClientError::InvalidConfig(
                "sync committee period must span at least one slot".to_string(),
            ));
        }
        if self.min_sync_committee_participants as usize > self.sync_committee_size {
            return Err(LightClientError::InvalidConfig(format!(
                "min_sync_committee_participants {} exceeds committee size {}",
                self.min_sync_committee_participants, self.sync_committee_size
            )));
        }
        if self.max_pending_updates == 0 {
            return Err(LightClientError::InvalidConfig(
                "max_pending_updates must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Apply `LC_*` environment overrides.
    pub fn apply_env_overrides(self) -> Self {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup. Unparsable values are ignored.
    pub fn apply_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_MIN_PARTICIPANTS) {
            match value.parse() {
                Ok(v) => self.min_sync_committee_participants = v,
                Err(_) => tracing::warn!(key = ENV_MIN_PARTICIPANTS, %value, "Ignoring invalid override"),
            }
        }
        if let Some(value) = lookup(ENV_UPDATE_TIMEOUT) {
            match value.parse() {
                Ok(v) => self.light_client_update_timeout = v,
                Err(_) => tracing::warn!(key = ENV_UPDATE_TIMEOUT, %value, "Ignoring invalid override"),
            }
        }
        if let Some(value) = lookup(ENV_MAX_PENDING) {
            match value.parse() {
                Ok(v) => self.max_pending_updates = v,
                Err(_) => tracing::warn!(key = ENV_MAX_PENDING, %value, "Ignoring invalid override"),
            }
        }
        self
    }
}

//! # Domain Errors
//!
//! Error types for the light client sync protocol.
//!
//! Every rejection is returned to the caller; none is fatal to the service
//! and none is retried internally.

use super::value_objects::{BranchKind, Slot};
use thiserror::Error;

/// Light client error types.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LightClientError {
    /// Update is older than the trusted snapshot.
    #[error("Update slot {update_slot} is older than snapshot slot {snapshot_slot}")]
    SlotRegression {
        /// Attested header slot of the update
        update_slot: Slot,
        /// Snapshot header slot
        snapshot_slot: Slot,
    },

    /// Update's committee period is neither the snapshot's nor the next one.
    #[error("Update period {update_period} is not eligible with snapshot period {snapshot_period}")]
    IneligiblePeriod {
        /// Period of the update
        update_period: u64,
        /// Period of the snapshot
        snapshot_period: u64,
    },

    /// A zero-hash placeholder branch was non-zero, or an inclusion check failed.
    #[error("Invalid {0} branch proof")]
    InvalidBranchProof(BranchKind),

    /// Fewer signers than the configured minimum.
    #[error("Insufficient sync committee participants: {got} < {required}")]
    InsufficientParticipants {
        /// Bits set in the participation bitfield
        got: u64,
        /// Configured minimum
        required: u64,
    },

    /// Key decoding failed or the aggregate signature does not verify.
    #[error("Invalid sync committee signature: {0}")]
    InvalidSignature(String),

    /// Domain or signing root computation failed.
    #[error("Internal crypto error: {0}")]
    InternalCryptoError(String),

    /// Participation bitfield does not cover the committee.
    #[error("Sync committee bitfield length {got} does not match committee size {expected}")]
    BitfieldLengthMismatch {
        /// Bitfield length
        got: usize,
        /// Committee size
        expected: usize,
    },

    /// A committee does not have the configured cardinality.
    #[error("Sync committee has {got} members, expected {expected}")]
    InvalidCommitteeSize {
        /// Actual member count
        got: usize,
        /// Configured size
        expected: usize,
    },

    /// Trusted checkpoint rejected at construction.
    #[error("Invalid trusted checkpoint: {0}")]
    InvalidCheckpoint(String),

    /// Configuration rejected.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl LightClientError {
    /// Stable short label for logs and metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            LightClientError::SlotRegression { .. } => "slot_regression",
            LightClientError::IneligiblePeriod { .. } => "ineligible_period",
            LightClientError::InvalidBranchProof(_) => "invalid_branch_proof",
            LightClientError::InsufficientParticipants { .. } => "insufficient_participants",
            LightClientError::InvalidSignature(_) => "invalid_signature",
            LightClientError::InternalCryptoError(_) => "internal_crypto_error",
            LightClientError::BitfieldLengthMismatch { .. } => "bitfield_length_mismatch",
            LightClientError::InvalidCommitteeSize { .. } => "invalid_committee_size",
            LightClientError::InvalidCheckpoint(_) => "invalid_checkpoint",
            LightClientError::InvalidConfig(_) => "invalid_config",
        }
    }
}

/// Errors raised by the crypto and chain-spec capabilities.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// Public key bytes are malformed or not a valid group element.
    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    /// Signature bytes are malformed.
    #[error("Invalid signature encoding: {0}")]
    InvalidSignature(String),

    /// Domain / signing root computation failed.
    #[error("Signing root computation failed: {0}")]
    SigningRoot(String),
}

//! Branch Proof Checker Adapter
//!
//! Merkle inclusion of the finality header and of the next sync committee
//! is not verified yet; both checks report `ProofPending`. A checker that
//! verifies against `update.header.state_root` can replace this one
//! without touching the verifier or the service.

use crate::domain::{LightClientError, LightClientUpdate, ProofStatus};
use crate::ports::outbound::BranchProofChecker;

/// Checker that accepts any supplied branch as pending.
#[derive(Clone, Copy, Debug, Default)]
pub struct PendingProofChecker;

impl BranchProofChecker for PendingProofChecker {
    fn check_finality_branch(
        &self,
        _update: &LightClientUpdate,
    ) -> Result<ProofStatus, LightClientError> {
        Ok(ProofStatus::ProofPending)
    }

    fn check_next_sync_committee_branch(
        &self,
        _update: &LightClientUpdate,
    ) -> Result<ProofStatus, LightClientError> {
        Ok(ProofStatus::ProofPending)
    }
}

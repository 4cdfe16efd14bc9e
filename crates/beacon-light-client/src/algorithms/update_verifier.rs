//! # Update Verification
//!
//! Validates one candidate update against the current snapshot. Pure: no
//! state is read beyond the arguments and nothing is mutated.
//!
//! # Checks (in order, first failure wins)
//!
//! 1. Slot ordering against the snapshot header
//! 2. Period eligibility (same period or the next one)
//! 3. Finality branch and signed header selection
//! 4. Committee selection and next committee branch
//! 5. Participation bitfield shape and minimum participants
//! 6. Aggregate signature over the signing root

use crate::config::SyncProtocolConfig;
use crate::domain::{
    compute_sync_committee_period, ensure_committee_size, invariant_period_eligible,
    invariant_slot_order, invariant_zero_branch, BeaconBlockHeader, BranchKind, LightClientError,
    LightClientSnapshot, LightClientUpdate, ProofStatus, SyncCommittee, VerifiedUpdate,
};
use crate::ports::{BranchProofChecker, ChainSpecHelpers, SyncCommitteeCrypto};

/// Update verifier over injected crypto, chain-spec and proof capabilities.
pub struct UpdateVerifier<'a, C, H, P> {
    config: &'a SyncProtocolConfig,
    crypto: &'a C,
    chain_spec: &'a H,
    proof_checker: &'a P,
}

impl<'a, C, H, P> UpdateVerifier<'a, C, H, P>
where
    C: SyncCommitteeCrypto,
    H: ChainSpecHelpers,
    P: BranchProofChecker,
{
    /// Create a verifier.
    pub fn new(
        config: &'a SyncProtocolConfig,
        crypto: &'a C,
        chain_spec: &'a H,
        proof_checker: &'a P,
    ) -> Self {
        Self {
            config,
            crypto,
            chain_spec,
            proof_checker,
        }
    }

    /// Verify `update` against `snapshot`.
    ///
    /// On success the update is returned unchanged inside a [`VerifiedUpdate`].
    /// On rejection the update is dropped.
    pub fn verify(
        &self,
        update: LightClientUpdate,
        snapshot: &LightClientSnapshot,
    ) -> Result<VerifiedUpdate, LightClientError> {
        invariant_slot_order(update.header.slot, snapshot.header.slot)?;

        let slots_per_period = self.config.slots_per_sync_committee_period();
        let snapshot_period = compute_sync_committee_period(snapshot.header.slot, slots_per_period);
        let update_period = compute_sync_committee_period(update.header.slot, slots_per_period);
        invariant_period_eligible(update_period, snapshot_period)?;

        let (signed_header, finality_proof) = self.select_signed_header(&update)?;

        let (committee, committee_proof) =
            self.select_committee(&update, snapshot, update_period == snapshot_period)?;

        self.check_participation(&update, committee)?;

        self.verify_signature(&update, committee, signed_header)?;

        Ok(VerifiedUpdate::new(update, finality_proof, committee_proof))
    }

    /// Header the committee signed: the attested header when no finality
    /// proof is supplied, the finality header otherwise.
    fn select_signed_header<'u>(
        &self,
        update: &'u LightClientUpdate,
    ) -> Result<(&'u BeaconBlockHeader, ProofStatus), LightClientError> {
        if !update.has_finality_proof() {
            invariant_zero_branch(
                &update.finality_branch,
                &self.config.zero_hash,
                BranchKind::Finality,
            )?;
            return Ok((&update.header, ProofStatus::NoProofExpected));
        }

        let status = self.proof_checker.check_finality_branch(update)?;
        let status = self.accept_proof(status, BranchKind::Finality)?;
        Ok((&update.finality_header, status))
    }

    /// Committee whose signature is expected: current for same-period
    /// updates, next for updates that cross into the following period.
    fn select_committee<'s>(
        &self,
        update: &LightClientUpdate,
        snapshot: &'s LightClientSnapshot,
        same_period: bool,
    ) -> Result<(&'s SyncCommittee, ProofStatus), LightClientError> {
        if same_period {
            invariant_zero_branch(
                &update.next_sync_committee_branch,
                &self.config.zero_hash,
                BranchKind::NextSyncCommittee,
            )?;
            return Ok((&snapshot.current_sync_committee, ProofStatus::NoProofExpected));
        }

        // The supplied committee becomes `next_sync_committee` on commit.
        ensure_committee_size(&update.next_sync_committee, self.config.sync_committee_size)?;
        let status = self.proof_checker.check_next_sync_committee_branch(update)?;
        let status = self.accept_proof(status, BranchKind::NextSyncCommittee)?;
        Ok((&snapshot.next_sync_committee, status))
    }

    fn accept_proof(
        &self,
        status: ProofStatus,
        kind: BranchKind,
    ) -> Result<ProofStatus, LightClientError> {
        if status == ProofStatus::ProofPending && self.config.require_verified_proofs {
            return Err(LightClientError::InvalidBranchProof(kind));
        }
        Ok(status)
    }

    fn check_participation(
        &self,
        update: &LightClientUpdate,
        committee: &SyncCommittee,
    ) -> Result<(), LightClientError> {
        if update.sync_committee_bits.len() != committee.len() {
            return Err(LightClientError::BitfieldLengthMismatch {
                got: update.sync_committee_bits.len(),
                expected: committee.len(),
            });
        }

        let participants = update.participants();
        if participants < self.config.min_sync_committee_participants {
            return Err(LightClientError::InsufficientParticipants {
                got: participants,
                required: self.config.min_sync_committee_participants,
            });
        }
        Ok(())
    }

    fn verify_signature(
        &self,
        update: &LightClientUpdate,
        committee: &SyncCommittee,
        signed_header: &BeaconBlockHeader,
    ) -> Result<(), LightClientError> {
        let pubkeys = committee
            .participants(&update.sync_committee_bits)
            .map(|pk| self.crypto.decode_public_key(pk))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| LightClientError::InvalidSignature(e.to_string()))?;

        let domain = self
            .chain_spec
            .compute_domain(self.config.domain_sync_committee, &update.fork)
            .map_err(|e| LightClientError::InternalCryptoError(e.to_string()))?;

        let signature = self
            .crypto
            .decode_signature(&update.sync_committee_signature)
            .map_err(|e| LightClientError::InvalidSignature(e.to_string()))?;

        let signing_root = self
            .chain_spec
            .compute_signing_root(signed_header, &domain)
            .map_err(|e| LightClientError::InternalCryptoError(e.to_string()))?;

        if !self
            .crypto
            .fast_aggregate_verify(&pubkeys, &signature, &signing_root)
        {
            return Err(LightClientError::InvalidSignature(
                "could not verify sync committee signature".to_string(),
            ));
        }
        Ok(())
    }
}

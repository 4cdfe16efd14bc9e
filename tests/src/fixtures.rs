//! # Test Fixtures
//!
//! Sync committees backed by real BLS secret keys, and helpers producing
//! updates signed exactly the way the verifier expects.

use beacon_light_client::adapters::DST;
use beacon_light_client::{
    BeaconBlockHeader, BlsPublicKey, BlsSignature, ChainSpecHelpers, ForkInfo,
    LightClientSnapshot, LightClientUpdate, Slot, SszChainSpec, SyncCommittee, SyncCommitteeBits,
    SyncProtocolConfig, ZERO_HASH,
};
use blst::min_pk::{AggregateSignature, SecretKey, Signature};

/// Fork version used by every fixture update.
pub const TEST_FORK_VERSION: [u8; 4] = [1, 0, 0, 0];

/// Committee size used by integration tests.
pub const INTEGRATION_COMMITTEE_SIZE: usize = 16;

/// Integration config: 16 members, 64-slot periods, 32-slot timeout.
pub fn integration_config() -> SyncProtocolConfig {
    SyncProtocolConfig {
        sync_committee_size: INTEGRATION_COMMITTEE_SIZE,
        ..SyncProtocolConfig::for_testing()
    }
}

/// Fork info shared by fixtures.
pub fn test_fork() -> ForkInfo {
    ForkInfo {
        current_version: TEST_FORK_VERSION,
        genesis_validators_root: [0xAA; 32],
    }
}

/// Sync committee with its members' secret keys.
pub struct TestCommittee {
    secret_keys: Vec<SecretKey>,
    committee: SyncCommittee,
}

impl TestCommittee {
    /// Deterministic committee of `size` members; `tag` separates committees.
    pub fn generate(tag: u8, size: usize) -> Self {
        let secret_keys: Vec<SecretKey> = (0..size)
            .map(|i| {
                let mut ikm = [tag; 32];
                ikm[0] = i as u8;
                ikm[1] = (i >> 8) as u8;
                SecretKey::key_gen(&ikm, &[]).expect("32-byte ikm")
            })
            .collect();
        let committee = SyncCommittee::new(
            secret_keys
                .iter()
                .map(|sk| BlsPublicKey::new(sk.sk_to_pk().to_bytes().to_vec()))
                .collect(),
        );
        Self {
            secret_keys,
            committee,
        }
    }

    /// Public committee.
    pub fn committee(&self) -> &SyncCommittee {
        &self.committee
    }

    /// Aggregate signature of the participating members over `header`.
    pub fn sign(
        &self,
        config: &SyncProtocolConfig,
        header: &BeaconBlockHeader,
        fork: &ForkInfo,
        bits: &SyncCommitteeBits,
    ) -> BlsSignature {
        let chain_spec = SszChainSpec;
        let domain = chain_spec
            .compute_domain(config.domain_sync_committee, fork)
            .expect("domain");
        let signing_root = chain_spec
            .compute_signing_root(header, &domain)
            .expect("signing root");

        let signatures: Vec<Signature> = self
            .secret_keys
            .iter()
            .zip(bits.iter().by_vals())
            .filter(|(_, bit)| *bit)
            .map(|(sk, _)| sk.sign(&signing_root, DST, &[]))
            .collect();
        let refs: Vec<&Signature> = signatures.iter().collect();
        let aggregate = AggregateSignature::aggregate(&refs, true).expect("at least one signer");
        BlsSignature::new(aggregate.to_signature().to_bytes().to_vec())
    }
}

/// Bitfield of `size` bits with the given member indices set.
pub fn participation(size: usize, members: impl IntoIterator<Item = usize>) -> SyncCommitteeBits {
    let mut bits = SyncCommitteeBits::repeat(false, size);
    for index in members {
        bits.set(index, true);
    }
    bits
}

/// Trusted checkpoint at `slot`.
pub fn checkpoint(slot: Slot, current: &TestCommittee, next: &TestCommittee) -> LightClientSnapshot {
    LightClientSnapshot::new(
        BeaconBlockHeader::at_slot(slot, [0x11; 32]),
        current.committee().clone(),
        next.committee().clone(),
    )
}

/// Builder for a signed update.
pub struct UpdateBuilder<'a> {
    config: &'a SyncProtocolConfig,
    signer: &'a TestCommittee,
    slot: Slot,
    bits: SyncCommitteeBits,
    finalized: bool,
    next: Option<&'a TestCommittee>,
    fork: ForkInfo,
}

impl<'a> UpdateBuilder<'a> {
    /// Update at `slot` signed by every member of `signer`.
    pub fn new(config: &'a SyncProtocolConfig, signer: &'a TestCommittee, slot: Slot) -> Self {
        let size = signer.committee().len();
        Self {
            config,
            signer,
            slot,
            bits: participation(size, 0..size),
            finalized: false,
            next: None,
            fork: test_fork(),
        }
    }

    /// Only the first `count` members sign.
    pub fn participants(mut self, count: usize) -> Self {
        self.bits = participation(self.signer.committee().len(), 0..count);
        self
    }

    /// Explicit participation bits.
    pub fn bits(mut self, bits: SyncCommitteeBits) -> Self {
        self.bits = bits;
        self
    }

    /// Attach a finality header; the committee signs it instead of the attested header.
    pub fn finalized(mut self) -> Self {
        self.finalized = true;
        self
    }

    /// Carry `next` as the next sync committee, with a proof branch.
    pub fn rotating_to(mut self, next: &'a TestCommittee) -> Self {
        self.next = Some(next);
        self
    }

    /// Sign under a different fork.
    pub fn fork(mut self, fork: ForkInfo) -> Self {
        self.fork = fork;
        self
    }

    /// Build and sign.
    pub fn build(self) -> LightClientUpdate {
        let header = BeaconBlockHeader {
            slot: self.slot,
            proposer_index: self.slot % 97,
            parent_root: [(self.slot % 251) as u8; 32],
            state_root: [0x5A; 32],
            body_root: [0x6B; 32],
        };

        let (finality_header, finality_branch) = if self.finalized {
            (
                BeaconBlockHeader::at_slot(self.slot.saturating_sub(8), [0xF1; 32]),
                vec![[0x22; 32]; 6],
            )
        } else {
            (BeaconBlockHeader::default(), vec![ZERO_HASH; 6])
        };

        let (next_sync_committee, next_sync_committee_branch) = match self.next {
            Some(next) => (next.committee().clone(), vec![[0x33; 32]; 5]),
            None => (self.signer.committee().clone(), vec![ZERO_HASH; 5]),
        };

        let signed_header = if self.finalized {
            &finality_header
        } else {
            &header
        };
        let sync_committee_signature =
            self.signer
                .sign(self.config, signed_header, &self.fork, &self.bits);

        LightClientUpdate {
            header,
            finality_header,
            finality_branch,
            next_sync_committee,
            next_sync_committee_branch,
            sync_committee_bits: self.bits,
            sync_committee_signature,
            fork: self.fork,
        }
    }
}

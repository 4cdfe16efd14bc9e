//! # SSZ Merkleization
//!
//! `hash_tree_root` for the containers the sync protocol signs over, and
//! the `compute_domain` / `compute_signing_root` helpers of the beacon
//! chain consensus spec.

use sha2::{Digest, Sha256};

use crate::domain::{BeaconBlockHeader, Domain, DomainType, ForkInfo, Root, Version, ZERO_HASH};

/// Hash two nodes together.
fn hash_concat(left: &Root, right: &Root) -> Root {
    let mut hasher = Sha256::new();
    hasher.update(left);
    hasher.update(right);
    let mut output = [0u8; 32];
    output.copy_from_slice(&hasher.finalize());
    output
}

/// Merkle root of `leaves`, zero-padded to the next power of two.
pub fn merkleize(mut leaves: Vec<Root>) -> Root {
    if leaves.is_empty() {
        return ZERO_HASH;
    }

    let width = leaves.len().next_power_of_two();
    leaves.resize(width, ZERO_HASH);

    while leaves.len() > 1 {
        leaves = leaves
            .chunks(2)
            .map(|pair| hash_concat(&pair[0], &pair[1]))
            .collect();
    }

    leaves[0]
}

fn uint64_leaf(value: u64) -> Root {
    let mut leaf = ZERO_HASH;
    leaf[..8].copy_from_slice(&value.to_le_bytes());
    leaf
}

fn version_leaf(version: &Version) -> Root {
    let mut leaf = ZERO_HASH;
    leaf[..4].copy_from_slice(version);
    leaf
}

/// `hash_tree_root(BeaconBlockHeader)`.
pub fn header_root(header: &BeaconBlockHeader) -> Root {
    merkleize(vec![
        uint64_leaf(header.slot),
        uint64_leaf(header.proposer_index),
        header.parent_root,
        header.state_root,
        header.body_root,
    ])
}

/// `hash_tree_root(ForkData(current_version, genesis_validators_root))`.
pub fn fork_data_root(current_version: &Version, genesis_validators_root: &Root) -> Root {
    merkleize(vec![version_leaf(current_version), *genesis_validators_root])
}

/// `compute_domain`: domain type followed by the first 28 bytes of the fork data root.
pub fn compute_domain(domain_type: DomainType, fork: &ForkInfo) -> Domain {
    let fork_root = fork_data_root(&fork.current_version, &fork.genesis_validators_root);
    let mut domain = [0u8; 32];
    domain[..4].copy_from_slice(&domain_type);
    domain[4..].copy_from_slice(&fork_root[..28]);
    domain
}

/// `compute_signing_root`: `hash_tree_root(SigningData(object_root, domain))`.
pub fn compute_signing_root(object_root: &Root, domain: &Domain) -> Root {
    merkleize(vec![*object_root, *domain])
}

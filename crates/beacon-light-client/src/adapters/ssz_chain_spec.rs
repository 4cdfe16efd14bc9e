//! SSZ Chain Spec Adapter
//!
//! Implements `ChainSpecHelpers` with the SSZ merkleization in
//! `algorithms::ssz`.

use crate::algorithms::ssz;
use crate::domain::{BeaconBlockHeader, CryptoError, Domain, DomainType, ForkInfo, Root};
use crate::ports::outbound::ChainSpecHelpers;

/// Beacon chain domain and signing root computation.
#[derive(Clone, Copy, Debug, Default)]
pub struct SszChainSpec;

impl ChainSpecHelpers for SszChainSpec {
    fn compute_domain(&self, domain_type: DomainType, fork: &ForkInfo) -> Result<Domain, CryptoError> {
        Ok(ssz::compute_domain(domain_type, fork))
    }

    fn compute_signing_root(
        &self,
        header: &BeaconBlockHeader,
        domain: &Domain,
    ) -> Result<Root, CryptoError> {
        Ok(ssz::compute_signing_root(&ssz::header_root(header), domain))
    }
}

//! BLS12-381 Adapter
//!
//! Implements `SyncCommitteeCrypto` with blst, using the beacon chain's
//! `min_pk` variant: public keys on G1 (48 bytes compressed), signatures
//! on G2 (96 bytes compressed).

use crate::domain::{BlsPublicKey, BlsSignature, CryptoError, Root};
use crate::ports::outbound::SyncCommitteeCrypto;
use blst::min_pk::{PublicKey, Signature};
use blst::BLST_ERROR;

/// Domain Separation Tag for beacon chain BLS signatures (proof of possession scheme).
pub const DST: &[u8] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_POP_";

/// blst-backed sync committee crypto.
#[derive(Clone, Copy, Debug, Default)]
pub struct BlstCrypto;

impl SyncCommitteeCrypto for BlstCrypto {
    type PublicKey = PublicKey;
    type Signature = Signature;

    fn decode_public_key(&self, key: &BlsPublicKey) -> Result<PublicKey, CryptoError> {
        // key_validate rejects the identity point and points outside the subgroup
        PublicKey::key_validate(key.as_bytes())
            .map_err(|e| CryptoError::InvalidPublicKey(format!("{:?}", e)))
    }

    fn decode_signature(&self, signature: &BlsSignature) -> Result<Signature, CryptoError> {
        Signature::from_bytes(signature.as_bytes())
            .map_err(|e| CryptoError::InvalidSignature(format!("{:?}", e)))
    }

    fn fast_aggregate_verify(
        &self,
        keys: &[PublicKey],
        signature: &Signature,
        message: &Root,
    ) -> bool {
        if keys.is_empty() {
            return false;
        }
        let key_refs: Vec<&PublicKey> = keys.iter().collect();
        signature.fast_aggregate_verify(true, message, DST, &key_refs) == BLST_ERROR::BLST_SUCCESS
    }
}

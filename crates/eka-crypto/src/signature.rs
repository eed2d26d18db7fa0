//! Signature verification and Ethereum-style signed messages.
//!
//! Two signing schemes meet here: plain ECDSA over a SHA-256 prehash
//! (per-request signatures from the ephemeral key) and the EIP-191
//! personal-message scheme (the delegated certificate signature, recoverable
//! to the signer's address).

use k256::ecdsa::signature::hazmat::PrehashVerifier;
use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};

use crate::hash::keccak256;

const PERSONAL_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n";

/// Error type for signature operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SignatureError {
    #[error("invalid public key")]
    InvalidKey,
    #[error("signature verification failed")]
    InvalidSignature,
    #[error("signer recovery failed")]
    Recovery,
}

/// Verify a 64-byte compact ECDSA signature over a 32-byte digest.
///
/// `public_key` is SEC1-encoded (compressed or uncompressed).
pub fn verify_digest(
    public_key: &[u8],
    digest: &[u8; 32],
    signature: &[u8],
) -> Result<(), SignatureError> {
    let key = VerifyingKey::from_sec1_bytes(public_key).map_err(|_| SignatureError::InvalidKey)?;
    let sig = Signature::from_slice(signature).map_err(|_| SignatureError::InvalidSignature)?;
    key.verify_prehash(digest, &sig)
        .map_err(|_| SignatureError::InvalidSignature)
}

/// EIP-191 hash: keccak256("\x19Ethereum Signed Message:\n" || len || message).
pub fn personal_message_hash(message: &[u8]) -> [u8; 32] {
    let len = message.len().to_string();
    let mut data = Vec::with_capacity(PERSONAL_MESSAGE_PREFIX.len() + len.len() + message.len());
    data.extend_from_slice(PERSONAL_MESSAGE_PREFIX);
    data.extend_from_slice(len.as_bytes());
    data.extend_from_slice(message);
    keccak256(&data)
}

/// Derive the 0x-prefixed Ethereum address of a public key.
///
/// address = last 20 bytes of keccak256(uncompressed point without the 0x04 tag).
pub fn ethereum_address(key: &VerifyingKey) -> String {
    let point = key.to_encoded_point(false);
    let hash = keccak256(&point.as_bytes()[1..]);
    format!("0x{}", hex::encode(&hash[12..]))
}

/// Sign `message` the way a wallet's `personal_sign` does.
///
/// Returns the 65-byte `r || s || v` signature, `v` in {27, 28}.
pub fn sign_personal_message(key: &SigningKey, message: &[u8]) -> Result<[u8; 65], SignatureError> {
    let digest = personal_message_hash(message);
    let (sig, recovery) = key
        .sign_prehash_recoverable(&digest)
        .map_err(|_| SignatureError::Recovery)?;
    let mut out = [0u8; 65];
    out[..64].copy_from_slice(&sig.to_bytes());
    out[64] = 27 + recovery.to_byte();
    Ok(out)
}

/// Recover the signer address of a `personal_sign` signature.
///
/// Accepts `v` as 27/28 or 0/1.
pub fn recover_personal_signer(message: &[u8], signature: &[u8]) -> Result<String, SignatureError> {
    if signature.len() != 65 {
        return Err(SignatureError::InvalidSignature);
    }
    let v = signature[64];
    let recovery_byte = if v >= 27 { v - 27 } else { v };
    let recovery =
        RecoveryId::from_byte(recovery_byte).ok_or(SignatureError::InvalidSignature)?;
    let sig =
        Signature::from_slice(&signature[..64]).map_err(|_| SignatureError::InvalidSignature)?;
    let digest = personal_message_hash(message);
    let key = VerifyingKey::recover_from_prehash(&digest, &sig, recovery)
        .map_err(|_| SignatureError::Recovery)?;
    Ok(ethereum_address(&key))
}

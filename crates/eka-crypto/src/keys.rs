//! Ephemeral secp256k1 keypair generation and per-request signing.
//!
//! Private keys are produced by rejection sampling: raw 32-byte draws are
//! repeated until one is a valid curve scalar (non-zero, below the group
//! order). The loop has no retry ceiling; an invalid draw is simply
//! resampled.

use k256::ecdsa::signature::hazmat::PrehashSigner;
use k256::ecdsa::{Signature, SigningKey};
use k256::SecretKey;
use zeroize::Zeroizing;

/// Error type for key operations.
#[derive(Debug, thiserror::Error)]
pub enum KeyError {
    #[error("system randomness unavailable")]
    Rng,
    #[error("scalar is not a valid secp256k1 private key")]
    InvalidScalar,
    #[error("signing failed")]
    Signing,
}

/// A short-lived secp256k1 keypair.
///
/// Generated fresh per session; the secret half never leaves the process
/// and is zeroized on drop by the underlying key type.
#[derive(Clone)]
pub struct EphemeralKeypair {
    signing: SigningKey,
}

// The secret scalar stays out of debug output.
impl std::fmt::Debug for EphemeralKeypair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EphemeralKeypair")
            .field("public_key", &self.public_key_hex())
            .finish_non_exhaustive()
    }
}

impl EphemeralKeypair {
    /// Generate a keypair from a securely drawn, valid curve scalar.
    pub fn generate() -> Result<Self, KeyError> {
        loop {
            let mut candidate = Zeroizing::new([0u8; 32]);
            getrandom::getrandom(&mut *candidate).map_err(|_| KeyError::Rng)?;
            // SecretKey::from_slice rejects zero and out-of-order scalars.
            if let Ok(secret) = SecretKey::from_slice(candidate.as_ref()) {
                return Ok(Self {
                    signing: SigningKey::from(secret),
                });
            }
        }
    }

    /// Import a keypair from existing secret bytes.
    pub fn from_secret_bytes(bytes: &[u8; 32]) -> Result<Self, KeyError> {
        let secret = SecretKey::from_slice(bytes).map_err(|_| KeyError::InvalidScalar)?;
        Ok(Self {
            signing: SigningKey::from(secret),
        })
    }

    /// Compressed SEC1 public key (33 bytes).
    pub fn public_key_bytes(&self) -> Vec<u8> {
        self.signing
            .verifying_key()
            .to_encoded_point(true)
            .as_bytes()
            .to_vec()
    }

    /// Hex encoding of the compressed public key.
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.public_key_bytes())
    }

    /// Secret scalar bytes, zeroized when the wrapper drops.
    pub fn secret_bytes(&self) -> Zeroizing<[u8; 32]> {
        Zeroizing::new(self.signing.to_bytes().into())
    }

    /// ECDSA-sign a 32-byte digest. Returns the 64-byte compact signature.
    ///
    /// The output is not required to be deterministic across calls, only
    /// independently verifiable.
    pub fn sign_digest(&self, digest: &[u8; 32]) -> Result<[u8; 64], KeyError> {
        let sig: Signature = self
            .signing
            .sign_prehash(digest)
            .map_err(|_| KeyError::Signing)?;
        let mut out = [0u8; 64];
        out.copy_from_slice(&sig.to_bytes());
        Ok(out)
    }

    /// Access the underlying ECDSA signing key.
    pub fn signing_key(&self) -> &SigningKey {
        &self.signing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::verify_digest;

    #[test]
    fn test_generate_yields_valid_scalar() {
        let keypair = EphemeralKeypair::generate().unwrap();
        // Re-importing the secret must succeed: generation never returns
        // an invalid scalar.
        let secret = keypair.secret_bytes();
        assert!(EphemeralKeypair::from_secret_bytes(&secret).is_ok());
    }

    #[test]
    fn test_public_key_is_compressed_sec1() {
        let keypair = EphemeralKeypair::generate().unwrap();
        let public = keypair.public_key_bytes();
        assert_eq!(public.len(), 33);
        assert!(public[0] == 0x02 || public[0] == 0x03);
        assert_eq!(keypair.public_key_hex().len(), 66);
    }

    #[test]
    fn test_zero_scalar_rejected() {
        let zero = [0u8; 32];
        assert!(matches!(
            EphemeralKeypair::from_secret_bytes(&zero),
            Err(KeyError::InvalidScalar)
        ));
    }

    #[test]
    fn test_scalar_above_order_rejected() {
        // 0xFF * 32 is well above the secp256k1 group order.
        let oversized = [0xFFu8; 32];
        assert!(matches!(
            EphemeralKeypair::from_secret_bytes(&oversized),
            Err(KeyError::InvalidScalar)
        ));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let keypair = EphemeralKeypair::generate().unwrap();
        let rendered = format!("{:?}", keypair);
        assert!(rendered.contains(&keypair.public_key_hex()));
        assert!(!rendered.contains(&hex::encode(*keypair.secret_bytes())));
    }

    #[test]
    fn test_two_generations_differ() {
        let a = EphemeralKeypair::generate().unwrap();
        let b = EphemeralKeypair::generate().unwrap();
        assert_ne!(a.public_key_bytes(), b.public_key_bytes());
    }

    #[test]
    fn test_sign_digest_round_trip() {
        let keypair = EphemeralKeypair::generate().unwrap();
        let digest = crate::hash::sha256(b"some request bytes");
        let signature = keypair.sign_digest(&digest).unwrap();
        assert!(verify_digest(&keypair.public_key_bytes(), &digest, &signature).is_ok());
    }

    #[test]
    fn test_sign_digest_tamper_fails() {
        let keypair = EphemeralKeypair::generate().unwrap();
        let digest = crate::hash::sha256(b"original");
        let other = crate::hash::sha256(b"tampered");
        let signature = keypair.sign_digest(&digest).unwrap();
        assert!(verify_digest(&keypair.public_key_bytes(), &other, &signature).is_err());
    }
}

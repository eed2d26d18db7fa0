#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::hash::sha256;
    use crate::keys::EphemeralKeypair;
    use crate::signature::{
        ethereum_address, recover_personal_signer, sign_personal_message, verify_digest,
    };

    proptest! {
        // Any imported valid scalar signs digests that verify under its
        // own public key.
        #[test]
        fn test_sign_verify_round_trip(payload in any::<Vec<u8>>()) {
            let keypair = EphemeralKeypair::generate().unwrap();
            let digest = sha256(&payload);
            let signature = keypair.sign_digest(&digest).unwrap();
            prop_assert!(verify_digest(&keypair.public_key_bytes(), &digest, &signature).is_ok());
        }

        // Flipping any single byte of the payload invalidates the signature.
        #[test]
        fn test_payload_flip_invalidates(payload in proptest::collection::vec(any::<u8>(), 1..256), idx in any::<prop::sample::Index>()) {
            let keypair = EphemeralKeypair::generate().unwrap();
            let digest = sha256(&payload);
            let signature = keypair.sign_digest(&digest).unwrap();

            let mut tampered = payload.clone();
            let i = idx.index(tampered.len());
            tampered[i] ^= 0x01;
            let tampered_digest = sha256(&tampered);

            prop_assert!(
                verify_digest(&keypair.public_key_bytes(), &tampered_digest, &signature).is_err()
            );
        }

        // personal_sign signatures recover to the signer's address for
        // arbitrary message bytes.
        #[test]
        fn test_personal_recovery_round_trip(message in any::<Vec<u8>>()) {
            let keypair = EphemeralKeypair::generate().unwrap();
            let address = ethereum_address(keypair.signing_key().verifying_key());
            let signature = sign_personal_message(keypair.signing_key(), &message).unwrap();
            prop_assert_eq!(recover_personal_signer(&message, &signature).unwrap(), address);
        }

        // Scalar import either fails or round-trips to the same public key.
        #[test]
        fn test_scalar_import(seed in any::<[u8; 32]>()) {
            if let Ok(keypair) = EphemeralKeypair::from_secret_bytes(&seed) {
                let again = EphemeralKeypair::from_secret_bytes(&seed).unwrap();
                prop_assert_eq!(keypair.public_key_bytes(), again.public_key_bytes());
            } else {
                // Rejected draws are exactly the invalid scalars: zero or >= order.
                let is_zero = seed.iter().all(|&b| b == 0);
                let above_order = seed >= [
                    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
                    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
                    0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B,
                    0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
                ];
                prop_assert!(is_zero || above_order);
            }
        }
    }
}

//! Test harness for the authentication flows.
//!
//! Provides an in-memory account provider backed by a local secp256k1 key,
//! standing in for an external wallet: it signs with the EIP-191
//! personal-message scheme and recovers signer addresses the same way a
//! node's `personal_ecRecover` does.

use async_trait::async_trait;
use bytes::Bytes;

use eka_crypto::keys::EphemeralKeypair;
use eka_crypto::signature::{ethereum_address, recover_personal_signer, sign_personal_message};

use crate::provider::{AccountProvider, ProviderError};
use crate::types::{strip_hex_prefix, RequestRecord};

/// In-memory wallet implementing [`AccountProvider`].
pub struct LocalWallet {
    keypair: EphemeralKeypair,
    network_id: u64,
    /// When false the wallet reports no managed addresses.
    has_accounts: bool,
}

impl LocalWallet {
    /// Wallet with a freshly generated key on the given network.
    pub fn random(network_id: u64) -> Self {
        let keypair = EphemeralKeypair::generate().expect("rng");
        Self {
            keypair,
            network_id,
            has_accounts: true,
        }
    }

    /// Wallet that manages no addresses, for precondition tests.
    pub fn without_accounts(network_id: u64) -> Self {
        let mut wallet = Self::random(network_id);
        wallet.has_accounts = false;
        wallet
    }

    /// The wallet's own 0x-prefixed address.
    pub fn address(&self) -> String {
        ethereum_address(self.keypair.signing_key().verifying_key())
    }

    /// Sign `message` with this wallet's key regardless of any address
    /// check; used to forge countersignatures in tests.
    pub fn sign_message(&self, message: &str) -> Result<String, ProviderError> {
        let bytes = decode_message(message);
        let signature = sign_personal_message(self.keypair.signing_key(), &bytes)
            .map_err(|e| ProviderError::Rejected(e.to_string()))?;
        Ok(format!("0x{}", hex::encode(signature)))
    }
}

#[async_trait]
impl AccountProvider for LocalWallet {
    async fn network_id(&self) -> Result<u64, ProviderError> {
        Ok(self.network_id)
    }

    async fn accounts(&self) -> Result<Vec<String>, ProviderError> {
        if self.has_accounts {
            Ok(vec![self.address()])
        } else {
            Ok(Vec::new())
        }
    }

    async fn personal_sign(
        &self,
        address: &str,
        message: &str,
    ) -> Result<String, ProviderError> {
        if !address.eq_ignore_ascii_case(&self.address()) {
            return Err(ProviderError::Rejected(format!(
                "unknown account {address}"
            )));
        }
        self.sign_message(message)
    }

    async fn recover_signer(
        &self,
        message: &str,
        signature: &str,
    ) -> Result<String, ProviderError> {
        let message = decode_message(message);
        let signature = hex::decode(strip_hex_prefix(signature))
            .map_err(|e| ProviderError::Rejected(e.to_string()))?;
        recover_personal_signer(&message, &signature)
            .map_err(|e| ProviderError::Rejected(e.to_string()))
    }
}

/// Hex-prefixed messages sign as their decoded bytes, plain strings as UTF-8.
fn decode_message(message: &str) -> Vec<u8> {
    if let Some(stripped) = message.strip_prefix("0x") {
        if let Ok(bytes) = hex::decode(stripped) {
            return bytes;
        }
    }
    message.as_bytes().to_vec()
}

/// Build a POST request record with the given body and timestamp.
pub fn make_request(url: &str, body: &[u8], timestamp_ms: i64) -> RequestRecord {
    RequestRecord {
        method: "POST".into(),
        url: url.into(),
        timestamp: Some(timestamp_ms),
        body: Bytes::copy_from_slice(body),
    }
}

//! The account provider seam.
//!
//! The primary account is modeled as an injected capability, never a
//! concrete wallet transport. The core depends on exactly four operations
//! and inherits whatever timeout policy the provider implementation uses;
//! these calls are the only places the protocol can wait on external I/O.

use async_trait::async_trait;

/// Error type for account provider operations.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The provider manages no accounts, so there is no primary address.
    #[error("account provider has no managed accounts")]
    NoAccounts,
    /// The provider refused the operation (locked wallet, unknown address).
    #[error("account provider rejected the request: {0}")]
    Rejected(String),
    /// The provider could not be reached or did not answer.
    #[error("account provider transport failed: {0}")]
    Transport(String),
}

/// Capabilities the protocol requires of a primary account.
#[async_trait]
pub trait AccountProvider: Send + Sync {
    /// Numeric network identifier the account lives on.
    async fn network_id(&self) -> Result<u64, ProviderError>;

    /// Addresses managed by this provider, primary first.
    async fn accounts(&self) -> Result<Vec<String>, ProviderError>;

    /// Sign an arbitrary message on behalf of `address` (`personal_sign`).
    ///
    /// `message` is the hex-encoded payload; the returned signature is a
    /// hex string.
    async fn personal_sign(&self, address: &str, message: &str)
        -> Result<String, ProviderError>;

    /// Recover the address that produced `signature` over `message`
    /// (`personal_ecRecover`).
    async fn recover_signer(&self, message: &str, signature: &str)
        -> Result<String, ProviderError>;
}

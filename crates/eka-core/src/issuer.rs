//! Ephemeral key issuance.
//!
//! Runs once per session: generates a fresh keypair, builds the certificate
//! binding it to the primary account, and obtains the delegated signature
//! from the account provider.

use chrono::{SubsecRound, Utc};
use tracing::debug;

use eka_crypto::keys::{EphemeralKeypair, KeyError};

use crate::certificate::{build_certificate, CertificateParams};
use crate::config::AuthConfig;
use crate::network::network_name;
use crate::provider::{AccountProvider, ProviderError};
use crate::types::UserData;

/// Error type for issuance.
///
/// Provider failures are forwarded unchanged; issuance originates no
/// protocol errors of its own.
#[derive(Debug, thiserror::Error)]
pub enum IssueError {
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error(transparent)]
    Key(#[from] KeyError),
}

/// Issue a fresh ephemeral key certified by the primary account.
///
/// Fresh randomness and timestamps guarantee that two calls never return
/// equal `UserData`. The only step that can wait on external I/O is the
/// delegated `personal_sign` (and the two provider lookups before it).
pub async fn issue(
    provider: &dyn AccountProvider,
    token_address: &str,
    config: &AuthConfig,
) -> Result<UserData, IssueError> {
    let network_id = provider.network_id().await?;
    let accounts = provider.accounts().await?;
    let address = accounts.first().ok_or(ProviderError::NoAccounts)?.clone();

    let keypair = EphemeralKeypair::generate()?;
    let public_key_hex = keypair.public_key_hex();

    // Certificate timestamps carry millisecond precision; the bundle's
    // expiry must equal what the text says.
    let issued_at = Utc::now().trunc_subsecs(3);
    let expires_at = issued_at + config.certificate_validity;
    let certificate = build_certificate(&CertificateParams {
        ephemeral_public_key_hex: &public_key_hex,
        network: network_name(network_id),
        token_address,
        issued_at,
        expires_at,
    });
    let message = format!("0x{}", hex::encode(certificate.as_bytes()));

    let signature = provider.personal_sign(&address, &message).await?;
    debug!(
        address = %address,
        network = network_name(network_id),
        %expires_at,
        "issued ephemeral key"
    );

    Ok(UserData {
        address,
        keypair,
        message,
        signature,
        expires_at,
    })
}

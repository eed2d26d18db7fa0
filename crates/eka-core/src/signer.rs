//! Per-request signing.
//!
//! Consumes a [`UserData`] bundle read-only and produces one disposable
//! header set per request. Pure apart from capturing the current time when
//! the record carries no timestamp.

use chrono::Utc;

use eka_crypto::keys::KeyError;

use crate::digest::request_digest;
use crate::identity::format_identity;
use crate::types::{RequestRecord, SignedHeaders, UserData};

/// Error type for request signing.
#[derive(Debug, thiserror::Error)]
pub enum SignError {
    #[error(transparent)]
    Key(#[from] KeyError),
}

/// Sign one request with the ephemeral private key.
pub fn sign_request(
    user_data: &UserData,
    record: &RequestRecord,
) -> Result<SignedHeaders, SignError> {
    let timestamp = record
        .timestamp
        .unwrap_or_else(|| Utc::now().timestamp_millis());
    let digest = request_digest(&record.method, &record.url, timestamp, &record.body);
    let signature = user_data.keypair.sign_digest(&digest)?;

    Ok(SignedHeaders {
        identity: format_identity(&user_data.address, &user_data.keypair.public_key_hex()),
        signature: hex::encode(signature),
        certificate: user_data.message.clone(),
        certificate_signature: user_data.signature.clone(),
        timestamp: timestamp.to_string(),
    })
}

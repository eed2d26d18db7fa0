//! Server-side validation pipeline.
//!
//! Ordered, fail-fast checks over a received request and its signed
//! headers: content length, timestamp freshness, request signature,
//! certificate expiry, certificate authenticity. Always returns a result
//! carrying exactly one error kind; expected authentication failures are
//! never control-flow exceptions.

use chrono::Utc;
use tracing::debug;

use eka_crypto::signature::verify_digest;

use crate::certificate::parse_expiry;
use crate::config::AuthConfig;
use crate::digest::request_digest;
use crate::identity::parse_identity;
use crate::provider::AccountProvider;
use crate::types::{strip_hex_prefix, RequestRecord, ServerHeaders};

/// The first check that failed, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The identity header could not be decoded; nothing it names can be
    /// trusted, and no further check runs.
    #[error("identity header is malformed")]
    MalformedIdentity,
    #[error("declared content length exceeds the configured maximum")]
    ContentTooLarge,
    #[error("request timestamp is outside the replay window")]
    StaleRequest,
    #[error("request signature verification failed")]
    InvalidSignature,
    #[error("certificate has expired")]
    ExpiredCertificate,
    #[error("certificate signer does not match the claimed identity")]
    InvalidCertificate,
}

/// Validate one request against its signed headers.
///
/// Idempotent: identical inputs yield identical results. Async only at the
/// final authenticity check, which delegates signer recovery to the account
/// provider.
pub async fn validate(
    provider: &dyn AccountProvider,
    record: &RequestRecord,
    headers: &ServerHeaders,
    config: &AuthConfig,
) -> Result<(), ValidationError> {
    // Decoding the identity is a prerequisite for the signature and
    // certificate checks, so it happens before the pipeline proper.
    let identity = parse_identity(&headers.signed.identity)
        .map_err(|_| ValidationError::MalformedIdentity)?;

    // 1. Content length.
    if headers.content_length > config.max_content_length {
        debug!(
            declared = headers.content_length,
            max = config.max_content_length,
            "rejecting oversized request"
        );
        return Err(ValidationError::ContentTooLarge);
    }

    // 2. Freshness. Only staleness is checked here; a forged future
    // timestamp falls through to the signature check.
    let timestamp: i64 = headers
        .signed
        .timestamp
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidSignature)?;
    let age = Utc::now().timestamp_millis() - timestamp;
    if age > config.replay_window.num_milliseconds() {
        debug!(age_ms = age, "rejecting stale request");
        return Err(ValidationError::StaleRequest);
    }

    // 3. Request signature, recomputed from the actual request fields.
    let digest = request_digest(&record.method, &record.url, timestamp, &record.body);
    let public_key = hex::decode(strip_hex_prefix(&identity.ephemeral_public_key))
        .map_err(|_| ValidationError::InvalidSignature)?;
    let signature = hex::decode(strip_hex_prefix(&headers.signed.signature))
        .map_err(|_| ValidationError::InvalidSignature)?;
    verify_digest(&public_key, &digest, &signature)
        .map_err(|_| ValidationError::InvalidSignature)?;

    // 4. Certificate expiry. Malformed certificate text counts as expired.
    let certificate_bytes = hex::decode(strip_hex_prefix(&headers.signed.certificate))
        .map_err(|_| ValidationError::ExpiredCertificate)?;
    let certificate = String::from_utf8(certificate_bytes)
        .map_err(|_| ValidationError::ExpiredCertificate)?;
    let expires_at =
        parse_expiry(&certificate).map_err(|_| ValidationError::ExpiredCertificate)?;
    if expires_at < Utc::now() {
        return Err(ValidationError::ExpiredCertificate);
    }

    // 5. Certificate authenticity: the recovered signer must be the
    // primary address the identity claims. Provider failure means the
    // certificate cannot be vouched for.
    let recovered = provider
        .recover_signer(
            &headers.signed.certificate,
            &headers.signed.certificate_signature,
        )
        .await
        .map_err(|_| ValidationError::InvalidCertificate)?;
    if !recovered.eq_ignore_ascii_case(&identity.address) {
        debug!(
            recovered = %recovered,
            claimed = %identity.address,
            "certificate signer mismatch"
        );
        return Err(ValidationError::InvalidCertificate);
    }

    Ok(())
}

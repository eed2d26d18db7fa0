//! Certificate text codec.
//!
//! The certificate is an immutable, newline-significant text blob:
//!
//! ```text
//! Decentraland Access Auth
//! Key: <ephemeralPublicKeyHex>.
//! Token: <network>://<tokenAddress>
//! Date: <issuedAt RFC 3339>
//! Expires: <expiresAt RFC 3339>
//! ```
//!
//! The template is bit-exact for interoperability; parsing only ever
//! extracts the `Expires:` field and is tolerant of surrounding whitespace.

use chrono::{DateTime, SecondsFormat, Utc};

const EXPIRES_FIELD: &str = "Expires: ";

/// Error type for certificate parsing.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CertificateError {
    #[error("certificate text is malformed")]
    Malformed,
    #[error("certificate expiry is not an RFC 3339 timestamp")]
    BadTimestamp,
}

/// Fields baked into a certificate at issuance.
#[derive(Debug, Clone)]
pub struct CertificateParams<'a> {
    pub ephemeral_public_key_hex: &'a str,
    pub network: &'a str,
    pub token_address: &'a str,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

pub fn build_certificate(params: &CertificateParams<'_>) -> String {
    format!(
        "Decentraland Access Auth\nKey: {}.\nToken: {}://{}\nDate: {}\nExpires: {}",
        params.ephemeral_public_key_hex,
        params.network,
        params.token_address,
        params.issued_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        params.expires_at.to_rfc3339_opts(SecondsFormat::Millis, true),
    )
}

/// Extract and parse the `Expires:` timestamp.
///
/// Takes the substring after the field marker to end-of-text. A missing
/// marker or unparseable date is the caller's cue to treat the certificate
/// as expired.
pub fn parse_expiry(certificate: &str) -> Result<DateTime<Utc>, CertificateError> {
    let start = certificate
        .find(EXPIRES_FIELD)
        .ok_or(CertificateError::Malformed)?
        + EXPIRES_FIELD.len();
    let raw = certificate[start..].trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| CertificateError::BadTimestamp)
}

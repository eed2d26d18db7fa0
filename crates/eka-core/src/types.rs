//! Protocol data types and header plumbing.

use bytes::Bytes;
use chrono::{DateTime, Utc};

use eka_crypto::keys::EphemeralKeypair;

pub const HEADER_IDENTITY: &str = "x-identity";
pub const HEADER_SIGNATURE: &str = "x-signature";
pub const HEADER_CERTIFICATE: &str = "x-certificate";
pub const HEADER_CERTIFICATE_SIGNATURE: &str = "x-certificate-signature";
pub const HEADER_TIMESTAMP: &str = "x-timestamp";
pub const HEADER_CONTENT_LENGTH: &str = "content-length";

/// Everything a client holds for one authenticated session.
///
/// Produced once by [`crate::issuer::issue`]; consumed read-only by
/// [`crate::signer::sign_request`] until `expires_at`.
#[derive(Clone, Debug)]
pub struct UserData {
    /// Primary account address.
    pub address: String,
    /// Ephemeral keypair certified by the primary account.
    pub keypair: EphemeralKeypair,
    /// Hex-encoded certificate text (`0x`-prefixed).
    pub message: String,
    /// The primary account's signature over `message`.
    pub signature: String,
    /// Instant after which the certificate is no longer valid.
    pub expires_at: DateTime<Utc>,
}

/// One request, as fed to the digest. Never persisted.
#[derive(Debug, Clone)]
pub struct RequestRecord {
    pub method: String,
    pub url: String,
    /// Unix milliseconds. Captured fresh at signing time when absent.
    pub timestamp: Option<i64>,
    pub body: Bytes,
}

/// The five signed header values, one set per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    pub identity: String,
    pub signature: String,
    pub certificate: String,
    pub certificate_signature: String,
    pub timestamp: String,
}

impl SignedHeaders {
    /// Iterate as `(header name, value)` pairs for handing to a transport.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            (HEADER_IDENTITY, self.identity.as_str()),
            (HEADER_SIGNATURE, self.signature.as_str()),
            (HEADER_CERTIFICATE, self.certificate.as_str()),
            (
                HEADER_CERTIFICATE_SIGNATURE,
                self.certificate_signature.as_str(),
            ),
            (HEADER_TIMESTAMP, self.timestamp.as_str()),
        ]
        .into_iter()
    }
}

/// Server-side view: the signed headers plus the transport's declared length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerHeaders {
    pub signed: SignedHeaders,
    /// Declared body size; absent `content-length` counts as zero.
    pub content_length: u64,
}

impl ServerHeaders {
    /// Collect the protocol headers out of a header list.
    ///
    /// Names are matched case-insensitively. Returns `None` when any of the
    /// five signed headers is missing; an unparseable `content-length` is
    /// treated as zero (the transport already rejects those).
    pub fn from_pairs<'a, I>(pairs: I) -> Option<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut identity = None;
        let mut signature = None;
        let mut certificate = None;
        let mut certificate_signature = None;
        let mut timestamp = None;
        let mut content_length = 0u64;

        for (name, value) in pairs {
            let name = name.to_ascii_lowercase();
            match name.as_str() {
                HEADER_IDENTITY => identity = Some(value.to_string()),
                HEADER_SIGNATURE => signature = Some(value.to_string()),
                HEADER_CERTIFICATE => certificate = Some(value.to_string()),
                HEADER_CERTIFICATE_SIGNATURE => {
                    certificate_signature = Some(value.to_string())
                }
                HEADER_TIMESTAMP => timestamp = Some(value.to_string()),
                HEADER_CONTENT_LENGTH => {
                    content_length = value.trim().parse().unwrap_or(0);
                }
                _ => {}
            }
        }

        Some(Self {
            signed: SignedHeaders {
                identity: identity?,
                signature: signature?,
                certificate: certificate?,
                certificate_signature: certificate_signature?,
                timestamp: timestamp?,
            },
            content_length,
        })
    }
}

/// Drop an optional `0x` prefix from a hex string.
pub fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x").unwrap_or(s)
}

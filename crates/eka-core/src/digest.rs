//! The shared request digest.
//!
//! Signer and validator must produce bit-identical output for identical
//! inputs; changing the method, url, timestamp, or any body byte changes
//! the digest and invalidates the signature.

use eka_crypto::hash::sha256;

/// `SHA-256(method || url || decimal(timestamp) || body)`
pub fn request_digest(method: &str, url: &str, timestamp_ms: i64, body: &[u8]) -> [u8; 32] {
    let timestamp = timestamp_ms.to_string();
    let mut data =
        Vec::with_capacity(method.len() + url.len() + timestamp.len() + body.len());
    data.extend_from_slice(method.as_bytes());
    data.extend_from_slice(url.as_bytes());
    data.extend_from_slice(timestamp.as_bytes());
    data.extend_from_slice(body);
    sha256(&data)
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://api.example.com/v1/thing";

    #[test]
    fn test_digest_is_deterministic() {
        let a = request_digest("POST", URL, 1_700_000_000_000, b"{\"a\":1}");
        let b = request_digest("POST", URL, 1_700_000_000_000, b"{\"a\":1}");
        assert_eq!(a, b);
    }

    #[test]
    fn test_digest_matches_concatenation() {
        let digest = request_digest("GET", "/x", 42, b"body");
        assert_eq!(digest, eka_crypto::hash::sha256(b"GET/x42body"));
    }

    #[test]
    fn test_each_field_changes_digest() {
        let base = request_digest("POST", URL, 1_700_000_000_000, b"{\"a\":1}");
        assert_ne!(base, request_digest("GET", URL, 1_700_000_000_000, b"{\"a\":1}"));
        assert_ne!(
            base,
            request_digest("POST", "https://api.example.com/v1/other", 1_700_000_000_000, b"{\"a\":1}")
        );
        assert_ne!(base, request_digest("POST", URL, 1_700_000_000_001, b"{\"a\":1}"));
        assert_ne!(base, request_digest("POST", URL, 1_700_000_000_000, b"{\"a\":2}"));
    }
}

//! Protocol limits and validity configuration.

use chrono::Duration;

/// Default maximum declared request body size: 10 MiB.
pub const MAX_CONTENT_LENGTH: u64 = 10 * 1024 * 1024;

/// Default replay window: one minute.
pub const REPLAY_WINDOW_MS: i64 = 60_000;

/// Default certificate validity: one month.
pub const CERTIFICATE_VALIDITY_DAYS: i64 = 30;

/// Tunable limits shared by issuer and validator.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Maximum declared body size the validator accepts.
    pub max_content_length: u64,
    /// Maximum age of `x-timestamp` before a request is stale.
    pub replay_window: Duration,
    /// Lifetime of an issued certificate.
    pub certificate_validity: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            max_content_length: MAX_CONTENT_LENGTH,
            replay_window: Duration::milliseconds(REPLAY_WINDOW_MS),
            certificate_validity: Duration::days(CERTIFICATE_VALIDITY_DAYS),
        }
    }
}

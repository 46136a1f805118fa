use thiserror::Error;

/// Top-level error type for the `tikleases-api` crate.
///
/// Covers every way a RouterOS REST call can fail: building the client,
/// reaching the router, a non-2xx answer, or a body we can't decode.
/// `tikleases-core` folds these into its transport error channel.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, TLS handshake, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS configuration or HTTP client construction error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Router responses ────────────────────────────────────────────
    /// The router answered with a non-2xx status.
    #[error("HTTP {status} {reason}")]
    Http {
        status: u16,
        reason: String,
        body: String,
    },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// HTTP status code associated with this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if the router rejected our credentials.
    pub fn is_auth_failure(&self) -> bool {
        self.status().is_some_and(is_auth_status)
    }

    /// Returns `true` if this is a transient error worth retrying.
    ///
    /// The client itself never retries; this is a hint for callers.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Http { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

/// RouterOS answers 401 for bad credentials and 403 when the user's group
/// lacks the `rest-api` policy.
pub fn is_auth_status(status: u16) -> bool {
    matches!(status, 401 | 403)
}

// ── Core error types ──
//
// Two channels only: the configuration is unusable, or talking to the
// router failed. The `From<tikleases_api::Error>` impl folds every
// transport-layer failure into the second one with router context.

use thiserror::Error;

/// Environment variables that carry the router credentials.
pub const CONFIG_VARS: [&str; 3] = ["MIKROTIK_URL", "MIKROTIK_USERNAME", "MIKROTIK_PASSWORD"];

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A required setting is missing or unusable. Never retried.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Network failure, non-2xx answer, or an undecodable body.
    #[error("{message}")]
    Transport {
        message: String,
        /// HTTP status code, when the router answered at all.
        status: Option<u16>,
    },
}

impl CoreError {
    /// The standard error for missing router credentials.
    pub fn missing_credentials() -> Self {
        Self::Config {
            message: format!(
                "Missing MikroTik configuration. Please set {}, {}, and {} environment variables.",
                CONFIG_VARS[0], CONFIG_VARS[1], CONFIG_VARS[2]
            ),
        }
    }

    /// HTTP status carried by a transport error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => *status,
            Self::Config { .. } => None,
        }
    }

    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. })
    }

    /// `true` when the router refused the credentials.
    pub fn is_auth_failure(&self) -> bool {
        self.status().is_some_and(tikleases_api::error::is_auth_status)
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<tikleases_api::Error> for CoreError {
    fn from(err: tikleases_api::Error) -> Self {
        match err {
            tikleases_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid router URL: {e}"),
            },
            other => CoreError::Transport {
                status: other.status(),
                message: format!(
                    "Failed to connect to MikroTik router: {}",
                    error_chain(&other)
                ),
            },
        }
    }
}

/// Render an error and its sources as `outer: inner: root`.
///
/// reqwest keeps the useful part ("connection refused", "invalid peer
/// certificate") in the source chain, not in its own `Display`.
fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credentials_names_every_variable() {
        let err = CoreError::missing_credentials();
        let text = err.to_string();
        for var in CONFIG_VARS {
            assert!(text.contains(var), "{var} missing from: {text}");
        }
        assert!(err.is_config());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn http_error_keeps_status_and_reason() {
        let err: CoreError = tikleases_api::Error::Http {
            status: 401,
            reason: "Unauthorized".into(),
            body: String::new(),
        }
        .into();

        assert_eq!(err.status(), Some(401));
        assert!(err.is_auth_failure());
        assert_eq!(
            err.to_string(),
            "Failed to connect to MikroTik router: HTTP 401 Unauthorized"
        );
    }

    #[test]
    fn deserialization_error_is_transport() {
        let err: CoreError = tikleases_api::Error::Deserialization {
            message: "expected a sequence".into(),
            body: "{}".into(),
        }
        .into();

        assert!(!err.is_config());
        assert!(!err.is_auth_failure());
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("expected a sequence"));
    }

    #[test]
    fn invalid_url_is_config() {
        let parse_err = url::Url::parse("not a url").expect_err("must not parse");
        let err: CoreError = tikleases_api::Error::InvalidUrl(parse_err).into();
        assert!(err.is_config());
    }
}

//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use tikleases_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const CONFIG: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Configuration ────────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(
        code(tikleases::config),
        help(
            "Set MIKROTIK_URL, MIKROTIK_USERNAME and MIKROTIK_PASSWORD,\n\
             pass --url/--username/--password, or add url, username and\n\
             password to the config file (see --config)."
        )
    )]
    Config { message: String },

    #[error("Could not load configuration")]
    #[diagnostic(code(tikleases::config_file))]
    ConfigFile(#[source] Box<figment::Error>),

    // ── Router ───────────────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(
        code(tikleases::auth_failed),
        help(
            "The router rejected the credentials (HTTP {status}).\n\
             Check MIKROTIK_USERNAME / MIKROTIK_PASSWORD and that the user's\n\
             group has the 'read', 'api' and 'rest-api' policies."
        )
    )]
    AuthFailed { message: String, status: u16 },

    #[error("{message}")]
    #[diagnostic(
        code(tikleases::router),
        help(
            "Check that MIKROTIK_URL points at the router and that its\n\
             www-ssl (or www) service is enabled and reachable."
        )
    )]
    Router { message: String, status: Option<u16> },

    // ── IO ───────────────────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::ConfigFile(Box::new(err))
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } | Self::ConfigFile(_) => exit_code::CONFIG,
            Self::AuthFailed { .. } => exit_code::AUTH,
            Self::Router { .. } => exit_code::CONNECTION,
            Self::Io(_) => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        let auth_failure = err.is_auth_failure();
        match err {
            CoreError::Config { message } => CliError::Config { message },
            CoreError::Transport {
                message,
                status: Some(status),
            } if auth_failure => CliError::AuthFailed { message, status },
            CoreError::Transport { message, status } => CliError::Router { message, status },
        }
    }
}

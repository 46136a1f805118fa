// ── Runtime router configuration ──
//
// Describes *how* to reach the router. Built once by the binary (from
// flags, environment, and config file) and handed to the fetcher by
// reference; core never reads the environment or disk itself.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use tikleases_api::{TlsMode, TransportConfig};
use url::Url;

use crate::error::CoreError;

/// TLS verification strategy for the router connection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification. RouterOS serves a self-signed certificate by default.
    #[default]
    DangerAcceptInvalid,
}

/// Everything needed to talk to one router.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Router base URL, scheme and host only (e.g. `https://192.168.88.1`).
    pub url: Url,
    pub username: String,
    pub password: SecretString,
    pub tls: TlsVerification,
    /// Request timeout. `None` keeps the transport default.
    pub timeout: Option<Duration>,
}

impl RouterConfig {
    /// Validate the three required settings.
    ///
    /// A missing or empty value yields [`CoreError::missing_credentials`].
    /// The URL must be `http(s)` and must not embed credentials, which would
    /// otherwise leak into error messages.
    pub fn from_parts(
        url: Option<&str>,
        username: Option<&str>,
        password: Option<SecretString>,
    ) -> Result<Self, CoreError> {
        let url = url.filter(|v| !v.trim().is_empty());
        let username = username.filter(|v| !v.is_empty());
        let password = password.filter(|v| !v.expose_secret().is_empty());

        let (Some(url), Some(username), Some(password)) = (url, username, password) else {
            return Err(CoreError::missing_credentials());
        };

        Ok(Self {
            url: parse_router_url(url)?,
            username: username.to_owned(),
            password,
            tls: TlsVerification::default(),
            timeout: None,
        })
    }

    pub fn with_tls(mut self, tls: TlsVerification) -> Self {
        self.tls = tls;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Transport settings for the client dedicated to this router.
    pub fn transport(&self) -> TransportConfig {
        let tls = match &self.tls {
            TlsVerification::SystemDefaults => TlsMode::System,
            TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
        };
        TransportConfig {
            tls,
            timeout: self.timeout,
        }
    }
}

fn parse_router_url(raw: &str) -> Result<Url, CoreError> {
    let url = Url::parse(raw.trim()).map_err(|e| CoreError::Config {
        message: format!("invalid router URL: {e}"),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(CoreError::Config {
            message: format!("router URL must use http or https, got '{}'", url.scheme()),
        });
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(CoreError::Config {
            message: "router URL must not have a query or fragment; use the router address only, e.g. https://192.168.88.1".into(),
        });
    }
    if !url.username().is_empty() || url.password().is_some() {
        return Err(CoreError::Config {
            message: "router URL must not embed credentials; use MIKROTIK_USERNAME and MIKROTIK_PASSWORD".into(),
        });
    }
    Ok(url)
}

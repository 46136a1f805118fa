//! CLI configuration: config file + environment + flags -> `RouterConfig`.
//!
//! Layering (later wins): TOML config file, typed `MIKROTIK_*` variables,
//! then command-line flags. The credential variables (`MIKROTIK_URL`,
//! `MIKROTIK_USERNAME`, `MIKROTIK_PASSWORD`) are read by clap as raw
//! strings so a numeric password is never reinterpreted as a number.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use tikleases_core::{CoreError, RouterConfig, TlsVerification};

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Router settings as they appear in the config file.
///
/// ```toml
/// url = "https://192.168.88.1"
/// username = "viewer"
/// password = "..."
/// ca_cert = "/etc/ssl/router.pem"
/// ```
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Accept self-signed certificates. Unset means yes unless `ca_cert` is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insecure: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca_cert: Option<PathBuf>,
    /// Request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
}

impl From<&GlobalOpts> for Settings {
    fn from(global: &GlobalOpts) -> Self {
        Self {
            url: global.url.clone(),
            username: global.username.clone(),
            password: global.password.clone(),
            insecure: global.insecure.then_some(true),
            ca_cert: global.ca_cert.clone(),
            timeout: global.timeout,
        }
    }
}

impl Settings {
    /// Validate into a `RouterConfig`. `strict_tls` overrides every other
    /// TLS setting.
    pub fn into_router_config(self, strict_tls: bool) -> Result<RouterConfig, CoreError> {
        let tls = match (strict_tls, self.insecure, self.ca_cert) {
            (true, _, _) => TlsVerification::SystemDefaults,
            (false, Some(true), _) => TlsVerification::DangerAcceptInvalid,
            (false, _, Some(ca)) => TlsVerification::CustomCa(ca),
            (false, Some(false), None) => TlsVerification::SystemDefaults,
            (false, None, None) => TlsVerification::DangerAcceptInvalid,
        };

        let config = RouterConfig::from_parts(
            self.url.as_deref(),
            self.username.as_deref(),
            self.password.map(SecretString::from),
        )?;

        let timeout = match self.timeout {
            Some(0) => {
                return Err(CoreError::Config {
                    message: "timeout must be at least 1 second; leave it unset for no timeout"
                        .into(),
                });
            }
            secs => secs.map(Duration::from_secs),
        };

        Ok(config.with_tls(tls).with_timeout(timeout))
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "tikleases", "tikleases").map_or_else(
        || PathBuf::from(".").join("tikleases.toml"),
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

// ── Loading ─────────────────────────────────────────────────────────

/// Layer the config file, environment, and flag overrides.
///
/// A missing config file is not an error; it simply contributes nothing.
pub fn figment(path: &Path, overrides: &Settings) -> Figment {
    Figment::new()
        .merge(Toml::file(path))
        .merge(Env::prefixed("MIKROTIK_").ignore(&["url", "username", "password"]))
        .merge(Serialized::defaults(overrides))
}

/// Resolve the router configuration once for this process.
pub fn resolve_router_config(global: &GlobalOpts) -> Result<RouterConfig, CliError> {
    let path = global.config.clone().unwrap_or_else(config_path);
    tracing::debug!(path = %path.display(), "loading configuration");

    let settings: Settings = figment(&path, &Settings::from(global)).extract()?;
    Ok(settings.into_router_config(global.strict_tls)?)
}

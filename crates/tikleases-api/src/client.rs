// RouterOS REST HTTP client
//
// Wraps `reqwest::Client` with RouterOS URL construction, HTTP Basic
// authentication, and response classification. Endpoint modules (leases)
// are implemented as inherent methods in separate files to keep this
// module focused on transport mechanics.

use reqwest::header::ACCEPT;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// Raw HTTP client for the RouterOS REST API (`/rest/...`).
///
/// Every request carries the configured credentials as an HTTP Basic
/// `Authorization` header. The client never retries: a request either
/// returns the decoded body or a single [`Error`].
pub struct RouterClient {
    http: reqwest::Client,
    base_url: Url,
    username: String,
    password: SecretString,
}

impl std::fmt::Debug for RouterClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouterClient")
            .field("base_url", &self.base_url.as_str())
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl RouterClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// The `base_url` is the router root (e.g. `https://192.168.88.1`),
    /// without the `/rest` suffix.
    pub fn new(
        base_url: Url,
        username: String,
        password: SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self::with_client(http, base_url, username, password))
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(
        http: reqwest::Client,
        base_url: Url,
        username: String,
        password: SecretString,
    ) -> Self {
        Self {
            http,
            base_url,
            username,
            password,
        }
    }

    /// The router base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The user the client authenticates as.
    pub fn username(&self) -> &str {
        &self.username
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build a full URL for a REST resource: `{base}/rest/{path}`.
    ///
    /// Segments are appended to the base path; any query or fragment on the
    /// base URL is dropped so it can never swallow the resource path.
    pub(crate) fn rest_url(&self, path: &str) -> Result<Url, Error> {
        let mut endpoint = self.base_url.clone();
        endpoint.set_query(None);
        endpoint.set_fragment(None);
        endpoint
            .path_segments_mut()
            .map_err(|()| Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .push("rest")
            .extend(path.split('/').filter(|s| !s.is_empty()));
        Ok(endpoint)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send an authenticated GET request and decode the JSON body.
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {}", url);

        let resp = self
            .http
            .get(url)
            .basic_auth(&self.username, Some(self.password.expose_secret()))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(Error::Transport)?;

        Self::parse_response(resp).await
    }

    /// Map non-2xx statuses to [`Error::Http`] and decode the body otherwise.
    async fn parse_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Http {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_owned(),
                body,
            });
        }

        let body = resp.text().await.map_err(Error::Transport)?;

        serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leases::LEASE_PATH;

    fn client(base: &str) -> RouterClient {
        RouterClient::with_client(
            reqwest::Client::new(),
            Url::parse(base).expect("valid test URL"),
            "admin".into(),
            SecretString::from("hunter2".to_string()),
        )
    }

    #[test]
    fn rest_url_joins_without_double_slashes() {
        let c = client("https://192.168.88.1/");
        let url = c.rest_url("/ip/dhcp-server/lease").expect("valid URL");
        assert_eq!(url.as_str(), "https://192.168.88.1/rest/ip/dhcp-server/lease");
    }

    #[test]
    fn rest_url_keeps_port() {
        let c = client("https://router.lan:8443");
        let url = c.rest_url("ip/dhcp-server/lease").expect("valid URL");
        assert_eq!(url.as_str(), "https://router.lan:8443/rest/ip/dhcp-server/lease");
    }

    #[test]
    fn rest_url_keeps_base_path_prefix() {
        let c = client("https://proxy.lan/router/");
        let url = c.rest_url("ip/dhcp-server/lease").expect("valid URL");
        assert_eq!(url.as_str(), "https://proxy.lan/router/rest/ip/dhcp-server/lease");
    }

    #[test]
    fn rest_url_drops_query_and_fragment() {
        for base in ["https://192.168.88.1/?x=1", "https://192.168.88.1/#f"] {
            let url = client(base).rest_url(LEASE_PATH).expect("valid URL");
            assert_eq!(url.as_str(), "https://192.168.88.1/rest/ip/dhcp-server/lease");
            assert_eq!(url.query(), None);
            assert_eq!(url.fragment(), None);
        }
    }

    #[test]
    fn debug_never_prints_password() {
        let c = client("https://192.168.88.1");
        let rendered = format!("{c:?}");
        assert!(rendered.contains("admin"));
        assert!(!rendered.contains("hunter2"));
    }
}

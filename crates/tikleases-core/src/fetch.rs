// ── Lease fetcher ──
//
// One authenticated round trip per call. No retries and no caching of
// results: every fetch yields a fresh snapshot that replaces the previous
// one wholesale.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use tikleases_api::RouterClient;
use tracing::{debug, error, warn};

use crate::Lease;
use crate::config::RouterConfig;
use crate::error::CoreError;
use crate::filter::{LeaseFilter, derive_vlans};

/// An immutable lease table from a single fetch, with its derived VLAN list.
#[derive(Debug, Clone)]
pub struct LeaseSnapshot {
    leases: Vec<Lease>,
    vlans: Vec<String>,
    fetched_at: DateTime<Utc>,
}

impl LeaseSnapshot {
    pub fn new(leases: Vec<Lease>) -> Self {
        let vlans = derive_vlans(&leases);
        Self {
            leases,
            vlans,
            fetched_at: Utc::now(),
        }
    }

    pub fn leases(&self) -> &[Lease] {
        &self.leases
    }

    /// Distinct VLAN labels, ascending.
    pub fn vlans(&self) -> &[String] {
        &self.vlans
    }

    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    pub fn len(&self) -> usize {
        self.leases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leases.is_empty()
    }

    /// Visible subset for the given filter, in router order.
    pub fn filter(&self, filter: &LeaseFilter) -> Vec<&Lease> {
        filter.apply(&self.leases)
    }
}

/// Fetches the lease table from one router.
///
/// Owns the `reqwest::Client` built for that router, so its TLS policy
/// applies to this connection only.
#[derive(Debug)]
pub struct LeaseFetcher {
    client: RouterClient,
}

impl LeaseFetcher {
    pub fn new(config: &RouterConfig) -> Result<Self, CoreError> {
        let client = RouterClient::new(
            config.url.clone(),
            config.username.clone(),
            config.password.clone(),
            &config.transport(),
        )?;
        Ok(Self { client })
    }

    /// Wrap an already-built client.
    pub fn with_client(client: RouterClient) -> Self {
        Self { client }
    }

    /// Retrieve the current lease table.
    ///
    /// Failures are logged and returned; they are never turned into an
    /// empty snapshot.
    pub async fn fetch(&self) -> Result<LeaseSnapshot, CoreError> {
        debug!(router = %self.client.base_url(), "fetching DHCP leases");

        let leases = self.client.list_leases().await.map_err(|e| {
            let (transient, auth_failure) = (e.is_transient(), e.is_auth_failure());
            let err = CoreError::from(e);
            error!(
                router = %self.client.base_url(),
                status = ?err.status(),
                transient,
                auth_failure,
                error = %err,
                "error fetching DHCP leases"
            );
            err
        })?;

        warn_on_duplicate_ids(&leases);
        let snapshot = LeaseSnapshot::new(leases);
        debug!(
            leases = snapshot.len(),
            vlans = snapshot.vlans().len(),
            "DHCP leases fetched"
        );
        Ok(snapshot)
    }
}

/// Build a fetcher for `config` and run a single fetch.
pub async fn fetch_leases(config: &RouterConfig) -> Result<LeaseSnapshot, CoreError> {
    LeaseFetcher::new(config)?.fetch().await
}

fn warn_on_duplicate_ids(leases: &[Lease]) {
    let mut seen = HashSet::with_capacity(leases.len());
    for lease in leases {
        if !seen.insert(lease.id.as_str()) {
            warn!(id = %lease.id, "router reported duplicate lease id");
        }
    }
}

// DHCP server lease endpoint
//
// Read-only access to `/rest/ip/dhcp-server/lease`. RouterOS returns the
// whole lease table as a bare JSON array; there is no paging.

use tracing::debug;

use crate::client::RouterClient;
use crate::error::Error;
use crate::models::DhcpLease;

/// REST path of the DHCP lease collection, relative to `/rest/`.
pub const LEASE_PATH: &str = "ip/dhcp-server/lease";

impl RouterClient {
    /// List every DHCP lease known to the router.
    ///
    /// `GET /rest/ip/dhcp-server/lease`
    pub async fn list_leases(&self) -> Result<Vec<DhcpLease>, Error> {
        let url = self.rest_url(LEASE_PATH)?;
        debug!("listing DHCP leases");
        let leases: Vec<DhcpLease> = self.get(url).await?;
        debug!(count = leases.len(), "DHCP leases received");
        Ok(leases)
    }
}

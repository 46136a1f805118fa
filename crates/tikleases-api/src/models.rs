// RouterOS REST response types
//
// RouterOS reports every attribute as a string (booleans are "true" /
// "false", durations like "1d2h3m") and omits keys it has no value for.
// Field names are the router's own hyphenated names and are kept verbatim
// on both deserialization and serialization.

use serde::{Deserialize, Serialize};

/// One entry of `/rest/ip/dhcp-server/lease`.
///
/// Attributes the viewer doesn't interpret are still modelled so they
/// round-trip with their router names; anything not listed here lands in
/// `extra`. Absent keys and empty strings are kept distinct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DhcpLease {
    /// Router-assigned identifier (e.g. `*1A`). Unique within one listing.
    #[serde(rename = ".id")]
    pub id: String,
    #[serde(default, rename = "active-address", skip_serializing_if = "Option::is_none")]
    pub active_address: Option<String>,
    #[serde(default, rename = "active-client-id", skip_serializing_if = "Option::is_none")]
    pub active_client_id: Option<String>,
    #[serde(default, rename = "active-mac-address", skip_serializing_if = "Option::is_none")]
    pub active_mac_address: Option<String>,
    /// DHCP server that issued the lease; used as the VLAN label.
    #[serde(default, rename = "active-server", skip_serializing_if = "Option::is_none")]
    pub active_server: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, rename = "address-lists", skip_serializing_if = "Option::is_none")]
    pub address_lists: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocked: Option<String>,
    #[serde(default, rename = "client-id", skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, rename = "dhcp-option", skip_serializing_if = "Option::is_none")]
    pub dhcp_option: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic: Option<String>,
    #[serde(default, rename = "expires-after", skip_serializing_if = "Option::is_none")]
    pub expires_after: Option<String>,
    #[serde(default, rename = "host-name", skip_serializing_if = "Option::is_none")]
    pub host_name: Option<String>,
    #[serde(default, rename = "last-seen", skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<String>,
    #[serde(default, rename = "mac-address", skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
    /// Lease state (`bound`, `waiting`, `offered`, ...). Not an enum: the
    /// router's vocabulary grows between releases.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Catch-all for attributes not modelled above.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl DhcpLease {
    /// The issuing DHCP server (VLAN label), treating an empty value as absent.
    pub fn vlan(&self) -> Option<&str> {
        non_empty(self.active_server.as_deref())
    }

    /// The client-supplied hostname, treating an empty value as absent.
    pub fn hostname(&self) -> Option<&str> {
        non_empty(self.host_name.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

//! Lease retrieval and view logic between `tikleases-api` and the viewer.
//!
//! - **[`RouterConfig`]** — resolved once at startup and passed by
//!   reference to the fetcher. Missing credentials fail here, before any
//!   network traffic.
//!
//! - **[`LeaseFetcher`] / [`fetch_leases`]** — one authenticated round trip
//!   to the router per call, producing an immutable [`LeaseSnapshot`].
//!   Every failure surfaces as a single [`CoreError`]; a failed fetch is
//!   never reported as an empty table.
//!
//! - **Filter engine** ([`filter`]) — pure functions over a lease slice:
//!   [`derive_vlans`] lists the distinct VLAN labels and [`filter_leases`]
//!   applies a VLAN selection plus a case-insensitive hostname query.

pub mod config;
pub mod error;
pub mod fetch;
pub mod filter;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{RouterConfig, TlsVerification};
pub use error::CoreError;
pub use fetch::{LeaseFetcher, LeaseSnapshot, fetch_leases};
pub use filter::{LeaseFilter, VlanSelection, derive_vlans, filter_leases};

/// A DHCP lease as reported by the router.
pub use tikleases_api::DhcpLease as Lease;

// tikleases-api: Async Rust client for the MikroTik RouterOS REST API

pub mod client;
pub mod error;
pub mod leases;
pub mod models;
pub mod transport;

pub use client::RouterClient;
pub use error::Error;
pub use models::DhcpLease;
pub use transport::{TlsMode, TransportConfig};

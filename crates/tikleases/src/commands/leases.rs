//! Lease listing.

use owo_colors::OwoColorize;
use tabled::Tabled;
use tikleases_core::{Lease, LeaseFilter, RouterConfig, VlanSelection, fetch_leases};

use crate::cli::{GlobalOpts, LeasesArgs, OutputFormat};
use crate::error::CliError;
use crate::output;

const MISSING: &str = "—";

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct LeaseRow {
    #[tabled(rename = "IP Address")]
    ip: String,
    #[tabled(rename = "MAC Address")]
    mac: String,
    #[tabled(rename = "Hostname")]
    hostname: String,
    #[tabled(rename = "Server (VLAN)")]
    server: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl LeaseRow {
    fn new(lease: &Lease, color: bool) -> Self {
        let status = lease.status.clone().unwrap_or_default();
        let status = if color && status == "bound" {
            status.green().to_string()
        } else {
            status
        };

        Self {
            ip: lease.active_address.clone().unwrap_or_default(),
            mac: lease.active_mac_address.clone().unwrap_or_default(),
            hostname: lease.hostname().unwrap_or(MISSING).to_owned(),
            server: lease.active_server.clone().unwrap_or_default(),
            status,
        }
    }
}

/// Message shown when the filter leaves nothing to display.
fn empty_message(vlan: &VlanSelection) -> String {
    if vlan.is_all() {
        "No leases found.".into()
    } else {
        "No leases found for this VLAN.".into()
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    config: &RouterConfig,
    args: LeasesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let snapshot = fetch_leases(config).await?;
    let filter = LeaseFilter::new(VlanSelection::from(args.vlan), args.host);
    let visible = snapshot.filter(&filter);

    tracing::debug!(
        vlan = %filter.vlan,
        hostname = %filter.hostname,
        shown = visible.len(),
        total = snapshot.len(),
        fetched_at = %snapshot.fetched_at().to_rfc3339(),
        "leases filtered"
    );

    let table = global.output == OutputFormat::Table;
    if table && visible.is_empty() {
        output::print_status(&empty_message(&filter.vlan), global.quiet);
        return Ok(());
    }

    let color = table && output::should_color(global.color);
    let out = output::render_list(
        global.output,
        &visible,
        |l| LeaseRow::new(l, color),
        |l| l.id.clone(),
    );
    output::print_output(&out, global.quiet)?;

    if table {
        output::print_status(
            &format!("Showing {} of {} leases", visible.len(), snapshot.len()),
            global.quiet,
        );
    }
    Ok(())
}

//! VLAN listing.

use tabled::Tabled;
use tikleases_core::{Lease, RouterConfig, VlanSelection, fetch_leases, filter_leases};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct VlanRow {
    #[tabled(rename = "VLAN")]
    vlan: String,
    #[tabled(rename = "Leases")]
    leases: usize,
}

fn row(vlan: &str, leases: &[Lease]) -> VlanRow {
    VlanRow {
        vlan: vlan.to_owned(),
        leases: filter_leases(leases, &VlanSelection::Only(vlan.to_owned()), "").len(),
    }
}

pub async fn handle(config: &RouterConfig, global: &GlobalOpts) -> Result<(), CliError> {
    let snapshot = fetch_leases(config).await?;

    let out = output::render_list(
        global.output,
        snapshot.vlans(),
        |v| row(v, snapshot.leases()),
        Clone::clone,
    );
    output::print_output(&out, global.quiet)?;
    Ok(())
}

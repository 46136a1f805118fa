//! Command handlers, one module per top-level subcommand.

pub mod leases;
pub mod vlans;

use tikleases_core::RouterConfig;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a command that talks to the router.
pub async fn dispatch(
    cmd: Command,
    config: &RouterConfig,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Leases(args) => leases::handle(config, args, global).await,
        Command::Vlans => vlans::handle(config, global).await,
        // Completions are handled before dispatch
        Command::Completions(_) => unreachable!(),
    }
}

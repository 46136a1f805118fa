//! Clap derive structures for the `tikleases` CLI.
//!
//! Defines the command tree, global flags, and shared types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// tikleases -- read-only viewer for MikroTik DHCP leases
#[derive(Debug, Parser)]
#[command(
    name = "tikleases",
    version,
    about = "View DHCP leases from a MikroTik router",
    long_about = "Fetches the DHCP lease table from a MikroTik router's REST API\n\
        (/rest/ip/dhcp-server/lease) and lists it, optionally filtered by\n\
        VLAN (DHCP server) and hostname.\n\n\
        Credentials come from MIKROTIK_URL, MIKROTIK_USERNAME and\n\
        MIKROTIK_PASSWORD, the config file, or the matching flags.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Config file (defaults to the platform config dir)
    #[arg(long, env = "TIKLEASES_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Router base URL, e.g. https://192.168.88.1
    #[arg(long, env = "MIKROTIK_URL", global = true)]
    pub url: Option<String>,

    /// Router user
    #[arg(long, env = "MIKROTIK_USERNAME", global = true)]
    pub username: Option<String>,

    /// Router password (prefer the environment variable)
    #[arg(long, env = "MIKROTIK_PASSWORD", global = true, hide_env_values = true)]
    pub password: Option<String>,

    /// Accept the router's self-signed TLS certificate (default)
    #[arg(long, short = 'k', global = true, conflicts_with = "strict_tls")]
    pub insecure: bool,

    /// Verify the router certificate against the system roots
    #[arg(long, global = true)]
    pub strict_tls: bool,

    /// Verify the router certificate against this CA (PEM)
    #[arg(long, global = true, value_name = "PEM", conflicts_with = "strict_tls")]
    pub ca_cert: Option<PathBuf>,

    /// Request timeout in seconds (default: none)
    #[arg(
        long,
        global = true,
        value_name = "SECS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "TIKLEASES_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List DHCP leases
    #[command(alias = "ls", alias = "l")]
    Leases(LeasesArgs),

    /// List the VLANs (DHCP servers) that have leases
    Vlans,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  LEASES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct LeasesArgs {
    /// Only leases issued by this DHCP server (exact match)
    #[arg(long)]
    pub vlan: Option<String>,

    /// Only leases whose hostname contains this text (case-insensitive)
    #[arg(long, short = 'H', default_value = "")]
    pub host: String,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}

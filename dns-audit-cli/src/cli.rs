use clap::Parser;

/// Print Cloudflare DNS records per account and zone.
///
/// Credentials come from CLOUDFLARE_EMAIL and CLOUDFLARE_API_TOKEN; ACCOUNTS
/// and ZONES (comma-separated) narrow the output in addition to the flags.
#[derive(Debug, Parser)]
#[command(name = "dns-audit", version)]
pub struct Cli {
    /// Filter accounts by name (case-insensitive substring)
    #[arg(long, value_name = "SUBSTRING")]
    pub account: Option<String>,

    /// Filter zones by name (case-insensitive substring)
    #[arg(long, value_name = "SUBSTRING")]
    pub zone: Option<String>,
}

//! dns-audit
//!
//! Prints the DNS records of every Cloudflare zone the credentials can see,
//! one table per (account, zone), optionally narrowed by name filters.
//!
//! 执行流程：
//!     Cli::parse()            // --account / --zone
//!     dotenvy::dotenv()       // .env → process environment
//!     logging::init()         // console + logs/dns-audit.log
//!     Settings::from_env()    // credentials, ACCOUNTS / ZONES
//!     Auditor::run()          // accounts → zones → records
//!
//! Any error escaping the walk is logged, printed and turned into exit code 1.

mod audit;
mod cli;
mod config;
mod error;
mod filter;
mod logging;
mod view;

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use dns_audit_provider::CloudflareProvider;

use audit::{AuditSummary, Auditor};
use cli::Cli;
use config::Settings;
use error::AuditError;
use filter::NameFilter;
use view::ConsoleReport;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();

    let _guard = match logging::init() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{} {e}", "Error:".red().bold());
            return ExitCode::FAILURE;
        }
    };

    match run(cli).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("An error occurred: {e:?}");
            eprintln!("{} {e}", "Error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<AuditSummary, AuditError> {
    let settings = Settings::from_env();
    let provider = CloudflareProvider::new(settings.credentials)?;
    let mut report = ConsoleReport::stdout();

    let mut auditor = Auditor::new(
        &provider,
        &mut report,
        NameFilter::new(settings.account_filters, cli.account),
        NameFilter::new(settings.zone_filters, cli.zone),
    );
    auditor.run().await
}

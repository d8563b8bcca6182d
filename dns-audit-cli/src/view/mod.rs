//! Console output
//!
//! [`Report`] is the seam between the audit walk and the terminal; the
//! console implementation prints one titled table per zone.

pub mod table;
pub mod theme;

use std::io::{self, Write};

use colored::Colorize;
use dns_audit_provider::{Account, DnsRecord, Listing, Zone};

use crate::error::AuditError;

use table::build_table;

/// Receives the results of an audit walk.
pub trait Report {
    /// Called once per (account, zone) pair that passed the filters.
    fn zone(
        &mut self,
        account: &Account,
        zone: &Zone,
        records: &Listing<DnsRecord>,
    ) -> Result<(), AuditError>;

    /// Called when the account listing is empty.
    fn no_accounts(&mut self) -> Result<(), AuditError>;
}

/// Writes tables to a terminal (or any writer).
pub struct ConsoleReport<W: Write> {
    out: W,
}

impl ConsoleReport<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Report for ConsoleReport<W> {
    fn zone(
        &mut self,
        account: &Account,
        zone: &Zone,
        records: &Listing<DnsRecord>,
    ) -> Result<(), AuditError> {
        let table = build_table(&zone.name, &records.items)?;

        writeln!(
            self.out,
            "{} - {}",
            account.name.blue().bold(),
            zone.name.yellow().bold()
        )?;
        if let Some(failure) = &records.failure {
            writeln!(
                self.out,
                "{}",
                format!(
                    "records could not be fetched (HTTP {}), see the log for details",
                    failure.status
                )
                .dimmed()
            )?;
        }
        writeln!(self.out, "{table}")?;
        writeln!(self.out)?;
        Ok(())
    }

    fn no_accounts(&mut self) -> Result<(), AuditError> {
        writeln!(self.out, "{}", "No accounts available.".red().bold())?;
        Ok(())
    }
}

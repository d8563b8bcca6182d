//! Account → zone → record walk

use dns_audit_provider::DnsInventory;

use crate::error::AuditError;
use crate::filter::NameFilter;
use crate::view::Report;

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuditSummary {
    pub accounts_seen: usize,
    pub accounts_included: usize,
    pub zones_seen: usize,
    pub zones_included: usize,
    pub records_rendered: usize,
    /// List calls the API rejected
    pub failed_fetches: usize,
}

/// Drives the walk over one inventory and reports each surviving zone.
pub struct Auditor<'a, I, R> {
    inventory: &'a I,
    report: &'a mut R,
    accounts: NameFilter,
    zones: NameFilter,
}

impl<'a, I, R> Auditor<'a, I, R>
where
    I: DnsInventory,
    R: Report,
{
    pub fn new(
        inventory: &'a I,
        report: &'a mut R,
        accounts: NameFilter,
        zones: NameFilter,
    ) -> Self {
        Self {
            inventory,
            report,
            accounts,
            zones,
        }
    }

    /// Walk accounts, zones and records sequentially in API order.
    ///
    /// Rejected list calls count as empty; transport, decoding and rendering
    /// errors abort the run.
    pub async fn run(&mut self) -> Result<AuditSummary, AuditError> {
        let mut summary = AuditSummary::default();

        let accounts = self.inventory.list_accounts().await?;
        if accounts.is_failed() {
            summary.failed_fetches += 1;
        }
        if accounts.items.is_empty() {
            self.report.no_accounts()?;
            return Ok(summary);
        }

        for account in &accounts.items {
            summary.accounts_seen += 1;
            if !self.accounts.matches(&account.name) {
                tracing::debug!("Skipping account {}", account.name);
                continue;
            }
            summary.accounts_included += 1;

            let zones = self.inventory.list_zones(&account.id).await?;
            if zones.is_failed() {
                summary.failed_fetches += 1;
            }

            for zone in &zones.items {
                summary.zones_seen += 1;
                if !self.zones.matches(&zone.name) {
                    tracing::debug!("Skipping zone {} of account {}", zone.name, account.name);
                    continue;
                }
                summary.zones_included += 1;

                let records = self.inventory.list_dns_records(&zone.id).await?;
                if records.is_failed() {
                    summary.failed_fetches += 1;
                }

                self.report.zone(account, zone, &records)?;
                summary.records_rendered += records.items.len();
            }
        }

        tracing::info!(
            "Audit complete: {}/{} accounts, {}/{} zones, {} records, {} failed fetches",
            summary.accounts_included,
            summary.accounts_seen,
            summary.zones_included,
            summary.zones_seen,
            summary.records_rendered,
            summary.failed_fetches
        );

        Ok(summary)
    }
}

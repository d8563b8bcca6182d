//! DNS 记录表格

use chrono::NaiveDateTime;
use comfy_table::presets::UTF8_HORIZONTAL_ONLY;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use dns_audit_provider::DnsRecord;

use crate::error::AuditError;

use super::theme;

pub const COLUMNS: [&str; 9] = [
    "Type", "Name", "Contents", "Priority", "Proxy", "TTL", "Created", "Modified", "Message",
];

// The fraction is mandatory; its digits are read as a raw count and never shown.
const INPUT_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.%fZ";
const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Strip the `.<zone>` suffix from a record name.
///
/// The apex (`name == zone`) and names outside the zone are returned as is.
pub fn simplify_name<'a>(name: &'a str, zone_name: &str) -> &'a str {
    if name == zone_name {
        return name;
    }
    name.strip_suffix(zone_name)
        .and_then(|label| label.strip_suffix('.'))
        .unwrap_or(name)
}

/// `2024-03-01T10:20:30.123456Z` → `2024-03-01 10:20`
pub fn format_timestamp(raw: &str) -> Result<String, AuditError> {
    NaiveDateTime::parse_from_str(raw, INPUT_TIME_FORMAT)
        .map(|dt| dt.format(DISPLAY_TIME_FORMAT).to_string())
        .map_err(|source| AuditError::Timestamp {
            value: raw.to_string(),
            source,
        })
}

/// Build the record table for one zone.
///
/// Fails on the first record with an unparseable timestamp.
pub fn build_table(zone_name: &str, records: &[DnsRecord]) -> Result<Table, AuditError> {
    let mut table = Table::new();
    table
        .load_preset(UTF8_HORIZONTAL_ONLY)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            COLUMNS
                .iter()
                .map(|c| Cell::new(c).add_attribute(Attribute::Bold)),
        );

    for record in records {
        table.add_row(vec![
            Cell::new(&record.record_type).fg(theme::record_type_color(&record.record_type)),
            Cell::new(simplify_name(&record.name, zone_name)).fg(theme::NAME),
            Cell::new(&record.content).fg(theme::CONTENT),
            Cell::new(record.priority.map_or_else(|| "-".to_string(), |p| p.to_string())),
            Cell::new(record.proxied).fg(theme::proxy_color(record.proxied)),
            Cell::new(record.ttl),
            Cell::new(format_timestamp(&record.created_on)?).fg(theme::TIMESTAMP),
            Cell::new(format_timestamp(&record.modified_on)?).fg(theme::TIMESTAMP),
            Cell::new(record.comment.as_deref().unwrap_or_default()),
        ]);
    }

    Ok(table)
}

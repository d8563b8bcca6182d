//! 颜色定义
//!
//! `comfy_table::Color` follows crossterm naming: the `Dark*` variants are the
//! normal ANSI colours, the plain names are their bright counterparts and
//! `Grey` is ANSI white.

use comfy_table::Color;
use dns_audit_provider::RecordType;

/// Colour for record types without a dedicated entry.
pub const DEFAULT: Color = Color::Grey;
/// Record name column.
pub const NAME: Color = Color::Grey;
/// Record content column.
pub const CONTENT: Color = Color::DarkBlue;
/// Created / modified columns.
pub const TIMESTAMP: Color = Color::DarkGrey;

/// Colour of the type column.
pub fn record_type_color(record_type: &RecordType) -> Color {
    match record_type {
        RecordType::A => Color::DarkCyan,
        RecordType::Cname => Color::DarkGreen,
        RecordType::Mx => Color::DarkYellow,
        RecordType::Txt => Color::DarkMagenta,
        RecordType::Aaaa => Color::DarkBlue,
        RecordType::Ns => Color::DarkGrey,
        RecordType::Srv => Color::Magenta,
        RecordType::Other(_) => DEFAULT,
    }
}

/// Colour of the proxy column.
pub fn proxy_color(proxied: bool) -> Color {
    if proxied { Color::Green } else { Color::Red }
}

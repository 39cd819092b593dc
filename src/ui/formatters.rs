use chrono::{DateTime, Local, Utc};
use humansize::{format_size, BINARY};
use unicode_width::UnicodeWidthStr;

/// Format a byte count in human-readable binary units (KiB, MiB, GiB)
pub fn format_bytes(bytes: u64) -> String {
    format_size(bytes, BINARY)
}

/// Format a capture time in local time (YYYY-MM-DD HH:MM:SS)
pub fn format_local_time(time: DateTime<Utc>) -> String {
    let local: DateTime<Local> = time.into();
    local.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Left-align `text` in `width` terminal columns
pub fn pad_to_width(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(pad))
}

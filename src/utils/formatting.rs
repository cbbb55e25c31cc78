//! Formatting utilities for display

use chrono::DateTime;

/// Format an ISO-8601 timestamp for list metadata.
///
/// Falls back to the raw input when it does not parse, and to a placeholder
/// when it is empty, so a malformed server record never breaks a render.
pub fn format_date(timestamp: &str) -> String {
    if timestamp.trim().is_empty() {
        return "Unknown date".to_string();
    }
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => dt.format("%d %b %Y %H:%M").to_string(),
        Err(_) => timestamp.to_string(),
    }
}

/// Format an ISO-8601 timestamp as a short HH:MM time for chat messages.
pub fn format_time(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => dt.format("%H:%M").to_string(),
        Err(_) => String::new(),
    }
}

/// Format a byte count as megabytes with two decimals, e.g. "2.00 MB".
pub fn format_file_size(bytes: f64) -> String {
    format!("{:.2} MB", bytes / 1024.0 / 1024.0)
}

/// Truncate a question for one-line activity previews.
pub fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{cut}...")
    }
}

/// Current time as an ISO-8601 string.
#[cfg(target_arch = "wasm32")]
pub fn now_iso() -> String {
    js_sys::Date::new_0().to_iso_string().into()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_empty() {
        assert_eq!(format_date(""), "Unknown date");
        assert_eq!(format_date("   "), "Unknown date");
    }

    #[test]
    fn test_format_date_iso_timestamp() {
        assert_eq!(format_date("2024-03-05T09:30:00+00:00"), "05 Mar 2024 09:30");
        assert_eq!(format_date("2023-12-31T23:59:59+07:00"), "31 Dec 2023 23:59");
    }

    #[test]
    fn test_format_date_unparseable_passthrough() {
        assert_eq!(format_date("not-a-date"), "not-a-date");
        assert_eq!(format_date("2024-03-05"), "2024-03-05");
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time("2024-03-05T09:05:00+00:00"), "09:05");
        assert_eq!(format_time("garbage"), "");
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(2.0 * 1024.0 * 1024.0), "2.00 MB");
        assert_eq!(format_file_size(512.0 * 1024.0), "0.50 MB");
        assert_eq!(format_file_size(0.0), "0.00 MB");
    }

    #[test]
    fn test_preview_short_text_unchanged() {
        assert_eq!(preview("short question", 70), "short question");
    }

    #[test]
    fn test_preview_truncates_with_ellipsis() {
        let long = "x".repeat(80);
        let result = preview(&long, 70);
        assert_eq!(result.chars().count(), 73);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_preview_multibyte_boundary() {
        let text = "é".repeat(75);
        let result = preview(&text, 70);
        assert!(result.ends_with("..."));
        assert_eq!(result.chars().count(), 73);
    }

    #[test]
    fn test_now_iso_parses_back() {
        let now = now_iso();
        assert!(DateTime::parse_from_rfc3339(&now).is_ok());
    }
}

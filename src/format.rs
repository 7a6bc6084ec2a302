//! Display Helpers
//!
//! Formatting for the row title and its tooltip.

use chrono::{DateTime, NaiveDateTime};

const ELLIPSIS: &str = "...";

/// Shorten `text` to `max_chars` by cutting out its middle
pub fn middle_truncate(text: &str, max_chars: usize) -> String {
    let len = text.chars().count();
    if len <= max_chars {
        return text.to_string();
    }
    if max_chars <= ELLIPSIS.len() {
        return text.chars().take(max_chars).collect();
    }
    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let front = (keep + 1) / 2;
    let back = keep / 2;

    let head: String = text.chars().take(front).collect();
    let tail: String = text.chars().skip(len - back).collect();
    format!("{}{}{}", head, ELLIPSIS, tail)
}

/// `Mon D, YYYY`; raw input when unparsable, `Unknown` when missing
pub fn format_date(published: Option<&str>) -> String {
    let Some(raw) = published.map(str::trim).filter(|s| !s.is_empty()) else {
        return "Unknown".to_string();
    };

    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%m/%d/%Y, %I:%M:%S %p").map(|dt| dt.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()));

    match date {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Text after the last `.` of the URL, or `file`
pub fn file_extension(url: &str) -> String {
    match url.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => ext.to_string(),
        _ => "file".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_title_untouched() {
        assert_eq!(middle_truncate("report.pdf", 50), "report.pdf");
    }

    #[test]
    fn test_middle_truncate() {
        // keep 7: 4 in front, 3 at the back
        assert_eq!(middle_truncate("abcdefghijklmnop", 10), "abcd...nop");
        assert_eq!(middle_truncate("abcdefghijklmnop", 10).chars().count(), 10);
    }

    #[test]
    fn test_tiny_limit_never_exceeds_max() {
        assert_eq!(middle_truncate("abcdefgh", 2), "ab");
        assert_eq!(middle_truncate("abcdefgh", 3), "abc");
        assert_eq!(middle_truncate("abcdefgh", 0), "");
        assert_eq!(middle_truncate("abcdefgh", 4), "a...");
    }

    #[test]
    fn test_middle_truncate_multibyte() {
        assert_eq!(middle_truncate("日本語のとても長いファイル名", 7), "日本...ル名");
    }

    #[test]
    fn test_format_date_variants() {
        assert_eq!(format_date(Some("2024-01-05T15:04:05Z")), "Jan 5, 2024");
        assert_eq!(format_date(Some("1/5/2024, 3:04:05 PM")), "Jan 5, 2024");
        assert_eq!(format_date(Some("yesterday")), "yesterday");
        assert_eq!(format_date(None), "Unknown");
        assert_eq!(format_date(Some("  ")), "Unknown");
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("file:///var/data/report.pdf"), "pdf");
        assert_eq!(file_extension("https://example.com/page"), "com/page");
        assert_eq!(file_extension("no-extension"), "file");
    }
}

//! ISO-8601 duration formatting.
//!
//! The catalog reports durations as `PT#H#M#S`; clients want a clock string.

use regex::Regex;
use std::sync::OnceLock;

/// Shown when the catalog did not report a duration.
pub const UNKNOWN_DURATION: &str = "Unknown";

fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?").expect("valid duration pattern")
    })
}

/// Format an ISO-8601 duration as `H:M:SS` or `M:SS`.
///
/// Minutes are not padded, seconds always are. Input that does not contain a
/// `PT` duration is returned unchanged.
///
/// # Examples
/// ```
/// use tunelink_models::format_duration;
/// assert_eq!(format_duration(Some("PT1H2M3S")), "1:2:03");
/// assert_eq!(format_duration(Some("PT3M9S")), "3:09");
/// assert_eq!(format_duration(None), "Unknown");
/// ```
pub fn format_duration(iso: Option<&str>) -> String {
    let iso = match iso {
        Some(s) if !s.is_empty() => s,
        _ => return UNKNOWN_DURATION.to_string(),
    };

    let Some(caps) = pattern().captures(iso) else {
        return iso.to_string();
    };

    let hours = caps
        .get(1)
        .map(|h| format!("{}:", h.as_str()))
        .unwrap_or_default();
    let minutes = caps.get(2).map_or("0", |m| m.as_str());
    let seconds = caps
        .get(3)
        .map(|s| format!("{:0>2}", s.as_str()))
        .unwrap_or_else(|| "00".to_string());

    format!("{}{}:{}", hours, minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_with_hours() {
        assert_eq!(format_duration(Some("PT1H2M3S")), "1:2:03");
        assert_eq!(format_duration(Some("PT2H")), "2:0:00");
    }

    #[test]
    fn test_format_minutes_and_seconds() {
        assert_eq!(format_duration(Some("PT3M9S")), "3:09");
        assert_eq!(format_duration(Some("PT5M")), "5:00");
        assert_eq!(format_duration(Some("PT45S")), "0:45");
        assert_eq!(format_duration(Some("PT12M30S")), "12:30");
    }

    #[test]
    fn test_bare_prefix() {
        assert_eq!(format_duration(Some("PT")), "0:00");
    }

    #[test]
    fn test_missing_duration() {
        assert_eq!(format_duration(None), "Unknown");
        assert_eq!(format_duration(Some("")), "Unknown");
    }

    #[test]
    fn test_unparseable_passes_through() {
        assert_eq!(format_duration(Some("garbage")), "garbage");
        assert_eq!(format_duration(Some("4:13")), "4:13");
    }
}

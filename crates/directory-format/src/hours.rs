//! Conversion of 24-hour time ranges in provider hours text to 12-hour form.

use std::sync::LazyLock;

use chrono::NaiveTime;
use regex::Regex;

static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{2}:\d{2}").expect("valid regex"));

/// Formats an `HH:mm` time as `h:mm AM/PM`.
///
/// `"24:00"` is read as end of day (`"12:00 AM"`); anything else that does
/// not parse is returned unchanged.
#[must_use]
pub fn format_hour(time: &str) -> String {
    let trimmed = time.trim();
    if trimmed == "24:00" {
        return "12:00 AM".to_string();
    }
    match NaiveTime::parse_from_str(trimmed, "%H:%M") {
        Ok(parsed) => parsed.format("%-I:%M %p").to_string(),
        Err(_) => time.to_string(),
    }
}

/// Rewrites a single `HH:MM ... HH:MM` range in free-form hours text.
///
/// When exactly two times are present the result is
/// `<text before the first time><start> - <end>`; everything after the end
/// time is dropped. Text with any other number of times is returned as-is.
#[must_use]
pub fn format_hours(hours: &str) -> String {
    let matches: Vec<_> = TIME_RE.find_iter(hours).collect();
    let [start, end] = matches.as_slice() else {
        return hours.to_string();
    };

    let prefix = &hours[..start.start()];
    format!(
        "{prefix}{} - {}",
        format_hour(start.as_str()),
        format_hour(end.as_str())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_hour_converts_to_twelve_hour_clock() {
        assert_eq!(format_hour("09:00"), "9:00 AM");
        assert_eq!(format_hour("17:30"), "5:30 PM");
        assert_eq!(format_hour("00:15"), "12:15 AM");
        assert_eq!(format_hour("12:00"), "12:00 PM");
    }

    #[test]
    fn format_hour_treats_24_as_midnight() {
        assert_eq!(format_hour("24:00"), "12:00 AM");
    }

    #[test]
    fn format_hour_returns_unparseable_input() {
        assert_eq!(format_hour("25:99"), "25:99");
        assert_eq!(format_hour("noon"), "noon");
    }

    #[test]
    fn format_hours_rewrites_single_range() {
        let formatted = format_hours("Mon-Fri 09:00-17:00");
        assert_eq!(formatted, "Mon-Fri 9:00 AM - 5:00 PM");
    }

    #[test]
    fn format_hours_keeps_prefix_and_drops_suffix() {
        assert_eq!(
            format_hours("Mon-Sat: 08:30 - 20:00 (holidays vary)"),
            "Mon-Sat: 8:30 AM - 8:00 PM"
        );
    }

    #[test]
    fn format_hours_leaves_other_counts_unchanged() {
        assert_eq!(format_hours("Open 24 hours"), "Open 24 hours");
        assert_eq!(format_hours("Opens 09:00"), "Opens 09:00");
        assert_eq!(
            format_hours("Mon 09:00-12:00, 13:00-17:00"),
            "Mon 09:00-12:00, 13:00-17:00"
        );
    }
}

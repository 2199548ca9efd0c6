//! Formatting helpers for presenting scores and article dates.

use time::{macros::format_description, Date};

pub fn format_percent(value: f64) -> String {
    format!("{:.0}%", value * 100.0)
}

/// Long-form article date, e.g. `November 3, 2024`. Falls back to the raw
/// string when the timestamp doesn't parse.
pub fn format_article_date(raw: &str) -> String {
    parse_date(raw)
        .and_then(|date| {
            date.format(&format_description!(
                "[month repr:long] [day padding:none], [year]"
            ))
            .ok()
        })
        .unwrap_or_else(|| raw.to_string())
}

/// Compact badge for chart ticks, e.g. `Nov 3`.
pub fn format_date_badge(raw: &str) -> String {
    parse_date(raw)
        .and_then(|date| {
            date.format(&format_description!(
                "[month repr:short] [day padding:none]"
            ))
            .ok()
        })
        .unwrap_or_else(|| "—".to_string())
}

/// The backend serializes timestamps as ISO 8601; only the calendar date is
/// ever displayed, so parsing stops at the `T`.
fn parse_date(raw: &str) -> Option<Date> {
    let date_part = raw.split_once('T').map_or(raw, |(date, _)| date);
    Date::parse(date_part, &format_description!("[year]-[month]-[day]")).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounds_to_whole_numbers() {
        assert_eq!(format_percent(0.45), "45%");
        assert_eq!(format_percent(0.0), "0%");
        assert_eq!(format_percent(1.0), "100%");
        assert_eq!(format_percent(0.666), "67%");
    }

    #[test]
    fn article_date_is_long_form() {
        assert_eq!(
            format_article_date("2024-11-03T09:00:00Z"),
            "November 3, 2024"
        );
        assert_eq!(format_article_date("2024-11-03"), "November 3, 2024");
    }

    #[test]
    fn date_badge_is_compact() {
        assert_eq!(format_date_badge("2024-10-26"), "Oct 26");
    }

    #[test]
    fn unparseable_dates_fall_back() {
        assert_eq!(format_article_date("yesterday"), "yesterday");
        assert_eq!(format_date_badge("yesterday"), "—");
    }
}

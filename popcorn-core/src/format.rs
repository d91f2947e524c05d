//! Display strings for detail and list views.

use chrono::NaiveDate;

/// Shown for any missing runtime or date.
pub const NOT_APPLICABLE: &str = "N/A";

/// `136` → `"2h 16m"`, `45` → `"45m"`.
pub fn format_runtime(minutes: Option<u32>) -> String {
    match minutes {
        Some(minutes) if minutes > 0 => {
            let hours = minutes / 60;
            let rest = minutes % 60;
            if hours > 0 {
                format!("{hours}h {rest}m")
            } else {
                format!("{rest}m")
            }
        }
        _ => NOT_APPLICABLE.to_string(),
    }
}

/// One decimal place; `"0.0"` when unrated.
pub fn format_rating(vote_average: Option<f32>) -> String {
    format!("{:.1}", vote_average.unwrap_or(0.0))
}

/// `"March 31, 1999"`.
pub fn format_release_date(date: Option<NaiveDate>) -> String {
    date.map(|date| date.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| NOT_APPLICABLE.to_string())
}

//! Date and text helpers shared by every template.

use chrono::NaiveDate;

use crate::models::resume::ExperienceItem;

/// Token shown in place of an end date while a role is ongoing.
pub const PRESENT: &str = "Present";

/// Parses a `YYYY-MM` value into the first day of that month.
pub fn parse_year_month(value: &str) -> Option<NaiveDate> {
    let (year, month) = value.split_once('-')?;
    if year.len() != 4 || month.len() != 2 {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
}

/// `"2021-03"` → `"Mar 2021"`; `""` → `""`.
///
/// Anything that is not a `YYYY-MM` value is shown as typed.
pub fn format_month_year(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    match parse_year_month(value) {
        Some(date) => date.format("%b %Y").to_string(),
        None => value.to_string(),
    }
}

/// Display range for an experience item, e.g. `"Jan 2022 - Present"`.
///
/// `end_date` is never consulted while `current` is set.
pub fn date_range(exp: &ExperienceItem) -> Option<String> {
    let start = format_month_year(&exp.start_date);
    let end = if exp.current {
        PRESENT.to_string()
    } else {
        format_month_year(&exp.end_date)
    };
    match (start.is_empty(), end.is_empty()) {
        (true, true) => None,
        (false, true) => Some(start),
        (true, false) => Some(format!("- {end}")),
        (false, false) => Some(format!("{start} - {end}")),
    }
}

pub(crate) fn present(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Joins the non-empty parts with `sep`.
pub(crate) fn join_present(parts: &[&str], sep: &str) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(sep)
}

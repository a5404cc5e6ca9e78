use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

pub mod menu_cache;
pub mod menu_fetcher;
pub mod page_renderer;
pub mod view_model;

const WEEK_DAYS: [&str; 7] = [
    "Pazartesi",
    "Salı",
    "Çarşamba",
    "Perşembe",
    "Cuma",
    "Cumartesi",
    "Pazar",
];
const MONTHS: [&str; 12] = [
    "Oca", "Şub", "Mar", "Nis", "May", "Haz", "Tem", "Ağu", "Eyl", "Eki", "Kas", "Ara",
];

/// `EEEE, d MMM yyyy` in Turkish, e.g. "Pazar, 10 Mar 2024"
fn turkish_date_fmt(date: NaiveDate) -> String {
    format!(
        "{}, {} {} {}",
        WEEK_DAYS[date.weekday().num_days_from_monday() as usize],
        date.day(),
        MONTHS[date.month0() as usize],
        date.year()
    )
}

/// Reads the calendar date of an upstream `Date` field.
///
/// Accepts plain dates (`2024-03-10`), naive timestamps (`2024-03-10T00:00:00`)
/// and RFC 3339 timestamps. Timestamps keep the calendar day as written, the
/// offset is not applied.
pub fn parse_menu_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date_time) = DateTime::parse_from_rfc3339(raw) {
        return Some(date_time.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|dt| dt.date())
        .ok()
}

fn escape_html(input: &str) -> String {
    // upstream strings end up inside element text and attribute values
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::process::utils::clean_str;

/// Output format for every normalized date.
pub const ISO_DATE: &str = "%Y-%m-%d";

/// A single parse attempt. Returns `None` when the input is not in its format.
pub type DateAttempt = fn(&str) -> Option<NaiveDate>;

const SLASH_ATTEMPTS: &[DateAttempt] = &[parse_us_slash];
const DOTTED_ATTEMPTS: &[DateAttempt] = &[parse_dotted];

/// Attempts for strings without `/` or `.`, tried in order.
/// Month-first wins over day-first for dashed numeric dates; day-first only
/// matches when the first field cannot be a month. Month-year runs before the
/// month-name layouts, which would otherwise read `March 2024` as day 20 of year 24.
const FLEXIBLE_ATTEMPTS: &[DateAttempt] = &[
    parse_iso_date,
    parse_rfc3339,
    parse_iso_datetime,
    parse_compact,
    parse_dashed_month_first,
    parse_dashed_day_first,
    parse_month_year,
    parse_month_name,
    parse_weekday_month_name,
    parse_year_month,
    parse_year,
];

/// `MM/DD/YYYY` (Investing.com, US locale)
pub fn parse_us_slash(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%m/%d/%Y").ok()
}

/// `DD.MM.YYYY` (Investing.com, Polish locale)
pub fn parse_dotted(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%d.%m.%Y").ok()
}

fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, ISO_DATE).ok()
}

fn parse_rfc3339(s: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive())
}

fn parse_iso_datetime(s: &str) -> Option<NaiveDate> {
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
}

/// `YYYYMMDD`, digits only
fn parse_compact(s: &str) -> Option<NaiveDate> {
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i32 = s[0..4].parse().ok()?;
    let month: u32 = s[4..6].parse().ok()?;
    let day: u32 = s[6..8].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_dashed_month_first(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%m-%d-%Y").ok()
}

fn parse_dashed_day_first(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%d-%m-%Y").ok()
}

/// `Mar 15, 2024`, `March 15 2024`, `15 March 2024`. chrono's `%b` only takes
/// the short name; `%B` takes either.
fn parse_month_name(s: &str) -> Option<NaiveDate> {
    [
        "%B %d, %Y",
        "%B %d %Y",
        "%d %B %Y",
        "%d %B, %Y",
        "%b %d, %Y",
        "%b %d %Y",
        "%d %b %Y",
        "%d %b, %Y",
    ]
    .iter()
    .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// `Friday, March 15, 2024`. The weekday has to agree with the date.
fn parse_weekday_month_name(s: &str) -> Option<NaiveDate> {
    ["%A, %B %d, %Y", "%A %B %d %Y", "%A, %d %B %Y", "%a, %d %B %Y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// `2024-03` → first of the month
fn parse_year_month(s: &str) -> Option<NaiveDate> {
    let (year, month) = s.split_once('-')?;
    if year.len() != 4 || month.is_empty() || month.len() > 2 {
        return None;
    }
    if !(year.bytes().all(|b| b.is_ascii_digit()) && month.bytes().all(|b| b.is_ascii_digit())) {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
}

/// `March 2024`, `Mar 2024` → first of the month
fn parse_month_year(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("1 {}", s), "%d %B %Y").ok()
}

/// `2024` → January 1st
fn parse_year(s: &str) -> Option<NaiveDate> {
    if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::from_ymd_opt(s.parse().ok()?, 1, 1)
}

/// Pick the ordered attempts for `s` based on its separator.
/// A `/` or `.` commits the string to exactly one format.
pub fn attempts_for(s: &str) -> &'static [DateAttempt] {
    if s.contains('/') {
        SLASH_ATTEMPTS
    } else if s.contains('.') {
        DOTTED_ATTEMPTS
    } else {
        FLEXIBLE_ATTEMPTS
    }
}

/// Parse a free-text date, or `None` if no attempt matches.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = clean_str(raw);
    attempts_for(&s).iter().find_map(|attempt| attempt(&s))
}

/// Normalize to `YYYY-MM-DD`, falling back to the untouched input.
pub fn normalize_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format(ISO_DATE).to_string(),
        None => raw.to_string(),
    }
}

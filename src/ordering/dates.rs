//! Parsing of the two date shapes a bill can carry.
//!
//! Bills arrive either with an ISO `YYYY-MM-DD` date or with the abbreviated
//! French display form produced by the front end (`"4 Avr. 23"`). Both are
//! brought down to a [`NaiveDate`] so a list can be ordered.
//!
//! Two-digit years are always placed in [`CENTURY_BASE`]: `"23"` is 2023 and
//! `"99"` is 2099. Orderings are only correct inside that 100-year window and
//! no rollover rule is applied.

use std::cmp::Ordering;

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// Century prefixed to two-digit years.
pub const CENTURY_BASE: i32 = 2000;

/// Month abbreviations in calendar order. Index + 1 is the month number.
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan.", "Fév.", "Mar.", "Avr.", "Mai", "Juin", "Juil.", "Aoû.", "Sep.", "Oct.", "Nov.", "Déc.",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    #[error("unrecognized date format: `{0}`")]
    UnrecognizedFormat(String),
    #[error("unknown month abbreviation: `{0}`")]
    UnknownMonth(String),
    #[error("date does not exist in the calendar: `{0}`")]
    InvalidCalendarDate(String),
}

/// Orderable form of a bill date.
///
/// `Unparsed` sorts before every parsed date so that a bill with a broken date
/// lands at the oldest end of a descending list instead of being dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NormalizedDate {
    Unparsed,
    Parsed(NaiveDate),
}

impl NormalizedDate {
    /// Normalizes `raw`, falling back to the sentinel on any parse failure.
    pub fn from_raw(raw: &str) -> Self {
        match normalize(raw) {
            Ok(date) => NormalizedDate::Parsed(date),
            Err(err) => {
                tracing::warn!(raw, error = %err, "bill date could not be parsed; sorting as oldest");
                NormalizedDate::Unparsed
            }
        }
    }

    pub fn date(self) -> Option<NaiveDate> {
        match self {
            NormalizedDate::Parsed(date) => Some(date),
            NormalizedDate::Unparsed => None,
        }
    }
}

impl Ord for NormalizedDate {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (NormalizedDate::Unparsed, NormalizedDate::Unparsed) => Ordering::Equal,
            (NormalizedDate::Unparsed, NormalizedDate::Parsed(_)) => Ordering::Less,
            (NormalizedDate::Parsed(_), NormalizedDate::Unparsed) => Ordering::Greater,
            (NormalizedDate::Parsed(a), NormalizedDate::Parsed(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for NormalizedDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Parses an ISO or abbreviated-locale date string into a calendar date.
pub fn normalize(raw: &str) -> Result<NaiveDate, DateParseError> {
    let trimmed = raw.trim();
    if let Some(parts) = split_iso(trimmed) {
        let (year, month, day) = parts;
        return NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| DateParseError::InvalidCalendarDate(raw.to_string()));
    }
    parse_short(trimmed)
}

/// Looks up a month abbreviation, ignoring case and a trailing dot.
pub fn month_from_abbrev(abbrev: &str) -> Option<u32> {
    let wanted = fold_abbrev(abbrev);
    if wanted.is_empty() {
        return None;
    }
    MONTH_ABBREVIATIONS
        .iter()
        .position(|candidate| fold_abbrev(candidate) == wanted)
        .map(|idx| idx as u32 + 1)
}

/// Renders a date in the abbreviated display form, e.g. `4 Avr. 23`.
pub fn format_short(date: NaiveDate) -> String {
    let month = MONTH_ABBREVIATIONS[date.month0() as usize];
    format!(
        "{} {} {:02}",
        date.day(),
        month,
        date.year().rem_euclid(100)
    )
}

fn fold_abbrev(abbrev: &str) -> String {
    abbrev.trim().trim_end_matches('.').to_lowercase()
}

fn split_iso(raw: &str) -> Option<(i32, u32, u32)> {
    let bytes = raw.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(idx, byte)| idx == 4 || idx == 7 || byte.is_ascii_digit());
    if !digits_ok {
        return None;
    }
    let year = raw[0..4].parse().ok()?;
    let month = raw[5..7].parse().ok()?;
    let day = raw[8..10].parse().ok()?;
    Some((year, month, day))
}

fn parse_short(raw: &str) -> Result<NaiveDate, DateParseError> {
    let unrecognized = || DateParseError::UnrecognizedFormat(raw.to_string());
    let mut parts = raw.split_whitespace();
    let (Some(day), Some(month), Some(year), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(unrecognized());
    };

    if day.is_empty() || day.len() > 2 || !day.bytes().all(|b| b.is_ascii_digit()) {
        return Err(unrecognized());
    }
    if year.len() != 2 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return Err(unrecognized());
    }

    let month_number =
        month_from_abbrev(month).ok_or_else(|| DateParseError::UnknownMonth(month.to_string()))?;
    let day: u32 = day.parse().map_err(|_| unrecognized())?;
    let year: i32 = year.parse().map_err(|_| unrecognized())?;

    NaiveDate::from_ymd_opt(CENTURY_BASE + year, month_number, day)
        .ok_or_else(|| DateParseError::InvalidCalendarDate(raw.to_string()))
}

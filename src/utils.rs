// Utility functions
use crate::model::AnalyzerError;
use chrono::{DateTime, Duration, Local, LocalResult, NaiveDateTime, TimeZone};

/// One accepted textual date/time layout.
pub struct DateTimePattern {
    pub name: &'static str,
    parse: fn(&str) -> Option<NaiveDateTime>,
}

/// Tried in order; the first pattern that parses wins.
pub const DATE_TIME_PATTERNS: [DateTimePattern; 2] = [
    DateTimePattern {
        name: "dd.MM.yy H:mm",
        parse: parse_short_hour,
    },
    DateTimePattern {
        name: "dd.MM.yy HH:mm",
        parse: parse_padded_hour,
    },
];

fn parse_short_hour(input: &str) -> Option<NaiveDateTime> {
    parse_with_hour_width(input, 1..=2)
}

fn parse_padded_hour(input: &str) -> Option<NaiveDateTime> {
    parse_with_hour_width(input, 2..=2)
}

/// `dd.MM.yy <hour>:mm` with fixed-width day, month, year and minutes.
/// Two-digit years are taken as 2000-2099.
fn parse_with_hour_width(input: &str, hour_width: std::ops::RangeInclusive<usize>) -> Option<NaiveDateTime> {
    let (date, time) = input.split_once(' ')?;

    let mut date_parts = date.split('.');
    let (day, month, year) = (date_parts.next()?, date_parts.next()?, date_parts.next()?);
    if date_parts.next().is_some() || ![day, month, year].iter().all(|p| is_digits(p, 2..=2)) {
        return None;
    }

    let (hour, minute) = time.split_once(':')?;
    if !is_digits(hour, hour_width) || !is_digits(minute, 2..=2) {
        return None;
    }

    let expanded = format!("{}.{}.20{} {}:{}", day, month, year, hour, minute);
    NaiveDateTime::parse_from_str(&expanded, "%d.%m.%Y %H:%M").ok()
}

fn is_digits(part: &str, width: std::ops::RangeInclusive<usize>) -> bool {
    width.contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
}

/// Pins a wall-clock time to the process time zone.
fn to_local(naive: NaiveDateTime) -> Option<DateTime<Local>> {
    resolve_in(&Local, naive)
}

fn resolve_in<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> Option<DateTime<Tz>> {
    resolve_with(|n| tz.from_local_datetime(&n), naive)
}

/// Ambiguous times take the earlier offset, times inside a DST gap are moved one hour past it.
fn resolve_with<T>(lookup: impl Fn(NaiveDateTime) -> LocalResult<T>, naive: NaiveDateTime) -> Option<T> {
    match lookup(naive) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => lookup(naive + Duration::hours(1)).earliest(),
    }
}

/// Парсит `date + " " + time` в локальное время, перебирая `DATE_TIME_PATTERNS` по порядку.
pub fn parse_datetime(date: &str, time: &str) -> Result<DateTime<Local>, AnalyzerError> {
    let input = format!("{} {}", date, time);

    let parsed = DATE_TIME_PATTERNS
        .iter()
        .find_map(|pattern| (pattern.parse)(&input))
        .and_then(to_local);

    parsed.ok_or_else(|| AnalyzerError::DateTimeParse {
        input,
        patterns: DATE_TIME_PATTERNS.iter().map(|p| p.name).collect(),
    })
}

/// Splits total minutes into (hours, minutes) with truncating division.
pub fn split_minutes(total_minutes: i64) -> (i64, i64) {
    (total_minutes / 60, total_minutes % 60)
}

use crate::error::ReportError;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// A flight duration in whole minutes. May be negative when the source data
/// has an arrival before its departure.
#[derive(Debug, Clone, Copy, Ord, Eq, PartialEq, Serialize, PartialOrd)]
#[serde(transparent)]
pub struct Minutes(pub i64);

impl Minutes {
    pub fn between(departure: NaiveDateTime, arrival: NaiveDateTime) -> Minutes {
        Minutes((arrival - departure).num_minutes())
    }
}

impl std::fmt::Display for Minutes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let total = self.0.unsigned_abs();
        let hours = total / 60;
        let mins = total % 60;
        write!(f, "{}{:02}:{:02}", sign, hours, mins)
    }
}

// chrono's numeric specifiers are width-lenient ("1.3.24", "10:5"), so the
// fields are split and width-checked here before building the values.
fn digits(text: &str, widths: std::ops::RangeInclusive<usize>) -> Option<u32> {
    if widths.contains(&text.len()) && text.bytes().all(|b| b.is_ascii_digit()) {
        text.parse().ok()
    } else {
        None
    }
}

/// `dd.MM.yy`; two-digit years always land in 2000-2099.
fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ReportError> {
    let mut parts = value.split('.').map(|part| digits(part, 2..=2));
    let date = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(Some(day)), Some(Some(month)), Some(Some(year)), None) => {
            NaiveDate::from_ymd_opt(2000 + year as i32, month, day)
        }
        _ => None,
    };
    date.ok_or_else(|| ReportError::Format {
        field,
        value: value.to_string(),
        pattern: "dd.MM.yy",
    })
}

/// `H:mm`; the hour may be one or two digits, minutes are always two.
fn parse_time(field: &'static str, value: &str) -> Result<NaiveTime, ReportError> {
    let time = value.split_once(':').and_then(|(hour, minute)| {
        let hour = digits(hour, 1..=2)?;
        let minute = digits(minute, 2..=2)?;
        NaiveTime::from_hms_opt(hour, minute, 0)
    });
    time.ok_or_else(|| ReportError::Format {
        field,
        value: value.to_string(),
        pattern: "H:mm",
    })
}

/// Combines a `(field, text)` date and time pair into one point in time.
pub(crate) fn parse_point(
    date: (&'static str, &str),
    time: (&'static str, &str),
) -> Result<NaiveDateTime, ReportError> {
    let date = parse_date(date.0, date.1)?;
    let time = parse_time(time.0, time.1)?;
    Ok(date.and_time(time))
}

//! Civil calendar ⇄ Julian Day conversion (proleptic Gregorian).
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 7.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AstroError;

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Seconds in a civil day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

const MS_PER_DAY: i64 = 86_400_000;

/// Calendar date and time of day, as reconstructed from a Julian Day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

/// Julian Day for a Gregorian calendar date and time of day.
///
/// January and February count as months 13 and 14 of the previous year and
/// the Gregorian leap-day correction is always applied, so dates before
/// 1582-10-15 are read as proleptic Gregorian. Components are not range
/// checked; see [`validate_calendar`].
pub fn to_julian_day(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let y = y as f64;
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    let day_fraction = (hour as f64 + minute as f64 / 60.0 + second / 3600.0) / 24.0;

    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day as f64 + b
        - 1524.5
        + day_fraction
}

/// Calendar date for a Julian Day, resolved to the millisecond.
pub fn from_julian_day(jd: f64) -> CalendarDate {
    let total_ms = ((jd + 0.5) * MS_PER_DAY as f64).round() as i64;
    let z = total_ms.div_euclid(MS_PER_DAY) as f64;
    let ms_of_day = total_ms.rem_euclid(MS_PER_DAY);

    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = (b - d - (30.6001 * e).floor()) as u32;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 } as u32;
    let year = if month > 2 { c - 4716.0 } else { c - 4715.0 } as i32;

    let hour = (ms_of_day / 3_600_000) as u32;
    let minute = ((ms_of_day % 3_600_000) / 60_000) as u32;
    let second = (ms_of_day % 60_000) as f64 / 1000.0;

    CalendarDate {
        year,
        month,
        day,
        hour,
        minute,
        second,
    }
}

/// Julian centuries elapsed since J2000.0.
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Reject calendar components that [`to_julian_day`] would silently accept.
pub fn validate_calendar(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
) -> Result<(), AstroError> {
    if NaiveDate::from_ymd_opt(year, month, day).is_none() {
        return Err(AstroError::invalid(format!(
            "{year:04}-{month:02}-{day:02} is not a valid Gregorian date"
        )));
    }
    if hour > 23 || minute > 59 || !(0.0..60.0).contains(&second) {
        return Err(AstroError::invalid(format!(
            "{hour:02}:{minute:02}:{second} is not a valid time of day"
        )));
    }
    Ok(())
}

/// Convert a UTC datetime to a Julian Day (UT).
pub fn datetime_to_julian_day(dt: DateTime<Utc>) -> f64 {
    let second = dt.second() as f64 + dt.nanosecond() as f64 / 1e9;
    to_julian_day(dt.year(), dt.month(), dt.day(), dt.hour(), dt.minute(), second)
}

/// Convert a Julian Day (UT) back to a UTC datetime.
///
/// Returns `None` when the date falls outside chrono's representable range.
pub fn julian_day_to_datetime(jd: f64) -> Option<DateTime<Utc>> {
    let cal = from_julian_day(jd);
    let whole = cal.second.trunc() as u32;
    let millis = ((cal.second - whole as f64) * 1000.0).round() as i64;
    Utc.with_ymd_and_hms(cal.year, cal.month, cal.day, cal.hour, cal.minute, whole)
        .single()
        .map(|dt| dt + chrono::Duration::milliseconds(millis))
}

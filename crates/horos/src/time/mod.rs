//! Time-scale conversions: calendar ⇄ Julian Day and ΔT.

pub mod delta_t;
pub mod julian;

pub use delta_t::{delta_t, ut_to_tt};
pub use julian::{
    datetime_to_julian_day, from_julian_day, julian_centuries, julian_day_to_datetime,
    to_julian_day, validate_calendar, CalendarDate, DAYS_PER_CENTURY, J2000_JD,
    SECONDS_PER_DAY,
};

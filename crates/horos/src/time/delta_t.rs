//! ΔT = TT − UT approximations.
//!
//! Polynomial expressions from Espenak & Meeus, "Five Millennium Canon of
//! Solar Eclipses" (NASA/TP-2006-214141), 1900 to 2150 only. Outside that
//! span ΔT is zero.

use super::julian::{J2000_JD, SECONDS_PER_DAY};

/// Mean length of a Julian year in days.
const DAYS_PER_YEAR: f64 = 365.25;

/// First decimal year covered by the polynomial table.
pub const DELTA_T_FIRST_YEAR: f64 = 1900.0;

/// Decimal year at which the polynomial table ends.
pub const DELTA_T_LAST_YEAR: f64 = 2150.0;

/// ΔT in seconds for a Julian Day (UT).
pub fn delta_t(jd: f64) -> f64 {
    delta_t_for_year(decimal_year(jd))
}

/// Shift a UT Julian Day onto the Terrestrial Time scale.
pub fn ut_to_tt(jd_ut: f64) -> f64 {
    jd_ut + delta_t(jd_ut) / SECONDS_PER_DAY
}

fn decimal_year(jd: f64) -> f64 {
    2000.0 + (jd - J2000_JD) / DAYS_PER_YEAR
}

fn delta_t_for_year(y: f64) -> f64 {
    if !(DELTA_T_FIRST_YEAR..DELTA_T_LAST_YEAR).contains(&y) {
        return 0.0;
    }

    if y < 1920.0 {
        let t = y - 1900.0;
        -2.79 + 1.494119 * t - 0.0598939 * t.powi(2) + 0.0061966 * t.powi(3)
            - 0.000197 * t.powi(4)
    } else if y < 1941.0 {
        let t = y - 1920.0;
        21.20 + 0.84493 * t - 0.076100 * t.powi(2) + 0.0020936 * t.powi(3)
    } else if y < 1961.0 {
        let t = y - 1950.0;
        29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0
    } else if y < 1986.0 {
        let t = y - 1975.0;
        45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0
    } else if y < 2005.0 {
        let t = y - 2000.0;
        63.86 + 0.3345 * t - 0.060374 * t.powi(2)
            + 0.0017275 * t.powi(3)
            + 0.000651814 * t.powi(4)
            + 0.00002373599 * t.powi(5)
    } else if y < 2050.0 {
        let t = y - 2000.0;
        62.92 + 0.32217 * t + 0.005589 * t.powi(2)
    } else {
        -20.0 + 32.0 * ((y - 1820.0) / 100.0).powi(2) - 0.5628 * (2150.0 - y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_value() {
        let dt = delta_t(J2000_JD);
        assert!((dt - 63.86).abs() < 0.01, "ΔT(2000) = {dt}");
    }

    #[test]
    fn known_epochs() {
        // Observed values: 1950 ≈ 29.1 s, 1975 ≈ 45.5 s, 1990 ≈ 56.9 s
        assert!((delta_t_for_year(1950.0) - 29.07).abs() < 0.01);
        assert!((delta_t_for_year(1975.0) - 45.45).abs() < 0.01);
        assert!((delta_t_for_year(1990.0) - 56.9).abs() < 0.5);
        assert!((delta_t_for_year(2020.0) - 71.6).abs() < 3.0);
    }

    #[test]
    fn segments_join_smoothly() {
        for boundary in [1920.0, 1941.0, 1961.0, 1986.0, 2005.0, 2050.0] {
            let before = delta_t_for_year(boundary - 1e-6);
            let after = delta_t_for_year(boundary);
            assert!(
                (before - after).abs() < 1.5,
                "jump of {} s at {boundary}",
                (before - after).abs()
            );
        }
    }

    #[test]
    fn zero_outside_modeled_range() {
        assert_eq!(delta_t_for_year(1899.9), 0.0);
        assert_eq!(delta_t_for_year(2150.0), 0.0);
        assert_eq!(delta_t_for_year(1066.0), 0.0);
    }

    #[test]
    fn tt_is_later_than_ut() {
        let jd = 2_448_058.104_166_666;
        let tt = ut_to_tt(jd);
        let seconds = (tt - jd) * SECONDS_PER_DAY;
        assert!((seconds - 57.2).abs() < 0.5, "ΔT = {seconds}");
    }
}

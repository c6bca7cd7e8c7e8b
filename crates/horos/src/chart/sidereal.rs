//! Sidereal time.
//!
//! Mean sidereal time: IAU 1982 (Meeus eq. 12.4). Apparent sidereal time
//! adds the equation of the equinoxes, Δψ·cos ε.

use crate::coords::{normalize_degrees, nutation, true_obliquity};
use crate::time::{julian_centuries, J2000_JD};

/// Greenwich mean sidereal time in degrees for a Julian Day (UT).
pub fn greenwich_mean_sidereal_time(jd_ut: f64) -> f64 {
    let t = julian_centuries(jd_ut);
    let theta = 280.46061837 + 360.98564736629 * (jd_ut - J2000_JD) + 0.000387933 * t * t
        - t * t * t / 38_710_000.0;
    normalize_degrees(theta)
}

/// Greenwich apparent sidereal time in degrees for a Julian Day (UT).
pub fn greenwich_sidereal_time(jd_ut: f64) -> f64 {
    let delta_psi = nutation(julian_centuries(jd_ut)).delta_psi;
    let epsilon = true_obliquity(jd_ut).to_radians();
    normalize_degrees(greenwich_mean_sidereal_time(jd_ut) + delta_psi * epsilon.cos())
}

/// Local apparent sidereal time for an east-positive longitude.
pub fn local_sidereal_time(jd_ut: f64, east_longitude: f64) -> f64 {
    normalize_degrees(greenwich_sidereal_time(jd_ut) + east_longitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_12a() {
        // 1987 April 10, 0h UT: θ0 = 13h10m46.3668s, apparent 13h10m46.1351s
        let jd = 2_446_895.5;
        let mean = (13.0 + 10.0 / 60.0 + 46.3668 / 3600.0) * 15.0;
        let apparent = (13.0 + 10.0 / 60.0 + 46.1351 / 3600.0) * 15.0;
        assert!((greenwich_mean_sidereal_time(jd) - mean).abs() < 1e-5);
        assert!((greenwich_sidereal_time(jd) - apparent).abs() < 5e-5);
    }

    #[test]
    fn local_time_adds_longitude() {
        let jd = 2_451_545.0;
        let gst = greenwich_sidereal_time(jd);
        assert!((local_sidereal_time(jd, 90.0) - normalize_degrees(gst + 90.0)).abs() < 1e-9);
        assert!((0.0..360.0).contains(&local_sidereal_time(jd, -179.9)));
    }
}

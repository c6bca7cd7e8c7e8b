//! Obliquity of the ecliptic.
//!
//! Mean obliquity: IAU 1980 polynomial (Lieske et al. 1977), as tabulated in
//! Meeus eq. 22.2. True obliquity adds the nutation in obliquity.

use super::nutation::nutation;
use crate::time::julian_centuries;

/// Mean obliquity of the ecliptic in degrees at a Julian Day (TT).
pub fn mean_obliquity(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    let arcsec = 21.448 - 46.8150 * t - 0.00059 * t * t + 0.001813 * t * t * t;
    23.0 + 26.0 / 60.0 + arcsec / 3600.0
}

/// True obliquity (mean plus nutation) in degrees at a Julian Day (TT).
pub fn true_obliquity(jd: f64) -> f64 {
    mean_obliquity(jd) + nutation(julian_centuries(jd)).delta_epsilon
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{to_julian_day, J2000_JD};

    #[test]
    fn j2000_value() {
        assert!((mean_obliquity(J2000_JD) - 23.439_291_1).abs() < 1e-6);
    }

    #[test]
    fn meeus_example_22a() {
        // 1987 April 10: ε0 = 23°26′27.407″, ε = 23°26′36.850″
        let jd = to_julian_day(1987, 4, 10, 0, 0, 0.0);
        let mean = mean_obliquity(jd);
        let true_eps = true_obliquity(jd);
        assert!((mean - 23.440_946_4).abs() < 1e-5, "ε0 = {mean}");
        assert!((true_eps - 23.443_569_4).abs() < 5e-5, "ε = {true_eps}");
    }

    #[test]
    fn decreasing_over_centuries() {
        assert!(mean_obliquity(J2000_JD + 36_525.0) < mean_obliquity(J2000_JD));
    }
}

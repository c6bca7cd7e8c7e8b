//! Low-order Sun and Moon theories.
//!
//! Sun: Meeus ch. 25 (equation of centre, ~0.01°). Moon: Meeus ch. 47 with
//! the main periodic terms only (~0.01° in longitude, a few tenths of an
//! arcminute more in latitude).
//!
//! Both return geocentric ecliptic coordinates referred to the mean equinox
//! of date.

use crate::coords::normalize_degrees;
use crate::time::julian_centuries;

/// Kilometres per astronomical unit.
pub const KM_PER_AU: f64 = 149_597_870.7;

/// Geocentric ecliptic coordinates (degrees, AU).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LuminaryPosition {
    pub longitude: f64,
    pub latitude: f64,
    pub distance: f64,
}

/// Geometric Sun, mean equinox of date, for a Julian Day (TT).
pub fn sun_position(jd: f64) -> LuminaryPosition {
    let t = julian_centuries(jd);
    let l0 = 280.46646 + 36000.76983 * t + 0.0003032 * t * t;
    let m = 357.52911 + 35999.05029 * t - 0.0001537 * t * t;
    let e = 0.016708634 - 0.000042037 * t - 0.0000001267 * t * t;
    let m_rad = m.to_radians();

    let centre = (1.914602 - 0.004817 * t - 0.000014 * t * t) * m_rad.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m_rad).sin()
        + 0.000289 * (3.0 * m_rad).sin();

    let true_anomaly = (m + centre).to_radians();
    let distance = 1.000001018 * (1.0 - e * e) / (1.0 + e * true_anomaly.cos());

    LuminaryPosition {
        longitude: normalize_degrees(l0 + centre),
        latitude: 0.0,
        distance,
    }
}

/// Annual aberration in longitude (degrees) for the Sun at `distance` AU.
pub fn solar_aberration(distance: f64) -> f64 {
    -20.4898 / 3600.0 / distance
}

// Multiples of D, M, M', F followed by Σl (1e-6 °) and Σr (1e-3 km).
const LONGITUDE_DISTANCE_TERMS: [(i8, i8, i8, i8, f64, f64); 32] = [
    (0, 0, 1, 0, 6288774.0, -20905355.0),
    (2, 0, -1, 0, 1274027.0, -3699111.0),
    (2, 0, 0, 0, 658314.0, -2955968.0),
    (0, 0, 2, 0, 213618.0, -569925.0),
    (0, 1, 0, 0, -185116.0, 48888.0),
    (0, 0, 0, 2, -114332.0, -3149.0),
    (2, 0, -2, 0, 58793.0, 246158.0),
    (2, -1, -1, 0, 57066.0, -152138.0),
    (2, 0, 1, 0, 53322.0, -170733.0),
    (2, -1, 0, 0, 45758.0, -204586.0),
    (0, 1, -1, 0, -40923.0, -129620.0),
    (1, 0, 0, 0, -34720.0, 108743.0),
    (0, 1, 1, 0, -30383.0, 104755.0),
    (2, 0, 0, -2, 15327.0, 10321.0),
    (0, 0, 1, 2, -12528.0, 0.0),
    (0, 0, 1, -2, 10980.0, 79661.0),
    (4, 0, -1, 0, 10675.0, -34782.0),
    (0, 0, 3, 0, 10034.0, -23210.0),
    (4, 0, -2, 0, 8548.0, -21636.0),
    (2, 1, -1, 0, -7888.0, 24208.0),
    (2, 1, 0, 0, -6766.0, 30824.0),
    (1, 0, -1, 0, -5163.0, -8379.0),
    (1, 1, 0, 0, 4987.0, -16675.0),
    (2, -1, 1, 0, 4036.0, -12831.0),
    (2, 0, 2, 0, 3994.0, -10445.0),
    (4, 0, 0, 0, 3861.0, -11650.0),
    (2, 0, -3, 0, 3665.0, 14403.0),
    (0, 1, -2, 0, -2689.0, -7003.0),
    (2, 0, -1, 2, -2602.0, 0.0),
    (2, -1, -2, 0, 2390.0, 10056.0),
    (1, 0, 1, 0, -2348.0, 6322.0),
    (2, -2, 0, 0, 2236.0, -9884.0),
];

// Multiples of D, M, M', F followed by Σb (1e-6 °).
const LATITUDE_TERMS: [(i8, i8, i8, i8, f64); 20] = [
    (0, 0, 0, 1, 5128122.0),
    (0, 0, 1, 1, 280602.0),
    (0, 0, 1, -1, 277693.0),
    (2, 0, 0, -1, 173237.0),
    (2, 0, -1, 1, 55413.0),
    (2, 0, -1, -1, 46271.0),
    (2, 0, 0, 1, 32573.0),
    (0, 0, 2, 1, 17198.0),
    (2, 0, 1, -1, 9266.0),
    (0, 0, 2, -1, 8822.0),
    (2, -1, 0, -1, 8216.0),
    (2, 0, -2, -1, 4324.0),
    (2, 0, 1, 1, 4200.0),
    (2, 1, 0, -1, -3359.0),
    (2, -1, -1, 1, 2463.0),
    (2, -1, 0, 1, 2211.0),
    (2, -1, -1, -1, 2065.0),
    (0, 1, -1, -1, -1870.0),
    (4, 0, -1, -1, 1828.0),
    (0, 1, 0, 1, -1794.0),
];

/// Geometric Moon, mean equinox of date, for a Julian Day (TT).
pub fn moon_position(jd: f64) -> LuminaryPosition {
    let t = julian_centuries(jd);
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let mean_lon = 218.3164477 + 481267.88123421 * t - 0.0015786 * t2 + t3 / 538841.0
        - t4 / 65194000.0;
    let elong = 297.8501921 + 445267.1114034 * t - 0.0018819 * t2 + t3 / 545868.0
        - t4 / 113065000.0;
    let sun_anom = 357.5291092 + 35999.0502909 * t - 0.0001536 * t2 + t3 / 24490000.0;
    let moon_anom =
        134.9633964 + 477198.8675055 * t + 0.0087414 * t2 + t3 / 69699.0 - t4 / 14712000.0;
    let arg_lat = 93.2720950 + 483202.0175233 * t - 0.0036539 * t2 - t3 / 3526000.0
        + t4 / 863310000.0;
    // Eccentricity of Earth's orbit scales terms containing M
    let ecc = 1.0 - 0.002516 * t - 0.0000074 * t2;

    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479264.290 * t).to_radians();
    let a3 = (313.45 + 481266.484 * t).to_radians();

    let argument = |d: i8, m: i8, mp: i8, f: i8| {
        (d as f64 * elong + m as f64 * sun_anom + mp as f64 * moon_anom + f as f64 * arg_lat)
            .to_radians()
    };
    let ecc_factor = |m: i8| ecc.powi(m.unsigned_abs() as i32);

    let mut sum_l = 0.0;
    let mut sum_r = 0.0;
    for &(d, m, mp, f, l, r) in &LONGITUDE_DISTANCE_TERMS {
        let arg = argument(d, m, mp, f);
        let k = ecc_factor(m);
        sum_l += l * k * arg.sin();
        sum_r += r * k * arg.cos();
    }

    let mut sum_b = 0.0;
    for &(d, m, mp, f, b) in &LATITUDE_TERMS {
        sum_b += b * ecc_factor(m) * argument(d, m, mp, f).sin();
    }

    let lp = mean_lon.to_radians();
    let f = arg_lat.to_radians();
    let mp = moon_anom.to_radians();
    sum_l += 3958.0 * a1.sin() + 1962.0 * (lp - f).sin() + 318.0 * a2.sin();
    sum_b += -2235.0 * lp.sin() + 382.0 * a3.sin() + 175.0 * (a1 - f).sin()
        + 175.0 * (a1 + f).sin()
        + 127.0 * (lp - mp).sin()
        - 115.0 * (lp + mp).sin();

    LuminaryPosition {
        longitude: normalize_degrees(mean_lon + sum_l / 1e6),
        latitude: sum_b / 1e6,
        distance: (385000.56 + sum_r / 1000.0) / KM_PER_AU,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::to_julian_day;

    #[test]
    fn meeus_example_25a() {
        // 1992 October 13.0 TD: ☉ = 199.90988°, R = 0.99766 AU
        let sun = sun_position(to_julian_day(1992, 10, 13, 0, 0, 0.0));
        assert!((sun.longitude - 199.90988).abs() < 1e-4, "{}", sun.longitude);
        assert!((sun.distance - 0.99766).abs() < 1e-5);
        assert_eq!(sun.latitude, 0.0);
    }

    #[test]
    fn meeus_example_47a() {
        // 1992 April 12.0 TD: λ = 133.162655°, β = −3.229126°, Δ = 368409.7 km
        let moon = moon_position(to_julian_day(1992, 4, 12, 0, 0, 0.0));
        assert!((moon.longitude - 133.162655).abs() < 0.01, "{}", moon.longitude);
        assert!((moon.latitude + 3.229126).abs() < 0.01, "{}", moon.latitude);
        assert!((moon.distance * KM_PER_AU - 368_409.7).abs() < 50.0);
    }

    #[test]
    fn moon_stays_in_orbit_bounds() {
        let start = to_julian_day(2020, 1, 1, 0, 0, 0.0);
        for i in 0..60 {
            let moon = moon_position(start + i as f64 * 0.5);
            let km = moon.distance * KM_PER_AU;
            assert!((355_000.0..407_000.0).contains(&km), "{km}");
            assert!(moon.latitude.abs() < 5.4);
        }
    }
}

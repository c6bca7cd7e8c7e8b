//! Short-series nutation (IAU 1980, four leading terms).
//!
//! Accuracy about 0.5″ in Δψ and 0.1″ in Δε, which is ample for house
//! angles and apparent longitudes.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 22.

use serde::{Deserialize, Serialize};

/// Nutation in longitude and obliquity, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Nutation {
    pub delta_psi: f64,
    pub delta_epsilon: f64,
}

/// Nutation for `t` Julian centuries (TT) since J2000.0.
pub fn nutation(t: f64) -> Nutation {
    // Longitude of the Moon's ascending node, mean longitudes of Sun and Moon
    let omega = (125.04452 - 1934.136261 * t).to_radians();
    let sun = (280.4665 + 36000.7698 * t).to_radians();
    let moon = (218.3165 + 481267.8813 * t).to_radians();

    let delta_psi = -17.20 * omega.sin() - 1.32 * (2.0 * sun).sin() - 0.23 * (2.0 * moon).sin()
        + 0.21 * (2.0 * omega).sin();
    let delta_epsilon = 9.20 * omega.cos() + 0.57 * (2.0 * sun).cos()
        + 0.10 * (2.0 * moon).cos()
        - 0.09 * (2.0 * omega).cos();

    Nutation {
        delta_psi: delta_psi / 3600.0,
        delta_epsilon: delta_epsilon / 3600.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{julian_centuries, to_julian_day};

    #[test]
    fn meeus_example_22a() {
        // 1987 April 10, 0h TD: Δψ = −3.788″, Δε = +9.443″
        let t = julian_centuries(to_julian_day(1987, 4, 10, 0, 0, 0.0));
        let n = nutation(t);
        assert!((n.delta_psi * 3600.0 + 3.788).abs() < 0.5, "Δψ = {}″", n.delta_psi * 3600.0);
        assert!((n.delta_epsilon * 3600.0 - 9.443).abs() < 0.1, "Δε = {}″", n.delta_epsilon * 3600.0);
    }

    #[test]
    fn amplitude_bounds() {
        for i in 0..200 {
            let n = nutation(-1.0 + i as f64 * 0.01);
            assert!(n.delta_psi.abs() * 3600.0 < 19.0);
            assert!(n.delta_epsilon.abs() * 3600.0 < 10.5);
        }
    }
}

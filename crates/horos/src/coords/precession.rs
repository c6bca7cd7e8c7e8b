//! General precession in ecliptic longitude.
//!
//! IAU 2006 p_A (Capitaine et al. 2003, Table 1), truncated to the terms
//! that matter over a few millennia.

const P1: f64 = 5028.796195;
const P2: f64 = 1.1054348;
const P3: f64 = 0.00007964;

/// Accumulated precession in longitude since J2000.0, in degrees, for `t`
/// Julian centuries (TT).
pub fn precession_in_longitude(t: f64) -> f64 {
    (P1 * t + P2 * t * t + P3 * t * t * t) / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_at_j2000() {
        assert_eq!(precession_in_longitude(0.0), 0.0);
    }

    #[test]
    fn roughly_fifty_arcsec_per_year() {
        let per_year = precession_in_longitude(0.01) * 3600.0;
        assert!((per_year - 50.29).abs() < 0.01, "{per_year}");
    }

    #[test]
    fn odd_leading_term() {
        let fwd = precession_in_longitude(1.0);
        let back = precession_in_longitude(-1.0);
        assert!((fwd + back).abs() < 0.001);
        assert!(fwd > 1.39 && fwd < 1.40);
    }
}

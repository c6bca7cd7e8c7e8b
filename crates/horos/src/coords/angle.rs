//! Canonical angle wrapping used at every component boundary.

use std::f64::consts::TAU;

/// Wrap degrees into `[0, 360)`.
///
/// Works for inputs many periods away from the range. Tiny negative values
/// that would round up to exactly 360 are mapped to 0.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Wrap radians into `[0, 2π)`.
pub fn normalize_radians(radians: f64) -> f64 {
    let wrapped = radians.rem_euclid(TAU);
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Wrap degrees into `(-180, 180]`.
pub fn signed_degrees(degrees: f64) -> f64 {
    let wrapped = normalize_degrees(degrees);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Forward arc from `from` to `to`, in `[0, 360)`.
pub fn forward_arc(from: f64, to: f64) -> f64 {
    normalize_degrees(to - from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degrees_in_range() {
        for &x in &[0.0, 359.999, 360.0, 720.5, -0.5, -359.0, -1e9, 1e9, 12345.678] {
            let n = normalize_degrees(x);
            assert!((0.0..360.0).contains(&n), "normalize_degrees({x}) = {n}");
        }
    }

    #[test]
    fn degrees_periodic() {
        for k in -5..=5 {
            let base = 123.456;
            let shifted = base + 360.0 * k as f64;
            assert!((normalize_degrees(shifted) - base).abs() < 1e-9);
        }
    }

    #[test]
    fn tiny_negative_maps_to_zero() {
        assert_eq!(normalize_degrees(-1e-17), 0.0);
        assert_eq!(normalize_radians(-1e-18), 0.0);
    }

    #[test]
    fn radians_in_range() {
        for &x in &[-TAU, -1.0, 0.0, 7.0, 100.0 * TAU + 0.25] {
            let n = normalize_radians(x);
            assert!((0.0..TAU).contains(&n));
        }
        assert!((normalize_radians(100.0 * TAU + 0.25) - 0.25).abs() < 1e-9);
    }

    #[test]
    fn signed_wrap() {
        assert_eq!(signed_degrees(190.0), -170.0);
        assert_eq!(signed_degrees(180.0), 180.0);
        assert_eq!(signed_degrees(-180.0), 180.0);
        assert!((signed_degrees(-10.0) + 10.0).abs() < 1e-12);
    }

    #[test]
    fn forward_arc_wraps() {
        assert!((forward_arc(350.0, 20.0) - 30.0).abs() < 1e-12);
        assert!((forward_arc(20.0, 350.0) - 330.0).abs() < 1e-12);
    }
}

//! Closed-form rotations between ecliptic, equatorial and horizontal frames,
//! and the cartesian/spherical pair used by the ephemeris.
//!
//! All angles are degrees. Longitude-like outputs are normalized to
//! `[0, 360)`; latitude-like outputs are signed.

use serde::{Deserialize, Serialize};

use super::angle::normalize_degrees;
use crate::error::AstroError;

/// Radii below this are treated as the origin.
pub const MIN_RADIUS: f64 = 1e-10;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EclipticCoords {
    pub longitude: f64,
    pub latitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquatorialCoords {
    pub right_ascension: f64,
    pub declination: f64,
}

/// Azimuth is measured from north through east.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizontalCoords {
    pub azimuth: f64,
    pub altitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphericalCoords {
    pub longitude: f64,
    pub latitude: f64,
    pub radius: f64,
}

/// Clamp before `asin` so rounding never produces NaN.
fn safe_asin(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).asin()
}

/// Ecliptic → equatorial for obliquity `epsilon` (degrees).
pub fn ecliptic_to_equatorial(ecl: EclipticCoords, epsilon: f64) -> EquatorialCoords {
    let (sin_l, cos_l) = ecl.longitude.to_radians().sin_cos();
    let (sin_b, cos_b) = ecl.latitude.to_radians().sin_cos();
    let (sin_e, cos_e) = epsilon.to_radians().sin_cos();
    let tan_b = sin_b / cos_b;

    let ra = (sin_l * cos_e - tan_b * sin_e).atan2(cos_l);
    let dec = safe_asin(sin_b * cos_e + cos_b * sin_e * sin_l);

    EquatorialCoords {
        right_ascension: normalize_degrees(ra.to_degrees()),
        declination: dec.to_degrees(),
    }
}

/// Equatorial → ecliptic for obliquity `epsilon` (degrees).
pub fn equatorial_to_ecliptic(eq: EquatorialCoords, epsilon: f64) -> EclipticCoords {
    let (sin_a, cos_a) = eq.right_ascension.to_radians().sin_cos();
    let (sin_d, cos_d) = eq.declination.to_radians().sin_cos();
    let (sin_e, cos_e) = epsilon.to_radians().sin_cos();
    let tan_d = sin_d / cos_d;

    let lon = (sin_a * cos_e + tan_d * sin_e).atan2(cos_a);
    let lat = safe_asin(sin_d * cos_e - cos_d * sin_e * sin_a);

    EclipticCoords {
        longitude: normalize_degrees(lon.to_degrees()),
        latitude: lat.to_degrees(),
    }
}

/// Equatorial → horizontal for an observer at `latitude` with local
/// sidereal time `lst` (both degrees).
pub fn equatorial_to_horizon(eq: EquatorialCoords, lst: f64, latitude: f64) -> HorizontalCoords {
    let hour_angle = (lst - eq.right_ascension).to_radians();
    let (sin_h, cos_h) = hour_angle.sin_cos();
    let (sin_d, cos_d) = eq.declination.to_radians().sin_cos();
    let (sin_p, cos_p) = latitude.to_radians().sin_cos();

    let altitude = safe_asin(sin_p * sin_d + cos_p * cos_d * cos_h);
    let azimuth = (-cos_d * sin_h).atan2(sin_d * cos_p - cos_d * cos_h * sin_p);

    HorizontalCoords {
        azimuth: normalize_degrees(azimuth.to_degrees()),
        altitude: altitude.to_degrees(),
    }
}

/// Rectangular → spherical, longitude in `[0, 360)`.
pub fn cartesian_to_spherical(x: f64, y: f64, z: f64) -> Result<SphericalCoords, AstroError> {
    let radius = (x * x + y * y + z * z).sqrt();
    if !radius.is_finite() || radius < MIN_RADIUS {
        return Err(AstroError::degenerate(format!(
            "radius {radius:e} is too small for a direction"
        )));
    }
    Ok(SphericalCoords {
        longitude: normalize_degrees(y.atan2(x).to_degrees()),
        latitude: safe_asin(z / radius).to_degrees(),
        radius,
    })
}

pub fn spherical_to_cartesian(s: SphericalCoords) -> [f64; 3] {
    let (sin_l, cos_l) = s.longitude.to_radians().sin_cos();
    let (sin_b, cos_b) = s.latitude.to_radians().sin_cos();
    [
        s.radius * cos_b * cos_l,
        s.radius * cos_b * sin_l,
        s.radius * sin_b,
    ]
}

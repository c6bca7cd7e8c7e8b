//! Ascendant and midheaven from local sidereal time.

use crate::coords::normalize_degrees;
use crate::error::AstroError;

/// Beyond this latitude the ascendant is not well defined.
pub const MAX_ASCENDANT_LATITUDE: f64 = 89.0;

const VANISHING: f64 = 1e-12;

/// Ecliptic longitude rising in the east.
///
/// `lst`, `latitude` and `obliquity` in degrees.
pub fn ascendant(lst: f64, latitude: f64, obliquity: f64) -> Result<f64, AstroError> {
    if !latitude.is_finite() || latitude.abs() > MAX_ASCENDANT_LATITUDE {
        return Err(AstroError::degenerate(format!(
            "ascendant undefined at latitude {latitude}°"
        )));
    }
    let (sin_t, cos_t) = lst.to_radians().sin_cos();
    let (sin_e, cos_e) = obliquity.to_radians().sin_cos();
    let tan_p = latitude.to_radians().tan();

    let y = cos_t;
    let x = -(sin_t * cos_e + tan_p * sin_e);
    if y.abs() < VANISHING && x.abs() < VANISHING {
        return Err(AstroError::degenerate(
            "horizon and ecliptic coincide; ascendant undefined",
        ));
    }
    Ok(normalize_degrees(y.atan2(x).to_degrees()))
}

/// Ecliptic longitude culminating on the meridian.
pub fn midheaven(lst: f64, obliquity: f64) -> f64 {
    let (sin_t, cos_t) = lst.to_radians().sin_cos();
    normalize_degrees(sin_t.atan2(cos_t * obliquity.to_radians().cos()).to_degrees())
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::types::{BodyPosition, RectangularPosition};
use crate::body::Body;
use crate::coords::signed_degrees;
use crate::error::AstroError;

/// Half-width of the central difference used for speeds, in days.
pub const SPEED_HALF_STEP: f64 = 0.5;

/// Source of body positions. Times are Julian Days in TT.
pub trait EphemerisBackend: Send + Sync {
    fn name(&self) -> &'static str;

    /// Heliocentric rectangular vector, ecliptic and equinox J2000, AU.
    fn heliocentric_position(&self, body: Body, jd_tt: f64)
        -> Result<RectangularPosition, AstroError>;

    /// Apparent geocentric ecliptic position, true equinox of date.
    /// `speed` is left at 0.
    fn geocentric_ecliptic_position(&self, body: Body, jd_tt: f64)
        -> Result<BodyPosition, AstroError>;

    /// Geocentric position with speed in longitude from a central
    /// difference over one day.
    fn geocentric_with_speed(&self, body: Body, jd_tt: f64) -> Result<BodyPosition, AstroError> {
        let before = self.geocentric_ecliptic_position(body, jd_tt - SPEED_HALF_STEP)?;
        let after = self.geocentric_ecliptic_position(body, jd_tt + SPEED_HALF_STEP)?;
        let mut position = self.geocentric_ecliptic_position(body, jd_tt)?;
        position.speed =
            signed_degrees(after.longitude - before.longitude) / (2.0 * SPEED_HALF_STEP);
        Ok(position)
    }
}

/// Which backend to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    #[default]
    Series,
    Swiss,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BackendKind::Series => "series",
            BackendKind::Swiss => "swiss",
        })
    }
}

impl FromStr for BackendKind {
    type Err = AstroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "series" => Ok(BackendKind::Series),
            "swiss" | "swisseph" => Ok(BackendKind::Swiss),
            other => Err(AstroError::invalid(format!(
                "unknown ephemeris backend '{other}' (expected 'series' or 'swiss')"
            ))),
        }
    }
}

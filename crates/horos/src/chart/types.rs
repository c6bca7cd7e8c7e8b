use serde::{Deserialize, Serialize};

use super::houses::{HouseCusp, HouseSystem};
use crate::body::Body;
use crate::ephemeris::BodyPosition;
use crate::error::AstroError;
use crate::zodiac::ZodiacSign;

/// Geographic location coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Degrees, north positive
    pub latitude: f64,
    /// Degrees, east positive
    pub longitude: f64,
}

impl GeoLocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn validate(&self) -> Result<(), AstroError> {
        if !self.latitude.is_finite() || self.latitude.abs() > 90.0 {
            return Err(AstroError::invalid(format!(
                "latitude {} outside [-90, 90]",
                self.latitude
            )));
        }
        if !self.longitude.is_finite() || self.longitude.abs() > 180.0 {
            return Err(AstroError::invalid(format!(
                "longitude {} outside [-180, 180]",
                self.longitude
            )));
        }
        Ok(())
    }
}

/// A body's position with its house and sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub position: BodyPosition,
    pub house: u8,
    pub sign: ZodiacSign,
}

impl Placement {
    pub fn body(&self) -> Body {
        self.position.body
    }

    pub fn longitude(&self) -> f64 {
        self.position.longitude
    }
}

/// A computed horoscope. Derived charts are always new values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    /// Julian Day (UT) of the chart moment
    pub moment_jd: f64,
    pub location: GeoLocation,
    /// The system actually used, which may differ from the one requested
    pub house_system: HouseSystem,
    pub ascendant: f64,
    pub midheaven: f64,
    pub cusps: [HouseCusp; 12],
    pub placements: Vec<Placement>,
}

impl Chart {
    pub fn placement(&self, body: Body) -> Option<&Placement> {
        self.placements.iter().find(|p| p.body() == body)
    }

    pub fn position(&self, body: Body) -> Option<&BodyPosition> {
        self.placement(body).map(|p| &p.position)
    }

    pub fn positions(&self) -> impl Iterator<Item = &BodyPosition> {
        self.placements.iter().map(|p| &p.position)
    }

    /// Longitude of cusp `number` (1..=12).
    pub fn cusp(&self, number: u8) -> Option<f64> {
        self.cusps
            .iter()
            .find(|c| c.number == number)
            .map(|c| c.longitude)
    }

    pub fn descendant(&self) -> f64 {
        crate::coords::normalize_degrees(self.ascendant + 180.0)
    }

    pub fn imum_coeli(&self) -> f64 {
        crate::coords::normalize_degrees(self.midheaven + 180.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_bounds() {
        assert!(GeoLocation::new(51.5, -0.12).validate().is_ok());
        assert!(GeoLocation::new(90.0, 180.0).validate().is_ok());
        assert!(GeoLocation::new(90.1, 0.0).validate().is_err());
        assert!(GeoLocation::new(0.0, -180.5).validate().is_err());
        assert!(GeoLocation::new(f64::NAN, 0.0).validate().is_err());
    }
}

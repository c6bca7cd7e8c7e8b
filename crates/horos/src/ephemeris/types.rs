use serde::{Deserialize, Serialize};

use crate::body::Body;

/// Origin of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frame {
    Heliocentric,
    Geocentric,
}

/// Rectangular vector in AU, ecliptic and equinox J2000.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RectangularPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl RectangularPosition {
    pub const ORIGIN: RectangularPosition = RectangularPosition {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

impl std::ops::Sub for RectangularPosition {
    type Output = RectangularPosition;

    fn sub(self, rhs: Self) -> Self::Output {
        RectangularPosition::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::ops::Add for RectangularPosition {
    type Output = RectangularPosition;

    fn add(self, rhs: Self) -> Self::Output {
        RectangularPosition::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

/// Ecliptic position of a body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    pub body: Body,
    pub frame: Frame,
    /// Longitude in degrees (0-360)
    pub longitude: f64,
    /// Latitude in degrees
    pub latitude: f64,
    /// Distance in AU
    pub distance: f64,
    /// Speed in longitude (degrees per day); 0 when not computed
    pub speed: f64,
}

impl BodyPosition {
    pub fn is_retrograde(&self) -> bool {
        self.speed < 0.0
    }
}

use log::debug;
use std::env;
use std::path::{Path, PathBuf};
use swisseph::swe;

use super::backend::EphemerisBackend;
use super::types::{BodyPosition, Frame, RectangularPosition};
use crate::body::Body;
use crate::coords::normalize_degrees;
use crate::error::AstroError;

// Swiss Ephemeris calculation flags
const FLG_SWIEPH: u32 = 2;
const FLG_HELCTR: u32 = 8;
const FLG_J2000: u32 = 32;
const FLG_SPEED: u32 = 256;
const FLG_XYZ: u32 = 4096;

const DEFAULT_EPHEMERIS_PATH: &str = "/usr/local/share/swisseph";

/// Swiss Ephemeris planet numbers
fn planet_code(body: Body) -> u32 {
    match body {
        Body::Sun => 0,
        Body::Moon => 1,
        Body::Mercury => 2,
        Body::Venus => 3,
        Body::Mars => 4,
        Body::Jupiter => 5,
        Body::Saturn => 6,
        Body::Uranus => 7,
        Body::Neptune => 8,
        Body::Pluto => 9,
        Body::Earth => 14,
    }
}

/// Backend delegating to the native Swiss Ephemeris library.
pub struct SwissEphemerisAdapter {
    ephemeris_path: PathBuf,
}

impl SwissEphemerisAdapter {
    /// Create a new adapter with optional ephemeris path.
    ///
    /// Falls back to `$SWISS_EPHEMERIS_PATH`, then the conventional install
    /// location.
    pub fn new(ephemeris_path: Option<PathBuf>) -> Result<Self, AstroError> {
        let path = ephemeris_path.unwrap_or_else(|| {
            env::var("SWISS_EPHEMERIS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_EPHEMERIS_PATH))
        });

        if !path.exists() {
            return Err(AstroError::Backend {
                backend: "swiss".to_string(),
                body: "-".to_string(),
                message: format!(
                    "ephemeris path {} does not exist; install the Swiss Ephemeris data files",
                    path.display()
                ),
            });
        }
        debug!("Swiss Ephemeris data at {}", path.display());

        Ok(Self {
            ephemeris_path: path,
        })
    }

    pub fn ephemeris_path(&self) -> &Path {
        &self.ephemeris_path
    }

    /// Raw six-element result: position triple followed by speeds.
    fn calc(&self, body: Body, jd_tt: f64, flags: u32) -> Result<[f64; 6], AstroError> {
        let result =
            swe::calc(jd_tt, planet_code(body), flags).map_err(|e| AstroError::Backend {
                backend: "swiss".to_string(),
                body: body.name().to_string(),
                message: format!("Swiss Ephemeris error: {}", e),
            })?;
        let out = result.out;
        Ok([out[0], out[1], out[2], out[3], out[4], out[5]])
    }

    fn geocentric(&self, body: Body, jd_tt: f64) -> Result<BodyPosition, AstroError> {
        if body == Body::Earth {
            return Err(AstroError::invalid("earth has no geocentric position"));
        }
        let out = self.calc(body, jd_tt, FLG_SWIEPH | FLG_SPEED)?;
        Ok(BodyPosition {
            body,
            frame: Frame::Geocentric,
            longitude: normalize_degrees(out[0]),
            latitude: out[1],
            distance: out[2],
            speed: out[3],
        })
    }
}

impl EphemerisBackend for SwissEphemerisAdapter {
    fn name(&self) -> &'static str {
        "swiss"
    }

    fn heliocentric_position(
        &self,
        body: Body,
        jd_tt: f64,
    ) -> Result<RectangularPosition, AstroError> {
        if body == Body::Sun {
            return Ok(RectangularPosition::ORIGIN);
        }
        let out = self.calc(body, jd_tt, FLG_SWIEPH | FLG_HELCTR | FLG_J2000 | FLG_XYZ)?;
        Ok(RectangularPosition::new(out[0], out[1], out[2]))
    }

    fn geocentric_ecliptic_position(
        &self,
        body: Body,
        jd_tt: f64,
    ) -> Result<BodyPosition, AstroError> {
        let mut position = self.geocentric(body, jd_tt)?;
        position.speed = 0.0;
        Ok(position)
    }

    /// The library reports speeds directly.
    fn geocentric_with_speed(&self, body: Body, jd_tt: f64) -> Result<BodyPosition, AstroError> {
        self.geocentric(body, jd_tt)
    }
}

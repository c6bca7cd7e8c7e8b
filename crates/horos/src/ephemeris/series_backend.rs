use std::sync::Arc;

use super::backend::EphemerisBackend;
use super::luminaries::{moon_position, solar_aberration, sun_position};
use super::types::{BodyPosition, Frame, RectangularPosition};
use crate::body::Body;
use crate::coords::{
    cartesian_to_spherical, normalize_degrees, nutation, precession_in_longitude,
    spherical_to_cartesian, SphericalCoords,
};
use crate::error::AstroError;
use crate::series::{Axis, SeriesStore};
use crate::time::julian_centuries;

/// Self-contained backend evaluating the periodic-series tables.
#[derive(Debug, Clone)]
pub struct SeriesEphemeris {
    store: Arc<SeriesStore>,
}

impl SeriesEphemeris {
    pub fn new(store: Arc<SeriesStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &SeriesStore {
        &self.store
    }

    fn series_vector(&self, body: Body, jd: f64) -> RectangularPosition {
        RectangularPosition::new(
            self.store.evaluate(body, Axis::X, jd),
            self.store.evaluate(body, Axis::Y, jd),
            self.store.evaluate(body, Axis::Z, jd),
        )
    }

    /// Geocentric lunar vector rotated back to the J2000 equinox.
    fn lunar_vector_j2000(jd: f64) -> RectangularPosition {
        let moon = moon_position(jd);
        let [x, y, z] = spherical_to_cartesian(SphericalCoords {
            longitude: moon.longitude - precession_in_longitude(julian_centuries(jd)),
            latitude: moon.latitude,
            radius: moon.distance,
        });
        RectangularPosition::new(x, y, z)
    }
}

impl EphemerisBackend for SeriesEphemeris {
    fn name(&self) -> &'static str {
        "series"
    }

    fn heliocentric_position(
        &self,
        body: Body,
        jd_tt: f64,
    ) -> Result<RectangularPosition, AstroError> {
        Ok(match body {
            Body::Sun => RectangularPosition::ORIGIN,
            Body::Moon => self.series_vector(Body::Earth, jd_tt) + Self::lunar_vector_j2000(jd_tt),
            _ => self.series_vector(body, jd_tt),
        })
    }

    fn geocentric_ecliptic_position(
        &self,
        body: Body,
        jd_tt: f64,
    ) -> Result<BodyPosition, AstroError> {
        let t = julian_centuries(jd_tt);
        let delta_psi = nutation(t).delta_psi;

        let (longitude, latitude, distance) = match body {
            Body::Earth => {
                return Err(AstroError::invalid(
                    "earth has no geocentric position",
                ))
            }
            Body::Sun => {
                let sun = sun_position(jd_tt);
                (
                    sun.longitude + delta_psi + solar_aberration(sun.distance),
                    sun.latitude,
                    sun.distance,
                )
            }
            Body::Moon => {
                let moon = moon_position(jd_tt);
                (moon.longitude + delta_psi, moon.latitude, moon.distance)
            }
            _ => {
                let v = self.series_vector(body, jd_tt) - self.series_vector(Body::Earth, jd_tt);
                let s = cartesian_to_spherical(v.x, v.y, v.z).map_err(|e| match e {
                    AstroError::DegenerateGeometry { message } => AstroError::DegenerateGeometry {
                        message: format!("{body} geocentric vector: {message}"),
                    },
                    other => other,
                })?;
                (
                    s.longitude + precession_in_longitude(t) + delta_psi,
                    s.latitude,
                    s.radius,
                )
            }
        };

        Ok(BodyPosition {
            body,
            frame: Frame::Geocentric,
            longitude: normalize_degrees(longitude),
            latitude,
            distance,
            speed: 0.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::BundledSeries;
    use crate::time::{to_julian_day, ut_to_tt};

    fn backend() -> SeriesEphemeris {
        SeriesEphemeris::new(Arc::new(SeriesStore::load(&BundledSeries)))
    }

    #[test]
    fn earth_orbit_radius() {
        let eph = backend();
        let jd = to_julian_day(2010, 3, 1, 0, 0, 0.0);
        let earth = eph.heliocentric_position(Body::Earth, jd).unwrap();
        assert!((0.98..1.02).contains(&earth.length()));
        assert_eq!(eph.heliocentric_position(Body::Sun, jd).unwrap(), RectangularPosition::ORIGIN);
    }

    #[test]
    fn moon_is_near_earth() {
        let eph = backend();
        let jd = to_julian_day(2010, 3, 1, 0, 0, 0.0);
        let earth = eph.heliocentric_position(Body::Earth, jd).unwrap();
        let moon = eph.heliocentric_position(Body::Moon, jd).unwrap();
        let d = (moon - earth).length();
        assert!((0.0023..0.0028).contains(&d), "{d}");
    }

    #[test]
    fn earth_has_no_geocentric_position() {
        let err = backend()
            .geocentric_ecliptic_position(Body::Earth, 2_451_545.0)
            .unwrap_err();
        assert!(matches!(err, AstroError::InvalidInput { .. }));
    }

    #[test]
    fn sun_speed_near_one_degree() {
        let eph = backend();
        let sun = eph.geocentric_with_speed(Body::Sun, 2_451_545.0).unwrap();
        assert!((0.95..1.03).contains(&sun.speed), "{}", sun.speed);
        let moon = eph.geocentric_with_speed(Body::Moon, 2_451_545.0).unwrap();
        assert!((11.5..15.5).contains(&moon.speed), "{}", moon.speed);
    }

    #[test]
    fn london_1990_longitudes() {
        let eph = backend();
        let jd = ut_to_tt(to_julian_day(1990, 6, 15, 14, 30, 0.0));
        let expected = [
            (Body::Sun, 84.23),
            (Body::Moon, 346.75),
            (Body::Mercury, 65.88),
            (Body::Venus, 48.91),
            (Body::Mars, 11.11),
            (Body::Jupiter, 105.95),
            (Body::Saturn, 293.96),
            (Body::Uranus, 278.16),
            (Body::Neptune, 283.71),
            (Body::Pluto, 225.40),
        ];
        for (body, lon) in expected {
            let pos = eph.geocentric_ecliptic_position(body, jd).unwrap();
            assert!((pos.longitude - lon).abs() < 0.1, "{body}: {}", pos.longitude);
        }
    }

    #[test]
    fn retrograde_mercury_detected() {
        // Mercury station retrograde 2023-04-21; retrograde through mid-May
        let eph = backend();
        let jd = to_julian_day(2023, 5, 1, 0, 0, 0.0);
        let mercury = eph.geocentric_with_speed(Body::Mercury, jd).unwrap();
        assert!(mercury.is_retrograde(), "speed {}", mercury.speed);
    }
}

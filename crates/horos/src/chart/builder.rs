use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::angles::{ascendant, midheaven};
use super::houses::{house_of, placidus_cusps, whole_sign_cusps, HouseCusp, HouseSystem};
use super::progression::{progressed_moment, solar_arc_directed, ProgressionMethod};
use super::sidereal::local_sidereal_time;
use super::types::{Chart, GeoLocation, Placement};
use crate::aspects::{Aspect, AspectCalculator, TransitAspect};
use crate::body::Body;
use crate::coords::{forward_arc, true_obliquity};
use crate::ephemeris::EphemerisBackend;
use crate::error::AstroError;
use crate::time::{datetime_to_julian_day, ut_to_tt};
use crate::zodiac::ZodiacSign;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    /// House system for [`ChartBuilder::build_chart_default`]
    pub house_system: HouseSystem,
    /// Rebuild with whole-sign houses when Placidus is undefined
    pub fallback_to_whole_sign: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            house_system: HouseSystem::Placidus,
            fallback_to_whole_sign: true,
        }
    }
}

/// A transit chart and its aspects to a natal chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitSet {
    pub live: Chart,
    pub aspects: Vec<TransitAspect>,
}

/// Builds charts against one ephemeris backend.
#[derive(Clone)]
pub struct ChartBuilder {
    backend: Arc<dyn EphemerisBackend>,
    options: ChartOptions,
    aspects: AspectCalculator,
}

impl ChartBuilder {
    pub fn new(backend: Arc<dyn EphemerisBackend>) -> Self {
        Self::with_options(backend, ChartOptions::default())
    }

    pub fn with_options(backend: Arc<dyn EphemerisBackend>, options: ChartOptions) -> Self {
        Self {
            backend,
            options,
            aspects: AspectCalculator::new(),
        }
    }

    pub fn with_aspect_calculator(mut self, aspects: AspectCalculator) -> Self {
        self.aspects = aspects;
        self
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    pub fn backend(&self) -> &dyn EphemerisBackend {
        self.backend.as_ref()
    }

    /// Build a chart for a UT Julian Day.
    pub fn build_chart(
        &self,
        moment_jd_ut: f64,
        location: GeoLocation,
        house_system: HouseSystem,
    ) -> Result<Chart, AstroError> {
        if !moment_jd_ut.is_finite() {
            return Err(AstroError::invalid(format!(
                "chart moment must be finite, got {moment_jd_ut}"
            )));
        }
        location.validate()?;

        let jd_tt = ut_to_tt(moment_jd_ut);
        let lst = local_sidereal_time(moment_jd_ut, location.longitude);
        let obliquity = true_obliquity(jd_tt);
        let asc = ascendant(lst, location.latitude, obliquity)?;
        let mc = midheaven(lst, obliquity);

        let (cusps, used) = self.cusps(house_system, lst, location, obliquity, asc, mc)?;

        let placements = Body::CHART_BODIES
            .iter()
            .map(|&body| {
                let position = self.backend.geocentric_with_speed(body, jd_tt)?;
                let house = house_of(position.longitude, &cusps).ok_or_else(|| {
                    AstroError::degenerate(format!("no house found for {body}"))
                })?;
                Ok(Placement {
                    position,
                    house,
                    sign: ZodiacSign::from_longitude(position.longitude),
                })
            })
            .collect::<Result<Vec<_>, AstroError>>()?;

        debug!(
            "Built {} chart at JD {:.5} ({:.4}, {:.4}) with {} backend: ASC {:.3} MC {:.3}",
            used,
            moment_jd_ut,
            location.latitude,
            location.longitude,
            self.backend.name(),
            asc,
            mc
        );

        Ok(Chart {
            moment_jd: moment_jd_ut,
            location,
            house_system: used,
            ascendant: asc,
            midheaven: mc,
            cusps,
            placements,
        })
    }

    /// Build a chart with the configured house system.
    pub fn build_chart_default(
        &self,
        moment_jd_ut: f64,
        location: GeoLocation,
    ) -> Result<Chart, AstroError> {
        self.build_chart(moment_jd_ut, location, self.options.house_system)
    }

    /// Build a chart for a UTC timestamp.
    pub fn build_chart_at(
        &self,
        moment: DateTime<Utc>,
        location: GeoLocation,
        house_system: HouseSystem,
    ) -> Result<Chart, AstroError> {
        self.build_chart(datetime_to_julian_day(moment), location, house_system)
    }

    fn cusps(
        &self,
        requested: HouseSystem,
        lst: f64,
        location: GeoLocation,
        obliquity: f64,
        asc: f64,
        mc: f64,
    ) -> Result<([HouseCusp; 12], HouseSystem), AstroError> {
        match requested {
            HouseSystem::WholeSign => Ok((whole_sign_cusps(asc), HouseSystem::WholeSign)),
            HouseSystem::Placidus => {
                match placidus_cusps(lst, location.latitude, obliquity, asc, mc) {
                    Ok(cusps) => Ok((cusps, HouseSystem::Placidus)),
                    Err(e) if e.is_degenerate() && self.options.fallback_to_whole_sign => {
                        warn!(
                            "Placidus undefined at latitude {:.4}, using whole-sign houses: {}",
                            location.latitude, e
                        );
                        Ok((whole_sign_cusps(asc), HouseSystem::WholeSign))
                    }
                    Err(e) => Err(e),
                }
            }
        }
    }

    /// Chart progressed `age_years` past `natal`. `natal` is only read.
    pub fn build_progressed_chart(
        &self,
        natal: &Chart,
        age_years: f64,
        method: ProgressionMethod,
    ) -> Result<Chart, AstroError> {
        let moment = progressed_moment(natal, age_years)?;
        match method {
            ProgressionMethod::SecondaryProgression => {
                self.build_chart(moment, natal.location, natal.house_system)
            }
            ProgressionMethod::SolarArc => {
                let natal_sun = match natal.position(Body::Sun) {
                    Some(sun) => sun.longitude,
                    None => {
                        self.backend
                            .geocentric_ecliptic_position(Body::Sun, ut_to_tt(natal.moment_jd))?
                            .longitude
                    }
                };
                let progressed_sun = self
                    .backend
                    .geocentric_ecliptic_position(Body::Sun, ut_to_tt(moment))?
                    .longitude;
                let arc = forward_arc(natal_sun, progressed_sun);
                debug!("Solar arc for age {:.2}: {:.4}°", age_years, arc);
                solar_arc_directed(natal, arc, moment)
            }
        }
    }

    /// Transit chart at `moment_jd_ut` for the natal location, with its
    /// aspects to `natal`.
    pub fn transits(&self, moment_jd_ut: f64, natal: &Chart) -> Result<TransitSet, AstroError> {
        let live = self.build_chart(moment_jd_ut, natal.location, natal.house_system)?;
        let aspects = self.transit_aspects(&live, natal);
        Ok(TransitSet { live, aspects })
    }

    pub fn transit_aspects(&self, live: &Chart, natal: &Chart) -> Vec<TransitAspect> {
        self.aspects.transit_aspects(live, natal)
    }

    pub fn chart_aspects(&self, chart: &Chart) -> Vec<Aspect> {
        self.aspects.chart_aspects(chart)
    }
}

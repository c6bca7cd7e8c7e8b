//! Progressed charts derived from a natal chart.

use serde::{Deserialize, Serialize};

use super::houses::{house_of, whole_sign_cusps, HouseCusp, HouseSystem};
use super::types::{Chart, Placement};
use crate::coords::normalize_degrees;
use crate::error::AstroError;
use crate::zodiac::ZodiacSign;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressionMethod {
    /// One day after birth for each year of life.
    #[default]
    SecondaryProgression,
    /// Every natal point advanced by the progressed Sun's arc.
    SolarArc,
}

/// Julian Day of the progressed moment for `age_years`.
pub fn progressed_moment(natal: &Chart, age_years: f64) -> Result<f64, AstroError> {
    if !age_years.is_finite() || age_years < 0.0 {
        return Err(AstroError::invalid(format!(
            "progression age must be a non-negative number of years, got {age_years}"
        )));
    }
    Ok(natal.moment_jd + age_years)
}

/// A copy of `natal` with every longitude, angle and cusp advanced by `arc`
/// degrees, stamped with `moment_jd`.
///
/// Whole-sign cusps are rebuilt from the directed ascendant so they stay on
/// sign boundaries. Directed points do not move, so every speed is zero.
pub fn solar_arc_directed(natal: &Chart, arc: f64, moment_jd: f64) -> Result<Chart, AstroError> {
    let ascendant = normalize_degrees(natal.ascendant + arc);
    let cusps: [HouseCusp; 12] = match natal.house_system {
        HouseSystem::WholeSign => whole_sign_cusps(ascendant),
        HouseSystem::Placidus => std::array::from_fn(|i| HouseCusp {
            number: natal.cusps[i].number,
            longitude: normalize_degrees(natal.cusps[i].longitude + arc),
        }),
    };

    let placements = natal
        .placements
        .iter()
        .map(|p| {
            let mut position = p.position;
            position.longitude = normalize_degrees(position.longitude + arc);
            position.speed = 0.0;
            let house = house_of(position.longitude, &cusps).ok_or_else(|| {
                AstroError::degenerate(format!("no house found for directed {}", position.body))
            })?;
            Ok(Placement {
                position,
                house,
                sign: ZodiacSign::from_longitude(position.longitude),
            })
        })
        .collect::<Result<Vec<_>, AstroError>>()?;

    Ok(Chart {
        moment_jd,
        location: natal.location,
        house_system: natal.house_system,
        ascendant,
        midheaven: normalize_degrees(natal.midheaven + arc),
        cusps,
        placements,
    })
}

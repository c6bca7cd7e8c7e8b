//! House systems and house assignment.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::coords::{forward_arc, normalize_degrees, normalize_radians};
use crate::error::AstroError;

const MAX_ITERATIONS: usize = 100;
const TOLERANCE: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseSystem {
    WholeSign,
    #[default]
    Placidus,
}

impl fmt::Display for HouseSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HouseSystem::WholeSign => "whole_sign",
            HouseSystem::Placidus => "placidus",
        })
    }
}

impl FromStr for HouseSystem {
    type Err = AstroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "whole_sign" | "wholesign" | "whole" => Ok(HouseSystem::WholeSign),
            "placidus" => Ok(HouseSystem::Placidus),
            other => Err(AstroError::invalid(format!(
                "unknown house system '{other}' (expected 'placidus' or 'whole_sign')"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseCusp {
    /// 1..=12
    pub number: u8,
    pub longitude: f64,
}

fn numbered(longitudes: [f64; 12]) -> [HouseCusp; 12] {
    std::array::from_fn(|i| HouseCusp {
        number: i as u8 + 1,
        longitude: normalize_degrees(longitudes[i]),
    })
}

/// Cusp 1 at 0° of the ascendant's sign, then every 30°.
pub fn whole_sign_cusps(ascendant: f64) -> [HouseCusp; 12] {
    let start = (normalize_degrees(ascendant) / 30.0).floor() * 30.0;
    numbered(std::array::from_fn(|i| start + 30.0 * i as f64))
}

/// Placidus cusps from the sidereal time (RAMC), latitude and obliquity.
///
/// Cusps 11 and 12 trisect the diurnal semi-arc east of the MC, cusps 2 and
/// 3 the nocturnal semi-arc before the IC; cusps 4 to 9 are the opposite
/// points. Each intermediate cusp is found by fixed-point iteration on its
/// right ascension.
pub fn placidus_cusps(
    ramc: f64,
    latitude: f64,
    obliquity: f64,
    ascendant: f64,
    midheaven: f64,
) -> Result<[HouseCusp; 12], AstroError> {
    let ramc = ramc.to_radians();
    let phi = latitude.to_radians();
    let eps = obliquity.to_radians();

    let solve = |label: u8, offset: &dyn Fn(f64) -> f64| -> Result<f64, AstroError> {
        // Start from the equal-division guess
        let mut ra = ramc + offset(PI / 2.0);
        for _ in 0..MAX_ITERATIONS {
            let lambda = ra.sin().atan2(ra.cos() * eps.cos());
            let dec = (eps.sin() * lambda.sin()).asin();
            let x = -phi.tan() * dec.tan();
            if !x.is_finite() || x.abs() > 1.0 {
                return Err(AstroError::degenerate(format!(
                    "Placidus cusp {label}: circumpolar ecliptic point at latitude {latitude}°"
                )));
            }
            let next = ramc + offset(x.acos());
            if (next - ra).abs() < TOLERANCE {
                let lon = next.sin().atan2(next.cos() * eps.cos());
                return Ok(normalize_radians(lon).to_degrees());
            }
            ra = next;
        }
        Err(AstroError::degenerate(format!(
            "Placidus cusp {label} did not converge in {MAX_ITERATIONS} iterations"
        )))
    };

    let c11 = solve(11, &|sa: f64| sa / 3.0)?;
    let c12 = solve(12, &|sa: f64| 2.0 * sa / 3.0)?;
    let c2 = solve(2, &|sa: f64| PI - 2.0 * (PI - sa) / 3.0)?;
    let c3 = solve(3, &|sa: f64| PI - (PI - sa) / 3.0)?;

    let asc = normalize_degrees(ascendant);
    let mc = normalize_degrees(midheaven);
    let cusps = numbered([
        asc,
        c2,
        c3,
        mc + 180.0,
        c11 + 180.0,
        c12 + 180.0,
        asc + 180.0,
        c2 + 180.0,
        c3 + 180.0,
        mc,
        c11,
        c12,
    ]);
    check_monotonic(&cusps)?;
    Ok(cusps)
}

/// Cusps must advance around the zodiac exactly once.
fn check_monotonic(cusps: &[HouseCusp; 12]) -> Result<(), AstroError> {
    let mut total = 0.0;
    for i in 0..12 {
        let span = forward_arc(cusps[i].longitude, cusps[(i + 1) % 12].longitude);
        if span <= 0.0 || span >= 180.0 {
            return Err(AstroError::degenerate(format!(
                "house {} spans {span:.3}°; cusps are out of order",
                i + 1
            )));
        }
        total += span;
    }
    if (total - 360.0).abs() > 1e-6 {
        return Err(AstroError::degenerate("house cusps wrap more than once"));
    }
    Ok(())
}

/// House (1..=12) containing `longitude`.
///
/// House n spans forward from cusp n to cusp n+1, wrapping past 360°.
/// Returns `None` if `cusps` does not describe twelve non-empty houses.
pub fn house_of(longitude: f64, cusps: &[HouseCusp]) -> Option<u8> {
    if cusps.len() != 12 {
        return None;
    }
    let lon = normalize_degrees(longitude);
    (0..12).find_map(|i| {
        let start = cusps[i].longitude;
        let span = forward_arc(start, cusps[(i + 1) % 12].longitude);
        (forward_arc(start, lon) < span).then_some(cusps[i].number)
    })
}

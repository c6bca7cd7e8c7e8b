use crate::aspects::types::{Aspect, AspectMatch, AspectSettings, AspectType, TransitAspect, TransitSpeed};
use crate::chart::Chart;
use crate::coords::{normalize_degrees, signed_degrees};
use crate::ephemeris::BodyPosition;

/// Projection step (days) used to decide applying versus separating.
const APPLYING_STEP: f64 = 0.1;

/// Shortest angular distance between two longitudes, in [0, 180].
pub fn angular_separation(lon_a: f64, lon_b: f64) -> f64 {
    let diff = normalize_degrees(lon_a - lon_b);
    if diff > 180.0 {
        360.0 - diff
    } else {
        diff
    }
}

/// Match two longitudes against the default aspect table.
///
/// When several orbs overlap, the aspect with the smallest deviation wins.
pub fn match_aspect(lon_a: f64, lon_b: f64) -> Option<AspectMatch> {
    best_match(angular_separation(lon_a, lon_b), |t| Some(t.default_orb()))
}

fn best_match(separation: f64, orb_for: impl Fn(AspectType) -> Option<f64>) -> Option<AspectMatch> {
    AspectType::ALL
        .iter()
        .filter_map(|&aspect_type| {
            let orb = orb_for(aspect_type)?;
            let deviation = (separation - aspect_type.exact_angle()).abs();
            (deviation <= orb).then_some(AspectMatch {
                aspect_type,
                separation,
                deviation,
                orb,
            })
        })
        .min_by(|a, b| a.deviation.total_cmp(&b.deviation))
}

/// Aspects from every transiting body to every natal body.
pub fn transit_aspects(live: &Chart, natal: &Chart) -> Vec<TransitAspect> {
    AspectCalculator::new().transit_aspects(live, natal)
}

/// Aspect calculator
#[derive(Debug, Clone, Default)]
pub struct AspectCalculator {
    settings: AspectSettings,
}

impl AspectCalculator {
    /// Calculator using the default orbs for every aspect type
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: AspectSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &AspectSettings {
        &self.settings
    }

    /// Match a separation using this calculator's orbs.
    pub fn match_separation(&self, separation: f64) -> Option<AspectMatch> {
        best_match(separation, |t| self.settings.orbs.get(&t).copied())
    }

    /// Calculate the aspect between two positions using their speeds
    pub fn calculate_aspect(&self, a: &BodyPosition, b: &BodyPosition) -> Option<Aspect> {
        self.aspect_with_speeds(a, b, a.speed, b.speed)
    }

    fn aspect_with_speeds(
        &self,
        a: &BodyPosition,
        b: &BodyPosition,
        speed_a: f64,
        speed_b: f64,
    ) -> Option<Aspect> {
        let m = self.match_separation(angular_separation(a.longitude, b.longitude))?;
        let applying = is_aspect_applying(
            a.longitude,
            b.longitude,
            speed_a,
            speed_b,
            m.aspect_type.exact_angle(),
        );
        Some(Aspect {
            body_a: a.body,
            body_b: b.body,
            aspect_type: m.aspect_type,
            separation: m.separation,
            deviation: m.deviation,
            orb: m.orb,
            strength: m.strength(),
            applying,
        })
    }

    /// Aspects between every unordered pair of bodies in one chart
    pub fn chart_aspects(&self, chart: &Chart) -> Vec<Aspect> {
        let positions: Vec<&BodyPosition> = chart
            .positions()
            .filter(|p| self.settings.includes(p.body))
            .collect();

        let mut aspects = Vec::new();
        for i in 0..positions.len() {
            for j in (i + 1)..positions.len() {
                if let Some(aspect) = self.calculate_aspect(positions[i], positions[j]) {
                    aspects.push(aspect);
                }
            }
        }
        aspects
    }

    /// Aspects from every transiting body to every natal body, same-body
    /// pairs included. Natal positions are fixed, so only the transiting
    /// body's motion decides applying.
    pub fn transit_aspects(&self, live: &Chart, natal: &Chart) -> Vec<TransitAspect> {
        let mut aspects = Vec::new();
        for transiting in live.positions().filter(|p| self.settings.includes(p.body)) {
            for fixed in natal.positions().filter(|p| self.settings.includes(p.body)) {
                if let Some(aspect) =
                    self.aspect_with_speeds(transiting, fixed, transiting.speed, 0.0)
                {
                    aspects.push(TransitAspect {
                        aspect,
                        speed: TransitSpeed::for_body(transiting.body),
                    });
                }
            }
        }
        aspects
    }
}

/// Determine if an aspect is applying (approaching exact) or separating
fn is_aspect_applying(lon_a: f64, lon_b: f64, speed_a: f64, speed_b: f64, exact: f64) -> bool {
    let relative_speed = speed_a - speed_b;
    if relative_speed == 0.0 {
        return false;
    }

    let current = (angular_separation(lon_a, lon_b) - exact).abs();

    // Project forward a small amount to see if we're getting closer to exact
    let future_signed = signed_degrees(lon_a - lon_b + relative_speed * APPLYING_STEP);
    let future = (future_signed.abs() - exact).abs();

    future < current
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applying_when_faster_body_approaches() {
        // a behind b, moving faster: conjunction applying
        assert!(is_aspect_applying(98.0, 100.0, 1.0, 0.0, 0.0));
        assert!(!is_aspect_applying(102.0, 100.0, 1.0, 0.0, 0.0));
        // retrograde reverses
        assert!(is_aspect_applying(102.0, 100.0, -1.0, 0.0, 0.0));
        assert!(!is_aspect_applying(98.0, 100.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn applying_trine_from_either_side() {
        assert!(is_aspect_applying(355.0, 236.0, 1.0, 0.0, 120.0));
        assert!(!is_aspect_applying(357.0, 236.0, 1.0, 0.0, 120.0));
    }

    #[test]
    fn applying_across_zero_aries() {
        assert!(is_aspect_applying(359.95, 0.5, 1.0, 0.0, 0.0));
        assert!(!is_aspect_applying(0.6, 359.9, 1.0, 0.0, 0.0));
    }

    #[test]
    fn tightest_deviation_wins() {
        let calc = AspectCalculator::with_settings(AspectSettings {
            orbs: [(AspectType::Sextile, 20.0), (AspectType::Square, 20.0)]
                .into_iter()
                .collect(),
            include_bodies: Vec::new(),
        });
        assert_eq!(calc.match_separation(80.0).unwrap().aspect_type, AspectType::Square);
        assert_eq!(calc.match_separation(70.0).unwrap().aspect_type, AspectType::Sextile);
    }
}

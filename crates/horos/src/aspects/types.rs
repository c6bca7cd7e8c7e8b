use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::body::Body;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectType {
    Conjunction,
    Opposition,
    Trine,
    Square,
    Sextile,
    Quincunx,
    Semisextile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectNature {
    Harmonious,
    Challenging,
    Neutral,
}

impl AspectType {
    /// Aspect types in order of frequency (most common first)
    pub const ALL: [AspectType; 7] = [
        AspectType::Conjunction,
        AspectType::Opposition,
        AspectType::Trine,
        AspectType::Square,
        AspectType::Sextile,
        AspectType::Quincunx,
        AspectType::Semisextile,
    ];

    pub fn exact_angle(&self) -> f64 {
        match self {
            AspectType::Conjunction => 0.0,
            AspectType::Opposition => 180.0,
            AspectType::Trine => 120.0,
            AspectType::Square => 90.0,
            AspectType::Sextile => 60.0,
            AspectType::Quincunx => 150.0,
            AspectType::Semisextile => 30.0,
        }
    }

    pub fn default_orb(&self) -> f64 {
        match self {
            AspectType::Conjunction | AspectType::Opposition => 10.0,
            AspectType::Trine | AspectType::Square => 8.0,
            AspectType::Sextile => 6.0,
            AspectType::Quincunx | AspectType::Semisextile => 3.0,
        }
    }

    pub fn nature(&self) -> AspectNature {
        match self {
            AspectType::Trine | AspectType::Sextile => AspectNature::Harmonious,
            AspectType::Opposition | AspectType::Square | AspectType::Quincunx => {
                AspectNature::Challenging
            }
            AspectType::Conjunction | AspectType::Semisextile => AspectNature::Neutral,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AspectType::Conjunction => "conjunction",
            AspectType::Opposition => "opposition",
            AspectType::Trine => "trine",
            AspectType::Square => "square",
            AspectType::Sextile => "sextile",
            AspectType::Quincunx => "quincunx",
            AspectType::Semisextile => "semisextile",
        }
    }
}

impl fmt::Display for AspectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of matching a separation against the aspect table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectMatch {
    pub aspect_type: AspectType,
    /// Angular separation in [0, 180]
    pub separation: f64,
    /// |separation - exact angle|
    pub deviation: f64,
    /// Orb the match was accepted under
    pub orb: f64,
}

impl AspectMatch {
    /// 1 at exactness, falling to 0 at the edge of the orb.
    pub fn strength(&self) -> f64 {
        if self.orb <= 0.0 {
            return 1.0;
        }
        (1.0 - self.deviation / self.orb).clamp(0.0, 1.0)
    }
}

/// An aspect between two bodies
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    pub body_a: Body,
    pub body_b: Body,
    pub aspect_type: AspectType,
    pub separation: f64,
    pub deviation: f64,
    pub orb: f64,
    pub strength: f64,
    /// Whether the aspect is applying (approaching exact)
    pub applying: bool,
}

impl Aspect {
    pub fn nature(&self) -> AspectNature {
        self.aspect_type.nature()
    }

    /// Within 0.1 degrees of exact
    pub fn is_exact(&self) -> bool {
        self.deviation < 0.1
    }
}

/// How quickly a transiting body moves through the zodiac.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitSpeed {
    ShortTerm,
    Regular,
    LongTerm,
}

impl TransitSpeed {
    pub fn for_body(body: Body) -> Self {
        match body {
            Body::Moon => TransitSpeed::ShortTerm,
            Body::Sun | Body::Mercury | Body::Venus | Body::Earth | Body::Mars => {
                TransitSpeed::Regular
            }
            Body::Jupiter | Body::Saturn | Body::Uranus | Body::Neptune | Body::Pluto => {
                TransitSpeed::LongTerm
            }
        }
    }
}

/// An aspect from a transiting body (`body_a`) to a natal one (`body_b`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitAspect {
    pub aspect: Aspect,
    pub speed: TransitSpeed,
}

/// Settings for aspect calculations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectSettings {
    /// Orb per aspect type; types left out are not matched
    pub orbs: HashMap<AspectType, f64>,
    /// Bodies to include; empty means every body
    pub include_bodies: Vec<Body>,
}

impl Default for AspectSettings {
    fn default() -> Self {
        Self {
            orbs: AspectType::ALL
                .iter()
                .map(|t| (*t, t.default_orb()))
                .collect(),
            include_bodies: Vec::new(),
        }
    }
}

impl AspectSettings {
    /// Conjunction, opposition, trine, square and sextile only.
    pub fn major_only() -> Self {
        let mut settings = Self::default();
        settings
            .orbs
            .retain(|t, _| !matches!(t, AspectType::Quincunx | AspectType::Semisextile));
        settings
    }

    pub fn includes(&self, body: Body) -> bool {
        self.include_bodies.is_empty() || self.include_bodies.contains(&body)
    }
}

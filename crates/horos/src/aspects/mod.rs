//! Aspect detection within one chart and between two.

pub mod calculator;
pub mod types;

pub use calculator::{angular_separation, match_aspect, transit_aspects, AspectCalculator};
pub use types::{
    Aspect, AspectMatch, AspectNature, AspectSettings, AspectType, TransitAspect, TransitSpeed,
};

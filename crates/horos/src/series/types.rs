use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::time::julian_centuries;

/// Rectangular axis of a heliocentric vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn name(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Axis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" | "X" => Ok(Axis::X),
            "y" | "Y" => Ok(Axis::Y),
            "z" | "Z" => Ok(Axis::Z),
            other => Err(format!("unknown axis '{other}'")),
        }
    }
}

/// One `amplitude · cos(phase + frequency · T)` term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodicTerm {
    pub amplitude: f64,
    /// Radians.
    pub phase: f64,
    /// Radians per Julian century.
    pub frequency: f64,
}

impl PeriodicTerm {
    #[inline]
    pub fn value(&self, t: f64) -> f64 {
        self.amplitude * (self.phase + self.frequency * t).cos()
    }
}

/// Terms multiplied by `T^power`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeriesVariable {
    pub power: i32,
    pub terms: Vec<PeriodicTerm>,
}

/// All variables for one (body, axis) pair.
///
/// An empty model evaluates to zero everywhere; that is what a degraded
/// load leaves behind.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeriesModel {
    pub variables: Vec<SeriesVariable>,
}

impl SeriesModel {
    pub fn is_empty(&self) -> bool {
        self.variables.iter().all(|v| v.terms.is_empty())
    }

    pub fn term_count(&self) -> usize {
        self.variables.iter().map(|v| v.terms.len()).sum()
    }

    /// Sum the series at `t` Julian centuries from J2000.0.
    pub fn evaluate_centuries(&self, t: f64) -> f64 {
        self.variables
            .iter()
            .map(|var| {
                let sum: f64 = var.terms.iter().map(|term| term.value(t)).sum();
                t.powi(var.power) * sum
            })
            .sum()
    }
}

/// Evaluate a model at a Julian Day (TT).
pub fn evaluate(model: &SeriesModel, jd: f64) -> f64 {
    model.evaluate_centuries(julian_centuries(jd))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{DAYS_PER_CENTURY, J2000_JD};

    fn term(amplitude: f64, phase: f64, frequency: f64) -> PeriodicTerm {
        PeriodicTerm {
            amplitude,
            phase,
            frequency,
        }
    }

    #[test]
    fn empty_model_is_zero() {
        let model = SeriesModel::default();
        assert!(model.is_empty());
        assert_eq!(evaluate(&model, 2_460_000.5), 0.0);
    }

    #[test]
    fn hand_computed_sum() {
        let model = SeriesModel {
            variables: vec![
                SeriesVariable {
                    power: 0,
                    terms: vec![term(2.0, 0.0, 0.0), term(1.0, 0.5, 3.0)],
                },
                SeriesVariable {
                    power: 1,
                    terms: vec![term(0.5, 1.0, 0.0)],
                },
            ],
        };
        let jd = J2000_JD + 0.25 * DAYS_PER_CENTURY;
        let t: f64 = 0.25;
        let expected = 2.0 + (0.5 + 3.0 * t).cos() + t * 0.5 * 1.0_f64.cos();
        assert!((evaluate(&model, jd) - expected).abs() < 1e-12);
        assert_eq!(model.term_count(), 3);
    }

    #[test]
    fn higher_powers_vanish_at_epoch() {
        let model = SeriesModel {
            variables: vec![SeriesVariable {
                power: 2,
                terms: vec![term(10.0, 0.0, 0.0)],
            }],
        };
        assert_eq!(evaluate(&model, J2000_JD), 0.0);
    }

    #[test]
    fn axis_parsing() {
        assert_eq!("y".parse::<Axis>(), Ok(Axis::Y));
        assert!("w".parse::<Axis>().is_err());
    }
}

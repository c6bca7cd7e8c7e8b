//! Parser for the plain-text coefficient tables.
//!
//! ```text
//! # comment
//! [mars x]
//! power 0
//! 1.5177e+00 6.2042 334.0535
//! ```
//!
//! Section markers name a body and an axis. Each `power n` header opens a
//! variable; the lines after it are `amplitude phase frequency` triples.

use std::collections::BTreeMap;
use thiserror::Error;

use super::types::{Axis, PeriodicTerm, SeriesModel, SeriesVariable};
use crate::body::Body;

/// Every section of one table file, keyed by (body, axis).
pub type SeriesTable = BTreeMap<(Body, Axis), SeriesModel>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeriesParseError {
    #[error("line {line}: malformed section marker '{content}'")]
    BadSection { line: usize, content: String },
    #[error("line {line}: section [{body} {axis}] appears twice")]
    DuplicateSection { line: usize, body: Body, axis: Axis },
    #[error("line {line}: '{content}' appears before any section marker")]
    OutsideSection { line: usize, content: String },
    #[error("line {line}: term appears before any 'power' header")]
    TermWithoutPower { line: usize },
    #[error("line {line}: malformed power header '{content}'")]
    BadPower { line: usize, content: String },
    #[error("line {line}: expected 'amplitude phase frequency', got '{content}'")]
    BadTerm { line: usize, content: String },
}

impl SeriesParseError {
    pub fn line(&self) -> usize {
        match self {
            Self::BadSection { line, .. }
            | Self::DuplicateSection { line, .. }
            | Self::OutsideSection { line, .. }
            | Self::TermWithoutPower { line }
            | Self::BadPower { line, .. }
            | Self::BadTerm { line, .. } => *line,
        }
    }
}

/// Parse every section of a table file.
pub fn parse_series_table(text: &str) -> Result<SeriesTable, SeriesParseError> {
    let mut table = SeriesTable::new();
    let mut current: Option<((Body, Axis), SeriesModel)> = None;

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if trimmed.starts_with('[') {
            let key = parse_section(trimmed).ok_or_else(|| SeriesParseError::BadSection {
                line,
                content: trimmed.to_string(),
            })?;
            if let Some((prev, model)) = current.take() {
                table.insert(prev, model);
            }
            if table.contains_key(&key) {
                return Err(SeriesParseError::DuplicateSection {
                    line,
                    body: key.0,
                    axis: key.1,
                });
            }
            current = Some((key, SeriesModel::default()));
            continue;
        }

        let Some((_, model)) = current.as_mut() else {
            return Err(SeriesParseError::OutsideSection {
                line,
                content: trimmed.to_string(),
            });
        };

        if let Some(rest) = trimmed.strip_prefix("power") {
            let power = rest
                .trim()
                .parse::<i32>()
                .ok()
                .filter(|p| *p >= 0)
                .ok_or_else(|| SeriesParseError::BadPower {
                    line,
                    content: trimmed.to_string(),
                })?;
            model.variables.push(SeriesVariable {
                power,
                terms: Vec::new(),
            });
            continue;
        }

        let term = parse_term(trimmed).ok_or_else(|| SeriesParseError::BadTerm {
            line,
            content: trimmed.to_string(),
        })?;
        model
            .variables
            .last_mut()
            .ok_or(SeriesParseError::TermWithoutPower { line })?
            .terms
            .push(term);
    }

    if let Some((key, model)) = current {
        table.insert(key, model);
    }
    Ok(table)
}

fn parse_section(marker: &str) -> Option<(Body, Axis)> {
    let inner = marker.strip_prefix('[')?.strip_suffix(']')?;
    let mut parts = inner.split_whitespace();
    let body = parts.next()?.parse::<Body>().ok()?;
    let axis = parts.next()?.parse::<Axis>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((body, axis))
}

fn parse_term(line: &str) -> Option<PeriodicTerm> {
    let mut fields = line.split_whitespace().map(str::parse::<f64>);
    let amplitude = fields.next()?.ok()?;
    let phase = fields.next()?.ok()?;
    let frequency = fields.next()?.ok()?;
    if fields.next().is_some() || ![amplitude, phase, frequency].iter().all(|v| v.is_finite()) {
        return None;
    }
    Some(PeriodicTerm {
        amplitude,
        phase,
        frequency,
    })
}

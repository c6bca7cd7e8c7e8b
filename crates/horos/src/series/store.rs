use log::{info, warn};
use std::collections::HashMap;

use super::parser::{parse_series_table, SeriesTable};
use super::source::SeriesSource;
use super::types::{evaluate, Axis, SeriesModel};
use crate::body::Body;
use crate::error::AstroError;

/// Load one (body, axis) model from a source.
///
/// Missing tables, parse failures and missing sections all surface as
/// `DataUnavailable`.
pub fn load_series(
    source: &dyn SeriesSource,
    body: Body,
    axis: Axis,
) -> Result<SeriesModel, AstroError> {
    let mut table = read_table(source, body, axis)?;
    take_section(&mut table, body, axis)
}

fn read_table(source: &dyn SeriesSource, body: Body, axis: Axis) -> Result<SeriesTable, AstroError> {
    let text = source.table_text(body)?;
    parse_series_table(&text).map_err(|e| AstroError::DataUnavailable {
        body: body.name().to_string(),
        axis: axis.name().to_string(),
        message: e.to_string(),
    })
}

fn take_section(table: &mut SeriesTable, body: Body, axis: Axis) -> Result<SeriesModel, AstroError> {
    table
        .remove(&(body, axis))
        .ok_or_else(|| AstroError::DataUnavailable {
            body: body.name().to_string(),
            axis: axis.name().to_string(),
            message: "section missing from table".to_string(),
        })
}

/// Every coefficient model the series ephemeris needs, built once.
///
/// Pairs that could not be loaded hold an empty model and evaluate to 0.
#[derive(Debug, Clone, Default)]
pub struct SeriesStore {
    models: HashMap<(Body, Axis), SeriesModel>,
    degraded: Vec<(Body, Axis)>,
}

impl SeriesStore {
    pub fn load(source: &dyn SeriesSource) -> Self {
        let mut store = SeriesStore::default();

        for body in Body::SERIES_BODIES {
            // One read and parse per body, degraded per axis.
            let mut table = read_table(source, body, Axis::X);
            let mut terms = 0;
            for axis in Axis::ALL {
                let model = match table.as_mut() {
                    Ok(t) => take_section(t, body, axis),
                    Err(e) => Err(with_axis(e.clone(), axis)),
                };
                match model {
                    Ok(model) => {
                        terms += model.term_count();
                        store.models.insert((body, axis), model);
                    }
                    Err(e) => {
                        warn!("Series for {} {} unavailable, evaluating as zero: {}", body, axis, e);
                        store.degraded.push((body, axis));
                        store.models.insert((body, axis), SeriesModel::default());
                    }
                }
            }
            info!("Loaded {} series terms for {} from {}", terms, body, source.describe());
        }

        store
    }

    /// The model for a pair; empty when it was never loaded.
    pub fn model(&self, body: Body, axis: Axis) -> Option<&SeriesModel> {
        self.models.get(&(body, axis))
    }

    pub fn evaluate(&self, body: Body, axis: Axis, jd: f64) -> f64 {
        self.model(body, axis).map_or(0.0, |m| evaluate(m, jd))
    }

    /// Pairs that fell back to an empty model during `load`.
    pub fn degraded(&self) -> &[(Body, Axis)] {
        &self.degraded
    }

    pub fn is_complete(&self) -> bool {
        self.degraded.is_empty()
    }
}

fn with_axis(err: AstroError, axis: Axis) -> AstroError {
    match err {
        AstroError::DataUnavailable { body, message, .. } => AstroError::DataUnavailable {
            body,
            axis: axis.name().to_string(),
            message,
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::source::{BundledSeries, SeriesDirectory};
    use std::fs;

    #[test]
    fn bundled_store_is_complete() {
        let store = SeriesStore::load(&BundledSeries);
        assert!(store.is_complete());
        for body in Body::SERIES_BODIES {
            for axis in Axis::ALL {
                assert!(!store.model(body, axis).unwrap().is_empty(), "{body} {axis}");
            }
        }
    }

    #[test]
    fn load_series_extracts_one_axis() {
        let model = load_series(&BundledSeries, Body::Earth, Axis::Z).unwrap();
        assert!(model.term_count() > 0);
    }

    #[test]
    fn missing_body_degrades_to_zero() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("earth.txt"),
            include_str!("../../data/series/earth.txt"),
        )
        .unwrap();
        let store = SeriesStore::load(&SeriesDirectory::new(dir.path()));

        assert!(store.model(Body::Earth, Axis::X).map_or(false, |m| !m.is_empty()));
        assert!(store.degraded().contains(&(Body::Mars, Axis::Y)));
        assert_eq!(store.evaluate(Body::Mars, Axis::Y, 2_451_545.0), 0.0);
    }

    #[test]
    fn missing_section_degrades_only_that_axis() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("venus.txt"), "[venus x]\npower 0\n0.7 0 0\n").unwrap();
        let store = SeriesStore::load(&SeriesDirectory::new(dir.path()));
        assert!((store.evaluate(Body::Venus, Axis::X, 2_451_545.0) - 0.7).abs() < 1e-12);
        assert!(store.degraded().contains(&(Body::Venus, Axis::Z)));
        assert!(!store.degraded().contains(&(Body::Venus, Axis::X)));

        let err = load_series(&SeriesDirectory::new(dir.path()), Body::Venus, Axis::Y).unwrap_err();
        assert!(matches!(err, AstroError::DataUnavailable { ref axis, .. } if axis == "y"));
    }

    #[test]
    fn parse_failure_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("mars.txt"), "[mars x]\npower 0\nnot a term\n").unwrap();
        let err = load_series(&SeriesDirectory::new(dir.path()), Body::Mars, Axis::X).unwrap_err();
        match err {
            AstroError::DataUnavailable { message, .. } => assert!(message.contains("line 3")),
            other => panic!("unexpected {other:?}"),
        }
    }
}

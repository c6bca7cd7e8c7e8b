//! Periodic-series coefficient tables: text format, loading and evaluation.

pub mod parser;
pub mod source;
pub mod store;
pub mod types;

pub use parser::{parse_series_table, SeriesParseError, SeriesTable};
pub use source::{BundledSeries, SeriesDirectory, SeriesSource};
pub use store::{load_series, SeriesStore};
pub use types::{evaluate, Axis, PeriodicTerm, SeriesModel, SeriesVariable};

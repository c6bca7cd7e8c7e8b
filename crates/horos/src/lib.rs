//! Horoscope and ephemeris computation.
//!
//! Positions come from an [`EphemerisBackend`]: the bundled periodic-series
//! tables by default, or the Swiss Ephemeris with the `swiss` feature. A
//! [`ChartBuilder`] turns a moment and place into a [`Chart`]; the aspect
//! engine compares charts.
//!
//! ```no_run
//! use std::sync::Arc;
//! use horos::{BundledSeries, ChartBuilder, GeoLocation, HouseSystem, SeriesEphemeris, SeriesStore};
//!
//! let store = Arc::new(SeriesStore::load(&BundledSeries));
//! let builder = ChartBuilder::new(Arc::new(SeriesEphemeris::new(store)));
//! let jd = horos::time::to_julian_day(1990, 6, 15, 14, 30, 0.0);
//! let chart = builder
//!     .build_chart(jd, GeoLocation::new(51.5, -0.12), HouseSystem::Placidus)
//!     .unwrap();
//! for aspect in builder.chart_aspects(&chart) {
//!     println!("{} {} {}", aspect.body_a, aspect.aspect_type, aspect.body_b);
//! }
//! ```

pub mod aspects;
pub mod body;
pub mod chart;
pub mod coords;
pub mod ephemeris;
pub mod error;
pub mod series;
pub mod time;
pub mod zodiac;

pub use aspects::{
    angular_separation, match_aspect, transit_aspects, Aspect, AspectCalculator, AspectMatch,
    AspectNature, AspectSettings, AspectType, TransitAspect, TransitSpeed,
};
pub use body::Body;
pub use chart::{
    Chart, ChartBuilder, ChartOptions, GeoLocation, HouseCusp, HouseSystem, Placement,
    ProgressionMethod, TransitSet,
};
pub use ephemeris::{BackendKind, BodyPosition, EphemerisBackend, Frame, RectangularPosition, SeriesEphemeris};
pub use error::AstroError;
pub use series::{BundledSeries, SeriesDirectory, SeriesParseError, SeriesSource, SeriesStore};
pub use zodiac::ZodiacSign;

#[cfg(feature = "swiss")]
pub use ephemeris::SwissEphemerisAdapter;

//! Body positions: the backend seam and its implementations.

pub mod backend;
pub mod luminaries;
pub mod series_backend;
pub mod types;

#[cfg(feature = "swiss")]
pub mod adapter;

pub use backend::{BackendKind, EphemerisBackend, SPEED_HALF_STEP};
pub use series_backend::SeriesEphemeris;
pub use types::{BodyPosition, Frame, RectangularPosition};

#[cfg(feature = "swiss")]
pub use adapter::SwissEphemerisAdapter;

//! Chart geometry and construction.

pub mod angles;
pub mod builder;
pub mod houses;
pub mod progression;
pub mod sidereal;
pub mod types;

pub use angles::{ascendant, midheaven, MAX_ASCENDANT_LATITUDE};
pub use builder::{ChartBuilder, ChartOptions, TransitSet};
pub use houses::{house_of, placidus_cusps, whole_sign_cusps, HouseCusp, HouseSystem};
pub use progression::{progressed_moment, solar_arc_directed, ProgressionMethod};
pub use sidereal::{greenwich_mean_sidereal_time, greenwich_sidereal_time, local_sidereal_time};
pub use types::{Chart, GeoLocation, Placement};

//! Angle normalization, Earth-orientation quantities and frame rotations.

pub mod angle;
pub mod nutation;
pub mod obliquity;
pub mod precession;
pub mod transforms;

pub use angle::{forward_arc, normalize_degrees, normalize_radians, signed_degrees};
pub use nutation::{nutation, Nutation};
pub use obliquity::{mean_obliquity, true_obliquity};
pub use precession::precession_in_longitude;
pub use transforms::{
    cartesian_to_spherical, ecliptic_to_equatorial, equatorial_to_ecliptic,
    equatorial_to_horizon, spherical_to_cartesian, EclipticCoords, EquatorialCoords,
    HorizontalCoords, SphericalCoords, MIN_RADIUS,
};

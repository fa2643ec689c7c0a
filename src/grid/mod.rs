//! Sampling grid generation over a [`BoundingRegion`](crate::BoundingRegion).

pub mod error;
pub mod generator;
pub mod mask;

pub use error::GridError;
pub use generator::{generate, km_to_deg_lat, km_to_deg_lon, KM_PER_DEGREE};
pub use mask::{AllPoints, CoastlineMask, PointFilter};

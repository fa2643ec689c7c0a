//! Sample the current wind over a stretch of ocean from the US National
//! Weather Service gridpoint API and return it as GeoJSON.
//!
//! The pipeline lays a grid over a [`BoundingRegion`], fetches a bounded number
//! of points concurrently, picks the forecast value valid right now from each
//! point's time series, normalizes speeds to knots and assembles a
//! [`FeatureCollection`]. Points that fail are dropped; only configuration
//! mistakes fail a run.

pub mod aggregate;
mod error;
pub mod grid;
pub mod provider;
mod types;
pub mod units;
pub mod valid_time;
mod wind_map;

pub use error::WindMapError;
pub use wind_map::*;

pub use aggregate::SamplingOptions;
pub use grid::{AllPoints, CoastlineMask, GridError, PointFilter};
pub use provider::{GridDataProvider, NwsClient, PointError, ProviderError};
pub use units::{knots_to_kmh, knots_to_mph, to_knots, SpeedUnit};
pub use valid_time::{IntervalError, ResolvedInterval, TimeSeriesEntry};

pub use types::coordinate::{BoundingRegion, Coordinate};
pub use types::feature_collection::{Feature, FeatureCollection, Geometry, WindProperties};
pub use types::wind::{WindFeature, WindSample};

//! Access to the upstream weather-grid API and per-point wind resolution.

pub mod error;
pub mod nws;
pub mod payload;
pub mod point_fetcher;
#[cfg(test)]
pub(crate) mod stub;

pub use error::{PointError, ProviderError};
pub use nws::NwsClient;
pub use payload::{GridpointProperties, QuantitativeSeries};
pub use point_fetcher::PointFetcher;

use crate::types::coordinate::Coordinate;
use async_trait::async_trait;

/// A source of gridded forecast data addressed in two steps: a coordinate is
/// first resolved to the locator of the grid cell's data, which is then
/// fetched.
///
/// Implementations must be usable from many concurrent fetches at once.
#[async_trait]
pub trait GridDataProvider: Send + Sync {
    /// Resolves a coordinate to the locator of its detailed time series.
    async fn grid_data_url(&self, coordinate: Coordinate) -> Result<String, ProviderError>;

    /// Fetches the time series behind a locator returned by
    /// [`grid_data_url`](Self::grid_data_url).
    async fn grid_data(&self, url: &str) -> Result<GridpointProperties, ProviderError>;
}

use crate::provider::error::{PointError, ProviderError};
use crate::provider::payload::QuantitativeSeries;
use crate::provider::GridDataProvider;
use crate::types::coordinate::Coordinate;
use crate::types::wind::WindSample;
use crate::units::to_knots;
use crate::valid_time::select_current;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Resolves the current wind at single grid points.
///
/// Every failure, including running past `timeout`, stays local to the point
/// being fetched and comes back as a [`PointError`]. Nothing is retried here.
pub struct PointFetcher<'a, P: ?Sized> {
    provider: &'a P,
    timeout: Duration,
}

impl<'a, P> PointFetcher<'a, P>
where
    P: GridDataProvider + ?Sized,
{
    pub fn new(provider: &'a P, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    /// Fetches the wind valid at `reference` for `coordinate`.
    ///
    /// `timeout` bounds both provider requests together.
    pub async fn fetch(
        &self,
        coordinate: Coordinate,
        reference: DateTime<Utc>,
    ) -> Result<WindSample, PointError> {
        tokio::time::timeout(self.timeout, self.fetch_unbounded(coordinate, reference))
            .await
            .map_err(|_| PointError::TimedOut {
                coordinate,
                after: self.timeout,
            })?
    }

    async fn fetch_unbounded(
        &self,
        coordinate: Coordinate,
        reference: DateTime<Utc>,
    ) -> Result<WindSample, PointError> {
        // The second request depends on the locator returned by the first.
        let url = self.provider.grid_data_url(coordinate).await?;
        let properties = self.provider.grid_data(&url).await?;

        let speed = properties
            .wind_speed
            .ok_or(ProviderError::MissingField {
                url,
                field: "properties.windSpeed",
            })?;

        Ok(resolve_sample(
            coordinate,
            &speed,
            properties.wind_direction.as_ref(),
            reference,
        ))
    }
}

/// Picks the values valid at `reference` from the speed and direction series
/// and normalizes the speed to knots.
pub fn resolve_sample(
    coordinate: Coordinate,
    speed: &QuantitativeSeries,
    direction: Option<&QuantitativeSeries>,
    reference: DateTime<Utc>,
) -> WindSample {
    let raw_speed = select_current(&speed.values, reference);
    WindSample {
        coordinate,
        speed_knots: to_knots(raw_speed, speed.uom.as_deref()),
        direction_degrees: direction.and_then(|d| select_current(&d.values, reference)),
    }
}

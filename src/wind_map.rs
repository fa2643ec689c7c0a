//! This module provides the main entry point of the crate, [`WindMap`]. It
//! samples current wind conditions over a region from a gridded forecast
//! provider and returns them as a GeoJSON feature collection.

use crate::aggregate::{self, SamplingOptions};
use crate::error::WindMapError;
use crate::grid::{CoastlineMask, PointFilter};
use crate::provider::{GridDataProvider, NwsClient};
use crate::types::coordinate::BoundingRegion;
use crate::types::feature_collection::FeatureCollection;
use bon::bon;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// The main client for sampling wind over a region.
///
/// By default it talks to the US National Weather Service through
/// [`NwsClient`]. Any other [`GridDataProvider`] can be plugged in with
/// [`WindMap::with_provider`].
///
/// All sampling parameters are passed per call; the client itself only holds
/// the provider, so one instance can serve many runs concurrently.
///
/// # Examples
///
/// ```no_run
/// # use ocean_wind::{WindMap, WindMapError};
/// # #[tokio::main]
/// # async fn main() -> Result<(), WindMapError> {
/// let wind_map = WindMap::new()?;
/// let collection = wind_map.ocean_wind().call().await?;
/// println!("{}", collection.to_json()?);
/// # Ok(())
/// # }
/// ```
pub struct WindMap<P = NwsClient> {
    provider: P,
}

impl WindMap<NwsClient> {
    /// Creates a `WindMap` backed by the NWS API with default client settings.
    ///
    /// Use [`NwsClient::builder`] together with [`WindMap::with_provider`]
    /// to set a custom user agent or request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`WindMapError::Provider`] if the HTTP client can't be built.
    pub fn new() -> Result<Self, WindMapError> {
        Ok(Self::with_provider(NwsClient::builder().build()?))
    }
}

#[bon]
impl<P: GridDataProvider> WindMap<P> {
    pub fn with_provider(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Samples the current wind over an arbitrary region.
    ///
    /// A grid is laid over `region`, points rejected by `filter` are removed,
    /// and the first `point_budget` remaining points are thinned to every
    /// `sample_stride`-th one. Those points are fetched concurrently and the
    /// ones with a current wind speed become features, in grid order.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.region(BoundingRegion)`: **Required.** The area to sample.
    /// * `.filter(F)`: **Required.** A [`PointFilter`] choosing which grid points to query.
    /// * `.spacing_km(f64)`: Optional. Grid spacing. Defaults to `10.0`.
    /// * `.point_budget(usize)`: Optional. Points considered before striding. Defaults to `100`.
    /// * `.sample_stride(usize)`: Optional. Keep every n-th budgeted point. Defaults to `5`.
    /// * `.concurrency(usize)`: Optional. Fetches in flight at once. Defaults to `8`.
    /// * `.point_timeout(Duration)`: Optional. Limit per point, both requests included. Defaults to 20 seconds.
    /// * `.deadline(Duration)`: Optional. Limit for the whole fan-out; unfinished points are left out. No limit by default.
    /// * `.reference(DateTime<Utc>)`: Optional. The instant whose wind is wanted. Defaults to now.
    ///
    /// # Returns
    ///
    /// A [`FeatureCollection`], possibly empty. Individual points failing is
    /// not an error.
    ///
    /// # Errors
    ///
    /// Returns [`WindMapError::Grid`] for an invalid region or spacing and
    /// [`WindMapError::InvalidSampling`] for a zero stride or concurrency.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use ocean_wind::{BoundingRegion, Coordinate, WindMap, WindMapError};
    /// # use std::time::Duration;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), WindMapError> {
    /// let wind_map = WindMap::new()?;
    /// let chesapeake_mouth = BoundingRegion::new(37.5, 36.5, -75.5, -76.5);
    ///
    /// let collection = wind_map
    ///     .sample_region()
    ///     .region(chesapeake_mouth)
    ///     .filter(|c: Coordinate| c.longitude > -76.2)
    ///     .spacing_km(20.0)
    ///     .sample_stride(1)
    ///     .deadline(Duration::from_secs(30))
    ///     .call()
    ///     .await?;
    ///
    /// for feature in &collection.features {
    ///     println!("{:?}", feature.properties);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn sample_region<F: PointFilter>(
        &self,
        region: BoundingRegion,
        filter: F,
        spacing_km: Option<f64>,
        point_budget: Option<usize>,
        sample_stride: Option<usize>,
        concurrency: Option<usize>,
        point_timeout: Option<Duration>,
        deadline: Option<Duration>,
        reference: Option<DateTime<Utc>>,
    ) -> Result<FeatureCollection, WindMapError> {
        let defaults = SamplingOptions::default();
        let options = SamplingOptions {
            spacing_km: spacing_km.unwrap_or(defaults.spacing_km),
            point_budget: point_budget.unwrap_or(defaults.point_budget),
            sample_stride: sample_stride.unwrap_or(defaults.sample_stride),
            concurrency: concurrency.unwrap_or(defaults.concurrency),
            point_timeout: point_timeout.unwrap_or(defaults.point_timeout),
            deadline,
        };
        let reference = reference.unwrap_or_else(Utc::now);

        aggregate::run(&self.provider, &region, &filter, &options, reference).await
    }

    /// Samples the current wind off the US East Coast.
    ///
    /// Shorthand for [`sample_region`](Self::sample_region) with
    /// [`BoundingRegion::EAST_COAST`] and the default [`CoastlineMask`]. It
    /// takes the same optional arguments.
    #[builder]
    pub async fn ocean_wind(
        &self,
        spacing_km: Option<f64>,
        point_budget: Option<usize>,
        sample_stride: Option<usize>,
        concurrency: Option<usize>,
        point_timeout: Option<Duration>,
        deadline: Option<Duration>,
        reference: Option<DateTime<Utc>>,
    ) -> Result<FeatureCollection, WindMapError> {
        self.sample_region()
            .region(BoundingRegion::EAST_COAST)
            .filter(CoastlineMask::default())
            .maybe_spacing_km(spacing_km)
            .maybe_point_budget(point_budget)
            .maybe_sample_stride(sample_stride)
            .maybe_concurrency(concurrency)
            .maybe_point_timeout(point_timeout)
            .maybe_deadline(deadline)
            .maybe_reference(reference)
            .call()
            .await
    }
}

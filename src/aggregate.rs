//! Concurrent fan-out of point fetches over a sampling grid, and assembly of
//! the surviving samples into a [`FeatureCollection`].

use crate::error::WindMapError;
use crate::grid::{generate, PointFilter};
use crate::provider::{GridDataProvider, PointError, PointFetcher};
use crate::types::coordinate::{BoundingRegion, Coordinate};
use crate::types::feature_collection::FeatureCollection;
use crate::types::wind::{WindFeature, WindSample};
use chrono::{DateTime, Utc};
use futures_util::{stream, StreamExt};
use log::{debug, info, warn};
use std::time::Duration;

pub const DEFAULT_SPACING_KM: f64 = 10.0;
pub const DEFAULT_POINT_BUDGET: usize = 100;
pub const DEFAULT_SAMPLE_STRIDE: usize = 5;
pub const DEFAULT_CONCURRENCY: usize = 8;
pub const DEFAULT_POINT_TIMEOUT: Duration = Duration::from_secs(20);

/// How a region is sampled and how hard the provider is hit while doing so.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingOptions {
    /// Distance between neighbouring grid points, in kilometers.
    pub spacing_km: f64,
    /// Maximum number of grid points considered, in generation order.
    pub point_budget: usize,
    /// Keep every `sample_stride`-th point of the budgeted ones. At least 1.
    pub sample_stride: usize,
    /// Maximum number of points fetched at the same time. At least 1.
    pub concurrency: usize,
    /// Upper bound for resolving a single point (both requests).
    pub point_timeout: Duration,
    /// Optional bound for the whole fan-out. Points still in flight when it
    /// expires are left out of the result.
    pub deadline: Option<Duration>,
}

impl Default for SamplingOptions {
    fn default() -> Self {
        Self {
            spacing_km: DEFAULT_SPACING_KM,
            point_budget: DEFAULT_POINT_BUDGET,
            sample_stride: DEFAULT_SAMPLE_STRIDE,
            concurrency: DEFAULT_CONCURRENCY,
            point_timeout: DEFAULT_POINT_TIMEOUT,
            deadline: None,
        }
    }
}

impl SamplingOptions {
    fn validate(&self) -> Result<(), WindMapError> {
        if self.sample_stride == 0 {
            return Err(WindMapError::InvalidSampling(
                "sample stride must be at least 1".to_string(),
            ));
        }
        if self.concurrency == 0 {
            return Err(WindMapError::InvalidSampling(
                "concurrency must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// The first `budget` points, thinned to every `stride`-th one.
///
/// # Examples
///
/// ```
/// use ocean_wind::aggregate::select_points;
/// use ocean_wind::Coordinate;
///
/// let grid: Vec<_> = (0..300).map(|i| Coordinate::new(30.0, -80.0 + i as f64 * 0.01)).collect();
/// assert_eq!(select_points(&grid, 100, 5).len(), 20);
/// ```
pub fn select_points(grid: &[Coordinate], budget: usize, stride: usize) -> Vec<Coordinate> {
    grid.iter()
        .take(budget)
        .step_by(stride.max(1))
        .copied()
        .collect()
}

type Slot = Option<Result<WindSample, PointError>>;

/// Fetches every point with at most `concurrency` requests in flight.
///
/// The returned slots line up with `points`. A slot is `None` only when the
/// deadline expired before that point finished.
async fn fetch_all<P>(
    fetcher: &PointFetcher<'_, P>,
    points: &[Coordinate],
    reference: DateTime<Utc>,
    concurrency: usize,
    deadline: Option<Duration>,
) -> Vec<Slot>
where
    P: GridDataProvider + ?Sized,
{
    let mut slots: Vec<Slot> = (0..points.len()).map(|_| None).collect();

    let mut results = stream::iter(points.iter().copied().enumerate())
        .map(move |(index, coordinate)| async move {
            (index, fetcher.fetch(coordinate, reference).await)
        })
        .buffer_unordered(concurrency);

    let drain = async {
        while let Some((index, result)) = results.next().await {
            slots[index] = Some(result);
        }
    };

    match deadline {
        Some(limit) => {
            if tokio::time::timeout(limit, drain).await.is_err() {
                warn!(
                    "Deadline of {:?} expired, continuing with the points that finished",
                    limit
                );
            }
        }
        None => drain.await,
    }

    slots
}

/// Samples the wind over `region` and assembles the result.
///
/// Points that fail, time out, miss the deadline or have no current speed
/// are dropped; a run where every point fails returns an empty collection.
///
/// # Errors
///
/// Only configuration problems fail the run: an invalid region or spacing
/// ([`WindMapError::Grid`]) or a zero stride or concurrency
/// ([`WindMapError::InvalidSampling`]).
pub async fn run<P, F>(
    provider: &P,
    region: &BoundingRegion,
    filter: &F,
    options: &SamplingOptions,
    reference: DateTime<Utc>,
) -> Result<FeatureCollection, WindMapError>
where
    P: GridDataProvider + ?Sized,
    F: PointFilter + ?Sized,
{
    options.validate()?;

    let grid = generate(region, options.spacing_km, filter)?;
    let points = select_points(&grid, options.point_budget, options.sample_stride);
    info!(
        "Fetching wind for {} of {} grid points ({} at a time)",
        points.len(),
        grid.len(),
        options.concurrency
    );

    let fetcher = PointFetcher::new(provider, options.point_timeout);
    let slots = fetch_all(
        &fetcher,
        &points,
        reference,
        options.concurrency,
        options.deadline,
    )
    .await;

    let mut failed = 0usize;
    let mut unfinished = 0usize;
    let mut features: Vec<WindFeature> = Vec::with_capacity(points.len());
    for (coordinate, slot) in points.iter().zip(slots) {
        match slot {
            Some(Ok(sample)) => match sample.into_feature() {
                Some(feature) if feature.speed_knots.is_finite() => features.push(feature),
                Some(feature) => {
                    warn!(
                        "Dropping {}: non-finite speed {}",
                        coordinate, feature.speed_knots
                    );
                }
                None => debug!("No current wind speed at {}", coordinate),
            },
            Some(Err(e)) => {
                failed += 1;
                debug!("Dropping {}: {}", coordinate, e);
            }
            None => unfinished += 1,
        }
    }

    info!(
        "Wind sampling done: {} dispatched, {} failed, {} unfinished, {} emitted",
        points.len(),
        failed,
        unfinished,
        features.len()
    );
    Ok(features.into_iter().collect())
}

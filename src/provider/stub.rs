//! In-memory provider used by the unit tests.

use crate::provider::error::ProviderError;
use crate::provider::payload::{GridpointProperties, QuantitativeSeries};
use crate::provider::GridDataProvider;
use crate::types::coordinate::Coordinate;
use crate::valid_time::TimeSeriesEntry;
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

const URL_PREFIX: &str = "stub://gridpoints/";
const VALID_TIME: &str = "2024-01-01T00:00:00+00:00/PT6H";

/// An instant inside [`VALID_TIME`].
pub fn reference() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 3, 0, 0).unwrap()
}

#[derive(Debug, Clone)]
pub enum StubPoint {
    Wind {
        speed: Option<f64>,
        uom: Option<&'static str>,
        direction: Option<f64>,
    },
    /// `/points` answers without a grid data link.
    Unresolvable,
    /// The gridpoint has no `windSpeed` layer.
    NoWindLayer,
    /// Never answers.
    Hang,
}

impl StubPoint {
    /// Speed in m/s and direction in degrees, valid at [`reference`].
    pub fn wind(speed_ms: f64, direction: f64) -> Self {
        StubPoint::Wind {
            speed: Some(speed_ms),
            uom: Some("wmoUnit:m_s-1"),
            direction: Some(direction),
        }
    }
}

#[derive(Default)]
pub struct StubProvider {
    points: HashMap<String, StubPoint>,
    fallback: Option<StubPoint>,
    delays: HashMap<String, Duration>,
    latency: Duration,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl StubProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_point(mut self, coordinate: Coordinate, point: StubPoint) -> Self {
        self.points.insert(coordinate.to_string(), point);
        self
    }

    /// Behaviour for coordinates without an explicit entry.
    pub fn with_fallback(mut self, point: StubPoint) -> Self {
        self.fallback = Some(point);
        self
    }

    /// Extra delay before `coordinate` answers, replacing the common latency.
    pub fn with_delay(mut self, coordinate: Coordinate, delay: Duration) -> Self {
        self.delays.insert(coordinate.to_string(), delay);
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Number of coordinates that were looked up.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    fn lookup(&self, key: &str) -> Option<StubPoint> {
        self.points.get(key).or(self.fallback.as_ref()).cloned()
    }

    fn missing(url: String, field: &'static str) -> ProviderError {
        ProviderError::MissingField { url, field }
    }
}

/// Holds one slot of the in-flight count, released even when the lookup is
/// cancelled mid-sleep.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize, peak: &AtomicUsize) -> Self {
        let current = counter.fetch_add(1, Ordering::SeqCst) + 1;
        peak.fetch_max(current, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

fn series(uom: Option<&str>, value: Option<f64>) -> QuantitativeSeries {
    QuantitativeSeries::new(uom, vec![TimeSeriesEntry::new(VALID_TIME, value)])
}

#[async_trait]
impl GridDataProvider for StubProvider {
    async fn grid_data_url(&self, coordinate: Coordinate) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let guard = InFlight::enter(&self.in_flight, &self.max_in_flight);

        let key = coordinate.to_string();
        let point = self.lookup(&key);
        let delay = match point {
            Some(StubPoint::Hang) => Duration::from_secs(3600),
            _ => self.delays.get(&key).copied().unwrap_or(self.latency),
        };
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        drop(guard);

        match point {
            Some(StubPoint::Unresolvable) | None => {
                Err(Self::missing(key, "properties.forecastGridData"))
            }
            Some(_) => Ok(format!("{URL_PREFIX}{key}")),
        }
    }

    async fn grid_data(&self, url: &str) -> Result<GridpointProperties, ProviderError> {
        let key = url.trim_start_matches(URL_PREFIX);
        match self.lookup(key) {
            Some(StubPoint::Wind {
                speed,
                uom,
                direction,
            }) => Ok(GridpointProperties {
                wind_speed: Some(series(uom, speed)),
                wind_direction: direction
                    .map(|d| series(Some("wmoUnit:degree_(angle)"), Some(d))),
            }),
            Some(StubPoint::NoWindLayer) => Ok(GridpointProperties::default()),
            _ => Err(Self::missing(url.to_string(), "properties")),
        }
    }
}

use crate::valid_time::interval::parse_interval;
use chrono::{DateTime, Utc};
use log::trace;
use serde::{Deserialize, Serialize};

/// One value of a provider time series together with the interval it applies to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesEntry {
    /// Encoded as `<instant>/<duration>`, see [`parse_interval`].
    #[serde(default)]
    pub valid_time: String,
    #[serde(default)]
    pub value: Option<f64>,
}

impl TimeSeriesEntry {
    pub fn new(valid_time: impl Into<String>, value: Option<f64>) -> Self {
        Self {
            valid_time: valid_time.into(),
            value,
        }
    }
}

/// Returns the value that applies at `reference`.
///
/// Entries are not assumed to be sorted. The first entry whose interval
/// contains `reference` wins, even if its value is null. Entries with an
/// unparseable or open-ended valid time are skipped.
///
/// # Examples
///
/// ```
/// use ocean_wind::valid_time::{select_current, TimeSeriesEntry};
/// use chrono::{TimeZone, Utc};
///
/// let series = vec![
///     TimeSeriesEntry::new("2024-01-01T06:00:00Z/PT6H", Some(12.0)),
///     TimeSeriesEntry::new("2024-01-01T00:00:00Z/PT6H", Some(8.0)),
/// ];
/// let at = Utc.with_ymd_and_hms(2024, 1, 1, 3, 0, 0).unwrap();
/// assert_eq!(select_current(&series, at), Some(8.0));
/// ```
pub fn select_current(series: &[TimeSeriesEntry], reference: DateTime<Utc>) -> Option<f64> {
    series
        .iter()
        .find(|entry| match parse_interval(&entry.valid_time) {
            Ok(interval) => interval.contains(reference),
            Err(e) => {
                trace!("Skipping series entry: {}", e);
                false
            }
        })
        .and_then(|entry| entry.value)
}

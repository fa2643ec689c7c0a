//! Response shapes of the NWS API, limited to the fields the pipeline reads.

use crate::valid_time::TimeSeriesEntry;
use serde::{Deserialize, Serialize};

/// `GET /points/{lat},{lon}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsResponse {
    pub properties: Option<PointProperties>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointProperties {
    /// Link to the raw gridpoint forecast, e.g.
    /// `https://api.weather.gov/gridpoints/MHX/99,62`.
    pub forecast_grid_data: Option<String>,
    pub grid_id: Option<String>,
    pub grid_x: Option<i64>,
    pub grid_y: Option<i64>,
}

/// `GET /gridpoints/{wfo}/{x},{y}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridpointResponse {
    pub properties: Option<GridpointProperties>,
}

/// The gridpoint layers relevant to wind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridpointProperties {
    pub wind_speed: Option<QuantitativeSeries>,
    pub wind_direction: Option<QuantitativeSeries>,
}

/// A time series of values sharing one unit of measure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuantitativeSeries {
    /// Unit code such as `wmoUnit:km_h-1`.
    #[serde(default)]
    pub uom: Option<String>,
    #[serde(default)]
    pub values: Vec<TimeSeriesEntry>,
}

impl QuantitativeSeries {
    pub fn new(uom: Option<&str>, values: Vec<TimeSeriesEntry>) -> Self {
        Self {
            uom: uom.map(str::to_string),
            values,
        }
    }
}

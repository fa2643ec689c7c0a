//! [`GridDataProvider`] backed by the US National Weather Service API.
//!
//! Resolving wind for a coordinate takes two requests:
//!
//! - `/points/{lat},{lon}` returns `.properties.forecastGridData`, a link to
//!   the raw gridpoint forecast of the forecast office covering the point;
//! - that link returns `.properties.windSpeed` and `.properties.windDirection`,
//!   each a `{uom, values: [{validTime, value}]}` series.
//!
//! See <https://www.weather.gov/documentation/services-web-api>.

use crate::provider::error::ProviderError;
use crate::provider::payload::{GridpointProperties, GridpointResponse, PointsResponse};
use crate::provider::GridDataProvider;
use crate::types::coordinate::Coordinate;
use async_trait::async_trait;
use bon::bon;
use log::{debug, warn};
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.weather.gov";
pub const DEFAULT_USER_AGENT: &str = "EastCoastWindMap/1.0";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const GEO_JSON: &str = "application/geo+json";

/// NWS API client. Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct NwsClient {
    client: Client,
    base_url: String,
}

#[bon]
impl NwsClient {
    /// Creates a client for the NWS API.
    ///
    /// The NWS asks every caller to identify itself with a `User-Agent`,
    /// ideally including contact details.
    ///
    /// # Arguments
    ///
    /// * `.base_url(String)`: Optional. API root, defaults to [`DEFAULT_BASE_URL`].
    /// * `.user_agent(String)`: Optional. Defaults to [`DEFAULT_USER_AGENT`].
    /// * `.request_timeout(Duration)`: Optional. Applies to each HTTP request
    ///   separately. Defaults to 10 seconds.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::ClientBuild`] if the HTTP client can't be
    /// created, for instance when the user agent is not a valid header value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ocean_wind::provider::NwsClient;
    /// use std::time::Duration;
    ///
    /// let client = NwsClient::builder()
    ///     .user_agent("MyWindMap/0.1 (ops@example.com)".to_string())
    ///     .request_timeout(Duration::from_secs(5))
    ///     .build()?;
    /// # Ok::<(), ocean_wind::provider::ProviderError>(())
    /// ```
    #[builder]
    pub fn new(
        base_url: Option<String>,
        user_agent: Option<String>,
        request_timeout: Option<Duration>,
    ) -> Result<Self, ProviderError> {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let user_agent = user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(request_timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT))
            .build()
            .map_err(ProviderError::ClientBuild)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The `/points` URL for a coordinate, rounded to four decimals as the
    /// API expects.
    pub fn points_url(&self, coordinate: Coordinate) -> String {
        format!(
            "{}/points/{:.4},{:.4}",
            self.base_url, coordinate.latitude, coordinate.longitude
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ProviderError> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .header(ACCEPT, GEO_JSON)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkRequest(url.to_string(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {}", url, e);
                return Err(match e.status() {
                    Some(status) => ProviderError::HttpStatus {
                        url: url.to_string(),
                        status,
                        source: e,
                    },
                    None => ProviderError::NetworkRequest(url.to_string(), e),
                });
            }
        };

        response
            .json::<T>()
            .await
            .map_err(|e| ProviderError::JsonDecode(url.to_string(), e))
    }
}

#[async_trait]
impl GridDataProvider for NwsClient {
    async fn grid_data_url(&self, coordinate: Coordinate) -> Result<String, ProviderError> {
        let url = self.points_url(coordinate);
        let points: PointsResponse = self.get_json(&url).await?;
        let properties = points.properties.ok_or_else(|| ProviderError::MissingField {
            url: url.clone(),
            field: "properties",
        })?;
        if let (Some(office), Some(x), Some(y)) =
            (&properties.grid_id, properties.grid_x, properties.grid_y)
        {
            debug!("{} lies in grid cell {}/{},{}", coordinate, office, x, y);
        }
        properties
            .forecast_grid_data
            .ok_or(ProviderError::MissingField {
                url,
                field: "properties.forecastGridData",
            })
    }

    async fn grid_data(&self, url: &str) -> Result<GridpointProperties, ProviderError> {
        let gridpoint: GridpointResponse = self.get_json(url).await?;
        gridpoint.properties.ok_or_else(|| ProviderError::MissingField {
            url: url.to_string(),
            field: "properties",
        })
    }
}

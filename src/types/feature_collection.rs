//! GeoJSON output types for the aggregated wind field.
//!
//! The shape is fixed: a `FeatureCollection` of `Point` features whose
//! properties carry `speed_kt`, `dir_from_deg`, `speed_mph` and `speed_kmh`.

use crate::types::wind::WindFeature;
use serde::{Deserialize, Serialize};

/// A GeoJSON FeatureCollection of wind readings.
///
/// Features keep the order in which their grid points were dispatched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureCollection {
    /// Always `"FeatureCollection"`.
    #[serde(rename = "type")]
    pub type_: String,

    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new() -> Self {
        Self {
            type_: "FeatureCollection".to_string(),
            features: Vec::new(),
        }
    }

    pub fn with_features(mut self, features: impl IntoIterator<Item = Feature>) -> Self {
        self.features.extend(features);
        self
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Serializes the collection to a GeoJSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Default for FeatureCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<WindFeature> for FeatureCollection {
    fn from_iter<I: IntoIterator<Item = WindFeature>>(iter: I) -> Self {
        Self::new().with_features(iter.into_iter().map(Feature::from))
    }
}

/// A single GeoJSON Feature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Feature {
    /// Always `"Feature"`.
    #[serde(rename = "type")]
    pub type_: String,

    pub geometry: Geometry,

    pub properties: WindProperties,
}

/// GeoJSON geometry. Only points are produced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum Geometry {
    Point {
        /// `[longitude, latitude]`.
        coordinates: [f64; 2],
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindProperties {
    pub speed_kt: f64,
    pub dir_from_deg: Option<f64>,
    pub speed_mph: f64,
    pub speed_kmh: f64,
}

impl From<WindFeature> for Feature {
    fn from(wind: WindFeature) -> Self {
        Self {
            type_: "Feature".to_string(),
            geometry: Geometry::Point {
                coordinates: wind.coordinate.to_position(),
            },
            properties: WindProperties {
                speed_kt: wind.speed_knots,
                dir_from_deg: wind.direction_degrees,
                speed_mph: wind.speed_mph,
                speed_kmh: wind.speed_kmh,
            },
        }
    }
}

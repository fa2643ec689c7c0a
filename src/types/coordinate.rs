//! Geographic value types used throughout the sampling pipeline: a single
//! [`Coordinate`] and the [`BoundingRegion`] that a sampling grid covers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the earth's surface in decimal degrees.
///
/// Latitude is positive north, longitude is positive east.
///
/// # Examples
///
/// ```
/// use ocean_wind::Coordinate;
///
/// let hatteras = Coordinate::new(35.0, -75.0);
/// assert_eq!(hatteras.latitude, 35.0);
/// assert_eq!(hatteras.longitude, -75.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in decimal degrees, within `[-90, 90]`.
    pub latitude: f64,
    /// Longitude in decimal degrees, within `[-180, 180]`.
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// GeoJSON position order: `[longitude, latitude]`.
    pub fn to_position(self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4},{:.4}", self.latitude, self.longitude)
    }
}

/// A latitude/longitude box, in degrees.
///
/// A usable region has `north > south` and `east > west`; regions are checked
/// when a grid is generated over them (see [`crate::grid::generate`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingRegion {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl BoundingRegion {
    /// The US East Coast offshore area, from Florida up to Maine.
    pub const EAST_COAST: BoundingRegion = BoundingRegion {
        north: 45.0,
        south: 24.0,
        east: -65.0,
        west: -82.0,
    };

    pub fn new(north: f64, south: f64, east: f64, west: f64) -> Self {
        Self {
            north,
            south,
            east,
            west,
        }
    }

    /// Whether `coordinate` lies inside the region, edges included.
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        (self.south..=self.north).contains(&coordinate.latitude)
            && (self.west..=self.east).contains(&coordinate.longitude)
    }
}

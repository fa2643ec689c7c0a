//! Inclusion predicates deciding which grid points are worth querying.

use crate::types::coordinate::Coordinate;

/// Decides whether a generated grid point is kept.
///
/// Implemented for [`AllPoints`], [`CoastlineMask`] and any
/// `Fn(Coordinate) -> bool`, so callers can plug in their own geometry.
///
/// # Examples
///
/// ```
/// use ocean_wind::{Coordinate, PointFilter};
///
/// let south_of_40 = |c: Coordinate| c.latitude < 40.0;
/// assert!(south_of_40.includes(Coordinate::new(35.0, -75.0)));
/// assert!(!south_of_40.includes(Coordinate::new(42.0, -70.0)));
/// ```
pub trait PointFilter {
    fn includes(&self, coordinate: Coordinate) -> bool;
}

impl<F> PointFilter for F
where
    F: Fn(Coordinate) -> bool,
{
    fn includes(&self, coordinate: Coordinate) -> bool {
        self(coordinate)
    }
}

/// Keeps every point in the region.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllPoints;

impl PointFilter for AllPoints {
    fn includes(&self, _coordinate: Coordinate) -> bool {
        true
    }
}

/// A coarse ocean heuristic built from longitude/latitude thresholds.
///
/// A point is kept when it lies west of `coast_longitude`, or when it is
/// north of `northern_latitude` and west of `northern_coast_longitude`.
/// The thresholds are plain numbers; no coastline geometry is involved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoastlineMask {
    pub coast_longitude: f64,
    pub northern_latitude: f64,
    pub northern_coast_longitude: f64,
}

impl Default for CoastlineMask {
    /// Thresholds tuned for [`BoundingRegion::EAST_COAST`](crate::BoundingRegion::EAST_COAST).
    fn default() -> Self {
        Self {
            coast_longitude: -75.0,
            northern_latitude: 35.0,
            northern_coast_longitude: -70.0,
        }
    }
}

impl PointFilter for CoastlineMask {
    fn includes(&self, coordinate: Coordinate) -> bool {
        coordinate.longitude < self.coast_longitude
            || (coordinate.latitude > self.northern_latitude
                && coordinate.longitude < self.northern_coast_longitude)
    }
}

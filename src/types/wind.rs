use crate::types::coordinate::Coordinate;
use crate::units::{knots_to_kmh, knots_to_mph};

/// The wind conditions resolved for one grid point.
///
/// `speed_knots` is `None` when the provider had no value valid at the
/// reference instant; such samples never make it into the output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindSample {
    pub coordinate: Coordinate,
    pub speed_knots: Option<f64>,
    pub direction_degrees: Option<f64>,
}

/// A fully resolved wind reading, ready to be emitted as a GeoJSON feature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindFeature {
    pub coordinate: Coordinate,
    pub speed_knots: f64,
    pub speed_mph: f64,
    pub speed_kmh: f64,
    /// Direction the wind blows *from*, in degrees. May be unresolved even
    /// when the speed is known.
    pub direction_degrees: Option<f64>,
}

impl WindFeature {
    pub fn new(coordinate: Coordinate, speed_knots: f64, direction_degrees: Option<f64>) -> Self {
        Self {
            coordinate,
            speed_knots,
            speed_mph: knots_to_mph(speed_knots),
            speed_kmh: knots_to_kmh(speed_knots),
            direction_degrees,
        }
    }
}

impl WindSample {
    /// Converts the sample into a feature, or `None` if no speed was resolved.
    pub fn into_feature(self) -> Option<WindFeature> {
        self.speed_knots
            .map(|speed| WindFeature::new(self.coordinate, speed, self.direction_degrees))
    }
}

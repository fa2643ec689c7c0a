use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    #[error("Invalid region: north ({north}) must be greater than south ({south})")]
    InvertedLatitudes { north: f64, south: f64 },

    #[error("Invalid region: east ({east}) must be greater than west ({west})")]
    InvertedLongitudes { east: f64, west: f64 },

    #[error("Invalid region: latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("Invalid region: longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),

    #[error("Grid spacing must be a positive number of kilometers, got {0}")]
    InvalidSpacing(f64),

    #[error("Grid spacing of {spacing_km} km needs more than {limit} steps along one axis")]
    SpacingTooSmall { spacing_km: f64, limit: u32 },

    // Longitude step diverges as cos(lat) approaches zero.
    #[error("Cannot step longitude at latitude {0}: too close to a pole")]
    PolarLatitude(f64),
}

//! Valid-time intervals as used by NWS gridpoint time series, and selection
//! of the value that applies at a given instant.

pub mod error;
pub mod interval;
pub mod series;

pub use error::IntervalError;
pub use interval::{parse_interval, ResolvedInterval};
pub use series::{select_current, TimeSeriesEntry};

//! Wind speed unit handling. Knots are the canonical unit inside the crate;
//! everything the provider reports is normalized to knots on the way in.

use std::fmt;

const KMH_TO_KNOTS: f64 = 0.539957;
const MS_TO_KNOTS: f64 = 1.94384;
const KNOTS_TO_MPH: f64 = 1.15078;
const KNOTS_TO_KMH: f64 = 1.852;

/// A wind speed unit recognized in provider unit codes.
///
/// The NWS reports units under two naming schemes: WMO codes such as
/// `wmoUnit:km_h-1` and the older `unit:km_h` style. Both map onto the same
/// variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpeedUnit {
    KilometersPerHour,
    MetersPerSecond,
    Knots,
}

impl SpeedUnit {
    /// Looks up a provider unit code. Returns `None` for codes we don't know.
    ///
    /// # Examples
    ///
    /// ```
    /// use ocean_wind::SpeedUnit;
    ///
    /// assert_eq!(SpeedUnit::from_code("wmoUnit:m_s-1"), Some(SpeedUnit::MetersPerSecond));
    /// assert_eq!(SpeedUnit::from_code("unit:kt"), Some(SpeedUnit::Knots));
    /// assert_eq!(SpeedUnit::from_code("furlongs_per_fortnight"), None);
    /// ```
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "wmoUnit:km_h-1" | "unit:km_h" => Some(SpeedUnit::KilometersPerHour),
            "wmoUnit:m_s-1" | "unit:m_s" => Some(SpeedUnit::MetersPerSecond),
            "wmoUnit:knot" | "unit:kt" => Some(SpeedUnit::Knots),
            _ => None,
        }
    }

    pub fn knots_multiplier(&self) -> f64 {
        match self {
            SpeedUnit::KilometersPerHour => KMH_TO_KNOTS,
            SpeedUnit::MetersPerSecond => MS_TO_KNOTS,
            SpeedUnit::Knots => 1.0,
        }
    }

    fn symbol(&self) -> &'static str {
        match self {
            SpeedUnit::KilometersPerHour => "km/h",
            SpeedUnit::MetersPerSecond => "m/s",
            SpeedUnit::Knots => "kt",
        }
    }
}

impl fmt::Display for SpeedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Converts a provider speed value to knots using its unit code.
///
/// A missing or unrecognized unit code is treated as knots already, so the
/// value passes through unchanged.
///
/// # Examples
///
/// ```
/// use ocean_wind::to_knots;
///
/// let kt = to_knots(Some(10.0), Some("wmoUnit:m_s-1")).unwrap();
/// assert!((kt - 19.4384).abs() < 1e-9);
/// assert_eq!(to_knots(Some(10.0), Some("unknown-code")), Some(10.0));
/// assert_eq!(to_knots(None, Some("wmoUnit:knot")), None);
/// ```
pub fn to_knots(value: Option<f64>, unit_code: Option<&str>) -> Option<f64> {
    let value = value?;
    match unit_code.and_then(SpeedUnit::from_code) {
        Some(unit) => Some(value * unit.knots_multiplier()),
        None => Some(value),
    }
}

pub fn knots_to_mph(knots: f64) -> f64 {
    knots * KNOTS_TO_MPH
}

pub fn knots_to_kmh(knots: f64) -> f64 {
    knots * KNOTS_TO_KMH
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_known_codes_both_schemes() {
        for (code, expected) in [
            ("wmoUnit:km_h-1", 5.39957),
            ("unit:km_h", 5.39957),
            ("wmoUnit:m_s-1", 19.4384),
            ("unit:m_s", 19.4384),
            ("wmoUnit:knot", 10.0),
            ("unit:kt", 10.0),
        ] {
            let knots = to_knots(Some(10.0), Some(code));
            assert!(knots.is_some(), "no conversion for {code}");
            assert_close(knots.unwrap_or_default(), expected);
        }
    }

    #[test]
    fn test_unknown_or_missing_code_passes_through() {
        assert_eq!(to_knots(Some(10.0), Some("unknown-code")), Some(10.0));
        assert_eq!(to_knots(Some(7.5), None), Some(7.5));
    }

    #[test]
    fn test_null_value_stays_null() {
        assert_eq!(to_knots(None, Some("wmoUnit:m_s-1")), None);
        assert_eq!(to_knots(None, None), None);
    }

    #[test]
    fn test_mph_round_trip() {
        for knots in [0.0, 1.0, 12.34, 55.5, 130.0] {
            assert_close(knots_to_mph(knots) / KNOTS_TO_MPH, knots);
        }
    }

    #[test]
    fn test_derived_units() {
        assert_close(knots_to_mph(10.0), 11.5078);
        assert_close(knots_to_kmh(10.0), 18.52);
        assert_eq!(SpeedUnit::MetersPerSecond.to_string(), "m/s");
    }
}

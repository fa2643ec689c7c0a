use crate::valid_time::error::IntervalError;
use chrono::{DateTime, TimeDelta, Utc};
use regex::Regex;
use std::sync::LazyLock;

// ISO-8601 duration limited to days and a time part, e.g. `P1DT6H`, `PT30M`.
static DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^P(?:(?P<days>\d+)D)?(?:T(?:(?P<hours>\d+)H)?(?:(?P<minutes>\d+)M)?(?:(?P<seconds>\d+)S)?)?$")
        .expect("duration pattern is valid")
});

/// A half-open time range `[start, end)` decoded from a provider valid time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl ResolvedInterval {
    /// Start-inclusive, end-exclusive.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}

/// Decodes a duration such as `PT6H` or `P1DT12H30M`. Returns `None` when the
/// text doesn't match the grammar or the total doesn't fit in a `TimeDelta`.
fn parse_duration(text: &str) -> Option<TimeDelta> {
    let captures = DURATION.captures(text)?;
    let part = |name: &str| -> Option<i64> {
        match captures.name(name) {
            Some(m) => m.as_str().parse().ok(),
            None => Some(0),
        }
    };

    TimeDelta::try_days(part("days")?)?
        .checked_add(&TimeDelta::try_hours(part("hours")?)?)?
        .checked_add(&TimeDelta::try_minutes(part("minutes")?)?)?
        .checked_add(&TimeDelta::try_seconds(part("seconds")?)?)
}

/// Parses an NWS `validTime` such as `2024-01-01T00:00:00+00:00/PT6H`.
///
/// The text before the first `/` is an RFC 3339 instant (`Z` is accepted as
/// the UTC offset); the text after it is an ISO-8601 duration made of
/// optional days and optional hours/minutes/seconds.
///
/// # Errors
///
/// * [`IntervalError::MissingSeparator`] if there is no `/`.
/// * [`IntervalError::InvalidStart`] if the instant doesn't parse.
/// * [`IntervalError::OpenEnded`] if the instant parses but the duration
///   doesn't; the interval has no usable end.
/// * [`IntervalError::ZeroDuration`] if the duration adds up to nothing.
///
/// # Examples
///
/// ```
/// use ocean_wind::valid_time::parse_interval;
/// use chrono::{TimeZone, Utc};
///
/// let interval = parse_interval("2024-01-01T00:00:00Z/PT6H")?;
/// assert_eq!(interval.start, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
/// assert_eq!(interval.end, Utc.with_ymd_and_hms(2024, 1, 1, 6, 0, 0).unwrap());
/// # Ok::<(), ocean_wind::valid_time::IntervalError>(())
/// ```
pub fn parse_interval(encoded: &str) -> Result<ResolvedInterval, IntervalError> {
    let (start_text, duration_text) = encoded
        .split_once('/')
        .ok_or_else(|| IntervalError::MissingSeparator(encoded.to_string()))?;

    let start = DateTime::parse_from_rfc3339(start_text)
        .map_err(|e| IntervalError::InvalidStart(start_text.to_string(), e))?;

    let open_ended = || IntervalError::OpenEnded {
        start,
        duration: duration_text.to_string(),
    };
    let duration = parse_duration(duration_text).ok_or_else(open_ended)?;
    if duration.is_zero() {
        return Err(IntervalError::ZeroDuration(encoded.to_string()));
    }

    let start = start.with_timezone(&Utc);
    let end = start.checked_add_signed(duration).ok_or_else(open_ended)?;
    Ok(ResolvedInterval { start, end })
}

//! Time periods over which access-log rates are computed.
//!
//! A period is the half-open interval `[start, end)`. Periods that are still in progress
//! have no end yet and are modelled as a separate variant so that rate computation can
//! match on them exhaustively.

use chrono::{DateTime, Utc};

use crate::server::error::validation::ValidationError;

/// Half-open interval `[start, end)`, possibly still open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimePeriod {
    /// Closed period with both bounds set. `start <= end` always holds.
    Bounded {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    /// Ongoing period with no end yet.
    Unbounded { start: DateTime<Utc> },
}

impl TimePeriod {
    /// Creates a closed period.
    ///
    /// # Arguments
    /// - `start` - Inclusive start instant
    /// - `end` - Exclusive end instant
    ///
    /// # Returns
    /// - `Ok(TimePeriod::Bounded)` - `start <= end`
    /// - `Err(ValidationError::InvertedPeriod)` - `end` precedes `start`
    pub fn bounded(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, ValidationError> {
        if end < start {
            return Err(ValidationError::InvertedPeriod {
                start: start.to_rfc3339(),
                end: end.to_rfc3339(),
            });
        }

        Ok(Self::Bounded { start, end })
    }

    /// Creates a period that has started but not yet ended.
    pub fn unbounded(start: DateTime<Utc>) -> Self {
        Self::Unbounded { start }
    }

    pub fn start(&self) -> DateTime<Utc> {
        match *self {
            Self::Bounded { start, .. } | Self::Unbounded { start } => start,
        }
    }

    pub fn end(&self) -> Option<DateTime<Utc>> {
        match *self {
            Self::Bounded { end, .. } => Some(end),
            Self::Unbounded { .. } => None,
        }
    }

    /// Length of the period in seconds.
    ///
    /// # Returns
    /// - `Some(seconds)` - Period is bounded, fractional seconds retained
    /// - `None` - Period is still open
    pub fn duration(&self) -> Option<f64> {
        match *self {
            Self::Bounded { start, end } => Some(seconds_between(start, end)),
            Self::Unbounded { .. } => None,
        }
    }

    /// Whether `instant` falls within `[start, end)`.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        match *self {
            Self::Bounded { start, end } => start <= instant && instant < end,
            Self::Unbounded { start } => start <= instant,
        }
    }
}

/// Signed difference `to - from` in fractional seconds.
pub(crate) fn seconds_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    let delta = to - from;
    match delta.num_microseconds() {
        Some(micros) => micros as f64 / 1_000_000.0,
        // Only reachable for spans of hundreds of thousands of years
        None => delta.num_milliseconds() as f64 / 1_000.0,
    }
}

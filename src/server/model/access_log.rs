//! Access log domain models.
//!
//! An access log records that a user did something (uploaded telemetry, requested server
//! info) at an instant. Every concrete log table shares the `(id, user_id, timestamp)` shape
//! and is converted to `AccessLog` at the repository boundary.

use chrono::{DateTime, Utc};

use crate::server::util::clock::Clock;

/// A timestamped record attributable to one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessLog {
    /// Row id within the owning table.
    pub id: i32,
    /// ID of the user the log belongs to.
    pub user_id: i32,
    /// When the access happened.
    pub timestamp: DateTime<Utc>,
}

/// A not-yet-persisted access log with its timestamp resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewAccessLog {
    /// ID of the user the log belongs to.
    pub user_id: i32,
    /// When the access happened.
    pub timestamp: DateTime<Utc>,
}

impl NewAccessLog {
    /// Builds a new access log, stamping it with `clock.now()` when no timestamp is given.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user the log belongs to
    /// - `timestamp` - Explicit timestamp, or `None` to use the current time
    /// - `clock` - Source of the current time
    pub fn new(user_id: i32, timestamp: Option<DateTime<Utc>>, clock: &dyn Clock) -> Self {
        Self {
            user_id,
            timestamp: timestamp.unwrap_or_else(|| clock.now()),
        }
    }
}

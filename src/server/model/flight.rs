//! Takeoff/landing events and the flight periods derived from them.

use chrono::{DateTime, Utc};

use crate::server::model::time_period::TimePeriod;

/// A recorded change in whether a user's UAS is airborne.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TakeoffOrLanding {
    pub id: i32,
    pub user_id: i32,
    pub timestamp: DateTime<Utc>,
    /// `true` for a takeoff, `false` for a landing.
    pub uas_in_air: bool,
}

impl TakeoffOrLanding {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::takeoff_or_landing_event::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            timestamp: entity.timestamp,
            uas_in_air: entity.uas_in_air,
        }
    }
}

/// Parameters for recording a takeoff or landing.
#[derive(Debug, Clone, Copy)]
pub struct CreateTakeoffOrLandingParam {
    pub user_id: i32,
    /// Explicit event time, or `None` to stamp with the current time.
    pub timestamp: Option<DateTime<Utc>>,
    pub uas_in_air: bool,
}

/// Derives flight periods from a user's events in ascending timestamp order.
///
/// A takeoff opens a period and the next landing closes it. Repeated takeoffs while airborne
/// and repeated landings while grounded are ignored. A takeoff with no landing after it
/// yields an unbounded period.
pub fn flight_periods(events: &[TakeoffOrLanding]) -> Vec<TimePeriod> {
    let mut periods = Vec::new();
    let mut takeoff: Option<DateTime<Utc>> = None;

    for event in events {
        match (takeoff, event.uas_in_air) {
            (None, true) => takeoff = Some(event.timestamp),
            (Some(start), false) => {
                // Events arrive sorted, so a landing never precedes its takeoff
                periods.push(TimePeriod::Bounded {
                    start,
                    end: event.timestamp,
                });
                takeoff = None;
            }
            _ => {}
        }
    }

    if let Some(start) = takeoff {
        periods.push(TimePeriod::unbounded(start));
    }

    periods
}

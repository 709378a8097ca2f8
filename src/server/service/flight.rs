//! Flight tracking service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::takeoff_or_landing::TakeoffOrLandingRepository,
    error::AppError,
    model::{
        flight::{flight_periods, CreateTakeoffOrLandingParam, TakeoffOrLanding},
        time_period::TimePeriod,
    },
    service::user::UserService,
    util::clock::Clock,
};

/// Service recording takeoffs and landings and deriving flight periods from them.
pub struct FlightService<'a> {
    db: &'a DatabaseConnection,
    clock: &'a dyn Clock,
}

impl<'a> FlightService<'a> {
    pub fn new(db: &'a DatabaseConnection, clock: &'a dyn Clock) -> Self {
        Self { db, clock }
    }

    /// Records a takeoff or landing, stamping it with the current time if no timestamp is
    /// given.
    ///
    /// # Returns
    /// - `Ok(TakeoffOrLanding)` - The stored event
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::DbErr)` - Database error during query or insert
    pub async fn record(
        &self,
        param: CreateTakeoffOrLandingParam,
    ) -> Result<TakeoffOrLanding, AppError> {
        UserService::new(self.db).require(param.user_id).await?;

        let timestamp = param.timestamp.unwrap_or_else(|| self.clock.now());
        let event = TakeoffOrLandingRepository::new(self.db)
            .create(param.user_id, timestamp, param.uas_in_air)
            .await?;

        tracing::info!(
            user_id = event.user_id,
            uas_in_air = event.uas_in_air,
            "Recorded takeoff or landing"
        );

        Ok(event)
    }

    /// Derives a user's flight periods from their takeoff and landing events.
    ///
    /// # Returns
    /// - `Ok(Vec<TimePeriod>)` - Flights in chronological order; the last one is
    ///   unbounded if the UAS is still airborne
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn flight_periods(&self, user_id: i32) -> Result<Vec<TimePeriod>, AppError> {
        let events = TakeoffOrLandingRepository::new(self.db)
            .by_user(user_id)
            .await?;

        Ok(flight_periods(&events))
    }
}

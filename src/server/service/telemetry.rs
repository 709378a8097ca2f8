//! Telemetry ingestion and telemetry-rate service.
//!
//! Telemetry uploads are the access logs judges care most about: the report computes
//! telemetry rates over each user's flights to check that the required cadence was kept.

use chrono::{DateTime, Utc};
use entity::prelude::UasTelemetry as UasTelemetryEntity;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{access_log::AccessLogRepository, uas_telemetry::UasTelemetryRepository},
    error::AppError,
    model::{
        access_log::{AccessLog, NewAccessLog},
        rates::Rates,
        telemetry::{Telemetry, UasTelemetry},
        time_period::TimePeriod,
    },
    service::{access_log::AccessLogService, flight::FlightService, user::UserService},
    util::clock::Clock,
};

/// Service for telemetry uploads and telemetry rates.
pub struct TelemetryService<'a> {
    db: &'a DatabaseConnection,
    clock: &'a dyn Clock,
}

impl<'a> TelemetryService<'a> {
    /// Creates a new TelemetryService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `clock` - Source of the current time for uploads without a timestamp
    pub fn new(db: &'a DatabaseConnection, clock: &'a dyn Clock) -> Self {
        Self { db, clock }
    }

    /// Stores a telemetry upload for a user.
    ///
    /// # Arguments
    /// - `user_id` - ID of the uploading user
    /// - `telemetry` - Validated telemetry
    /// - `timestamp` - Explicit upload time, or `None` to stamp with the current time
    ///
    /// # Returns
    /// - `Ok(UasTelemetry)` - The stored record
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::DbErr)` - Database error during query or insert
    pub async fn upload(
        &self,
        user_id: i32,
        telemetry: Telemetry,
        timestamp: Option<DateTime<Utc>>,
    ) -> Result<UasTelemetry, AppError> {
        UserService::new(self.db).require(user_id).await?;

        let log = NewAccessLog::new(user_id, timestamp, self.clock);
        let stored = UasTelemetryRepository::new(self.db)
            .create(log, &telemetry)
            .await?;

        tracing::debug!(user_id, timestamp = %stored.timestamp, "Stored telemetry");

        Ok(stored)
    }

    /// Gets the user's most recent telemetry upload, if any.
    pub async fn last_upload(&self, user_id: i32) -> Result<Option<AccessLog>, AppError> {
        let last = AccessLogRepository::<UasTelemetryEntity>::new(self.db)
            .last_for_user(user_id, None, None)
            .await?;

        Ok(last)
    }

    /// Computes telemetry rates over caller-supplied periods.
    pub async fn rates(&self, user_id: i32, periods: &[TimePeriod]) -> Result<Rates, AppError> {
        AccessLogService::<UasTelemetryEntity>::new(self.db)
            .rates(user_id, periods, None)
            .await
    }

    /// Computes telemetry rates over the user's flights.
    ///
    /// # Returns
    /// - `Ok((periods, rates))` - The flight periods used and the resulting rates; rates are
    ///   `NoData` if the user never flew or is still airborne
    /// - `Err(AppError::DbErr)` - Database error during any query
    pub async fn rates_for_flights(
        &self,
        user_id: i32,
    ) -> Result<(Vec<TimePeriod>, Rates), AppError> {
        let periods = FlightService::new(self.db, self.clock)
            .flight_periods(user_id)
            .await?;
        let rates = self.rates(user_id, &periods).await?;

        Ok((periods, rates))
    }
}

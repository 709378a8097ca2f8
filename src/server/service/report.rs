//! Telemetry rate report over every user's flights.

use sea_orm::DatabaseConnection;

use crate::{
    model::report::{RateReportDto, UserRatesDto},
    server::{
        data::user::UserRepository, error::AppError, service::telemetry::TelemetryService,
        util::clock::Clock,
    },
};

/// Service building the judges' telemetry rate report.
pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
    clock: &'a dyn Clock,
}

impl<'a> ReportService<'a> {
    pub fn new(db: &'a DatabaseConnection, clock: &'a dyn Clock) -> Self {
        Self { db, clock }
    }

    /// Computes telemetry rates over each user's flights.
    ///
    /// Users are listed alphabetically. A user who never flew, or who is still airborne,
    /// is reported with no gaps and the reason.
    ///
    /// # Returns
    /// - `Ok(RateReportDto)` - One entry per user
    /// - `Err(AppError::DbErr)` - Database error during any query
    pub async fn telemetry_rates(&self) -> Result<RateReportDto, AppError> {
        let telemetry = TelemetryService::new(self.db, self.clock);
        let users = UserRepository::new(self.db).get_all().await?;

        let mut entries = Vec::with_capacity(users.len());
        for user in users {
            let (periods, rates) = telemetry.rates_for_flights(user.id).await?;

            tracing::info!(
                user = %user.username,
                flights = periods.len(),
                max_gap = ?rates.max_gap(),
                avg_gap = ?rates.avg_gap(),
                "Computed telemetry rates"
            );

            entries.push(UserRatesDto {
                user_id: user.id,
                username: user.username,
                flights: periods.len(),
                telemetry: rates.into_dto(),
            });
        }

        Ok(RateReportDto {
            generated_at: self.clock.now(),
            users: entries,
        })
    }
}

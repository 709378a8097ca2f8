//! Access-log rate computation service.
//!
//! Binds the query layer to the gap statistic: given a user and non-overlapping periods it
//! fetches each period's logs (unless the caller already has them) and computes
//! [`Rates`]. Undefined inputs short-circuit before any query runs.

use sea_orm::DatabaseConnection;
use std::marker::PhantomData;

use crate::server::{
    data::access_log::{AccessLogEntity, AccessLogRepository},
    error::AppError,
    model::{access_log::AccessLog, rates::Rates, time_period::TimePeriod},
};

/// Service computing rates for one access-log table.
pub struct AccessLogService<'a, E> {
    db: &'a DatabaseConnection,
    entity: PhantomData<E>,
}

impl<'a, E: AccessLogEntity> AccessLogService<'a, E> {
    /// Creates a new AccessLogService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }

    /// Computes max and average time between a user's logs over the given periods.
    ///
    /// Periods must not overlap, otherwise logs in the overlap are counted twice. Gaps
    /// between each period's edges and its nearest log are included.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user to compute rates for
    /// - `periods` - Non-overlapping periods to compute over
    /// - `logs` - Optional per-period logs already fetched by the caller, parallel to
    ///   `periods`. `None` or an empty list fetches them from the store.
    ///
    /// # Returns
    /// - `Ok(Rates::Computed)` - Gap statistics in seconds
    /// - `Ok(Rates::NoData)` - No periods, or any period still open
    /// - `Err(AppError::DbErr)` - Database error while fetching logs
    pub async fn rates(
        &self,
        user_id: i32,
        periods: &[TimePeriod],
        logs: Option<&[Vec<AccessLog>]>,
    ) -> Result<Rates, AppError> {
        if let Some(reason) = Rates::undefined_reason(periods) {
            tracing::debug!(user_id, reason = reason.as_str(), "Rates undefined");
            return Ok(Rates::NoData(reason));
        }

        let fetched;
        let logs = match logs {
            Some(logs) if !logs.is_empty() => logs,
            _ => {
                fetched = AccessLogRepository::<E>::new(self.db)
                    .by_time_period(user_id, periods)
                    .await?;
                fetched.as_slice()
            }
        };

        Ok(Rates::compute(periods, logs))
    }
}

//! Query layer over per-user access logs.
//!
//! Each access-log table implements [`AccessLogEntity`] to expose its user and timestamp
//! columns. [`AccessLogRepository`] then projects a user's history into time-bounded or
//! time-partitioned slices, always in ascending timestamp order. Nothing is cached; every
//! call queries the store, relying on the `(user_id, timestamp)` index.

use chrono::{DateTime, Utc};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::marker::PhantomData;

use crate::server::model::{access_log::AccessLog, time_period::TimePeriod};

/// An entity whose rows are access logs owned by a user.
pub trait AccessLogEntity: EntityTrait {
    /// Primary key column, used to order logs sharing a timestamp.
    fn id_column() -> Self::Column;

    /// Column holding the owning user's ID.
    fn user_id_column() -> Self::Column;

    /// Column holding the access timestamp.
    fn timestamp_column() -> Self::Column;

    /// Converts a row into its access-log view.
    fn into_access_log(model: Self::Model) -> AccessLog;
}

/// Repository providing read-only access-log queries for one access-log table.
pub struct AccessLogRepository<'a, E> {
    db: &'a DatabaseConnection,
    entity: PhantomData<E>,
}

impl<'a, E: AccessLogEntity> AccessLogRepository<'a, E> {
    /// Creates a new AccessLogRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AccessLogRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }

    /// Gets the time-sorted access logs for a user.
    ///
    /// Logs sharing a timestamp are ordered by insertion id.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user to get logs for
    /// - `start` - Optional inclusive lower bound on timestamp
    /// - `end` - Optional exclusive upper bound on timestamp
    ///
    /// # Returns
    /// - `Ok(Vec<AccessLog>)` - Matching logs in ascending timestamp order
    /// - `Err(DbErr)` - Database error during query
    pub async fn by_user(
        &self,
        user_id: i32,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Vec<AccessLog>, DbErr> {
        let mut query = E::find().filter(E::user_id_column().eq(user_id));
        if let Some(start) = start {
            query = query.filter(E::timestamp_column().gte(start));
        }
        if let Some(end) = end {
            query = query.filter(E::timestamp_column().lt(end));
        }

        let models = query
            .order_by_asc(E::timestamp_column())
            .order_by_asc(E::id_column())
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(E::into_access_log).collect())
    }

    /// Gets the most recent access log for a user within optional bounds.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user to get the log for
    /// - `start` - Optional inclusive lower bound on timestamp
    /// - `end` - Optional exclusive upper bound on timestamp
    ///
    /// # Returns
    /// - `Ok(Some(AccessLog))` - Latest log in range
    /// - `Ok(None)` - No logs in range
    /// - `Err(DbErr)` - Database error during query
    pub async fn last_for_user(
        &self,
        user_id: i32,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Option<AccessLog>, DbErr> {
        Ok(self.by_user(user_id, start, end).await?.pop())
    }

    /// Gets the access logs of each time period.
    ///
    /// Each period is queried independently over `[start, end)`, with open periods having
    /// no upper bound. Overlapping periods can return the same log more than once.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user to get logs for
    /// - `periods` - Periods to partition the logs by
    ///
    /// # Returns
    /// - `Ok(Vec<Vec<AccessLog>>)` - One ascending list per period, in period order
    /// - `Err(DbErr)` - Database error during any of the queries
    pub async fn by_time_period(
        &self,
        user_id: i32,
        periods: &[TimePeriod],
    ) -> Result<Vec<Vec<AccessLog>>, DbErr> {
        let mut logs = Vec::with_capacity(periods.len());
        for period in periods {
            logs.push(
                self.by_user(user_id, Some(period.start()), period.end())
                    .await?,
            );
        }

        Ok(logs)
    }
}

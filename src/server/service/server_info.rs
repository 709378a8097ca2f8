//! Server info requests and their access logging.

use chrono::{DateTime, Utc};
use entity::prelude::ServerInfoAccessLog;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::server_info_access_log::ServerInfoAccessLogRepository,
    error::AppError,
    model::{
        access_log::{AccessLog, NewAccessLog},
        rates::Rates,
        server_info::ServerInfo,
        time_period::TimePeriod,
    },
    service::{access_log::AccessLogService, user::UserService},
    util::clock::Clock,
};

/// Service logging server info requests and computing their rates.
pub struct ServerInfoAccessService<'a> {
    db: &'a DatabaseConnection,
    clock: &'a dyn Clock,
}

impl<'a> ServerInfoAccessService<'a> {
    pub fn new(db: &'a DatabaseConnection, clock: &'a dyn Clock) -> Self {
        Self { db, clock }
    }

    /// Records that a user requested server info, stamped with the current time.
    ///
    /// # Returns
    /// - `Ok(AccessLog)` - The stored log
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::DbErr)` - Database error during query or insert
    pub async fn record(&self, user_id: i32) -> Result<AccessLog, AppError> {
        UserService::new(self.db).require(user_id).await?;

        let log = ServerInfoAccessLogRepository::new(self.db)
            .create(NewAccessLog::new(user_id, None, self.clock))
            .await?;

        Ok(log)
    }

    /// Serves server info to a user, logging the request.
    ///
    /// The server time reported is the instant the request was logged.
    ///
    /// # Arguments
    /// - `user_id` - ID of the requesting user
    /// - `message` - Current message for competitors
    /// - `message_timestamp` - When the message was last changed
    ///
    /// # Returns
    /// - `Ok(ServerInfo)` - Message and server time
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::DbErr)` - Database error during query or insert
    pub async fn server_info(
        &self,
        user_id: i32,
        message: impl Into<String>,
        message_timestamp: DateTime<Utc>,
    ) -> Result<ServerInfo, AppError> {
        let log = self.record(user_id).await?;

        Ok(ServerInfo {
            message: message.into(),
            message_timestamp,
            server_time: log.timestamp,
        })
    }

    /// Computes server info request rates over the given periods.
    pub async fn rates(&self, user_id: i32, periods: &[TimePeriod]) -> Result<Rates, AppError> {
        AccessLogService::<ServerInfoAccessLog>::new(self.db)
            .rates(user_id, periods, None)
            .await
    }
}

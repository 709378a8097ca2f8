//! Server info access log repository.

use entity::prelude::ServerInfoAccessLog;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::server::{
    data::access_log::AccessLogEntity,
    model::access_log::{AccessLog, NewAccessLog},
};

impl AccessLogEntity for ServerInfoAccessLog {
    fn id_column() -> Self::Column {
        entity::server_info_access_log::Column::Id
    }

    fn user_id_column() -> Self::Column {
        entity::server_info_access_log::Column::UserId
    }

    fn timestamp_column() -> Self::Column {
        entity::server_info_access_log::Column::Timestamp
    }

    fn into_access_log(model: Self::Model) -> AccessLog {
        AccessLog {
            id: model.id,
            user_id: model.user_id,
            timestamp: model.timestamp,
        }
    }
}

pub struct ServerInfoAccessLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerInfoAccessLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records that a user requested server info.
    ///
    /// # Returns
    /// - `Ok(AccessLog)` - The stored log
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, log: NewAccessLog) -> Result<AccessLog, DbErr> {
        let entity = entity::server_info_access_log::ActiveModel {
            user_id: ActiveValue::Set(log.user_id),
            timestamp: ActiveValue::Set(log.timestamp),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ServerInfoAccessLog::into_access_log(entity))
    }
}

//! UAS telemetry repository.

use entity::prelude::UasTelemetry as UasTelemetryEntity;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::server::{
    data::access_log::AccessLogEntity,
    model::{
        access_log::{AccessLog, NewAccessLog},
        telemetry::{Telemetry, UasTelemetry},
    },
};

impl AccessLogEntity for UasTelemetryEntity {
    fn id_column() -> Self::Column {
        entity::uas_telemetry::Column::Id
    }

    fn user_id_column() -> Self::Column {
        entity::uas_telemetry::Column::UserId
    }

    fn timestamp_column() -> Self::Column {
        entity::uas_telemetry::Column::Timestamp
    }

    fn into_access_log(model: Self::Model) -> AccessLog {
        UasTelemetry::from_entity(model).access_log()
    }
}

/// Repository for storing telemetry uploads.
pub struct UasTelemetryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UasTelemetryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a telemetry upload.
    ///
    /// # Arguments
    /// - `log` - Owning user and resolved timestamp
    /// - `telemetry` - Validated telemetry values
    ///
    /// # Returns
    /// - `Ok(UasTelemetry)` - The stored record
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        log: NewAccessLog,
        telemetry: &Telemetry,
    ) -> Result<UasTelemetry, DbErr> {
        let entity = entity::uas_telemetry::ActiveModel {
            user_id: ActiveValue::Set(log.user_id),
            timestamp: ActiveValue::Set(log.timestamp),
            latitude: ActiveValue::Set(telemetry.latitude()),
            longitude: ActiveValue::Set(telemetry.longitude()),
            altitude_msl: ActiveValue::Set(telemetry.altitude_msl()),
            uas_heading: ActiveValue::Set(telemetry.uas_heading()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(UasTelemetry::from_entity(entity))
    }
}

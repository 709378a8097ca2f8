//! Telemetry factory for creating UAS telemetry access logs.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating telemetry rows with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let telemetry = UasTelemetryFactory::new(&db, user.id)
///     .timestamp(t0)
///     .altitude_msl(250.0)
///     .build()
///     .await?;
/// ```
pub struct UasTelemetryFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    timestamp: DateTime<Utc>,
    latitude: f64,
    longitude: f64,
    altitude_msl: f64,
    uas_heading: f64,
}

impl<'a> UasTelemetryFactory<'a> {
    /// Creates a new UasTelemetryFactory with default values.
    ///
    /// Defaults:
    /// - timestamp: now
    /// - latitude/longitude: `38.145, -76.428`
    /// - altitude_msl: `100.0`
    /// - uas_heading: `90.0`
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            timestamp: Utc::now(),
            latitude: 38.145,
            longitude: -76.428,
            altitude_msl: 100.0,
            uas_heading: 90.0,
        }
    }

    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn position(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    pub fn altitude_msl(mut self, altitude_msl: f64) -> Self {
        self.altitude_msl = altitude_msl;
        self
    }

    pub fn uas_heading(mut self, uas_heading: f64) -> Self {
        self.uas_heading = uas_heading;
        self
    }

    /// Builds and inserts the telemetry entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::uas_telemetry::Model)` - Created telemetry entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::uas_telemetry::Model, DbErr> {
        entity::uas_telemetry::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            timestamp: ActiveValue::Set(self.timestamp),
            latitude: ActiveValue::Set(self.latitude),
            longitude: ActiveValue::Set(self.longitude),
            altitude_msl: ActiveValue::Set(self.altitude_msl),
            uas_heading: ActiveValue::Set(self.uas_heading),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a telemetry row for a user at the given instant.
pub async fn create_uas_telemetry(
    db: &DatabaseConnection,
    user_id: i32,
    timestamp: DateTime<Utc>,
) -> Result<entity::uas_telemetry::Model, DbErr> {
    UasTelemetryFactory::new(db, user_id)
        .timestamp(timestamp)
        .build()
        .await
}

/// Creates one telemetry row per timestamp, inserted in the order given.
pub async fn create_uas_telemetry_series(
    db: &DatabaseConnection,
    user_id: i32,
    timestamps: &[DateTime<Utc>],
) -> Result<Vec<entity::uas_telemetry::Model>, DbErr> {
    let mut rows = Vec::with_capacity(timestamps.len());
    for timestamp in timestamps {
        rows.push(create_uas_telemetry(db, user_id, *timestamp).await?);
    }
    Ok(rows)
}

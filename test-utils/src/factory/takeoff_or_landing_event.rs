//! Takeoff/landing event factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a takeoff (`uas_in_air = true`) or landing (`false`) event.
///
/// # Returns
/// - `Ok(entity::takeoff_or_landing_event::Model)` - Created event entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_takeoff_or_landing(
    db: &DatabaseConnection,
    user_id: i32,
    timestamp: DateTime<Utc>,
    uas_in_air: bool,
) -> Result<entity::takeoff_or_landing_event::Model, DbErr> {
    entity::takeoff_or_landing_event::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        timestamp: ActiveValue::Set(timestamp),
        uas_in_air: ActiveValue::Set(uas_in_air),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a takeoff at `start` and a landing at `end`.
///
/// # Returns
/// - `Ok((takeoff, landing))` - Both created events
/// - `Err(DbErr)` - Database error during insert
pub async fn create_flight(
    db: &DatabaseConnection,
    user_id: i32,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<
    (
        entity::takeoff_or_landing_event::Model,
        entity::takeoff_or_landing_event::Model,
    ),
    DbErr,
> {
    let takeoff = create_takeoff_or_landing(db, user_id, start, true).await?;
    let landing = create_takeoff_or_landing(db, user_id, end, false).await?;

    Ok((takeoff, landing))
}

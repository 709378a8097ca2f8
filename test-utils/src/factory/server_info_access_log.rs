//! Server info access log factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a server info access log for a user at the given instant.
///
/// # Returns
/// - `Ok(entity::server_info_access_log::Model)` - Created log entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_server_info_access_log(
    db: &DatabaseConnection,
    user_id: i32,
    timestamp: DateTime<Utc>,
) -> Result<entity::server_info_access_log::Model, DbErr> {
    entity::server_info_access_log::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        timestamp: ActiveValue::Set(timestamp),
        ..Default::default()
    }
    .insert(db)
    .await
}

//! Takeoff/landing event repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::flight::TakeoffOrLanding;

pub struct TakeoffOrLandingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TakeoffOrLandingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a takeoff (`uas_in_air = true`) or landing (`false`).
    ///
    /// # Returns
    /// - `Ok(TakeoffOrLanding)` - The stored event
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        user_id: i32,
        timestamp: DateTime<Utc>,
        uas_in_air: bool,
    ) -> Result<TakeoffOrLanding, DbErr> {
        let entity = entity::takeoff_or_landing_event::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            timestamp: ActiveValue::Set(timestamp),
            uas_in_air: ActiveValue::Set(uas_in_air),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(TakeoffOrLanding::from_entity(entity))
    }

    /// Gets a user's takeoff and landing events in ascending timestamp order.
    ///
    /// # Returns
    /// - `Ok(Vec<TakeoffOrLanding>)` - The user's events, empty if none
    /// - `Err(DbErr)` - Database error during query
    pub async fn by_user(&self, user_id: i32) -> Result<Vec<TakeoffOrLanding>, DbErr> {
        let entities = entity::prelude::TakeoffOrLandingEvent::find()
            .filter(entity::takeoff_or_landing_event::Column::UserId.eq(user_id))
            .order_by_asc(entity::takeoff_or_landing_event::Column::Timestamp)
            .order_by_asc(entity::takeoff_or_landing_event::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(TakeoffOrLanding::from_entity)
            .collect())
    }
}

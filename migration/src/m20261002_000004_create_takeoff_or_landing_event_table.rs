use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TakeoffOrLandingEvent::Table)
                    .if_not_exists()
                    .col(pk_auto(TakeoffOrLandingEvent::Id))
                    .col(integer(TakeoffOrLandingEvent::UserId))
                    .col(timestamp_with_time_zone(TakeoffOrLandingEvent::Timestamp))
                    .col(boolean(TakeoffOrLandingEvent::UasInAir))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_takeoff_or_landing_event_user_id")
                            .from(TakeoffOrLandingEvent::Table, TakeoffOrLandingEvent::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_takeoff_or_landing_event_user_id_timestamp")
                    .table(TakeoffOrLandingEvent::Table)
                    .col(TakeoffOrLandingEvent::UserId)
                    .col(TakeoffOrLandingEvent::Timestamp)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TakeoffOrLandingEvent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TakeoffOrLandingEvent {
    Table,
    Id,
    UserId,
    Timestamp,
    UasInAir,
}

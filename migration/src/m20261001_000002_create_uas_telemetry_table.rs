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
                    .table(UasTelemetry::Table)
                    .if_not_exists()
                    .col(pk_auto(UasTelemetry::Id))
                    .col(integer(UasTelemetry::UserId))
                    .col(timestamp_with_time_zone(UasTelemetry::Timestamp))
                    .col(double(UasTelemetry::Latitude))
                    .col(double(UasTelemetry::Longitude))
                    .col(double(UasTelemetry::AltitudeMsl))
                    .col(double(UasTelemetry::UasHeading))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_uas_telemetry_user_id")
                            .from(UasTelemetry::Table, UasTelemetry::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Rate queries filter on user then range-scan timestamps
        manager
            .create_index(
                Index::create()
                    .name("idx_uas_telemetry_user_id_timestamp")
                    .table(UasTelemetry::Table)
                    .col(UasTelemetry::UserId)
                    .col(UasTelemetry::Timestamp)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UasTelemetry::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UasTelemetry {
    Table,
    Id,
    UserId,
    Timestamp,
    Latitude,
    Longitude,
    AltitudeMsl,
    UasHeading,
}

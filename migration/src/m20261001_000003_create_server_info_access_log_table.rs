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
                    .table(ServerInfoAccessLog::Table)
                    .if_not_exists()
                    .col(pk_auto(ServerInfoAccessLog::Id))
                    .col(integer(ServerInfoAccessLog::UserId))
                    .col(timestamp_with_time_zone(ServerInfoAccessLog::Timestamp))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_server_info_access_log_user_id")
                            .from(ServerInfoAccessLog::Table, ServerInfoAccessLog::UserId)
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
                    .name("idx_server_info_access_log_user_id_timestamp")
                    .table(ServerInfoAccessLog::Table)
                    .col(ServerInfoAccessLog::UserId)
                    .col(ServerInfoAccessLog::Timestamp)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServerInfoAccessLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ServerInfoAccessLog {
    Table,
    Id,
    UserId,
    Timestamp,
}

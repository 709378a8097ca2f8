use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::uas_telemetry::Entity")]
    UasTelemetry,
    #[sea_orm(has_many = "super::server_info_access_log::Entity")]
    ServerInfoAccessLog,
    #[sea_orm(has_many = "super::takeoff_or_landing_event::Entity")]
    TakeoffOrLandingEvent,
}

impl Related<super::uas_telemetry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UasTelemetry.def()
    }
}

impl Related<super::server_info_access_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ServerInfoAccessLog.def()
    }
}

impl Related<super::takeoff_or_landing_event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TakeoffOrLandingEvent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

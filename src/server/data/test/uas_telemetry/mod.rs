use crate::server::{
    data::uas_telemetry::UasTelemetryRepository,
    model::{access_log::NewAccessLog, telemetry::Telemetry},
};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, helpers::at},
};

mod create;

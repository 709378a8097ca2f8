use crate::server::{data::access_log::AccessLogRepository, model::time_period::TimePeriod};
use entity::prelude::{ServerInfoAccessLog, UasTelemetry};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, helpers::at},
};

mod by_time_period;
mod by_user;
mod last_for_user;

use crate::server::{
    data::server_info_access_log::ServerInfoAccessLogRepository, model::access_log::NewAccessLog,
};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, helpers::at},
};

mod create;

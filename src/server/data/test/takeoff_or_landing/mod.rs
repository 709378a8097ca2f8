use crate::server::data::takeoff_or_landing::TakeoffOrLandingRepository;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, helpers::at},
};

mod by_user;
mod create;

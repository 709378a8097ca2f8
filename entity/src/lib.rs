//! SeaORM entity definitions for the interop database.

pub mod prelude;

pub mod server_info_access_log;
pub mod takeoff_or_landing_event;
pub mod uas_telemetry;
pub mod user;

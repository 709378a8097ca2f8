//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models so that the
//! service layer never sees entities. Every access-log table is queried through the generic
//! [`access_log::AccessLogRepository`].

pub mod access_log;
pub mod server_info_access_log;
pub mod takeoff_or_landing;
pub mod uas_telemetry;
pub mod user;

#[cfg(test)]
mod test;

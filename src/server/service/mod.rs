//! Service layer orchestrating repositories and the rate engine.
//!
//! Services borrow the database connection and, where they create access logs, a
//! [`Clock`](crate::server::util::clock::Clock). They return domain models and
//! `AppError`.

pub mod access_log;
pub mod flight;
pub mod report;
pub mod server_info;
pub mod telemetry;
pub mod user;

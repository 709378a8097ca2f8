//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary. Value objects
//! in this module validate their fields on construction; the rate engine assumes every value
//! it receives came through these constructors.

pub mod access_log;
pub mod flight;
pub mod obstacle;
pub mod rates;
pub mod server_info;
pub mod target;
pub mod telemetry;
pub mod time_period;
pub mod user;

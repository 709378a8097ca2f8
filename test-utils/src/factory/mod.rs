//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let logs = factory::create_uas_telemetry_series(&db, user.id, &[t0, t1, t2]).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let telemetry = factory::uas_telemetry::UasTelemetryFactory::new(&db, user.id)
//!     .timestamp(t0)
//!     .position(38.14, -76.43)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `uas_telemetry` - Create telemetry access logs
//! - `server_info_access_log` - Create server info access logs
//! - `takeoff_or_landing_event` - Create takeoff and landing events
//! - `helpers` - ID generation and fixed test instants

pub mod helpers;
pub mod server_info_access_log;
pub mod takeoff_or_landing_event;
pub mod uas_telemetry;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use server_info_access_log::create_server_info_access_log;
pub use takeoff_or_landing_event::{create_flight, create_takeoff_or_landing};
pub use uas_telemetry::{create_uas_telemetry, create_uas_telemetry_series};
pub use user::create_user;

pub use super::server_info_access_log::Entity as ServerInfoAccessLog;
pub use super::takeoff_or_landing_event::Entity as TakeoffOrLandingEvent;
pub use super::uas_telemetry::Entity as UasTelemetry;
pub use super::user::Entity as User;

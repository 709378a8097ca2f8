mod access_log;
mod server_info_access_log;
mod takeoff_or_landing;
mod uas_telemetry;
mod user;

use chrono::{DateTime, Utc};

use crate::server::error::validation::ValidationError;

/// Server information displayed to judges.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerInfo {
    /// Custom message from the server.
    pub message: String,
    pub message_timestamp: DateTime<Utc>,
    /// Current server time.
    pub server_time: DateTime<Utc>,
}

impl ServerInfo {
    /// Builds server info from RFC 3339 timestamp strings.
    ///
    /// # Returns
    /// - `Ok(ServerInfo)` - Both timestamps parsed
    /// - `Err(ValidationError::InvalidTimestamp)` - A timestamp failed to parse
    pub fn parse(
        message: impl Into<String>,
        message_timestamp: &str,
        server_time: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            message: message.into(),
            message_timestamp: parse_timestamp("message_timestamp", message_timestamp)?,
            server_time: parse_timestamp("server_time", server_time)?,
        })
    }
}

fn parse_timestamp(field: &'static str, value: &str) -> Result<DateTime<Utc>, ValidationError> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|source| ValidationError::InvalidTimestamp {
            field,
            value: value.to_string(),
            source,
        })
}

//! UAS telemetry value object and stored record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::server::{
    error::validation::ValidationError,
    model::access_log::AccessLog,
    util::validate::{check_heading, check_latitude, check_longitude},
};

/// UAS telemetry at a single point in time.
///
/// Only constructible through [`Telemetry::new`], which enforces coordinate and heading
/// ranges. Deserialization goes through the same checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTelemetry")]
pub struct Telemetry {
    latitude: f64,
    longitude: f64,
    altitude_msl: f64,
    uas_heading: f64,
}

#[derive(Deserialize)]
struct RawTelemetry {
    latitude: f64,
    longitude: f64,
    altitude_msl: f64,
    uas_heading: f64,
}

impl TryFrom<RawTelemetry> for Telemetry {
    type Error = ValidationError;

    fn try_from(raw: RawTelemetry) -> Result<Self, Self::Error> {
        Self::new(raw.latitude, raw.longitude, raw.altitude_msl, raw.uas_heading)
    }
}

impl Telemetry {
    /// Creates validated telemetry.
    ///
    /// # Arguments
    /// - `latitude` - Decimal degrees in `[-90, 90]`
    /// - `longitude` - Decimal degrees in `[-180, 180]`
    /// - `altitude_msl` - Altitude MSL in feet
    /// - `uas_heading` - Aircraft heading in degrees `[0, 360]`
    ///
    /// # Returns
    /// - `Ok(Telemetry)` - All fields in range
    /// - `Err(ValidationError::OutOfRange)` - A field is out of range or NaN
    pub fn new(
        latitude: f64,
        longitude: f64,
        altitude_msl: f64,
        uas_heading: f64,
    ) -> Result<Self, ValidationError> {
        check_latitude(latitude)?;
        check_longitude(longitude)?;
        check_heading(uas_heading)?;

        Ok(Self {
            latitude,
            longitude,
            altitude_msl,
            uas_heading,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn altitude_msl(&self) -> f64 {
        self.altitude_msl
    }

    pub fn uas_heading(&self) -> f64 {
        self.uas_heading
    }
}

/// Telemetry stored for a user at an instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UasTelemetry {
    pub id: i32,
    pub user_id: i32,
    pub timestamp: DateTime<Utc>,
    pub telemetry: Telemetry,
}

impl UasTelemetry {
    /// Converts an entity model to a telemetry domain model at the repository boundary.
    ///
    /// Stored rows were validated on the way in, so the telemetry is rebuilt without
    /// re-checking ranges.
    pub fn from_entity(entity: entity::uas_telemetry::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            timestamp: entity.timestamp,
            telemetry: Telemetry {
                latitude: entity.latitude,
                longitude: entity.longitude,
                altitude_msl: entity.altitude_msl,
                uas_heading: entity.uas_heading,
            },
        }
    }

    /// The access-log view of this record.
    pub fn access_log(&self) -> AccessLog {
        AccessLog {
            id: self.id,
            user_id: self.user_id,
            timestamp: self.timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_telemetry() {
        let telemetry = Telemetry::new(38.145, -76.428, 100.0, 90.0).unwrap();

        assert_eq!(telemetry.latitude(), 38.145);
        assert_eq!(telemetry.longitude(), -76.428);
        assert_eq!(telemetry.altitude_msl(), 100.0);
        assert_eq!(telemetry.uas_heading(), 90.0);
    }

    #[test]
    fn rejects_out_of_range_fields() {
        assert!(Telemetry::new(91.0, 0.0, 0.0, 0.0).is_err());
        assert!(Telemetry::new(0.0, 181.0, 0.0, 0.0).is_err());
        assert!(Telemetry::new(0.0, 0.0, 0.0, 361.0).is_err());
        assert!(Telemetry::new(0.0, 0.0, 0.0, -1.0).is_err());
    }

    #[test]
    fn altitude_is_unbounded() {
        assert!(Telemetry::new(0.0, 0.0, -1_000.0, 0.0).is_ok());
    }

    #[test]
    fn deserialization_validates() {
        let ok: Result<Telemetry, _> = serde_json::from_str(
            r#"{"latitude": 38.0, "longitude": -76.0, "altitude_msl": 50.0, "uas_heading": 10.0}"#,
        );
        let bad: Result<Telemetry, _> = serde_json::from_str(
            r#"{"latitude": 120.0, "longitude": -76.0, "altitude_msl": 50.0, "uas_heading": 10.0}"#,
        );

        assert!(ok.is_ok());
        assert!(bad.is_err());
    }
}

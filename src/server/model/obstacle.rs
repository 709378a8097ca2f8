//! Obstacle value objects.
//!
//! Both obstacle kinds are only constructible through their `new` constructors, and
//! deserialization is routed through the same checks.

use serde::{Deserialize, Serialize};

use crate::server::{
    error::validation::ValidationError,
    util::validate::{check_latitude, check_longitude, check_non_negative},
};

/// A stationary cylinder with a given location, height and radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawStationaryObstacle")]
pub struct StationaryObstacle {
    latitude: f64,
    longitude: f64,
    cylinder_height: f64,
    cylinder_radius: f64,
}

#[derive(Deserialize)]
struct RawStationaryObstacle {
    latitude: f64,
    longitude: f64,
    cylinder_height: f64,
    cylinder_radius: f64,
}

impl TryFrom<RawStationaryObstacle> for StationaryObstacle {
    type Error = ValidationError;

    fn try_from(raw: RawStationaryObstacle) -> Result<Self, Self::Error> {
        Self::new(
            raw.latitude,
            raw.longitude,
            raw.cylinder_height,
            raw.cylinder_radius,
        )
    }
}

impl StationaryObstacle {
    /// Creates a validated stationary obstacle.
    ///
    /// # Arguments
    /// - `latitude` - Cylinder center in decimal degrees `[-90, 90]`
    /// - `longitude` - Cylinder center in decimal degrees `[-180, 180]`
    /// - `cylinder_height` - Height in feet, `>= 0`
    /// - `cylinder_radius` - Radius in feet, `>= 0`
    ///
    /// # Returns
    /// - `Ok(StationaryObstacle)` - All fields in range
    /// - `Err(ValidationError::OutOfRange)` - A field is out of range or NaN
    pub fn new(
        latitude: f64,
        longitude: f64,
        cylinder_height: f64,
        cylinder_radius: f64,
    ) -> Result<Self, ValidationError> {
        check_latitude(latitude)?;
        check_longitude(longitude)?;
        check_non_negative("cylinder_radius", cylinder_radius)?;
        check_non_negative("cylinder_height", cylinder_height)?;

        Ok(Self {
            latitude,
            longitude,
            cylinder_height,
            cylinder_radius,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Height in feet.
    pub fn cylinder_height(&self) -> f64 {
        self.cylinder_height
    }

    /// Radius in feet.
    pub fn cylinder_radius(&self) -> f64 {
        self.cylinder_radius
    }
}

/// A moving sphere with a given location, altitude and radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMovingObstacle")]
pub struct MovingObstacle {
    latitude: f64,
    longitude: f64,
    altitude_msl: f64,
    sphere_radius: f64,
}

#[derive(Deserialize)]
struct RawMovingObstacle {
    latitude: f64,
    longitude: f64,
    altitude_msl: f64,
    sphere_radius: f64,
}

impl TryFrom<RawMovingObstacle> for MovingObstacle {
    type Error = ValidationError;

    fn try_from(raw: RawMovingObstacle) -> Result<Self, Self::Error> {
        Self::new(
            raw.latitude,
            raw.longitude,
            raw.altitude_msl,
            raw.sphere_radius,
        )
    }
}

impl MovingObstacle {
    /// Creates a validated moving obstacle.
    ///
    /// # Returns
    /// - `Ok(MovingObstacle)` - Position and radius in range
    /// - `Err(ValidationError::OutOfRange)` - A field is out of range or NaN
    pub fn new(
        latitude: f64,
        longitude: f64,
        altitude_msl: f64,
        sphere_radius: f64,
    ) -> Result<Self, ValidationError> {
        check_latitude(latitude)?;
        check_longitude(longitude)?;
        check_non_negative("sphere_radius", sphere_radius)?;

        Ok(Self {
            latitude,
            longitude,
            altitude_msl,
            sphere_radius,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Centroid altitude MSL in feet.
    pub fn altitude_msl(&self) -> f64 {
        self.altitude_msl
    }

    /// Radius in feet.
    pub fn sphere_radius(&self) -> f64 {
        self.sphere_radius
    }
}

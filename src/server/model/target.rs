//! Target value object submitted by competitors.

use serde::{Deserialize, Serialize};

use crate::server::{
    error::validation::ValidationError,
    util::validate::{check_latitude, check_longitude},
};

/// Unvalidated target fields, as submitted.
///
/// `id` and `user` are assigned by the server; new targets leave them unset.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TargetParam {
    pub id: Option<i32>,
    pub user: Option<i32>,
    #[serde(rename = "type")]
    pub target_type: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub orientation: Option<String>,
    pub shape: Option<String>,
    pub background_color: Option<String>,
    pub alphanumeric: Option<String>,
    pub alphanumeric_color: Option<String>,
    pub description: Option<String>,
}

/// A target spotted by a competitor.
///
/// Only constructible through [`Target::new`]; deserialization runs the same checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TargetParam")]
pub struct Target {
    id: Option<i32>,
    user: Option<i32>,
    #[serde(rename = "type")]
    target_type: String,
    latitude: Option<f64>,
    longitude: Option<f64>,
    orientation: Option<String>,
    shape: Option<String>,
    background_color: Option<String>,
    alphanumeric: Option<String>,
    alphanumeric_color: Option<String>,
    description: Option<String>,
}

impl TryFrom<TargetParam> for Target {
    type Error = ValidationError;

    fn try_from(param: TargetParam) -> Result<Self, Self::Error> {
        Self::new(param)
    }
}

impl Target {
    /// Creates a validated target.
    ///
    /// An empty alphanumeric is treated as not provided.
    ///
    /// # Returns
    /// - `Ok(Target)` - Target is valid
    /// - `Err(ValidationError::PartialPosition)` - Only one of latitude/longitude is set
    /// - `Err(ValidationError::OutOfRange)` - Latitude or longitude out of range
    /// - `Err(ValidationError::InvalidAlphanumeric)` - Alphanumeric is not one ASCII letter or digit
    pub fn new(param: TargetParam) -> Result<Self, ValidationError> {
        match (param.latitude, param.longitude) {
            (Some(lat), Some(lon)) => {
                check_latitude(lat)?;
                check_longitude(lon)?;
            }
            (None, None) => {}
            _ => return Err(ValidationError::PartialPosition),
        }

        if let Some(alphanumeric) = param.alphanumeric.as_deref().filter(|a| !a.is_empty()) {
            let mut chars = alphanumeric.chars();
            let valid = matches!(
                (chars.next(), chars.next()),
                (Some(c), None) if c.is_ascii_alphanumeric()
            );
            if !valid {
                return Err(ValidationError::InvalidAlphanumeric(
                    alphanumeric.to_string(),
                ));
            }
        }

        Ok(Self {
            id: param.id,
            user: param.user,
            target_type: param.target_type,
            latitude: param.latitude,
            longitude: param.longitude,
            orientation: param.orientation,
            shape: param.shape,
            background_color: param.background_color,
            alphanumeric: param.alphanumeric,
            alphanumeric_color: param.alphanumeric_color,
            description: param.description,
        })
    }

    pub fn id(&self) -> Option<i32> {
        self.id
    }

    pub fn user(&self) -> Option<i32> {
        self.user
    }

    pub fn target_type(&self) -> &str {
        &self.target_type
    }

    /// Latitude and longitude, present together or not at all.
    pub fn position(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }

    pub fn orientation(&self) -> Option<&str> {
        self.orientation.as_deref()
    }

    pub fn shape(&self) -> Option<&str> {
        self.shape.as_deref()
    }

    pub fn background_color(&self) -> Option<&str> {
        self.background_color.as_deref()
    }

    pub fn alphanumeric(&self) -> Option<&str> {
        self.alphanumeric.as_deref()
    }

    pub fn alphanumeric_color(&self) -> Option<&str> {
        self.alphanumeric_color.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

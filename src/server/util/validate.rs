use crate::server::error::validation::ValidationError;

/// Checks that a value lies within an inclusive range.
///
/// NaN never satisfies the range.
///
/// # Arguments
/// - `field` - Field name reported in the error
/// - `value` - Value to check
/// - `min` - Inclusive lower bound
/// - `max` - Inclusive upper bound
///
/// # Returns
/// - `Ok(())` - Value is within `[min, max]`
/// - `Err(ValidationError::OutOfRange)` - Value is outside the range or NaN
pub fn check_bounds(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), ValidationError> {
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

pub fn check_latitude(lat: f64) -> Result<(), ValidationError> {
    check_bounds("latitude", lat, -90.0, 90.0)
}

pub fn check_longitude(lon: f64) -> Result<(), ValidationError> {
    check_bounds("longitude", lon, -180.0, 180.0)
}

pub fn check_heading(heading: f64) -> Result<(), ValidationError> {
    check_bounds("uas_heading", heading, 0.0, 360.0)
}

/// Checks that a size (radius, height) is non-negative.
pub fn check_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    check_bounds(field, value, 0.0, f64::INFINITY)
}

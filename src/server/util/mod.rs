//! Small helpers shared across the server layers.

pub mod clock;
pub mod validate;

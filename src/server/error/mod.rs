//! Error types for the interop server.
//!
//! `AppError` is the top-level error returned by services and the report binary. It wraps
//! the domain-specific error enums below alongside store and serialization failures so that
//! `?` can be used across layer boundaries. Undefined rate metrics are not errors; see
//! `server::model::rates::Rates::NoData`.

pub mod config;
pub mod validation;

use thiserror::Error;

use crate::server::error::{config::ConfigError, validation::ValidationError};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion. Store errors are propagated
/// unmodified so that callers can decide on retry policy.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// A value object or time period was constructed from out-of-range input.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Failure to serialize a report for output.
    #[error(transparent)]
    SerializeErr(#[from] serde_json::Error),

    /// Requested record does not exist.
    ///
    /// # Fields
    /// - Message describing what was not found
    #[error("{0}")]
    NotFound(String),
}

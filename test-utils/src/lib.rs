//! Interop Test Utils
//!
//! Provides shared testing utilities for building tests against the interop data layer.
//! This crate offers a builder pattern for creating test contexts with in-memory SQLite
//! databases and factories for inserting users and access logs.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_telemetry() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_access_log_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let user = factory::create_user(db).await?;
//!     factory::create_uas_telemetry(db, user.id, Utc::now()).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;

//! Access-log storage and rate analysis.
//!
//! This module contains the backend of the interop server's judging support: recording
//! per-user access logs (telemetry uploads, server info requests, takeoffs and landings)
//! and computing how regularly each user reported over a set of time periods.
//!
//! # Architecture
//!
//! - **Service Layer** (`service/`) - Orchestrates repositories, the clock and rate computation
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, validated values and the rate algorithm
//! - **Error Layer** (`error/`) - Application error types
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Startup** (`startup`) - Logging and database initialization
//! - **Util** (`util/`) - Clock abstraction and range checks
//!
//! # Call Flow
//!
//! 1. **Caller** supplies a user and the periods to judge
//! 2. **Service** rejects undefined inputs (no periods, open periods) early
//! 3. **Data** fetches each period's logs in timestamp order
//! 4. **Model** derives gap statistics from periods and logs

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod util;

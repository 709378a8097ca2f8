//! Access-log rate analysis for the interop server.
//!
//! Competing systems push telemetry and pull server info. Each of those accesses is logged
//! per user, and judges later ask whether a system kept up the required cadence. This crate
//! records those logs and computes the maximum and mean gap between them over arbitrary
//! time periods such as a team's flights.

pub mod model;
pub mod server;

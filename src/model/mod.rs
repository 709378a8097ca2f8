//! Serializable data transfer objects for reports.

pub mod report;

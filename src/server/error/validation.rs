use thiserror::Error;

/// Input contract violations raised when constructing validated values.
///
/// These are raised at construction time so that the rate engine and the store never see
/// out-of-range coordinates, headings or malformed periods.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Numeric field outside its inclusive range, or NaN.
    #[error("{field} ({value}) out of range [{min}, {max}]")]
    OutOfRange {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f64,
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
    },

    /// Only one of a latitude/longitude pair was provided.
    #[error("latitude and longitude must be provided together")]
    PartialPosition,

    /// Target alphanumeric is not a single ASCII letter or digit.
    #[error("provided alphanumeric is not valid: {0}")]
    InvalidAlphanumeric(String),

    /// Timestamp string could not be parsed as RFC 3339.
    #[error("failed to parse {field} timestamp '{value}': {source}")]
    InvalidTimestamp {
        /// Name of the offending field
        field: &'static str,
        /// The string that failed to parse
        value: String,
        /// Underlying chrono parse error
        #[source]
        source: chrono::ParseError,
    },

    /// Bounded time period whose end precedes its start.
    #[error("time period ends ({end}) before it starts ({start})")]
    InvertedPeriod {
        /// Period start as RFC 3339
        start: String,
        /// Period end as RFC 3339
        end: String,
    },
}

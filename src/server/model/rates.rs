//! Inter-event gap statistics over a set of time periods.
//!
//! The statistic used to judge whether a client kept up a required reporting cadence is the
//! maximum and mean gap between consecutive points of interest. Within each period the points
//! are the period start, every log in the period, and the period end, so silence at either
//! edge of a period counts against the client.

use crate::{
    model::report::RatesDto,
    server::model::{
        access_log::AccessLog,
        time_period::{seconds_between, TimePeriod},
    },
};

/// Why no rate could be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoDataReason {
    /// No periods were supplied.
    NoPeriods,
    /// At least one supplied period has no end.
    OpenPeriod,
}

impl NoDataReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoPeriods => "no_periods",
            Self::OpenPeriod => "open_period",
        }
    }
}

/// Result of a rate computation.
///
/// `NoData` means the metric is undefined for the supplied periods. It must be read as
/// "cannot judge", never as a zero gap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rates {
    /// Gap statistics in seconds.
    Computed { max_gap: f64, avg_gap: f64 },
    /// The metric is undefined for the supplied periods.
    NoData(NoDataReason),
}

impl Rates {
    /// Returns why rates cannot be computed over `periods`, if anything.
    ///
    /// A single open period makes the whole computation undefined; it is not skipped.
    pub fn undefined_reason(periods: &[TimePeriod]) -> Option<NoDataReason> {
        if periods.is_empty() {
            return Some(NoDataReason::NoPeriods);
        }

        periods
            .iter()
            .any(|period| matches!(period, TimePeriod::Unbounded { .. }))
            .then_some(NoDataReason::OpenPeriod)
    }

    /// Computes gap statistics from periods and their already-fetched logs.
    ///
    /// `logs[i]` holds the logs of `periods[i]` in ascending timestamp order. Missing trailing
    /// lists are treated as empty. Gaps are not clamped: a log outside its period or out of
    /// order yields a negative gap, which is kept in the statistic and logged.
    ///
    /// # Arguments
    /// - `periods` - Non-overlapping periods to compute over
    /// - `logs` - Per-period logs, parallel to `periods`
    ///
    /// # Returns
    /// - `Rates::Computed` - Max and mean gap in seconds
    /// - `Rates::NoData` - No periods, or any period still open
    pub fn compute(periods: &[TimePeriod], logs: &[Vec<AccessLog>]) -> Self {
        if let Some(reason) = Self::undefined_reason(periods) {
            return Self::NoData(reason);
        }

        let mut gaps = Vec::new();
        for (ix, period) in periods.iter().enumerate() {
            let TimePeriod::Bounded { start, end } = *period else {
                return Self::NoData(NoDataReason::OpenPeriod);
            };

            let mut cursor = start;
            for log in logs.get(ix).map(Vec::as_slice).unwrap_or_default() {
                gaps.push(seconds_between(cursor, log.timestamp));
                cursor = log.timestamp;
            }
            gaps.push(seconds_between(cursor, end));
        }

        Self::from_gaps(&gaps)
    }

    /// Max and mean of a gap collection.
    fn from_gaps(gaps: &[f64]) -> Self {
        if gaps.is_empty() {
            return Self::NoData(NoDataReason::NoPeriods);
        }

        let negative = gaps.iter().filter(|gap| **gap < 0.0).count();
        if negative > 0 {
            tracing::warn!(
                negative,
                total = gaps.len(),
                "Negative gaps in rate computation, logs are out of order or outside their period"
            );
        }

        let max_gap = gaps.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let avg_gap = gaps.iter().sum::<f64>() / gaps.len() as f64;

        Self::Computed { max_gap, avg_gap }
    }

    pub fn max_gap(&self) -> Option<f64> {
        match *self {
            Self::Computed { max_gap, .. } => Some(max_gap),
            Self::NoData(_) => None,
        }
    }

    pub fn avg_gap(&self) -> Option<f64> {
        match *self {
            Self::Computed { avg_gap, .. } => Some(avg_gap),
            Self::NoData(_) => None,
        }
    }

    /// Converts the result to its serializable form for reports.
    pub fn into_dto(self) -> RatesDto {
        match self {
            Self::Computed { max_gap, avg_gap } => RatesDto {
                max_gap: Some(max_gap),
                avg_gap: Some(avg_gap),
                no_data: None,
            },
            Self::NoData(reason) => RatesDto {
                max_gap: None,
                avg_gap: None,
                no_data: Some(reason.as_str().to_string()),
            },
        }
    }
}

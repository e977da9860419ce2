//! Error taxonomy for the analysis core.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors surfaced by series ingestion and parameter validation.
///
/// Insufficient history is deliberately not represented here: a series
/// shorter than an indicator's lookback yields undefined leading values,
/// which is a normal data condition for young listings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// A bar whose prices are non-positive or violate
    /// `low <= open,close <= high`, rejected when the series is built.
    #[error("invalid bar on {date}: {reason}")]
    InvalidBar { date: NaiveDate, reason: String },

    /// Bars must be strictly increasing by date.
    #[error("bars out of order: {prev} is not before {next}")]
    OutOfOrder { prev: NaiveDate, next: NaiveDate },

    /// A period, threshold, or weight outside its accepted bounds, rejected
    /// before any computation starts.
    #[error("parameter out of range: {name} = {value} ({constraint})")]
    ParameterOutOfRange {
        name: &'static str,
        value: f64,
        constraint: &'static str,
    },
}

impl AnalysisError {
    pub(crate) fn parameter(name: &'static str, value: f64, constraint: &'static str) -> Self {
        Self::ParameterOutOfRange {
            name,
            value,
            constraint,
        }
    }
}

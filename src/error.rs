//! Error taxonomy for report construction and series analysis

use thiserror::Error;

/// Errors raised by the report model and the statistics pipeline
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// A raw record could not be converted into a [`crate::report::Report`]
    #[error("Malformed report: {0}")]
    MalformedReport(String),

    /// Statistics were requested for a series with no reports
    #[error("Cannot compute statistics for an empty series")]
    EmptySeries,

    /// A series mixes test names or report kinds
    #[error("Mixed series: expected {expected}, found {found}")]
    MixedSeries { expected: String, found: String },

    /// Threshold configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for the analysis core
pub type Result<T> = std::result::Result<T, AnalysisError>;

//! Error types for quality analysis.

use thiserror::Error;

/// Result type for quality operations.
pub type QualityResult<T> = Result<T, QualityError>;

/// Errors that can occur when assembling quality results.
#[derive(Debug, Error)]
pub enum QualityError {
    /// A field expected in the store was never registered.
    #[error("Quality field `{name}` is not registered in the store")]
    MissingField {
        /// Name of the missing field.
        name: String,
    },

    /// A metric failed to compute or cache while building a report.
    #[error("Quality metric `{name}` was degraded during analysis")]
    DegradedMetric {
        /// Field name of the degraded metric.
        name: String,
    },

    /// A field has the wrong number of values for the mesh it describes.
    #[error("Quality field `{name}` has {actual} values, expected {expected}")]
    FieldSizeMismatch {
        /// Name of the offending field.
        name: String,
        /// Number of values found.
        actual: usize,
        /// Number of values expected.
        expected: usize,
    },
}

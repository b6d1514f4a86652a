//! Error types for geolca

use thiserror::Error;

/// Main error type for impact-model operations.
///
/// Every fallible operation in the engine surfaces one of these variants to
/// the caller; nothing is printed and nothing terminates the process.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// The backing coefficient tables for an archetype do not exist.
    ///
    /// Not retried internally: the caller must run the external data
    /// preparation step for this archetype and invoke the engine again.
    #[error("no coefficient data found for archetype `{0}`")]
    MissingCoefficientData(String),

    /// The coefficient tables for an archetype are inconsistent.
    ///
    /// The nine tables disagree in shape or category labels, a coefficient
    /// table carries a parameter reference where only fitted constants are
    /// allowed, a file cannot be decoded, or the loaded shape contradicts
    /// the archetype descriptor. Always a data-preparation defect.
    #[error("malformed coefficient table `{table}` for archetype `{archetype}`: {reason}")]
    MalformedCoefficientTable {
        /// Archetype whose tables are inconsistent.
        archetype: String,
        /// Name of the offending table (`alpha`..`w` or `valid_ranges`).
        table: String,
        /// Human-readable description of the inconsistency.
        reason: String,
    },

    /// A supplied parameter value falls outside its literature-valid range.
    ///
    /// The regression fit is not considered reliable beyond the registered
    /// bounds, so the whole call is aborted with no partial results.
    #[error("{label} of {value} outside valid range [{min}-{max}]")]
    OutOfRangeParameter {
        /// Parameter key as supplied by the caller.
        name: String,
        /// The offending value.
        value: f64,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
        /// Human-readable parameter label from the valid-range table.
        label: String,
    },

    /// A coefficient table references a parameter the caller did not supply.
    #[error("coefficient table references unknown parameter `{0}`")]
    UnknownParameterReference(String),
}

/// Result type alias for impact-model operations.
pub type Result<T> = std::result::Result<T, EngineError>;

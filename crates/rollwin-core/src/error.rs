//! Error types for operator lookup.
//!
//! The compute paths themselves never fail: degenerate input and
//! under-determined windows are encoded in the output data. The only
//! fallible operation is resolving an operator name for callers that prefer
//! `Result` propagation over checking an `Option`.

use thiserror::Error;

/// Result type alias for operator resolution.
pub type Result<T> = core::result::Result<T, OperatorError>;

/// Errors that can occur when resolving operators by name.
#[derive(Debug, Error)]
pub enum OperatorError {
    /// No operator is registered under the requested name.
    #[error("no operator registered under name '{0}'")]
    UnknownOperator(String),
}

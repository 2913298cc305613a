//! Error types for the numeric primitives
//!
//! Provides the error type shared by the root finders and the generic
//! numeric helpers. Distribution-level errors wrap this type.

use thiserror::Error;

/// Core error type for numeric primitives
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A root finder could not enclose the root
    #[error("Bracket error: {0}")]
    Bracket(String),

    /// A root finder ran out of iterations before reaching its tolerance
    #[error("Root finding did not converge after {iterations} iterations (best estimate {estimate})")]
    Convergence { iterations: u32, estimate: f64 },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

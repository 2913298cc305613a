//! Error types for distribution construction and evaluation

use crate::evaluation::{Operation, Warning};
use thiserror::Error;

/// Errors that can occur when building or querying a distribution
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Probability and rate sequences differ in length
    #[error("Got {probabilities} probabilities but {rates} rates; the sequences must have equal length")]
    LengthMismatch { probabilities: usize, rates: usize },

    /// No mixture components were supplied
    #[error("At least one phase is required")]
    NoComponents,

    /// A rate is zero, negative, NaN or infinite
    #[error("Rate {value} at index {index} must be finite and positive")]
    InvalidRate { index: usize, value: f64 },

    /// A probability is negative, NaN or infinite
    #[error("Probability {value} at index {index} must be finite and non-negative")]
    InvalidProbability { index: usize, value: f64 },

    /// Every probability is zero
    #[error("At least one phase probability must be positive")]
    ZeroProbabilities,

    /// Argument outside the conventional domain of the operation
    #[error("{operation}: argument {argument} is outside the domain {domain}")]
    Domain {
        operation: Operation,
        argument: f64,
        domain: &'static str,
    },

    /// Numeric primitive error (bracketing, convergence)
    #[error("Core computation error: {0}")]
    Core(#[from] hyperexp_core::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether this error was raised while constructing a distribution
    pub fn is_construction(&self) -> bool {
        matches!(
            self,
            Error::LengthMismatch { .. }
                | Error::NoComponents
                | Error::InvalidRate { .. }
                | Error::InvalidProbability { .. }
                | Error::ZeroProbabilities
        )
    }
}

impl From<Warning> for Error {
    fn from(warning: Warning) -> Self {
        match warning {
            Warning::Domain {
                operation,
                argument,
            } => Error::Domain {
                operation,
                argument,
                domain: operation.domain(),
            },
            Warning::Convergence {
                iterations,
                estimate,
                ..
            } => Error::Core(hyperexp_core::Error::Convergence {
                iterations,
                estimate,
            }),
        }
    }
}

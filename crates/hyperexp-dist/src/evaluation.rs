//! Evaluation results with non-fatal warnings
//!
//! Queries never corrupt a distribution, so anomalies are reported alongside
//! the value instead of aborting: an argument outside the domain is clamped
//! to the boundary value, and a quantile solve that runs out of iterations
//! still returns its best estimate.

use std::fmt;

/// Distribution query that produced a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Pdf,
    Cdf,
    Survival,
    Quantile,
    InverseSurvival,
    Hazard,
    CumulativeHazard,
}

impl Operation {
    /// Conventional domain of the argument
    pub fn domain(self) -> &'static str {
        match self {
            Operation::Quantile | Operation::InverseSurvival => "[0, 1]",
            _ => "[0, +inf)",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::Pdf => "pdf",
            Operation::Cdf => "cdf",
            Operation::Survival => "survival",
            Operation::Quantile => "quantile",
            Operation::InverseSurvival => "inverse survival",
            Operation::Hazard => "hazard",
            Operation::CumulativeHazard => "cumulative hazard",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Non-fatal anomaly observed during an evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Warning {
    /// Argument outside the domain; the boundary value was returned
    Domain { operation: Operation, argument: f64 },
    /// Root finder exhausted its budget; the value is approximate
    Convergence {
        operation: Operation,
        iterations: u32,
        estimate: f64,
    },
}

impl Warning {
    pub fn operation(&self) -> Operation {
        match *self {
            Warning::Domain { operation, .. } | Warning::Convergence { operation, .. } => {
                operation
            }
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::Domain {
                operation,
                argument,
            } => write!(
                f,
                "{operation}: argument {argument} outside {}, returning boundary value",
                operation.domain()
            ),
            Warning::Convergence {
                operation,
                iterations,
                estimate,
            } => write!(
                f,
                "{operation}: no convergence after {iterations} iterations, approximate result {estimate}"
            ),
        }
    }
}

/// Value of a query plus the warning raised while computing it, if any
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation<T> {
    pub value: T,
    pub warning: Option<Warning>,
}

impl<T> Evaluation<T> {
    pub fn exact(value: T) -> Self {
        Self {
            value,
            warning: None,
        }
    }

    pub fn flagged(value: T, warning: Warning) -> Self {
        Self {
            value,
            warning: Some(warning),
        }
    }

    /// Whether the value was computed without any anomaly
    pub fn is_exact(&self) -> bool {
        self.warning.is_none()
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Evaluation<U> {
        Evaluation {
            value: f(self.value),
            warning: self.warning,
        }
    }
}

//! Evaluation policies
//!
//! Controls how root finders terminate and what happens when an evaluation
//! hits an argument outside the conventional domain or fails to converge.
//! Both structs deserialize from partial documents, missing fields take
//! their defaults.

use serde::{Deserialize, Serialize};

/// What to do when an evaluation anomaly is detected
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorAction {
    /// Return the clamped value and forget about it
    Ignore,
    /// Return the clamped value, record the warning and log it
    #[default]
    Warn,
    /// Turn the anomaly into an error
    Error,
}

/// Termination settings for the bracketing root finders
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Iteration budget for the refinement phase
    pub max_iterations: u32,
    /// Relative tolerance expressed in multiples of machine epsilon
    pub tolerance_factor: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: 200,
            tolerance_factor: 4.0,
        }
    }
}

impl SolverConfig {
    /// Override the iteration budget
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Override the tolerance factor
    pub fn with_tolerance_factor(mut self, tolerance_factor: f64) -> Self {
        self.tolerance_factor = tolerance_factor;
        self
    }
}

/// How a distribution reports evaluation anomalies
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorPolicy {
    /// Arguments outside the conventional domain (negative `x`, `p ∉ [0, 1]`, NaN)
    pub domain: ErrorAction,
    /// Root finder exhausted its budget
    pub convergence: ErrorAction,
    /// Root finder settings
    pub solver: SolverConfig,
}

impl ErrorPolicy {
    /// Policy that never reports anything
    pub fn silent() -> Self {
        Self {
            domain: ErrorAction::Ignore,
            convergence: ErrorAction::Ignore,
            solver: SolverConfig::default(),
        }
    }

    /// Policy that turns every anomaly into an error
    pub fn strict() -> Self {
        Self {
            domain: ErrorAction::Error,
            convergence: ErrorAction::Error,
            solver: SolverConfig::default(),
        }
    }

    /// Replace the solver settings
    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }
}

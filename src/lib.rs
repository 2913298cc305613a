//! # hyperexp
//!
//! The hyperexponential distribution: a probabilistic mixture of exponential
//! phases, commonly used to model service and inter-arrival times whose
//! coefficient of variation exceeds one.
//!
//! This crate re-exports the workspace members:
//!
//! - [`core`]: the [`Real`](core::Real) precision trait, exponential
//!   primitives, root finders and error policies
//! - [`dist`]: the [`Hyperexponential`] distribution and its helpers
//!
//! ## Quick Start
//!
//! ```rust
//! use hyperexp::prelude::*;
//!
//! let dist: Hyperexponential<f64> = Hyperexponential::new([0.2, 0.3, 0.5], [0.5, 1.0, 1.5])?;
//!
//! let mean = dist.mean();
//! assert!((mean - 1.033_333_333_333_333_2).abs() < 1e-12);
//!
//! // high-percentile response time
//! let p99 = dist.quantile(0.99);
//! assert!((dist.sf(p99) - 0.01).abs() < 1e-12);
//! # Ok::<(), hyperexp::Error>(())
//! ```
//!
//! ## Features
//!
//! - `parallel`: batch evaluation on rayon threads

pub use hyperexp_core as core;
pub use hyperexp_dist as dist;

pub use hyperexp_dist::{
    batch, ContinuousDistribution, Error, Evaluation, Exponential, Hyperexponential,
    HyperexponentialBuilder, Operation, Phase, Result, Warning,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use hyperexp_core::RealConcept;
    pub use hyperexp_dist::prelude::*;
}

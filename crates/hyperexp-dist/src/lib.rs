//! Hyperexponential distribution
//!
//! A hyperexponential random variable is a probabilistic mixture of `K`
//! exponential phases. This crate provides the distribution itself, its
//! single-phase special case and the evaluation helpers around them:
//!
//! 1. **Construction** - validated, normalized parameters via
//!    [`Hyperexponential::new`] or the type-state [`HyperexponentialBuilder`]
//! 2. **Evaluation** - density, CDF, survival, quantiles, hazard and moments
//!    through the [`ContinuousDistribution`] trait
//! 3. **Reporting** - `_checked` variants return an [`Evaluation`] carrying
//!    any [`Warning`], or an [`Error`] when the [`ErrorPolicy`] says so
//! 4. **Batches** - [`batch::evaluate`] maps one operation over a slice,
//!    optionally on rayon threads with the `parallel` feature
//!
//! Everything is generic over [`Real`], so `f32`, `f64` and the
//! [`RealConcept`](hyperexp_core::RealConcept) archetype share one code path.
//!
//! # Example
//!
//! ```rust
//! use hyperexp_dist::prelude::*;
//!
//! let dist: Hyperexponential<f64> = Hyperexponential::new([2.0, 3.0, 5.0], [0.5, 1.0, 1.5])?;
//! assert_eq!(dist.probabilities(), vec![0.2, 0.3, 0.5]);
//!
//! let p = dist.cdf(1.0);
//! assert!((p - 0.656_764_955_631_825_7).abs() < 1e-12);
//! assert!((dist.quantile(p) - 1.0).abs() < 1e-12);
//!
//! // out-of-domain arguments are clamped and reported
//! let eval = dist.cdf_checked(-1.0)?;
//! assert_eq!(eval.value, 0.0);
//! assert!(!eval.is_exact());
//! # Ok::<(), hyperexp_dist::Error>(())
//! ```

pub mod batch;
pub mod builder;
pub mod error;
pub mod evaluation;
pub mod exponential;
pub mod hyperexponential;
pub mod moments;
pub mod traits;

pub use builder::HyperexponentialBuilder;
pub use error::{Error, Result};
pub use evaluation::{Evaluation, Operation, Warning};
pub use exponential::Exponential;
pub use hyperexponential::{Hyperexponential, Phase};
pub use moments::CentralMoments;
pub use traits::ContinuousDistribution;

pub use hyperexp_core::{ErrorAction, ErrorPolicy, ExecutionStrategy, Real, SolverConfig};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ContinuousDistribution, Evaluation, Exponential, Hyperexponential,
        HyperexponentialBuilder, Operation, Warning,
    };
    pub use hyperexp_core::{ErrorAction, ErrorPolicy, ExecutionStrategy, Real, SolverConfig};
}

//! Numeric foundations for hyperexponential and related distributions
//!
//! This crate provides the collaborators a mixture distribution is built
//! from, all generic over the floating-point representation:
//!
//! 1. **Real numbers** - the [`Real`] capability trait and the
//!    [`RealConcept`] archetype used to check generic code
//! 2. **Primitives** - single-rate exponential density, CDF and survival
//! 3. **Root finding** - bracket expansion and safeguarded Newton/bisection
//! 4. **Policies** - serde-configurable solver and error-reporting settings
//!
//! # Example
//!
//! ```rust
//! use hyperexp_core::{math::distributions::exponential, roots, SolverConfig};
//!
//! // Invert the exponential CDF numerically and compare with the closed form
//! let rate = 1.5;
//! let target = 0.75;
//! let f = |x: f64| exponential::cdf(rate, x) - target;
//! let bracket = roots::expand_bracket(f, 0.0, 1.0).unwrap();
//! let root = roots::bisect(f, bracket, &SolverConfig::default());
//!
//! assert!(root.converged);
//! assert!((root.value - exponential::quantile(rate, target)).abs() < 1e-12);
//! ```

pub mod error;
pub mod execution;
pub mod math;
pub mod numeric;
pub mod policy;
pub mod roots;

pub use error::{Error, Result};
pub use execution::{map_slice, ExecutionStrategy};
pub use numeric::{epsilon, infinity_or_max, max_value, min_value, Real, RealConcept};
pub use policy::{ErrorAction, ErrorPolicy, SolverConfig};
pub use roots::{Bracket, Root};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ErrorAction, ErrorPolicy, ExecutionStrategy, Real, RealConcept, Result, SolverConfig,
    };

    pub use crate::error::Error;
}

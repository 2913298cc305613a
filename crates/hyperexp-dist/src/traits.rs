//! Distribution traits
//!
//! A small accessor-style interface shared by the single-rate exponential and
//! the hyperexponential mixture, so tests and batch helpers can treat them
//! uniformly.

use hyperexp_core::Real;

/// Continuous univariate distribution over a [`Real`] type
///
/// Every method is a pure function of the distribution's parameters. The
/// provided methods derive the secondary quantities from the required ones.
pub trait ContinuousDistribution<T: Real>: Send + Sync {
    /// Mathematical range `(lower, upper)` of the random variable
    fn range(&self) -> (T, T);

    /// Attainable interval `(min_value, max_value)` for the type
    fn support(&self) -> (T, T);

    /// Probability density at `x`
    fn pdf(&self, x: T) -> T;

    /// Cumulative probability `P(X <= x)`
    fn cdf(&self, x: T) -> T;

    /// Survival probability `P(X > x)`
    #[doc(alias = "survival")]
    fn sf(&self, x: T) -> T;

    /// Inverse of [`cdf`](Self::cdf)
    fn quantile(&self, p: T) -> T;

    /// Inverse of [`sf`](Self::sf)
    #[doc(alias = "inverse_survival")]
    fn isf(&self, q: T) -> T;

    fn mean(&self) -> T;

    fn variance(&self) -> T;

    fn skewness(&self) -> T;

    /// Fourth standardized moment (3 for a normal distribution)
    fn kurtosis(&self) -> T;

    fn mode(&self) -> T;

    fn std_dev(&self) -> T {
        self.variance().sqrt()
    }

    fn kurtosis_excess(&self) -> T {
        self.kurtosis() - T::constant(3.0)
    }

    fn median(&self) -> T {
        self.quantile(T::constant(0.5))
    }

    /// Hazard rate `pdf(x) / sf(x)`
    fn hazard(&self, x: T) -> T {
        self.pdf(x) / self.sf(x)
    }

    /// Cumulative hazard `-ln sf(x)`
    fn chf(&self, x: T) -> T {
        -self.sf(x).ln()
    }
}

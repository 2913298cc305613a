//! Mathematical primitives shared by the distributions
//!
//! This module provides the single-rate building blocks that mixture
//! distributions aggregate over their components.

/// Distribution-related mathematical functions
pub mod distributions {
    /// Exponential distribution with rate `λ`
    ///
    /// All functions assume `rate > 0`; validation is the caller's job.
    /// Negative arguments follow the support convention: density and CDF are
    /// zero, survival is one.
    pub mod exponential {
        use crate::numeric::Real;

        /// Density `λ·exp(-λx)`
        #[inline]
        pub fn pdf<T: Real>(rate: T, x: T) -> T {
            if x < T::zero() {
                return T::zero();
            }
            rate * (-rate * x).exp()
        }

        /// Cumulative probability `1 - exp(-λx)`, computed as `-expm1(-λx)`
        #[inline]
        pub fn cdf<T: Real>(rate: T, x: T) -> T {
            if x <= T::zero() {
                return T::zero();
            }
            -(-rate * x).exp_m1()
        }

        /// Survival probability `exp(-λx)`
        #[inline]
        pub fn sf<T: Real>(rate: T, x: T) -> T {
            if x <= T::zero() {
                return T::one();
            }
            (-rate * x).exp()
        }

        /// Inverse of [`cdf`], `-ln(1 - p)/λ` via `ln_1p`
        #[inline]
        pub fn quantile<T: Real>(rate: T, p: T) -> T {
            if p <= T::zero() {
                return T::zero();
            }
            if p >= T::one() {
                return crate::numeric::infinity_or_max();
            }
            -(-p).ln_1p() / rate
        }

        /// Inverse of [`sf`], `-ln(q)/λ`
        #[inline]
        pub fn isf<T: Real>(rate: T, q: T) -> T {
            if q >= T::one() {
                return T::zero();
            }
            if q <= T::zero() {
                return crate::numeric::infinity_or_max();
            }
            -q.ln() / rate
        }

        /// Raw moment `E[X^n] = n!/λ^n`
        pub fn raw_moment<T: Real>(rate: T, n: u32) -> T {
            (1..=n).fold(T::one(), |acc, k| acc * T::constant(f64::from(k)) / rate)
        }

    }
}

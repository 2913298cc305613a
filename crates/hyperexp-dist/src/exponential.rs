//! Exponential distribution
//!
//! The single-phase case of the hyperexponential family. It is a thin
//! validated wrapper around `hyperexp_core::math::distributions::exponential`
//! and serves as the reference a one-phase mixture must reproduce.

use crate::{error::Error, traits::ContinuousDistribution, Result};
use hyperexp_core::{infinity_or_max, math::distributions::exponential, Real};

/// Exponential distribution with rate `λ > 0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponential<T> {
    rate: T,
}

impl<T: Real> Exponential<T> {
    /// Create an exponential distribution, rejecting non-positive or non-finite rates
    pub fn new(rate: T) -> Result<Self> {
        if !(rate > T::zero()) || !rate.is_finite() {
            return Err(Error::InvalidRate {
                index: 0,
                value: rate.as_f64(),
            });
        }
        Ok(Self { rate })
    }

    pub fn rate(&self) -> T {
        self.rate
    }
}

impl<T: Real> ContinuousDistribution<T> for Exponential<T> {
    fn range(&self) -> (T, T) {
        (T::zero(), infinity_or_max())
    }

    fn support(&self) -> (T, T) {
        (T::min_positive_value(), T::max_value())
    }

    fn pdf(&self, x: T) -> T {
        exponential::pdf(self.rate, x)
    }

    fn cdf(&self, x: T) -> T {
        exponential::cdf(self.rate, x)
    }

    fn sf(&self, x: T) -> T {
        exponential::sf(self.rate, x)
    }

    fn quantile(&self, p: T) -> T {
        exponential::quantile(self.rate, p)
    }

    fn isf(&self, q: T) -> T {
        exponential::isf(self.rate, q)
    }

    fn mean(&self) -> T {
        self.rate.recip()
    }

    fn variance(&self) -> T {
        (self.rate * self.rate).recip()
    }

    fn skewness(&self) -> T {
        T::constant(2.0)
    }

    fn kurtosis(&self) -> T {
        T::constant(9.0)
    }

    fn mode(&self) -> T {
        T::zero()
    }

    fn hazard(&self, x: T) -> T {
        if x < T::zero() {
            return T::zero();
        }
        self.rate
    }

    fn chf(&self, x: T) -> T {
        if x <= T::zero() {
            return T::zero();
        }
        self.rate * x
    }
}

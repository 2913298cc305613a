//! Moments of an exponential mixture
//!
//! Central moments are accumulated per phase around the mixture mean. With
//! `m_i = 1/λ_i` and `d_i = m_i - μ`, phase `i` contributes
//!
//! - `m² + d²` to the variance,
//! - `d³ + 3d·m² + 2m³` to the third central moment,
//! - `d⁴ + 6d²·m² + 8d·m³ + 9m⁴` to the fourth.
//!
//! Every term is a sum of non-negative quantities except the odd powers of
//! `d`, so there is no `E[X²] - μ²` style cancellation when the phases are
//! close to each other.

use crate::hyperexponential::Phase;
use hyperexp_core::{math::distributions::exponential, Real};

/// Raw moment `E[X^n] = Σ p_i·n!/λ_i^n`
pub fn raw_moment<T: Real>(phases: &[Phase<T>], n: u32) -> T {
    selectable(phases).fold(T::zero(), |acc, phase| {
        acc + phase.probability() * exponential::raw_moment(phase.rate(), n)
    })
}

/// Mean and central moments of order two to four
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CentralMoments<T> {
    pub mean: T,
    pub variance: T,
    pub third: T,
    pub fourth: T,
}

impl<T: Real> CentralMoments<T> {
    /// Third standardized moment
    pub fn skewness(&self) -> T {
        self.third / self.variance.powf(T::constant(1.5))
    }

    /// Fourth standardized moment
    pub fn kurtosis(&self) -> T {
        self.fourth / (self.variance * self.variance)
    }
}

pub fn central_moments<T: Real>(phases: &[Phase<T>]) -> CentralMoments<T> {
    let mean = selectable(phases).fold(T::zero(), |acc, phase| {
        acc + phase.probability() * phase.mean()
    });

    let (three, six, eight, nine) = (
        T::constant(3.0),
        T::constant(6.0),
        T::constant(8.0),
        T::constant(9.0),
    );
    let mut variance = T::zero();
    let mut third = T::zero();
    let mut fourth = T::zero();
    for phase in selectable(phases) {
        let p = phase.probability();
        let m = phase.mean();
        let d = m - mean;
        let (m2, d2) = (m * m, d * d);
        variance += p * (m2 + d2);
        third += p * (d2 * d + three * d * m2 + T::constant(2.0) * m2 * m);
        fourth += p * (d2 * d2 + six * d2 * m2 + eight * d * m2 * m + nine * m2 * m2);
    }

    CentralMoments {
        mean,
        variance: variance.max(T::zero()),
        third,
        fourth,
    }
}

fn selectable<T: Real>(phases: &[Phase<T>]) -> impl Iterator<Item = &Phase<T>> {
    phases
        .iter()
        .filter(|phase| phase.probability() > T::zero())
}

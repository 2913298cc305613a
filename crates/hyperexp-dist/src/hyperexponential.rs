//! Hyperexponential distribution
//!
//! A mixture of `K` exponential phases: pick phase `i` with probability
//! `p_i`, then draw from an exponential with rate `λ_i`.
//!
//! # Numerical notes
//!
//! - The CDF sums `p_i·(1 - exp(-λ_i x))` with `expm1`, so small `x` does
//!   not cancel against one.
//! - Quantiles have no closed form for `K > 1`. The lower half of the
//!   probability range is inverted on the CDF and the upper half on the
//!   survival function with the exact complement `1 - p`, so neither tail
//!   loses digits. Both use a doubling bracket followed by Newton steps
//!   safeguarded by bisection.
//! - Hazard and cumulative hazard factor out `exp(-λ_min x)` so they stay
//!   finite long after the survival function underflows.
//!
//! # Example
//!
//! ```rust
//! use hyperexp_dist::{ContinuousDistribution, Hyperexponential};
//!
//! let dist: Hyperexponential<f64> = Hyperexponential::new([0.2, 0.3, 0.5], [0.5, 1.0, 1.5]).unwrap();
//! assert!((dist.pdf(0.0) - 1.15).abs() < 1e-12);
//! assert!((dist.quantile(dist.cdf(2.0)) - 2.0).abs() < 1e-12);
//! ```

use crate::{
    error::Error,
    evaluation::{Evaluation, Operation, Warning},
    moments,
    traits::ContinuousDistribution,
    Result,
};
use hyperexp_core::{
    infinity_or_max, math::distributions::exponential, roots, ErrorAction, ErrorPolicy, Real,
};
use tracing::{debug, instrument, warn};

/// One exponential component of the mixture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Phase<T> {
    probability: T,
    rate: T,
}

impl<T: Real> Phase<T> {
    /// Selection probability after normalization
    pub fn probability(&self) -> T {
        self.probability
    }

    pub fn rate(&self) -> T {
        self.rate
    }

    /// Mean `1/λ` of this phase alone
    pub fn mean(&self) -> T {
        self.rate.recip()
    }
}

/// Which tail a quantile is solved on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tail {
    Lower,
    Upper,
}

/// Hyperexponential distribution
///
/// Immutable after construction. Equality compares the phases only; the
/// error policy changes how anomalies are reported, not the values.
#[derive(Debug, Clone)]
pub struct Hyperexponential<T> {
    phases: Vec<Phase<T>>,
    policy: ErrorPolicy,
}

impl<T: Real> PartialEq for Hyperexponential<T> {
    fn eq(&self, other: &Self) -> bool {
        self.phases == other.phases
    }
}

impl<T: Real> Default for Hyperexponential<T> {
    /// A single phase with rate one, i.e. the standard exponential
    fn default() -> Self {
        Self {
            phases: vec![Phase {
                probability: T::one(),
                rate: T::one(),
            }],
            policy: ErrorPolicy::default(),
        }
    }
}

impl<T: Real> Hyperexponential<T> {
    /// Create a distribution from phase probabilities and rates
    ///
    /// Probabilities are rescaled to sum to one unless they already do within
    /// summation drift. Validation order: lengths, rates, probabilities, and
    /// finally the all-zero check.
    pub fn new<P, R>(probabilities: P, rates: R) -> Result<Self>
    where
        P: IntoIterator<Item = T>,
        R: IntoIterator<Item = T>,
    {
        Self::from_parts(
            probabilities.into_iter().collect(),
            rates.into_iter().collect(),
            ErrorPolicy::default(),
        )
    }

    /// Create a distribution whose phases are equally likely
    pub fn from_rates<R>(rates: R) -> Result<Self>
    where
        R: IntoIterator<Item = T>,
    {
        let rates: Vec<T> = rates.into_iter().collect();
        let probabilities = vec![T::one(); rates.len()];
        Self::from_parts(probabilities, rates, ErrorPolicy::default())
    }

    pub(crate) fn from_parts(
        probabilities: Vec<T>,
        rates: Vec<T>,
        policy: ErrorPolicy,
    ) -> Result<Self> {
        if probabilities.len() != rates.len() {
            return Err(Error::LengthMismatch {
                probabilities: probabilities.len(),
                rates: rates.len(),
            });
        }
        if rates.is_empty() {
            return Err(Error::NoComponents);
        }
        if let Some((index, &value)) = rates
            .iter()
            .enumerate()
            .find(|(_, &r)| !(r > T::zero()) || !r.is_finite())
        {
            return Err(Error::InvalidRate {
                index,
                value: value.as_f64(),
            });
        }
        if let Some((index, &value)) = probabilities
            .iter()
            .enumerate()
            .find(|(_, &p)| !(p >= T::zero()) || !p.is_finite())
        {
            return Err(Error::InvalidProbability {
                index,
                value: value.as_f64(),
            });
        }
        if probabilities.iter().all(|&p| p == T::zero()) {
            return Err(Error::ZeroProbabilities);
        }

        let probabilities = normalize(probabilities);
        let phases = probabilities
            .into_iter()
            .zip(rates)
            .map(|(probability, rate)| Phase { probability, rate })
            .collect();
        Ok(Self { phases, policy })
    }

    /// Replace the error policy
    pub fn with_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &ErrorPolicy {
        &self.policy
    }

    pub fn phases(&self) -> &[Phase<T>] {
        &self.phases
    }

    pub fn num_phases(&self) -> usize {
        self.phases.len()
    }

    pub fn probabilities(&self) -> Vec<T> {
        self.phases.iter().map(|phase| phase.probability).collect()
    }

    pub fn rates(&self) -> Vec<T> {
        self.phases.iter().map(|phase| phase.rate).collect()
    }

    /// Raw moment `E[X^n] = Σ p_i·n!/λ_i^n`
    pub fn raw_moment(&self, n: u32) -> T {
        moments::raw_moment(&self.phases, n)
    }

    /// Density with the outcome of domain checks
    pub fn pdf_checked(&self, x: T) -> Result<Evaluation<T>> {
        self.resolve(self.eval_pdf(x))
    }

    /// Cumulative probability with the outcome of domain checks
    pub fn cdf_checked(&self, x: T) -> Result<Evaluation<T>> {
        self.resolve(self.eval_cdf(x))
    }

    /// Survival probability with the outcome of domain checks
    #[doc(alias = "survival")]
    pub fn sf_checked(&self, x: T) -> Result<Evaluation<T>> {
        self.resolve(self.eval_sf(x))
    }

    /// Quantile with domain and convergence reporting
    pub fn quantile_checked(&self, p: T) -> Result<Evaluation<T>> {
        self.resolve(self.eval_quantile(p))
    }

    /// Inverse survival with domain and convergence reporting
    #[doc(alias = "inverse_survival")]
    pub fn isf_checked(&self, q: T) -> Result<Evaluation<T>> {
        self.resolve(self.eval_isf(q))
    }

    pub fn hazard_checked(&self, x: T) -> Result<Evaluation<T>> {
        self.resolve(self.eval_hazard(x))
    }

    pub fn chf_checked(&self, x: T) -> Result<Evaluation<T>> {
        self.resolve(self.eval_chf(x))
    }

    /// Sum `p_i·f(phase)` over the phases that can actually be selected
    fn weighted_sum<F>(&self, f: F) -> T
    where
        F: Fn(&Phase<T>) -> T,
    {
        self.phases
            .iter()
            .filter(|phase| phase.probability > T::zero())
            .fold(T::zero(), |acc, phase| acc + phase.probability * f(phase))
    }

    /// Smallest rate among selectable phases, the one dominating the far tail
    fn slowest_rate(&self) -> T {
        self.phases
            .iter()
            .filter(|phase| phase.probability > T::zero())
            .fold(T::max_value(), |acc, phase| acc.min(phase.rate))
    }

    /// Largest rate among selectable phases, the one dominating near the origin
    fn fastest_rate(&self) -> T {
        self.phases
            .iter()
            .filter(|phase| phase.probability > T::zero())
            .fold(T::zero(), |acc, phase| acc.max(phase.rate))
    }

    fn density(&self, x: T) -> T {
        self.weighted_sum(|phase| exponential::pdf(phase.rate, x))
    }

    fn lower_tail(&self, x: T) -> T {
        self.weighted_sum(|phase| exponential::cdf(phase.rate, x))
            .min(T::one())
    }

    fn upper_tail(&self, x: T) -> T {
        self.weighted_sum(|phase| exponential::sf(phase.rate, x))
            .min(T::one())
    }

    /// `Σ p_i·g(λ_i)·exp(-(λ_i - λ_min)x)`, the tail sums with `exp(-λ_min x)` removed
    fn scaled_tail<F>(&self, x: T, g: F) -> T
    where
        F: Fn(T) -> T,
    {
        let slowest = self.slowest_rate();
        self.weighted_sum(|phase| {
            // the slowest phases carry weight one even at x = inf
            if phase.rate == slowest {
                g(phase.rate)
            } else {
                g(phase.rate) * (-(phase.rate - slowest) * x).exp()
            }
        })
    }

    fn domain_warning(operation: Operation, argument: T) -> Warning {
        Warning::Domain {
            operation,
            argument: argument.as_f64(),
        }
    }

    fn eval_pdf(&self, x: T) -> Evaluation<T> {
        if x.is_nan() {
            return Evaluation::flagged(x, Self::domain_warning(Operation::Pdf, x));
        }
        if x < T::zero() {
            return Evaluation::flagged(T::zero(), Self::domain_warning(Operation::Pdf, x));
        }
        Evaluation::exact(self.density(x))
    }

    fn eval_cdf(&self, x: T) -> Evaluation<T> {
        if x.is_nan() {
            return Evaluation::flagged(x, Self::domain_warning(Operation::Cdf, x));
        }
        if x < T::zero() {
            return Evaluation::flagged(T::zero(), Self::domain_warning(Operation::Cdf, x));
        }
        if x == T::zero() {
            return Evaluation::exact(T::zero());
        }
        Evaluation::exact(self.lower_tail(x))
    }

    fn eval_sf(&self, x: T) -> Evaluation<T> {
        if x.is_nan() {
            return Evaluation::flagged(x, Self::domain_warning(Operation::Survival, x));
        }
        if x < T::zero() {
            return Evaluation::flagged(T::one(), Self::domain_warning(Operation::Survival, x));
        }
        if x == T::zero() {
            return Evaluation::exact(T::one());
        }
        Evaluation::exact(self.upper_tail(x))
    }

    fn eval_hazard(&self, x: T) -> Evaluation<T> {
        if x.is_nan() {
            return Evaluation::flagged(x, Self::domain_warning(Operation::Hazard, x));
        }
        if x < T::zero() {
            return Evaluation::flagged(T::zero(), Self::domain_warning(Operation::Hazard, x));
        }
        let numerator = self.scaled_tail(x, |rate| rate);
        let denominator = self.scaled_tail(x, |_| T::one());
        Evaluation::exact(numerator / denominator)
    }

    fn eval_chf(&self, x: T) -> Evaluation<T> {
        let operation = Operation::CumulativeHazard;
        if x.is_nan() {
            return Evaluation::flagged(x, Self::domain_warning(operation, x));
        }
        if x < T::zero() {
            return Evaluation::flagged(T::zero(), Self::domain_warning(operation, x));
        }
        if x == T::zero() {
            return Evaluation::exact(T::zero());
        }
        let value = self.slowest_rate() * x - self.scaled_tail(x, |_| T::one()).ln();
        // summation drift can push tiny x just below zero; NaN passes through
        if value < T::zero() {
            return Evaluation::exact(T::zero());
        }
        Evaluation::exact(value)
    }

    fn eval_quantile(&self, p: T) -> Evaluation<T> {
        let operation = Operation::Quantile;
        if p.is_nan() {
            return Evaluation::flagged(p, Self::domain_warning(operation, p));
        }
        if p < T::zero() {
            return Evaluation::flagged(T::zero(), Self::domain_warning(operation, p));
        }
        if p > T::one() {
            return Evaluation::flagged(infinity_or_max(), Self::domain_warning(operation, p));
        }
        if p == T::zero() {
            return Evaluation::exact(T::zero());
        }
        if p == T::one() {
            return Evaluation::exact(infinity_or_max());
        }
        if p > T::constant(0.5) {
            self.invert(operation, Tail::Upper, T::one() - p)
        } else {
            self.invert(operation, Tail::Lower, p)
        }
    }

    fn eval_isf(&self, q: T) -> Evaluation<T> {
        let operation = Operation::InverseSurvival;
        if q.is_nan() {
            return Evaluation::flagged(q, Self::domain_warning(operation, q));
        }
        if q < T::zero() {
            return Evaluation::flagged(infinity_or_max(), Self::domain_warning(operation, q));
        }
        if q > T::one() {
            return Evaluation::flagged(T::zero(), Self::domain_warning(operation, q));
        }
        if q == T::one() {
            return Evaluation::exact(T::zero());
        }
        if q == T::zero() {
            return Evaluation::exact(infinity_or_max());
        }
        if q > T::constant(0.5) {
            self.invert(operation, Tail::Lower, T::one() - q)
        } else {
            self.invert(operation, Tail::Upper, q)
        }
    }

    /// Solve `cdf(x) = target` (lower tail) or `sf(x) = target` (upper tail)
    #[instrument(level = "debug", skip(self), fields(phases = self.phases.len()))]
    fn invert(&self, operation: Operation, tail: Tail, target: T) -> Evaluation<T> {
        let residual = |x: T| match tail {
            Tail::Lower => self.lower_tail(x) - target,
            Tail::Upper => target - self.upper_tail(x),
        };
        // Both starts are lower bounds of the root, so the bracket only grows
        // upwards and ends up as [x, 2x] around it:
        //   cdf(x) <= pdf(0)·x
        //   sf(x) >= exp(-λ_max·x)
        let start = match tail {
            Tail::Lower => target / self.density(T::zero()),
            Tail::Upper => -target.ln() / self.fastest_rate(),
        };
        let start = if start.is_finite() {
            start.max(T::min_positive_value())
        } else {
            T::one()
        };

        let bracket = match roots::expand_bracket(&residual, T::zero(), start) {
            Ok(bracket) => bracket,
            Err(err) => {
                debug!(%err, "could not bracket the quantile");
                let upper = infinity_or_max();
                return Evaluation::flagged(
                    upper,
                    Warning::Convergence {
                        operation,
                        iterations: 0,
                        estimate: upper.as_f64(),
                    },
                );
            }
        };

        let root = roots::newton_bisect(
            &residual,
            |x| self.density(x),
            bracket,
            &self.policy.solver,
        );
        debug!(
            iterations = root.iterations,
            converged = root.converged,
            value = root.value.as_f64(),
            "quantile solved"
        );
        if root.converged {
            Evaluation::exact(root.value)
        } else {
            Evaluation::flagged(
                root.value,
                Warning::Convergence {
                    operation,
                    iterations: root.iterations,
                    estimate: root.value.as_f64(),
                },
            )
        }
    }

    fn action_for(&self, warning: &Warning) -> ErrorAction {
        match warning {
            Warning::Domain { .. } => self.policy.domain,
            Warning::Convergence { .. } => self.policy.convergence,
        }
    }

    /// Apply the policy to a raw evaluation
    fn resolve(&self, evaluation: Evaluation<T>) -> Result<Evaluation<T>> {
        let Some(warning) = evaluation.warning else {
            return Ok(evaluation);
        };
        match self.action_for(&warning) {
            ErrorAction::Ignore => Ok(Evaluation::exact(evaluation.value)),
            ErrorAction::Warn => {
                warn!(%warning, "hyperexponential evaluation anomaly");
                Ok(evaluation)
            }
            ErrorAction::Error => Err(warning.into()),
        }
    }

    /// Unwrap an evaluation for the infallible API, logging unless ignored
    fn report(&self, evaluation: Evaluation<T>) -> T {
        if let Some(warning) = evaluation.warning {
            if self.action_for(&warning) != ErrorAction::Ignore {
                warn!(%warning, "hyperexponential evaluation anomaly");
            }
        }
        evaluation.value
    }
}

/// Rescale probabilities to sum to one
///
/// Already-normalized input (within `K·epsilon`) is returned untouched so
/// exact probabilities stay exact.
fn normalize<T: Real>(probabilities: Vec<T>) -> Vec<T> {
    let total = probabilities.iter().fold(T::zero(), |acc, &p| acc + p);
    let drift = T::epsilon() * T::constant(probabilities.len() as f64);
    if (total - T::one()).abs() <= drift {
        return probabilities;
    }
    debug!(
        phases = probabilities.len(),
        total = total.as_f64(),
        "normalizing phase probabilities"
    );
    if total.is_finite() {
        return probabilities.into_iter().map(|p| p / total).collect();
    }
    // sum overflowed: scale by the largest weight first
    let largest = probabilities.iter().fold(T::zero(), |acc, &p| acc.max(p));
    let scaled: Vec<T> = probabilities.into_iter().map(|p| p / largest).collect();
    let total = scaled.iter().fold(T::zero(), |acc, &p| acc + p);
    scaled.into_iter().map(|p| p / total).collect()
}

impl<T: Real> ContinuousDistribution<T> for Hyperexponential<T> {
    /// `(0, +inf)`, or `(0, max_value)` for types without an infinity
    fn range(&self) -> (T, T) {
        (T::zero(), infinity_or_max())
    }

    fn support(&self) -> (T, T) {
        (T::min_positive_value(), T::max_value())
    }

    fn pdf(&self, x: T) -> T {
        self.report(self.eval_pdf(x))
    }

    fn cdf(&self, x: T) -> T {
        self.report(self.eval_cdf(x))
    }

    fn sf(&self, x: T) -> T {
        self.report(self.eval_sf(x))
    }

    fn quantile(&self, p: T) -> T {
        self.report(self.eval_quantile(p))
    }

    fn isf(&self, q: T) -> T {
        self.report(self.eval_isf(q))
    }

    fn mean(&self) -> T {
        self.weighted_sum(|phase| phase.mean())
    }

    fn variance(&self) -> T {
        moments::central_moments(&self.phases).variance
    }

    fn skewness(&self) -> T {
        moments::central_moments(&self.phases).skewness()
    }

    fn kurtosis(&self) -> T {
        moments::central_moments(&self.phases).kurtosis()
    }

    /// Always zero: every phase density is decreasing
    fn mode(&self) -> T {
        T::zero()
    }

    fn hazard(&self, x: T) -> T {
        self.report(self.eval_hazard(x))
    }

    fn chf(&self, x: T) -> T {
        self.report(self.eval_chf(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exponential::Exponential;
    use approx::assert_relative_eq;
    use hyperexp_core::SolverConfig;

    fn reference() -> Hyperexponential<f64> {
        Hyperexponential::new([0.2, 0.3, 0.5], [0.5, 1.0, 1.5]).unwrap()
    }

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn test_validation_order() {
        let err = Hyperexponential::new([0.5, 0.5], [1.0]).unwrap_err();
        assert_eq!(err, Error::LengthMismatch { probabilities: 2, rates: 1 });

        let err = Hyperexponential::<f64>::new([], []).unwrap_err();
        assert_eq!(err, Error::NoComponents);

        // a bad rate is reported before a bad probability
        let err = Hyperexponential::new([-1.0, 0.5], [1.0, 0.0]).unwrap_err();
        assert_eq!(err, Error::InvalidRate { index: 1, value: 0.0 });

        let err = Hyperexponential::new([0.5, f64::NAN], [1.0, 2.0]).unwrap_err();
        assert!(matches!(err, Error::InvalidProbability { index: 1, .. }));

        let err = Hyperexponential::new([0.0, 0.0], [1.0, 2.0]).unwrap_err();
        assert_eq!(err, Error::ZeroProbabilities);
        assert!(err.is_construction());
    }

    #[test]
    fn test_rejects_non_finite_rates() {
        assert!(matches!(
            Hyperexponential::new([1.0], [f64::INFINITY]),
            Err(Error::InvalidRate { index: 0, .. })
        ));
        assert!(matches!(
            Hyperexponential::new([1.0, 1.0], [1.0, f64::NAN]),
            Err(Error::InvalidRate { index: 1, .. })
        ));
    }

    #[test]
    fn test_normalization() {
        let dist = Hyperexponential::new([2.0, 3.0, 5.0], [0.5, 1.0, 1.5]).unwrap();
        assert_eq!(dist, reference());
        let total: f64 = dist.probabilities().iter().sum();
        assert_relative_eq!(total, 1.0, max_relative = 1e-15);
    }

    #[test]
    fn test_normalized_input_is_kept_exactly() {
        let dist = reference();
        assert_eq!(dist.probabilities(), vec![0.2, 0.3, 0.5]);
        assert_eq!(dist.rates(), vec![0.5, 1.0, 1.5]);
        assert_eq!(dist.num_phases(), 3);
    }

    #[test]
    fn test_normalization_survives_overflowing_sum() {
        let dist = Hyperexponential::new([f64::MAX, f64::MAX], [1.0, 2.0]).unwrap();
        assert_eq!(dist.probabilities(), vec![0.5, 0.5]);
    }

    #[test]
    fn test_from_rates_and_default() {
        let dist = Hyperexponential::from_rates([1.0, 2.0, 4.0, 8.0]).unwrap();
        assert_eq!(dist.probabilities(), vec![0.25; 4]);
        let dist = Hyperexponential::<f64>::default();
        assert_eq!(dist.num_phases(), 1);
        assert_relative_eq!(dist.mean(), 1.0);
    }

    #[test]
    fn test_boundary_values() {
        let dist = reference();
        assert_relative_eq!(dist.pdf(0.0), 1.15, max_relative = 1e-15);
        assert_eq!(dist.cdf(0.0), 0.0);
        assert_eq!(dist.sf(0.0), 1.0);
        assert_eq!(dist.quantile(0.0), 0.0);
        assert!(dist.quantile(1.0).is_infinite());
        assert_eq!(dist.isf(1.0), 0.0);
        assert!(dist.isf(0.0).is_infinite());
        assert_eq!(dist.mode(), 0.0);
    }

    #[test]
    fn test_single_phase_matches_exponential() {
        let dist = Hyperexponential::new([1.0], [0.75]).unwrap();
        let exp = Exponential::new(0.75).unwrap();
        for &x in &[0.01, 0.5, 2.0, 10.0] {
            assert_relative_eq!(dist.pdf(x), exp.pdf(x), max_relative = 1e-14);
            assert_relative_eq!(dist.cdf(x), exp.cdf(x), max_relative = 1e-14);
            assert_relative_eq!(dist.sf(x), exp.sf(x), max_relative = 1e-14);
            assert_relative_eq!(dist.hazard(x), exp.hazard(x), max_relative = 1e-14);
        }
        for &p in &[1e-10, 0.1, 0.5, 0.9, 0.999999] {
            assert_relative_eq!(dist.quantile(p), exp.quantile(p), max_relative = 1e-12);
            assert_relative_eq!(dist.isf(p), exp.isf(p), max_relative = 1e-12);
        }
        assert_relative_eq!(dist.variance(), exp.variance(), max_relative = 1e-14);
        assert_relative_eq!(dist.skewness(), exp.skewness(), max_relative = 1e-12);
        assert_relative_eq!(dist.kurtosis(), exp.kurtosis(), max_relative = 1e-12);
    }

    #[test]
    fn test_zero_probability_phase_is_inert() {
        let with_dead = Hyperexponential::new([0.0, 1.0], [1e-300, 2.0]).unwrap();
        let exp = Exponential::new(2.0).unwrap();
        assert_relative_eq!(with_dead.mean(), exp.mean(), max_relative = 1e-15);
        assert_relative_eq!(with_dead.kurtosis(), 9.0, max_relative = 1e-12);
        assert_relative_eq!(with_dead.hazard(100.0), 2.0, max_relative = 1e-12);
    }

    #[test]
    fn test_far_tail_hazard_and_chf() {
        let dist = reference();
        // survival underflows long before the hazard settles on the slowest rate
        assert_eq!(dist.sf(5000.0), 0.0);
        assert_relative_eq!(dist.hazard(5000.0), 0.5, max_relative = 1e-12);
        assert_relative_eq!(dist.chf(5000.0), 2500.0 - 0.2f64.ln(), max_relative = 1e-12);
        assert_relative_eq!(dist.chf(1.0), -dist.sf(1.0).ln(), max_relative = 1e-12);
    }

    #[test]
    fn test_negative_arguments_are_clamped() {
        let dist = reference();
        assert_eq!(dist.pdf(-1.0), 0.0);
        assert_eq!(dist.cdf(-1.0), 0.0);
        assert_eq!(dist.sf(-1.0), 1.0);
        assert_eq!(dist.quantile(-0.5), 0.0);
        assert!(dist.quantile(1.5).is_infinite());
        assert!(dist.pdf(f64::NAN).is_nan());

        let checked = dist.cdf_checked(-1.0).unwrap();
        assert_eq!(checked.value, 0.0);
        assert_eq!(
            checked.warning,
            Some(Warning::Domain { operation: Operation::Cdf, argument: -1.0 })
        );
        assert!(dist.cdf_checked(1.0).unwrap().is_exact());
    }

    #[test]
    fn test_policy_controls_reporting() {
        init_tracing();
        let strict = reference().with_policy(ErrorPolicy::strict());
        assert!(matches!(
            strict.quantile_checked(2.0),
            Err(Error::Domain { operation: Operation::Quantile, .. })
        ));
        assert!(strict.quantile_checked(0.5).is_ok());
        // the infallible API still clamps
        assert_eq!(strict.pdf(-3.0), 0.0);

        let silent = reference().with_policy(ErrorPolicy::silent());
        let e = silent.sf_checked(-2.0).unwrap();
        assert!(e.is_exact());
        assert_eq!(e.value, 1.0);
    }

    #[test]
    fn test_convergence_warning() {
        init_tracing();
        let policy = ErrorPolicy::default().with_solver(SolverConfig::default().with_max_iterations(2));
        let dist = reference().with_policy(policy);
        let e = dist.quantile_checked(0.3).unwrap();
        assert!(matches!(
            e.warning,
            Some(Warning::Convergence { operation: Operation::Quantile, iterations: 2, .. })
        ));
        assert!(e.value > 0.0);

        let strict = reference().with_policy(ErrorPolicy::strict().with_solver(policy.solver));
        assert!(matches!(
            strict.isf_checked(0.3),
            Err(Error::Core(hyperexp_core::Error::Convergence { .. }))
        ));
    }

    #[test]
    fn test_extreme_quantiles() {
        let dist = reference();
        let tiny = 1e-300;
        let x = dist.quantile(tiny);
        assert!(x > 0.0);
        assert_relative_eq!(dist.cdf(x), tiny, max_relative = 1e-10);

        let x = dist.isf(1e-200);
        assert_relative_eq!(dist.sf(x), 1e-200, max_relative = 1e-10);

        let p = 1.0 - 1e-15;
        let x = dist.quantile(p);
        assert_relative_eq!(dist.sf(x), 1.0 - p, max_relative = 1e-10);
    }

    #[test]
    fn test_widely_spread_rates_converge() {
        for &scale in &[1e40, 1e50, 1e60] {
            let dist = Hyperexponential::new([0.9, 0.1], [scale, 1.0 / scale]).unwrap();

            // fast phase: the root sits far below the mean
            let expected = 4.5f64.ln() / scale;
            for e in [
                dist.isf_checked(0.3).unwrap(),
                dist.quantile_checked(0.7).unwrap(),
            ] {
                assert!(e.is_exact(), "{scale}: {:?}", e.warning);
                assert_relative_eq!(e.value, expected, max_relative = 1e-10);
                assert_relative_eq!(dist.sf(e.value), 0.3, max_relative = 1e-10);
            }

            let e = dist.quantile_checked(0.2).unwrap();
            assert!(e.is_exact());
            assert_relative_eq!(dist.cdf(e.value), 0.2, max_relative = 1e-10);

            // slow phase: the root sits far above the fast scale
            let e = dist.isf_checked(0.05).unwrap();
            assert!(e.is_exact());
            assert_relative_eq!(e.value, 2f64.ln() * scale, max_relative = 1e-10);
        }
    }

    #[test]
    fn test_infinite_argument() {
        let dist = reference();
        let inf = f64::INFINITY;
        assert_eq!(dist.pdf(inf), 0.0);
        assert_eq!(dist.cdf(inf), 1.0);
        assert_eq!(dist.sf(inf), 0.0);
        assert_eq!(dist.hazard(inf), 0.5);
        assert_eq!(dist.chf(inf), inf);
        assert!(dist.hazard_checked(inf).unwrap().is_exact());
    }

    #[test]
    fn test_median() {
        let dist = reference();
        assert_relative_eq!(dist.cdf(dist.median()), 0.5, max_relative = 1e-14);
    }
}

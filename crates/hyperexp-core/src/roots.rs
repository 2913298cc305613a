//! Bracketing root finders for monotone functions
//!
//! Inverting a CDF has no closed form once several exponential phases are
//! mixed, so quantiles are found numerically in two steps:
//!
//! 1. [`expand_bracket`] walks the upper end outwards by doubling until the
//!    increasing function changes sign.
//! 2. [`bisect`] or [`newton_bisect`] shrinks the bracket until the relative
//!    width drops under `tolerance_factor * epsilon`.
//!
//! Running out of iterations is not an error here: the best estimate is
//! returned with `converged == false` and the caller decides how loud to be.

use crate::{numeric::Real, policy::SolverConfig, Error, Result};
use tracing::{debug, instrument, trace};

/// Closed interval known to contain a sign change
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket<T> {
    pub lower: T,
    pub upper: T,
}

impl<T: Real> Bracket<T> {
    /// Create a bracket, rejecting reversed or NaN bounds
    pub fn new(lower: T, upper: T) -> Result<Self> {
        if !(lower <= upper) {
            return Err(Error::InvalidInput(format!(
                "bracket lower bound {lower} exceeds upper bound {upper}"
            )));
        }
        Ok(Self { lower, upper })
    }

    pub fn width(&self) -> T {
        self.upper - self.lower
    }

    pub fn contains(&self, x: T) -> bool {
        self.lower <= x && x <= self.upper
    }
}

/// Outcome of a refinement run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Root<T> {
    /// Best available estimate
    pub value: T,
    /// Iterations spent
    pub iterations: u32,
    /// Whether the tolerance was reached within the budget
    pub converged: bool,
}

impl<T: Real> Root<T> {
    fn converged(value: T, iterations: u32) -> Self {
        Self {
            value,
            iterations,
            converged: true,
        }
    }

    /// Treat a non-converged root as an error
    pub fn into_result(self) -> Result<T> {
        if self.converged {
            Ok(self.value)
        } else {
            Err(Error::Convergence {
                iterations: self.iterations,
                estimate: self.value.as_f64(),
            })
        }
    }
}

/// Find `[l, u]` with `f(l) < 0 <= f(u)` for an increasing `f`
///
/// `lower` must satisfy `f(lower) <= 0`. The trial upper bound starts at
/// `start` and its distance from `lower` doubles on every miss; each miss
/// also moves the lower bound up, so the returned bracket is at most twice
/// as wide as the last step.
#[instrument(level = "debug", skip_all)]
pub fn expand_bracket<T, F>(f: F, lower: T, start: T) -> Result<Bracket<T>>
where
    T: Real,
    F: Fn(T) -> T,
{
    if !(start > lower) || !start.is_finite() {
        return Err(Error::InvalidParameter(format!(
            "bracket start {start} must be finite and above {lower}"
        )));
    }
    let at_lower = f(lower);
    if !(at_lower <= T::zero()) {
        return Err(Error::Bracket(format!(
            "function is not non-positive at the lower bound {lower} (value {at_lower})"
        )));
    }

    let two = T::constant(2.0);
    let origin = lower;
    let mut lower = lower;
    let mut step = start - origin;
    let mut upper = start;
    let mut expansions = 0u32;
    loop {
        let value = f(upper);
        if value.is_nan() {
            return Err(Error::Bracket(format!("function is NaN at {upper}")));
        }
        if value >= T::zero() {
            debug!(expansions, upper = upper.as_f64(), "bracket found");
            return Ok(Bracket { lower, upper });
        }
        lower = upper;
        step = step * two;
        upper = origin + step;
        expansions += 1;
        if !upper.is_finite() {
            return Err(Error::Bracket(format!(
                "upper bound overflowed after {expansions} expansions"
            )));
        }
    }
}

/// Plain bisection inside `bracket`
pub fn bisect<T, F>(f: F, bracket: Bracket<T>, config: &SolverConfig) -> Root<T>
where
    T: Real,
    F: Fn(T) -> T,
{
    refine(f, None, bracket, config)
}

/// Newton iteration safeguarded by bisection
///
/// `df` is the derivative of `f`. A Newton step is only taken when the slope
/// is positive and the step lands strictly inside the current bracket.
pub fn newton_bisect<T, F, D>(f: F, df: D, bracket: Bracket<T>, config: &SolverConfig) -> Root<T>
where
    T: Real,
    F: Fn(T) -> T,
    D: Fn(T) -> T,
{
    refine(f, Some(&df as &dyn Fn(T) -> T), bracket, config)
}

fn refine<T, F>(
    f: F,
    df: Option<&dyn Fn(T) -> T>,
    bracket: Bracket<T>,
    config: &SolverConfig,
) -> Root<T>
where
    T: Real,
    F: Fn(T) -> T,
{
    let two = T::constant(2.0);
    let tolerance = T::constant(config.tolerance_factor) * T::epsilon();
    let Bracket {
        mut lower,
        mut upper,
    } = bracket;
    let mut x = lower + (upper - lower) / two;

    for iteration in 1..=config.max_iterations {
        let fx = f(x);
        if fx.is_nan() {
            return Root {
                value: x,
                iterations: iteration,
                converged: false,
            };
        }
        if fx == T::zero() {
            return Root::converged(x, iteration);
        }
        if fx < T::zero() {
            lower = x;
        } else {
            upper = x;
        }

        let midpoint = lower + (upper - lower) / two;
        let mut next = midpoint;
        if let Some(df) = df {
            let slope = df(x);
            if slope > T::zero() && slope.is_finite() {
                let candidate = x - fx / slope;
                if candidate > lower && candidate < upper {
                    next = candidate;
                }
            }
        }
        trace!(
            iteration,
            x = x.as_f64(),
            residual = fx.as_f64(),
            next = next.as_f64(),
            "refining root"
        );

        // midpoint stuck on a bound: no representable value left in between
        let exhausted = midpoint <= lower || midpoint >= upper;
        if exhausted
            || (next - x).abs() <= tolerance * next.abs()
            || upper - lower <= tolerance * upper.abs()
        {
            return Root::converged(next, iteration);
        }
        x = next;
    }

    Root {
        value: x,
        iterations: config.max_iterations,
        converged: false,
    }
}

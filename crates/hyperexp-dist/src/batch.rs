//! Batch evaluation over slices of arguments
//!
//! Distributions are immutable, so one instance can answer a whole slice of
//! queries on several threads at once. The [`ExecutionStrategy`] decides
//! whether that happens; results always come back in argument order.

use crate::{evaluation::Operation, traits::ContinuousDistribution};
use hyperexp_core::{map_slice, ExecutionStrategy, Real};
use tracing::debug;

/// Evaluate `operation` at every argument
///
/// Anomalies are handled exactly as in the single-value methods.
pub fn evaluate<T, D>(
    distribution: &D,
    operation: Operation,
    arguments: &[T],
    strategy: ExecutionStrategy,
) -> Vec<T>
where
    T: Real,
    D: ContinuousDistribution<T> + ?Sized,
{
    debug!(
        %operation,
        len = arguments.len(),
        parallel = strategy.is_parallel_for(arguments.len()),
        "batch evaluation"
    );
    map_slice(strategy, arguments, |&x| apply(distribution, operation, x))
}

/// Evaluate one operation by tag
pub fn apply<T, D>(distribution: &D, operation: Operation, x: T) -> T
where
    T: Real,
    D: ContinuousDistribution<T> + ?Sized,
{
    match operation {
        Operation::Pdf => distribution.pdf(x),
        Operation::Cdf => distribution.cdf(x),
        Operation::Survival => distribution.sf(x),
        Operation::Quantile => distribution.quantile(x),
        Operation::InverseSurvival => distribution.isf(x),
        Operation::Hazard => distribution.hazard(x),
        Operation::CumulativeHazard => distribution.chf(x),
    }
}

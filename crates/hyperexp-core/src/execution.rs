//! Execution strategy for batch evaluation
//!
//! Distribution queries are pure functions of immutable parameters, so a
//! batch of arguments can be evaluated on any number of threads without
//! synchronisation. Parallel execution needs the `parallel` feature; without
//! it [`ExecutionStrategy::Parallel`] runs sequentially.

use serde::{Deserialize, Serialize};

/// Execution strategy for batch operations
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionStrategy {
    /// Process items sequentially
    #[default]
    Sequential,
    /// Process items in parallel
    Parallel,
    /// Parallel once the batch reaches [`AUTO_PARALLEL_THRESHOLD`]
    Auto,
}

/// Batch size from which `Auto` switches to parallel execution
pub const AUTO_PARALLEL_THRESHOLD: usize = 4096;

impl ExecutionStrategy {
    /// Whether a batch of `len` items runs in parallel under this strategy
    pub fn is_parallel_for(self, len: usize) -> bool {
        let wanted = match self {
            Self::Sequential => false,
            Self::Parallel => true,
            Self::Auto => len >= AUTO_PARALLEL_THRESHOLD,
        };
        wanted && cfg!(feature = "parallel")
    }
}

/// Map `f` over `items`, preserving order
pub fn map_slice<U, R, F>(strategy: ExecutionStrategy, items: &[U], f: F) -> Vec<R>
where
    U: Sync,
    R: Send,
    F: Fn(&U) -> R + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        if strategy.is_parallel_for(items.len()) {
            use rayon::prelude::*;
            return items.par_iter().map(f).collect();
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = strategy;

    items.iter().map(f).collect()
}

//! Type-safe builder for hyperexponential distributions
//!
//! The type-state markers make the order explicit: probabilities first, then
//! rates, then `build`. Forgetting the rates is a compile error rather than a
//! `LengthMismatch` at runtime. Policy and solver settings can be changed in
//! any state.

use crate::{hyperexponential::Hyperexponential, Result};
use hyperexp_core::{ErrorAction, ErrorPolicy, Real, SolverConfig};
use std::marker::PhantomData;

/// Type-state markers for builder pattern
pub mod state {
    /// Marker for builder that needs phase probabilities
    pub struct NeedsProbabilities;

    /// Marker for builder that needs phase rates
    pub struct NeedsRates;

    /// Marker for builder that is ready to build
    pub struct Ready;
}

pub use state::{NeedsProbabilities, NeedsRates, Ready};

/// Builder state trait
pub trait BuilderState {}

impl BuilderState for NeedsProbabilities {}
impl BuilderState for NeedsRates {}
impl BuilderState for Ready {}

/// Type-safe builder for [`Hyperexponential`]
pub struct HyperexponentialBuilder<T, State: BuilderState> {
    /// `None` means equally likely phases
    probabilities: Option<Vec<T>>,
    rates: Vec<T>,
    policy: ErrorPolicy,
    _state: PhantomData<State>,
}

impl<T: Real> HyperexponentialBuilder<T, NeedsProbabilities> {
    pub fn new() -> Self {
        Self {
            probabilities: None,
            rates: Vec::new(),
            policy: ErrorPolicy::default(),
            _state: PhantomData,
        }
    }

    /// Set the phase probabilities; they are normalized on `build`
    pub fn probabilities<P>(self, probabilities: P) -> HyperexponentialBuilder<T, NeedsRates>
    where
        P: IntoIterator<Item = T>,
    {
        HyperexponentialBuilder {
            probabilities: Some(probabilities.into_iter().collect()),
            rates: self.rates,
            policy: self.policy,
            _state: PhantomData,
        }
    }

    /// Make every phase equally likely
    pub fn equal_probabilities(self) -> HyperexponentialBuilder<T, NeedsRates> {
        HyperexponentialBuilder {
            probabilities: None,
            rates: self.rates,
            policy: self.policy,
            _state: PhantomData,
        }
    }
}

impl<T: Real> Default for HyperexponentialBuilder<T, NeedsProbabilities> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Real> HyperexponentialBuilder<T, NeedsRates> {
    /// Set the phase rates
    pub fn rates<R>(self, rates: R) -> HyperexponentialBuilder<T, Ready>
    where
        R: IntoIterator<Item = T>,
    {
        HyperexponentialBuilder {
            probabilities: self.probabilities,
            rates: rates.into_iter().collect(),
            policy: self.policy,
            _state: PhantomData,
        }
    }
}

// Methods available in every state
impl<T: Real, State: BuilderState> HyperexponentialBuilder<T, State> {
    /// Replace the whole error policy
    pub fn policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Action for arguments outside the domain
    pub fn on_domain_error(mut self, action: ErrorAction) -> Self {
        self.policy.domain = action;
        self
    }

    /// Action for quantile solves that run out of iterations
    pub fn on_convergence_error(mut self, action: ErrorAction) -> Self {
        self.policy.convergence = action;
        self
    }

    pub fn solver(mut self, solver: SolverConfig) -> Self {
        self.policy.solver = solver;
        self
    }
}

impl<T: Real> HyperexponentialBuilder<T, Ready> {
    /// Validate the parameters and construct the distribution
    pub fn build(self) -> Result<Hyperexponential<T>> {
        let probabilities = self
            .probabilities
            .unwrap_or_else(|| vec![T::one(); self.rates.len()]);
        Hyperexponential::from_parts(probabilities, self.rates, self.policy)
    }
}

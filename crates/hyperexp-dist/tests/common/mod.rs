//! Shared utilities for integration tests

#![allow(dead_code)]

use hyperexp_core::Real;
use hyperexp_dist::Hyperexponential;

pub use approx::assert_relative_eq;

/// Phase probabilities of the reference mixture
pub const PROBABILITIES: [f64; 3] = [0.2, 0.3, 0.5];

/// Phase rates of the reference mixture
pub const RATES: [f64; 3] = [0.5, 1.0, 1.5];

/// Reference density at `x = 0, 1, 2, 3, 4`
pub const PDF: [f64; 5] = [
    1.15,
    0.338_364_518_434_018_38,
    0.114_728_830_364_026_01,
    0.045_580_883_928_883_889,
    0.020_887_284_122_781_291,
];

/// Reference CDF at `x = 1, 2, 3, 4`
pub const CDF: [f64; 4] = [
    0.656_764_955_631_825_69,
    0.860_929_992_610_795_72,
    0.934_883_349_190_833_71,
    0.966_198_875_597_723_99,
];

/// Reference survival at `x = 1, 2, 3, 4`
pub const SF: [f64; 4] = [
    0.343_235_044_368_174_31,
    0.139_070_007_389_204_25,
    0.065_116_650_809_166_302,
    0.033_801_124_402_275_978,
];

pub const MEAN: f64 = 1.033_333_333_333_333_2;
pub const VARIANCE: f64 = 1.576_666_666_666_667_3;
pub const SKEWNESS: f64 = 3.181_138_744_996_378;
pub const KURTOSIS: f64 = 19.750_738_616_808_71;

/// The reference mixture in precision `T`
pub fn reference<T: Real>() -> Hyperexponential<T> {
    Hyperexponential::new(
        PROBABILITIES.iter().map(|&p| T::constant(p)),
        RATES.iter().map(|&r| T::constant(r)),
    )
    .expect("reference parameters are valid")
}

/// Relative comparison against an `f64` reference at the tolerance of `T`
pub fn assert_close<T: Real>(actual: T, expected: f64, context: &str) {
    let tolerance = T::tolerance().as_f64();
    let actual = actual.as_f64();
    assert!(
        approx::relative_eq!(actual, expected, max_relative = tolerance),
        "{context}: got {actual}, expected {expected} (relative tolerance {tolerance})"
    );
}

/// Install a test-writer subscriber once per test binary
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

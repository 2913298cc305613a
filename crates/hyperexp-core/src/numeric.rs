//! Generic real-number trait for precision-independent statistics
//!
//! Distributions in this workspace are written once against [`Real`] and
//! instantiated for `f32`, `f64` and [`RealConcept`]. The trait adds the
//! handful of queries `num_traits::Float` does not answer: whether the type
//! has a representable infinity, how many significand bits it carries and how
//! tight a relative comparison can reasonably be.
//!
//! # Design Philosophy
//!
//! - **Pure type constraints**: arithmetic comes from `num_traits`
//! - **No silent casts**: literal constants go through [`Real::constant`]
//! - **Concept checking**: [`RealConcept`] exercises the generic paths with a
//!   type that is not a primitive float

use num_traits::{Float, Num, NumAssign, NumCast, One, ToPrimitive, Zero};
use std::fmt::{self, Debug, Display};
use std::num::FpCategory;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

/// Real-number capability set used by every distribution in the workspace
pub trait Real: Float + NumAssign + Debug + Display + Send + Sync + 'static {
    /// Whether `Float::infinity()` is a value the type treats as meaningful
    fn has_infinity() -> bool {
        true
    }

    /// Number of binary digits in the significand
    fn digits() -> u32;

    /// Relative tolerance appropriate for comparing computed results
    fn tolerance() -> Self;

    /// Convert an `f64` literal into this type
    fn constant(value: f64) -> Self {
        <Self as NumCast>::from(value).unwrap_or_else(Self::nan)
    }

    /// Convert to `f64` for reporting, NaN when not representable
    fn as_f64(self) -> f64 {
        ToPrimitive::to_f64(&self).unwrap_or(f64::NAN)
    }
}

impl Real for f64 {
    fn digits() -> u32 {
        f64::MANTISSA_DIGITS
    }

    fn tolerance() -> Self {
        2.0e3 * f64::EPSILON
    }
}

impl Real for f32 {
    fn digits() -> u32 {
        f32::MANTISSA_DIGITS
    }

    fn tolerance() -> Self {
        1.0e2 * f32::EPSILON
    }
}

/// Machine epsilon of `T`
pub fn epsilon<T: Real>() -> T {
    T::epsilon()
}

/// Smallest positive normalized value of `T`
pub fn min_value<T: Real>() -> T {
    T::min_positive_value()
}

/// Largest finite value of `T`
pub fn max_value<T: Real>() -> T {
    T::max_value()
}

/// Positive infinity when `T` has one, otherwise the largest finite value
pub fn infinity_or_max<T: Real>() -> T {
    if T::has_infinity() {
        T::infinity()
    } else {
        T::max_value()
    }
}

/// Archetype real type for checking generic code paths
///
/// Wraps an `f64` but is not a primitive float: no implicit conversions, no
/// `as` casts, and it declares no representable infinity, so any code that
/// silently assumes `f64` or `+inf` is caught by the tests instantiated with it.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct RealConcept(pub f64);

impl RealConcept {
    /// Unwrap the underlying value
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for RealConcept {
    fn from(val: f64) -> Self {
        RealConcept(val)
    }
}

impl From<RealConcept> for f64 {
    fn from(val: RealConcept) -> Self {
        val.0
    }
}

impl Display for RealConcept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl Real for RealConcept {
    fn has_infinity() -> bool {
        false
    }

    fn digits() -> u32 {
        f64::MANTISSA_DIGITS
    }

    fn tolerance() -> Self {
        RealConcept(5.0e6 * f64::EPSILON)
    }
}

macro_rules! concept_binary_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl $trait for RealConcept {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                RealConcept(self.0 $op rhs.0)
            }
        }

        impl $assign_trait for RealConcept {
            fn $assign_method(&mut self, rhs: Self) {
                self.0 = self.0 $op rhs.0;
            }
        }
    };
}

concept_binary_op!(Add, add, AddAssign, add_assign, +);
concept_binary_op!(Sub, sub, SubAssign, sub_assign, -);
concept_binary_op!(Mul, mul, MulAssign, mul_assign, *);
concept_binary_op!(Div, div, DivAssign, div_assign, /);
concept_binary_op!(Rem, rem, RemAssign, rem_assign, %);

impl Neg for RealConcept {
    type Output = Self;

    fn neg(self) -> Self::Output {
        RealConcept(-self.0)
    }
}

impl Zero for RealConcept {
    fn zero() -> Self {
        RealConcept(0.0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl One for RealConcept {
    fn one() -> Self {
        RealConcept(1.0)
    }
}

impl Num for RealConcept {
    type FromStrRadixErr = <f64 as Num>::FromStrRadixErr;

    fn from_str_radix(str: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        f64::from_str_radix(str, radix).map(RealConcept)
    }
}

impl ToPrimitive for RealConcept {
    fn to_i64(&self) -> Option<i64> {
        self.0.to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.0.to_u64()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.0)
    }
}

impl NumCast for RealConcept {
    fn from<T: ToPrimitive>(n: T) -> Option<Self> {
        n.to_f64().map(RealConcept)
    }
}

impl Float for RealConcept {
    fn nan() -> Self {
        RealConcept(f64::NAN)
    }

    fn infinity() -> Self {
        RealConcept(f64::INFINITY)
    }

    fn neg_infinity() -> Self {
        RealConcept(f64::NEG_INFINITY)
    }

    fn neg_zero() -> Self {
        RealConcept(-0.0)
    }

    fn min_value() -> Self {
        RealConcept(f64::MIN)
    }

    fn min_positive_value() -> Self {
        RealConcept(f64::MIN_POSITIVE)
    }

    fn max_value() -> Self {
        RealConcept(f64::MAX)
    }

    fn epsilon() -> Self {
        RealConcept(f64::EPSILON)
    }

    fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    fn is_infinite(self) -> bool {
        self.0.is_infinite()
    }

    fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    fn is_normal(self) -> bool {
        self.0.is_normal()
    }

    fn classify(self) -> FpCategory {
        self.0.classify()
    }

    fn floor(self) -> Self {
        RealConcept(self.0.floor())
    }

    fn ceil(self) -> Self {
        RealConcept(self.0.ceil())
    }

    fn round(self) -> Self {
        RealConcept(self.0.round())
    }

    fn trunc(self) -> Self {
        RealConcept(self.0.trunc())
    }

    fn fract(self) -> Self {
        RealConcept(self.0.fract())
    }

    fn abs(self) -> Self {
        RealConcept(self.0.abs())
    }

    fn signum(self) -> Self {
        RealConcept(self.0.signum())
    }

    fn is_sign_positive(self) -> bool {
        self.0.is_sign_positive()
    }

    fn is_sign_negative(self) -> bool {
        self.0.is_sign_negative()
    }

    fn mul_add(self, a: Self, b: Self) -> Self {
        RealConcept(self.0.mul_add(a.0, b.0))
    }

    fn recip(self) -> Self {
        RealConcept(self.0.recip())
    }

    fn powi(self, n: i32) -> Self {
        RealConcept(self.0.powi(n))
    }

    fn powf(self, n: Self) -> Self {
        RealConcept(self.0.powf(n.0))
    }

    fn sqrt(self) -> Self {
        RealConcept(self.0.sqrt())
    }

    fn exp(self) -> Self {
        RealConcept(self.0.exp())
    }

    fn exp2(self) -> Self {
        RealConcept(self.0.exp2())
    }

    fn ln(self) -> Self {
        RealConcept(self.0.ln())
    }

    fn log(self, base: Self) -> Self {
        RealConcept(self.0.log(base.0))
    }

    fn log2(self) -> Self {
        RealConcept(self.0.log2())
    }

    fn log10(self) -> Self {
        RealConcept(self.0.log10())
    }

    fn max(self, other: Self) -> Self {
        RealConcept(self.0.max(other.0))
    }

    fn min(self, other: Self) -> Self {
        RealConcept(self.0.min(other.0))
    }

    fn abs_sub(self, other: Self) -> Self {
        RealConcept((self.0 - other.0).max(0.0))
    }

    fn cbrt(self) -> Self {
        RealConcept(self.0.cbrt())
    }

    fn hypot(self, other: Self) -> Self {
        RealConcept(self.0.hypot(other.0))
    }

    fn sin(self) -> Self {
        RealConcept(self.0.sin())
    }

    fn cos(self) -> Self {
        RealConcept(self.0.cos())
    }

    fn tan(self) -> Self {
        RealConcept(self.0.tan())
    }

    fn asin(self) -> Self {
        RealConcept(self.0.asin())
    }

    fn acos(self) -> Self {
        RealConcept(self.0.acos())
    }

    fn atan(self) -> Self {
        RealConcept(self.0.atan())
    }

    fn atan2(self, other: Self) -> Self {
        RealConcept(self.0.atan2(other.0))
    }

    fn sin_cos(self) -> (Self, Self) {
        let (s, c) = self.0.sin_cos();
        (RealConcept(s), RealConcept(c))
    }

    fn exp_m1(self) -> Self {
        RealConcept(self.0.exp_m1())
    }

    fn ln_1p(self) -> Self {
        RealConcept(self.0.ln_1p())
    }

    fn sinh(self) -> Self {
        RealConcept(self.0.sinh())
    }

    fn cosh(self) -> Self {
        RealConcept(self.0.cosh())
    }

    fn tanh(self) -> Self {
        RealConcept(self.0.tanh())
    }

    fn asinh(self) -> Self {
        RealConcept(self.0.asinh())
    }

    fn acosh(self) -> Self {
        RealConcept(self.0.acosh())
    }

    fn atanh(self) -> Self {
        RealConcept(self.0.atanh())
    }

    fn integer_decode(self) -> (u64, i16, i8) {
        self.0.integer_decode()
    }

    fn to_degrees(self) -> Self {
        RealConcept(self.0.to_degrees())
    }

    fn to_radians(self) -> Self {
        RealConcept(self.0.to_radians())
    }
}

//! Scalar numeric types usable as quantity magnitudes.

use crate::ratio::Ratio;
use core::cmp::Ordering;
use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Sub};

/// A scalar number: the element type of every [`Representation`](crate::Representation).
///
/// Implemented for all primitive integers and floats. A third-party numeric type (fixed-point, interval, …)
/// becomes usable as a quantity magnitude by implementing this trait; it is then scalar-classified automatically.
/// Only the constants and [`apply_ratio`](Scalar::apply_ratio) are required. [`Root`] is a separate opt-in needed
/// only for norms.
///
/// `TREAT_AS_FLOATING_POINT` is the numeric-domain predicate the conversion engine keys on: a type that treats
/// itself as floating point accepts every implicit unit conversion, while an integral type only accepts
/// conversions with an integral factor (coarse to fine), everything else needs an explicit `value_cast`.
///
/// # Panics
///
/// The primitive integer impls check unit conversions and comparisons: [`apply_ratio`](Scalar::apply_ratio)
/// panics when the converted magnitude does not fit in the type, in every build profile. Plain arithmetic on
/// magnitudes (`+`, `*`, …) keeps Rust's usual overflow behaviour.
pub trait Scalar:
    Copy
    + PartialEq
    + PartialOrd
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + 'static
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
    /// Whether multiplying by a non-integral factor keeps full precision.
    const TREAT_AS_FLOATING_POINT: bool;

    /// Multiplies by an exact ratio. Integral types truncate toward zero.
    fn apply_ratio(self, factor: Ratio) -> Self;

    /// Orders `self × a` against `other × b`.
    ///
    /// The default rescales both sides with [`apply_ratio`](Scalar::apply_ratio). Integers compare the exact
    /// products in `i128` instead, so no narrowing happens on the way.
    #[inline]
    fn partial_cmp_scaled(self, a: Ratio, other: Self, b: Ratio) -> Option<Ordering> {
        self.apply_ratio(a).partial_cmp(&other.apply_ratio(b))
    }

    /// Absolute value.
    #[inline]
    fn abs(self) -> Self {
        if self < Self::ZERO {
            Self::ZERO - self
        } else {
            self
        }
    }

    /// Integer power by repeated squaring; negative exponents divide `ONE` by the result.
    fn powi(self, n: i32) -> Self {
        let mut base = self;
        let mut e = n.unsigned_abs();
        let mut acc = Self::ONE;
        while e > 0 {
            if e & 1 == 1 {
                acc = acc * base;
            }
            e >>= 1;
            if e > 0 {
                base = base * base;
            }
        }
        if n < 0 {
            Self::ONE / acc
        } else {
            acc
        }
    }
}

/// Square roots, needed by [`norm`](crate::norm).
///
/// Only [`sqrt`](Root::sqrt) is required. The hypot family defaults to the square root of the summed squares.
pub trait Root: Scalar {
    /// Square root. Integral types return the floor of the exact root and zero for negative input.
    fn sqrt(self) -> Self;

    /// `sqrt(self² + other²)`.
    #[inline]
    fn hypot(self, other: Self) -> Self {
        Self::hypot_n(&[self, other])
    }

    /// `sqrt(self² + y² + z²)`.
    #[inline]
    fn hypot3(self, y: Self, z: Self) -> Self {
        Self::hypot_n(&[self, y, z])
    }

    /// `sqrt(Σ xᵢ²)` over any number of coordinates.
    fn hypot_n(coords: &[Self]) -> Self {
        coords.iter().fold(Self::ZERO, |acc, &x| acc + x * x).sqrt()
    }
}

/// Floor of the square root of `n`.
fn isqrt(n: u128) -> u128 {
    if n < 2 {
        return n;
    }
    // Newton iteration from an upper bound, monotonically decreasing
    let mut x = 1u128 << ((128 - n.leading_zeros()).div_ceil(2));
    loop {
        let y = (x + n / x) / 2;
        if y >= x {
            return x;
        }
        x = y;
    }
}

/// Floor of `sqrt(Σ xᵢ²)`, or `None` once the sum leaves `u128`.
fn root_sum_squares(coords: impl Iterator<Item = u128>) -> Option<u128> {
    coords
        .map(|x| x.checked_mul(x))
        .try_fold(0u128, |acc, sq| acc.checked_add(sq?))
        .map(isqrt)
}

/// Narrows a widened integer result, panicking when it does not fit.
#[track_caller]
fn narrow<W, T: TryFrom<W>>(wide: Option<W>, operation: &str) -> T {
    match wide.and_then(|w| T::try_from(w).ok()) {
        Some(v) => v,
        None => panic!("integer overflow in {operation}"),
    }
}

/// Exact ordering of `x × a` against `y × b` by cross-multiplying the ratios.
#[track_caller]
fn cross_multiply(x: i128, a: Ratio, y: i128, b: Ratio) -> Ordering {
    let lhs = x.checked_mul(a.numerator()).and_then(|v| v.checked_mul(b.denominator()));
    let rhs = y.checked_mul(b.numerator()).and_then(|v| v.checked_mul(a.denominator()));
    match (lhs, rhs) {
        (Some(l), Some(r)) => l.cmp(&r),
        _ => panic!("integer overflow in quantity comparison"),
    }
}

#[track_caller]
fn integral_powi<T: Scalar>(p: T, n: i32) -> T {
    if n >= 0 {
        p
    } else if p == T::ZERO {
        panic!("zero raised to a negative power")
    } else {
        T::ONE / p
    }
}

macro_rules! impl_scalar_int {
    (signed: $($t:ty),*) => {$(
        impl Scalar for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const TREAT_AS_FLOATING_POINT: bool = false;

            #[inline]
            #[track_caller]
            fn apply_ratio(self, factor: Ratio) -> Self {
                if factor.is_one() {
                    return self;
                }
                let wide = (self as i128).checked_mul(factor.numerator()).map(|x| x / factor.denominator());
                narrow(wide, "unit conversion")
            }
            #[inline]
            fn partial_cmp_scaled(self, a: Ratio, other: Self, b: Ratio) -> Option<Ordering> {
                Some(cross_multiply(self as i128, a, other as i128, b))
            }
            #[inline]
            fn abs(self) -> Self {
                <$t>::abs(self)
            }
            #[inline]
            #[track_caller]
            fn powi(self, n: i32) -> Self {
                integral_powi(<$t>::pow(self, n.unsigned_abs()), n)
            }
        }

        impl Root for $t {
            #[inline]
            fn sqrt(self) -> Self {
                // the floor root never exceeds the input
                if self <= 0 { 0 } else { isqrt(self as u128) as $t }
            }
            #[inline]
            #[track_caller]
            fn hypot_n(coords: &[Self]) -> Self {
                narrow(root_sum_squares(coords.iter().map(|x| x.unsigned_abs() as u128)), "hypot")
            }
        }
    )*};
    (unsigned: $($t:ty),*) => {$(
        impl Scalar for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const TREAT_AS_FLOATING_POINT: bool = false;

            #[inline]
            #[track_caller]
            fn apply_ratio(self, factor: Ratio) -> Self {
                if factor.is_one() {
                    return self;
                }
                let wide = (self as i128).checked_mul(factor.numerator()).map(|x| x / factor.denominator());
                narrow(wide, "unit conversion")
            }
            #[inline]
            fn partial_cmp_scaled(self, a: Ratio, other: Self, b: Ratio) -> Option<Ordering> {
                Some(cross_multiply(self as i128, a, other as i128, b))
            }
            #[inline]
            fn abs(self) -> Self {
                self
            }
            #[inline]
            #[track_caller]
            fn powi(self, n: i32) -> Self {
                integral_powi(<$t>::pow(self, n.unsigned_abs()), n)
            }
        }

        impl Root for $t {
            #[inline]
            fn sqrt(self) -> Self {
                isqrt(self as u128) as $t
            }
            #[inline]
            #[track_caller]
            fn hypot_n(coords: &[Self]) -> Self {
                narrow(root_sum_squares(coords.iter().map(|&x| x as u128)), "hypot")
            }
        }
    )*};
}

impl_scalar_int!(signed: i8, i16, i32, i64, isize);
impl_scalar_int!(unsigned: u8, u16, u32, u64, usize);

macro_rules! impl_scalar_float {
    ($t:ty, $fabs:path, $sqrt:path, $hypot:path, $pow:path) => {
        impl Scalar for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const TREAT_AS_FLOATING_POINT: bool = true;

            #[inline]
            fn apply_ratio(self, factor: Ratio) -> Self {
                if factor.is_one() {
                    return self;
                }
                self * factor.numerator() as $t / factor.denominator() as $t
            }

            #[inline]
            fn abs(self) -> Self {
                #[cfg(feature = "std")]
                {
                    <$t>::abs(self)
                }
                #[cfg(not(feature = "std"))]
                {
                    $fabs(self)
                }
            }

            #[inline]
            fn powi(self, n: i32) -> Self {
                #[cfg(feature = "std")]
                {
                    <$t>::powi(self, n)
                }
                #[cfg(not(feature = "std"))]
                {
                    $pow(self, n as $t)
                }
            }
        }

        impl Root for $t {
            #[inline]
            fn sqrt(self) -> Self {
                #[cfg(feature = "std")]
                {
                    <$t>::sqrt(self)
                }
                #[cfg(not(feature = "std"))]
                {
                    $sqrt(self)
                }
            }

            #[inline]
            fn hypot(self, other: Self) -> Self {
                #[cfg(feature = "std")]
                {
                    <$t>::hypot(self, other)
                }
                #[cfg(not(feature = "std"))]
                {
                    $hypot(self, other)
                }
            }

            #[inline]
            fn hypot3(self, y: Self, z: Self) -> Self {
                Root::hypot(Root::hypot(self, y), z)
            }

            /// Pairwise `hypot`, so no intermediate square overflows or underflows.
            #[inline]
            fn hypot_n(coords: &[Self]) -> Self {
                coords.iter().fold(0.0, |acc, &x| Root::hypot(acc, x))
            }
        }
    };
}

impl_scalar_float!(f64, libm::fabs, libm::sqrt, libm::hypot, libm::pow);
impl_scalar_float!(f32, libm::fabsf, libm::sqrtf, libm::hypotf, libm::powf);

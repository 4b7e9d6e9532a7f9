//! Arithmetic and comparison operators on quantities.
//!
//! - `+`/`-` accept any two quantities of the same dimension and character; the right operand is converted into
//!   the left operand's unit first, so mixed units add exactly.
//! - `*`/`/` by a bare number scale the magnitude; integral magnitudes scaled by `f64` become `f64`.
//! - `Quantity * Quantity` and `Quantity / Quantity` compose kinds ([`Times`], [`Over`]) and units ([`Prod`],
//!   [`Per`]); the magnitude combination must be listed by [`Product`] or [`Quotient`].
//! - `==`/`<` compare in the finest common unit of both sides, exactly for integral magnitudes.

use crate::kind::{Dimensionless, Kind, Over, Times};
use crate::quantity::Quantity;
use crate::ratio::Ratio;
use crate::representation::{Product, Quotient, Representation, ScalarCharacter, ScaleBy, Widen};
use crate::scalar::Scalar;
use crate::unit::{Per, Prod, Unit, Unitless};
use core::cmp::Ordering;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

// ─────────────────────────────────────────────────────────────────────────────
// Additive operators
// ─────────────────────────────────────────────────────────────────────────────

impl<K1, U1, K2, U2, R> Add<Quantity<K2, U2, R>> for Quantity<K1, U1, R>
where
    K1: Kind,
    K2: Kind<Character = K1::Character>,
    U1: Unit,
    U2: Unit,
    R: Representation,
{
    type Output = Quantity<K1, U1, R>;

    #[inline]
    fn add(self, rhs: Quantity<K2, U2, R>) -> Self::Output {
        const {
            assert!(
                K1::DIMENSION.same_as(&K2::DIMENSION),
                "cannot add quantities of different dimensions"
            )
        };
        Quantity::from_value(self.value() + rhs.to::<U1>().value())
    }
}

impl<K1, U1, K2, U2, R> Sub<Quantity<K2, U2, R>> for Quantity<K1, U1, R>
where
    K1: Kind,
    K2: Kind<Character = K1::Character>,
    U1: Unit,
    U2: Unit,
    R: Representation,
{
    type Output = Quantity<K1, U1, R>;

    #[inline]
    fn sub(self, rhs: Quantity<K2, U2, R>) -> Self::Output {
        const {
            assert!(
                K1::DIMENSION.same_as(&K2::DIMENSION),
                "cannot subtract quantities of different dimensions"
            )
        };
        Quantity::from_value(self.value() - rhs.to::<U1>().value())
    }
}

impl<K1, U1, K2, U2, R> AddAssign<Quantity<K2, U2, R>> for Quantity<K1, U1, R>
where
    K1: Kind,
    K2: Kind<Character = K1::Character>,
    U1: Unit,
    U2: Unit,
    R: Representation,
{
    #[inline]
    fn add_assign(&mut self, rhs: Quantity<K2, U2, R>) {
        *self = *self + rhs;
    }
}

impl<K1, U1, K2, U2, R> SubAssign<Quantity<K2, U2, R>> for Quantity<K1, U1, R>
where
    K1: Kind,
    K2: Kind<Character = K1::Character>,
    U1: Unit,
    U2: Unit,
    R: Representation,
{
    #[inline]
    fn sub_assign(&mut self, rhs: Quantity<K2, U2, R>) {
        *self = *self - rhs;
    }
}

impl<K: Kind, U: Unit, R: Representation + Neg<Output = R>> Neg for Quantity<K, U, R> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Quantity::from_value(-self.value())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Scaling by a bare number
// ─────────────────────────────────────────────────────────────────────────────

/// Scales the magnitude by a bare number.
///
/// The number may be the magnitude's own element type or, for integral magnitudes, `f64`; the latter promotes
/// the magnitude to `f64`.
///
/// ```rust
/// use phyq_core::length::{Meter, PositionVector};
/// use phyq_core::{Kind, Vector};
///
/// let r = Vector::new([1, 2, 3]) * PositionVector.in_unit(Meter);
/// assert_eq!((r * 2).value(), Vector::new([2, 4, 6]));
/// assert_eq!((r * 0.5).value(), Vector::new([0.5, 1.0, 1.5]));
/// ```
impl<K, U, R, S> Mul<S> for Quantity<K, U, R>
where
    K: Kind,
    U: Unit,
    S: Scalar,
    R: ScaleBy<S>,
{
    type Output = Quantity<K, U, R::Scaled>;
    #[inline]
    fn mul(self, k: S) -> Self::Output {
        Quantity::from_value(self.value().scale_by(k))
    }
}

impl<K, U, R, S> Div<S> for Quantity<K, U, R>
where
    K: Kind,
    U: Unit,
    S: Scalar,
    R: ScaleBy<S>,
{
    type Output = Quantity<K, U, R::Scaled>;
    #[inline]
    fn div(self, k: S) -> Self::Output {
        Quantity::from_value(self.value().unscale_by(k))
    }
}

impl<K, U, R, S> MulAssign<S> for Quantity<K, U, R>
where
    K: Kind,
    U: Unit,
    S: Scalar,
    R: ScaleBy<S, Scaled = R>,
{
    #[inline]
    fn mul_assign(&mut self, k: S) {
        *self = *self * k;
    }
}

impl<K, U, R, S> DivAssign<S> for Quantity<K, U, R>
where
    K: Kind,
    U: Unit,
    S: Scalar,
    R: ScaleBy<S, Scaled = R>,
{
    #[inline]
    fn div_assign(&mut self, k: S) {
        *self = *self / k;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Quantity × quantity
// ─────────────────────────────────────────────────────────────────────────────

/// Multiplies two quantities; kinds and units multiply too.
///
/// ```rust
/// use phyq_core::length::Meters;
/// use phyq_core::mechanics::{Force, Newton};
/// use phyq_core::{Quantity, Vector};
///
/// let f = Quantity::<Force, Newton, _>::new(Vector::new([0.0, 10.0, 0.0]));
/// let scaled = Meters::new(2.0) * f;
/// assert_eq!(scaled.value(), Vector::new([0.0, 20.0, 0.0]));
/// ```
impl<K1, U1, R1, K2, U2, R2> Mul<Quantity<K2, U2, R2>> for Quantity<K1, U1, R1>
where
    K1: Kind,
    K2: Kind,
    K1::Character: Widen<K2::Character>,
    U1: Unit,
    U2: Unit,
    R1: Product<R2>,
    R2: Representation,
{
    type Output = Quantity<Times<K1, K2>, Prod<U1, U2>, <R1 as Product<R2>>::Output>;

    #[inline]
    fn mul(self, rhs: Quantity<K2, U2, R2>) -> Self::Output {
        Quantity::from_value(self.value().product(rhs.value()))
    }
}

impl<K1, U1, R1, K2, U2, R2> Div<Quantity<K2, U2, R2>> for Quantity<K1, U1, R1>
where
    K1: Kind,
    K2: Kind,
    K1::Character: Widen<K2::Character>,
    U1: Unit,
    U2: Unit,
    R1: Quotient<R2>,
    R2: Representation,
{
    type Output = Quantity<Over<K1, K2>, Per<U1, U2>, <R1 as Quotient<R2>>::Output>;

    #[inline]
    fn div(self, rhs: Quantity<K2, U2, R2>) -> Self::Output {
        Quantity::from_value(self.value().quotient(rhs.value()))
    }
}

/// Trait for collapsing the structural kind and unit of a derived quantity.
///
/// This allows reducing expressions such as `Over<K, K>` in `Per<U, U>` to a pure number, or
/// `Per<N, Per<N, D>>` to `D`.
pub trait Simplify {
    /// The simplified quantity type.
    type Out;
    /// Converts this quantity to its simplified form, keeping the magnitude.
    fn simplify(self) -> Self::Out;
}

impl<K, U, T> Simplify for Quantity<Over<K, K>, Per<U, U>, T>
where
    K: Kind<Character = ScalarCharacter>,
    U: Unit,
    T: Scalar,
{
    type Out = Quantity<Dimensionless, Unitless, T>;

    /// ```rust
    /// use phyq_core::length::Meters;
    /// use phyq_core::{Dimensionless, Quantity, Simplify, Unitless};
    ///
    /// let ratio = Meters::new(1.0) / Meters::new(2.0);
    /// let pure: Quantity<Dimensionless, Unitless> = ratio.simplify();
    /// assert!((pure.value() - 0.5).abs() < 1e-12);
    /// ```
    #[inline]
    fn simplify(self) -> Self::Out {
        Quantity::from_value(self.value())
    }
}

impl<KN, KD, N, D, R> Simplify for Quantity<Over<KN, Over<KN, KD>>, Per<N, Per<N, D>>, R>
where
    KN: Kind,
    KD: Kind,
    N: Unit,
    D: Unit,
    R: Representation<Character = KD::Character>,
{
    type Out = Quantity<KD, D, R>;

    #[inline]
    fn simplify(self) -> Self::Out {
        Quantity::from_value(self.value())
    }
}

impl<K, U, R> Simplify for Quantity<Times<Dimensionless, K>, Prod<Unitless, U>, R>
where
    K: Kind,
    U: Unit,
    R: Representation<Character = K::Character>,
{
    type Out = Quantity<K, U, R>;

    /// ```rust
    /// use phyq_core::dimensionless::ONE;
    /// use phyq_core::length::{Meter, PositionVector};
    /// use phyq_core::{Quantity, Simplify, Vector};
    ///
    /// let r: Quantity<PositionVector, Meter, Vector<i32, 3>> = Quantity::new(Vector::new([1, 2, 3]));
    /// let doubled: Quantity<PositionVector, Meter, _> = ((2 * ONE) * r).simplify();
    /// assert_eq!(doubled.value(), Vector::new([2, 4, 6]));
    /// ```
    #[inline]
    fn simplify(self) -> Self::Out {
        Quantity::from_value(self.value())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparison
// ─────────────────────────────────────────────────────────────────────────────

/// Factors taking each unit into the common unit of both.
#[inline]
fn common_unit_factors<U1: Unit, U2: Unit>() -> (Ratio, Ratio) {
    let common = U1::RATIO.common(U2::RATIO);
    (U1::RATIO.div(common), U2::RATIO.div(common))
}

/// Equality holds across units: `1 km == 1000 m`.
impl<K1, U1, K2, U2, R> PartialEq<Quantity<K2, U2, R>> for Quantity<K1, U1, R>
where
    K1: Kind,
    K2: Kind<Character = K1::Character>,
    U1: Unit,
    U2: Unit,
    R: Representation,
{
    #[inline]
    fn eq(&self, other: &Quantity<K2, U2, R>) -> bool {
        const {
            assert!(
                K1::DIMENSION.same_as(&K2::DIMENSION),
                "cannot compare quantities of different dimensions"
            )
        };
        let (a, b) = common_unit_factors::<U1, U2>();
        self.value_ref().eq_scaled(a, other.value_ref(), b)
    }
}

impl<K: Kind, U: Unit, R: Representation + Eq> Eq for Quantity<K, U, R> {}

impl<K1, U1, K2, U2, R> PartialOrd<Quantity<K2, U2, R>> for Quantity<K1, U1, R>
where
    K1: Kind,
    K2: Kind<Character = K1::Character>,
    U1: Unit,
    U2: Unit,
    R: Representation + PartialOrd,
{
    #[inline]
    fn partial_cmp(&self, other: &Quantity<K2, U2, R>) -> Option<Ordering> {
        const {
            assert!(
                K1::DIMENSION.same_as(&K2::DIMENSION),
                "cannot compare quantities of different dimensions"
            )
        };
        let (a, b) = common_unit_factors::<U1, U2>();
        self.value_ref().partial_cmp_scaled(a, other.value_ref(), b)
    }
}

#[cfg(test)]
mod tests {
    use crate::length::{Kilometer, Kilometers, Length, Meter, Meters};
    use crate::time::{Hour, Hours, Seconds};
    use crate::{Dimensionless, Over, Per, Quantity, Simplify, Unitless};
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Additive operators
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn add_converts_right_operand_into_left_unit() {
        let sum = Meters::<i32>::new(1) + Kilometers::<i32>::new(3);
        assert_eq!(sum.value(), 3001);
        let diff = Meters::<i32>::new(1) - Kilometers::<i32>::new(3);
        assert_eq!(diff.value(), -2999);
    }

    #[test]
    fn assign_operators() {
        let mut d = Meters::new(10.0);
        d += Kilometers::new(0.5);
        assert_relative_eq!(d.value(), 510.0);
        d -= Meters::new(10.0);
        assert_relative_eq!(d.value(), 500.0);
        d *= 2.0;
        assert_relative_eq!(d.value(), 1000.0);
        d /= 4.0;
        assert_relative_eq!(d.value(), 250.0);
        assert_relative_eq!((-d).value(), -250.0);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Multiplicative operators
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn division_builds_derived_units() {
        let v = Kilometers::new(120.0) / Hours::new(2.0);
        let _: &Quantity<Over<Length, crate::time::Duration>, Per<Kilometer, Hour>> = &v;
        assert_relative_eq!(v.value(), 60.0);
        let mps: Quantity<_, Per<Meter, crate::time::Second>> = v.to();
        assert_relative_eq!(mps.value(), 60.0 / 3.6, max_relative = 1e-12);
    }

    #[test]
    fn multiplication_builds_products() {
        let area = Meters::new(3.0) * Meters::new(4.0);
        assert_relative_eq!(area.value(), 12.0);
        let back = area / Meters::new(4.0);
        assert_relative_eq!(back.value(), 3.0);
    }

    #[test]
    fn simplify_same_unit_ratio() {
        let r: Quantity<Dimensionless, Unitless> = (Seconds::new(3.0) / Seconds::new(4.0)).simplify();
        assert_relative_eq!(r.value(), 0.75);
    }

    #[test]
    fn simplify_nested_ratio() {
        let distance = Meters::new(100.0);
        let speed = Meters::new(20.0) / Seconds::new(1.0);
        let time: Seconds = (distance / speed).simplify();
        assert_relative_eq!(time.value(), 5.0);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Comparison
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn equality_across_units() {
        assert_eq!(Kilometers::<i32>::new(1), Meters::<i32>::new(1000));
        assert_ne!(Kilometers::<i32>::new(1), Meters::<i32>::new(1001));
        assert!(Meters::<i32>::new(999) < Kilometers::<i32>::new(1));
        assert!(Hours::new(1.0) > Seconds::new(3599.0));
    }

    #[test]
    fn integral_comparison_never_wraps() {
        use crate::length::Micrometers;
        assert_ne!(Kilometers::<i32>::new(5), Micrometers::<i32>::new(705_032_704));
        assert!(Kilometers::<i32>::new(5) > Micrometers::<i32>::new(i32::MAX));
        assert!(Micrometers::<i32>::new(i32::MIN) > Kilometers::<i32>::new(-3));
        assert!(Kilometers::<i64>::new(i64::MAX) > Meters::<i64>::new(i64::MAX));
        assert_eq!(Kilometers::<i64>::new(i64::MAX / 1000), Meters::<i64>::new(i64::MAX / 1000 * 1000));
    }

    #[test]
    #[should_panic(expected = "integer overflow in unit conversion")]
    fn integral_conversion_out_of_range_panics() {
        use crate::length::Micrometer;
        let _ = Kilometers::<i32>::new(3).to::<Micrometer>();
    }

    #[test]
    fn scaling_by_f64_promotes_integral_magnitudes() {
        let half = Meters::<i32>::new(3) * 0.5;
        let _: &Meters<f64> = &half;
        assert_relative_eq!(half.value(), 1.5);
        assert_relative_eq!((Seconds::<u16>::new(3) / 2.0).value(), 1.5);
        assert_relative_eq!((0.5f64 * Meters::<i64>::new(5)).value(), 2.5);
        assert_eq!((Meters::<i32>::new(3) * 2).value(), 6);
    }

    proptest! {
        #[test]
        fn prop_add_then_sub_same_unit(a in -1.0e6..1.0e6f64, b in -1.0e6..1.0e6f64) {
            let sum = Meters::new(a) + Meters::new(b);
            let back = sum - Meters::new(b);
            prop_assert!((back.value() - a).abs() < 1e-6);
        }

        #[test]
        fn prop_integer_equality_matches_scaled_value(km in -1_000_000i64..1_000_000) {
            prop_assert_eq!(Kilometers::<i64>::new(km), Meters::<i64>::new(km * 1000));
            prop_assert!(Meters::<i64>::new(km * 1000 - 1) < Kilometers::<i64>::new(km));
        }
    }
}

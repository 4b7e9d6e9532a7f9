//! Vector algebra: cross product, norm and dot product, plus the operators of the *vector of quantities*
//! encoding.
//!
//! Every operation is available for both encodings of a vector quantity:
//!
//! - a quantity with a vector magnitude, `Quantity<Velocity, MetersPerSecond, Vector<f64, 3>>`;
//! - a vector whose coordinates are quantities, `Vector<Quantity<Velocity, MetersPerSecond, Component<f64>>, 3>`.
//!
//! ```rust
//! use phyq_core::length::{Meter, PositionVector};
//! use phyq_core::mechanics::{Force, MomentOfForce, Newton, NewtonMeter};
//! use phyq_core::{cross, Quantity, Vector};
//!
//! let r: Quantity<PositionVector, Meter, Vector<i32, 3>> = Quantity::new(Vector::new([3, 0, 0]));
//! let f: Quantity<Force, Newton, Vector<i32, 3>> = Quantity::new(Vector::new([0, 10, 0]));
//! let torque: Quantity<MomentOfForce, NewtonMeter, _> = cross(r, f).quantity_cast().to();
//! assert_eq!(torque.value(), Vector::new([0, 0, 30]));
//! ```

use crate::kind::{Kind, Over, Times};
use crate::quantity::Quantity;
use crate::representation::{Component, Representation, ScalarCharacter, ScaleBy, VectorCharacter};
use crate::scalar::{Root, Scalar};
use crate::unit::{Per, Prod, Unit};
use crate::vector::Vector;
use core::ops::{Div, Mul, Sub};

/// Three-dimensional cross product.
pub trait Cross<Rhs = Self> {
    /// Result of the product.
    type Output;
    /// Computes `self × rhs`.
    fn cross(self, rhs: Rhs) -> Self::Output;
}

/// Euclidean norm.
pub trait Norm {
    /// Scalar result.
    type Output;
    /// Computes `|self|`.
    fn norm(self) -> Self::Output;
}

/// Scalar (inner) product.
pub trait Dot<Rhs = Self> {
    /// Scalar result.
    type Output;
    /// Computes `self · rhs`.
    fn dot(self, rhs: Rhs) -> Self::Output;
}

/// Computes `a × b`.
#[inline]
pub fn cross<A: Cross<B>, B>(a: A, b: B) -> A::Output {
    a.cross(b)
}

/// Computes `|v|`.
///
/// ```rust
/// use phyq_core::mechanics::{KilometersPerHour, Speed, Velocity};
/// use phyq_core::{norm, Quantity, Vector};
///
/// let v: Quantity<Velocity, KilometersPerHour, Vector<i32, 3>> = Quantity::new(Vector::new([2, 3, 6]));
/// let speed: Quantity<Speed, KilometersPerHour, i32> = norm(v);
/// assert_eq!(speed.value(), 7);
/// ```
#[inline]
pub fn norm<V: Norm>(v: V) -> V::Output {
    v.norm()
}

/// Computes `a · b`.
#[inline]
pub fn dot<A: Dot<B>, B>(a: A, b: B) -> A::Output {
    a.dot(b)
}

// ─────────────────────────────────────────────────────────────────────────────
// Plain vectors
// ─────────────────────────────────────────────────────────────────────────────

impl<A, B, O> Cross<Vector<B, 3>> for Vector<A, 3>
where
    A: Mul<B, Output = O> + Copy,
    B: Copy,
    O: Sub<Output = O>,
{
    type Output = Vector<O, 3>;

    #[inline]
    fn cross(self, rhs: Vector<B, 3>) -> Vector<O, 3> {
        let [a1, a2, a3] = self.0;
        let [b1, b2, b3] = rhs.0;
        Vector([a2 * b3 - a3 * b2, a3 * b1 - a1 * b3, a1 * b2 - a2 * b1])
    }
}

impl<T: Root, const N: usize> Norm for Vector<T, N> {
    type Output = T;

    /// Goes through the hypot family whatever `N` is: integers sum exact squares in a widened type, floats
    /// combine coordinates pairwise without intermediate overflow.
    #[inline]
    fn norm(self) -> T {
        match self.0.as_slice() {
            [] => T::ZERO,
            [x] => x.abs(),
            [x, y] => x.hypot(*y),
            [x, y, z] => x.hypot3(*y, *z),
            xs => T::hypot_n(xs),
        }
    }
}

impl<T: Scalar, const N: usize> Dot for Vector<T, N> {
    type Output = T;

    #[inline]
    fn dot(self, rhs: Self) -> T {
        self.0
            .iter()
            .zip(rhs.0.iter())
            .fold(T::ZERO, |acc, (&a, &b)| acc + a * b)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Quantities with vector magnitudes
// ─────────────────────────────────────────────────────────────────────────────

// Any vector-classified magnitude that offers the plain operation gets the quantity-level one, so a custom
// vector type opts in by implementing `Representation`, `Cross`, `Norm` or `Dot` for itself.

impl<K1, U1, R1, K2, U2, R2> Cross<Quantity<K2, U2, R2>> for Quantity<K1, U1, R1>
where
    K1: Kind<Character = VectorCharacter>,
    K2: Kind<Character = VectorCharacter>,
    U1: Unit,
    U2: Unit,
    R1: Representation<Character = VectorCharacter> + Cross<R2>,
    R2: Representation<Character = VectorCharacter>,
    <R1 as Cross<R2>>::Output: Representation<Character = VectorCharacter>,
{
    type Output = Quantity<Times<K1, K2>, Prod<U1, U2>, <R1 as Cross<R2>>::Output>;

    #[inline]
    fn cross(self, rhs: Quantity<K2, U2, R2>) -> Self::Output {
        Quantity::from_value(self.value().cross(rhs.value()))
    }
}

impl<K, U, R> Norm for Quantity<K, U, R>
where
    K: Kind<Character = VectorCharacter>,
    U: Unit,
    R: Representation<Character = VectorCharacter> + Norm,
    <R as Norm>::Output: Representation<Character = ScalarCharacter>,
{
    type Output = Quantity<K::MagnitudeKind, U, <R as Norm>::Output>;

    #[inline]
    fn norm(self) -> Self::Output {
        const {
            assert!(
                K::DIMENSION.same_as(&<K::MagnitudeKind as Kind>::DIMENSION),
                "the magnitude kind must share the vector kind's dimension"
            )
        };
        Quantity::from_value(self.value().norm())
    }
}

impl<K1, U1, R1, K2, U2, R2> Dot<Quantity<K2, U2, R2>> for Quantity<K1, U1, R1>
where
    K1: Kind<Character = VectorCharacter>,
    K2: Kind<Character = VectorCharacter>,
    U1: Unit,
    U2: Unit,
    R1: Representation<Character = VectorCharacter> + Dot<R2>,
    R2: Representation<Character = VectorCharacter>,
    <R1 as Dot<R2>>::Output: Representation<Character = ScalarCharacter>,
{
    type Output = Quantity<Times<K1::MagnitudeKind, K2::MagnitudeKind>, Prod<U1, U2>, <R1 as Dot<R2>>::Output>;

    /// ```rust
    /// use phyq_core::length::{Meter, PositionVector};
    /// use phyq_core::mechanics::{Energy, Force, Joule, Newton};
    /// use phyq_core::{dot, Quantity, Vector};
    ///
    /// let f: Quantity<Force, Newton, _> = Quantity::new(Vector::new([2.0, 0.0, 1.0]));
    /// let s: Quantity<PositionVector, Meter, _> = Quantity::new(Vector::new([3.0, 5.0, 4.0]));
    /// let work: Quantity<Energy, Joule> = dot(f, s).quantity_cast().to();
    /// assert_eq!(work.value(), 10.0);
    /// ```
    #[inline]
    fn dot(self, rhs: Quantity<K2, U2, R2>) -> Self::Output {
        Quantity::from_value(self.value().dot(rhs.value()))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Vectors of quantities
// ─────────────────────────────────────────────────────────────────────────────

#[inline]
fn magnitudes<K, U, T: Scalar, const N: usize>(v: Vector<Quantity<K, U, Component<T>>, N>) -> Vector<T, N> {
    v.map(|q| q.value().0)
}

impl<K, U, T, const N: usize> Norm for Vector<Quantity<K, U, Component<T>>, N>
where
    K: Kind<Character = VectorCharacter>,
    U: Unit,
    T: Root,
{
    type Output = Quantity<K::MagnitudeKind, U, T>;

    #[inline]
    fn norm(self) -> Self::Output {
        const {
            assert!(
                K::DIMENSION.same_as(&<K::MagnitudeKind as Kind>::DIMENSION),
                "the magnitude kind must share the vector kind's dimension"
            )
        };
        Quantity::from_value(magnitudes(self).norm())
    }
}

impl<K1, U1, K2, U2, T, const N: usize> Dot<Vector<Quantity<K2, U2, Component<T>>, N>>
    for Vector<Quantity<K1, U1, Component<T>>, N>
where
    K1: Kind<Character = VectorCharacter>,
    K2: Kind<Character = VectorCharacter>,
    U1: Unit,
    U2: Unit,
    T: Scalar,
{
    type Output = Quantity<Times<K1::MagnitudeKind, K2::MagnitudeKind>, Prod<U1, U2>, T>;

    #[inline]
    fn dot(self, rhs: Vector<Quantity<K2, U2, Component<T>>, N>) -> Self::Output {
        Quantity::from_value(magnitudes(self).dot(magnitudes(rhs)))
    }
}

impl<K, U, T, S, const N: usize> Mul<S> for Vector<Quantity<K, U, Component<T>>, N>
where
    K: Kind<Character = VectorCharacter>,
    U: Unit,
    S: Scalar,
    T: Scalar + ScaleBy<S>,
    T::Scaled: Scalar,
{
    type Output = Vector<Quantity<K, U, Component<T::Scaled>>, N>;
    #[inline]
    fn mul(self, k: S) -> Self::Output {
        self.map(|q| q * k)
    }
}

impl<K, U, T, S, const N: usize> Div<S> for Vector<Quantity<K, U, Component<T>>, N>
where
    K: Kind<Character = VectorCharacter>,
    U: Unit,
    S: Scalar,
    T: Scalar + ScaleBy<S>,
    T::Scaled: Scalar,
{
    type Output = Vector<Quantity<K, U, Component<T::Scaled>>, N>;
    #[inline]
    fn div(self, k: S) -> Self::Output {
        self.map(|q| q / k)
    }
}

impl<K1, U1, K2, U2, T, const N: usize> Mul<Quantity<K2, U2, T>> for Vector<Quantity<K1, U1, Component<T>>, N>
where
    K1: Kind<Character = VectorCharacter>,
    K2: Kind<Character = ScalarCharacter>,
    U1: Unit,
    U2: Unit,
    T: Scalar,
{
    type Output = Vector<Quantity<Times<K1, K2>, Prod<U1, U2>, Component<T>>, N>;
    #[inline]
    fn mul(self, rhs: Quantity<K2, U2, T>) -> Self::Output {
        self.map(|q| q * rhs)
    }
}

impl<K1, U1, K2, U2, T, const N: usize> Mul<Vector<Quantity<K2, U2, Component<T>>, N>> for Quantity<K1, U1, T>
where
    K1: Kind<Character = ScalarCharacter>,
    K2: Kind<Character = VectorCharacter>,
    U1: Unit,
    U2: Unit,
    T: Scalar,
{
    type Output = Vector<Quantity<Times<K1, K2>, Prod<U1, U2>, Component<T>>, N>;
    #[inline]
    fn mul(self, rhs: Vector<Quantity<K2, U2, Component<T>>, N>) -> Self::Output {
        rhs.map(|q| self * q)
    }
}

impl<K1, U1, K2, U2, T, const N: usize> Div<Quantity<K2, U2, T>> for Vector<Quantity<K1, U1, Component<T>>, N>
where
    K1: Kind<Character = VectorCharacter>,
    K2: Kind<Character = ScalarCharacter>,
    U1: Unit,
    U2: Unit,
    T: Scalar,
{
    type Output = Vector<Quantity<Over<K1, K2>, Per<U1, U2>, Component<T>>, N>;
    #[inline]
    fn div(self, rhs: Quantity<K2, U2, T>) -> Self::Output {
        self.map(|q| q / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::{Kilometer, Meter, PositionVector};
    use crate::mechanics::{KilometersPerHour, Velocity};
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn plain_cross_product() {
        let x = Vector::new([1, 0, 0]);
        let y = Vector::new([0, 1, 0]);
        assert_eq!(x.cross(y), Vector::new([0, 0, 1]));
        assert_eq!(y.cross(x), Vector::new([0, 0, -1]));
        assert_eq!(cross(x, x), Vector::new([0, 0, 0]));
    }

    #[test]
    fn norm_picks_exact_paths() {
        assert_eq!(Vector::<i32, 0>::new([]).norm(), 0);
        assert_eq!(Vector::new([-4]).norm(), 4);
        assert_eq!(Vector::new([3, 4]).norm(), 5);
        assert_eq!(Vector::new([2, 3, 6]).norm(), 7);
        assert_relative_eq!(Vector::new([1.0, 1.0, 1.0, 1.0]).norm(), 2.0);
    }

    #[test]
    fn norm_of_long_vectors_widens_like_short_ones() {
        assert_eq!(Vector::new([50_000i32, 0, 0]).norm(), 50_000);
        assert_eq!(Vector::new([50_000i32, 0, 0, 0]).norm(), 50_000);
        assert_eq!(Vector::new([1i32, 1, 1, 1]).norm(), 2);
        assert_eq!(Vector::new([1u8, 2, 2, 4, 0]).norm(), 5);
        assert_relative_eq!(Vector::new([1.0e200f64, 0.0, 0.0, 1.0e200]).norm(), 2f64.sqrt() * 1.0e200, max_relative = 1e-12);
    }

    #[test]
    #[should_panic(expected = "integer overflow in hypot")]
    fn norm_that_does_not_fit_panics() {
        let _ = Vector::new([i32::MAX; 4]).norm();
    }

    #[test]
    fn dot_product() {
        assert_eq!(Vector::new([1, 2, 3]).dot(Vector::new([4, 5, 6])), 32);
        assert_eq!(dot(Vector::new([1.0, 0.0]), Vector::new([0.0, 1.0])), 0.0);
    }

    #[test]
    fn vector_of_quantities_cross_and_norm() {
        type Pos = Quantity<PositionVector, Meter, Component<i32>>;
        let p = |x| Pos::new(Component(x));
        let a = Vector::new([p(1), p(0), p(0)]);
        let b = Vector::new([p(0), p(2), p(0)]);
        let c = a.cross(b);
        assert_eq!(c[2].value(), Component(2));
        assert_eq!(c[0].value(), Component(0));

        type Kmh = Quantity<Velocity, KilometersPerHour, Component<f64>>;
        let v = Vector::new([Kmh::new(Component(2.0)), Kmh::new(Component(3.0)), Kmh::new(Component(6.0))]);
        assert_relative_eq!(norm(v).value(), 7.0, epsilon = 1e-12);
    }

    #[test]
    fn vector_of_quantities_scaling() {
        type Km = Quantity<PositionVector, Kilometer, Component<i32>>;
        let v = Vector::new([Km::new(Component(1)), Km::new(Component(2))]);
        assert_eq!((v * 3)[1].value(), Component(6));
        assert_eq!((v / 2)[1].value(), Component(1));
        assert_eq!((v * 0.5)[1].value(), Component(1.0));
        assert_eq!((v / 4.0)[0].value(), Component(0.25));
    }

    proptest! {
        #[test]
        fn prop_cross_is_orthogonal(a in prop::array::uniform3(-100i64..100), b in prop::array::uniform3(-100i64..100)) {
            let (a, b) = (Vector::new(a), Vector::new(b));
            let c = a.cross(b);
            prop_assert_eq!(c.dot(a), 0);
            prop_assert_eq!(c.dot(b), 0);
        }

        #[test]
        fn prop_norm_squared_is_self_dot(v in prop::array::uniform3(-1.0e3..1.0e3f64)) {
            let v = Vector::new(v);
            let n = v.norm();
            prop_assert!((n * n - v.dot(v)).abs() <= 1e-9 * v.dot(v).max(1.0));
        }
    }
}

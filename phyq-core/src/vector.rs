//! Fixed-size, stack-allocated numeric vectors.

use crate::ratio::Ratio;
use crate::representation::{Product, Quotient, Representation, ScaleBy, VectorCharacter};
use crate::scalar::Scalar;
use core::cmp::Ordering;
use core::fmt::{Display, Formatter, Result};
use core::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

/// A column vector of `N` elements.
///
/// As a magnitude, `Vector<T, N>` with a [`Scalar`] `T` is vector-classified and can carry vector quantity kinds
/// (position, velocity, force, …). With quantity elements it is the *vector of quantities* encoding, see
/// [`Component`](crate::Component).
///
/// ```rust
/// use phyq_core::Vector;
///
/// let a = Vector::new([1, 2, 3]);
/// let b = Vector::new([3, 2, 1]);
/// assert_eq!(a + b, Vector::new([4, 4, 4]));
/// assert_eq!(a * 2, Vector::new([2, 4, 6]));
/// assert_eq!(2 * a, a * 2);
/// assert_eq!(a[1], 2);
/// assert_eq!(format!("{a}"), "[ 1 2 3 ]");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash)]
pub struct Vector<T, const N: usize>(pub(crate) [T; N]);

impl<T, const N: usize> Vector<T, N> {
    /// Builds a vector from its coordinates.
    #[inline]
    pub const fn new(elements: [T; N]) -> Self {
        Self(elements)
    }

    /// Number of coordinates.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Whether `N == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns the coordinates.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Borrows the coordinates.
    #[inline]
    pub fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Coordinate `i`, if in range.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.0.get(i)
    }

    /// Iterates over the coordinates.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Applies `f` to every coordinate.
    ///
    /// This is also how a vector of quantities is converted element by element:
    ///
    /// ```rust
    /// use phyq_core::length::{Kilometer, Meter, PositionVector};
    /// use phyq_core::{Component, Quantity, Vector};
    ///
    /// type Km = Quantity<PositionVector, Kilometer, Component<i32>>;
    /// let v = Vector::new([Km::new(Component(3)), Km::new(Component(2))]);
    /// let m = v.map(|q| q.to::<Meter>());
    /// assert_eq!(m[0].value(), Component(3000));
    /// ```
    #[inline]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Vector<U, N> {
        Vector(self.0.map(f))
    }

    /// Combines two vectors coordinate by coordinate.
    pub fn zip_with<U, V, F>(self, other: Vector<U, N>, mut f: F) -> Vector<V, N>
    where
        T: Copy,
        U: Copy,
        F: FnMut(T, U) -> V,
    {
        Vector(core::array::from_fn(|i| f(self.0[i], other.0[i])))
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// The zero vector.
    pub const ZERO: Self = Vector([T::ZERO; N]);
}

impl<T: Default + Copy, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Vector([T::default(); N])
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(elements: [T; N]) -> Self {
        Vector(elements)
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;
    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.0[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.0[i]
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = core::array::IntoIter<T, N>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<A: PartialEq<B>, B, const N: usize> PartialEq<Vector<B, N>> for Vector<A, N> {
    #[inline]
    fn eq(&self, other: &Vector<B, N>) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(a, b)| a == b)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Element-wise arithmetic
// ─────────────────────────────────────────────────────────────────────────────

impl<A, B, const N: usize> Add<Vector<B, N>> for Vector<A, N>
where
    A: Add<B, Output = A> + Copy,
    B: Copy,
{
    type Output = Vector<A, N>;
    #[inline]
    fn add(self, rhs: Vector<B, N>) -> Self::Output {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<A, B, const N: usize> Sub<Vector<B, N>> for Vector<A, N>
where
    A: Sub<B, Output = A> + Copy,
    B: Copy,
{
    type Output = Vector<A, N>;
    #[inline]
    fn sub(self, rhs: Vector<B, N>) -> Self::Output {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<T: Neg<Output = T>, const N: usize> Neg for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.map(|x| -x)
    }
}

impl<T: Scalar, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn mul(self, k: T) -> Self {
        self.map(|x| x * k)
    }
}

impl<T: Scalar, const N: usize> Div<T> for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn div(self, k: T) -> Self {
        self.map(|x| x / k)
    }
}

macro_rules! impl_promoting_scale {
    ($($t:ty),*) => {$(
        impl<const N: usize> Mul<f64> for Vector<$t, N> {
            type Output = Vector<f64, N>;
            #[inline]
            fn mul(self, k: f64) -> Vector<f64, N> {
                self.scale_by(k)
            }
        }

        impl<const N: usize> Div<f64> for Vector<$t, N> {
            type Output = Vector<f64, N>;
            #[inline]
            fn div(self, k: f64) -> Vector<f64, N> {
                self.unscale_by(k)
            }
        }
    )*};
}

impl_promoting_scale!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

// ─────────────────────────────────────────────────────────────────────────────
// Representation
// ─────────────────────────────────────────────────────────────────────────────

impl<T: Scalar, const N: usize> Representation for Vector<T, N> {
    type Character = VectorCharacter;
    type Element = T;

    #[inline]
    fn rescale(self, factor: Ratio) -> Self {
        self.map(|x| x.apply_ratio(factor))
    }

    #[inline]
    fn eq_scaled(&self, a: Ratio, other: &Self, b: Ratio) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(&x, &y)| Scalar::partial_cmp_scaled(x, a, y, b) == Some(Ordering::Equal))
    }
}

impl<T, S, const N: usize> ScaleBy<S> for Vector<T, N>
where
    S: Scalar,
    T: ScaleBy<S> + Scalar,
    T::Scaled: Scalar,
{
    type Scaled = Vector<T::Scaled, N>;
    #[inline]
    fn scale_by(self, k: S) -> Self::Scaled {
        self.map(|x| x.scale_by(k))
    }
    #[inline]
    fn unscale_by(self, k: S) -> Self::Scaled {
        self.map(|x| x.unscale_by(k))
    }
}

impl<T: Scalar, const N: usize> Product<T> for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn product(self, rhs: T) -> Self {
        self * rhs
    }
}

impl<T: Scalar, const N: usize> Product<Vector<T, N>> for T {
    type Output = Vector<T, N>;
    #[inline]
    fn product(self, rhs: Vector<T, N>) -> Vector<T, N> {
        rhs.map(|x| self * x)
    }
}

impl<T: Scalar, const N: usize> Quotient<T> for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn quotient(self, rhs: T) -> Self {
        self / rhs
    }
}

/// Bracketed, space-separated coordinates. Width and precision apply to every coordinate.
impl<T: Display, const N: usize> Display for Vector<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str("[")?;
        for x in &self.0 {
            f.write_str(" ")?;
            Display::fmt(x, f)?;
        }
        f.write_str(" ]")
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
mod serde_impls {
    use super::Vector;
    use core::fmt;
    use core::marker::PhantomData;
    use serde::de::{self, SeqAccess, Visitor};
    use serde::ser::SerializeTuple;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl<T: Serialize, const N: usize> Serialize for Vector<T, N> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut tuple = serializer.serialize_tuple(N)?;
            for x in &self.0 {
                tuple.serialize_element(x)?;
            }
            tuple.end()
        }
    }

    struct VectorVisitor<T, const N: usize>(PhantomData<T>);

    impl<'de, T, const N: usize> Visitor<'de> for VectorVisitor<T, N>
    where
        T: Deserialize<'de> + Default + Copy,
    {
        type Value = Vector<T, N>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            write!(formatter, "a sequence of {} elements", N)
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Vector<T, N>, A::Error> {
            let mut out = [T::default(); N];
            for (i, slot) in out.iter_mut().enumerate() {
                *slot = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(i, &self))?;
            }
            if seq.next_element::<de::IgnoredAny>()?.is_some() {
                return Err(de::Error::invalid_length(N + 1, &self));
            }
            Ok(Vector(out))
        }
    }

    impl<'de, T, const N: usize> Deserialize<'de> for Vector<T, N>
    where
        T: Deserialize<'de> + Default + Copy,
    {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_tuple(N, VectorVisitor::<T, N>(PhantomData))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_and_access() {
        let mut v = Vector::new([1.0, 2.0, 3.0]);
        assert_eq!(v.len(), 3);
        assert!(!v.is_empty());
        assert_eq!(v.get(2), Some(&3.0));
        assert_eq!(v.get(3), None);
        v[0] = 5.0;
        assert_eq!(v.into_array(), [5.0, 2.0, 3.0]);
        assert_eq!(Vector::from([1, 2]), Vector::new([1, 2]));
        assert_eq!(Vector::<i32, 3>::ZERO, Vector::new([0, 0, 0]));
        assert_eq!(Vector::<i32, 2>::default(), Vector::new([0, 0]));
    }

    #[test]
    fn element_wise_arithmetic() {
        let a = Vector::new([1, 2, 3]);
        let b = Vector::new([3, 2, 1]);
        assert_eq!(a + b, Vector::new([4, 4, 4]));
        assert_eq!(a - b, Vector::new([-2, 0, 2]));
        assert_eq!(-a, Vector::new([-1, -2, -3]));
        assert_eq!(a * 2, Vector::new([2, 4, 6]));
        assert_eq!(Vector::new([2, 4, 6]) / 2, a);
        assert_eq!(0.5 * Vector::new([1.0, 2.0, 3.0]), Vector::new([0.5, 1.0, 1.5]));
    }

    #[test]
    fn integral_vectors_promote_when_scaled_by_f64() {
        let v = Vector::new([1i32, 2, 3]);
        assert_eq!(v * 0.5, Vector::new([0.5, 1.0, 1.5]));
        assert_eq!(v / 4.0, Vector::new([0.25, 0.5, 0.75]));
        assert_eq!(0.5 * v, v * 0.5);
        assert_eq!(Vector::new([4u8, 8]).scale_by(0.25), Vector::new([1.0, 2.0]));
    }

    #[test]
    fn scaled_equality_compares_exactly() {
        let m = Vector::new([3_000i32, 2_000]);
        let km = Vector::new([3i32, 2]);
        assert!(km.eq_scaled(Ratio::integer(1000), &m, Ratio::ONE));
        assert!(!Vector::new([5i32, 0]).eq_scaled(Ratio::integer(1_000_000_000), &Vector::new([705_032_704, 0]), Ratio::ONE));
    }

    #[test]
    fn representation_rescale_truncates_integers() {
        let v = Vector::new([1001, 1002, 1003]);
        assert_eq!(v.rescale(Ratio::new(1, 1000)), Vector::new([1, 1, 1]));
        assert_eq!(
            Vector::new([3, 2, 1]).rescale(Ratio::integer(1000)),
            Vector::new([3000, 2000, 1000])
        );
    }

    #[test]
    fn zip_and_iterate() {
        let a = Vector::new([1, 2, 3]);
        let b = Vector::new([10, 20, 30]);
        assert_eq!(a.zip_with(b, |x, y| x * y), Vector::new([10, 40, 90]));
        assert_eq!(a.iter().sum::<i32>(), 6);
        assert_eq!(a.into_iter().max(), Some(3));
    }

    #[test]
    fn display_forwards_width() {
        let v = Vector::new([1, 22, 333]);
        assert_eq!(format!("{}", v), "[ 1 22 333 ]");
        assert_eq!(format!("{:>3}", v), "[   1  22 333 ]");
        assert_eq!(format!("{:.1}", Vector::new([0.5, 1.0])), "[ 0.5 1.0 ]");
        assert_eq!(format!("{}", Vector::<i32, 0>::new([])), "[ ]");
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn serializes_as_sequence() {
            let v = Vector::new([1.5, 2.0, -3.0]);
            let json = serde_json::to_string(&v).unwrap();
            assert_eq!(json, "[1.5,2.0,-3.0]");
            let back: Vector<f64, 3> = serde_json::from_str(&json).unwrap();
            assert_eq!(back, v);
        }

        #[test]
        fn rejects_wrong_length() {
            assert!(serde_json::from_str::<Vector<i32, 3>>("[1,2]").is_err());
            assert!(serde_json::from_str::<Vector<i32, 3>>("[1,2,3,4]").is_err());
        }
    }
}

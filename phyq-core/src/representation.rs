//! Magnitude representations and their scalar/vector classification.
//!
//! A quantity's magnitude is any [`Representation`]. Each representation declares exactly one [`Character`]
//! through an associated type, so a type can never be both scalar and vector:
//!
//! - every [`Scalar`] is scalar-classified by a blanket impl;
//! - [`Vector<T, N>`](crate::Vector) and [`Component<T>`] are vector-classified;
//! - a custom vector type opts in by implementing `Representation` with `Character = VectorCharacter`.
//!
//! [`Product`] and [`Quotient`] list which magnitude combinations `Quantity * Quantity` and
//! `Quantity / Quantity` accept and what they produce. [`ScaleBy`] lists the bare numbers a magnitude can be
//! scaled by, including the integral-by-floating promotions.

use crate::ratio::Ratio;
use crate::scalar::Scalar;
use core::cmp::Ordering;
use core::fmt::{Debug, Display, Formatter, Result};
use core::ops::{Add, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::ScalarCharacter {}
    impl Sealed for super::VectorCharacter {}
}

/// Shape of a representation or quantity kind: [`ScalarCharacter`] or [`VectorCharacter`].
pub trait Character: sealed::Sealed + 'static {
    /// Whether this is the vector character.
    const IS_VECTOR: bool;
}

/// Marker for scalar-shaped magnitudes and kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScalarCharacter {}

/// Marker for vector-shaped magnitudes and kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VectorCharacter {}

impl Character for ScalarCharacter {
    const IS_VECTOR: bool = false;
}

impl Character for VectorCharacter {
    const IS_VECTOR: bool = true;
}

/// The character of a product or quotient: vector if either side is a vector.
pub trait Widen<Rhs: Character>: Character {
    /// Resulting character.
    type Output: Character;
}

impl Widen<ScalarCharacter> for ScalarCharacter {
    type Output = ScalarCharacter;
}
impl Widen<VectorCharacter> for ScalarCharacter {
    type Output = VectorCharacter;
}
impl Widen<ScalarCharacter> for VectorCharacter {
    type Output = VectorCharacter;
}
impl Widen<VectorCharacter> for VectorCharacter {
    type Output = VectorCharacter;
}

/// A magnitude type a [`Quantity`](crate::Quantity) can carry.
///
/// A custom type needs the character, the element and [`rescale`](Representation::rescale); the comparison
/// hooks have defaults that rescale both sides.
pub trait Representation:
    Copy + PartialEq + Debug + Add<Output = Self> + Sub<Output = Self> + 'static
{
    /// Scalar or vector.
    type Character: Character;
    /// The scalar each coordinate is made of.
    type Element: Scalar;

    /// Multiplies every coordinate by an exact ratio (truncating for integral elements).
    fn rescale(self, factor: Ratio) -> Self;

    /// Whether `self × a == other × b`.
    #[inline]
    fn eq_scaled(&self, a: Ratio, other: &Self, b: Ratio) -> bool {
        self.rescale(a) == other.rescale(b)
    }

    /// Orders `self × a` against `other × b`.
    #[inline]
    fn partial_cmp_scaled(&self, a: Ratio, other: &Self, b: Ratio) -> Option<Ordering>
    where
        Self: PartialOrd,
    {
        self.rescale(a).partial_cmp(&other.rescale(b))
    }
}

impl<T: Scalar> Representation for T {
    type Character = ScalarCharacter;
    type Element = T;

    #[inline]
    fn rescale(self, factor: Ratio) -> Self {
        self.apply_ratio(factor)
    }

    #[inline]
    fn eq_scaled(&self, a: Ratio, other: &Self, b: Ratio) -> bool {
        Scalar::partial_cmp_scaled(*self, a, *other, b) == Some(Ordering::Equal)
    }

    #[inline]
    fn partial_cmp_scaled(&self, a: Ratio, other: &Self, b: Ratio) -> Option<Ordering>
    where
        Self: PartialOrd,
    {
        Scalar::partial_cmp_scaled(*self, a, *other, b)
    }
}

/// Magnitude combinations allowed by `Quantity * Quantity`.
///
/// `vector * vector` is deliberately missing: use [`cross`](crate::cross) or [`dot`](crate::dot).
pub trait Product<Rhs>: Representation {
    /// Magnitude of the product.
    type Output: Representation;
    /// Multiplies the magnitudes.
    fn product(self, rhs: Rhs) -> <Self as Product<Rhs>>::Output;
}

/// Magnitude combinations allowed by `Quantity / Quantity`.
pub trait Quotient<Rhs>: Representation {
    /// Magnitude of the quotient.
    type Output: Representation;
    /// Divides the magnitudes.
    fn quotient(self, rhs: Rhs) -> <Self as Quotient<Rhs>>::Output;
}

impl<T: Scalar> Product<T> for T {
    type Output = T;
    #[inline]
    fn product(self, rhs: T) -> T {
        self * rhs
    }
}

impl<T: Scalar> Quotient<T> for T {
    type Output = T;
    #[inline]
    fn quotient(self, rhs: T) -> T {
        self / rhs
    }
}

/// Scaling a magnitude by a bare number `S`.
///
/// Every representation scales by its own element type. Integral magnitudes also scale by `f64`, and the
/// result then carries `f64` elements: `[1, 2, 3] * 0.5` gives `[0.5, 1.0, 1.5]`. Each magnitude has at most one
/// floating-point scale type, so a bare float literal always picks a single impl.
pub trait ScaleBy<S: Scalar>: Representation {
    /// The scaled magnitude.
    type Scaled: Representation<Character = Self::Character>;
    /// Multiplies every coordinate by `k`.
    fn scale_by(self, k: S) -> Self::Scaled;
    /// Divides every coordinate by `k`.
    fn unscale_by(self, k: S) -> Self::Scaled;
}

impl<T: Scalar> ScaleBy<T> for T {
    type Scaled = T;
    #[inline]
    fn scale_by(self, k: T) -> T {
        self * k
    }
    #[inline]
    fn unscale_by(self, k: T) -> T {
        self / k
    }
}

macro_rules! impl_scale_promotions {
    ($($from:ty),* => $to:ty) => {$(
        impl ScaleBy<$to> for $from {
            type Scaled = $to;
            #[inline]
            fn scale_by(self, k: $to) -> $to {
                self as $to * k
            }
            #[inline]
            fn unscale_by(self, k: $to) -> $to {
                self as $to / k
            }
        }
    )*};
}

impl_scale_promotions!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize => f64);

/// One coordinate of a vector, classified as a vector.
///
/// `Component` lets a single number carry a vector quantity kind, which is what the *vector of quantities*
/// encoding needs: `Vector<Quantity<Velocity, MetersPerSecond, Component<f64>>, 3>` holds three independently
/// typed velocity components, while `Quantity<Velocity, MetersPerSecond, Vector<f64, 3>>` is one quantity with a
/// vector magnitude.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Eq, Hash)]
pub struct Component<T>(pub T);

impl<T> Component<T> {
    /// Returns the wrapped number.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Scalar> Representation for Component<T> {
    type Character = VectorCharacter;
    type Element = T;

    #[inline]
    fn rescale(self, factor: Ratio) -> Self {
        Component(self.0.apply_ratio(factor))
    }

    #[inline]
    fn eq_scaled(&self, a: Ratio, other: &Self, b: Ratio) -> bool {
        Scalar::partial_cmp_scaled(self.0, a, other.0, b) == Some(Ordering::Equal)
    }

    #[inline]
    fn partial_cmp_scaled(&self, a: Ratio, other: &Self, b: Ratio) -> Option<Ordering>
    where
        Self: PartialOrd,
    {
        Scalar::partial_cmp_scaled(self.0, a, other.0, b)
    }
}

impl<T, S> ScaleBy<S> for Component<T>
where
    S: Scalar,
    T: ScaleBy<S> + Scalar,
    T::Scaled: Scalar,
{
    type Scaled = Component<T::Scaled>;
    #[inline]
    fn scale_by(self, k: S) -> Self::Scaled {
        Component(self.0.scale_by(k))
    }
    #[inline]
    fn unscale_by(self, k: S) -> Self::Scaled {
        Component(self.0.unscale_by(k))
    }
}

impl<T: Add<Output = T>> Add for Component<T> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Component(self.0 + rhs.0)
    }
}

impl<T: Sub<Output = T>> Sub for Component<T> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Component(self.0 - rhs.0)
    }
}

impl<T: Neg<Output = T>> Neg for Component<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Component(-self.0)
    }
}

impl<T: Display> Display for Component<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        Display::fmt(&self.0, f)
    }
}

impl<T: Scalar> Product<T> for Component<T> {
    type Output = Component<T>;
    #[inline]
    fn product(self, rhs: T) -> Component<T> {
        Component(self.0 * rhs)
    }
}

impl<T: Scalar> Product<Component<T>> for T {
    type Output = Component<T>;
    #[inline]
    fn product(self, rhs: Component<T>) -> Component<T> {
        Component(self * rhs.0)
    }
}

impl<T: Scalar> Product<Component<T>> for Component<T> {
    type Output = Component<T>;
    #[inline]
    fn product(self, rhs: Component<T>) -> Component<T> {
        Component(self.0 * rhs.0)
    }
}

impl<T: Scalar> Quotient<T> for Component<T> {
    type Output = Component<T>;
    #[inline]
    fn quotient(self, rhs: T) -> Component<T> {
        Component(self.0 / rhs)
    }
}

#[cfg(feature = "serde")]
impl<T: Serialize> Serialize for Component<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Component<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        T::deserialize(deserializer).map(Component)
    }
}

//! Quantity kinds and references.
//!
//! A *kind* names what a quantity measures (length, velocity, moment of force) beyond its bare dimension, and
//! whether it is scalar- or vector-shaped. A [`Ref<K, U>`] pairs a kind with a unit; multiplying a magnitude by
//! a reference creates a [`Quantity`](crate::Quantity).

use crate::dimension::Dimension;
use crate::representation::{Character, ScalarCharacter, Widen};
use crate::unit::Unit;
use core::fmt::{Debug, Display, Formatter, Result};
use core::marker::PhantomData;

/// Trait implemented by every quantity kind.
///
/// Named kinds are zero-sized structs, usually declared with `#[derive(Kind)]`; derived kinds are the
/// structural types [`Times`], [`Over`], [`Raised`] and [`MagnitudeOf`].
///
/// `MagnitudeKind` is the scalar kind a [`norm`](crate::norm) produces: the magnitude of a `Velocity` is a `Speed`.
/// A scalar kind is its own magnitude kind.
pub trait Kind: Copy + Debug + 'static {
    /// Scalar or vector.
    type Character: Character;
    /// Scalar counterpart of this kind.
    type MagnitudeKind: Kind<Character = ScalarCharacter>;
    /// Dimension of this kind.
    const DIMENSION: Dimension;
    /// Name of a named kind; empty for derived kinds.
    const NAME: &'static str;

    /// Writes the kind name.
    fn fmt_name(f: &mut Formatter<'_>) -> Result {
        f.write_str(Self::NAME)
    }

    /// Pairs this kind with a unit.
    ///
    /// ```rust
    /// use phyq_core::length::{Kilometer, PositionVector};
    /// use phyq_core::{Kind, Vector};
    ///
    /// let r = Vector::new([3, 2, 1]) * PositionVector.in_unit(Kilometer);
    /// assert_eq!(r.value(), Vector::new([3, 2, 1]));
    /// ```
    #[inline]
    fn in_unit<U: Unit>(self, _unit: U) -> Ref<Self, U> {
        Ref::new()
    }
}

/// [`Display`] adapter for the name of `K`.
#[derive(Clone, Copy, Debug, Default)]
pub struct KindName<K>(PhantomData<K>);

impl<K> KindName<K> {
    /// Creates the adapter.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<K: Kind> Display for KindName<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        K::fmt_name(f)
    }
}

/// A (kind, unit) pair: the type-level reference attached to a magnitude.
///
/// ```rust
/// use phyq_core::length::{Meter, PositionVector};
/// use phyq_core::{Ref, Vector};
///
/// const POSITION_M: Ref<PositionVector, Meter> = Ref::new();
/// let r = Vector::new([1.0, 2.0, 3.0]) * POSITION_M;
/// assert_eq!(r.value()[2], 3.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ref<K, U>(PhantomData<(K, U)>);

impl<K, U> Ref<K, U> {
    /// Creates the reference value.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<K, U> Default for Ref<K, U> {
    fn default() -> Self {
        Self::new()
    }
}

fn fmt_operand<K: Kind>(f: &mut Formatter<'_>) -> Result {
    if K::NAME.is_empty() {
        f.write_str("(")?;
        K::fmt_name(f)?;
        f.write_str(")")
    } else {
        K::fmt_name(f)
    }
}

/// Kind of a product `A × B`. Vector-shaped if either side is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Times<A, B>(PhantomData<(A, B)>);

impl<A: Kind, B: Kind> Kind for Times<A, B>
where
    A::Character: Widen<B::Character>,
{
    type Character = <A::Character as Widen<B::Character>>::Output;
    type MagnitudeKind = Times<A::MagnitudeKind, B::MagnitudeKind>;
    const DIMENSION: Dimension = A::DIMENSION.mul(B::DIMENSION);
    const NAME: &'static str = "";

    fn fmt_name(f: &mut Formatter<'_>) -> Result {
        fmt_operand::<A>(f)?;
        f.write_str(" × ")?;
        fmt_operand::<B>(f)
    }
}

/// Kind of a quotient `A / B`. Vector-shaped if either side is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Over<A, B>(PhantomData<(A, B)>);

impl<A: Kind, B: Kind> Kind for Over<A, B>
where
    A::Character: Widen<B::Character>,
{
    type Character = <A::Character as Widen<B::Character>>::Output;
    type MagnitudeKind = Over<A::MagnitudeKind, B::MagnitudeKind>;
    const DIMENSION: Dimension = A::DIMENSION.div(B::DIMENSION);
    const NAME: &'static str = "";

    fn fmt_name(f: &mut Formatter<'_>) -> Result {
        fmt_operand::<A>(f)?;
        f.write_str(" / ")?;
        fmt_operand::<B>(f)
    }
}

/// Kind of a scalar kind raised to an integer power.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Raised<K, const E: i8>(PhantomData<K>);

impl<K: Kind<Character = ScalarCharacter>, const E: i8> Kind for Raised<K, E> {
    type Character = ScalarCharacter;
    type MagnitudeKind = Self;
    const DIMENSION: Dimension = K::DIMENSION.pow(E);
    const NAME: &'static str = "";

    fn fmt_name(f: &mut Formatter<'_>) -> Result {
        fmt_operand::<K>(f)?;
        write!(f, "^{}", E)
    }
}

/// Scalar magnitude of a vector kind that has no dedicated name (`|force|`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MagnitudeOf<K>(PhantomData<K>);

impl<K: Kind> Kind for MagnitudeOf<K> {
    type Character = ScalarCharacter;
    type MagnitudeKind = Self;
    const DIMENSION: Dimension = K::DIMENSION;
    const NAME: &'static str = "";

    fn fmt_name(f: &mut Formatter<'_>) -> Result {
        f.write_str("|")?;
        K::fmt_name(f)?;
        f.write_str("|")
    }
}

/// The kind of pure numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Dimensionless;

impl Kind for Dimensionless {
    type Character = ScalarCharacter;
    type MagnitudeKind = Self;
    const DIMENSION: Dimension = Dimension::DIMENSIONLESS;
    const NAME: &'static str = "dimensionless";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::representation::VectorCharacter;

    #[derive(Clone, Copy, Debug)]
    struct Length;
    impl Kind for Length {
        type Character = ScalarCharacter;
        type MagnitudeKind = Self;
        const DIMENSION: Dimension = Dimension::LENGTH;
        const NAME: &'static str = "length";
    }

    #[derive(Clone, Copy, Debug)]
    struct Displacement;
    impl Kind for Displacement {
        type Character = VectorCharacter;
        type MagnitudeKind = Length;
        const DIMENSION: Dimension = Dimension::LENGTH;
        const NAME: &'static str = "displacement";
    }

    fn name<K: Kind>() -> String {
        KindName::<K>::new().to_string()
    }

    fn is_vector<K: Kind>() -> bool {
        <K::Character as Character>::IS_VECTOR
    }

    #[test]
    fn derived_kinds_widen_character() {
        assert!(!is_vector::<Times<Length, Length>>());
        assert!(is_vector::<Times<Length, Displacement>>());
        assert!(is_vector::<Over<Displacement, Length>>());
        assert!(!is_vector::<<Over<Displacement, Length> as Kind>::MagnitudeKind>());
        assert!(!is_vector::<MagnitudeOf<Displacement>>());
    }

    #[test]
    fn derived_kinds_compose_dimensions() {
        assert_eq!(<Times<Length, Length> as Kind>::DIMENSION, Dimension::LENGTH.pow(2));
        assert_eq!(<Raised<Length, 3> as Kind>::DIMENSION, Dimension::LENGTH.pow(3));
        assert_eq!(
            <Over<Displacement, Dimensionless> as Kind>::DIMENSION,
            Dimension::LENGTH
        );
    }

    #[test]
    fn names() {
        assert_eq!(name::<Length>(), "length");
        assert_eq!(name::<Times<Length, Displacement>>(), "length × displacement");
        assert_eq!(
            name::<Over<Times<Length, Length>, Length>>(),
            "(length × length) / length"
        );
        assert_eq!(name::<MagnitudeOf<Displacement>>(), "|displacement|");
        assert_eq!(name::<Raised<Length, 2>>(), "length^2");
    }
}

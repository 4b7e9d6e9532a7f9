//! Unit types and traits.

use crate::dimension::Dimension;
use crate::ratio::Ratio;
use core::fmt::{Debug, Display, Formatter, Result};
use core::marker::PhantomData;
use core::ops::{Div, Mul};

/// Trait implemented by every **unit** type.
///
/// * `RATIO` is the exact scale of this unit relative to the *coherent* unit of its dimension.
///   Example: metres are coherent (`Meter::RATIO == 1`), kilometres use `Kilometer::RATIO == 1000`
///   because `1 km = 1000 m`, and `Gram::RATIO == 1/1000` because the coherent mass unit is the kilogram.
///
/// * `DIMENSION` ties the unit to its [`Dimension`].
///
/// * `SYMBOL` is the printable string (e.g. `"m"` or `"km"`). Composite units leave it empty, set `COMPOUND`
///   and render themselves through [`Unit::fmt_symbol`].
///
/// # Invariants
///
/// - Implementations should be zero-sized marker types.
/// - `RATIO` must be strictly positive.
pub trait Unit: Copy + PartialEq + Debug + 'static {
    /// Unit-to-coherent conversion factor.
    const RATIO: Ratio;

    /// Dimension to which this unit belongs.
    const DIMENSION: Dimension;

    /// Printable symbol of a named unit.
    const SYMBOL: &'static str;

    /// Whether this unit is built from other units (`Per`, `Prod`, `Pow`).
    const COMPOUND: bool = false;

    /// Writes the unit symbol.
    fn fmt_symbol(f: &mut Formatter<'_>) -> Result {
        f.write_str(Self::SYMBOL)
    }
}

/// Exact factor converting a magnitude expressed in `From` into `To`.
///
/// ```rust
/// use phyq_core::length::{Kilometer, Meter};
/// use phyq_core::{conversion_factor, Ratio};
///
/// assert_eq!(conversion_factor::<Kilometer, Meter>(), Ratio::integer(1000));
/// assert_eq!(conversion_factor::<Meter, Kilometer>(), Ratio::new(1, 1000));
/// ```
#[inline]
pub const fn conversion_factor<From: Unit, To: Unit>() -> Ratio {
    From::RATIO.div(To::RATIO)
}

/// [`Display`] adapter for the symbol of `U`.
///
/// ```rust
/// use phyq_core::length::Kilometer;
/// use phyq_core::time::Hour;
/// use phyq_core::{Per, UnitSymbol};
///
/// assert_eq!(UnitSymbol::<Per<Kilometer, Hour>>::new().to_string(), "km/h");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct UnitSymbol<U>(PhantomData<U>);

impl<U> UnitSymbol<U> {
    /// Creates the adapter.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<U: Unit> Display for UnitSymbol<U> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        U::fmt_symbol(f)
    }
}

/// Whether `U` prints as nothing at all (the pure-number unit).
#[inline]
pub(crate) fn is_bare_number<U: Unit>() -> bool {
    !U::COMPOUND && U::SYMBOL.is_empty()
}

fn fmt_operand<U: Unit>(f: &mut Formatter<'_>) -> Result {
    if is_bare_number::<U>() {
        f.write_str("1")
    } else if U::COMPOUND {
        f.write_str("(")?;
        U::fmt_symbol(f)?;
        f.write_str(")")
    } else {
        U::fmt_symbol(f)
    }
}

/// Unit representing the division of two other units.
///
/// `Per<N, D>` corresponds to `N / D`; its ratio and dimension are computed from the operands, so
/// `Per<Kilometer, Hour>` is exactly `5/18` of a metre per second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Per<N, D>(PhantomData<(N, D)>);

impl<N, D> Per<N, D> {
    /// Creates the unit value.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<N: Unit, D: Unit> Unit for Per<N, D> {
    const RATIO: Ratio = N::RATIO.div(D::RATIO);
    const DIMENSION: Dimension = N::DIMENSION.div(D::DIMENSION);
    const SYMBOL: &'static str = "";
    const COMPOUND: bool = true;

    fn fmt_symbol(f: &mut Formatter<'_>) -> Result {
        fmt_operand::<N>(f)?;
        f.write_str("/")?;
        fmt_operand::<D>(f)
    }
}

/// Unit representing the product of two other units (`N·m`, `N·s`, …).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Prod<A, B>(PhantomData<(A, B)>);

impl<A, B> Prod<A, B> {
    /// Creates the unit value.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<A: Unit, B: Unit> Unit for Prod<A, B> {
    const RATIO: Ratio = A::RATIO.mul(B::RATIO);
    const DIMENSION: Dimension = A::DIMENSION.mul(B::DIMENSION);
    const SYMBOL: &'static str = "";
    const COMPOUND: bool = true;

    fn fmt_symbol(f: &mut Formatter<'_>) -> Result {
        fmt_operand::<A>(f)?;
        f.write_str("·")?;
        fmt_operand::<B>(f)
    }
}

/// Unit raised to an integer power (`m^2`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pow<U, const E: i8>(PhantomData<U>);

impl<U, const E: i8> Pow<U, E> {
    /// Creates the unit value.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<U: Unit, const E: i8> Unit for Pow<U, E> {
    const RATIO: Ratio = U::RATIO.pow(E);
    const DIMENSION: Dimension = U::DIMENSION.pow(E);
    const SYMBOL: &'static str = "";
    const COMPOUND: bool = true;

    fn fmt_symbol(f: &mut Formatter<'_>) -> Result {
        fmt_operand::<U>(f)?;
        write!(f, "^{}", E)
    }
}

/// Zero-sized marker type for dimensionless quantities.
///
/// `Unitless` represents a dimensionless unit with a conversion ratio of 1 and an empty symbol. It is used for
/// pure numbers (see [`dimensionless::ONE`](crate::dimensionless::ONE)) and as the result of simplifying same-unit
/// ratios (e.g., `Meters / Meters`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Unitless;

impl Unit for Unitless {
    const RATIO: Ratio = Ratio::ONE;
    const DIMENSION: Dimension = Dimension::DIMENSIONLESS;
    const SYMBOL: &'static str = "";
}

macro_rules! impl_unit_value_ops {
    ([$($g:tt)*] $t:ty) => {
        impl<$($g)* __Rhs: Unit> Mul<__Rhs> for $t {
            type Output = Prod<$t, __Rhs>;
            #[inline]
            fn mul(self, _: __Rhs) -> Self::Output {
                Prod::new()
            }
        }

        impl<$($g)* __Rhs: Unit> Div<__Rhs> for $t {
            type Output = Per<$t, __Rhs>;
            #[inline]
            fn div(self, _: __Rhs) -> Self::Output {
                Per::new()
            }
        }
    };
}

impl_unit_value_ops!([N: Unit, D: Unit,] Per<N, D>);
impl_unit_value_ops!([A: Unit, B: Unit,] Prod<A, B>);
impl_unit_value_ops!([U: Unit, const E: i8,] Pow<U, E>);
impl_unit_value_ops!([] Unitless);

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq)]
    struct Meter;
    impl Unit for Meter {
        const RATIO: Ratio = Ratio::ONE;
        const DIMENSION: Dimension = Dimension::LENGTH;
        const SYMBOL: &'static str = "m";
    }

    #[derive(Clone, Copy, Debug, PartialEq)]
    struct Kilometer;
    impl Unit for Kilometer {
        const RATIO: Ratio = Ratio::integer(1000);
        const DIMENSION: Dimension = Dimension::LENGTH;
        const SYMBOL: &'static str = "km";
    }

    #[derive(Clone, Copy, Debug, PartialEq)]
    struct Hour;
    impl Unit for Hour {
        const RATIO: Ratio = Ratio::integer(3600);
        const DIMENSION: Dimension = Dimension::TIME;
        const SYMBOL: &'static str = "h";
    }

    fn symbol<U: Unit>() -> String {
        UnitSymbol::<U>::new().to_string()
    }

    #[test]
    fn per_ratio_and_dimension() {
        type Kmh = Per<Kilometer, Hour>;
        assert_eq!(Kmh::RATIO, Ratio::new(5, 18));
        assert_eq!(Kmh::DIMENSION, Dimension::LENGTH.div(Dimension::TIME));
        assert_eq!(symbol::<Kmh>(), "km/h");
    }

    #[test]
    fn prod_and_pow() {
        type KmSquared = Pow<Kilometer, 2>;
        assert_eq!(KmSquared::RATIO, Ratio::integer(1_000_000));
        assert_eq!(KmSquared::DIMENSION, Dimension::LENGTH.pow(2));
        assert_eq!(symbol::<KmSquared>(), "km^2");
        assert_eq!(symbol::<Prod<Meter, Hour>>(), "m·h");
        assert_eq!(Prod::<Kilometer, Hour>::RATIO, Ratio::integer(3_600_000));
    }

    #[test]
    fn nested_compounds_are_parenthesized() {
        assert_eq!(symbol::<Per<Per<Meter, Hour>, Hour>>(), "(m/h)/h");
        assert_eq!(symbol::<Per<Unitless, Hour>>(), "1/h");
        assert_eq!(symbol::<Unitless>(), "");
    }

    #[test]
    fn conversion_factors() {
        assert_eq!(conversion_factor::<Kilometer, Meter>(), Ratio::integer(1000));
        assert_eq!(conversion_factor::<Meter, Kilometer>(), Ratio::new(1, 1000));
        assert!(conversion_factor::<Meter, Meter>().is_one());
    }

    #[test]
    fn unit_values_compose() {
        let speed = Per::<Meter, Hour>::new();
        let length: Prod<Per<Meter, Hour>, Hour> = speed * Hour;
        assert_eq!(length, Prod::new());
        assert_eq!(symbol::<Prod<Per<Meter, Hour>, Hour>>(), "(m/h)·h");
        let per: Per<Unitless, Hour> = Unitless / Hour;
        assert_eq!(per, Per::new());
    }
}

//! Dimensions as exponent vectors over the seven ISQ base quantities.

use core::fmt::{Display, Formatter, Result};

/// Number of base dimensions tracked by [`Dimension`].
pub const BASE_COUNT: usize = 7;

/// One of the seven ISQ base dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BaseDimension {
    /// Length (`L`).
    Length,
    /// Mass (`M`).
    Mass,
    /// Time (`T`).
    Time,
    /// Electric current (`I`).
    Current,
    /// Thermodynamic temperature (`Θ`).
    Temperature,
    /// Amount of substance (`N`).
    Amount,
    /// Luminous intensity (`J`).
    LuminousIntensity,
}

impl BaseDimension {
    /// All base dimensions, in exponent order.
    pub const ALL: [BaseDimension; BASE_COUNT] = [
        BaseDimension::Length,
        BaseDimension::Mass,
        BaseDimension::Time,
        BaseDimension::Current,
        BaseDimension::Temperature,
        BaseDimension::Amount,
        BaseDimension::LuminousIntensity,
    ];

    /// Position of this base dimension inside a [`Dimension`]'s exponent array.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Conventional ISQ symbol.
    pub const fn symbol(self) -> &'static str {
        match self {
            BaseDimension::Length => "L",
            BaseDimension::Mass => "M",
            BaseDimension::Time => "T",
            BaseDimension::Current => "I",
            BaseDimension::Temperature => "Θ",
            BaseDimension::Amount => "N",
            BaseDimension::LuminousIntensity => "J",
        }
    }
}

/// A physical dimension: one integer exponent per [`BaseDimension`].
///
/// Two dimensions are equal iff all exponents match. Multiplying quantities adds exponents, dividing subtracts
/// them and raising to a power scales them. Every operation is a `const fn`, so dimensions of derived units and
/// kinds are computed at compile time:
///
/// ```rust
/// use phyq_core::Dimension;
///
/// const VELOCITY: Dimension = Dimension::LENGTH.div(Dimension::TIME);
/// const MOMENTUM: Dimension = Dimension::MASS.mul(VELOCITY);
///
/// assert_eq!(MOMENTUM.exponents(), [1, 1, -1, 0, 0, 0, 0]);
/// assert_eq!(MOMENTUM.to_string(), "L·M·T^-1");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dimension {
    exponents: [i8; BASE_COUNT],
}

impl Dimension {
    /// The dimension of pure numbers (all exponents zero).
    pub const DIMENSIONLESS: Dimension = Dimension::new([0; BASE_COUNT]);
    /// `L`
    pub const LENGTH: Dimension = Dimension::base(BaseDimension::Length);
    /// `M`
    pub const MASS: Dimension = Dimension::base(BaseDimension::Mass);
    /// `T`
    pub const TIME: Dimension = Dimension::base(BaseDimension::Time);
    /// `I`
    pub const CURRENT: Dimension = Dimension::base(BaseDimension::Current);
    /// `Θ`
    pub const TEMPERATURE: Dimension = Dimension::base(BaseDimension::Temperature);
    /// `N`
    pub const AMOUNT: Dimension = Dimension::base(BaseDimension::Amount);
    /// `J`
    pub const LUMINOUS_INTENSITY: Dimension = Dimension::base(BaseDimension::LuminousIntensity);

    /// Builds a dimension from raw exponents, ordered as [`BaseDimension::ALL`].
    #[inline]
    pub const fn new(exponents: [i8; BASE_COUNT]) -> Self {
        Self { exponents }
    }

    /// The dimension consisting of a single base dimension to the first power.
    pub const fn base(base: BaseDimension) -> Self {
        let mut exponents = [0; BASE_COUNT];
        exponents[base.index()] = 1;
        Self { exponents }
    }

    /// Raw exponents, ordered as [`BaseDimension::ALL`].
    #[inline]
    pub const fn exponents(&self) -> [i8; BASE_COUNT] {
        self.exponents
    }

    /// Exponent of a single base dimension.
    #[inline]
    pub const fn exponent(&self, base: BaseDimension) -> i8 {
        self.exponents[base.index()]
    }

    /// Dimension of a product: exponents are summed.
    pub const fn mul(self, rhs: Dimension) -> Dimension {
        let mut exponents = self.exponents;
        let mut i = 0;
        while i < BASE_COUNT {
            exponents[i] += rhs.exponents[i];
            i += 1;
        }
        Dimension { exponents }
    }

    /// Dimension of a quotient: exponents are subtracted.
    pub const fn div(self, rhs: Dimension) -> Dimension {
        let mut exponents = self.exponents;
        let mut i = 0;
        while i < BASE_COUNT {
            exponents[i] -= rhs.exponents[i];
            i += 1;
        }
        Dimension { exponents }
    }

    /// Dimension of a power: exponents are scaled by `n`.
    pub const fn pow(self, n: i8) -> Dimension {
        let mut exponents = self.exponents;
        let mut i = 0;
        while i < BASE_COUNT {
            exponents[i] *= n;
            i += 1;
        }
        Dimension { exponents }
    }

    /// `const` equality, usable inside compile-time assertions.
    pub const fn same_as(&self, other: &Dimension) -> bool {
        let mut i = 0;
        while i < BASE_COUNT {
            if self.exponents[i] != other.exponents[i] {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Whether every exponent is zero.
    #[inline]
    pub const fn is_dimensionless(&self) -> bool {
        self.same_as(&Dimension::DIMENSIONLESS)
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.is_dimensionless() {
            return f.write_str("1");
        }
        let mut first = true;
        for base in BaseDimension::ALL {
            let e = self.exponent(base);
            if e == 0 {
                continue;
            }
            if !first {
                f.write_str("·")?;
            }
            first = false;
            f.write_str(base.symbol())?;
            if e != 1 {
                write!(f, "^{}", e)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_dimensions_are_unit_vectors() {
        for base in BaseDimension::ALL {
            let d = Dimension::base(base);
            for other in BaseDimension::ALL {
                let expected = if other == base { 1 } else { 0 };
                assert_eq!(d.exponent(other), expected);
            }
        }
    }

    #[test]
    fn mul_div_pow_follow_exponent_arithmetic() {
        let velocity = Dimension::LENGTH.div(Dimension::TIME);
        let acceleration = velocity.div(Dimension::TIME);
        let force = Dimension::MASS.mul(acceleration);

        assert_eq!(force.exponents(), [1, 1, -2, 0, 0, 0, 0]);
        assert_eq!(force.div(force), Dimension::DIMENSIONLESS);
        assert_eq!(velocity.pow(2), velocity.mul(velocity));
        assert_eq!(velocity.pow(-1), Dimension::TIME.div(Dimension::LENGTH));
        assert_eq!(velocity.pow(0), Dimension::DIMENSIONLESS);
    }

    #[test]
    fn same_as_matches_eq() {
        const A: Dimension = Dimension::LENGTH.mul(Dimension::MASS);
        const B: Dimension = Dimension::MASS.mul(Dimension::LENGTH);
        const SAME: bool = A.same_as(&B);
        assert!(SAME);
        assert!(!Dimension::LENGTH.same_as(&Dimension::TIME));
        assert!(Dimension::DIMENSIONLESS.is_dimensionless());
        assert!(!Dimension::CURRENT.is_dimensionless());
    }

    #[test]
    fn display() {
        assert_eq!(Dimension::DIMENSIONLESS.to_string(), "1");
        assert_eq!(Dimension::LENGTH.to_string(), "L");
        let voltage = Dimension::new([2, 1, -3, -1, 0, 0, 0]);
        assert_eq!(voltage.to_string(), "L^2·M·T^-3·I^-1");
        assert_eq!(Dimension::TEMPERATURE.to_string(), "Θ");
    }
}

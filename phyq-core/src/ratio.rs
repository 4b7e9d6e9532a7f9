//! Exact rational scale factors between units.

use core::fmt::{Display, Formatter, Result};

/// A reduced rational number `num / den` with `den > 0`.
///
/// Every [`Unit`](crate::Unit) carries its scale relative to the coherent unit of its dimension as a `Ratio`,
/// which keeps conversion factors exact: `Kilometer::RATIO / Hour::RATIO` is exactly `5/18`, and deciding
/// whether a conversion is integral is a question about the denominator, not about floating-point rounding.
///
/// ```rust
/// use phyq_core::Ratio;
///
/// const KMH: Ratio = Ratio::integer(1000).div(Ratio::integer(3600));
/// assert_eq!((KMH.numerator(), KMH.denominator()), (5, 18));
/// assert!(!KMH.is_integer());
/// assert_eq!(KMH.to_string(), "5/18");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ratio {
    num: i128,
    den: i128,
}

const fn gcd(a: i128, b: i128) -> i128 {
    let mut a = a.abs();
    let mut b = b.abs();
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

impl Ratio {
    /// Exactly one.
    pub const ONE: Ratio = Ratio::integer(1);

    /// Builds `num / den`, reduced to lowest terms with a positive denominator.
    ///
    /// # Panics
    ///
    /// Panics if `den` is zero. In `const` position this is a compile-time error.
    pub const fn new(num: i128, den: i128) -> Self {
        assert!(den != 0, "ratio denominator must be non-zero");
        let g = gcd(num, den);
        let (mut num, mut den) = (num / g, den / g);
        if den < 0 {
            num = -num;
            den = -den;
        }
        Self { num, den }
    }

    /// The integer `n` as a ratio.
    #[inline]
    pub const fn integer(n: i128) -> Self {
        Self { num: n, den: 1 }
    }

    /// Reduced numerator.
    #[inline]
    pub const fn numerator(&self) -> i128 {
        self.num
    }

    /// Reduced (positive) denominator.
    #[inline]
    pub const fn denominator(&self) -> i128 {
        self.den
    }

    /// Product, cross-reduced before multiplying to keep intermediates small.
    pub const fn mul(self, rhs: Ratio) -> Ratio {
        if self.num == 0 || rhs.num == 0 {
            return Ratio::integer(0);
        }
        let g1 = gcd(self.num, rhs.den);
        let g2 = gcd(rhs.num, self.den);
        Ratio {
            num: (self.num / g1) * (rhs.num / g2),
            den: (self.den / g2) * (rhs.den / g1),
        }
    }

    /// Multiplicative inverse.
    ///
    /// # Panics
    ///
    /// Panics if `self` is zero.
    pub const fn recip(self) -> Ratio {
        Ratio::new(self.den, self.num)
    }

    /// Quotient.
    #[inline]
    pub const fn div(self, rhs: Ratio) -> Ratio {
        self.mul(rhs.recip())
    }

    /// Integer power; negative exponents invert.
    pub const fn pow(self, e: i8) -> Ratio {
        let mut out = Ratio::ONE;
        let mut i = 0;
        while i < e.unsigned_abs() {
            out = out.mul(self);
            i += 1;
        }
        if e < 0 {
            out.recip()
        } else {
            out
        }
    }

    /// Whether the denominator is one.
    #[inline]
    pub const fn is_integer(&self) -> bool {
        self.den == 1
    }

    /// Whether this ratio is exactly one.
    #[inline]
    pub const fn is_one(&self) -> bool {
        self.num == 1 && self.den == 1
    }

    /// Whether this ratio is strictly positive.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.num > 0
    }

    /// `const` equality, usable inside compile-time assertions.
    #[inline]
    pub const fn same_as(&self, other: &Ratio) -> bool {
        self.num == other.num && self.den == other.den
    }

    /// The largest ratio `c` such that both `self / c` and `other / c` are integers.
    ///
    /// For two unit ratios this is the ratio of their *common unit*: the coarsest unit in which both can be
    /// expressed without fractional scaling (the common unit of `km` and `m` is `m`; of `km/h` and `m/s` it is
    /// `1/18 m/s`).
    ///
    /// ```rust
    /// use phyq_core::Ratio;
    ///
    /// let c = Ratio::new(5, 18).common(Ratio::ONE);
    /// assert_eq!(c, Ratio::new(1, 18));
    /// assert!(Ratio::new(5, 18).div(c).is_integer());
    /// ```
    pub const fn common(self, other: Ratio) -> Ratio {
        let num = gcd(self.num, other.num);
        let g = gcd(self.den, other.den);
        let den = self.den / g * other.den;
        Ratio::new(num, den)
    }

    /// Nearest `f64`.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }
}

impl Default for Ratio {
    fn default() -> Self {
        Ratio::ONE
    }
}

impl Display for Ratio {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

//! The type-erased quantity.

use crate::convert;
use crate::TagError;
use core::fmt::{Display, Formatter, Result as FmtResult};
use phyq::{Dimension, Kind, Quantity, Ratio, Representation, Unit};

/// A magnitude tagged at run time with its dimension and unit ratio.
///
/// The kind is not recorded: restoring a typed quantity picks the kind from the target type, so a tagged torque can
/// be read back as an energy of the same dimension. Use the typed API when that distinction matters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TaggedQuantity<R = f64> {
    value: R,
    dimension: Dimension,
    ratio: Ratio,
}

impl<R: Representation> TaggedQuantity<R> {
    /// Creates a tagged quantity, rejecting a non-positive ratio.
    pub fn new(value: R, dimension: Dimension, ratio: Ratio) -> Result<Self, TagError> {
        Ok(Self {
            value,
            dimension,
            ratio: convert::validate_ratio(ratio)?,
        })
    }

    /// Tags a magnitude with the dimension and ratio of `U`.
    #[inline]
    pub fn in_unit<U: Unit>(value: R) -> Self {
        Self {
            value,
            dimension: U::DIMENSION,
            ratio: U::RATIO,
        }
    }

    /// The raw magnitude.
    #[inline]
    pub fn value(&self) -> R {
        self.value
    }

    /// The dimension tag.
    #[inline]
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// The unit tag, as a multiple of the coherent unit.
    #[inline]
    pub fn ratio(&self) -> Ratio {
        self.ratio
    }

    /// Whether both quantities share a dimension.
    #[inline]
    pub fn compatible<S: Representation>(&self, other: &TaggedQuantity<S>) -> bool {
        convert::compatible(self.dimension, other.dimension)
    }

    /// Re-expresses the magnitude in another unit ratio of the same dimension.
    ///
    /// ```rust
    /// use phyq::Ratio;
    /// use phyq::length::Meters;
    /// use phyq_tagged::{TagError, TaggedQuantity};
    ///
    /// let tagged = TaggedQuantity::from(Meters::<i32>::new(2));
    /// assert_eq!(tagged.convert_to(Ratio::new(1, 100)).unwrap().value(), 200);
    /// assert!(matches!(tagged.convert_to(Ratio::integer(1000)), Err(TagError::TruncatingConversion { .. })));
    /// ```
    pub fn convert_to(self, ratio: Ratio) -> Result<Self, TagError> {
        let value = convert::convert_value(self.value, self.ratio, ratio)?;
        Ok(Self { value, ratio, ..self })
    }

    /// Restores a typed quantity, converting into `U`.
    ///
    /// Fails when the dimensions differ or when an integral magnitude would be truncated.
    ///
    /// ```rust
    /// use phyq::length::{Kilometers, Meter, Length};
    /// use phyq_tagged::TaggedQuantity;
    ///
    /// let tagged = TaggedQuantity::from(Kilometers::new(1.25));
    /// let m = tagged.try_into_quantity::<Length, Meter>().unwrap();
    /// assert!((m.value() - 1250.0).abs() < 1e-9);
    /// ```
    pub fn try_into_quantity<K, U>(self) -> Result<Quantity<K, U, R>, TagError>
    where
        K: Kind,
        U: Unit,
        R: Representation<Character = K::Character>,
    {
        convert::check_dimension(U::DIMENSION, self.dimension)?;
        let value = convert::convert_value(self.value, self.ratio, U::RATIO)?;
        Ok(Quantity::new(value))
    }

    /// Restores a typed quantity, truncating integral magnitudes toward zero.
    pub fn force_into_quantity<K, U>(self) -> Result<Quantity<K, U, R>, TagError>
    where
        K: Kind,
        U: Unit,
        R: Representation<Character = K::Character>,
    {
        convert::check_dimension(U::DIMENSION, self.dimension)?;
        let value = convert::convert_value_truncating(self.value, self.ratio, U::RATIO)?;
        Ok(Quantity::new(value))
    }
}

impl<K, U, R> From<Quantity<K, U, R>> for TaggedQuantity<R>
where
    K: Kind,
    U: Unit,
    R: Representation,
{
    #[inline]
    fn from(q: Quantity<K, U, R>) -> Self {
        Self::in_unit::<U>(q.value())
    }
}

impl<K, U, R> TryFrom<TaggedQuantity<R>> for Quantity<K, U, R>
where
    K: Kind,
    U: Unit,
    R: Representation<Character = K::Character>,
{
    type Error = TagError;

    #[inline]
    fn try_from(tagged: TaggedQuantity<R>) -> Result<Self, Self::Error> {
        tagged.try_into_quantity()
    }
}

/// Formats as `<value> × <ratio> [<dimension>]`, dropping the ratio when it is one.
impl<R: Display> Display for TaggedQuantity<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.value, f)?;
        if !self.ratio.is_one() {
            write!(f, " × {}", self.ratio)?;
        }
        write!(f, " [{}]", self.dimension)
    }
}

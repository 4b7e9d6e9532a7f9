//! Quantity type, construction and the conversion/cast engine.

use crate::dimension::Dimension;
use crate::kind::{Dimensionless, Kind, KindName, Raised};
use crate::representation::{Component, Representation, ScalarCharacter, VectorCharacter};
use crate::scalar::Scalar;
use crate::unit::{conversion_factor, is_bare_number, Pow, Unit, UnitSymbol, Unitless};
use crate::vector::Vector;
use core::fmt::{Debug, Display, Formatter, Result};
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A magnitude of type `R` measured as kind `K` in unit `U`.
///
/// The reference `(K, U)` lives only in the type: a `Quantity` is exactly as large as its magnitude. The
/// magnitude may be any [`Representation`]: a scalar, a [`Vector`], or a single vector [`Component`].
///
/// Construction checks, at compile time, that the unit has the kind's dimension and that the representation has
/// the kind's character (a vector kind needs a vector magnitude).
///
/// # Examples
///
/// ```rust
/// use phyq_core::length::{Kilometer, Meter, Meters, PositionVector};
/// use phyq_core::{Quantity, Vector};
///
/// let d = Meters::new(1500.0);
/// assert_eq!(d.to::<Kilometer>().value(), 1.5);
///
/// let r: Quantity<PositionVector, Kilometer, Vector<i32, 3>> = Quantity::new(Vector::new([3, 2, 1]));
/// assert_eq!(r.to::<Meter>().value(), Vector::new([3000, 2000, 1000]));
/// ```
///
/// Mismatched references do not compile:
///
/// ```compile_fail
/// use phyq_core::length::Length;
/// use phyq_core::time::Second;
/// use phyq_core::Quantity;
///
/// let nonsense = Quantity::<Length, Second, f64>::new(1.0);
/// ```
///
/// ```compile_fail
/// use phyq_core::length::{Meter, PositionVector};
/// use phyq_core::Quantity;
///
/// // a vector kind needs a vector magnitude
/// let r = Quantity::<PositionVector, Meter, f64>::new(1.0);
/// ```
pub struct Quantity<K, U, R = f64> {
    value: R,
    _reference: PhantomData<(K, U)>,
}

impl<K, U, R> Quantity<K, U, R> {
    /// Wraps a magnitude without the construction checks; callers guarantee consistency.
    #[inline]
    pub(crate) const fn from_value(value: R) -> Self {
        Self {
            value,
            _reference: PhantomData,
        }
    }

    /// Returns the raw magnitude.
    ///
    /// ```rust
    /// use phyq_core::time::Seconds;
    /// let t = Seconds::new(2.5);
    /// assert_eq!(t.value(), 2.5);
    /// ```
    #[inline]
    pub fn value(self) -> R {
        self.value
    }

    /// Borrows the magnitude.
    #[inline]
    pub const fn value_ref(&self) -> &R {
        &self.value
    }
}

impl<K, U, R> Quantity<K, U, R>
where
    K: Kind,
    U: Unit,
    R: Representation<Character = K::Character>,
{
    /// Creates a quantity from its magnitude.
    ///
    /// ```rust
    /// use phyq_core::length::Meters;
    /// let d = Meters::new(3.0);
    /// assert_eq!(d.value(), 3.0);
    /// ```
    #[inline]
    pub const fn new(value: R) -> Self {
        const {
            assert!(
                K::DIMENSION.same_as(&U::DIMENSION),
                "the unit's dimension does not match the quantity kind"
            )
        };
        Self::from_value(value)
    }
}

impl<K: Kind, U: Unit, R: Representation> Quantity<K, U, R> {
    /// Dimension of this quantity.
    #[inline]
    pub const fn dimension(&self) -> Dimension {
        K::DIMENSION
    }

    /// Converts to another unit of the same dimension without losing precision.
    ///
    /// Integral magnitudes only convert when the factor is an integer (coarse to fine units); any conversion is
    /// accepted for floating-point magnitudes. Anything else fails to compile, use [`Quantity::value_cast`].
    ///
    /// ```rust
    /// use phyq_core::length::{Kilometer, Kilometers, Meter};
    ///
    /// let km = Kilometers::<i32>::new(3);
    /// assert_eq!(km.to::<Meter>().value(), 3000);
    /// ```
    ///
    /// ```compile_fail
    /// use phyq_core::length::{Kilometer, Meters};
    ///
    /// // 1001 m is not a whole number of km
    /// let km = Meters::<i32>::new(1001).to::<Kilometer>();
    /// ```
    #[inline]
    pub fn to<T: Unit>(self) -> Quantity<K, T, R> {
        const {
            assert!(
                U::DIMENSION.same_as(&T::DIMENSION),
                "cannot convert between units of different dimensions"
            );
            assert!(
                <R::Element as Scalar>::TREAT_AS_FLOATING_POINT
                    || conversion_factor::<U, T>().is_integer(),
                "this conversion can truncate an integral magnitude; use `value_cast`"
            );
        }
        Quantity::from_value(self.value.rescale(conversion_factor::<U, T>()))
    }

    /// Magnitude expressed in another unit, see [`Quantity::to`].
    #[inline]
    pub fn value_in<T: Unit>(self) -> R {
        self.to::<T>().value
    }

    /// Converts to another unit of the same dimension, truncating integral magnitudes if needed.
    ///
    /// ```rust
    /// use phyq_core::length::{Kilometer, Meters};
    ///
    /// assert_eq!(Meters::<i32>::new(1001).value_cast::<Kilometer>().value(), 1);
    /// assert_eq!(Meters::<i32>::new(-1999).value_cast::<Kilometer>().value(), -1);
    /// ```
    #[inline]
    pub fn value_cast<T: Unit>(self) -> Quantity<K, T, R> {
        const {
            assert!(
                U::DIMENSION.same_as(&T::DIMENSION),
                "cannot convert between units of different dimensions"
            )
        };
        Quantity::from_value(self.value.rescale(conversion_factor::<U, T>()))
    }

    /// Magnitude expressed in another unit, see [`Quantity::value_cast`].
    #[inline]
    pub fn force_value_in<T: Unit>(self) -> R {
        self.value_cast::<T>().value
    }

    /// Reinterprets the quantity as another kind of the same dimension and character, keeping unit and magnitude.
    ///
    /// This is how an anonymous derived kind is given a name:
    ///
    /// ```rust
    /// use phyq_core::mass::Kilograms;
    /// use phyq_core::mechanics::{Momentum, NewtonSecond, MetersPerSecond, Velocity};
    /// use phyq_core::{Quantity, Vector};
    ///
    /// let v: Quantity<Velocity, MetersPerSecond, Vector<i32, 3>> = Quantity::new(Vector::new([1, 2, 3]));
    /// let p = (Kilograms::<i32>::new(2) * v).quantity_cast::<Momentum>();
    /// let p: Quantity<Momentum, NewtonSecond, _> = p.to();
    /// assert_eq!(p.value(), Vector::new([2, 4, 6]));
    /// ```
    ///
    /// ```compile_fail
    /// use phyq_core::length::Meters;
    /// use phyq_core::time::Duration;
    ///
    /// let t = Meters::new(1.0).quantity_cast::<Duration>();
    /// ```
    #[inline]
    pub fn quantity_cast<K2: Kind<Character = K::Character>>(self) -> Quantity<K2, U, R> {
        const {
            assert!(
                K::DIMENSION.same_as(&K2::DIMENSION),
                "quantity_cast requires kinds of identical dimension"
            )
        };
        Quantity::from_value(self.value)
    }

    /// Applies `f` to the magnitude, keeping the reference.
    #[inline]
    pub fn map_value<F: FnOnce(R) -> R>(self, f: F) -> Self {
        Self::from_value(f(self.value))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Scalar magnitudes
// ─────────────────────────────────────────────────────────────────────────────

impl<K, U, T> Quantity<K, U, T>
where
    K: Kind<Character = ScalarCharacter>,
    U: Unit,
    T: Scalar,
{
    /// Zero in this unit.
    pub const ZERO: Self = Self::from_value(T::ZERO);

    /// Returns the absolute value.
    ///
    /// ```rust
    /// use phyq_core::length::Meters;
    /// assert_eq!(Meters::new(-10.0).abs().value(), 10.0);
    /// ```
    #[inline]
    pub fn abs(self) -> Self {
        Self::from_value(self.value.abs())
    }

    /// Returns the smaller of two quantities of the same unit.
    ///
    /// ```rust
    /// use phyq_core::length::Meters;
    /// assert_eq!(Meters::new(3.0).min(Meters::new(5.0)).value(), 3.0);
    /// ```
    #[inline]
    pub fn min(self, other: Self) -> Self {
        if other.value < self.value {
            other
        } else {
            self
        }
    }

    /// Returns the larger of two quantities of the same unit.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        if other.value > self.value {
            other
        } else {
            self
        }
    }

    /// Raises to a compile-time integer power; kind, unit and dimension follow.
    ///
    /// ```rust
    /// use phyq_core::length::{Kilometers, Meter};
    /// use phyq_core::{Pow, Quantity};
    ///
    /// let area = Kilometers::new(2.0).pow::<2>();
    /// let m2: Quantity<_, Pow<Meter, 2>, f64> = area.to();
    /// assert_eq!(m2.value(), 4.0e6);
    /// ```
    #[inline]
    pub fn pow<const E: i8>(self) -> Quantity<Raised<K, E>, Pow<U, E>, T> {
        Quantity::from_value(self.value.powi(E as i32))
    }
}

macro_rules! impl_exp {
    ($t:ty, $libm_exp:path) => {
        impl<K, U> Quantity<K, U, $t>
        where
            K: Kind<Character = ScalarCharacter>,
            U: Unit,
        {
            /// Natural exponential of a dimensionless quantity.
            ///
            /// The magnitude is first expressed in the pure-number unit, so `exp(1 ms / 1 s)` is `exp(0.001)`.
            #[inline]
            pub fn exp(self) -> Quantity<Dimensionless, Unitless, $t> {
                const {
                    assert!(
                        K::DIMENSION.is_dimensionless(),
                        "exp is only defined for dimensionless quantities"
                    )
                };
                let x = self.value.apply_ratio(U::RATIO);
                #[cfg(feature = "std")]
                {
                    Quantity::from_value(x.exp())
                }
                #[cfg(not(feature = "std"))]
                {
                    Quantity::from_value($libm_exp(x))
                }
            }
        }
    };
}

impl_exp!(f64, libm::exp);
impl_exp!(f32, libm::expf);

// ─────────────────────────────────────────────────────────────────────────────
// Vector magnitudes
// ─────────────────────────────────────────────────────────────────────────────

impl<K, U, T, const N: usize> Quantity<K, U, Vector<T, N>>
where
    K: Kind<Character = VectorCharacter>,
    U: Unit,
    T: Scalar,
{
    /// Splits a vector quantity into a vector of quantities sharing its reference.
    ///
    /// ```rust
    /// use phyq_core::length::{Meter, PositionVector};
    /// use phyq_core::{Component, Quantity, Vector};
    ///
    /// let r: Quantity<PositionVector, Meter, Vector<i32, 2>> = Quantity::new(Vector::new([4, 5]));
    /// let parts = r.components();
    /// assert_eq!(parts[1].value(), Component(5));
    /// assert_eq!(Quantity::from_components(parts), r);
    /// ```
    #[inline]
    pub fn components(self) -> Vector<Quantity<K, U, Component<T>>, N> {
        self.value.map(|x| Quantity::from_value(Component(x)))
    }

    /// Joins a vector of quantities back into a single vector quantity.
    #[inline]
    pub fn from_components(components: Vector<Quantity<K, U, Component<T>>, N>) -> Self {
        Self::from_value(components.map(|q| q.value.0))
    }

    /// Coordinate `i` as a quantity, if in range.
    #[inline]
    pub fn component(&self, i: usize) -> Option<Quantity<K, U, Component<T>>> {
        self.value.get(i).map(|&x| Quantity::from_value(Component(x)))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Core trait impls
// ─────────────────────────────────────────────────────────────────────────────

impl<K, U, R: Clone> Clone for Quantity<K, U, R> {
    #[inline]
    fn clone(&self) -> Self {
        Self::from_value(self.value.clone())
    }
}

impl<K, U, R: Copy> Copy for Quantity<K, U, R> {}

impl<K, U, R> Default for Quantity<K, U, R>
where
    K: Kind,
    U: Unit,
    R: Representation<Character = K::Character> + Default,
{
    fn default() -> Self {
        Self::new(R::default())
    }
}

impl<K, U, R: Hash> Hash for Quantity<K, U, R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<K: Kind, U: Unit, R: Debug> Debug for Quantity<K, U, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("Quantity")
            .field("value", &self.value)
            .field("kind", &format_args!("{}", KindName::<K>::new()))
            .field("unit", &format_args!("{}", UnitSymbol::<U>::new()))
            .finish()
    }
}

/// Formats as `<value> <symbol>`; formatting flags apply to the value.
///
/// ```rust
/// use phyq_core::mechanics::KilometersPerHour;
/// use phyq_core::mechanics::Speed;
/// use phyq_core::Quantity;
///
/// let v = Quantity::<Speed, KilometersPerHour>::new(12.345);
/// assert_eq!(format!("{v:.1}"), "12.3 km/h");
/// ```
impl<K, U: Unit, R: Display> Display for Quantity<K, U, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        Display::fmt(&self.value, f)?;
        if is_bare_number::<U>() {
            return Ok(());
        }
        f.write_str(" ")?;
        U::fmt_symbol(f)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<K, U, R: Serialize> Serialize for Quantity<K, U, R> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, U, R> Deserialize<'de> for Quantity<K, U, R>
where
    K: Kind,
    U: Unit,
    R: Representation<Character = K::Character> + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        R::deserialize(deserializer).map(Self::new)
    }
}

/// Serde helper module for serializing quantities with unit information.
///
/// Use this with the `#[serde(with = "...")]` attribute to preserve unit symbols in serialized data. The symbol
/// is validated on input when present.
///
/// # Examples
///
/// ```rust
/// use phyq_core::length::Meters;
/// use phyq_core::mechanics::{KilometersPerHour, Speed};
/// use phyq_core::Quantity;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Limits {
///     #[serde(with = "phyq_core::serde_with_unit")]
///     max_speed: Quantity<Speed, KilometersPerHour>, // {"value": 50.0, "unit": "km/h"}
///
///     min_gap: Meters, // 2.0
/// }
///
/// let json = serde_json::to_string(&Limits {
///     max_speed: Quantity::new(50.0),
///     min_gap: Meters::new(2.0),
/// })
/// .unwrap();
/// assert_eq!(json, r#"{"max_speed":{"value":50.0,"unit":"km/h"},"min_gap":2.0}"#);
/// ```
#[cfg(all(feature = "serde", feature = "std"))]
pub mod serde_with_unit {
    use super::*;
    use serde::de::{self, MapAccess, Visitor};
    use serde::ser::SerializeStruct;

    struct SymbolField<U>(PhantomData<U>);

    impl<U: Unit> Serialize for SymbolField<U> {
        fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
            serializer.collect_str(&UnitSymbol::<U>::new())
        }
    }

    /// Serializes a `Quantity` as a struct with `value` and `unit` fields.
    ///
    /// # Example JSON Output
    /// ```json
    /// {"value": 42.5, "unit": "m"}
    /// ```
    pub fn serialize<K, U, R, S>(
        quantity: &Quantity<K, U, R>,
        serializer: S,
    ) -> core::result::Result<S::Ok, S::Error>
    where
        U: Unit,
        R: Serialize,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", quantity.value_ref())?;
        state.serialize_field("unit", &SymbolField::<U>(PhantomData))?;
        state.end()
    }

    /// Deserializes a `Quantity` from a struct with `value` and optionally `unit` fields.
    ///
    /// A `unit` that differs from the target unit's symbol is rejected; no conversion is attempted.
    pub fn deserialize<'de, K, U, R, D>(deserializer: D) -> core::result::Result<Quantity<K, U, R>, D::Error>
    where
        K: Kind,
        U: Unit,
        R: Representation<Character = K::Character> + Deserialize<'de>,
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Unit,
        }

        struct QuantityVisitor<K, U, R>(PhantomData<(K, U, R)>);

        impl<'de, K, U, R> Visitor<'de> for QuantityVisitor<K, U, R>
        where
            K: Kind,
            U: Unit,
            R: Representation<Character = K::Character> + Deserialize<'de>,
        {
            type Value = Quantity<K, U, R>;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("struct Quantity with value and unit fields")
            }

            fn visit_map<V>(self, mut map: V) -> core::result::Result<Quantity<K, U, R>, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<R> = None;
                let mut unit: Option<String> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Unit => {
                            if unit.is_some() {
                                return Err(de::Error::duplicate_field("unit"));
                            }
                            unit = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;

                if let Some(found) = unit {
                    let expected = UnitSymbol::<U>::new().to_string();
                    if found != expected {
                        return Err(de::Error::custom(format!(
                            "unit mismatch: expected '{}', found '{}'",
                            expected, found
                        )));
                    }
                }

                Ok(Quantity::new(value))
            }
        }

        deserializer.deserialize_struct(
            "Quantity",
            &["value", "unit"],
            QuantityVisitor(PhantomData),
        )
    }
}

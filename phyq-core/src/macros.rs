//! Macros for unit conversions and primitive left-hand operands.

/// Generates `From` implementations between every pair of the listed units of one kind.
///
/// The impls cover floating-point magnitudes (`f64` and `f32`), where every conversion is lossless enough to be
/// implicit; integral magnitudes go through [`Quantity::to`](crate::Quantity::to) or
/// [`Quantity::value_cast`](crate::Quantity::value_cast) explicitly.
///
/// ```rust
/// use phyq_core::length::{Kilometers, Meters};
///
/// let d: Meters = Kilometers::new(1.5).into();
/// assert_eq!(d.value(), 1500.0);
/// ```
#[macro_export]
macro_rules! impl_unit_conversions {
    (@pair $kind:ty, $a:ty, $b:ty, $r:ty) => {
        impl From<$crate::Quantity<$kind, $a, $r>> for $crate::Quantity<$kind, $b, $r> {
            fn from(value: $crate::Quantity<$kind, $a, $r>) -> Self {
                value.to::<$b>()
            }
        }

        impl From<$crate::Quantity<$kind, $b, $r>> for $crate::Quantity<$kind, $a, $r> {
            fn from(value: $crate::Quantity<$kind, $b, $r>) -> Self {
                value.to::<$a>()
            }
        }
    };

    // Base case: single unit, no conversions needed
    ($kind:ty: $unit:ty) => {};

    // Recursive case: implement conversions from first to all others, then recurse
    ($kind:ty: $first:ty, $($rest:ty),+ $(,)?) => {
        $(
            $crate::impl_unit_conversions!(@pair $kind, $first, $rest, f64);
            $crate::impl_unit_conversions!(@pair $kind, $first, $rest, f32);
        )+

        // Recurse with the rest of the units
        $crate::impl_unit_conversions!($kind: $($rest),+);
    };
}

/// Operators with a primitive number on the left: `2 * q`, `2 * v`, `2 * ONE`.
///
/// Rust's orphan rule forbids a single generic `impl<T: Scalar> Mul<Quantity<..>> for T`, so each primitive gets
/// its own set.
macro_rules! impl_scalar_lhs_ops {
    ($($t:ty),* $(,)?) => {
        $(
            impl<K, U, R> core::ops::Mul<$crate::Quantity<K, U, R>> for $t
            where
                K: $crate::Kind,
                U: $crate::Unit,
                R: $crate::ScaleBy<$t>,
            {
                type Output = $crate::Quantity<K, U, R::Scaled>;
                #[inline]
                fn mul(self, rhs: $crate::Quantity<K, U, R>) -> Self::Output {
                    rhs * self
                }
            }

            impl<const N: usize> core::ops::Mul<$crate::Vector<$t, N>> for $t {
                type Output = $crate::Vector<$t, N>;
                #[inline]
                fn mul(self, rhs: $crate::Vector<$t, N>) -> Self::Output {
                    rhs * self
                }
            }

            impl<K, U> core::ops::Mul<$crate::Ref<K, U>> for $t
            where
                K: $crate::Kind<Character = $crate::ScalarCharacter>,
                U: $crate::Unit,
            {
                type Output = $crate::Quantity<K, U, $t>;
                #[inline]
                fn mul(self, _: $crate::Ref<K, U>) -> Self::Output {
                    $crate::Quantity::new(self)
                }
            }

            impl<K, U, T, const N: usize> core::ops::Mul<$crate::Vector<$crate::Quantity<K, U, $crate::Component<T>>, N>>
                for $t
            where
                K: $crate::Kind<Character = $crate::VectorCharacter>,
                U: $crate::Unit,
                T: $crate::Scalar + $crate::ScaleBy<$t>,
                T::Scaled: $crate::Scalar,
            {
                type Output = $crate::Vector<$crate::Quantity<K, U, $crate::Component<T::Scaled>>, N>;
                #[inline]
                fn mul(self, rhs: $crate::Vector<$crate::Quantity<K, U, $crate::Component<T>>, N>) -> Self::Output {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_lhs_ops!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// `0.5 * v` for integral bare vectors, the left-hand twin of the promoting `Mul<f64>`.
macro_rules! impl_promoting_lhs_ops {
    ($($t:ty),*) => {$(
        impl<const N: usize> core::ops::Mul<$crate::Vector<$t, N>> for f64 {
            type Output = $crate::Vector<f64, N>;
            #[inline]
            fn mul(self, rhs: $crate::Vector<$t, N>) -> Self::Output {
                rhs * self
            }
        }
    )*};
}

impl_promoting_lhs_ops!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

// ─────────────────────────────────────────────────────────────────────────────
// Construction from references
// ─────────────────────────────────────────────────────────────────────────────

impl<T, K, U, const N: usize> core::ops::Mul<crate::Ref<K, U>> for crate::Vector<T, N>
where
    T: crate::Scalar,
    K: crate::Kind<Character = crate::VectorCharacter>,
    U: crate::Unit,
{
    type Output = crate::Quantity<K, U, crate::Vector<T, N>>;
    #[inline]
    fn mul(self, _: crate::Ref<K, U>) -> Self::Output {
        crate::Quantity::new(self)
    }
}

impl<T, K, U> core::ops::Mul<crate::Ref<K, U>> for crate::Component<T>
where
    T: crate::Scalar,
    K: crate::Kind<Character = crate::VectorCharacter>,
    U: crate::Unit,
{
    type Output = crate::Quantity<K, U, crate::Component<T>>;
    #[inline]
    fn mul(self, _: crate::Ref<K, U>) -> Self::Output {
        crate::Quantity::new(self)
    }
}

//! Runtime conversion between unit tags.
//!
//! A tag is a `(Dimension, Ratio)` pair; the ratio scales the coherent unit of the dimension. Converting a magnitude
//! from one tag to another of the same dimension multiplies it by
//!
//! ```text
//! factor = src.ratio / dst.ratio
//! ```
//!
//! which is the same exact factor the typed engine computes at compile time with
//! [`conversion_factor`](phyq::conversion_factor).

use crate::TagError;
use phyq::{Dimension, Ratio, Representation, Scalar};

/// Returns `true` when two dimensions can be converted into each other.
#[inline]
pub fn compatible(a: Dimension, b: Dimension) -> bool {
    a.same_as(&b)
}

/// Rejects ratios that cannot describe a unit.
#[inline]
pub fn validate_ratio(ratio: Ratio) -> Result<Ratio, TagError> {
    if ratio.is_positive() {
        Ok(ratio)
    } else {
        log::debug!("rejecting unit ratio {ratio}");
        Err(TagError::InvalidRatio(ratio))
    }
}

/// Exact factor converting magnitudes from `src` to `dst`.
pub fn factor(src: Ratio, dst: Ratio) -> Result<Ratio, TagError> {
    Ok(validate_ratio(src)?.div(validate_ratio(dst)?))
}

/// Converts a magnitude between two ratios of the same dimension.
///
/// Integral magnitudes only accept integral factors; see [`convert_value_truncating`] for the lossy variant.
///
/// # Panics
///
/// Like the typed conversions, an integral result that does not fit in the magnitude type panics.
pub fn convert_value<R: Representation>(value: R, src: Ratio, dst: Ratio) -> Result<R, TagError> {
    let factor = factor(src, dst)?;
    if !<R::Element as Scalar>::TREAT_AS_FLOATING_POINT && !factor.is_integer() {
        log::debug!("refusing truncating conversion by {factor}");
        return Err(TagError::TruncatingConversion { factor });
    }
    Ok(value.rescale(factor))
}

/// Converts a magnitude between two ratios, truncating integral magnitudes toward zero.
pub fn convert_value_truncating<R: Representation>(value: R, src: Ratio, dst: Ratio) -> Result<R, TagError> {
    Ok(value.rescale(factor(src, dst)?))
}

/// Fails unless `found` matches `expected`.
pub fn check_dimension(expected: Dimension, found: Dimension) -> Result<(), TagError> {
    if compatible(expected, found) {
        Ok(())
    } else {
        log::debug!("dimension mismatch: expected {expected}, found {found}");
        Err(TagError::DimensionMismatch { expected, found })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use phyq::Vector;

    const KM: Ratio = Ratio::integer(1000);
    const MM: Ratio = Ratio::new(1, 1000);

    #[test]
    fn compatible_same_dimension() {
        assert!(compatible(Dimension::LENGTH, Dimension::LENGTH));
        assert!(!compatible(Dimension::LENGTH, Dimension::TIME));
        let speed = Dimension::LENGTH.div(Dimension::TIME);
        assert!(compatible(speed, Dimension::new([1, 0, -1, 0, 0, 0, 0])));
    }

    #[test]
    fn factor_between_ratios() {
        assert_eq!(factor(KM, Ratio::ONE), Ok(KM));
        assert_eq!(factor(MM, KM), Ok(Ratio::new(1, 1_000_000)));
        assert_eq!(factor(Ratio::integer(0), KM), Err(TagError::InvalidRatio(Ratio::integer(0))));
        assert_eq!(factor(KM, Ratio::integer(-2)), Err(TagError::InvalidRatio(Ratio::integer(-2))));
    }

    #[test]
    fn float_conversion() {
        let v = convert_value(1500.0, Ratio::ONE, KM).unwrap();
        assert_relative_eq!(v, 1.5);
    }

    #[test]
    fn integral_conversion_requires_integral_factor() {
        assert_eq!(convert_value(3i64, KM, Ratio::ONE), Ok(3000));
        assert_eq!(
            convert_value(3000i64, Ratio::ONE, KM),
            Err(TagError::TruncatingConversion { factor: Ratio::new(1, 1000) })
        );
        assert_eq!(convert_value_truncating(3999i64, Ratio::ONE, KM), Ok(3));
    }

    #[test]
    fn vector_magnitudes_convert_per_coordinate() {
        let v = convert_value(Vector::new([1, -2, 3]), KM, Ratio::ONE).unwrap();
        assert_eq!(v, Vector::new([1000, -2000, 3000]));
    }

    #[test]
    fn check_dimension_reports_both_sides() {
        assert_eq!(check_dimension(Dimension::MASS, Dimension::MASS), Ok(()));
        assert_eq!(
            check_dimension(Dimension::MASS, Dimension::TIME),
            Err(TagError::DimensionMismatch {
                expected: Dimension::MASS,
                found: Dimension::TIME
            })
        );
    }
}

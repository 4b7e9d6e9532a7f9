//! Errors raised when a runtime tag does not fit the requested type.

use phyq::{Dimension, Ratio};

/// Error type for tagged-quantity conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TagError {
    /// The tag's dimension differs from the target's.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Dimension of the requested unit.
        expected: Dimension,
        /// Dimension carried by the tag.
        found: Dimension,
    },

    /// The tag's ratio is zero or negative.
    #[error("invalid unit ratio {0}: a unit must be a positive multiple of the coherent unit")]
    InvalidRatio(Ratio),

    /// The conversion factor is fractional and the magnitude is integral.
    #[error("converting by a factor of {factor} truncates an integral magnitude")]
    TruncatingConversion {
        /// Factor the magnitude would be multiplied by.
        factor: Ratio,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_tags() {
        let err = TagError::DimensionMismatch {
            expected: Dimension::LENGTH,
            found: Dimension::TIME,
        };
        assert_eq!(err.to_string(), "dimension mismatch: expected L, found T");

        let err = TagError::TruncatingConversion {
            factor: Ratio::new(1, 1000),
        };
        assert!(err.to_string().contains("1/1000"));
        assert!(TagError::InvalidRatio(Ratio::integer(-1)).to_string().contains("-1"));
    }
}

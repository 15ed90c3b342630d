//! Arbitrary-precision decimal with an explicit infinity
//!
//! Exact rationals cannot represent a division by zero, so the infinite case
//! is its own variant instead of a panic inside the arithmetic.

use num_decimal::Num;
use std::fmt;

/// Arbitrary-precision decimal value
#[derive(Debug, Clone, PartialEq)]
pub enum DecimalValue {
    /// Exact finite value
    Finite(Num),
    /// Result of dividing a non-zero value by zero
    Infinite {
        /// Sign of the infinity
        negative: bool,
    },
}

impl DecimalValue {
    /// Exact ratio `numer / denom`
    ///
    /// A zero denominator yields an infinity signed like the numerator.
    /// `0 / 0` is treated as positive infinity.
    #[must_use]
    pub fn ratio(numer: i64, denom: i64) -> Self {
        if denom == 0 {
            Self::Infinite {
                negative: numer < 0,
            }
        } else {
            Self::Finite(Num::new(numer, denom))
        }
    }

    /// Whether the value is finite
    #[must_use]
    pub fn is_finite(&self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// Nearest `f64`, if the decimal text can be read back as one
    #[must_use]
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Self::Finite(num) => num.to_string().parse().ok(),
            Self::Infinite { negative: false } => Some(f64::INFINITY),
            Self::Infinite { negative: true } => Some(f64::NEG_INFINITY),
        }
    }
}

impl fmt::Display for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(num) => write!(f, "{num}"),
            Self::Infinite { negative: false } => f.write_str("Infinity"),
            Self::Infinite { negative: true } => f.write_str("-Infinity"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_denominator_is_infinite() {
        assert_eq!(
            DecimalValue::ratio(1, 0),
            DecimalValue::Infinite { negative: false }
        );
        assert_eq!(
            DecimalValue::ratio(-1, 0),
            DecimalValue::Infinite { negative: true }
        );
    }

    #[test]
    fn test_finite_ratio() {
        let third = DecimalValue::ratio(1, 3);
        assert!(third.is_finite());
        assert!(third.to_string().starts_with("0.3"));
    }

    #[test]
    fn test_infinity_display() {
        assert_eq!(DecimalValue::ratio(5, 0).to_string(), "Infinity");
        assert_eq!(DecimalValue::ratio(-5, 0).to_string(), "-Infinity");
        assert_eq!(DecimalValue::ratio(5, 0).to_f64(), Some(f64::INFINITY));
    }
}

//! Tolerance-based equality of raw values

use mensura_core::{Result, UnitsError};
use serde::{Deserialize, Serialize};

/// How a tolerance is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ComparisonType {
    /// Tolerance is a fraction of the reference value, e.g. `0.01` for 1%
    #[default]
    Relative,
    /// Tolerance is in the same unit as the values
    Absolute,
}

/// Check `value` against `reference` within `tolerance`.
///
/// Relative tolerance scales with `|reference|` only, so swapping the
/// arguments can change the answer when the values differ in magnitude.
pub fn equals(reference: f64, value: f64, tolerance: f64, comparison_type: ComparisonType) -> Result<bool> {
    if tolerance.is_nan() || tolerance < 0.0 {
        return Err(UnitsError::invalid_argument(
            "tolerance",
            format!("must be greater than or equal to 0, got {}", tolerance),
        ));
    }

    let difference = (reference - value).abs();
    Ok(match comparison_type {
        ComparisonType::Absolute => difference <= tolerance,
        ComparisonType::Relative => difference <= tolerance * reference.abs(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute() {
        assert!(equals(1.0, 1.0, 0.0, ComparisonType::Absolute).unwrap());
        assert!(equals(1.0, 1.05, 0.1, ComparisonType::Absolute).unwrap());
        assert!(!equals(1.0, 1.2, 0.1, ComparisonType::Absolute).unwrap());
    }

    #[test]
    fn test_relative() {
        assert!(equals(100.0, 101.0, 0.01, ComparisonType::Relative).unwrap());
        assert!(!equals(100.0, 102.0, 0.01, ComparisonType::Relative).unwrap());
    }

    #[test]
    fn test_relative_is_left_anchored() {
        // 10% of 1 covers 0.9, 10% of 0.9 does not cover 1
        assert!(equals(1.0, 0.9, 0.1, ComparisonType::Relative).unwrap());
        assert!(!equals(0.9, 1.0, 0.1, ComparisonType::Relative).unwrap());
        // Only exact equality passes against a zero reference
        assert!(!equals(0.0, 1e-300, 0.5, ComparisonType::Relative).unwrap());
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        for comparison_type in [ComparisonType::Absolute, ComparisonType::Relative] {
            let err = equals(1.0, 1.0, -0.1, comparison_type).unwrap_err();
            assert!(matches!(err, UnitsError::InvalidArgument { ref name, .. } if name == "tolerance"));
        }
        assert!(equals(1.0, 1.0, f64::NAN, ComparisonType::Absolute).is_err());
    }
}

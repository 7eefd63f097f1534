//! Numeric helpers shared by the detectors.

/// Quantizes a real-valued edge strength to a sample.
///
/// Truncates toward zero and saturates at 255. Negative strengths (and NaN)
/// map to 0 so the output stays within the sample range.
#[inline]
pub(crate) fn quantize(strength: f64) -> u8 {
    let truncated = strength.trunc();
    if truncated >= 255.0 {
        u8::MAX
    } else if truncated > 0.0 {
        truncated as u8
    } else {
        0
    }
}

/// Returns `true` if `value` is usable as an amplifier.
#[inline]
pub(crate) fn is_valid_amplifier(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::{is_valid_amplifier, quantize};

    #[test]
    fn quantize_truncates_toward_zero() {
        assert_eq!(quantize(0.0), 0);
        assert_eq!(quantize(0.99), 0);
        assert_eq!(quantize(12.7), 12);
        assert_eq!(quantize(254.999), 254);
    }

    #[test]
    fn quantize_saturates_at_both_ends() {
        assert_eq!(quantize(255.0), 255);
        assert_eq!(quantize(1.0e9), 255);
        assert_eq!(quantize(f64::INFINITY), 255);
        assert_eq!(quantize(-0.5), 0);
        assert_eq!(quantize(-300.0), 0);
        assert_eq!(quantize(f64::NAN), 0);
    }

    #[test]
    fn amplifier_validation_rejects_degenerate_values() {
        assert!(is_valid_amplifier(4.0));
        assert!(is_valid_amplifier(1e-6));
        assert!(!is_valid_amplifier(0.0));
        assert!(!is_valid_amplifier(-1.0));
        assert!(!is_valid_amplifier(f64::NAN));
        assert!(!is_valid_amplifier(f64::INFINITY));
    }
}

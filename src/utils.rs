// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Utility Functions** - *Mask and Validation Helpers*
//!
//! Small helpers shared by the broadcasting engine: bitmask gather support and
//! argument validation with descriptive errors.

use minarrow::Bitmask;

use crate::errors::KernelError;

/// Collects the indices of every set bit in `mask`.
///
/// Used to turn a domain-class mask into a gather/scatter index list so that a
/// formula only ever touches the elements of its own class.
#[inline]
pub fn mask_indices(mask: &Bitmask) -> Vec<usize> {
    let len = mask.len();
    let mut idx = Vec::new();
    for i in 0..len {
        if unsafe { mask.get_unchecked(i) } {
            idx.push(i);
        }
    }
    idx
}

/// Number of set bits in `mask`.
#[inline]
pub fn mask_count(mask: &Bitmask) -> usize {
    (0..mask.len()).filter(|&i| mask.get(i)).count()
}

/// Returns true if `v` is a finite, non-negative whole number.
#[inline(always)]
pub fn is_dimension(v: f64) -> bool {
    v.is_finite() && v >= 0.0 && v.fract() == 0.0
}

/// Validates that two lengths are equal.
///
/// # Parameters
/// - `label`: Descriptive context label for error reporting (e.g., "broadcast operand")
/// - `a`: Expected length
/// - `b`: Actual length
#[inline(always)]
pub fn confirm_equal_len(label: &str, a: usize, b: usize) -> Result<(), KernelError> {
    if a != b {
        return Err(KernelError::LengthMismatch(format!(
            "{}: length mismatch (expected: {}, got: {})",
            label, a, b
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_set_bits() {
        let mut m = Bitmask::new_set_all(6, false);
        m.set(1, true);
        m.set(4, true);
        assert_eq!(mask_indices(&m), vec![1, 4]);
        assert_eq!(mask_count(&m), 2);
    }

    #[test]
    fn dimension_rules() {
        assert!(is_dimension(0.0));
        assert!(is_dimension(3.0));
        assert!(!is_dimension(-1.0));
        assert!(!is_dimension(2.5));
        assert!(!is_dimension(f64::INFINITY));
        assert!(!is_dimension(f64::NAN));
    }

    #[test]
    fn equal_len_reports_mismatch() {
        assert!(confirm_equal_len("x", 3, 3).is_ok());
        assert!(matches!(
            confirm_equal_len("x", 3, 4),
            Err(KernelError::LengthMismatch(_))
        ));
    }
}

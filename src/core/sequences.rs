//! Sequence and numeric generators

use crate::error::{Result, UtilError};
use std::collections::BTreeSet;

/// Pure: Build a tribonacci sequence of `length` terms from a three-term seed
///
/// Lengths up to 3 return a prefix of the seed. A term that does not fit in
/// `i64` returns [`UtilError::SequenceOverflow`] with its index.
///
/// # Examples
///
/// ```
/// use quickfns::core::sequences::tribonacci;
///
/// assert_eq!(tribonacci([0, 0, 1], 6).unwrap(), vec![0, 0, 1, 1, 2, 4]);
/// assert_eq!(tribonacci([1, 2, 3], 2).unwrap(), vec![1, 2]);
/// assert!(tribonacci([0, 0, 1], 100).is_err());
/// ```
pub fn tribonacci(seed: [i64; 3], length: usize) -> Result<Vec<i64>> {
    let mut sequence: Vec<i64> = seed.iter().copied().take(length).collect();

    while sequence.len() < length {
        let n = sequence.len();
        // Summed in i128 so a partial sum cannot overflow when the total fits
        let sum: i128 = sequence[n - 3..].iter().map(|&v| i128::from(v)).sum();
        let next = i64::try_from(sum).map_err(|_| UtilError::SequenceOverflow { index: n })?;
        sequence.push(next);
    }

    Ok(sequence)
}

/// Pure: Second largest distinct value, or `None` if there are fewer than two
///
/// NaN entries are ignored.
pub fn second_largest(values: &[f64]) -> Option<f64> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    sorted.sort_by(|a, b| b.total_cmp(a));
    // -0.0 and 0.0 sort apart under total_cmp but are the same value
    sorted.dedup_by(|a, b| a == b);

    sorted.get(1).copied()
}

/// Pure: Values in `1..=max(values)` that do not appear in `values`, ascending
///
/// Zeros are ignored; an empty input yields an empty result. Work and memory
/// grow with the number of missing values, not with the largest value, but
/// the result itself holds every gap: `[1, u64::MAX]` cannot be represented.
pub fn missing_numbers(values: &[u64]) -> Vec<u64> {
    let present: BTreeSet<u64> = values.iter().copied().filter(|&v| v > 0).collect();

    let mut missing = Vec::new();
    let mut previous = 0u64;
    for value in present {
        missing.extend(previous + 1..value);
        previous = value;
    }

    missing
}

/// Pure: Whether `n` is the square of an integer
pub fn is_perfect_square(n: i64) -> bool {
    if n < 0 {
        return false;
    }

    let n = n as u64;
    let estimate = (n as f64).sqrt() as u64;
    // f64 rounding can land one off in either direction for large n
    (estimate.saturating_sub(1)..=estimate + 1).any(|root| root.checked_mul(root) == Some(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tribonacci() {
        assert_eq!(tribonacci([0, 0, 1], 20).unwrap().last(), Some(&19513));
        assert_eq!(tribonacci([21, 32, 43], 1).unwrap(), vec![21]);
        assert_eq!(tribonacci([0, 0, 1], 0).unwrap(), Vec::<i64>::new());
        assert_eq!(tribonacci([10, 20, 30], 2).unwrap(), vec![10, 20]);
        assert_eq!(tribonacci([10, 20, 30], 3).unwrap(), vec![10, 20, 30]);
        assert_eq!(
            tribonacci([123, 456, 789], 8).unwrap(),
            vec![123, 456, 789, 1368, 2613, 4770, 8751, 16134]
        );
    }

    #[test]
    fn test_tribonacci_long_sequence_reports_overflow() {
        // index 75 is the first term past i64::MAX for this seed
        let longest = tribonacci([0, 0, 1], 75).unwrap();
        assert_eq!(longest.len(), 75);
        assert_eq!(longest.last(), Some(&7_015_254_043_203_144_209));

        assert_eq!(
            tribonacci([0, 0, 1], 100),
            Err(UtilError::SequenceOverflow { index: 75 })
        );
        assert_eq!(
            tribonacci([i64::MIN, i64::MIN, 0], 4),
            Err(UtilError::SequenceOverflow { index: 3 })
        );
    }

    #[test]
    fn test_tribonacci_partial_sum_overflow_is_not_an_error() {
        // i64::MAX + 1 overflows on its own, but the full sum fits
        assert_eq!(
            tribonacci([-1, i64::MAX, 1], 4).unwrap(),
            vec![-1, i64::MAX, 1, i64::MAX]
        );
    }

    #[test]
    fn test_second_largest() {
        assert_eq!(second_largest(&[1.0, 2.0, 3.0, 4.0]), Some(3.0));
        assert_eq!(second_largest(&[20.0, 139.0, 94.0, 67.0, 31.0]), Some(94.0));
        assert_eq!(second_largest(&[2.0, 3.0, 4.0, 6.0, 6.0]), Some(4.0));
        assert_eq!(second_largest(&[10.0, -17.0, 55.5, 44.0, 91.0, 0.0]), Some(55.5));
        assert_eq!(second_largest(&[1.0, 0.0, -1.0, 0.0, 1.0, 0.0, -1.0, 1.0, 0.0]), Some(0.0));
    }

    #[test]
    fn test_second_largest_without_second_value() {
        assert_eq!(second_largest(&[5.0, 5.0, 5.0, 5.0]), None);
        assert_eq!(second_largest(&[7.0]), None);
        assert_eq!(second_largest(&[]), None);
        assert_eq!(second_largest(&[f64::NAN, 3.0]), None);
    }

    #[test]
    fn test_missing_numbers() {
        assert_eq!(missing_numbers(&[1, 3, 5]), vec![2, 4]);
        assert_eq!(missing_numbers(&[1, 2, 3, 4, 5]), Vec::<u64>::new());
        assert_eq!(missing_numbers(&[1, 10]), vec![2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(missing_numbers(&[10, 1, 10, 1, 10, 1]), vec![2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(missing_numbers(&[3, 1, 4, 1, 5, 9]), vec![2, 6, 7, 8]);
        assert_eq!(missing_numbers(&[]), Vec::<u64>::new());
    }

    #[test]
    fn test_missing_numbers_unsorted_with_zeros() {
        assert_eq!(missing_numbers(&[5, 0, 3, 8, 0]), vec![1, 2, 4, 6, 7]);
        assert_eq!(missing_numbers(&[0, 0]), Vec::<u64>::new());
        assert_eq!(missing_numbers(&[5, 4, 2, 1]), vec![3]);
    }

    #[test]
    fn test_is_perfect_square() {
        for n in [0, 1, 4, 9, 16, 25, 144, 1_000_000, 4_000_000_000_000] {
            assert!(is_perfect_square(n), "{} should be a perfect square", n);
        }
        for n in [-1, -4, 2, 3, 8, 15, 99, 1_000_001] {
            assert!(!is_perfect_square(n), "{} should not be a perfect square", n);
        }
    }

    #[test]
    fn test_is_perfect_square_large_values() {
        let root: i64 = 3_037_000_499;
        assert!(is_perfect_square(root * root));
        assert!(!is_perfect_square(root * root - 1));
        assert!(!is_perfect_square(i64::MAX));
    }
}

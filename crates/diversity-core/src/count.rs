//! Counting with optional staircase bucketing

use crate::category::Categorical;
use crate::frequency::FrequencyTable;
use crate::{Error, Result};

/// Count category occurrences, grouping numeric values into stairs
///
/// With `stair == 0` every distinct value is its own category. With a positive
/// `stair` each value `v` is replaced by `floor(v / stair) * stair` before
/// counting, so the label of a bucket is the lower bound of its half-open
/// interval.
///
/// # Errors
///
/// [`Error::InvalidBucketing`] when `stair > 0` and any value is not numeric.
/// The error lists every offending position.
///
/// [`Error::InvalidParameter`] when `stair` exceeds `i64::MAX`, or when an
/// integer's stair would start below `i64::MIN`.
///
/// # Example
///
/// ```rust
/// use diversity_core::{count, CategoryValue};
///
/// let table = count(&[5, 12, 19, 25], 10).unwrap();
/// assert_eq!(table.get(&CategoryValue::Integer(10)), 2);
/// assert_eq!(table.total(), 4);
/// ```
pub fn count<V: Categorical>(values: &[V], stair: u64) -> Result<FrequencyTable> {
    if stair == 0 {
        return Ok(FrequencyTable::from_values(values));
    }

    let width = i64::try_from(stair)
        .map_err(|_| Error::InvalidParameter(format!("stair {stair} exceeds i64::MAX")))?;

    let mut table = FrequencyTable::new();
    let mut rejected = Vec::new();
    for (pos, value) in values.iter().enumerate() {
        match value.to_category().staircase(width)? {
            Some(bucket) => table.increment(bucket),
            None => rejected.push(pos),
        }
    }

    if !rejected.is_empty() {
        return Err(Error::invalid_bucketing(stair, rejected));
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CategoryValue;

    #[test]
    fn test_count_without_stair() {
        let table = count(&["a", "b", "a"], 0).unwrap();
        assert_eq!(table.count_of("a"), 2);
        assert_eq!(table.count_of("b"), 1);
    }

    #[test]
    fn test_count_with_stair() {
        let table = count(&[5, 12, 19, 25], 10).unwrap();
        let expected: FrequencyTable = vec![
            (CategoryValue::Integer(0), 1),
            (CategoryValue::Integer(10), 2),
            (CategoryValue::Integer(20), 1),
        ]
        .into_iter()
        .collect();
        assert_eq!(table, expected);
    }

    #[test]
    fn test_count_empty() {
        let empty: [i32; 0] = [];
        assert!(count(&empty, 0).unwrap().is_empty());
        assert!(count(&empty, 10).unwrap().is_empty());
    }

    #[test]
    fn test_stair_rejects_every_text_value() {
        let err = count(&["a", "b", "c"], 10).unwrap_err();
        match err {
            Error::InvalidBucketing { stair, positions } => {
                assert_eq!(stair, 10);
                assert_eq!(positions, vec![0, 1, 2]);
            }
            other => panic!("Wrong error type: {other:?}"),
        }
    }

    #[test]
    fn test_stair_rejects_mixed_values() {
        let values = vec![
            CategoryValue::from(34),
            CategoryValue::from("unknown"),
            CategoryValue::from(51),
            CategoryValue::from(""),
        ];
        match count(&values, 5) {
            Err(Error::InvalidBucketing { positions, .. }) => assert_eq!(positions, vec![1, 3]),
            other => panic!("Expected bucketing error, got {other:?}"),
        }
    }

    #[test]
    fn test_stair_on_floats() {
        let table = count(&[0.5, 9.99, 10.0, -0.1], 10).unwrap();
        assert_eq!(table.get(&CategoryValue::from(0.0)), 2);
        assert_eq!(table.get(&CategoryValue::from(10.0)), 1);
        assert_eq!(table.get(&CategoryValue::from(-10.0)), 1);
    }

    #[test]
    fn test_oversized_stair() {
        assert!(matches!(count(&[1], u64::MAX), Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn test_stair_below_integer_range() {
        assert!(matches!(count(&[i64::MIN], 3), Err(Error::InvalidParameter(_))));

        let table = count(&[i64::MIN, i64::MAX], 2).unwrap();
        assert_eq!(table.get(&CategoryValue::Integer(i64::MIN)), 1);
        assert_eq!(table.get(&CategoryValue::Integer(i64::MAX - 1)), 1);
    }
}

//! Property-based tests for counting and bucketing

use diversity_core::{count, CategoryValue, Error, FrequencyTable};
use proptest::prelude::*;

proptest! {
    // Property: counts always sum to the number of inputs
    #[test]
    fn prop_counts_sum_to_len(values in prop::collection::vec(0i64..120, 0..300), stair in 0u64..25) {
        let table = count(&values, stair).unwrap();
        prop_assert_eq!(table.total(), values.len());
    }

    // Property: counting is idempotent on an unchanged input
    #[test]
    fn prop_count_idempotent(values in prop::collection::vec("[a-e]", 0..100)) {
        let first = count(&values, 0).unwrap();
        let second = count(&values, 0).unwrap();
        prop_assert_eq!(first, second);
    }

    // Property: every bucket label is a multiple of the stair and sits at or
    // below the values it absorbed
    #[test]
    fn prop_bucket_labels_are_floor_aligned(values in prop::collection::vec(-200i64..200, 1..200), stair in 1u64..30) {
        let table = count(&values, stair).unwrap();
        for (bucket, _) in table.iter() {
            let label = bucket.as_i64().unwrap();
            prop_assert_eq!(label.rem_euclid(stair as i64), 0);
        }
        for v in &values {
            let label = v.div_euclid(stair as i64) * stair as i64;
            prop_assert!(label <= *v && *v < label + stair as i64);
            prop_assert!(table.get(&CategoryValue::Integer(label)) > 0);
        }
    }

    // Property: bucketing never produces more categories than plain counting
    #[test]
    fn prop_bucketing_coarsens(values in prop::collection::vec(0i64..100, 0..200), stair in 1u64..20) {
        let plain = count(&values, 0).unwrap();
        let bucketed = count(&values, stair).unwrap();
        prop_assert!(bucketed.len() <= plain.len());
    }

    // Property: text with a positive stair reports every element
    #[test]
    fn prop_text_bucketing_reports_all(values in prop::collection::vec("[a-z]{1,6}", 1..50), stair in 1u64..20) {
        match count(&values, stair) {
            Err(Error::InvalidBucketing { positions, .. }) => {
                prop_assert_eq!(positions, (0..values.len()).collect::<Vec<_>>());
            }
            other => prop_assert!(false, "expected bucketing error, got {:?}", other),
        }
    }
}

#[test]
fn test_age_stairs_from_roster() {
    let ages: Vec<u32> = vec![29, 34, 38, 41, 45, 45, 52, 58, 61, 67, 70];
    let table = count(&ages, 10).unwrap();

    let sorted = table.sorted_by_key();
    let labels: Vec<i64> = sorted.iter().map(|(c, _)| c.as_i64().unwrap()).collect();
    let counts: Vec<usize> = sorted.iter().map(|(_, n)| *n).collect();
    assert_eq!(labels, vec![20, 30, 40, 50, 60, 70]);
    assert_eq!(counts, vec![1, 2, 3, 2, 2, 1]);
}

#[test]
fn test_empty_table_from_empty_input() {
    let values: Vec<String> = Vec::new();
    assert_eq!(count(&values, 0).unwrap(), FrequencyTable::new());
}

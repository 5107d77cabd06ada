//! Ranking jurisdictions by diversity

use crate::{ReportError, Result};
use serde::Serialize;
use std::cmp::Ordering;
use tracing::debug;

/// A diversity index with its rank among peers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedIndex<Id> {
    pub id: Id,
    /// 1 for the most diverse
    pub rank: usize,
    pub index: f64,
}

/// Rank `(id, index)` pairs from most to least diverse
///
/// Equal indices share a rank and the next rank skips accordingly
/// (1, 2, 2, 4). Ties keep their input order.
///
/// # Errors
///
/// [`ReportError::InvalidParameter`] if any index is NaN.
pub fn rank_by_index<Id: Clone>(entries: &[(Id, f64)]) -> Result<Vec<RankedIndex<Id>>> {
    if let Some(pos) = entries.iter().position(|(_, index)| index.is_nan()) {
        return Err(ReportError::InvalidParameter(format!(
            "diversity index at position {pos} is NaN"
        )));
    }

    let mut sorted: Vec<&(Id, f64)> = entries.iter().collect();
    sorted.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let mut ranked: Vec<RankedIndex<Id>> = Vec::with_capacity(sorted.len());
    for (pos, (id, index)) in sorted.into_iter().enumerate() {
        let rank = match ranked.last() {
            Some(prev) if prev.index == *index => prev.rank,
            _ => pos + 1,
        };
        ranked.push(RankedIndex {
            id: id.clone(),
            rank,
            index: *index,
        });
    }

    debug!("Ranked {} jurisdictions", ranked.len());
    Ok(ranked)
}

/// Most and least diverse entries of a ranking
pub fn extremes<Id>(ranked: &[RankedIndex<Id>]) -> Option<(&RankedIndex<Id>, &RankedIndex<Id>)> {
    Some((ranked.first()?, ranked.last()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_competition_ranking() {
        let entries = vec![(11u32, 0.42), (12, 0.71), (13, 0.42), (14, 0.10)];
        let ranked = rank_by_index(&entries).unwrap();
        let ids: Vec<u32> = ranked.iter().map(|r| r.id).collect();
        let ranks: Vec<usize> = ranked.iter().map(|r| r.rank).collect();
        assert_eq!(ids, vec![12, 11, 13, 14]);
        assert_eq!(ranks, vec![1, 2, 2, 4]);
    }

    #[test]
    fn test_extremes() {
        let ranked = rank_by_index(&[("서울", 0.3), ("부산", 0.6), ("대구", 0.1)]).unwrap();
        let (most, least) = extremes(&ranked).unwrap();
        assert_eq!(most.id, "부산");
        assert_eq!(least.id, "대구");

        let empty: Vec<RankedIndex<u32>> = Vec::new();
        assert!(extremes(&empty).is_none());
    }

    #[test]
    fn test_nan_rejected() {
        assert!(matches!(
            rank_by_index(&[(1, 0.5), (2, f64::NAN)]),
            Err(ReportError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_empty() {
        let entries: Vec<(u32, f64)> = Vec::new();
        assert!(rank_by_index(&entries).unwrap().is_empty());
    }
}

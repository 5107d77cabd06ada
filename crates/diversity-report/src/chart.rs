//! Chart data: frequency tables reshaped per factor
//!
//! The factor is decided once, when [`ChartData`] is built. Each variant then
//! carries its own typed points, so serializers never inspect a runtime
//! factor string.

use crate::factor::{ages, genders, parties, Councilor, Factor, Gender};
use crate::{ReportConfig, ReportError, Result};
use diversity_core::{count, Categorical, CategoryValue, FrequencyTable};
use serde::Serialize;
use tracing::{debug, instrument};

/// Councilors of one gender
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenderChartPoint {
    pub gender: Gender,
    pub count: usize,
}

/// Councilors inside one age stair, `[min_age, max_age)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeChartPoint {
    pub min_age: i64,
    pub max_age: i64,
    pub count: usize,
}

/// Councilors of one party
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartyChartPoint {
    pub party: String,
    pub count: usize,
}

/// Chart payload for one factor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "factor", content = "data", rename_all = "lowercase")]
pub enum ChartData {
    Gender(Vec<GenderChartPoint>),
    Age(Vec<AgeChartPoint>),
    Party(Vec<PartyChartPoint>),
}

impl ChartData {
    /// Build the chart for `factor` from a roster
    ///
    /// # Errors
    ///
    /// [`ReportError::NoData`] for an empty roster, plus whatever the
    /// per-factor builders report.
    #[instrument(skip(roster, config), fields(roster_len = roster.len()))]
    pub fn build(factor: Factor, roster: &[Councilor], config: &ReportConfig) -> Result<Self> {
        if roster.is_empty() {
            return Err(ReportError::NoData);
        }

        let chart = match factor {
            Factor::Gender => Self::gender(&genders(roster))?,
            Factor::Age => Self::age(&ages(roster), config.age_stair)?,
            Factor::Party => Self::party(&parties(roster))?,
        };
        debug!("Built {} chart with {} points", factor, chart.len());
        Ok(chart)
    }

    /// Gender chart from raw gender codes, male first
    ///
    /// Genders that never occur are omitted.
    pub fn gender<V: Categorical>(codes: &[V]) -> Result<Self> {
        Ok(Self::Gender(gender_points(&count(codes, 0)?)?))
    }

    /// Age chart with stairs of `stair` years, youngest first
    pub fn age<V: Categorical>(values: &[V], stair: u64) -> Result<Self> {
        if stair == 0 {
            return Err(ReportError::InvalidParameter(
                "age charts need a positive stair".to_string(),
            ));
        }
        let table = count(values, stair)?;
        let stair = stair as i64;

        let points = table
            .sorted_by_key()
            .into_iter()
            .map(|(bucket, n)| {
                let (min_age, max_age) = stair_bounds(&bucket, stair)?;
                Ok(AgeChartPoint {
                    min_age,
                    max_age,
                    count: n,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::Age(points))
    }

    /// Party chart, largest party first, ties by name
    pub fn party<V: Categorical>(names: &[V]) -> Result<Self> {
        Ok(Self::Party(party_points(&count(names, 0)?)))
    }

    /// Factor this chart was built for
    pub fn factor(&self) -> Factor {
        match self {
            Self::Gender(_) => Factor::Gender,
            Self::Age(_) => Factor::Age,
            Self::Party(_) => Factor::Party,
        }
    }

    /// Number of points
    pub fn len(&self) -> usize {
        match self {
            Self::Gender(points) => points.len(),
            Self::Age(points) => points.len(),
            Self::Party(points) => points.len(),
        }
    }

    /// Check if the chart has no points
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total count across all points
    pub fn total(&self) -> usize {
        match self {
            Self::Gender(points) => points.iter().map(|p| p.count).sum(),
            Self::Age(points) => points.iter().map(|p| p.count).sum(),
            Self::Party(points) => points.iter().map(|p| p.count).sum(),
        }
    }
}

/// Integer bounds `[min, max)` of an age stair
pub(crate) fn stair_bounds(bucket: &CategoryValue, stair: i64) -> Result<(i64, i64)> {
    let min = bucket
        .as_i64()
        .ok_or_else(|| ReportError::unrecognized("age stair", bucket.to_string()))?;
    let max = min.checked_add(stair).ok_or_else(|| {
        ReportError::InvalidParameter(format!("age stair starting at {min} has no upper bound"))
    })?;
    Ok((min, max))
}

pub(crate) fn gender_points(table: &FrequencyTable) -> Result<Vec<GenderChartPoint>> {
    let mut male = 0;
    let mut female = 0;
    for (code, n) in table.iter() {
        let gender = code
            .as_str()
            .ok_or_else(|| ReportError::unrecognized("gender code", code.to_string()))?
            .parse::<Gender>()?;
        match gender {
            Gender::Male => male += n,
            Gender::Female => female += n,
        }
    }

    Ok([(Gender::Male, male), (Gender::Female, female)]
        .into_iter()
        .filter(|&(_, count)| count > 0)
        .map(|(gender, count)| GenderChartPoint { gender, count })
        .collect())
}

pub(crate) fn party_points(table: &FrequencyTable) -> Vec<PartyChartPoint> {
    table
        .sorted_by_count()
        .into_iter()
        .map(|(party, count)| PartyChartPoint {
            party: party.to_string(),
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Councilor> {
        vec![
            Councilor::new("a", "여", 44, "정의당"),
            Councilor::new("b", "남", 61, "국민의힘"),
            Councilor::new("c", "남", 38, "더불어민주당"),
            Councilor::new("d", "남", 47, "국민의힘"),
            Councilor::new("e", "여", 69, "더불어민주당"),
            Councilor::new("f", "남", 52, "국민의힘"),
        ]
    }

    #[test]
    fn test_gender_chart() {
        let chart = ChartData::build(Factor::Gender, &roster(), &ReportConfig::default()).unwrap();
        assert_eq!(
            chart,
            ChartData::Gender(vec![
                GenderChartPoint { gender: Gender::Male, count: 4 },
                GenderChartPoint { gender: Gender::Female, count: 2 },
            ])
        );
        assert_eq!(chart.factor(), Factor::Gender);
        assert_eq!(chart.total(), 6);
    }

    #[test]
    fn test_gender_chart_omits_absent() {
        let chart = ChartData::gender(&["여", "여"]).unwrap();
        assert_eq!(
            chart,
            ChartData::Gender(vec![GenderChartPoint { gender: Gender::Female, count: 2 }])
        );
        assert!(ChartData::gender(&["?"]).is_err());
        assert!(ChartData::gender(&[1, 2]).is_err());
    }

    #[test]
    fn test_age_chart_sorted_by_stair() {
        let chart = ChartData::build(Factor::Age, &roster(), &ReportConfig::default()).unwrap();
        let ChartData::Age(points) = chart else {
            panic!("expected age chart");
        };
        let mins: Vec<i64> = points.iter().map(|p| p.min_age).collect();
        assert_eq!(mins, vec![30, 40, 50, 60]);
        assert_eq!(points[1], AgeChartPoint { min_age: 40, max_age: 50, count: 2 });
        assert_eq!(points[3].count, 2);
    }

    #[test]
    fn test_age_chart_rejects_zero_stair() {
        assert!(matches!(
            ChartData::age(&[30, 40], 0),
            Err(ReportError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_age_chart_at_integer_limits() {
        assert!(matches!(
            ChartData::age(&[i64::MAX], 10),
            Err(ReportError::InvalidParameter(_))
        ));
        assert!(matches!(
            ChartData::age(&[i64::MIN], 3),
            Err(ReportError::Diversity(_))
        ));

        let chart = ChartData::age(&[i64::MAX - 20], 10).unwrap();
        assert_eq!(chart.total(), 1);
    }

    #[test]
    fn test_party_chart_ordering() {
        let chart = ChartData::build(Factor::Party, &roster(), &ReportConfig::default()).unwrap();
        assert_eq!(
            chart,
            ChartData::Party(vec![
                PartyChartPoint { party: "국민의힘".to_string(), count: 3 },
                PartyChartPoint { party: "더불어민주당".to_string(), count: 2 },
                PartyChartPoint { party: "정의당".to_string(), count: 1 },
            ])
        );
    }

    #[test]
    fn test_empty_roster() {
        let result = ChartData::build(Factor::Party, &[], &ReportConfig::default());
        assert!(matches!(result, Err(ReportError::NoData)));
    }

    #[test]
    fn test_serialized_shape() {
        let chart = ChartData::age(&[23, 27], 5).unwrap();
        let json = serde_json::to_string(&chart).unwrap();
        assert_eq!(
            json,
            r#"{"factor":"age","data":[{"minAge":20,"maxAge":25,"count":1},{"minAge":25,"maxAge":30,"count":1}]}"#
        );

        let chart = ChartData::gender(&["남"]).unwrap();
        assert_eq!(
            serde_json::to_string(&chart).unwrap(),
            r#"{"factor":"gender","data":[{"gender":"male","count":1}]}"#
        );
    }
}

//! Template paragraphs: diversity values with the counts that explain them

use crate::chart::{gender_points, party_points, stair_bounds, PartyChartPoint};
use crate::factor::{ages, genders, parties, Councilor, Factor, Gender};
use crate::ranking::{rank_by_index, RankedIndex};
use crate::{Jurisdiction, ReportConfig, ReportError, Result};
use diversity_core::{count, Categorical};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, instrument};

/// A diversity value tagged with the factor it measures
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Diversity {
    pub action_type: Factor,
    pub value: f64,
}

/// Compute the configured diversity index of a roster for one factor
///
/// Ages are bucketed with `config.age_stair`; genders and parties are counted
/// as-is.
#[instrument(skip(roster, config), fields(roster_len = roster.len(), index = %config.index))]
pub fn diversity_of(factor: Factor, roster: &[Councilor], config: &ReportConfig) -> Result<Diversity> {
    let value = match factor {
        Factor::Gender => config.index_of(&genders(roster), 0)?,
        Factor::Age => config.index_of(&ages(roster), config.age_stair)?,
        Factor::Party => config.index_of(&parties(roster), 0)?,
    };
    debug!("{} diversity = {:.4}", factor, value);
    Ok(Diversity {
        action_type: factor,
        value,
    })
}

/// Head-count by gender for one term
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenderPopulation {
    pub year: u16,
    pub male_pop: usize,
    pub female_pop: usize,
}

/// Gender paragraph
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenderTemplate {
    pub gender_diversity_index: f64,
    pub current: GenderPopulation,
}

impl GenderTemplate {
    /// Build the paragraph for the current term's roster
    #[instrument(skip(roster, config), fields(roster_len = roster.len()))]
    pub fn from_roster(roster: &[Councilor], config: &ReportConfig) -> Result<Self> {
        let codes = genders(roster);
        let table = count(&codes, 0)?;
        let mut current = GenderPopulation {
            year: config.current_year,
            male_pop: 0,
            female_pop: 0,
        };
        for point in gender_points(&table)? {
            match point.gender {
                Gender::Male => current.male_pop = point.count,
                Gender::Female => current.female_pop = point.count,
            }
        }

        Ok(Self {
            gender_diversity_index: config.index_of(&codes, 0)?,
            current,
        })
    }
}

/// Party paragraph: elected seats against candidacies
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyTemplate {
    pub party_diversity_index: f64,
    pub current_elected: Vec<PartyChartPoint>,
    pub current_candidate: Vec<PartyChartPoint>,
}

impl PartyTemplate {
    /// Build the paragraph from the elected and candidate rosters
    ///
    /// The index is computed over the elected roster. An empty candidate
    /// roster yields an empty candidate list.
    #[instrument(skip_all, fields(elected = elected.len(), candidates = candidates.len()))]
    pub fn from_rosters(
        elected: &[Councilor],
        candidates: &[Councilor],
        config: &ReportConfig,
    ) -> Result<Self> {
        let elected_parties = parties(elected);
        Ok(Self {
            party_diversity_index: config.index_of(&elected_parties, 0)?,
            current_elected: party_points(&count(&elected_parties, 0)?),
            current_candidate: party_points(&count(&parties(candidates), 0)?),
        })
    }
}

/// One bar of an age histogram
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeHistogramPoint {
    pub min_age: i64,
    pub max_age: i64,
    pub count: usize,
    /// Position of the bar, youngest first
    pub age_group: usize,
}

/// Equal-width age histogram
///
/// Only stairs that contain at least one age are emitted; `age_group` numbers
/// the emitted bars from 0.
pub fn age_histogram<V: Categorical>(values: &[V], stair: u64) -> Result<Vec<AgeHistogramPoint>> {
    if stair == 0 {
        return Err(ReportError::InvalidParameter(
            "age histograms need a positive stair".to_string(),
        ));
    }
    if values.is_empty() {
        return Err(ReportError::NoData);
    }

    let width = stair as i64;
    count(values, stair)?
        .sorted_by_key()
        .into_iter()
        .enumerate()
        .map(|(age_group, (bucket, n))| {
            let (min_age, max_age) = stair_bounds(&bucket, width)?;
            Ok(AgeHistogramPoint {
                min_age,
                max_age,
                count: n,
                age_group,
            })
        })
        .collect()
}

/// Stored age diversity of one term, for candidates and for the elected
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermAgeIndex {
    pub year: u16,
    pub candidate_count: usize,
    pub candidate_diversity_index: f64,
    pub candidate_diversity_rank: usize,
    pub elected_diversity_index: f64,
    pub elected_diversity_rank: usize,
}

/// A term of the index history with its election ordinal
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AgeIndexHistoryEntry {
    pub unit: u16,
    #[serde(flatten)]
    pub term: TermAgeIndex,
}

/// Where the jurisdiction stands among its peers
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeRankingParagraph<Id> {
    pub age_diversity_index: f64,
    pub all_indices: Vec<RankedIndex<Id>>,
}

/// Age diversity across past elections, oldest first
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeIndexHistoryParagraph {
    pub most_recent_year: u16,
    pub history: Vec<AgeIndexHistoryEntry>,
}

/// Age distribution of the current term
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeHistogramParagraph {
    pub year: u16,
    pub candidate_count: usize,
    pub elected_count: usize,
    pub histogram: Vec<AgeHistogramPoint>,
}

/// Age paragraph
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeTemplate<Id = Jurisdiction> {
    pub ranking_paragraph: AgeRankingParagraph<Id>,
    pub index_history_paragraph: AgeIndexHistoryParagraph,
    pub age_histogram_paragraph: AgeHistogramParagraph,
}

impl<Id: Clone + PartialEq + fmt::Debug> AgeTemplate<Id> {
    /// Build the paragraph for `subject`
    ///
    /// `peers` holds the age diversity index of every jurisdiction ranked
    /// alongside `subject`, `terms` the stored per-election indices in any
    /// order, and the rosters are those of the current term.
    ///
    /// # Errors
    ///
    /// [`ReportError::NoData`] when there is no term history or no elected
    /// roster, [`ReportError::InvalidParameter`] when `subject` is not among
    /// `peers`, a peer index is NaN, or a term falls outside the election
    /// cycle.
    #[instrument(skip_all, fields(peers = peers.len(), terms = terms.len()))]
    pub fn build(
        subject: &Id,
        peers: &[(Id, f64)],
        terms: &[TermAgeIndex],
        elected: &[Councilor],
        candidates: &[Councilor],
        config: &ReportConfig,
    ) -> Result<Self> {
        let all_indices = rank_by_index(peers)?;
        let age_diversity_index = all_indices
            .iter()
            .find(|ranked| ranked.id == *subject)
            .map(|ranked| ranked.index)
            .ok_or_else(|| {
                ReportError::InvalidParameter(format!("{subject:?} is not among the ranked peers"))
            })?;

        let mut terms = terms.to_vec();
        terms.sort_by_key(|term| term.year);
        let most_recent_year = terms.last().ok_or(ReportError::NoData)?.year;
        let history = terms
            .into_iter()
            .map(|term| {
                Ok(AgeIndexHistoryEntry {
                    unit: config.election_unit(term.year)?,
                    term,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let histogram = age_histogram(&ages(elected), config.age_stair)?;
        debug!(
            "Age template: index {:.4}, {} terms, {} histogram bars",
            age_diversity_index,
            history.len(),
            histogram.len()
        );

        Ok(Self {
            ranking_paragraph: AgeRankingParagraph {
                age_diversity_index,
                all_indices,
            },
            index_history_paragraph: AgeIndexHistoryParagraph {
                most_recent_year,
                history,
            },
            age_histogram_paragraph: AgeHistogramParagraph {
                year: config.current_year,
                candidate_count: candidates.len(),
                elected_count: elected.len(),
                histogram,
            },
        })
    }
}

/// Template payload for one factor
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "factor", content = "data", rename_all = "lowercase")]
pub enum TemplateData<Id = Jurisdiction> {
    Gender(GenderTemplate),
    Age(AgeTemplate<Id>),
    Party(PartyTemplate),
}

impl<Id> TemplateData<Id> {
    /// Factor this template describes
    pub fn factor(&self) -> Factor {
        match self {
            Self::Gender(_) => Factor::Gender,
            Self::Age(_) => Factor::Age,
            Self::Party(_) => Factor::Party,
        }
    }
}

impl<Id> From<GenderTemplate> for TemplateData<Id> {
    fn from(template: GenderTemplate) -> Self {
        Self::Gender(template)
    }
}

impl<Id> From<AgeTemplate<Id>> for TemplateData<Id> {
    fn from(template: AgeTemplate<Id>) -> Self {
        Self::Age(template)
    }
}

impl<Id> From<PartyTemplate> for TemplateData<Id> {
    fn from(template: PartyTemplate) -> Self {
        Self::Party(template)
    }
}

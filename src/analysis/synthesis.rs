//! Cross-area synthesis: merges seven independent assessments into a
//! single composite picture.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::analyzers::{AssessedTrait, DomainAssessment, LifeArea};

const TOP_TRAITS: usize = 5;

/// Merged highlights across all life areas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisSummary {
    /// Up to five strongest traits, deduplicated by name.
    pub core_strengths: Vec<AssessedTrait>,
    /// Up to five weakest traits, deduplicated by name.
    pub core_challenges: Vec<AssessedTrait>,
    /// One theme line per area that scored notably high or low.
    pub key_themes: Vec<String>,
    /// The highest-scoring life area, if any assessments exist.
    pub dominant_area: Option<LifeArea>,
}

/// Full result of one deep-analysis run. This is the unit the cache
/// stores and the fingerprint keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeepAnalysis {
    pub assessments: Vec<DomainAssessment>,
    pub synthesis: SynthesisSummary,
    /// Mean of the area sub-scores, clamped to [0, 100].
    pub overall_score: f64,
    pub computed_at: DateTime<Utc>,
}

impl DeepAnalysis {
    /// Build the composite analysis from per-area assessments. The input
    /// order does not matter; assessments are sorted into canonical area
    /// order so equal charts produce byte-equal serializations.
    pub fn from_assessments(mut assessments: Vec<DomainAssessment>) -> DeepAnalysis {
        assessments.sort_by_key(|a| a.area);
        let synthesis = synthesize(&assessments);
        let overall_score = overall_score(&assessments);
        DeepAnalysis {
            assessments,
            synthesis,
            overall_score,
            computed_at: Utc::now(),
        }
    }

    pub fn assessment(&self, area: LifeArea) -> Option<&DomainAssessment> {
        self.assessments.iter().find(|a| a.area == area)
    }
}

/// Mean of the sub-scores; an empty run scores zero rather than NaN.
pub fn overall_score(assessments: &[DomainAssessment]) -> f64 {
    if assessments.is_empty() {
        return 0.0;
    }
    let sum: f64 = assessments.iter().map(|a| a.score).sum();
    (sum / assessments.len() as f64).clamp(0.0, 100.0)
}

pub fn synthesize(assessments: &[DomainAssessment]) -> SynthesisSummary {
    let core_strengths = top_traits(
        assessments.iter().flat_map(|a| a.strengths.iter()),
        /* strongest_first */ true,
    );
    let core_challenges = top_traits(
        assessments.iter().flat_map(|a| a.challenges.iter()),
        /* strongest_first */ false,
    );

    let mut key_themes = Vec::new();
    for assessment in assessments {
        if assessment.score >= 70.0 {
            key_themes.push(format!("{} is a pronounced area of support", assessment.area));
        } else if assessment.score < 35.0 {
            key_themes.push(format!("{} calls for sustained attention", assessment.area));
        }
    }

    let dominant_area = assessments
        .iter()
        .max_by(|a, b| a.score.total_cmp(&b.score))
        .map(|a| a.area);

    SynthesisSummary {
        core_strengths,
        core_challenges,
        key_themes,
        dominant_area,
    }
}

/// Rank traits by strength, keep the first occurrence of each name, cap
/// at [`TOP_TRAITS`]. Ties keep the incoming (area) order, so the ranking
/// is stable for equal inputs.
fn top_traits<'a>(
    traits: impl Iterator<Item = &'a AssessedTrait>,
    strongest_first: bool,
) -> Vec<AssessedTrait> {
    let mut ranked: Vec<&AssessedTrait> = traits.collect();
    if strongest_first {
        ranked.sort_by(|a, b| b.strength.cmp(&a.strength));
    } else {
        ranked.sort_by(|a, b| a.strength.cmp(&b.strength));
    }

    let mut seen: Vec<&str> = Vec::new();
    let mut out = Vec::new();
    for t in ranked {
        if seen.contains(&t.name.as_str()) {
            continue;
        }
        seen.push(&t.name);
        out.push(t.clone());
        if out.len() == TOP_TRAITS {
            break;
        }
    }
    out
}

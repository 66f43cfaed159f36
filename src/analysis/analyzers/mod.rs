//! Life-area analyzers.
//!
//! Each analyzer is a pure function of the shared [`AnalysisContext`]: it
//! reads derived quantities, never mutates anything, and never looks at
//! another analyzer's output. That statelessness is what makes the 7-way
//! fan-out in the engine safe.

pub mod career;
pub mod character;
pub mod education;
pub mod health;
pub mod relationship;
pub mod spiritual;
pub mod wealth;

use serde::{Deserialize, Serialize};

use crate::analysis::context::AnalysisContext;
use crate::models::{Planet, StrengthLevel};

/// The seven assessed life areas, in canonical merge order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum LifeArea {
    Character,
    Career,
    Relationship,
    Health,
    Wealth,
    Education,
    Spiritual,
}

impl std::fmt::Display for LifeArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// A named quality with its strength band, e.g. "Disciplined career drive".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessedTrait {
    pub name: String,
    pub strength: StrengthLevel,
}

impl AssessedTrait {
    pub fn new(name: impl Into<String>, strength: StrengthLevel) -> Self {
        AssessedTrait {
            name: name.into(),
            strength,
        }
    }
}

/// Structured placement fact; the template layer renders these, this core
/// never formats user-facing prose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub label: String,
    pub detail: String,
}

impl Finding {
    pub fn new(label: impl Into<String>, detail: impl Into<String>) -> Self {
        Finding {
            label: label.into(),
            detail: detail.into(),
        }
    }
}

/// Output of one life-area analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainAssessment {
    pub area: LifeArea,
    /// Sub-score in [0, 100].
    pub score: f64,
    pub strengths: Vec<AssessedTrait>,
    pub challenges: Vec<AssessedTrait>,
    pub findings: Vec<Finding>,
}

/// Weighted sub-score combination used by every analyzer: lord of the
/// area's primary house carries double weight, divided down to a 0-100
/// range the same way across areas.
pub(crate) fn area_score(primary: StrengthLevel, second: StrengthLevel, third: StrengthLevel, bonus: f64) -> f64 {
    let raw = primary.value() as f64 * 10.0
        + second.value() as f64 * 5.0
        + third.value() as f64 * 5.0
        + bonus;
    (raw / 1.5).clamp(0.0, 100.0)
}

/// File a graded trait under strengths or challenges; moderate placements
/// are not reported either way.
pub(crate) fn file_trait(
    assessment: &mut DomainAssessment,
    name: impl Into<String>,
    level: StrengthLevel,
) {
    if level >= StrengthLevel::Strong {
        assessment.strengths.push(AssessedTrait::new(name, level));
    } else if level <= StrengthLevel::Weak {
        assessment.challenges.push(AssessedTrait::new(name, level));
    }
}

/// Render a planet's house placement for a finding detail. A chart may omit
/// a body entirely; the detail says so instead of inventing a house.
pub(crate) fn placement_detail(ctx: &AnalysisContext, planet: Planet) -> String {
    match ctx.planet_house(planet) {
        Some(house) => format!("{planet} in house {house}"),
        None => format!("{planet} has no placement in this chart"),
    }
}

pub(crate) fn empty_assessment(area: LifeArea) -> DomainAssessment {
    DomainAssessment {
        area,
        score: 0.0,
        strengths: Vec::new(),
        challenges: Vec::new(),
        findings: Vec::new(),
    }
}

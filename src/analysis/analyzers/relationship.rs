//! Relationship and partnership analysis.

use crate::analysis::analyzers::{
    area_score, empty_assessment, file_trait, placement_detail, AssessedTrait, DomainAssessment,
    Finding, LifeArea,
};
use crate::analysis::context::AnalysisContext;
use crate::error::EngineResult;
use crate::models::{Dignity, Planet, StrengthLevel};

pub fn analyze(ctx: &AnalysisContext) -> EngineResult<DomainAssessment> {
    let mut assessment = empty_assessment(LifeArea::Relationship);

    let seventh_lord = ctx.house_lord(7);
    let seventh_level = ctx.strength_level(seventh_lord);
    let venus_level = ctx.strength_level(Planet::Venus);
    let moon_level = ctx.strength_level(Planet::Moon);

    assessment.score = area_score(seventh_level, venus_level, moon_level, 0.0);

    file_trait(&mut assessment, "Partnership harmony", seventh_level);
    file_trait(&mut assessment, "Affection and attraction", venus_level);
    file_trait(&mut assessment, "Emotional availability", moon_level);

    // Afflicted Venus flags relationship friction regardless of the band.
    if matches!(
        ctx.dignity(Planet::Venus),
        Dignity::Debilitated | Dignity::EnemySign
    ) {
        assessment.challenges.push(AssessedTrait::new(
            "Strained expression of affection",
            StrengthLevel::Weak,
        ));
    }

    assessment.findings.push(Finding::new(
        "Seventh lord",
        placement_detail(ctx, seventh_lord),
    ));
    let occupants = ctx.planets_in_house(7);
    if !occupants.is_empty() {
        let names: Vec<String> = occupants.iter().map(|p| p.planet.to_string()).collect();
        assessment
            .findings
            .push(Finding::new("Seventh house occupants", names.join(", ")));
    }

    Ok(assessment)
}

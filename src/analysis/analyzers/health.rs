//! Health and vitality analysis.
//!
//! The ascendant lord carries the constitution; the sixth and eighth houses
//! mark disease and chronic vulnerability.

use crate::analysis::analyzers::{
    area_score, empty_assessment, file_trait, AssessedTrait, DomainAssessment, Finding, LifeArea,
};
use crate::analysis::context::AnalysisContext;
use crate::error::EngineResult;
use crate::models::StrengthLevel;

pub fn analyze(ctx: &AnalysisContext) -> EngineResult<DomainAssessment> {
    let mut assessment = empty_assessment(LifeArea::Health);

    let ascendant_lord = ctx.ascendant_lord();
    let lord_level = ctx.strength_level(ascendant_lord);
    let sixth_lord_level = ctx.strength_level(ctx.house_lord(6));
    let eighth_level = ctx.house_strength(8);

    assessment.score = area_score(lord_level, sixth_lord_level, eighth_level, 0.0);

    file_trait(&mut assessment, "Constitution and vitality", lord_level);
    file_trait(&mut assessment, "Resistance to illness", sixth_lord_level);

    // Malefics crowding the dusthana houses flag chronic weak spots.
    for house in [6u8, 8, 12] {
        let malefics: Vec<String> = ctx
            .planets_in_house(house)
            .iter()
            .filter(|p| !p.planet.is_natural_benefic())
            .map(|p| p.planet.to_string())
            .collect();
        if malefics.len() >= 2 {
            assessment.challenges.push(AssessedTrait::new(
                format!("Affliction cluster in house {house}"),
                StrengthLevel::Weak,
            ));
            assessment.findings.push(Finding::new(
                format!("House {house} malefics"),
                malefics.join(", "),
            ));
        }
    }

    assessment.findings.push(Finding::new(
        "Ascendant lord",
        format!("{} ({})", ascendant_lord, lord_level),
    ));

    Ok(assessment)
}

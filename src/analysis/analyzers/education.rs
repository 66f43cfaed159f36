//! Education and learning analysis.

use crate::analysis::analyzers::{
    area_score, empty_assessment, file_trait, placement_detail, DomainAssessment, Finding,
    LifeArea,
};
use crate::analysis::context::AnalysisContext;
use crate::error::EngineResult;
use crate::models::Planet;

pub fn analyze(ctx: &AnalysisContext) -> EngineResult<DomainAssessment> {
    let mut assessment = empty_assessment(LifeArea::Education);

    let fifth_lord = ctx.house_lord(5);
    let fifth_level = ctx.strength_level(fifth_lord);
    let mercury_level = ctx.strength_level(Planet::Mercury);
    let jupiter_level = ctx.strength_level(Planet::Jupiter);

    // An unafflicted 4th house (foundational schooling) lifts the score a
    // little; it is secondary to the 5th house of intelligence.
    let fourth_bonus = (ctx.house_strength(4).value() as f64 - 3.0).max(0.0) * 2.0;

    assessment.score = area_score(fifth_level, mercury_level, jupiter_level, fourth_bonus);

    file_trait(&mut assessment, "Intelligence and creativity", fifth_level);
    file_trait(&mut assessment, "Analytical learning", mercury_level);
    file_trait(&mut assessment, "Wisdom and higher study", jupiter_level);

    assessment.findings.push(Finding::new(
        "Fifth lord",
        placement_detail(ctx, fifth_lord),
    ));
    assessment.findings.push(Finding::new(
        "Fifth house occupants",
        occupant_list(ctx, 5),
    ));
    assessment.findings.push(Finding::new(
        "Fourth house strength",
        ctx.house_strength(4).to_string(),
    ));

    Ok(assessment)
}

fn occupant_list(ctx: &AnalysisContext, house: u8) -> String {
    let occupants = ctx.planets_in_house(house);
    if occupants.is_empty() {
        "none".to_string()
    } else {
        occupants
            .iter()
            .map(|p| p.planet.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

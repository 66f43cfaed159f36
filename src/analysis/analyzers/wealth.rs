//! Wealth and income analysis.

use crate::analysis::analyzers::{
    area_score, empty_assessment, file_trait, placement_detail, DomainAssessment, Finding,
    LifeArea,
};
use crate::analysis::context::AnalysisContext;
use crate::error::EngineResult;
use crate::models::Planet;

pub fn analyze(ctx: &AnalysisContext) -> EngineResult<DomainAssessment> {
    let mut assessment = empty_assessment(LifeArea::Wealth);

    let second_lord = ctx.house_lord(2);
    let eleventh_lord = ctx.house_lord(11);
    let second_level = ctx.strength_level(second_lord);
    let eleventh_level = ctx.strength_level(eleventh_lord);
    let jupiter_level = ctx.strength_level(Planet::Jupiter);

    // Benefics sitting in the wealth houses add a gain bonus.
    let benefic_bonus = [2u8, 11]
        .iter()
        .flat_map(|&h| ctx.planets_in_house(h))
        .filter(|p| p.planet.is_natural_benefic())
        .count() as f64
        * 2.5;

    assessment.score = area_score(second_level, eleventh_level, jupiter_level, benefic_bonus);

    file_trait(&mut assessment, "Accumulated wealth", second_level);
    file_trait(&mut assessment, "Income and gains", eleventh_level);
    file_trait(&mut assessment, "Fortune and expansion", jupiter_level);

    assessment.findings.push(Finding::new(
        "Second lord",
        placement_detail(ctx, second_lord),
    ));
    assessment.findings.push(Finding::new(
        "Eleventh lord",
        placement_detail(ctx, eleventh_lord),
    ));

    Ok(assessment)
}

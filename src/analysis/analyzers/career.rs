//! Career and profession analysis.

use crate::analysis::analyzers::{
    area_score, empty_assessment, file_trait, placement_detail, DomainAssessment, Finding,
    LifeArea,
};
use crate::analysis::context::AnalysisContext;
use crate::error::EngineResult;
use crate::models::Planet;

pub fn analyze(ctx: &AnalysisContext) -> EngineResult<DomainAssessment> {
    let mut assessment = empty_assessment(LifeArea::Career);

    let tenth_lord = ctx.house_lord(10);
    let tenth_level = ctx.strength_level(tenth_lord);
    let sun_level = ctx.strength_level(Planet::Sun);
    let saturn_level = ctx.strength_level(Planet::Saturn);

    // A tenth lord in an angle anchors the profession.
    let kendra_bonus = if matches!(ctx.planet_house(tenth_lord), Some(1 | 4 | 7 | 10)) {
        5.0
    } else {
        0.0
    };

    assessment.score = area_score(tenth_level, sun_level, saturn_level, kendra_bonus);

    file_trait(&mut assessment, "Professional standing", tenth_level);
    file_trait(&mut assessment, "Leadership and authority", sun_level);
    file_trait(&mut assessment, "Discipline and persistence", saturn_level);

    assessment
        .findings
        .push(Finding::new("Tenth lord", placement_detail(ctx, tenth_lord)));
    let occupants = ctx.planets_in_house(10);
    if !occupants.is_empty() {
        let names: Vec<String> = occupants.iter().map(|p| p.planet.to_string()).collect();
        assessment
            .findings
            .push(Finding::new("Tenth house occupants", names.join(", ")));
    }
    assessment.findings.push(Finding::new(
        "House strength",
        ctx.house_strength(10).to_string(),
    ));

    Ok(assessment)
}

//! Character and temperament analysis.
//!
//! Reads the ascendant lord, Moon and Sun placements plus the soul
//! significator (atmakaraka) and dominant element.

use crate::analysis::analyzers::{
    area_score, empty_assessment, file_trait, DomainAssessment, Finding, LifeArea,
};
use crate::analysis::context::AnalysisContext;
use crate::error::EngineResult;
use crate::models::Planet;

pub fn analyze(ctx: &AnalysisContext) -> EngineResult<DomainAssessment> {
    let mut assessment = empty_assessment(LifeArea::Character);

    let ascendant_lord = ctx.ascendant_lord();
    let lord_level = ctx.strength_level(ascendant_lord);
    let moon_level = ctx.strength_level(Planet::Moon);
    let sun_level = ctx.strength_level(Planet::Sun);

    // Atmakaraka dignity colors the whole personality reading.
    let atmakaraka = ctx.atmakaraka();
    let atmakaraka_bonus = ctx.dignity(atmakaraka).score();

    assessment.score = area_score(lord_level, moon_level, sun_level, atmakaraka_bonus);

    file_trait(&mut assessment, "Self-expression and vitality", sun_level);
    file_trait(&mut assessment, "Emotional steadiness", moon_level);
    file_trait(&mut assessment, "Sense of identity", lord_level);

    assessment.findings.push(Finding::new(
        "Ascendant",
        format!("{} rising, lord {}", ctx.ascendant(), ascendant_lord),
    ));
    assessment.findings.push(Finding::new(
        "Moon sign",
        ctx.moon_sign().to_string(),
    ));
    assessment.findings.push(Finding::new(
        "Atmakaraka",
        atmakaraka.to_string(),
    ));
    assessment.findings.push(Finding::new(
        "Dominant element",
        format!("{:?}", ctx.dominant_element()),
    ));

    Ok(assessment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BirthDetails, PlanetPosition, VedicChart, ZodiacSign};
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;

    #[test]
    fn test_character_score_in_bounds() {
        let ascendant = ZodiacSign::Aries;
        let positions = Planet::ALL
            .iter()
            .enumerate()
            .map(|(i, &p)| PlanetPosition::new(p, 15.0 + 37.0 * i as f64, ascendant))
            .collect();
        let chart = Arc::new(VedicChart::new(
            BirthDetails {
                name: "char-test".to_string(),
                birth_time: Utc.with_ymd_and_hms(1992, 11, 4, 2, 0, 0).unwrap(),
                latitude: 27.7,
                longitude: 85.3,
                tz_offset_minutes: 345,
            },
            ascendant,
            positions,
        ));
        let assessment = analyze(&AnalysisContext::new(chart)).unwrap();
        assert_eq!(assessment.area, LifeArea::Character);
        assert!((0.0..=100.0).contains(&assessment.score));
        assert!(!assessment.findings.is_empty());
    }
}

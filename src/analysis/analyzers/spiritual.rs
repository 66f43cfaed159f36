//! Spirituality and inner-growth analysis.

use crate::analysis::analyzers::{
    area_score, empty_assessment, file_trait, placement_detail, AssessedTrait, DomainAssessment,
    Finding, LifeArea,
};
use crate::analysis::context::AnalysisContext;
use crate::error::EngineResult;
use crate::models::{Dignity, Planet};

pub fn analyze(ctx: &AnalysisContext) -> EngineResult<DomainAssessment> {
    let mut assessment = empty_assessment(LifeArea::Spiritual);

    let ninth_lord = ctx.house_lord(9);
    let ninth_level = ctx.strength_level(ninth_lord);
    let jupiter_level = ctx.strength_level(Planet::Jupiter);
    let twelfth_level = ctx.house_strength(12);

    // Ketu in a moksha house (4, 8, 12) marks a renunciate streak.
    let ketu_bonus = if matches!(ctx.planet_house(Planet::Ketu), Some(4 | 8 | 12)) {
        4.0
    } else {
        0.0
    };

    assessment.score = area_score(ninth_level, jupiter_level, twelfth_level, ketu_bonus);

    file_trait(&mut assessment, "Dharma and fortune", ninth_level);
    file_trait(&mut assessment, "Faith and guidance", jupiter_level);
    file_trait(&mut assessment, "Detachment and release", twelfth_level);

    let atmakaraka = ctx.atmakaraka();
    if matches!(
        ctx.dignity(atmakaraka),
        Dignity::Exalted | Dignity::Moolatrikona | Dignity::OwnSign
    ) {
        assessment.strengths.push(AssessedTrait::new(
            "Clarity of soul purpose",
            ctx.strength_level(atmakaraka),
        ));
    }

    assessment.findings.push(Finding::new(
        "Ninth lord",
        placement_detail(ctx, ninth_lord),
    ));
    assessment.findings.push(Finding::new(
        "Atmakaraka",
        format!("{} ({})", atmakaraka, ctx.dignity(atmakaraka)),
    ));
    assessment.findings.push(Finding::new(
        "Ketu placement",
        placement_detail(ctx, Planet::Ketu),
    ));

    Ok(assessment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::context::AnalysisContext;
    use crate::models::{BirthDetails, PlanetPosition, VedicChart, ZodiacSign};
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;

    fn sample_chart() -> VedicChart {
        let ascendant = ZodiacSign::Aries;
        let positions = Planet::ALL
            .iter()
            .enumerate()
            .map(|(i, &planet)| PlanetPosition::new(planet, (i as f64) * 37.0 % 360.0, ascendant))
            .collect();
        VedicChart {
            birth: BirthDetails {
                name: "sample".to_string(),
                birth_time: Utc.with_ymd_and_hms(1990, 6, 15, 4, 30, 0).unwrap(),
                latitude: 28.61,
                longitude: 77.21,
                tz_offset_minutes: 330,
            },
            ascendant,
            positions,
        }
    }

    #[test]
    fn test_score_in_range() {
        let ctx = AnalysisContext::new(Arc::new(sample_chart()));
        let assessment = analyze(&ctx).unwrap();
        assert!((0.0..=100.0).contains(&assessment.score));
        assert_eq!(assessment.area, LifeArea::Spiritual);
    }

    #[test]
    fn test_reports_ninth_lord_finding() {
        let ctx = AnalysisContext::new(Arc::new(sample_chart()));
        let assessment = analyze(&ctx).unwrap();
        assert!(assessment.findings.iter().any(|f| f.label == "Ninth lord"));
    }

    #[test]
    fn test_absent_ketu_reported_without_a_house() {
        let mut chart = sample_chart();
        chart.positions.retain(|p| p.planet != Planet::Ketu);
        let assessment = analyze(&AnalysisContext::new(Arc::new(chart))).unwrap();

        let ketu = assessment
            .findings
            .iter()
            .find(|f| f.label == "Ketu placement")
            .unwrap();
        assert!(ketu.detail.contains("no placement"));
        assert!(!ketu.detail.contains("house"));
    }
}

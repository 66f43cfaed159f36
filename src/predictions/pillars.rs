//! Triple-pillar predictive scoring.
//!
//! Promise is a static property of the natal chart, Occasion grades the
//! transit moment against Gochara houses, and Strength grades it against
//! the chart's ashtakavarga table. The composite blends the three.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::context::AnalysisContext;
use crate::config::EngineConfig;
use crate::ephemeris::{GeoLocation, PositionProvider, TransitPosition};
use crate::error::EngineResult;
use crate::models::{Planet, StrengthLevel, VedicChart, ZodiacSign};
use crate::predictions::tables::{AshtakavargaTable, PillarTables, BAV_MAX, SAV_MAX};
use crate::predictions::timeline::{detect_peaks, CompositeSample, TriplePillarAnalysis};

const PROMISE_WEIGHT: f64 = 0.4;
const OCCASION_WEIGHT: f64 = 0.3;
const STRENGTH_WEIGHT: f64 = 0.3;

const PRIMARY_LORD_WEIGHT: f64 = 0.6;
const SECONDARY_LORD_WEIGHT: f64 = 0.4;

const FAVORABLE_TRANSIT: f64 = 80.0;
const UNFAVORABLE_TRANSIT: f64 = 40.0;
/// Score used when a planet's transit position is unavailable.
const NEUTRAL: f64 = 50.0;

const SAV_WEIGHT: f64 = 0.4;
const BAV_WEIGHT: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pillar {
    Promise,
    Occasion,
    Strength,
}

/// One planet's input to a pillar score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PillarContribution {
    pub planet: Planet,
    pub label: String,
    /// The graded quantity, on the pillar's own scale.
    pub observed: f64,
    /// This planet's 0-100 score before weighting.
    pub impact: f64,
}

/// A single pillar's result at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PillarScore {
    pub pillar: Pillar,
    /// Score in [0, 100].
    pub score: f64,
    pub level: StrengthLevel,
    pub contributions: Vec<PillarContribution>,
}

impl PillarScore {
    fn new(pillar: Pillar, score: f64, contributions: Vec<PillarContribution>) -> Self {
        let score = score.clamp(0.0, 100.0);
        PillarScore {
            pillar,
            score,
            level: StrengthLevel::from_score(score),
            contributions,
        }
    }
}

/// Full pillar breakdown at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PillarSynthesis {
    pub instant: DateTime<Utc>,
    pub promise: PillarScore,
    pub occasion: PillarScore,
    pub strength: PillarScore,
    /// 0.4 x promise + 0.3 x occasion + 0.3 x strength, in [0, 100].
    pub composite: f64,
    pub level: StrengthLevel,
}

/// Promise pillar: what the natal chart supports, independent of time.
///
/// Graded from the running dasha lords, the primary carrying more weight.
pub fn promise_score(ctx: &AnalysisContext) -> EngineResult<PillarScore> {
    let (primary, secondary) = ctx.dasha_lords()?;

    let grade = |planet: Planet| {
        (ctx.strength_level(planet).value() as f64 + ctx.dignity(planet).score()) * 10.0
    };
    let primary_score = grade(primary).clamp(0.0, 100.0);
    let secondary_score = grade(secondary).clamp(0.0, 100.0);
    let score = PRIMARY_LORD_WEIGHT * primary_score + SECONDARY_LORD_WEIGHT * secondary_score;

    let contributions = vec![
        PillarContribution {
            planet: primary,
            label: "primary dasha lord".to_string(),
            observed: ctx.dignity(primary).score(),
            impact: primary_score,
        },
        PillarContribution {
            planet: secondary,
            label: "secondary dasha lord".to_string(),
            observed: ctx.dignity(secondary).score(),
            impact: secondary_score,
        },
    ];
    Ok(PillarScore::new(Pillar::Promise, score, contributions))
}

/// Occasion pillar: Gochara favorability of the two reference planets'
/// transits, counted from the natal Moon sign. A reference planet without
/// a transit position scores neutral.
pub fn occasion_score(
    reference: (Planet, Planet),
    moon_sign: ZodiacSign,
    transits: &HashMap<Planet, TransitPosition>,
    tables: &PillarTables,
) -> PillarScore {
    let grade = |planet: Planet, label: &str| {
        let (offset, impact) = match transits.get(&planet) {
            Some(transit) => {
                let offset = transit.sign.house_offset_from(moon_sign);
                let impact = if tables.is_favorable_offset(planet, offset) {
                    FAVORABLE_TRANSIT
                } else {
                    UNFAVORABLE_TRANSIT
                };
                (offset as f64, impact)
            }
            None => (0.0, NEUTRAL),
        };
        PillarContribution {
            planet,
            label: label.to_string(),
            observed: offset,
            impact,
        }
    };

    let primary = grade(reference.0, "primary transit house from Moon");
    let secondary = grade(reference.1, "secondary transit house from Moon");
    let score = PRIMARY_LORD_WEIGHT * primary.impact + SECONDARY_LORD_WEIGHT * secondary.impact;
    PillarScore::new(Pillar::Occasion, score, vec![primary, secondary])
}

/// Strength pillar: ashtakavarga support for the two reference planets'
/// transit signs. Classical planets blend their own bhinna row with the
/// sarva column; the nodes, having no row, use the sarva column alone.
/// A missing transit scores neutral.
pub fn strength_score(
    reference: (Planet, Planet),
    ashtakavarga: &AshtakavargaTable,
    transits: &HashMap<Planet, TransitPosition>,
) -> PillarScore {
    let grade = |planet: Planet, label: &str| {
        let (observed, impact) = match transits.get(&planet) {
            Some(transit) => {
                let sav = ashtakavarga.sarva_bindus(transit.sign) as f64 / SAV_MAX * 100.0;
                match ashtakavarga.bindus(planet, transit.sign) {
                    Some(bindus) => {
                        let bav = bindus as f64 / BAV_MAX * 100.0;
                        (bindus as f64, SAV_WEIGHT * sav + BAV_WEIGHT * bav)
                    }
                    None => (ashtakavarga.sarva_bindus(transit.sign) as f64, sav),
                }
            }
            None => (0.0, NEUTRAL),
        };
        PillarContribution {
            planet,
            label: label.to_string(),
            observed,
            impact,
        }
    };

    let primary = grade(reference.0, "primary ashtakavarga bindus");
    let secondary = grade(reference.1, "secondary ashtakavarga bindus");
    let score = PRIMARY_LORD_WEIGHT * primary.impact + SECONDARY_LORD_WEIGHT * secondary.impact;
    PillarScore::new(Pillar::Strength, score, vec![primary, secondary])
}

fn composite_of(promise: f64, occasion: f64, strength: f64) -> f64 {
    (PROMISE_WEIGHT * promise + OCCASION_WEIGHT * occasion + STRENGTH_WEIGHT * strength)
        .clamp(0.0, 100.0)
}

/// Predictive engine combining the three pillars over time.
pub struct TriplePillarEngine {
    provider: Arc<dyn PositionProvider>,
    tables: PillarTables,
    config: EngineConfig,
}

impl TriplePillarEngine {
    pub fn new(provider: Arc<dyn PositionProvider>) -> Self {
        Self::with_tables(provider, PillarTables::default(), EngineConfig::default())
    }

    pub fn with_tables(
        provider: Arc<dyn PositionProvider>,
        tables: PillarTables,
        config: EngineConfig,
    ) -> Self {
        TriplePillarEngine {
            provider,
            tables,
            config,
        }
    }

    /// Full pillar breakdown for one instant. Provider failure here is an
    /// error: a single-instant reading with fabricated transits would be
    /// misleading.
    pub async fn calculate_synthesis(
        &self,
        chart: &VedicChart,
        instant: DateTime<Utc>,
    ) -> EngineResult<PillarSynthesis> {
        let ctx = AnalysisContext::new(Arc::new(chart.clone()));
        let reference = ctx.dasha_lords()?;
        let promise = promise_score(&ctx)?;

        let location = GeoLocation {
            latitude: chart.birth.latitude,
            longitude: chart.birth.longitude,
        };
        let transits = self.provider.positions_at(instant, &location).await?;

        let occasion = occasion_score(reference, ctx.moon_sign(), &transits, &self.tables);
        let strength = strength_score(reference, ctx.ashtakavarga(), &transits);
        let composite = composite_of(promise.score, occasion.score, strength.score);

        Ok(PillarSynthesis {
            instant,
            promise,
            occasion,
            strength,
            composite,
            level: StrengthLevel::from_score(composite),
        })
    }

    /// Composite samples from `start` over the configured horizon and
    /// stride.
    pub async fn generate_timeline(
        &self,
        chart: &VedicChart,
        start: DateTime<Utc>,
    ) -> EngineResult<Vec<CompositeSample>> {
        self.generate_timeline_over(chart, start, self.config.horizon_days, self.config.stride_days)
            .await
    }

    /// Composite samples at `start + k * stride_days` while `k * stride_days`
    /// stays below the horizon (exclusive endpoint). Promise is evaluated
    /// once; each sample queries transits concurrently. A failed sample
    /// degrades to neutral transit scoring rather than sinking the whole
    /// timeline.
    pub async fn generate_timeline_over(
        &self,
        chart: &VedicChart,
        start: DateTime<Utc>,
        horizon_days: u32,
        stride_days: u32,
    ) -> EngineResult<Vec<CompositeSample>> {
        let ctx = AnalysisContext::new(Arc::new(chart.clone()));
        let reference = ctx.dasha_lords()?;
        let promise = promise_score(&ctx)?.score;
        let moon_sign = ctx.moon_sign();
        let ashtakavarga = ctx.ashtakavarga().clone();

        let location = GeoLocation {
            latitude: chart.birth.latitude,
            longitude: chart.birth.longitude,
        };

        let stride = stride_days.max(1);
        let steps = horizon_days.div_ceil(stride);
        let sample_futures = (0..steps).map(|step| {
            let instant = start + Duration::days((step * stride) as i64);
            let ashtakavarga = &ashtakavarga;
            let tables = &self.tables;
            let provider = &self.provider;
            let location = &location;
            async move {
                let (occasion, strength) = match provider.positions_at(instant, location).await {
                    Ok(transits) => (
                        occasion_score(reference, moon_sign, &transits, tables).score,
                        strength_score(reference, ashtakavarga, &transits).score,
                    ),
                    Err(err) => {
                        log::debug!("transit lookup failed at {instant}: {err}");
                        (NEUTRAL, NEUTRAL)
                    }
                };
                CompositeSample {
                    instant,
                    composite: composite_of(promise, occasion, strength),
                    promise,
                    occasion,
                    strength,
                }
            }
        });

        let mut samples = futures::future::join_all(sample_futures).await;
        samples.sort_by_key(|s| s.instant);
        Ok(samples)
    }

    /// Synthesis at `start`, the sampled timeline, and its peak summary.
    pub async fn full_analysis(
        &self,
        chart: &VedicChart,
        start: DateTime<Utc>,
    ) -> EngineResult<TriplePillarAnalysis> {
        let synthesis = self.calculate_synthesis(chart, start).await?;
        let timeline = self.generate_timeline(chart, start).await?;
        let peaks = detect_peaks(&timeline, self.config.peak_tolerance);
        Ok(TriplePillarAnalysis {
            synthesis,
            timeline,
            peaks,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::MeanMotionProvider;
    use crate::models::{BirthDetails, PlanetPosition};
    use chrono::TimeZone;

    fn sample_chart() -> VedicChart {
        let ascendant = ZodiacSign::Taurus;
        let positions = Planet::ALL
            .iter()
            .enumerate()
            .map(|(i, &p)| PlanetPosition::new(p, 25.0 + 43.0 * i as f64, ascendant))
            .collect();
        VedicChart::new(
            BirthDetails {
                name: "pillar-test".to_string(),
                birth_time: Utc.with_ymd_and_hms(1992, 11, 4, 18, 45, 0).unwrap(),
                latitude: 13.08,
                longitude: 80.27,
                tz_offset_minutes: 330,
            },
            ascendant,
            positions,
        )
    }

    fn transits_all_at(longitude: f64) -> HashMap<Planet, TransitPosition> {
        Planet::ALL
            .iter()
            .map(|&p| (p, TransitPosition::from_longitude(p, longitude)))
            .collect()
    }

    #[test]
    fn test_promise_is_static_per_chart() {
        let chart = Arc::new(sample_chart());
        let first = promise_score(&AnalysisContext::new(chart.clone())).unwrap();
        let second = promise_score(&AnalysisContext::new(chart)).unwrap();
        assert_eq!(first.score, second.score);
        assert!((0.0..=100.0).contains(&first.score));
        assert_eq!(first.contributions.len(), 2);
    }

    #[test]
    fn test_occasion_extremes() {
        let ctx = AnalysisContext::new(Arc::new(sample_chart()));
        let reference = ctx.dasha_lords().unwrap();
        let transits = transits_all_at(100.0);

        let all_favorable = PillarTables::uniform(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
        let score = occasion_score(reference, ctx.moon_sign(), &transits, &all_favorable);
        assert_eq!(score.score, FAVORABLE_TRANSIT);

        let none_favorable = PillarTables::uniform(&[]);
        let score = occasion_score(reference, ctx.moon_sign(), &transits, &none_favorable);
        assert_eq!(score.score, UNFAVORABLE_TRANSIT);
    }

    #[test]
    fn test_missing_transits_score_neutral() {
        let ctx = AnalysisContext::new(Arc::new(sample_chart()));
        let reference = ctx.dasha_lords().unwrap();
        let empty = HashMap::new();

        let occasion = occasion_score(reference, ctx.moon_sign(), &empty, &PillarTables::default());
        assert_eq!(occasion.score, NEUTRAL);

        let strength = strength_score(reference, ctx.ashtakavarga(), &empty);
        assert_eq!(strength.score, NEUTRAL);
    }

    #[test]
    fn test_strength_within_bounds() {
        let ctx = AnalysisContext::new(Arc::new(sample_chart()));
        let reference = ctx.dasha_lords().unwrap();
        let transits = transits_all_at(200.0);
        let score = strength_score(reference, ctx.ashtakavarga(), &transits);
        assert!((0.0..=100.0).contains(&score.score));
        assert_eq!(score.contributions.len(), 2);
    }

    #[test]
    fn test_node_reference_uses_sarva_only() {
        let ctx = AnalysisContext::new(Arc::new(sample_chart()));
        let transits = transits_all_at(200.0);
        let score = strength_score(
            (Planet::Rahu, Planet::Ketu),
            ctx.ashtakavarga(),
            &transits,
        );
        // Both nodes transit the same sign, so both grade the same sarva
        // column and the weighted blend collapses to it.
        let sign = ZodiacSign::from_longitude(200.0);
        let expected = ctx.ashtakavarga().sarva_bindus(sign) as f64 / SAV_MAX * 100.0;
        assert!((score.score - expected).abs() < 1e-9);
    }

    #[test]
    fn test_composite_weighting() {
        assert_eq!(composite_of(100.0, 0.0, 0.0), 40.0);
        assert_eq!(composite_of(0.0, 100.0, 0.0), 30.0);
        assert_eq!(composite_of(0.0, 0.0, 100.0), 30.0);
        assert_eq!(composite_of(100.0, 100.0, 100.0), 100.0);
    }

    #[tokio::test]
    async fn test_synthesis_composite_matches_weights() {
        let engine = TriplePillarEngine::new(Arc::new(MeanMotionProvider));
        let instant = Utc.with_ymd_and_hms(2026, 1, 15, 0, 0, 0).unwrap();
        let synthesis = engine
            .calculate_synthesis(&sample_chart(), instant)
            .await
            .unwrap();
        let expected = composite_of(
            synthesis.promise.score,
            synthesis.occasion.score,
            synthesis.strength.score,
        );
        assert!((synthesis.composite - expected).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_timeline_stride_and_order() {
        let mut config = EngineConfig::default();
        config.horizon_days = 30;
        config.stride_days = 3;
        let engine = TriplePillarEngine::with_tables(
            Arc::new(MeanMotionProvider),
            PillarTables::default(),
            config,
        );
        let start = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
        let timeline = engine.generate_timeline(&sample_chart(), start).await.unwrap();

        assert_eq!(timeline.len(), 10);
        assert_eq!(timeline[0].instant, start);
        for window in timeline.windows(2) {
            assert_eq!(window[1].instant - window[0].instant, Duration::days(3));
        }
        // Promise never moves along the timeline.
        assert!(timeline.iter().all(|s| s.promise == timeline[0].promise));
    }

    #[tokio::test]
    async fn test_timeline_horizon_is_exclusive() {
        let engine = TriplePillarEngine::new(Arc::new(MeanMotionProvider));
        let start = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();

        // Default 180-day horizon at a 3-day stride: samples at day 0
        // through day 177, never at the horizon itself.
        let timeline = engine
            .generate_timeline_over(&sample_chart(), start, 180, 3)
            .await
            .unwrap();
        assert_eq!(timeline.len(), 60);
        assert_eq!(
            timeline.last().unwrap().instant,
            start + Duration::days(177)
        );

        // A stride that does not divide the horizon still stops short of it.
        let timeline = engine
            .generate_timeline_over(&sample_chart(), start, 10, 3)
            .await
            .unwrap();
        assert_eq!(timeline.len(), 4);
        assert_eq!(timeline.last().unwrap().instant, start + Duration::days(9));
    }
}

use std::sync::Arc;

use chrono::Duration;
use jyotish_rust::api::{
    EngineConfig, MeanMotionProvider, PillarTables, StrengthLevel, TriplePillarEngine, ZodiacSign,
};
use jyotish_rust::predictions::{detect_peaks, threshold_windows, WindowKind};

mod support;
use support::{full_chart, start_instant, FailingProvider, FixedProvider};

fn short_config() -> EngineConfig {
    let mut config = EngineConfig::default();
    config.horizon_days = 30;
    config.stride_days = 3;
    config
}

#[tokio::test]
async fn synthesis_blends_pillars_with_fixed_weights() {
    let engine = TriplePillarEngine::new(Arc::new(MeanMotionProvider));
    let chart = full_chart("weights", ZodiacSign::Virgo, 31.0);

    let synthesis = engine
        .calculate_synthesis(&chart, start_instant())
        .await
        .unwrap();

    let expected = 0.4 * synthesis.promise.score
        + 0.3 * synthesis.occasion.score
        + 0.3 * synthesis.strength.score;
    assert!((synthesis.composite - expected).abs() < 1e-9);
    assert!((0.0..=100.0).contains(&synthesis.composite));
    assert_eq!(synthesis.level, StrengthLevel::from_score(synthesis.composite));
}

#[tokio::test]
async fn uniform_tables_pin_the_occasion_pillar() {
    let chart = full_chart("uniform", ZodiacSign::Aquarius, 47.0);
    let all = PillarTables::uniform(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
    let none = PillarTables::uniform(&[]);

    let favorable = TriplePillarEngine::with_tables(
        Arc::new(MeanMotionProvider),
        all,
        EngineConfig::default(),
    );
    let unfavorable = TriplePillarEngine::with_tables(
        Arc::new(MeanMotionProvider),
        none,
        EngineConfig::default(),
    );

    let high = favorable
        .calculate_synthesis(&chart, start_instant())
        .await
        .unwrap();
    let low = unfavorable
        .calculate_synthesis(&chart, start_instant())
        .await
        .unwrap();

    assert_eq!(high.occasion.score, 80.0);
    assert_eq!(low.occasion.score, 40.0);
    // The other two pillars ignore the Gochara tables.
    assert_eq!(high.promise.score, low.promise.score);
    assert_eq!(high.strength.score, low.strength.score);
}

#[tokio::test]
async fn synthesis_fails_when_the_provider_does() {
    let engine = TriplePillarEngine::new(Arc::new(FailingProvider));
    let chart = full_chart("offline", ZodiacSign::Leo, 12.0);

    assert!(engine
        .calculate_synthesis(&chart, start_instant())
        .await
        .is_err());
}

#[tokio::test]
async fn timeline_degrades_to_neutral_when_the_provider_fails() {
    let engine = TriplePillarEngine::with_tables(
        Arc::new(FailingProvider),
        PillarTables::default(),
        short_config(),
    );
    let chart = full_chart("degraded", ZodiacSign::Taurus, 63.0);

    let timeline = engine
        .generate_timeline(&chart, start_instant())
        .await
        .unwrap();

    assert_eq!(timeline.len(), 10);
    for sample in &timeline {
        assert_eq!(sample.occasion, 50.0);
        assert_eq!(sample.strength, 50.0);
        let expected = (0.4 * sample.promise + 0.3 * 50.0 + 0.3 * 50.0).clamp(0.0, 100.0);
        assert!((sample.composite - expected).abs() < 1e-9);
    }
}

#[tokio::test]
async fn timeline_is_ordered_and_strided() {
    let engine = TriplePillarEngine::with_tables(
        Arc::new(MeanMotionProvider),
        PillarTables::default(),
        short_config(),
    );
    let chart = full_chart("stride", ZodiacSign::Capricorn, 89.0);
    let start = start_instant();

    let timeline = engine.generate_timeline(&chart, start).await.unwrap();

    assert_eq!(timeline[0].instant, start);
    for pair in timeline.windows(2) {
        assert_eq!(pair[1].instant - pair[0].instant, Duration::days(3));
    }
}

#[tokio::test]
async fn fixed_transits_make_the_timeline_flat_with_a_full_peak() {
    let engine = TriplePillarEngine::with_tables(
        Arc::new(FixedProvider(123.0)),
        PillarTables::default(),
        short_config(),
    );
    let chart = full_chart("flat", ZodiacSign::Libra, 8.0);

    let timeline = engine
        .generate_timeline(&chart, start_instant())
        .await
        .unwrap();
    let peaks = detect_peaks(&timeline, 0.5).unwrap();

    // Every sample ties the peak, so all of them cluster into it.
    assert_eq!(peaks.peak_instants.len(), timeline.len());
    assert_eq!(peaks.peak_probability, timeline[0].composite);
}

#[tokio::test]
async fn explicit_horizon_overrides_the_configured_one() {
    let engine = TriplePillarEngine::new(Arc::new(MeanMotionProvider));
    let chart = full_chart("override", ZodiacSign::Pisces, 26.0);

    let timeline = engine
        .generate_timeline_over(&chart, start_instant(), 12, 4)
        .await
        .unwrap();

    assert_eq!(timeline.len(), 3);
    assert_eq!(
        timeline.last().unwrap().instant - timeline[0].instant,
        Duration::days(8)
    );
}

#[tokio::test]
async fn scores_stay_bounded_across_many_charts() {
    let engine = TriplePillarEngine::with_tables(
        Arc::new(MeanMotionProvider),
        PillarTables::default(),
        short_config(),
    );

    for (i, &ascendant) in ZodiacSign::ALL.iter().enumerate() {
        let chart = full_chart("bounds", ascendant, 7.0 + 29.0 * i as f64);
        let synthesis = engine
            .calculate_synthesis(&chart, start_instant())
            .await
            .unwrap();
        for score in [
            synthesis.promise.score,
            synthesis.occasion.score,
            synthesis.strength.score,
            synthesis.composite,
        ] {
            assert!((0.0..=100.0).contains(&score));
        }

        let timeline = engine
            .generate_timeline(&chart, start_instant())
            .await
            .unwrap();
        for sample in timeline {
            assert!((0.0..=100.0).contains(&sample.composite));
        }
    }
}

#[tokio::test]
async fn full_analysis_bundles_synthesis_timeline_and_peaks() {
    let engine = TriplePillarEngine::with_tables(
        Arc::new(MeanMotionProvider),
        PillarTables::default(),
        short_config(),
    );
    let chart = full_chart("bundle", ZodiacSign::Gemini, 42.0);

    let analysis = engine.full_analysis(&chart, start_instant()).await.unwrap();

    assert_eq!(analysis.synthesis.instant, start_instant());
    assert_eq!(analysis.timeline.len(), 10);
    let peaks = analysis.peaks.unwrap();
    assert!(analysis
        .timeline
        .iter()
        .any(|s| s.composite == peaks.peak_probability));

    let windows = threshold_windows(&analysis.timeline, 30.0, 70.0);
    for window in windows {
        assert!(window.start <= window.end);
        match window.kind {
            WindowKind::Opportunity => assert!(window.mean_score > 70.0),
            WindowKind::Caution => assert!(window.mean_score < 30.0),
        }
    }
}

//! Timeline post-processing: peak detection and threshold windows over
//! composite samples.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::predictions::pillars::PillarSynthesis;

/// One timeline sample: the composite and its pillar breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompositeSample {
    pub instant: DateTime<Utc>,
    pub composite: f64,
    pub promise: f64,
    pub occasion: f64,
    pub strength: f64,
}

/// The timeline's best score and every instant that effectively reaches it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeakSummary {
    pub peak_probability: f64,
    /// Instants whose composite lies within the tolerance of the peak,
    /// in timeline order.
    pub peak_instants: Vec<DateTime<Utc>>,
}

/// Find the maximum composite and cluster near-equal samples around it.
/// Returns `None` for an empty timeline.
pub fn detect_peaks(samples: &[CompositeSample], tolerance: f64) -> Option<PeakSummary> {
    let peak = samples
        .iter()
        .map(|s| s.composite)
        .max_by(f64::total_cmp)?;
    let peak_instants = samples
        .iter()
        .filter(|s| peak - s.composite <= tolerance)
        .map(|s| s.instant)
        .collect();
    Some(PeakSummary {
        peak_probability: peak,
        peak_instants,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowKind {
    Opportunity,
    Caution,
}

/// A maximal run of consecutive samples on the same side of a threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineWindow {
    pub kind: WindowKind,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub mean_score: f64,
}

/// Collapse the timeline into opportunity windows (composite above
/// `opportunity_above`) and caution windows (below `caution_below`).
/// Samples between the thresholds belong to no window.
pub fn threshold_windows(
    samples: &[CompositeSample],
    caution_below: f64,
    opportunity_above: f64,
) -> Vec<TimelineWindow> {
    let mut windows = Vec::new();
    let mut run: Vec<&CompositeSample> = Vec::new();
    let mut run_kind: Option<WindowKind> = None;

    let classify = |s: &CompositeSample| {
        if s.composite > opportunity_above {
            Some(WindowKind::Opportunity)
        } else if s.composite < caution_below {
            Some(WindowKind::Caution)
        } else {
            None
        }
    };

    let flush = |windows: &mut Vec<TimelineWindow>, run: &mut Vec<&CompositeSample>, kind| {
        if let (Some(first), Some(last)) = (run.first(), run.last()) {
            let mean = run.iter().map(|s| s.composite).sum::<f64>() / run.len() as f64;
            windows.push(TimelineWindow {
                kind,
                start: first.instant,
                end: last.instant,
                mean_score: mean,
            });
        }
        run.clear();
    };

    for sample in samples {
        let kind = classify(sample);
        if kind != run_kind {
            if let Some(prev) = run_kind {
                flush(&mut windows, &mut run, prev);
            }
            run_kind = kind;
        }
        if kind.is_some() {
            run.push(sample);
        }
    }
    if let Some(kind) = run_kind {
        flush(&mut windows, &mut run, kind);
    }
    windows
}

/// Complete predictive output: the instant breakdown, the sampled
/// timeline, and its peaks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriplePillarAnalysis {
    pub synthesis: PillarSynthesis,
    pub timeline: Vec<CompositeSample>,
    pub peaks: Option<PeakSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn sample(day: i64, composite: f64) -> CompositeSample {
        CompositeSample {
            instant: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap() + Duration::days(day),
            composite,
            promise: 50.0,
            occasion: 50.0,
            strength: 50.0,
        }
    }

    #[test]
    fn test_peak_clusters_within_tolerance() {
        let samples = vec![
            sample(0, 10.0),
            sample(3, 90.0),
            sample(6, 89.6),
            sample(9, 50.0),
        ];
        let summary = detect_peaks(&samples, 0.5).unwrap();
        assert_eq!(summary.peak_probability, 90.0);
        assert_eq!(
            summary.peak_instants,
            vec![samples[1].instant, samples[2].instant]
        );
    }

    #[test]
    fn test_peak_empty_timeline() {
        assert!(detect_peaks(&[], 0.5).is_none());
    }

    #[test]
    fn test_single_sample_is_its_own_peak() {
        let samples = vec![sample(0, 42.0)];
        let summary = detect_peaks(&samples, 0.5).unwrap();
        assert_eq!(summary.peak_probability, 42.0);
        assert_eq!(summary.peak_instants.len(), 1);
    }

    #[test]
    fn test_threshold_windows_split_runs() {
        let samples = vec![
            sample(0, 80.0),
            sample(3, 85.0),
            sample(6, 50.0),
            sample(9, 20.0),
            sample(12, 25.0),
            sample(15, 82.0),
        ];
        let windows = threshold_windows(&samples, 30.0, 70.0);

        assert_eq!(windows.len(), 3);
        assert_eq!(windows[0].kind, WindowKind::Opportunity);
        assert_eq!(windows[0].start, samples[0].instant);
        assert_eq!(windows[0].end, samples[1].instant);
        assert!((windows[0].mean_score - 82.5).abs() < 1e-9);

        assert_eq!(windows[1].kind, WindowKind::Caution);
        assert_eq!(windows[1].start, samples[3].instant);
        assert_eq!(windows[1].end, samples[4].instant);

        assert_eq!(windows[2].kind, WindowKind::Opportunity);
        assert_eq!(windows[2].start, samples[5].instant);
    }

    #[test]
    fn test_threshold_windows_all_neutral() {
        let samples = vec![sample(0, 50.0), sample(3, 55.0)];
        assert!(threshold_windows(&samples, 30.0, 70.0).is_empty());
    }
}

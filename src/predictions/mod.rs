//! Triple-pillar predictive engine: static promise, transit occasion,
//! ashtakavarga strength, and the sampled composite timeline.

pub mod pillars;
pub mod tables;
pub mod timeline;

pub use pillars::{
    occasion_score, promise_score, strength_score, Pillar, PillarContribution, PillarScore,
    PillarSynthesis, TriplePillarEngine,
};
pub use tables::{AshtakavargaTable, PillarTables, BAV_MAX, SAV_MAX};
pub use timeline::{
    detect_peaks, threshold_windows, CompositeSample, PeakSummary, TimelineWindow,
    TriplePillarAnalysis, WindowKind,
};

//! Public API surface of the analysis core.
//!
//! This file consolidates the types callers need to drive a full
//! analysis. All result types derive Serialize/Deserialize for JSON
//! serialization.

pub use crate::analysis::analyzers::AssessedTrait;
pub use crate::analysis::analyzers::DomainAssessment;
pub use crate::analysis::analyzers::Finding;
pub use crate::analysis::analyzers::LifeArea;
pub use crate::analysis::engine::Analyzer;
pub use crate::analysis::engine::DeepAnalysisEngine;
pub use crate::analysis::synthesis::DeepAnalysis;
pub use crate::analysis::synthesis::SynthesisSummary;
pub use crate::cache::AnalysisCache;
pub use crate::cache::InMemoryCache;
pub use crate::config::EngineConfig;
pub use crate::ephemeris::GeoLocation;
pub use crate::ephemeris::MeanMotionProvider;
pub use crate::ephemeris::PositionProvider;
pub use crate::ephemeris::TransitPosition;
pub use crate::error::EngineError;
pub use crate::error::EngineResult;
pub use crate::error::ProviderError;
pub use crate::fingerprint::chart_fingerprint;
pub use crate::models::BirthDetails;
pub use crate::models::Dignity;
pub use crate::models::Planet;
pub use crate::models::PlanetPosition;
pub use crate::models::StrengthLevel;
pub use crate::models::VedicChart;
pub use crate::models::ZodiacSign;
pub use crate::predictions::pillars::Pillar;
pub use crate::predictions::pillars::PillarContribution;
pub use crate::predictions::pillars::PillarScore;
pub use crate::predictions::pillars::PillarSynthesis;
pub use crate::predictions::pillars::TriplePillarEngine;
pub use crate::predictions::tables::AshtakavargaTable;
pub use crate::predictions::tables::PillarTables;
pub use crate::predictions::timeline::CompositeSample;
pub use crate::predictions::timeline::PeakSummary;
pub use crate::predictions::timeline::TimelineWindow;
pub use crate::predictions::timeline::TriplePillarAnalysis;

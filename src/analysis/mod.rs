//! Natal chart deep analysis: shared derived-data context, the seven
//! life-area analyzers, synthesis, and the cached engine.

pub mod analyzers;
pub mod context;
pub mod engine;
pub mod synthesis;

pub use analyzers::{AssessedTrait, DomainAssessment, Finding, LifeArea};
pub use context::AnalysisContext;
pub use engine::{default_analyzers, Analyzer, DeepAnalysisEngine};
pub use synthesis::{DeepAnalysis, SynthesisSummary};

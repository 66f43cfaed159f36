//! Error types for the analysis engine.

use crate::models::Planet;

/// Failure reported by a position provider.
#[derive(Debug, Clone, thiserror::Error)]
#[error("position provider failed: {0}")]
pub struct ProviderError(pub String);

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        ProviderError(message.into())
    }
}

/// Error taxonomy of the analysis core.
///
/// - `MissingPosition`: the chart input lacks a required planet; surfaced
///   before any computation and never cached.
/// - `Provider`: a position provider failure. Fatal inside synthesis calls;
///   timeline sampling degrades to neutral scores instead.
/// - `Compute`: an analyzer returned an error or its task panicked. The
///   whole `analyze` call fails and nothing is cached.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("chart is missing a position for {0}")]
    MissingPosition(Planet),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("analysis failed: {0}")]
    Compute(String),
}

/// Result alias used throughout the engine.
pub type EngineResult<T> = Result<T, EngineError>;

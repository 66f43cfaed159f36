//! Deep-analysis orchestration: cache lookup, concurrent analyzer
//! fan-out, synthesis, cache write-back.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::task::JoinSet;

use crate::analysis::analyzers::{self, DomainAssessment, LifeArea};
use crate::analysis::context::AnalysisContext;
use crate::analysis::synthesis::DeepAnalysis;
use crate::cache::{AnalysisCache, InMemoryCache};
use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::fingerprint::chart_fingerprint;
use crate::models::{Planet, VedicChart};

/// One life-area analyzer: a label plus a pure function of the shared
/// context. Plain function pointers keep the set cheaply copyable into
/// spawned tasks and let tests inject faulty members.
#[derive(Clone, Copy)]
pub struct Analyzer {
    pub area: LifeArea,
    pub run: fn(&AnalysisContext) -> EngineResult<DomainAssessment>,
}

/// The standard seven-analyzer set.
pub fn default_analyzers() -> Vec<Analyzer> {
    vec![
        Analyzer {
            area: LifeArea::Character,
            run: analyzers::character::analyze,
        },
        Analyzer {
            area: LifeArea::Career,
            run: analyzers::career::analyze,
        },
        Analyzer {
            area: LifeArea::Relationship,
            run: analyzers::relationship::analyze,
        },
        Analyzer {
            area: LifeArea::Health,
            run: analyzers::health::analyze,
        },
        Analyzer {
            area: LifeArea::Wealth,
            run: analyzers::wealth::analyze,
        },
        Analyzer {
            area: LifeArea::Education,
            run: analyzers::education::analyze,
        },
        Analyzer {
            area: LifeArea::Spiritual,
            run: analyzers::spiritual::analyze,
        },
    ]
}

/// Cached, concurrent deep-analysis runner.
///
/// Equal charts (same fingerprint) within the TTL window are served from
/// the cache without re-running any analyzer. A failed run caches
/// nothing, so the next caller retries from scratch.
pub struct DeepAnalysisEngine {
    cache: Arc<dyn AnalysisCache>,
    analyzers: Vec<Analyzer>,
    computations: AtomicU64,
}

impl DeepAnalysisEngine {
    pub fn new(cache: Arc<dyn AnalysisCache>) -> Self {
        Self::with_analyzers(cache, default_analyzers())
    }

    /// Engine backed by an in-memory cache sized per the configuration.
    pub fn with_config(config: &EngineConfig) -> Self {
        Self::new(Arc::new(InMemoryCache::from_config(config)))
    }

    pub fn with_analyzers(cache: Arc<dyn AnalysisCache>, analyzers: Vec<Analyzer>) -> Self {
        DeepAnalysisEngine {
            cache,
            analyzers,
            computations: AtomicU64::new(0),
        }
    }

    /// Run (or fetch) the full analysis for a chart.
    ///
    /// Analyzers execute concurrently; the first error wins and aborts
    /// the remaining tasks.
    pub async fn analyze(&self, chart: &VedicChart) -> EngineResult<DeepAnalysis> {
        for required in [Planet::Sun, Planet::Moon] {
            if !chart.has_position(required) {
                return Err(EngineError::MissingPosition(required));
            }
        }

        let fingerprint = chart_fingerprint(chart);
        if let Some(cached) = self.cache.get(&fingerprint) {
            log::debug!("analysis cache hit for {fingerprint}");
            return Ok(cached);
        }

        let ctx = Arc::new(AnalysisContext::new(Arc::new(chart.clone())));
        let mut set = JoinSet::new();
        for analyzer in &self.analyzers {
            let analyzer = *analyzer;
            let ctx = Arc::clone(&ctx);
            set.spawn(async move { (analyzer.run)(&ctx) });
        }

        let mut assessments = Vec::with_capacity(self.analyzers.len());
        while let Some(joined) = set.join_next().await {
            match joined {
                Ok(Ok(assessment)) => assessments.push(assessment),
                // Dropping the set aborts the still-running siblings.
                Ok(Err(err)) => return Err(err),
                Err(join_err) => {
                    return Err(EngineError::Compute(format!(
                        "analyzer task failed: {join_err}"
                    )))
                }
            }
        }

        let analysis = DeepAnalysis::from_assessments(assessments);
        self.computations.fetch_add(1, Ordering::Relaxed);
        self.cache.put(&fingerprint, analysis.clone());
        log::debug!(
            "computed analysis for {fingerprint}: overall {:.1}",
            analysis.overall_score
        );
        Ok(analysis)
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }

    /// Number of full (non-cached) computations performed.
    pub fn computation_count(&self) -> u64 {
        self.computations.load(Ordering::Relaxed)
    }
}

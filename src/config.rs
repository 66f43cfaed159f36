//! Engine configuration and environment variable handling.

use std::env;
use std::time::Duration;

use anyhow::Context;

/// Tunable parameters of the analysis core.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// How long a cached aggregate result stays valid.
    pub cache_ttl: Duration,
    /// Optional bound on cached entries; oldest entry is dropped first.
    pub cache_capacity: Option<usize>,
    /// Forward horizon of the predictive timeline, in days.
    pub horizon_days: u32,
    /// Sampling stride of the timeline, in days.
    pub stride_days: u32,
    /// Scores within this distance of the maximum count as peak samples.
    pub peak_tolerance: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            cache_ttl: Duration::from_secs(30 * 60),
            cache_capacity: None,
            horizon_days: 180,
            stride_days: 3,
            peak_tolerance: 0.5,
        }
    }
}

impl EngineConfig {
    /// Build a configuration from environment variables, falling back to the
    /// defaults for anything unset.
    ///
    /// # Environment Variables
    /// - `JYOTISH_CACHE_TTL_MINUTES` (default: 30)
    /// - `JYOTISH_CACHE_CAPACITY` (default: unbounded)
    /// - `JYOTISH_HORIZON_DAYS` (default: 180)
    /// - `JYOTISH_STRIDE_DAYS` (default: 3, must be >= 1)
    ///
    /// # Errors
    /// Returns an error if a variable is set but not a valid number.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = EngineConfig::default();

        if let Ok(minutes) = env::var("JYOTISH_CACHE_TTL_MINUTES") {
            let minutes: u64 = minutes
                .parse()
                .context("JYOTISH_CACHE_TTL_MINUTES must be an integer")?;
            config.cache_ttl = Duration::from_secs(minutes * 60);
        }

        if let Ok(capacity) = env::var("JYOTISH_CACHE_CAPACITY") {
            let capacity: usize = capacity
                .parse()
                .context("JYOTISH_CACHE_CAPACITY must be an integer")?;
            config.cache_capacity = Some(capacity);
        }

        if let Ok(days) = env::var("JYOTISH_HORIZON_DAYS") {
            config.horizon_days = days
                .parse()
                .context("JYOTISH_HORIZON_DAYS must be an integer")?;
        }

        if let Ok(days) = env::var("JYOTISH_STRIDE_DAYS") {
            let stride: u32 = days
                .parse()
                .context("JYOTISH_STRIDE_DAYS must be an integer")?;
            anyhow::ensure!(stride >= 1, "JYOTISH_STRIDE_DAYS must be >= 1");
            config.stride_days = stride;
        }

        Ok(config)
    }
}

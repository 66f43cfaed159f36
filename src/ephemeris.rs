//! Position provider boundary.
//!
//! The analysis core never computes astronomical positions itself; it asks a
//! [`PositionProvider`] for the transit positions of all planets at a given
//! instant. Providers are expected to be deterministic for a given
//! `(instant, location)` pair. Timeout policy, if any, belongs to the
//! provider implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ProviderError;
use crate::models::{Planet, ZodiacSign};

/// Observer location handed through to the provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
}

/// Transit placement of one planet at a queried instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitPosition {
    pub planet: Planet,
    /// Sidereal longitude in degrees, [0, 360).
    pub longitude: f64,
    pub sign: ZodiacSign,
}

impl TransitPosition {
    pub fn from_longitude(planet: Planet, longitude: f64) -> Self {
        let normalized = longitude.rem_euclid(360.0);
        TransitPosition {
            planet,
            longitude: normalized,
            sign: ZodiacSign::from_longitude(normalized),
        }
    }
}

/// Source of planetary positions for any instant.
#[async_trait]
pub trait PositionProvider: Send + Sync {
    /// Positions of all supported planets at `instant` for `location`.
    ///
    /// A planet absent from the returned map is treated as "position
    /// unavailable" by callers, which degrade to neutral scoring.
    async fn positions_at(
        &self,
        instant: DateTime<Utc>,
        location: &GeoLocation,
    ) -> Result<HashMap<Planet, TransitPosition>, ProviderError>;
}

/// Mean daily motion in degrees per day, with the longitude at the
/// J2000-like reference epoch. Nodes move retrograde.
const MEAN_MOTION: [(Planet, f64, f64); 9] = [
    (Planet::Sun, 280.46, 0.9856),
    (Planet::Moon, 218.32, 13.1764),
    (Planet::Mars, 355.43, 0.5240),
    (Planet::Mercury, 252.25, 4.0923),
    (Planet::Jupiter, 34.35, 0.0831),
    (Planet::Venus, 181.98, 1.6021),
    (Planet::Saturn, 50.08, 0.0334),
    (Planet::Rahu, 125.04, -0.0529),
    (Planet::Ketu, 305.04, -0.0529),
];

/// Reference epoch for the mean-motion model: 2000-01-01 12:00 UTC.
const REFERENCE_EPOCH_SECONDS: i64 = 946_728_000;

/// Deterministic provider using mean orbital motion.
///
/// Positions are linear in time per planet, which makes transit behavior
/// fully predictable. Good enough for scoring trends and for tests; not an
/// ephemeris replacement.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanMotionProvider;

#[async_trait]
impl PositionProvider for MeanMotionProvider {
    async fn positions_at(
        &self,
        instant: DateTime<Utc>,
        _location: &GeoLocation,
    ) -> Result<HashMap<Planet, TransitPosition>, ProviderError> {
        let days = (instant.timestamp() - REFERENCE_EPOCH_SECONDS) as f64 / 86_400.0;
        let positions = MEAN_MOTION
            .iter()
            .map(|&(planet, epoch_longitude, daily_motion)| {
                let longitude = epoch_longitude + daily_motion * days;
                (planet, TransitPosition::from_longitude(planet, longitude))
            })
            .collect();
        Ok(positions)
    }
}

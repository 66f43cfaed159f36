// Not every test binary uses every helper.
#![allow(dead_code)]

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use jyotish_rust::api::{
    BirthDetails, GeoLocation, Planet, PlanetPosition, PositionProvider, ProviderError,
    TransitPosition, VedicChart, ZodiacSign,
};

/// A complete nine-planet chart with positions spread across the zodiac.
/// The seed shifts both the positions and the birth minute, so charts
/// built from different seeds never share a fingerprint.
pub fn full_chart(name: &str, ascendant: ZodiacSign, seed: f64) -> VedicChart {
    let positions = Planet::ALL
        .iter()
        .enumerate()
        .map(|(i, &planet)| {
            PlanetPosition::new(planet, (seed + 39.0 * i as f64).rem_euclid(360.0), ascendant)
        })
        .collect();
    VedicChart::new(
        BirthDetails {
            name: name.to_string(),
            birth_time: Utc.with_ymd_and_hms(1988, 7, 12, 5, 20, 0).unwrap()
                + chrono::Duration::seconds(seed as i64),
            latitude: 12.97,
            longitude: 77.59,
            tz_offset_minutes: 330,
        },
        ascendant,
        positions,
    )
}

pub fn start_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 4, 1, 0, 0, 0).unwrap()
}

/// Provider that fails every lookup.
pub struct FailingProvider;

#[async_trait]
impl PositionProvider for FailingProvider {
    async fn positions_at(
        &self,
        _instant: DateTime<Utc>,
        _location: &GeoLocation,
    ) -> Result<HashMap<Planet, TransitPosition>, ProviderError> {
        Err(ProviderError::new("ephemeris offline"))
    }
}

/// Provider that parks every planet at one fixed longitude.
pub struct FixedProvider(pub f64);

#[async_trait]
impl PositionProvider for FixedProvider {
    async fn positions_at(
        &self,
        _instant: DateTime<Utc>,
        _location: &GeoLocation,
    ) -> Result<HashMap<Planet, TransitPosition>, ProviderError> {
        Ok(Planet::ALL
            .iter()
            .map(|&p| (p, TransitPosition::from_longitude(p, self.0)))
            .collect())
    }
}

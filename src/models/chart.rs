use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Planet, ZodiacSign};

/// Identity and birth-event facts for one chart.
///
/// Only `birth_time`, `latitude` and `longitude` participate in the cache
/// fingerprint; the remaining fields are display metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthDetails {
    pub name: String,
    pub birth_time: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    /// Offset of the birth place from UTC, in minutes.
    pub tz_offset_minutes: i32,
}

/// Natal placement of one planet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub planet: Planet,
    /// Sidereal longitude in degrees, [0, 360).
    pub longitude: f64,
    pub sign: ZodiacSign,
    /// House counted from the ascendant, 1..=12.
    pub house: u8,
    pub retrograde: bool,
    pub combust: bool,
}

impl PlanetPosition {
    /// Build a placement from a longitude, deriving the sign and house from
    /// the ascendant sign.
    pub fn new(planet: Planet, longitude: f64, ascendant: ZodiacSign) -> Self {
        let sign = ZodiacSign::from_longitude(longitude);
        PlanetPosition {
            planet,
            longitude: longitude.rem_euclid(360.0),
            sign,
            house: sign.house_offset_from(ascendant),
            retrograde: false,
            combust: false,
        }
    }

    pub fn retrograde(mut self) -> Self {
        self.retrograde = true;
        self
    }

    pub fn combust(mut self) -> Self {
        self.combust = true;
        self
    }

    /// Degree within the occupied sign, [0, 30).
    pub fn degree_in_sign(&self) -> f64 {
        self.longitude.rem_euclid(30.0)
    }
}

/// Immutable chart input: birth details plus the natal positional dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VedicChart {
    pub birth: BirthDetails,
    pub ascendant: ZodiacSign,
    pub positions: Vec<PlanetPosition>,
}

impl VedicChart {
    pub fn new(
        birth: BirthDetails,
        ascendant: ZodiacSign,
        positions: Vec<PlanetPosition>,
    ) -> Self {
        VedicChart {
            birth,
            ascendant,
            positions,
        }
    }

    /// Natal position of a planet, if present in the dataset.
    pub fn position(&self, planet: Planet) -> Option<&PlanetPosition> {
        self.positions.iter().find(|p| p.planet == planet)
    }

    pub fn has_position(&self, planet: Planet) -> bool {
        self.position(planet).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_derives_sign_and_house() {
        // 95° = Cancer; with a Taurus ascendant that is house 3.
        let pos = PlanetPosition::new(Planet::Moon, 95.0, ZodiacSign::Taurus);
        assert_eq!(pos.sign, ZodiacSign::Cancer);
        assert_eq!(pos.house, 3);
        assert!((pos.degree_in_sign() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_position_lookup() {
        let birth = BirthDetails {
            name: "test".to_string(),
            birth_time: chrono::DateTime::UNIX_EPOCH,
            latitude: 27.7,
            longitude: 85.3,
            tz_offset_minutes: 345,
        };
        let chart = VedicChart::new(
            birth,
            ZodiacSign::Aries,
            vec![PlanetPosition::new(Planet::Sun, 10.0, ZodiacSign::Aries)],
        );
        assert!(chart.has_position(Planet::Sun));
        assert!(!chart.has_position(Planet::Moon));
    }
}

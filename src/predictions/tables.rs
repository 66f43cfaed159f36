//! Static scoring tables for the predictive pillars.
//!
//! Pure data: favorable Gochara houses per planet, ashtakavarga benefic
//! places, and the scaling constants used to normalize bindu counts.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Planet, VedicChart, ZodiacSign};

/// Bindu count that saturates a sarvashtakavarga sign (7 contributors x 8).
pub const SAV_MAX: f64 = 56.0;
/// Bindu count that saturates a bhinnashtakavarga row.
pub const BAV_MAX: f64 = 8.0;

/// Favorable transit houses counted from the natal Moon (standard Gochara).
fn favorable_transit_houses(planet: Planet) -> &'static [u8] {
    match planet {
        Planet::Sun => &[3, 6, 10, 11],
        Planet::Moon => &[1, 3, 6, 7, 10, 11],
        Planet::Mars => &[3, 6, 11],
        Planet::Mercury => &[2, 4, 6, 8, 10, 11],
        Planet::Jupiter => &[2, 5, 7, 9, 11],
        Planet::Venus => &[1, 2, 3, 4, 5, 8, 9, 11, 12],
        Planet::Saturn => &[3, 6, 11],
        Planet::Rahu | Planet::Ketu => &[3, 6, 10, 11],
    }
}

/// Benefic places contributing ashtakavarga bindus, counted from each
/// contributor's natal sign.
fn benefic_places(planet: Planet) -> &'static [u8] {
    match planet {
        Planet::Sun => &[1, 2, 4, 7, 8, 9, 10, 11],
        Planet::Moon => &[1, 3, 6, 7, 10, 11],
        Planet::Mars => &[1, 2, 4, 7, 8, 10, 11],
        Planet::Mercury => &[1, 2, 4, 6, 8, 10, 11],
        Planet::Jupiter => &[1, 2, 3, 4, 7, 8, 10, 11],
        Planet::Venus => &[1, 2, 3, 4, 5, 8, 9, 11, 12],
        Planet::Saturn => &[1, 3, 4, 6, 10, 11],
        Planet::Rahu | Planet::Ketu => &[],
    }
}

/// Lookup tables handed to the pillar engine at construction.
///
/// The defaults carry the standard values above; tests may substitute their
/// own sets to force favorable or unfavorable transits.
#[derive(Debug, Clone)]
pub struct PillarTables {
    favorable_houses: HashMap<Planet, Vec<u8>>,
}

impl Default for PillarTables {
    fn default() -> Self {
        let favorable_houses = Planet::ALL
            .iter()
            .map(|&p| (p, favorable_transit_houses(p).to_vec()))
            .collect();
        PillarTables { favorable_houses }
    }
}

impl PillarTables {
    /// Table with one favorable-house set shared by every planet.
    pub fn uniform(offsets: &[u8]) -> Self {
        let favorable_houses = Planet::ALL
            .iter()
            .map(|&p| (p, offsets.to_vec()))
            .collect();
        PillarTables { favorable_houses }
    }

    /// Whether a house offset from the natal Moon is favorable for a planet.
    pub fn is_favorable_offset(&self, planet: Planet, offset: u8) -> bool {
        self.favorable_houses
            .get(&planet)
            .map(|houses| houses.contains(&offset))
            .unwrap_or(false)
    }
}

/// Precomputed ashtakavarga bindu table for one chart.
///
/// Independent of the evaluation instant: the Strength pillar scores transit
/// signs against it without recomputation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AshtakavargaTable {
    bhinna: HashMap<Planet, [u8; 12]>,
    sarva: [u32; 12],
}

impl AshtakavargaTable {
    /// Build the table from natal positions.
    ///
    /// Each classical planet collects one bindu in every sign that stands at
    /// one of its benefic places from each contributor's natal sign; the
    /// sarvashtakavarga is the column sum across all seven rows.
    pub fn compute_for_chart(chart: &VedicChart) -> Self {
        let contributors: Vec<ZodiacSign> = Planet::CLASSICAL
            .iter()
            .filter_map(|&p| chart.position(p).map(|pos| pos.sign))
            .collect();

        let mut bhinna = HashMap::new();
        let mut sarva = [0u32; 12];

        for &target in Planet::CLASSICAL.iter() {
            let places = benefic_places(target);
            let mut row = [0u8; 12];
            for (idx, &sign) in ZodiacSign::ALL.iter().enumerate() {
                let bindus = contributors
                    .iter()
                    .filter(|&&from| places.contains(&sign.house_offset_from(from)))
                    .count()
                    .min(BAV_MAX as usize) as u8;
                row[idx] = bindus;
                sarva[idx] += bindus as u32;
            }
            bhinna.insert(target, row);
        }

        AshtakavargaTable { bhinna, sarva }
    }

    /// Bhinnashtakavarga bindus of a planet in a sign; `None` for the nodes,
    /// which carry no row of their own.
    pub fn bindus(&self, planet: Planet, sign: ZodiacSign) -> Option<u8> {
        self.bhinna.get(&planet).map(|row| row[sign.index()])
    }

    /// Sarvashtakavarga bindus of a sign.
    pub fn sarva_bindus(&self, sign: ZodiacSign) -> u32 {
        self.sarva[sign.index()]
    }
}

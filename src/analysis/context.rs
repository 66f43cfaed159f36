//! Per-request memoized view of derived chart quantities.
//!
//! One `AnalysisContext` is built per `analyze` request and shared read-only
//! by all analyzer tasks. Every accessor is a deterministic pure function of
//! the chart; derived values are computed at most logically once. Concurrent
//! first readers of the same key may duplicate the computation, but only one
//! value is ever stored and all later reads observe it.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    nakshatra_lord, Dignity, Element, Planet, PlanetPosition, StrengthLevel, VedicChart,
    ZodiacSign, VIMSHOTTARI_ORDER,
};
use crate::predictions::tables::AshtakavargaTable;

/// Keyed memoization store with atomic compute-if-absent semantics.
///
/// The read path never blocks writers for long: the value is computed
/// outside any lock, and `entry().or_insert` keeps the first stored value
/// when two computations race.
struct MemoMap<K, V> {
    inner: RwLock<HashMap<K, V>>,
}

impl<K: Eq + Hash + Clone, V: Clone> MemoMap<K, V> {
    fn new() -> Self {
        MemoMap {
            inner: RwLock::new(HashMap::new()),
        }
    }

    fn get_or_compute(&self, key: K, compute: impl FnOnce() -> V) -> V {
        if let Some(value) = self.inner.read().get(&key) {
            return value.clone();
        }
        let value = compute();
        let mut guard = self.inner.write();
        guard.entry(key).or_insert(value).clone()
    }
}

/// Read-only derived-data view over one chart.
pub struct AnalysisContext {
    chart: Arc<VedicChart>,
    house_lords: MemoMap<u8, Planet>,
    house_occupants: MemoMap<u8, Vec<PlanetPosition>>,
    dignities: MemoMap<Planet, Dignity>,
    strength_levels: MemoMap<Planet, StrengthLevel>,
    house_strengths: MemoMap<u8, StrengthLevel>,
    ashtakavarga: OnceLock<AshtakavargaTable>,
    dominant_element: OnceLock<Element>,
    atmakaraka: OnceLock<Planet>,
    dasha_lords: OnceLock<(Planet, Planet)>,
}

impl AnalysisContext {
    pub fn new(chart: Arc<VedicChart>) -> Self {
        AnalysisContext {
            chart,
            house_lords: MemoMap::new(),
            house_occupants: MemoMap::new(),
            dignities: MemoMap::new(),
            strength_levels: MemoMap::new(),
            house_strengths: MemoMap::new(),
            ashtakavarga: OnceLock::new(),
            dominant_element: OnceLock::new(),
            atmakaraka: OnceLock::new(),
            dasha_lords: OnceLock::new(),
        }
    }

    pub fn chart(&self) -> &VedicChart {
        &self.chart
    }

    pub fn ascendant(&self) -> ZodiacSign {
        self.chart.ascendant
    }

    /// Sign occupying a house counted from the ascendant.
    pub fn house_sign(&self, house: u8) -> ZodiacSign {
        self.chart.ascendant.nth(house)
    }

    /// Ruling planet of a house.
    pub fn house_lord(&self, house: u8) -> Planet {
        self.house_lords
            .get_or_compute(house, || self.house_sign(house).ruler())
    }

    /// Natal planets occupying a house.
    pub fn planets_in_house(&self, house: u8) -> Vec<PlanetPosition> {
        self.house_occupants.get_or_compute(house, || {
            self.chart
                .positions
                .iter()
                .filter(|p| p.house == house)
                .cloned()
                .collect()
        })
    }

    pub fn planet_position(&self, planet: Planet) -> Option<PlanetPosition> {
        self.chart.position(planet).cloned()
    }

    /// House of a planet, or `None` when the chart lacks a position for it.
    pub fn planet_house(&self, planet: Planet) -> Option<u8> {
        self.chart.position(planet).map(|p| p.house)
    }

    /// Placement dignity of a planet (neutral when the chart lacks it).
    pub fn dignity(&self, planet: Planet) -> Dignity {
        self.dignities
            .get_or_compute(planet, || self.compute_dignity(planet))
    }

    fn compute_dignity(&self, planet: Planet) -> Dignity {
        let Some(position) = self.chart.position(planet) else {
            return Dignity::Neutral;
        };
        let sign = position.sign;
        if planet.exaltation_sign() == Some(sign) {
            Dignity::Exalted
        } else if planet.moolatrikona_sign() == Some(sign) {
            Dignity::Moolatrikona
        } else if sign.ruler() == planet {
            Dignity::OwnSign
        } else if planet.debilitation_sign() == Some(sign) {
            Dignity::Debilitated
        } else if planet.friends().contains(&sign.ruler()) {
            Dignity::FriendSign
        } else if planet.enemies().contains(&sign.ruler()) {
            Dignity::EnemySign
        } else {
            Dignity::Neutral
        }
    }

    /// Shadbala-style strength band of a planet.
    ///
    /// Grade = dignity score, +0.25 for an angular house (kendra), -0.5 when
    /// combust, -0.25 when retrograde; banded per [`StrengthLevel::from_grade`].
    pub fn strength_level(&self, planet: Planet) -> StrengthLevel {
        self.strength_levels.get_or_compute(planet, || {
            let Some(position) = self.chart.position(planet) else {
                return StrengthLevel::Moderate;
            };
            let mut grade = self.dignity(planet).score();
            if matches!(position.house, 1 | 4 | 7 | 10) {
                grade += 0.25;
            }
            if position.combust {
                grade -= 0.5;
            }
            if position.retrograde {
                grade -= 0.25;
            }
            StrengthLevel::from_grade(grade)
        })
    }

    /// Strength band of a house from its lord and occupants.
    pub fn house_strength(&self, house: u8) -> StrengthLevel {
        self.house_strengths.get_or_compute(house, || {
            let lord = self.house_lord(house);
            let mut grade = self.strength_level(lord).value() as f64;
            for occupant in self.planets_in_house(house) {
                grade += if occupant.planet.is_natural_benefic() {
                    0.5
                } else {
                    -0.3
                };
            }
            StrengthLevel::from_grade(grade)
        })
    }

    /// Sign of the natal Moon; falls back to the ascendant sign.
    pub fn moon_sign(&self) -> ZodiacSign {
        self.chart
            .position(Planet::Moon)
            .map(|p| p.sign)
            .unwrap_or(self.chart.ascendant)
    }

    pub fn ascendant_lord(&self) -> Planet {
        self.chart.ascendant.ruler()
    }

    /// Soul significator: the non-node planet with the highest in-sign degree.
    pub fn atmakaraka(&self) -> Planet {
        *self.atmakaraka.get_or_init(|| {
            self.chart
                .positions
                .iter()
                .filter(|p| !p.planet.is_node())
                .max_by(|a, b| {
                    a.degree_in_sign()
                        .partial_cmp(&b.degree_in_sign())
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
                .map(|p| p.planet)
                .unwrap_or(Planet::Sun)
        })
    }

    /// Element with the most natal occupants.
    pub fn dominant_element(&self) -> Element {
        *self.dominant_element.get_or_init(|| {
            let mut counts: HashMap<Element, usize> = HashMap::new();
            for position in &self.chart.positions {
                *counts.entry(position.sign.element()).or_default() += 1;
            }
            counts
                .into_iter()
                .max_by_key(|&(element, count)| (count, element_rank(element)))
                .map(|(element, _)| element)
                .unwrap_or(Element::Fire)
        })
    }

    /// Reference planets for the predictive pillars: the Vimshottari lord of
    /// the natal Moon nakshatra (primary) and its successor (secondary).
    ///
    /// Deterministic per chart, which keeps the Promise pillar a pure
    /// function of the chart input.
    pub fn dasha_lords(&self) -> EngineResult<(Planet, Planet)> {
        let moon = self
            .chart
            .position(Planet::Moon)
            .ok_or(EngineError::MissingPosition(Planet::Moon))?;

        Ok(*self.dasha_lords.get_or_init(|| {
            let primary = nakshatra_lord(moon.longitude);
            let index = VIMSHOTTARI_ORDER
                .iter()
                .position(|&p| p == primary)
                .unwrap_or(0);
            let secondary = VIMSHOTTARI_ORDER[(index + 1) % 9];
            (primary, secondary)
        }))
    }

    /// Precomputed auxiliary strength table for the Strength pillar.
    pub fn ashtakavarga(&self) -> &AshtakavargaTable {
        self.ashtakavarga
            .get_or_init(|| AshtakavargaTable::compute_for_chart(&self.chart))
    }
}

/// Deterministic tie-break for element counting.
fn element_rank(element: Element) -> u8 {
    match element {
        Element::Fire => 3,
        Element::Earth => 2,
        Element::Air => 1,
        Element::Water => 0,
    }
}

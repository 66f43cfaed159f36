use serde::{Deserialize, Serialize};

/// The nine grahas of the Vedic model.
///
/// Rahu and Ketu are the lunar nodes ("shadow planets"): they have no own
/// sign and are excluded from several classical computations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Planet {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    Rahu,
    Ketu,
}

impl Planet {
    pub const ALL: [Planet; 9] = [
        Planet::Sun,
        Planet::Moon,
        Planet::Mars,
        Planet::Mercury,
        Planet::Jupiter,
        Planet::Venus,
        Planet::Saturn,
        Planet::Rahu,
        Planet::Ketu,
    ];

    /// The seven classical planets that receive bhinnashtakavarga rows.
    pub const CLASSICAL: [Planet; 7] = [
        Planet::Sun,
        Planet::Moon,
        Planet::Mars,
        Planet::Mercury,
        Planet::Jupiter,
        Planet::Venus,
        Planet::Saturn,
    ];

    pub fn is_node(&self) -> bool {
        matches!(self, Planet::Rahu | Planet::Ketu)
    }

    /// Natural benefics per the standard classification (Mercury and Moon
    /// are treated as benefic without the conditional caveats).
    pub fn is_natural_benefic(&self) -> bool {
        matches!(
            self,
            Planet::Moon | Planet::Mercury | Planet::Jupiter | Planet::Venus
        )
    }

    /// Sign of exaltation, if any (nodes have none).
    pub fn exaltation_sign(&self) -> Option<ZodiacSign> {
        match self {
            Planet::Sun => Some(ZodiacSign::Aries),
            Planet::Moon => Some(ZodiacSign::Taurus),
            Planet::Mars => Some(ZodiacSign::Capricorn),
            Planet::Mercury => Some(ZodiacSign::Virgo),
            Planet::Jupiter => Some(ZodiacSign::Cancer),
            Planet::Venus => Some(ZodiacSign::Pisces),
            Planet::Saturn => Some(ZodiacSign::Libra),
            Planet::Rahu | Planet::Ketu => None,
        }
    }

    /// Sign of debilitation: always opposite the exaltation sign.
    pub fn debilitation_sign(&self) -> Option<ZodiacSign> {
        self.exaltation_sign().map(|s| s.nth(7))
    }

    /// Moolatrikona sign, if any.
    pub fn moolatrikona_sign(&self) -> Option<ZodiacSign> {
        match self {
            Planet::Sun => Some(ZodiacSign::Leo),
            Planet::Moon => Some(ZodiacSign::Taurus),
            Planet::Mars => Some(ZodiacSign::Aries),
            Planet::Mercury => Some(ZodiacSign::Virgo),
            Planet::Jupiter => Some(ZodiacSign::Sagittarius),
            Planet::Venus => Some(ZodiacSign::Libra),
            Planet::Saturn => Some(ZodiacSign::Aquarius),
            Planet::Rahu | Planet::Ketu => None,
        }
    }

    /// Natural friends per the standard Naisargika Maitri table.
    pub fn friends(&self) -> &'static [Planet] {
        match self {
            Planet::Sun => &[Planet::Moon, Planet::Mars, Planet::Jupiter],
            Planet::Moon => &[Planet::Sun, Planet::Mercury],
            Planet::Mars => &[Planet::Sun, Planet::Moon, Planet::Jupiter],
            Planet::Mercury => &[Planet::Sun, Planet::Venus],
            Planet::Jupiter => &[Planet::Sun, Planet::Moon, Planet::Mars],
            Planet::Venus => &[Planet::Mercury, Planet::Saturn],
            Planet::Saturn => &[Planet::Mercury, Planet::Venus],
            Planet::Rahu => &[Planet::Venus, Planet::Saturn],
            Planet::Ketu => &[Planet::Mars, Planet::Jupiter],
        }
    }

    /// Natural enemies per the same table.
    pub fn enemies(&self) -> &'static [Planet] {
        match self {
            Planet::Sun => &[Planet::Venus, Planet::Saturn],
            Planet::Moon => &[],
            Planet::Mars => &[Planet::Mercury],
            Planet::Mercury => &[Planet::Moon],
            Planet::Jupiter => &[Planet::Mercury, Planet::Venus],
            Planet::Venus => &[Planet::Sun, Planet::Moon],
            Planet::Saturn => &[Planet::Sun, Planet::Moon, Planet::Mars],
            Planet::Rahu => &[Planet::Sun, Planet::Moon],
            Planet::Ketu => &[Planet::Sun, Planet::Moon],
        }
    }
}

impl std::fmt::Display for Planet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Planet::Sun => "Sun",
            Planet::Moon => "Moon",
            Planet::Mars => "Mars",
            Planet::Mercury => "Mercury",
            Planet::Jupiter => "Jupiter",
            Planet::Venus => "Venus",
            Planet::Saturn => "Saturn",
            Planet::Rahu => "Rahu",
            Planet::Ketu => "Ketu",
        };
        write!(f, "{name}")
    }
}

/// The twelve sidereal signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Zero-based index, Aries = 0.
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    /// Sign containing a sidereal longitude in degrees.
    pub fn from_longitude(longitude: f64) -> ZodiacSign {
        let normalized = longitude.rem_euclid(360.0);
        Self::ALL[(normalized / 30.0) as usize % 12]
    }

    /// The n-th sign counted inclusively from this one (n = 1 is self).
    pub fn nth(&self, n: u8) -> ZodiacSign {
        Self::ALL[(self.index() + (n as usize).saturating_sub(1)) % 12]
    }

    /// Inclusive house count from `reference` to this sign (1..=12).
    ///
    /// This is the classical Gochara offset: a planet transiting the sign
    /// right after the natal Moon sign sits in "house 2" from the Moon.
    pub fn house_offset_from(&self, reference: ZodiacSign) -> u8 {
        ((self.index() + 12 - reference.index()) % 12) as u8 + 1
    }

    /// Ruling planet of the sign.
    pub fn ruler(&self) -> Planet {
        match self {
            ZodiacSign::Aries | ZodiacSign::Scorpio => Planet::Mars,
            ZodiacSign::Taurus | ZodiacSign::Libra => Planet::Venus,
            ZodiacSign::Gemini | ZodiacSign::Virgo => Planet::Mercury,
            ZodiacSign::Cancer => Planet::Moon,
            ZodiacSign::Leo => Planet::Sun,
            ZodiacSign::Sagittarius | ZodiacSign::Pisces => Planet::Jupiter,
            ZodiacSign::Capricorn | ZodiacSign::Aquarius => Planet::Saturn,
        }
    }

    pub fn element(&self) -> Element {
        match self {
            ZodiacSign::Aries | ZodiacSign::Leo | ZodiacSign::Sagittarius => Element::Fire,
            ZodiacSign::Taurus | ZodiacSign::Virgo | ZodiacSign::Capricorn => Element::Earth,
            ZodiacSign::Gemini | ZodiacSign::Libra | ZodiacSign::Aquarius => Element::Air,
            ZodiacSign::Cancer | ZodiacSign::Scorpio | ZodiacSign::Pisces => Element::Water,
        }
    }
}

impl std::fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Classical element of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

/// Vimshottari dasha lord sequence, starting at Ashwini.
pub const VIMSHOTTARI_ORDER: [Planet; 9] = [
    Planet::Ketu,
    Planet::Venus,
    Planet::Sun,
    Planet::Moon,
    Planet::Mars,
    Planet::Rahu,
    Planet::Jupiter,
    Planet::Saturn,
    Planet::Mercury,
];

/// Vimshottari lord of the nakshatra containing a sidereal longitude.
///
/// The 27 nakshatras span 13°20' each; their lords cycle through
/// [`VIMSHOTTARI_ORDER`] three times around the zodiac.
pub fn nakshatra_lord(longitude: f64) -> Planet {
    let normalized = longitude.rem_euclid(360.0);
    let nakshatra = (normalized / (360.0 / 27.0)) as usize % 27;
    VIMSHOTTARI_ORDER[nakshatra % 9]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_from_longitude() {
        assert_eq!(ZodiacSign::from_longitude(0.0), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(29.999), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(30.0), ZodiacSign::Taurus);
        assert_eq!(ZodiacSign::from_longitude(359.0), ZodiacSign::Pisces);
        assert_eq!(ZodiacSign::from_longitude(360.0), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(-15.0), ZodiacSign::Pisces);
    }

    #[test]
    fn test_house_offset_inclusive() {
        assert_eq!(
            ZodiacSign::Aries.house_offset_from(ZodiacSign::Aries),
            1
        );
        assert_eq!(
            ZodiacSign::Taurus.house_offset_from(ZodiacSign::Aries),
            2
        );
        assert_eq!(
            ZodiacSign::Aries.house_offset_from(ZodiacSign::Taurus),
            12
        );
    }

    #[test]
    fn test_nth_sign_wraps() {
        assert_eq!(ZodiacSign::Capricorn.nth(1), ZodiacSign::Capricorn);
        assert_eq!(ZodiacSign::Capricorn.nth(4), ZodiacSign::Aries);
    }

    #[test]
    fn test_debilitation_opposes_exaltation() {
        for planet in Planet::CLASSICAL {
            let exalted = planet.exaltation_sign().unwrap();
            let debilitated = planet.debilitation_sign().unwrap();
            assert_eq!(debilitated.house_offset_from(exalted), 7);
        }
    }

    #[test]
    fn test_nakshatra_lord_cycle() {
        // Ashwini (0°) is ruled by Ketu, Bharani by Venus.
        assert_eq!(nakshatra_lord(0.0), Planet::Ketu);
        assert_eq!(nakshatra_lord(14.0), Planet::Venus);
        // The cycle repeats after nine nakshatras (120°).
        assert_eq!(nakshatra_lord(120.5), Planet::Ketu);
    }
}

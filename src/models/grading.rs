use serde::{Deserialize, Serialize};

/// Qualitative strength banding used across analyzers and pillars.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum StrengthLevel {
    Afflicted,
    Weak,
    Moderate,
    Strong,
    Excellent,
}

impl StrengthLevel {
    /// Numeric grade, 1 (afflicted) through 5 (excellent).
    pub fn value(&self) -> u8 {
        match self {
            StrengthLevel::Afflicted => 1,
            StrengthLevel::Weak => 2,
            StrengthLevel::Moderate => 3,
            StrengthLevel::Strong => 4,
            StrengthLevel::Excellent => 5,
        }
    }

    /// Band a 0-100 score into a level.
    pub fn from_score(score: f64) -> StrengthLevel {
        match score {
            s if s >= 80.0 => StrengthLevel::Excellent,
            s if s >= 60.0 => StrengthLevel::Strong,
            s if s >= 40.0 => StrengthLevel::Moderate,
            s if s >= 20.0 => StrengthLevel::Weak,
            _ => StrengthLevel::Afflicted,
        }
    }

    /// Band a raw 0-5 grade (dignity + occupancy arithmetic) into a level.
    pub fn from_grade(grade: f64) -> StrengthLevel {
        match grade {
            g if g >= 4.5 => StrengthLevel::Excellent,
            g if g >= 3.5 => StrengthLevel::Strong,
            g if g >= 2.5 => StrengthLevel::Moderate,
            g if g >= 1.5 => StrengthLevel::Weak,
            _ => StrengthLevel::Afflicted,
        }
    }
}

impl std::fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Placement dignity of a planet in its natal sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dignity {
    Exalted,
    Moolatrikona,
    OwnSign,
    FriendSign,
    Neutral,
    EnemySign,
    Debilitated,
}

impl std::fmt::Display for Dignity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl Dignity {
    /// Dignity contribution on the same 0-5 scale as [`StrengthLevel::value`].
    pub fn score(&self) -> f64 {
        match self {
            Dignity::Exalted => 5.0,
            Dignity::Moolatrikona => 4.5,
            Dignity::OwnSign => 4.0,
            Dignity::FriendSign => 3.5,
            Dignity::Neutral => 2.5,
            Dignity::EnemySign => 1.5,
            Dignity::Debilitated => 0.5,
        }
    }
}

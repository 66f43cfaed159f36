//! Domain model for Vedic chart analysis.
//!
//! The model is deliberately small: planets, signs, natal positions and the
//! qualitative grading enums shared by every analyzer. All types derive
//! Serialize/Deserialize so results can be handed to external layers as JSON.

mod chart;
mod grading;
mod zodiac;

pub use chart::{BirthDetails, PlanetPosition, VedicChart};
pub use grading::{Dignity, StrengthLevel};
pub use zodiac::{nakshatra_lord, Element, Planet, ZodiacSign, VIMSHOTTARI_ORDER};

//! # Jyotish Rust Engine
//!
//! Vedic-astrology analysis engine.
//!
//! This crate takes a natal chart (birth details plus sidereal planetary
//! positions) and produces two kinds of output: a cached, concurrently
//! computed deep analysis across seven life areas, and a triple-pillar
//! predictive score sampled over a forward timeline.
//!
//! ## Features
//!
//! - **Deep analysis**: seven independent life-area analyzers fan out over
//!   a shared memoized context and merge into a composite synthesis
//! - **Result caching**: fingerprint-keyed TTL cache so equal charts never
//!   recompute within the window
//! - **Predictions**: Promise / Occasion / Strength pillars blended into a
//!   composite, sampled across a configurable horizon with peak detection
//! - **Pluggable ephemeris**: transit positions come from a
//!   [`PositionProvider`](ephemeris::PositionProvider) implementation
//!
//! ## Architecture
//!
//! - [`api`]: consolidated public types
//! - [`models`]: chart, planet, sign and grading primitives
//! - [`analysis`]: context, analyzers, synthesis and the cached engine
//! - [`predictions`]: pillar scoring, static tables and the timeline
//! - [`cache`] / [`fingerprint`]: result cache and its keying
//! - [`ephemeris`]: position provider boundary and the mean-motion model

pub mod analysis;
pub mod api;
pub mod cache;
pub mod config;
pub mod ephemeris;
pub mod error;
pub mod fingerprint;
pub mod models;
pub mod predictions;

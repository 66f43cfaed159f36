//! Chart fingerprinting for result-cache deduplication.

use sha2::{Digest, Sha256};

use crate::models::VedicChart;

/// Compute the deterministic cache fingerprint of a chart.
///
/// Only the birth epoch and coordinates participate: two charts that differ
/// in name or other metadata share a fingerprint and therefore a cache entry.
///
/// # Returns
/// Hexadecimal SHA-256 of the canonical key payload.
pub fn chart_fingerprint(chart: &VedicChart) -> String {
    let payload = serde_json::json!({
        "epoch": chart.birth.birth_time.timestamp(),
        "lat": chart.birth.latitude,
        "lon": chart.birth.longitude,
    })
    .to_string();

    let mut hasher = Sha256::new();
    hasher.update(payload.as_bytes());
    hex::encode(hasher.finalize())
}

//! Shared test helpers for slot-prizes.

#![allow(dead_code)]

use slot_prizes::Prize;

/// Prize with placeholder display fields.
pub fn prize(id: i64, weight: f64) -> Prize {
    Prize::new(
        id,
        format!("Prize {id}"),
        "🎁",
        weight,
        "from-gray-400 to-gray-600",
    )
}

/// Ordered prize list from `(id, weight)` pairs.
pub fn weighted(entries: &[(i64, f64)]) -> Vec<Prize> {
    entries
        .iter()
        .map(|&(id, weight)| prize(id, weight))
        .collect()
}

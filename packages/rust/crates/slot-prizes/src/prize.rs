//! Prize record: the unit of data held by the registry.
//!
//! Field names on the wire follow the game's JSON contract
//! (`emoji`, `probability`, `color`); the Rust names describe what they mean.

use serde::{Deserialize, Serialize};

/// One entry in the prize set.
///
/// `weight` is a relative likelihood. Weights across a set are not required to
/// sum to any fixed total; they are normalized at draw time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prize {
    /// Identifier, unique within one snapshot.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Display glyph (usually an emoji).
    #[serde(rename = "emoji")]
    pub symbol: String,
    /// Relative weight (`>= 0`).
    #[serde(rename = "probability")]
    pub weight: f64,
    /// Opaque presentation token, passed through untouched.
    #[serde(rename = "color")]
    pub style: String,
}

impl Prize {
    /// Create a prize record.
    #[must_use]
    pub fn new(
        id: i64,
        name: impl Into<String>,
        symbol: impl Into<String>,
        weight: f64,
        style: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            symbol: symbol.into(),
            weight,
            style: style.into(),
        }
    }

    /// Same record with a different weight.
    #[must_use]
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }
}

/// Sum of all weights in `prizes`.
#[must_use]
pub fn total_weight(prizes: &[Prize]) -> f64 {
    prizes.iter().map(|prize| prize.weight).sum()
}

//! Weighted prize selection.
//!
//! Each record owns the half-open range `[c_before, c_before + weight)` on the
//! cumulative weight line, in stored order. A draw value `r = sample * total`
//! selects the first record whose range end is strictly greater than `r`, so
//! earlier records win ties at exact boundaries and zero-weight records are
//! never chosen while the total is positive.
//!
//! Edge cases:
//! - empty snapshot: [`SelectionError::EmptyRegistrySnapshot`]
//! - total weight zero: uniform pick by index
//! - rounding leaves `r` at or past the final cumulative sum: last record

use serde::Serialize;

use crate::error::SelectionError;
use crate::prize::{Prize, total_weight};

/// Draw one prize using a sample uniformly distributed in `[0, 1)`.
///
/// Pure: the same `(snapshot, sample)` always yields the same record.
///
/// # Errors
///
/// [`SelectionError::EmptyRegistrySnapshot`] for an empty snapshot,
/// [`SelectionError::InvalidSample`] when `sample` is not a finite value in `[0, 1)`.
pub fn select(snapshot: &[Prize], sample: f64) -> Result<&Prize, SelectionError> {
    let index = select_index(snapshot, sample)?;
    Ok(&snapshot[index])
}

/// Index form of [`select`].
///
/// # Errors
///
/// Same as [`select`].
pub fn select_index(snapshot: &[Prize], sample: f64) -> Result<usize, SelectionError> {
    if snapshot.is_empty() {
        return Err(SelectionError::EmptyRegistrySnapshot);
    }
    if !(0.0..1.0).contains(&sample) {
        return Err(SelectionError::InvalidSample(sample));
    }

    let total = total_weight(snapshot);
    if total <= 0.0 {
        return Ok(uniform_index(snapshot.len(), sample));
    }
    Ok(cumulative_index(snapshot, sample * total))
}

/// Draw one prize using a value already scaled to `[0, total)`.
///
/// Values at or past the total fall through to the last record. With a zero
/// total every scaled value is `0`, which maps to the first record, matching
/// the uniform fallback of [`select`] for a sample of `0`.
///
/// # Errors
///
/// [`SelectionError::EmptyRegistrySnapshot`] for an empty snapshot,
/// [`SelectionError::InvalidSample`] when `r` is negative or NaN.
pub fn select_scaled(snapshot: &[Prize], r: f64) -> Result<&Prize, SelectionError> {
    if snapshot.is_empty() {
        return Err(SelectionError::EmptyRegistrySnapshot);
    }
    if r.is_nan() || r < 0.0 {
        return Err(SelectionError::InvalidSample(r));
    }
    if total_weight(snapshot) <= 0.0 {
        return Ok(&snapshot[0]);
    }
    Ok(&snapshot[cumulative_index(snapshot, r)])
}

fn uniform_index(len: usize, sample: f64) -> usize {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let index = (sample * len as f64).floor() as usize;
    index.min(len - 1)
}

fn cumulative_index(snapshot: &[Prize], r: f64) -> usize {
    let mut cumulative = 0.0;
    for (index, prize) in snapshot.iter().enumerate() {
        cumulative += prize.weight;
        if r < cumulative {
            return index;
        }
    }
    snapshot.len() - 1
}

/// Normalized chance of one prize within a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrizeOdds {
    /// Prize id.
    pub id: i64,
    /// Prize display name.
    pub name: String,
    /// Raw configured weight.
    pub weight: f64,
    /// Share of the total, in `[0, 1]`.
    pub share: f64,
    /// `share` expressed as a percentage.
    pub percent: f64,
}

/// Real chance of each prize, in stored order.
///
/// Mirrors the selection rules: `weight / total`, or `1 / len` for every
/// record when the total is zero.
#[must_use]
pub fn odds(snapshot: &[Prize]) -> Vec<PrizeOdds> {
    let total = total_weight(snapshot);
    #[allow(clippy::cast_precision_loss)]
    let uniform = 1.0 / snapshot.len().max(1) as f64;
    snapshot
        .iter()
        .map(|prize| {
            let share = if total > 0.0 {
                prize.weight / total
            } else {
                uniform
            };
            PrizeOdds {
                id: prize.id,
                name: prize.name.clone(),
                weight: prize.weight,
                share,
                percent: share * 100.0,
            }
        })
        .collect()
}

//! The prize registry: current prize set plus validated wholesale replacement.

use std::sync::Arc;

use serde_json::Value;

use crate::defaults::default_prizes;
use crate::error::{SelectionError, ValidationError};
use crate::prize::{Prize, total_weight};
use crate::random::RandomSource;
use crate::selection::{PrizeOdds, odds, select};
use crate::storage::{InMemoryPrizeStorage, PrizeSnapshot, PrizeStorage};
use crate::validate::{validate, validate_payload};

/// Holds the current ordered prize set.
///
/// Construct one per process (or per test) and share it by reference; there is
/// no global instance. `replace` is the only mutator.
pub struct PrizeRegistry {
    storage: Arc<dyn PrizeStorage>,
}

impl std::fmt::Debug for PrizeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrizeRegistry")
            .field("backend", &self.storage.backend_name())
            .field("revision", &self.storage.load().revision)
            .finish()
    }
}

impl PrizeRegistry {
    /// Wrap an existing storage backend as-is.
    #[must_use]
    pub fn new(storage: Arc<dyn PrizeStorage>) -> Self {
        Self { storage }
    }

    /// In-memory registry seeded with `initial`.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] of `initial` if it would be rejected by
    /// [`PrizeRegistry::replace`].
    pub fn in_memory(initial: Vec<Prize>) -> Result<Self, ValidationError> {
        validate(&initial)?;
        Ok(Self::new(Arc::new(InMemoryPrizeStorage::new(initial))))
    }

    /// In-memory registry seeded with the built-in prize set.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(Arc::new(InMemoryPrizeStorage::new(default_prizes())))
    }

    /// Backend identifier.
    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        self.storage.backend_name()
    }

    /// Current prize set.
    #[must_use]
    pub fn snapshot(&self) -> PrizeSnapshot {
        self.storage.load()
    }

    /// Replace the whole prize set.
    ///
    /// On success the candidate becomes current in one step and the new
    /// snapshot is returned. On failure the current set is untouched.
    ///
    /// # Errors
    ///
    /// Any [`ValidationError`] raised by the candidate.
    pub fn replace(&self, candidate: Vec<Prize>) -> Result<PrizeSnapshot, ValidationError> {
        validate(&candidate).map_err(log_rejection)?;
        Ok(self.install(candidate))
    }

    /// Replace the whole prize set from an untyped payload.
    ///
    /// # Errors
    ///
    /// Any [`ValidationError`], including structural ones from parsing.
    pub fn replace_from_json(&self, payload: &Value) -> Result<PrizeSnapshot, ValidationError> {
        let candidate = validate_payload(payload).map_err(log_rejection)?;
        Ok(self.install(candidate))
    }

    fn install(&self, candidate: Vec<Prize>) -> PrizeSnapshot {
        let total = total_weight(&candidate);
        let snapshot = self.storage.swap(candidate);
        tracing::info!(
            revision = snapshot.revision,
            prizes = snapshot.len(),
            total_weight = total,
            "prize set replaced"
        );
        snapshot
    }

    /// Draw one prize from the current set with a sample from `rng`.
    ///
    /// # Errors
    ///
    /// [`SelectionError`] if the set is empty or `rng` yields an out-of-range sample.
    pub fn draw(&self, rng: &dyn RandomSource) -> Result<Prize, SelectionError> {
        let snapshot = self.snapshot();
        let sample = rng.next_sample();
        let prize = select(&snapshot, sample)?;
        tracing::debug!(
            revision = snapshot.revision,
            sample,
            total_weight = total_weight(&snapshot),
            prize_id = prize.id,
            prize = %prize.name,
            "prize drawn"
        );
        Ok(prize.clone())
    }

    /// Normalized chance of each prize in the current set.
    #[must_use]
    pub fn odds(&self) -> Vec<PrizeOdds> {
        odds(&self.snapshot())
    }
}

fn log_rejection(error: ValidationError) -> ValidationError {
    tracing::warn!(
        kind = error.kind(),
        error = %error,
        "prize set replacement rejected"
    );
    error
}

impl Default for PrizeRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

use std::sync::Arc;

use anyhow::{Context, Result};
use slot_prizes::{PrizeRegistry, RandomSource, SeededRandomSource, ThreadRandomSource};

use super::SlotSettings;

/// Registry seeded from settings (or the built-in set). Fails on an invalid configured list.
pub fn build_registry(settings: &SlotSettings) -> Result<PrizeRegistry> {
    let prizes = settings
        .initial_prizes()
        .context("configured prize list is invalid")?;
    let registry =
        PrizeRegistry::in_memory(prizes).context("configured prize list is invalid")?;
    tracing::info!(
        prizes = registry.snapshot().len(),
        configured = settings.prizes.is_some(),
        backend = registry.backend_name(),
        "prize registry initialized"
    );
    Ok(registry)
}

/// Seeded generator when `seed` is set, thread-local generator otherwise.
#[must_use]
pub fn random_source(seed: Option<u64>) -> Arc<dyn RandomSource> {
    match seed {
        Some(seed) => {
            tracing::info!(seed, "using seeded random source");
            Arc::new(SeededRandomSource::new(seed))
        }
        None => Arc::new(ThreadRandomSource),
    }
}

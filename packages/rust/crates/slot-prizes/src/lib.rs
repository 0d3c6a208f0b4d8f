//! slot-prizes - Prize registry and weighted selection for the slot game.
//!
//! Two cooperating pieces:
//! - [`PrizeRegistry`]: the current ordered prize set, replaced wholesale
//!   under validation, readable concurrently without torn reads
//! - [`select`]: maps a snapshot and a uniform sample to exactly one prize,
//!   weighting by relative `weight` that need not sum to any fixed total
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ Boundary (HTTP gateway, CLI) │
//! └──────────────┬───────────────┘
//!      snapshot  │  replace        draw
//!                ▼
//! ┌──────────────────────────────┐    ┌──────────────────┐
//! │ PrizeRegistry                │───▶│ validate         │
//! │  └─ PrizeStorage (backend)   │    └──────────────────┘
//! └──────────────┬───────────────┘
//!                ▼
//! ┌──────────────────────────────┐    ┌──────────────────┐
//! │ select(snapshot, sample)     │◀───│ RandomSource     │
//! └──────────────────────────────┘    └──────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust
//! use slot_prizes::{FixedRandomSource, Prize, PrizeRegistry};
//!
//! let registry = PrizeRegistry::in_memory(vec![
//!     Prize::new(1, "Jackpot", "💰", 10.0, "gold"),
//!     Prize::new(2, "Try again", "🎯", 90.0, "gray"),
//! ])
//! .unwrap();
//!
//! let prize = registry.draw(&FixedRandomSource::constant(0.05)).unwrap();
//! assert_eq!(prize.id, 1);
//! ```

mod defaults;
mod error;
mod prize;
mod random;
mod registry;
mod selection;
mod storage;
mod validate;

pub use defaults::default_prizes;
pub use error::{SelectionError, ValidationError};
pub use prize::{Prize, total_weight};
pub use random::{FixedRandomSource, RandomSource, SeededRandomSource, ThreadRandomSource};
pub use registry::PrizeRegistry;
pub use selection::{PrizeOdds, odds, select, select_index, select_scaled};
pub use storage::{InMemoryPrizeStorage, PrizeSnapshot, PrizeStorage};
pub use validate::{parse_candidate, validate, validate_payload};

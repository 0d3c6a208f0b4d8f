//! Error types for prize validation and selection.
//!
//! Library crates use `thiserror` for explicit error enums.

use thiserror::Error;

/// Why a candidate prize set was rejected.
///
/// The registry is never mutated when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Not a list, empty, or an element is missing a field / has the wrong type.
    #[error("malformed prize payload: {0}")]
    MalformedPayload(String),

    /// Two or more records share an id.
    #[error("duplicate prize id {id}")]
    DuplicateId {
        /// First id seen twice, in list order.
        id: i64,
    },

    /// A record carries a weight below zero.
    #[error("prize {id} has negative weight {weight}")]
    NegativeWeight {
        /// Offending record.
        id: i64,
        /// Offending weight.
        weight: f64,
    },
}

impl ValidationError {
    /// Stable machine-readable tag used in gateway responses and logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MalformedPayload(_) => "malformed_payload",
            Self::DuplicateId { .. } => "duplicate_id",
            Self::NegativeWeight { .. } => "negative_weight",
        }
    }
}

/// Why a draw could not produce a prize.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SelectionError {
    /// The snapshot handed to the engine has no records.
    #[error("cannot draw from an empty prize snapshot")]
    EmptyRegistrySnapshot,

    /// The random sample was outside its documented range or not finite.
    #[error("random sample {0} is out of range")]
    InvalidSample(f64),
}

//! Candidate prize set validation.
//!
//! Checks run in order and stop at the first failure:
//! 1. the payload is a non-empty list
//! 2. every element has the five fields with the expected types
//! 3. every weight is finite
//! 4. ids are unique
//! 5. weights are non-negative
//! 6. the weights sum to a finite total
//!
//! Weights are not required to sum to any particular total, only one that
//! selection can scale a sample against without overflowing.

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::prize::{Prize, total_weight};

/// Structural checks on an untyped payload, producing typed records.
///
/// # Errors
///
/// Returns [`ValidationError::MalformedPayload`] when the payload is not an
/// array or an element is missing a field or has the wrong type.
pub fn parse_candidate(payload: &Value) -> Result<Vec<Prize>, ValidationError> {
    let Some(items) = payload.as_array() else {
        return Err(ValidationError::MalformedPayload(format!(
            "expected a list of prizes, got {}",
            json_type_name(payload)
        )));
    };
    items
        .iter()
        .enumerate()
        .map(|(index, item)| parse_record(index, item))
        .collect()
}

fn parse_record(index: usize, item: &Value) -> Result<Prize, ValidationError> {
    let Some(fields) = item.as_object() else {
        return Err(ValidationError::MalformedPayload(format!(
            "prize #{index} must be an object, got {}",
            json_type_name(item)
        )));
    };
    let id = require(fields, index, "id", "an integer", Value::as_i64)?;
    let name = require(fields, index, "name", "a string", Value::as_str)?;
    let symbol = require(fields, index, "emoji", "a string", Value::as_str)?;
    let weight = require(fields, index, "probability", "a number", Value::as_f64)?;
    let style = require(fields, index, "color", "a string", Value::as_str)?;
    if !weight.is_finite() {
        return Err(ValidationError::MalformedPayload(format!(
            "prize #{index} field `probability` must be a finite number"
        )));
    }
    Ok(Prize::new(id, name, symbol, weight, style))
}

fn require<'a, T>(
    fields: &'a Map<String, Value>,
    index: usize,
    key: &str,
    expected: &str,
    extract: impl FnOnce(&'a Value) -> Option<T>,
) -> Result<T, ValidationError> {
    let value = fields.get(key).ok_or_else(|| {
        ValidationError::MalformedPayload(format!("prize #{index} is missing field `{key}`"))
    })?;
    extract(value).ok_or_else(|| {
        ValidationError::MalformedPayload(format!(
            "prize #{index} field `{key}` must be {expected}, got {}",
            json_type_name(value)
        ))
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(number) if number.is_i64() || number.is_u64() => "an integer",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

/// Semantic checks on typed records.
///
/// # Errors
///
/// - [`ValidationError::MalformedPayload`] for an empty list, a non-finite weight,
///   or weights whose sum overflows
/// - [`ValidationError::DuplicateId`] for the first id that repeats
/// - [`ValidationError::NegativeWeight`] for the first weight below zero
pub fn validate(candidate: &[Prize]) -> Result<(), ValidationError> {
    if candidate.is_empty() {
        return Err(ValidationError::MalformedPayload(
            "prize list must not be empty".to_string(),
        ));
    }
    if let Some(prize) = candidate.iter().find(|prize| !prize.weight.is_finite()) {
        return Err(ValidationError::MalformedPayload(format!(
            "prize {} weight must be a finite number",
            prize.id
        )));
    }

    let mut seen = HashSet::with_capacity(candidate.len());
    if let Some(prize) = candidate.iter().find(|prize| !seen.insert(prize.id)) {
        return Err(ValidationError::DuplicateId { id: prize.id });
    }

    if let Some(prize) = candidate.iter().find(|prize| prize.weight < 0.0) {
        return Err(ValidationError::NegativeWeight {
            id: prize.id,
            weight: prize.weight,
        });
    }

    let total = total_weight(candidate);
    if !total.is_finite() {
        return Err(ValidationError::MalformedPayload(format!(
            "total weight of {} prizes overflows ({total})",
            candidate.len()
        )));
    }
    Ok(())
}

/// Parse then validate an untyped payload.
///
/// # Errors
///
/// Any [`ValidationError`] from [`parse_candidate`] or [`validate`].
pub fn validate_payload(payload: &Value) -> Result<Vec<Prize>, ValidationError> {
    let candidate = parse_candidate(payload)?;
    validate(&candidate)?;
    Ok(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_type_names_distinguish_integers_from_floats() {
        assert_eq!(json_type_name(&json!(3)), "an integer");
        assert_eq!(json_type_name(&json!(3.5)), "a number");
        assert_eq!(json_type_name(&json!(null)), "null");
    }

    #[test]
    fn missing_field_names_index_and_key() {
        let payload = json!([{ "id": 1, "name": "a", "emoji": "x", "color": "c" }]);
        let err = parse_candidate(&payload).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MalformedPayload(
                "prize #0 is missing field `probability`".to_string()
            )
        );
    }
}

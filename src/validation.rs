//! Request shape validation
//!
//! Checks the raw JSON body before the selector runs. One message at a
//! time, first failing rule wins, in a fixed order: budget, items list,
//! then per item: missing fields, name, price, value. Message text is
//! part of the wire contract and must stay stable.

use serde_json::Value;

use crate::error::{OptimizerError, OptimizerResult};
use crate::types::{Item, OptimizeRequest};

/// Upper bound for prices, values and budgets. Larger integers are
/// rejected at the boundary so totals can never overflow downstream.
const MAX_AMOUNT: u64 = u32::MAX as u64;

/// Ceiling on the selector's `(n + 1) x (budget + 1)` table, in cells of
/// eight bytes each: caps peak memory per request at roughly 200 MB.
const MAX_TABLE_CELLS: u64 = 25_000_000;

const CAPACITY_MESSAGE: &str =
    "Request too large: budget and item count exceed the optimization capacity.";

/// Parse a JSON value as a positive integer within `1..=u32::MAX`.
fn as_positive_amount(value: &Value) -> Option<u32> {
    value
        .as_u64()
        .filter(|v| (1..=MAX_AMOUNT).contains(v))
        .map(|v| v as u32)
}

/// Validate the raw optimize request body and extract the typed request.
pub fn validate_request(data: &Value) -> OptimizerResult<OptimizeRequest> {
    let budget = data
        .get("budget")
        .and_then(as_positive_amount)
        .ok_or_else(|| OptimizerError::validation("Budget must be a positive integer."))?;

    let raw_items = data
        .get("items")
        .and_then(Value::as_array)
        .filter(|items| !items.is_empty())
        .ok_or_else(|| OptimizerError::validation("Items must be a non-empty list."))?;

    let mut items = Vec::with_capacity(raw_items.len());
    for (index, raw) in raw_items.iter().enumerate() {
        items.push(validate_item(index, raw)?);
    }

    let cells = (items.len() as u64 + 1) * (budget as u64 + 1);
    if cells > MAX_TABLE_CELLS {
        return Err(OptimizerError::validation(CAPACITY_MESSAGE));
    }

    Ok(OptimizeRequest { budget, items })
}

fn validate_item(index: usize, raw: &Value) -> OptimizerResult<Item> {
    let position = index + 1;

    let has_all_fields = raw.is_object()
        && ["name", "price", "value"]
            .iter()
            .all(|key| raw.get(key).is_some());
    if !has_all_fields {
        return Err(OptimizerError::validation(format!(
            "Item {position} is missing required fields (name, price, value)."
        )));
    }

    let name = raw
        .get("name")
        .and_then(Value::as_str)
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| {
            OptimizerError::validation(format!("Item {position} has an invalid or empty name."))
        })?;

    let price = raw.get("price").and_then(as_positive_amount).ok_or_else(|| {
        OptimizerError::validation(format!(
            "Item '{name}' has an invalid price (must be a positive integer)."
        ))
    })?;

    let value = raw.get("value").and_then(as_positive_amount).ok_or_else(|| {
        OptimizerError::validation(format!(
            "Item '{name}' has an invalid value (must be a positive integer)."
        ))
    })?;

    Ok(Item::new(name, price, value))
}

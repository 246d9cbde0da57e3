//! Type definitions for the optimizer service
//!
//! Wire-facing structs serialize with the camelCase field names the
//! original API exposed, so persisted history stays readable by clients.

use serde::{Deserialize, Serialize};

/// A purchasable item submitted for optimization.
///
/// Identity is positional within the request; duplicate names are allowed
/// and treated as independent items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub price: u32,
    pub value: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, price: u32, value: u32) -> Self {
        Self {
            name: name.into(),
            price,
            value,
        }
    }
}

/// A validated optimize request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizeRequest {
    pub budget: u32,
    pub items: Vec<Item>,
}

/// Output of one selector run: the chosen items in original relative
/// order plus their totals. `total_price` never exceeds the budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub selected_items: Vec<Item>,
    pub total_price: u64,
    pub total_value: u64,
}

impl Selection {
    /// The empty selection returned for degenerate input
    pub fn empty() -> Self {
        Self {
            selected_items: Vec::new(),
            total_price: 0,
            total_value: 0,
        }
    }
}

/// One persisted optimization session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub session_id: String,
    pub timestamp: String,
    pub budget: u32,
    pub selected_items: Vec<Item>,
    pub total_price: u64,
    pub total_value: u64,
    pub count: usize,
}

impl SessionRecord {
    /// Wrap a selection with a fresh session id and timestamp
    pub fn new(budget: u32, selection: Selection) -> Self {
        Self {
            session_id: new_session_id(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            budget,
            count: selection.selected_items.len(),
            total_price: selection.total_price,
            total_value: selection.total_value,
            selected_items: selection.selected_items,
        }
    }
}

/// Eight-character opaque session identifier (v4 UUID prefix)
pub fn new_session_id() -> String {
    uuid::Uuid::new_v4().to_string()[..8].to_string()
}

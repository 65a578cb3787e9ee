use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One item from the HN API: the thread root or a single comment.
///
/// The payload is kept opaque and passed through to the output as-is; the
/// only field the scraper interprets is `kids`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item {
    pub data: serde_json::Map<String, Value>,
}

impl Item {
    pub fn id(&self) -> Option<u64> {
        self.data.get("id").and_then(Value::as_u64)
    }

    /// IDs of the item's direct children, empty when the field is absent.
    /// Entries that are not positive integers are skipped.
    pub fn kids(&self) -> Vec<u64> {
        self.data
            .get("kids")
            .and_then(Value::as_array)
            .map(|kids| kids.iter().filter_map(Value::as_u64).collect())
            .unwrap_or_default()
    }
}

/// Outcome of one batch fetch. `items` holds the successful payloads in
/// completion order, which is not the submission order.
#[derive(Debug, Clone)]
pub struct BatchResult {
    pub items: Vec<Item>,
    pub requested: usize,
    pub fetched: usize,
}

impl BatchResult {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            requested: 0,
            fetched: 0,
        }
    }
}

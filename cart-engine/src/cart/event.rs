//! Cart change events
//!
//! Broadcast to subscribers after each completed mutation so UI layers can
//! re-render without polling. Events describe what changed; subscribers read
//! current state back from the store.

use serde::{Deserialize, Serialize};

use super::identity::LineKey;

/// A completed cart mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CartEvent {
    /// A new entry was appended
    ItemAdded {
        key: LineKey,
        item_id: String,
        quantity: u32,
    },
    /// An existing entry's quantity moved up or down (still >= 1)
    QuantityChanged {
        key: LineKey,
        item_id: String,
        quantity: u32,
    },
    /// An entry left the cart (explicit removal or decrement past 1)
    ItemRemoved { key: LineKey, item_id: String },
    /// The whole cart was reset
    Cleared,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization_is_tagged() {
        let event = CartEvent::Cleared;
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"type":"CLEARED"}"#);
    }
}

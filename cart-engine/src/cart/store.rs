//! CartStore - authoritative cart state and derived totals
//!
//! This module handles:
//! - Atomic mutation operations (add / increase / decrease / remove / clear)
//! - Identity-based merging via content-addressed [`LineKey`]s
//! - Derived totals, recomputed on demand from current state
//! - Event broadcasting to subscribers
//!
//! # Mutation flow
//!
//! ```text
//! add_item(input)
//!     ├─ 1. Compute LineKey from (item_id, customization set)
//!     ├─ 2. Take the write lock
//!     ├─ 3. Merge into the matching entry, or append with quantity 1
//!     ├─ 4. Release the lock
//!     └─ 5. Broadcast the event
//! ```
//!
//! Every mutation holds the write lock across its whole lookup-then-mutate
//! sequence; interleaved mutations on the same entry would otherwise lose
//! updates. No operation performs I/O, so queries issued after a mutation
//! returns always observe it.

use parking_lot::RwLock;
use shared::models::{CartItemInput, CartLineItem, Customization};
use shared::money::Money;
use tokio::sync::broadcast;

use super::event::CartEvent;
use super::identity::LineKey;

/// Event broadcast channel capacity
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// One cart entry with its precomputed identity key
#[derive(Debug, Clone)]
struct Entry {
    key: LineKey,
    item: CartLineItem,
}

/// Authoritative cart store
///
/// The `epoch` field is a unique identifier generated per store instance
/// (one per session); observers can use it to detect that they are looking
/// at a fresh cart rather than a mutation of the old one.
pub struct CartStore {
    /// Insertion-ordered entries; display order, not identity order
    entries: RwLock<Vec<Entry>>,
    event_tx: broadcast::Sender<CartEvent>,
    epoch: String,
}

impl CartStore {
    /// Create an empty cart
    pub fn new() -> Self {
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        let epoch = uuid::Uuid::new_v4().to_string();
        tracing::debug!(epoch = %epoch, "cart store created");
        Self {
            entries: RwLock::new(Vec::new()),
            event_tx,
            epoch,
        }
    }

    /// Get the store epoch (unique instance ID)
    pub fn epoch(&self) -> &str {
        &self.epoch
    }

    /// Subscribe to cart change events
    pub fn subscribe(&self) -> broadcast::Receiver<CartEvent> {
        self.event_tx.subscribe()
    }

    /// Add one unit of the candidate item
    ///
    /// Merges into the entry with the same identity (item id plus
    /// customization set) if one exists; descriptive fields of the stored
    /// entry are never overwritten by a stale candidate. Otherwise appends
    /// a new entry with quantity 1. Always succeeds.
    pub fn add_item(&self, input: CartItemInput) {
        let key = LineKey::compute(&input.item_id, &input.customizations);
        let event = {
            let mut entries = self.entries.write();
            if let Some(entry) = entries.iter_mut().find(|e| e.key == key) {
                // First write wins for name/price/image
                entry.item.quantity += 1;
                CartEvent::QuantityChanged {
                    key,
                    item_id: entry.item.item_id.clone(),
                    quantity: entry.item.quantity,
                }
            } else {
                let item = CartLineItem {
                    item_id: input.item_id,
                    name: input.name,
                    price: input.price,
                    image_url: input.image_url,
                    quantity: 1,
                    customizations: input.customizations,
                };
                let event = CartEvent::ItemAdded {
                    key: key.clone(),
                    item_id: item.item_id.clone(),
                    quantity: 1,
                };
                entries.push(Entry { key, item });
                event
            }
        };
        self.emit(event);
    }

    /// Increment the quantity of the matching entry
    ///
    /// Silent no-op when no entry matches.
    pub fn increase_qty(&self, item_id: &str, customizations: &[Customization]) {
        let key = LineKey::compute(item_id, customizations);
        let event = {
            let mut entries = self.entries.write();
            match entries.iter_mut().find(|e| e.key == key) {
                Some(entry) => {
                    entry.item.quantity += 1;
                    Some(CartEvent::QuantityChanged {
                        key,
                        item_id: entry.item.item_id.clone(),
                        quantity: entry.item.quantity,
                    })
                }
                None => {
                    tracing::debug!(item_id, "increase_qty on absent entry ignored");
                    None
                }
            }
        };
        if let Some(event) = event {
            self.emit(event);
        }
    }

    /// Decrement the quantity of the matching entry
    ///
    /// Removes the entry entirely when its quantity is 1; quantity never
    /// observably reaches 0. Silent no-op when no entry matches.
    pub fn decrease_qty(&self, item_id: &str, customizations: &[Customization]) {
        let key = LineKey::compute(item_id, customizations);
        let event = {
            let mut entries = self.entries.write();
            match entries.iter().position(|e| e.key == key) {
                Some(idx) if entries[idx].item.quantity > 1 => {
                    let entry = &mut entries[idx];
                    entry.item.quantity -= 1;
                    Some(CartEvent::QuantityChanged {
                        key,
                        item_id: entry.item.item_id.clone(),
                        quantity: entry.item.quantity,
                    })
                }
                Some(idx) => {
                    let entry = entries.remove(idx);
                    Some(CartEvent::ItemRemoved {
                        key,
                        item_id: entry.item.item_id,
                    })
                }
                None => {
                    tracing::debug!(item_id, "decrease_qty on absent entry ignored");
                    None
                }
            }
        };
        if let Some(event) = event {
            self.emit(event);
        }
    }

    /// Remove the matching entry regardless of quantity
    ///
    /// Silent no-op when no entry matches.
    pub fn remove_item(&self, item_id: &str, customizations: &[Customization]) {
        let key = LineKey::compute(item_id, customizations);
        let event = {
            let mut entries = self.entries.write();
            match entries.iter().position(|e| e.key == key) {
                Some(idx) => {
                    let entry = entries.remove(idx);
                    Some(CartEvent::ItemRemoved {
                        key,
                        item_id: entry.item.item_id,
                    })
                }
                None => {
                    tracing::debug!(item_id, "remove_item on absent entry ignored");
                    None
                }
            }
        };
        if let Some(event) = event {
            self.emit(event);
        }
    }

    /// Reset the cart to empty. Idempotent.
    pub fn clear(&self) {
        {
            let mut entries = self.entries.write();
            entries.clear();
        }
        self.emit(CartEvent::Cleared);
    }

    /// Sum of quantities across all entries (not the distinct entry count)
    pub fn total_items(&self) -> u32 {
        self.entries
            .read()
            .iter()
            .map(|e| e.item.quantity)
            .sum()
    }

    /// Sum of line totals: `(base price + customizations) * quantity`
    ///
    /// Pure derived query, recomputed from current state on every call.
    pub fn total_price(&self) -> Money {
        self.entries
            .read()
            .iter()
            .map(|e| e.item.line_total())
            .sum()
    }

    /// Snapshot of all entries in insertion order, for rendering
    pub fn items(&self) -> Vec<CartLineItem> {
        self.entries.read().iter().map(|e| e.item.clone()).collect()
    }

    /// Number of distinct entries
    pub fn entry_count(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    fn emit(&self, event: CartEvent) {
        // A send error only means nobody is subscribed right now
        let _ = self.event_tx.send(event);
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("entries", &self.entries.read().len())
            .field("epoch", &self.epoch)
            .finish()
    }
}

//! Content-addressed line identity
//!
//! Two line items are the same cart entry iff their menu item id is equal
//! and their customization id sets are equal as sets. The key is a hash of
//! exactly those identity-defining properties, so order and duplicates in
//! the chosen customization list do not matter, and descriptive fields
//! (name, price, image) never influence identity.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use shared::models::Customization;

/// Identity key for a cart entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineKey(String);

impl LineKey {
    /// Compute the key from a menu item id and the chosen customizations
    pub fn compute(item_id: &str, customizations: &[Customization]) -> Self {
        let mut ids: Vec<&str> = customizations.iter().map(|c| c.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();

        let mut hasher = Sha256::new();
        hasher.update(item_id.as_bytes());
        for id in ids {
            // NUL separator keeps adjacent variable-length ids from colliding
            hasher.update([0u8]);
            hasher.update(id.as_bytes());
        }
        LineKey(hex::encode(hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LineKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

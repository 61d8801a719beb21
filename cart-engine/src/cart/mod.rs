//! Cart state and pricing
//!
//! The cart is process-wide shared mutable state owned by [`CartStore`];
//! UI collaborators read snapshots and request mutations but never hold a
//! private copy that could drift from the canonical state.

mod event;
mod identity;
mod store;

pub use event::CartEvent;
pub use identity::LineKey;
pub use store::CartStore;

//! Client-side cart and checkout engine for a food-ordering app
//!
//! This crate owns the authoritative cart state and everything around it:
//! - [`cart`]: the cart store with content-addressed line identity, atomic
//!   mutation operations, derived totals, and event broadcasting
//! - [`catalog`]: the in-memory catalog that normalizes source prices and
//!   builds `add_item` candidates
//! - [`checkout`]: quote computation (delivery fee, discount) and payment
//!   settlement behind the [`checkout::PaymentGateway`] boundary
//!
//! Hosted services (document store, payment processor) exist only behind
//! trait and record boundaries; nothing here performs I/O except the gateway
//! implementation supplied by the caller.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod logger;

// Re-exports
pub use cart::{CartEvent, CartStore, LineKey};
pub use catalog::{InMemoryCatalog, MenuFilter};
pub use checkout::{CheckoutService, CustomerInfo, PaymentGateway, PaymentOutcome};
pub use config::CheckoutConfig;

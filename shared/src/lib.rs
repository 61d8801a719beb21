//! Shared types for the cart engine
//!
//! Common types used across the workspace: catalog and cart models,
//! fixed-point money arithmetic, and the application error type.

pub mod error;
pub mod models;
pub mod money;

// Re-exports
pub use error::{AppError, AppResult};
pub use money::Money;
pub use serde::{Deserialize, Serialize};

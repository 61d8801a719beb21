//! Application error type
//!
//! A single error enum shared by the catalog and checkout layers. Cart
//! mutations themselves are total and never fail; errors only arise at the
//! boundaries (catalog ingestion, quote validation, payment gateway).
//!
//! # Error codes
//!
//! | Code  | Category |
//! |-------|----------|
//! | E1001 | Validation failure |
//! | E1002 | Resource not found |
//! | E2001 | Payment declined or cancelled |
//! | E2002 | Payment gateway transport error |
//! | E9001 | Internal error |

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Input failed validation (bad price, empty cart at quote time)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Referenced catalog entity does not exist
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The charge was declined or cancelled by the customer
    #[error("Payment failed: {0}")]
    Payment(String),

    /// The payment gateway could not be reached or returned garbage
    #[error("Payment gateway error: {0}")]
    Gateway(String),

    /// Unexpected internal failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Stable machine-readable code for each category
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "E1001",
            Self::NotFound(_) => "E1002",
            Self::Payment(_) => "E2001",
            Self::Gateway(_) => "E2002",
            Self::Internal(_) => "E9001",
        }
    }
}

/// Result alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(AppError::validation("x").code(), "E1001");
        assert_eq!(AppError::not_found("x").code(), "E1002");
        assert_eq!(AppError::Payment("declined".into()).code(), "E2001");
    }

    #[test]
    fn test_error_display_includes_detail() {
        let err = AppError::not_found("menu item abc");
        assert_eq!(err.to_string(), "Resource not found: menu item abc");
    }
}

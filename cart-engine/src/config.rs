//! Checkout configuration
//!
//! # Environment variables
//!
//! All values can be overridden through environment variables:
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | CHECKOUT_CURRENCY | usd | ISO currency code sent to the gateway |
//! | DELIVERY_FEE_CENTS | 500 | Flat delivery fee, in cents |
//! | CART_DISCOUNT_CENTS | 50 | Flat order discount, in cents |

use shared::money::Money;

/// Fixed checkout parameters, external to the cart store
#[derive(Debug, Clone)]
pub struct CheckoutConfig {
    /// ISO currency code for payment sessions
    pub currency: String,
    /// Flat delivery fee added to every order
    pub delivery_fee: Money,
    /// Flat discount subtracted from every order
    pub discount: Money,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            currency: "usd".to_string(),
            delivery_fee: Money::from_cents(500),
            discount: Money::from_cents(50),
        }
    }
}

impl CheckoutConfig {
    /// Load configuration from environment variables
    ///
    /// Unset or unparseable variables fall back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            currency: std::env::var("CHECKOUT_CURRENCY").unwrap_or(defaults.currency),
            delivery_fee: std::env::var("DELIVERY_FEE_CENTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Money::from_cents)
                .unwrap_or(defaults.delivery_fee),
            discount: std::env::var("CART_DISCOUNT_CENTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Money::from_cents)
                .unwrap_or(defaults.discount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_constants() {
        let config = CheckoutConfig::default();
        assert_eq!(config.currency, "usd");
        assert_eq!(config.delivery_fee, Money::from_cents(500));
        assert_eq!(config.discount, Money::from_cents(50));
    }
}

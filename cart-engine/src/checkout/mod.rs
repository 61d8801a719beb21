//! Checkout orchestration
//!
//! Reads the cart's derived totals, applies the fixed delivery fee and
//! discount, runs the payment gateway flow, and clears the cart only after
//! the gateway confirms a successful charge. A declined, cancelled, or
//! failed payment leaves the cart untouched so the customer can retry.

mod gateway;

pub use gateway::{CustomerInfo, PaymentGateway, PaymentOutcome, PaymentSession};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};
use shared::money::Money;

use crate::cart::CartStore;
use crate::config::CheckoutConfig;

/// Payable breakdown for a cart at quote time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderQuote {
    pub total_items: u32,
    /// Cart subtotal: sum of line totals
    pub subtotal: Money,
    pub delivery_fee: Money,
    pub discount: Money,
    /// `subtotal + delivery_fee - discount`, clamped at zero
    pub total: Money,
}

/// Confirmation of a settled order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    pub order_id: String,
    pub total_items: u32,
    pub amount: Money,
    pub placed_at: DateTime<Utc>,
}

/// Checkout collaborator
#[derive(Debug, Clone)]
pub struct CheckoutService {
    config: CheckoutConfig,
}

impl CheckoutService {
    pub fn new(config: CheckoutConfig) -> Self {
        Self { config }
    }

    /// Build a service from environment configuration
    pub fn from_env() -> Self {
        Self::new(CheckoutConfig::from_env())
    }

    pub fn config(&self) -> &CheckoutConfig {
        &self.config
    }

    /// Compute the payable amount for the cart's current state
    ///
    /// An empty cart cannot be quoted.
    pub fn quote(&self, store: &CartStore) -> AppResult<OrderQuote> {
        let total_items = store.total_items();
        if total_items == 0 {
            return Err(AppError::validation("cart is empty"));
        }
        let subtotal = store.total_price();
        let total = (subtotal + self.config.delivery_fee).saturating_sub(self.config.discount);
        Ok(OrderQuote {
            total_items,
            subtotal,
            delivery_fee: self.config.delivery_fee,
            discount: self.config.discount,
            total,
        })
    }

    /// Run the full payment flow and clear the cart on success
    ///
    /// The cart is cleared exactly once, and only after the gateway reports
    /// the charge succeeded.
    pub async fn settle(
        &self,
        store: &CartStore,
        gateway: &dyn PaymentGateway,
        customer: &CustomerInfo,
    ) -> AppResult<Receipt> {
        let quote = self.quote(store)?;
        let session = gateway
            .create_session(quote.total, &self.config.currency, customer)
            .await?;
        tracing::info!(amount = %quote.total, customer = %customer.email, "Payment session created");

        match gateway.confirm(&session).await? {
            PaymentOutcome::Succeeded => {
                store.clear();
                let receipt = Receipt {
                    order_id: uuid::Uuid::new_v4().to_string(),
                    total_items: quote.total_items,
                    amount: quote.total,
                    placed_at: Utc::now(),
                };
                tracing::info!(order_id = %receipt.order_id, amount = %receipt.amount, "Order placed");
                Ok(receipt)
            }
            PaymentOutcome::Declined { reason } => {
                tracing::warn!(%reason, "Payment declined, cart preserved");
                Err(AppError::Payment(reason))
            }
            PaymentOutcome::Cancelled => {
                tracing::info!("Payment cancelled by customer, cart preserved");
                Err(AppError::Payment("cancelled by customer".to_string()))
            }
        }
    }
}

//! Payment gateway boundary
//!
//! The hosted payment processor is specified only at this interface: given a
//! payable amount and currency it issues a client secret and an ephemeral
//! session token for the hosted payment UI, then reports how the charge
//! ended. The cart knows nothing of this protocol beyond the outcome.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared::error::AppResult;
use shared::money::Money;

/// Customer details attached to a payment session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
}

/// Credentials for presenting the hosted payment UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentSession {
    pub client_secret: String,
    /// Ephemeral customer-session token
    pub session_token: String,
    pub customer_id: String,
}

/// Terminal state of a charge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentOutcome {
    Succeeded,
    Declined { reason: String },
    Cancelled,
}

/// Hosted payment processor interface
///
/// Amounts are minor units (cents), which is what processors expect on the
/// wire and what [`Money`] already is.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a payment session for the given amount
    async fn create_session(
        &self,
        amount: Money,
        currency: &str,
        customer: &CustomerInfo,
    ) -> AppResult<PaymentSession>;

    /// Present the payment UI and wait for the charge to settle
    async fn confirm(&self, session: &PaymentSession) -> AppResult<PaymentOutcome>;
}

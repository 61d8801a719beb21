//! Cart line item types

use serde::{Deserialize, Serialize};

use crate::models::customization::Customization;
use crate::money::Money;

/// One purchasable unit as it sits in the cart
///
/// `item_id` references a catalog menu item and is not unique within the
/// cart: the same product with a different customization set is a separate
/// entry. Quantity is always at least 1 while the entry exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    /// Catalog menu item reference
    pub item_id: String,
    pub name: String,
    /// Base unit price, excluding customizations
    pub price: Money,
    pub image_url: String,
    pub quantity: u32,
    /// Chosen customizations, insertion order preserved for display
    pub customizations: Vec<Customization>,
}

impl CartLineItem {
    /// Per-unit price: base price plus all customization prices
    pub fn unit_price(&self) -> Money {
        self.price + self.customizations.iter().map(|c| c.price).sum()
    }

    /// Line total: unit price extended by quantity
    pub fn line_total(&self) -> Money {
        self.unit_price() * self.quantity
    }
}

/// Candidate line item handed to the cart's add operation
///
/// Carries no quantity: each add call contributes exactly one unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItemInput {
    pub item_id: String,
    pub name: String,
    pub price: Money,
    pub image_url: String,
    pub customizations: Vec<Customization>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::customization::CustomizationKind;

    fn cheese() -> Customization {
        Customization {
            id: "cust-cheese".to_string(),
            name: "Extra Cheese".to_string(),
            price: Money::from_cents(50),
            kind: CustomizationKind::Topping,
        }
    }

    fn burger(quantity: u32, customizations: Vec<Customization>) -> CartLineItem {
        CartLineItem {
            item_id: "item-burger".to_string(),
            name: "Classic Burger".to_string(),
            price: Money::from_cents(500),
            image_url: "https://cdn.example/burger.png".to_string(),
            quantity,
            customizations,
        }
    }

    #[test]
    fn test_unit_price_includes_customizations() {
        assert_eq!(burger(1, vec![]).unit_price(), Money::from_cents(500));
        assert_eq!(
            burger(1, vec![cheese()]).unit_price(),
            Money::from_cents(550)
        );
    }

    #[test]
    fn test_line_total_extends_by_quantity() {
        assert_eq!(
            burger(2, vec![cheese()]).line_total(),
            Money::from_cents(1100)
        );
    }
}

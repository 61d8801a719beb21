//! Customization Model

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::money::Money;

/// Customization category
///
/// Open set: the catalog is free to introduce new kinds, which deserialize
/// into `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomizationKind {
    Topping,
    Side,
    Size,
    Bread,
    #[serde(untagged)]
    Other(String),
}

/// A selectable add-on applied to a cart line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customization {
    /// Opaque identifier, unique within the catalog
    pub id: String,
    pub name: String,
    /// Add-on price, non-negative
    pub price: Money,
    pub kind: CustomizationKind,
}

/// Raw customization as stored in the source catalog
///
/// Unlike menu items, the source already stores these prices in minor units
/// (cents), so conversion is a bounds check rather than a unit change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomizationRecord {
    pub id: String,
    pub name: String,
    /// Price in minor units (cents)
    pub price_cents: i64,
    pub kind: CustomizationKind,
}

impl TryFrom<CustomizationRecord> for Customization {
    type Error = AppError;

    fn try_from(record: CustomizationRecord) -> Result<Self, Self::Error> {
        if record.price_cents < 0 {
            return Err(AppError::validation(format!(
                "customization price must be non-negative, got {} cents",
                record.price_cents
            )));
        }
        Ok(Customization {
            id: record.id,
            name: record.name,
            price: Money::from_cents(record.price_cents),
            kind: record.kind,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_price_kept_in_cents() {
        let record = CustomizationRecord {
            id: "cust-cheese".to_string(),
            name: "Extra Cheese".to_string(),
            price_cents: 50,
            kind: CustomizationKind::Topping,
        };
        let customization = Customization::try_from(record).unwrap();
        assert_eq!(customization.price, Money::from_cents(50));
    }

    #[test]
    fn test_negative_price_rejected() {
        let record = CustomizationRecord {
            id: "cust-bad".to_string(),
            name: "Bad".to_string(),
            price_cents: -50,
            kind: CustomizationKind::Side,
        };
        assert!(Customization::try_from(record).is_err());
    }

    #[test]
    fn test_kind_open_set_roundtrip() {
        let known: CustomizationKind = serde_json::from_str("\"topping\"").unwrap();
        assert_eq!(known, CustomizationKind::Topping);

        let unknown: CustomizationKind = serde_json::from_str("\"sauce\"").unwrap();
        assert_eq!(unknown, CustomizationKind::Other("sauce".to_string()));
    }
}

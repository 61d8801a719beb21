//! Menu Item Model

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::money::Money;

/// Menu item entity, prices normalized to cents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Opaque reference to a display asset
    pub image_url: String,
    /// Base unit price, excluding customizations
    pub price: Money,
    /// Category reference (String ID)
    pub category_id: String,
    pub rating: f64,
    pub calories: i32,
    pub protein: i32,
}

/// Raw menu item as stored in the source catalog
///
/// The source stores base prices in major units (dollars). Conversion to
/// cents happens exactly once, in the `TryFrom` below.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub image_url: String,
    /// Price in major units (dollars)
    pub price: f64,
    pub category_id: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub calories: i32,
    #[serde(default)]
    pub protein: i32,
}

impl TryFrom<MenuItemRecord> for MenuItem {
    type Error = AppError;

    fn try_from(record: MenuItemRecord) -> Result<Self, Self::Error> {
        let price = Money::from_major_f64(record.price)?;
        Ok(MenuItem {
            id: record.id,
            name: record.name,
            description: record.description,
            image_url: record.image_url,
            price,
            category_id: record.category_id,
            rating: record.rating,
            calories: record.calories,
            protein: record.protein,
        })
    }
}

//! In-memory catalog
//!
//! Holds the menu, categories, and customizations the hosted document store
//! supplies, with all prices normalized to cents at load time. The cart
//! never queries this directly; product-detail flows use it to expand chosen
//! customization ids into the full tuples an `add_item` candidate carries.

use dashmap::DashMap;
use shared::error::{AppError, AppResult};
use shared::models::{
    CartItemInput, Category, Customization, CustomizationRecord, MenuItem, MenuItemRecord,
};

/// Menu query filter
#[derive(Debug, Clone, Default)]
pub struct MenuFilter {
    /// Restrict to one category
    pub category_id: Option<String>,
    /// Case-insensitive name substring
    pub query: Option<String>,
}

/// Id-indexed catalog content
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    items: DashMap<String, MenuItem>,
    customizations: DashMap<String, Customization>,
    categories: DashMap<String, Category>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_categories(&self, records: Vec<Category>) {
        for category in records {
            self.categories.insert(category.id.clone(), category);
        }
    }

    /// Load menu records, normalizing dollar prices to cents
    ///
    /// Invalid records (non-finite or negative price) are skipped and logged;
    /// one bad row must not take the whole menu down. Returns the number of
    /// records loaded.
    pub fn load_menu(&self, records: Vec<MenuItemRecord>) -> usize {
        let mut loaded = 0;
        for record in records {
            let id = record.id.clone();
            match MenuItem::try_from(record) {
                Ok(item) => {
                    self.items.insert(item.id.clone(), item);
                    loaded += 1;
                }
                Err(e) => {
                    tracing::warn!(item_id = %id, error = %e, "Skipping invalid menu record");
                }
            }
        }
        loaded
    }

    /// Load customization records (already in cents, bounds-checked)
    pub fn load_customizations(&self, records: Vec<CustomizationRecord>) -> usize {
        let mut loaded = 0;
        for record in records {
            let id = record.id.clone();
            match Customization::try_from(record) {
                Ok(customization) => {
                    self.customizations
                        .insert(customization.id.clone(), customization);
                    loaded += 1;
                }
                Err(e) => {
                    tracing::warn!(customization_id = %id, error = %e, "Skipping invalid customization record");
                }
            }
        }
        loaded
    }

    pub fn menu_item(&self, id: &str) -> Option<MenuItem> {
        self.items.get(id).map(|entry| entry.value().clone())
    }

    pub fn customization(&self, id: &str) -> Option<Customization> {
        self.customizations.get(id).map(|entry| entry.value().clone())
    }

    pub fn category(&self, id: &str) -> Option<Category> {
        self.categories.get(id).map(|entry| entry.value().clone())
    }

    /// Query the menu by category and/or name substring
    ///
    /// Results are sorted by name for stable rendering.
    pub fn menu(&self, filter: &MenuFilter) -> Vec<MenuItem> {
        let query = filter.query.as_deref().map(str::to_lowercase);
        let mut results: Vec<MenuItem> = self
            .items
            .iter()
            .filter(|entry| {
                filter
                    .category_id
                    .as_deref()
                    .is_none_or(|c| entry.category_id == c)
            })
            .filter(|entry| {
                query
                    .as_deref()
                    .is_none_or(|q| entry.name.to_lowercase().contains(q))
            })
            .map(|entry| entry.value().clone())
            .collect();
        results.sort_by(|a, b| a.name.cmp(&b.name));
        results
    }

    /// Items sharing a category with the given one, for the product page
    pub fn similar_items(&self, category_id: &str, exclude_id: &str, limit: usize) -> Vec<MenuItem> {
        let mut results = self.menu(&MenuFilter {
            category_id: Some(category_id.to_string()),
            query: None,
        });
        results.retain(|item| item.id != exclude_id);
        results.truncate(limit);
        results
    }

    /// Build an `add_item` candidate from a menu item and chosen customization ids
    ///
    /// Expands each id to its full `{id, name, price, kind}` tuple in the
    /// order chosen. Unknown ids fail the whole build; a partial candidate
    /// would silently drop a priced add-on.
    pub fn cart_input(&self, item_id: &str, customization_ids: &[&str]) -> AppResult<CartItemInput> {
        let item = self
            .menu_item(item_id)
            .ok_or_else(|| AppError::not_found(format!("menu item {item_id}")))?;

        let mut customizations = Vec::with_capacity(customization_ids.len());
        for id in customization_ids {
            let customization = self
                .customization(id)
                .ok_or_else(|| AppError::not_found(format!("customization {id}")))?;
            customizations.push(customization);
        }

        Ok(CartItemInput {
            item_id: item.id,
            name: item.name,
            price: item.price,
            image_url: item.image_url,
            customizations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::CustomizationKind;
    use shared::money::Money;

    fn menu_record(id: &str, name: &str, price: f64, category_id: &str) -> MenuItemRecord {
        MenuItemRecord {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            image_url: format!("https://cdn.example/{id}.png"),
            price,
            category_id: category_id.to_string(),
            rating: 4.0,
            calories: 500,
            protein: 20,
        }
    }

    fn customization_record(id: &str, name: &str, price_cents: i64) -> CustomizationRecord {
        CustomizationRecord {
            id: id.to_string(),
            name: name.to_string(),
            price_cents,
            kind: CustomizationKind::Topping,
        }
    }

    fn seeded_catalog() -> InMemoryCatalog {
        let catalog = InMemoryCatalog::new();
        catalog.load_menu(vec![
            menu_record("item-burger", "Classic Burger", 5.0, "cat-burgers"),
            menu_record("item-double", "Double Burger", 7.5, "cat-burgers"),
            menu_record("item-wrap", "Veggie Wrap", 6.25, "cat-wraps"),
        ]);
        catalog.load_customizations(vec![
            customization_record("cust-cheese", "Extra Cheese", 50),
            customization_record("cust-bacon", "Bacon", 150),
        ]);
        catalog
    }

    #[test]
    fn test_load_menu_normalizes_dollars_to_cents() {
        let catalog = seeded_catalog();
        let item = catalog.menu_item("item-wrap").unwrap();
        assert_eq!(item.price, Money::from_cents(625));
    }

    #[test]
    fn test_load_menu_skips_invalid_records() {
        let catalog = InMemoryCatalog::new();
        let loaded = catalog.load_menu(vec![
            menu_record("item-ok", "Fine", 3.0, "cat"),
            menu_record("item-bad", "Broken", -4.0, "cat"),
        ]);
        assert_eq!(loaded, 1);
        assert!(catalog.menu_item("item-bad").is_none());
        assert!(catalog.menu_item("item-ok").is_some());
    }

    #[test]
    fn test_menu_filters_by_category_and_query() {
        let catalog = seeded_catalog();

        let burgers = catalog.menu(&MenuFilter {
            category_id: Some("cat-burgers".to_string()),
            query: None,
        });
        assert_eq!(burgers.len(), 2);

        let matched = catalog.menu(&MenuFilter {
            category_id: None,
            query: Some("BURGER".to_string()),
        });
        assert_eq!(matched.len(), 2);

        let both = catalog.menu(&MenuFilter {
            category_id: Some("cat-wraps".to_string()),
            query: Some("veggie".to_string()),
        });
        assert_eq!(both.len(), 1);
        assert_eq!(both[0].id, "item-wrap");
    }

    #[test]
    fn test_similar_items_excludes_current() {
        let catalog = seeded_catalog();
        let similar = catalog.similar_items("cat-burgers", "item-burger", 6);
        assert_eq!(similar.len(), 1);
        assert_eq!(similar[0].id, "item-double");
    }

    #[test]
    fn test_cart_input_expands_customizations() {
        let catalog = seeded_catalog();
        let input = catalog
            .cart_input("item-burger", &["cust-cheese", "cust-bacon"])
            .unwrap();

        assert_eq!(input.item_id, "item-burger");
        assert_eq!(input.price, Money::from_cents(500));
        assert_eq!(input.customizations.len(), 2);
        assert_eq!(input.customizations[0].name, "Extra Cheese");
        assert_eq!(input.customizations[1].price, Money::from_cents(150));
    }

    #[test]
    fn test_cart_input_unknown_ids_fail() {
        let catalog = seeded_catalog();
        assert!(matches!(
            catalog.cart_input("item-missing", &[]),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            catalog.cart_input("item-burger", &["cust-missing"]),
            Err(AppError::NotFound(_))
        ));
    }
}

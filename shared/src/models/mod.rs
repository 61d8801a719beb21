//! Domain models

pub mod cart;
pub mod category;
pub mod customization;
pub mod menu_item;

pub use cart::{CartItemInput, CartLineItem};
pub use category::Category;
pub use customization::{Customization, CustomizationKind, CustomizationRecord};
pub use menu_item::{MenuItem, MenuItemRecord};

//! Startup data for the in-memory catalog and contact directory.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Menu items loaded into the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSeed {
    /// Menu items.
    #[serde(default)]
    pub items: Vec<MenuItemSeed>,
}

/// One menu item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemSeed {
    /// Menu item ID.
    pub id: String,
    /// Owning restaurant ID.
    pub restaurant_id: String,
    /// Display name.
    pub name: String,
    /// Unit price, quoted in YAML (e.g. `"12.50"`).
    pub price: Decimal,
    /// Whether the item can be ordered.
    #[serde(default = "default_true")]
    pub is_available: bool,
}

/// Profiles loaded into the contact directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectorySeed {
    /// Diner profiles.
    #[serde(default)]
    pub users: Vec<UserSeed>,
    /// Restaurant profiles.
    #[serde(default)]
    pub restaurants: Vec<RestaurantSeed>,
}

/// Diner profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSeed {
    /// User ID.
    pub id: String,
    /// Display name.
    pub name: String,
    /// E-mail address.
    pub email: String,
    /// Phone number.
    #[serde(default)]
    pub phone: Option<String>,
}

/// Restaurant profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantSeed {
    /// Restaurant ID.
    pub id: String,
    /// Display name.
    pub name: String,
    /// E-mail address.
    pub email: String,
    /// Phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Street address.
    #[serde(default)]
    pub location: Option<String>,
}

const fn default_true() -> bool {
    true
}

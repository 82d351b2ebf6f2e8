//! Order aggregate
//!
//! An order holds two disjoint item collections: the cart (`items`, counted
//! in totals) and the wishlist (`wishlist_items`, parked and excluded from
//! totals). An item id lives in exactly one collection at any instant.

use super::item::CartItem;
use super::status::OrderStatus;
use serde::{Deserialize, Serialize};

/// Order snapshot, the unit of state exchanged with the order service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Server-assigned id; empty until the service creates the order
    pub id: String,
    pub status: OrderStatus,
    /// Active cart
    pub items: Vec<CartItem>,
    /// Parked items, excluded from totals
    pub wishlist_items: Vec<CartItem>,
    pub subtotal: f64,
    /// 0 until the service applies its tax rules
    #[serde(default)]
    pub tax: f64,
    pub total: f64,
    /// Creation timestamp (unix millis)
    pub created_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

impl Order {
    /// Fresh empty draft, not yet known to the order service
    pub fn new_draft() -> Self {
        Self {
            id: String::new(),
            status: OrderStatus::Draft,
            items: Vec::new(),
            wishlist_items: Vec::new(),
            subtotal: 0.0,
            tax: 0.0,
            total: 0.0,
            created_at: chrono::Utc::now().timestamp_millis(),
            client_id: None,
        }
    }

    /// Whether the service has assigned an id yet
    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }

    /// Whether the cart is empty (wishlist does not count)
    pub fn is_cart_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find a cart line by id
    pub fn cart_item(&self, item_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == item_id)
    }

    /// Find a wishlist line by id
    pub fn wishlist_item(&self, item_id: &str) -> Option<&CartItem> {
        self.wishlist_items.iter().find(|i| i.id == item_id)
    }

    /// Whether an id appears anywhere in the order
    pub fn contains_item(&self, item_id: &str) -> bool {
        self.cart_item(item_id).is_some() || self.wishlist_item(item_id).is_some()
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new_draft()
    }
}

//! Shopper-side order service endpoints
//!
//! Thin typed wrappers over [`HttpClient`]. Every mutating endpoint returns
//! the full authoritative order snapshot; reconciliation into local state is
//! the session's job, not this layer's.

use crate::error::ClientResult;
use crate::http::HttpClient;
use serde::{Deserialize, Serialize};
use shared::models::Product;
use shared::order::Order;

/// Collection selector for move-item requests
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Collection {
    #[serde(rename = "items")]
    Items,
    #[serde(rename = "wishlistItems")]
    WishlistItems,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

/// Add item payload (product reference, not a full line item)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddItemRequest {
    pub code: String,
    pub quantity: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Update item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateItemRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Move item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveItemRequest {
    pub item_id: String,
    pub from: Collection,
    pub to: Collection,
}

/// Close order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseOrderRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Typed shopper API over any [`HttpClient`]
#[derive(Debug)]
pub struct OrderServiceApi<C: HttpClient> {
    http: C,
}

impl<C: HttpClient> OrderServiceApi<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &C {
        &self.http
    }

    /// Create a fresh draft with a server-assigned id
    pub async fn create_order(&self, client_id: Option<String>) -> ClientResult<Order> {
        self.http
            .post("/api/orders", &CreateOrderRequest { client_id })
            .await
    }

    /// Look up a product by scanned SKU
    pub async fn search_product(&self, code: &str) -> ClientResult<Product> {
        self.http
            .get(&format!("/api/products/search?code={}", code))
            .await
    }

    /// Look up a product by id
    pub async fn get_product(&self, product_id: &str) -> ClientResult<Product> {
        self.http
            .get(&format!("/api/products/{}", product_id))
            .await
    }

    /// Fetch the authoritative order snapshot
    pub async fn get_order(&self, order_id: &str) -> ClientResult<Order> {
        self.http.get(&format!("/api/orders/{}", order_id)).await
    }

    /// Add a product to the cart; the service resolves pricing and tax
    pub async fn add_item(
        &self,
        order_id: &str,
        code: &str,
        quantity: i32,
        color: Option<String>,
    ) -> ClientResult<Order> {
        self.http
            .post(
                &format!("/api/orders/{}/items", order_id),
                &AddItemRequest {
                    code: code.to_string(),
                    quantity,
                    color,
                },
            )
            .await
    }

    /// Update an existing line's quantity and/or color
    pub async fn update_item(
        &self,
        order_id: &str,
        item_id: &str,
        quantity: Option<i32>,
        color: Option<String>,
    ) -> ClientResult<Order> {
        self.http
            .put(
                &format!("/api/orders/{}/items/{}", order_id, item_id),
                &UpdateItemRequest { quantity, color },
            )
            .await
    }

    /// Remove a line from the order
    pub async fn remove_item(&self, order_id: &str, item_id: &str) -> ClientResult<Order> {
        self.http
            .delete(&format!("/api/orders/{}/items/{}", order_id, item_id))
            .await
    }

    /// Add a product directly to the wishlist
    pub async fn add_to_wishlist(
        &self,
        order_id: &str,
        code: &str,
        quantity: i32,
        color: Option<String>,
    ) -> ClientResult<Order> {
        self.http
            .post(
                &format!("/api/orders/{}/wishlist", order_id),
                &AddItemRequest {
                    code: code.to_string(),
                    quantity,
                    color,
                },
            )
            .await
    }

    /// Move a line between cart and wishlist
    pub async fn move_item(
        &self,
        order_id: &str,
        item_id: &str,
        from: Collection,
        to: Collection,
    ) -> ClientResult<Order> {
        self.http
            .post(
                &format!("/api/orders/{}/move-item", order_id),
                &MoveItemRequest {
                    item_id: item_id.to_string(),
                    from,
                    to,
                },
            )
            .await
    }

    /// Close the order, handing it to the cashier workflow
    pub async fn close_order(
        &self,
        order_id: &str,
        payment_method: Option<String>,
        notes: Option<String>,
    ) -> ClientResult<Order> {
        self.http
            .post(
                &format!("/api/orders/{}/close", order_id),
                &CloseOrderRequest {
                    payment_method,
                    notes,
                },
            )
            .await
    }
}

//! Shopper session state
//!
//! [`OrderSession`] is the single owner of the "current order" for one
//! shopping session. There is no process-wide store: construct one session
//! per shopper context and pass it by reference to whatever drives it.
//!
//! Two kinds of operations coexist:
//! - **local mutations** (`update_quantity`, `move_to_wishlist`, ...) run
//!   the pure cart engine against the snapshot, instantly;
//! - **remote operations** (`start`, `add_item`, `close`, ...) call the
//!   order service and reconcile its authoritative snapshot back in.
//!
//! Reconciliation is sequence-gated: every outbound call takes a
//! monotonically increasing sequence number, and a response is applied only
//! if its sequence is the highest applied so far. Responses that lose the
//! race are discarded, so an older in-flight reply can never clobber newer
//! state. A failed call applies nothing and leaves the snapshot intact.

use crate::api::{Collection, OrderServiceApi};
use crate::error::ClientResult;
use crate::http::HttpClient;
use shared::order::{Order, OrderError, OrderStatus, cart};

/// One shopper's order session
#[derive(Debug)]
pub struct OrderSession<C: HttpClient> {
    /// Session instance id, for log correlation across devices
    session_id: String,
    api: OrderServiceApi<C>,
    order: Order,
    /// Last sequence number handed to an outbound call
    issued_seq: u64,
    /// Sequence of the newest response applied to `order`
    applied_seq: u64,
}

impl<C: HttpClient> OrderSession<C> {
    pub fn new(api: OrderServiceApi<C>) -> Self {
        Self {
            session_id: uuid::Uuid::new_v4().to_string(),
            api,
            order: Order::new_draft(),
            issued_seq: 0,
            applied_seq: 0,
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Current local snapshot
    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn api(&self) -> &OrderServiceApi<C> {
        &self.api
    }

    /// Take the next request sequence number
    pub fn next_sequence(&mut self) -> u64 {
        self.issued_seq += 1;
        self.issued_seq
    }

    // ========== Reconciliation ==========

    /// Adopt a full server snapshot wholesale
    ///
    /// Returns whether the response was applied; stale responses (sequence
    /// at or below the newest applied) are discarded.
    pub fn reconcile(&mut self, seq: u64, server_order: Order) -> bool {
        if seq <= self.applied_seq {
            tracing::debug!(
                seq,
                applied_seq = self.applied_seq,
                "Discarding stale order response"
            );
            return false;
        }
        if self.order.status.is_backward(server_order.status) {
            // Server wins regardless; flag it for diagnosis
            tracing::warn!(
                local_status = %self.order.status,
                server_status = %server_order.status,
                "Server reports an earlier lifecycle status, adopting it"
            );
        }
        self.applied_seq = seq;
        self.order = server_order;
        true
    }

    /// Fold an add-to-cart response into local state
    ///
    /// The service only saw one product+quantity+color, so its snapshot is
    /// authoritative for the cart and totals; the local wishlist is kept.
    pub fn reconcile_items(&mut self, seq: u64, server_order: Order) -> bool {
        if seq <= self.applied_seq {
            tracing::debug!(
                seq,
                applied_seq = self.applied_seq,
                "Discarding stale add-item response"
            );
            return false;
        }
        self.applied_seq = seq;
        self.order.id = server_order.id;
        self.order.status = server_order.status;
        self.order.items = server_order.items;
        self.order.subtotal = server_order.subtotal;
        self.order.tax = server_order.tax;
        self.order.total = server_order.total;
        true
    }

    // ========== Local mutations (pure, instantaneous) ==========

    /// Add a line locally, merging on id
    pub fn add_to_cart(&mut self, item: shared::order::CartItem) {
        cart::add_item(&mut self.order, item);
    }

    /// Set a line's quantity; 0 removes the line
    pub fn update_quantity(&mut self, item_id: &str, quantity: i32) {
        cart::set_quantity(&mut self.order, item_id, quantity);
    }

    /// Delete a line; no-op if absent
    pub fn remove_from_cart(&mut self, item_id: &str) {
        cart::remove_item(&mut self.order, item_id);
    }

    /// Park a line on the wishlist
    pub fn move_to_wishlist(&mut self, item_id: &str) {
        cart::move_to_wishlist(&mut self.order, item_id);
    }

    /// Bring a parked line back to the cart
    pub fn move_to_cart(&mut self, item_id: &str) {
        cart::move_to_cart(&mut self.order, item_id);
    }

    /// Reset to a fresh empty draft (after close or on cancellation)
    pub fn clear_cart(&mut self) {
        cart::clear(&mut self.order);
    }

    // ========== Remote operations (authoritative) ==========

    /// Create the order on the service and adopt its draft
    pub async fn start(&mut self, client_id: Option<String>) -> ClientResult<&Order> {
        let seq = self.next_sequence();
        let server_order = self.api.create_order(client_id).await?;
        tracing::info!(session_id = %self.session_id, order_id = %server_order.id, "Order session started");
        self.reconcile(seq, server_order);
        Ok(&self.order)
    }

    /// Add a scanned product to the cart through the service
    ///
    /// Requires a server-assigned order id. On success the server's item
    /// list and totals replace the local cart; the wishlist is preserved.
    pub async fn add_item(
        &mut self,
        code: &str,
        quantity: i32,
        color: Option<String>,
    ) -> ClientResult<&Order> {
        if !self.order.has_id() {
            return Err(OrderError::MissingOrderId.into());
        }
        let seq = self.next_sequence();
        let order_id = self.order.id.clone();
        let server_order = self.api.add_item(&order_id, code, quantity, color).await?;
        self.reconcile_items(seq, server_order);
        Ok(&self.order)
    }

    /// Push a quantity/color change to the service and adopt the result
    pub async fn sync_item_update(
        &mut self,
        item_id: &str,
        quantity: Option<i32>,
        color: Option<String>,
    ) -> ClientResult<&Order> {
        if !self.order.has_id() {
            return Err(OrderError::MissingOrderId.into());
        }
        let seq = self.next_sequence();
        let order_id = self.order.id.clone();
        let server_order = self
            .api
            .update_item(&order_id, item_id, quantity, color)
            .await?;
        self.reconcile(seq, server_order);
        Ok(&self.order)
    }

    /// Push a removal to the service and adopt the result
    pub async fn sync_item_removal(&mut self, item_id: &str) -> ClientResult<&Order> {
        if !self.order.has_id() {
            return Err(OrderError::MissingOrderId.into());
        }
        let seq = self.next_sequence();
        let order_id = self.order.id.clone();
        let server_order = self.api.remove_item(&order_id, item_id).await?;
        self.reconcile(seq, server_order);
        Ok(&self.order)
    }

    /// Push a cart/wishlist move to the service and adopt the result
    pub async fn sync_item_move(
        &mut self,
        item_id: &str,
        from: Collection,
        to: Collection,
    ) -> ClientResult<&Order> {
        if !self.order.has_id() {
            return Err(OrderError::MissingOrderId.into());
        }
        let seq = self.next_sequence();
        let order_id = self.order.id.clone();
        let server_order = self.api.move_item(&order_id, item_id, from, to).await?;
        self.reconcile(seq, server_order);
        Ok(&self.order)
    }

    /// Close the order, handing it to the cashier workflow
    ///
    /// Closing is the one transition the client initiates itself
    /// (`draft -> pending`), so it is checked against the lifecycle table.
    /// Rejected before any network call when the cart is empty, the order
    /// has no server-assigned id, or the order has already left `draft`;
    /// the local status is untouched on rejection.
    pub async fn close(
        &mut self,
        payment_method: Option<String>,
        notes: Option<String>,
    ) -> ClientResult<&Order> {
        if !self.order.has_id() {
            return Err(OrderError::MissingOrderId.into());
        }
        if self.order.is_cart_empty() {
            return Err(OrderError::EmptyCart.into());
        }
        if !self.order.status.can_transition_to(OrderStatus::Pending) {
            return Err(OrderError::InvalidTransition {
                from: self.order.status,
                to: OrderStatus::Pending,
            }
            .into());
        }
        let seq = self.next_sequence();
        let order_id = self.order.id.clone();
        let server_order = self.api.close_order(&order_id, payment_method, notes).await?;
        tracing::info!(order_id = %order_id, status = %server_order.status, "Order closed");
        self.reconcile(seq, server_order);
        Ok(&self.order)
    }

    /// Refresh the local snapshot from the service
    pub async fn refresh(&mut self) -> ClientResult<&Order> {
        if !self.order.has_id() {
            return Err(OrderError::MissingOrderId.into());
        }
        let seq = self.next_sequence();
        let order_id = self.order.id.clone();
        let server_order = self.api.get_order(&order_id).await?;
        self.reconcile(seq, server_order);
        Ok(&self.order)
    }
}

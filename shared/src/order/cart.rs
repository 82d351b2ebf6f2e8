//! Cart mutation engine
//!
//! Pure, synchronous mutations over an [`Order`] snapshot. Every operation
//! on an unknown item id is a no-op rather than an error: the caller is a
//! UI that may race duplicate clicks, and idempotence beats throwing.
//!
//! Every mutation that touches the cart recomputes `subtotal`/`total`
//! through the decimal money helpers. Wishlist mutations leave totals
//! untouched only when the cart itself did not change.

use super::item::{CartItem, MAX_QUANTITY, clamp_quantity};
use super::money;
use super::snapshot::Order;

/// Add an item to the cart
///
/// If a line with the same `id` already exists, quantities are merged
/// (clamped to [`MAX_QUANTITY`]); otherwise the item is appended.
pub fn add_item(order: &mut Order, item: CartItem) {
    if let Some(existing) = order.items.iter_mut().find(|i| i.id == item.id) {
        existing.quantity = existing
            .quantity
            .saturating_add(item.quantity)
            .min(MAX_QUANTITY);
    } else {
        order.items.push(item);
    }
    money::recalculate_totals(order);
}

/// Remove a cart line unconditionally; no-op if absent
pub fn remove_item(order: &mut Order, item_id: &str) {
    let before = order.items.len();
    order.items.retain(|i| i.id != item_id);
    if order.items.len() != before {
        money::recalculate_totals(order);
    }
}

/// Set the quantity of a cart line
///
/// Positive requests are clamped to [1, 9999]. A request of 0 (or less) is
/// an implicit removal: a zero-quantity line is never persisted.
pub fn set_quantity(order: &mut Order, item_id: &str, quantity: i32) {
    if quantity < 1 {
        remove_item(order, item_id);
        return;
    }
    if let Some(item) = order.items.iter_mut().find(|i| i.id == item_id) {
        item.quantity = clamp_quantity(quantity);
        money::recalculate_totals(order);
    }
}

/// Move a cart line to the wishlist, preserving quantity and variant
pub fn move_to_wishlist(order: &mut Order, item_id: &str) {
    let Some(pos) = order.items.iter().position(|i| i.id == item_id) else {
        return;
    };
    let item = order.items.remove(pos);
    order.wishlist_items.push(item);
    money::recalculate_totals(order);
}

/// Move a wishlist line back to the cart, preserving quantity and variant
pub fn move_to_cart(order: &mut Order, item_id: &str) {
    let Some(pos) = order.wishlist_items.iter().position(|i| i.id == item_id) else {
        return;
    };
    let item = order.wishlist_items.remove(pos);
    order.items.push(item);
    money::recalculate_totals(order);
}

/// Reset the order to a fresh empty draft
///
/// Used after a successful close or on cancellation. Discards both
/// collections, totals, and the server-assigned id.
pub fn clear(order: &mut Order) {
    *order = Order::new_draft();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::status::OrderStatus;

    fn create_item(id: &str, price: f64, quantity: i32) -> CartItem {
        CartItem::new(id, format!("SKU-{}", id), format!("Item {}", id), price, quantity)
    }

    #[test]
    fn add_item_appends_and_computes_subtotal() {
        let mut order = Order::new_draft();
        add_item(&mut order, create_item("1", 100.0, 2));
        add_item(&mut order, create_item("2", 50.0, 1));

        assert_eq!(order.items.len(), 2);
        assert_eq!(order.subtotal, 250.0);
        assert_eq!(order.total, 250.0);
    }

    #[test]
    fn add_item_merges_same_id_by_summing_quantities() {
        let mut order = Order::new_draft();
        add_item(&mut order, create_item("1", 100.0, 2));
        add_item(&mut order, create_item("1", 100.0, 3));

        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].quantity, 5);
        assert_eq!(order.subtotal, 500.0);
    }

    #[test]
    fn add_merge_equals_single_add_with_doubled_quantity() {
        let mut twice = Order::new_draft();
        add_item(&mut twice, create_item("1", 75.0, 2));
        add_item(&mut twice, create_item("1", 75.0, 2));

        let mut once = Order::new_draft();
        add_item(&mut once, create_item("1", 75.0, 4));

        assert_eq!(twice.items, once.items);
        assert_eq!(twice.subtotal, once.subtotal);
    }

    #[test]
    fn add_item_merge_clamps_at_max() {
        let mut order = Order::new_draft();
        add_item(&mut order, create_item("1", 1.0, 9000));
        add_item(&mut order, create_item("1", 1.0, 9000));

        assert_eq!(order.items[0].quantity, 9999);
        assert_eq!(order.subtotal, 9999.0);
    }

    #[test]
    fn remove_item_deletes_line_and_recomputes() {
        let mut order = Order::new_draft();
        add_item(&mut order, create_item("1", 100.0, 2));
        add_item(&mut order, create_item("2", 50.0, 1));

        remove_item(&mut order, "1");

        assert_eq!(order.items.len(), 1);
        assert_eq!(order.subtotal, 50.0);
    }

    #[test]
    fn remove_unknown_item_is_a_noop() {
        let mut order = Order::new_draft();
        add_item(&mut order, create_item("1", 100.0, 2));
        let snapshot = order.clone();

        remove_item(&mut order, "ghost");

        assert_eq!(order, snapshot);
    }

    #[test]
    fn set_quantity_in_range_applies_exactly() {
        let mut order = Order::new_draft();
        add_item(&mut order, create_item("1", 100.0, 2));

        set_quantity(&mut order, "1", 5);
        assert_eq!(order.items[0].quantity, 5);
        assert_eq!(order.subtotal, 500.0);

        set_quantity(&mut order, "1", 1);
        assert_eq!(order.items[0].quantity, 1);

        set_quantity(&mut order, "1", 9999);
        assert_eq!(order.items[0].quantity, 9999);
    }

    #[test]
    fn set_quantity_clamps_above_max() {
        let mut order = Order::new_draft();
        add_item(&mut order, create_item("1", 1.0, 1));

        set_quantity(&mut order, "1", 20000);

        assert_eq!(order.items[0].quantity, 9999);
    }

    #[test]
    fn set_quantity_zero_removes_the_line() {
        let mut order = Order::new_draft();
        add_item(&mut order, create_item("1", 100.0, 2));

        set_quantity(&mut order, "1", 0);

        assert!(order.items.is_empty());
        assert_eq!(order.subtotal, 0.0);
    }

    #[test]
    fn set_quantity_negative_removes_the_line() {
        let mut order = Order::new_draft();
        add_item(&mut order, create_item("1", 100.0, 2));

        set_quantity(&mut order, "1", -4);

        assert!(order.items.is_empty());
    }

    #[test]
    fn set_quantity_on_unknown_item_is_a_noop() {
        let mut order = Order::new_draft();
        add_item(&mut order, create_item("1", 100.0, 2));
        let snapshot = order.clone();

        set_quantity(&mut order, "ghost", 7);

        assert_eq!(order, snapshot);
    }

    #[test]
    fn move_to_wishlist_excludes_line_from_totals() {
        let mut order = Order::new_draft();
        add_item(&mut order, create_item("1", 100.0, 2));
        set_quantity(&mut order, "1", 5);
        assert_eq!(order.subtotal, 500.0);

        move_to_wishlist(&mut order, "1");

        assert!(order.items.is_empty());
        assert_eq!(order.wishlist_items.len(), 1);
        assert_eq!(order.wishlist_items[0].quantity, 5);
        assert_eq!(order.subtotal, 0.0);
        assert_eq!(order.total, 0.0);
    }

    #[test]
    fn wishlist_roundtrip_preserves_quantity_and_color() {
        let mut order = Order::new_draft();
        add_item(&mut order, create_item("1", 100.0, 3).with_color("rojo"));

        move_to_wishlist(&mut order, "1");
        move_to_cart(&mut order, "1");

        assert_eq!(order.items.len(), 1);
        assert!(order.wishlist_items.is_empty());
        assert_eq!(order.items[0].quantity, 3);
        assert_eq!(order.items[0].color.as_deref(), Some("rojo"));
        assert_eq!(order.subtotal, 300.0);
    }

    #[test]
    fn item_id_never_lives_in_both_collections() {
        let mut order = Order::new_draft();
        add_item(&mut order, create_item("1", 100.0, 1));
        add_item(&mut order, create_item("2", 50.0, 1));

        move_to_wishlist(&mut order, "1");
        // Duplicate clicks on both directions
        move_to_wishlist(&mut order, "1");
        move_to_cart(&mut order, "1");
        move_to_cart(&mut order, "1");

        let in_cart = order.items.iter().filter(|i| i.id == "1").count();
        let in_wishlist = order.wishlist_items.iter().filter(|i| i.id == "1").count();
        assert_eq!(in_cart + in_wishlist, 1);
    }

    #[test]
    fn move_unknown_ids_are_noops() {
        let mut order = Order::new_draft();
        add_item(&mut order, create_item("1", 100.0, 1));
        let snapshot = order.clone();

        move_to_wishlist(&mut order, "ghost");
        move_to_cart(&mut order, "ghost");
        // Wrong collection: "1" is in the cart, not the wishlist
        move_to_cart(&mut order, "1");

        assert_eq!(order, snapshot);
    }

    #[test]
    fn clear_resets_to_fresh_draft() {
        let mut order = Order::new_draft();
        order.id = "ORD-1".to_string();
        order.status = OrderStatus::Pending;
        add_item(&mut order, create_item("1", 100.0, 2));
        move_to_wishlist(&mut order, "1");
        add_item(&mut order, create_item("2", 10.0, 1));

        clear(&mut order);

        assert!(!order.has_id());
        assert_eq!(order.status, OrderStatus::Draft);
        assert!(order.items.is_empty());
        assert!(order.wishlist_items.is_empty());
        assert_eq!(order.subtotal, 0.0);
        assert_eq!(order.total, 0.0);
    }

    #[test]
    fn update_quantity_then_park_drops_subtotal_to_zero() {
        let mut order = Order::new_draft();
        add_item(
            &mut order,
            CartItem::new("1", "SKU1", "Producto", 100.0, 2),
        );
        assert_eq!(order.subtotal, 200.0);

        set_quantity(&mut order, "1", 5);
        assert_eq!(order.subtotal, 500.0);

        move_to_wishlist(&mut order, "1");
        assert!(order.items.is_empty());
        assert_eq!(order.wishlist_items[0].quantity, 5);
        assert_eq!(order.subtotal, 0.0);
    }

    #[test]
    fn subtotal_matches_sum_after_arbitrary_sequence() {
        let mut order = Order::new_draft();
        add_item(&mut order, create_item("1", 19.99, 3));
        add_item(&mut order, create_item("2", 5.25, 10));
        add_item(&mut order, create_item("1", 19.99, 1));
        remove_item(&mut order, "2");
        add_item(&mut order, create_item("3", 0.1, 7));
        set_quantity(&mut order, "3", 9);
        move_to_wishlist(&mut order, "1");
        move_to_cart(&mut order, "1");

        let expected: f64 = order
            .items
            .iter()
            .map(|i| i.price * i.quantity as f64)
            .sum();
        assert!((order.subtotal - expected).abs() < 1e-9);
    }
}

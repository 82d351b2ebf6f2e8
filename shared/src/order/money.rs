//! Money calculation utilities using rust_decimal for precision
//!
//! All arithmetic is done with `Decimal` internally, then converted back to
//! `f64` for storage and serialization, rounded to 2 decimal places half-up.

use super::snapshot::Order;
use rust_decimal::prelude::*;

/// Rounding for monetary values (2 decimal places)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Recalculate `subtotal` and `total` from the cart collection
///
/// Wishlist items never contribute. `tax` is taken as-is: it stays 0 until
/// the order service reports an authoritative value.
pub fn recalculate_totals(order: &mut Order) {
    let mut subtotal = Decimal::ZERO;
    for item in &order.items {
        subtotal += to_decimal(item.price) * Decimal::from(item.quantity);
    }
    order.subtotal = to_f64(subtotal);
    order.total = to_f64(subtotal + to_decimal(order.tax));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::item::CartItem;

    #[test]
    fn totals_sum_price_times_quantity_over_cart_only() {
        let mut order = Order::new_draft();
        order.items.push(CartItem::new("1", "SKU1", "A", 100.0, 2));
        order.items.push(CartItem::new("2", "SKU2", "B", 50.5, 3));
        order
            .wishlist_items
            .push(CartItem::new("3", "SKU3", "C", 999.0, 1));

        recalculate_totals(&mut order);

        assert_eq!(order.subtotal, 351.5);
        assert_eq!(order.total, 351.5);
    }

    #[test]
    fn tax_is_added_to_total() {
        let mut order = Order::new_draft();
        order.items.push(CartItem::new("1", "SKU1", "A", 100.0, 1));
        order.tax = 22.0;

        recalculate_totals(&mut order);

        assert_eq!(order.subtotal, 100.0);
        assert_eq!(order.total, 122.0);
    }

    #[test]
    fn float_artifacts_are_rounded_away() {
        let mut order = Order::new_draft();
        // 0.1 + 0.2 style accumulation
        order.items.push(CartItem::new("1", "SKU1", "A", 0.1, 3));

        recalculate_totals(&mut order);

        assert_eq!(order.subtotal, 0.3);
    }
}

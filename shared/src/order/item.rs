//! Cart line item

use serde::{Deserialize, Serialize};

/// Minimum quantity a persisted line item may carry
pub const MIN_QUANTITY: i32 = 1;
/// Maximum quantity a line item may carry
pub const MAX_QUANTITY: i32 = 9999;

/// A single line item of an order
///
/// `id` is the line-item identity, unique within one collection at any
/// instant. `code` is the catalog SKU; two lines may share a `code` with
/// different `color` variants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub id: String,
    /// Catalog SKU
    pub code: String,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    /// Selected color variant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Display-only image URL, carried opaquely
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl CartItem {
    /// Create a line item with a clamped quantity
    pub fn new(
        id: impl Into<String>,
        code: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        quantity: i32,
    ) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            name: name.into(),
            price,
            quantity: clamp_quantity(quantity),
            color: None,
            image: None,
        }
    }

    /// Set the color variant
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Clamp a requested quantity into the [MIN_QUANTITY, MAX_QUANTITY] range
pub fn clamp_quantity(quantity: i32) -> i32 {
    quantity.clamp(MIN_QUANTITY, MAX_QUANTITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_quantity_to_bounds() {
        assert_eq!(CartItem::new("1", "SKU1", "A", 10.0, 0).quantity, 1);
        assert_eq!(CartItem::new("1", "SKU1", "A", 10.0, 5).quantity, 5);
        assert_eq!(CartItem::new("1", "SKU1", "A", 10.0, 20000).quantity, 9999);
    }

    #[test]
    fn clamp_quantity_boundaries() {
        assert_eq!(clamp_quantity(-3), MIN_QUANTITY);
        assert_eq!(clamp_quantity(1), 1);
        assert_eq!(clamp_quantity(9999), 9999);
        assert_eq!(clamp_quantity(10000), MAX_QUANTITY);
    }

    #[test]
    fn color_is_omitted_from_json_when_absent() {
        let item = CartItem::new("1", "SKU1", "Camiseta", 450.0, 2);
        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("color").is_none());

        let item = item.with_color("rojo");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["color"], "rojo");
    }
}

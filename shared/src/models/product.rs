//! Product Model

use serde::{Deserialize, Serialize};

/// Catalog product, as returned by product search/lookup
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    /// Catalog SKU used for scanning
    pub code: String,
    pub name: String,
    pub price: f64,
    /// Stock on hand
    pub quantity: i32,
    pub in_stock: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Available color variants
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
}

impl Product {
    /// Whether the product can currently be added to a cart
    pub fn is_available(&self) -> bool {
        self.in_stock && self.quantity > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_deserializes_from_service_payload() {
        let json = r#"{
            "id": "prod-1",
            "code": "SKU1",
            "name": "Camiseta",
            "price": 450.0,
            "quantity": 12,
            "inStock": true,
            "colors": ["rojo", "azul"]
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.code, "SKU1");
        assert!(product.is_available());
        assert_eq!(product.colors.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn out_of_stock_product_is_not_available() {
        let json = r#"{
            "id": "prod-2",
            "code": "SKU2",
            "name": "Gorra",
            "price": 200.0,
            "quantity": 0,
            "inStock": false
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(!product.is_available());
    }
}

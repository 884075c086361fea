//! Catalog record types returned by the storefront API.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A product as the catalog endpoint returns it.
///
/// The catalog record carries no quantity; see [`crate::cart::CartItem`]
/// for the in-cart representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Unit price in the storefront currency, as the API reports it.
    pub price: f64,
    /// Product image URL.
    pub image: String,
}

/// Available stock for a product, as the stock endpoint reports it.
///
/// Remote-authoritative: the cart never caches or adjusts this value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Stock {
    /// Product this stock level belongs to.
    pub id: ProductId,
    /// Units available for purchase.
    pub amount: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_wire_format() {
        let json = r#"{
            "id": 1,
            "title": "Tenis de Caminhada Leve Confortavel",
            "price": 179.9,
            "image": "https://rocketseat-cdn.s3-sa-east-1.amazonaws.com/modulo-redux/tenis1.jpg"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.price, 179.9);
    }

    #[test]
    fn test_stock_wire_format() {
        let stock: Stock = serde_json::from_str(r#"{"id": 1, "amount": 3}"#).unwrap();
        assert_eq!(stock.id, ProductId::new(1));
        assert_eq!(stock.amount, 3);
    }
}

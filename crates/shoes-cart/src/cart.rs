//! Cart contents and line items.

use crate::catalog::Product;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A product as represented inside the cart, including its quantity.
///
/// Fields mirror the catalog record so the persisted cart is
/// self-contained for display. `amount` defaults to 0 when the field is
/// absent in persisted data; carts written by older storefront builds
/// lack it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Product identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Unit price.
    pub price: f64,
    /// Product image URL.
    pub image: String,
    /// Quantity of this product in the cart.
    #[serde(default)]
    pub amount: i64,
}

impl CartItem {
    /// Build a line item from a catalog record.
    pub fn from_product(product: Product, amount: i64) -> Self {
        Self {
            id: product.id,
            title: product.title,
            price: product.price,
            image: product.image,
            amount,
        }
    }
}

/// Ordered, id-unique collection of selected products.
///
/// Insertion order is first-added order. Serializes as a bare JSON array,
/// matching the storefront's persisted cart format.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Get a line item by product id.
    pub fn get(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Check whether a product is in the cart.
    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Total quantity across all line items.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.amount).sum()
    }

    /// Number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The line items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Iterate over line items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CartItem> {
        self.items.iter()
    }

    /// Append a line item for a product not yet in the cart.
    ///
    /// Returns `false` and leaves the cart unchanged if the product is
    /// already present; id-uniqueness is the cart's core invariant.
    pub(crate) fn push_new(&mut self, item: CartItem) -> bool {
        if self.contains(item.id) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Set the quantity of an existing line item.
    ///
    /// Returns `false` if the product is not in the cart.
    pub(crate) fn set_amount(&mut self, id: ProductId, amount: i64) -> bool {
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.amount = amount;
                true
            }
            None => false,
        }
    }

    /// Remove a line item, preserving the order of the rest.
    ///
    /// Returns `false` if the product is not in the cart.
    pub(crate) fn remove(&mut self, id: ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() < before
    }
}

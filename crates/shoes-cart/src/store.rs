//! The cart state owner.

use tracing::{debug, warn};

use crate::api::StorefrontApi;
use crate::cart::{Cart, CartItem};
use crate::error::CartError;
use crate::ids::ProductId;
use crate::storage::CartStorage;

/// Authoritative owner of the shopper's cart.
///
/// All mutations go through `&mut self`, so every operation reads the
/// current committed cart rather than a copy captured at call time; two
/// interleaved operations cannot silently overwrite each other's writes.
///
/// Commit discipline: each mutation computes the next cart from the
/// committed one, writes the full serialized cart to storage, and only
/// then replaces the in-memory state. A failed write leaves memory at the
/// last committed state.
pub struct CartStore<A, S> {
    api: A,
    storage: S,
    cart: Cart,
}

impl<A: StorefrontApi, S: CartStorage> CartStore<A, S> {
    /// Open the store, loading any previously persisted cart.
    ///
    /// An absent cart starts empty. A persisted value that fails to
    /// decode propagates as [`CartError::Storage`].
    pub fn open(api: A, storage: S) -> Result<Self, CartError> {
        let cart = storage.load()?.unwrap_or_default();
        Ok(Self { api, storage, cart })
    }

    /// The current committed cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add one unit of a product to the cart.
    ///
    /// An entry already in the cart is checked against the stock endpoint
    /// and incremented by 1. A product not yet in the cart is fetched
    /// from the catalog and appended with amount 1. The first-add path
    /// does not consult stock; that is longstanding storefront behavior,
    /// kept as-is pending product-owner confirmation.
    pub fn add_product(&mut self, product_id: ProductId) -> Result<(), CartError> {
        let existing = self.cart.get(product_id).map(|item| item.amount);

        let stock = self.api.stock(product_id)?;

        if let Some(amount) = existing {
            if amount >= stock.amount {
                warn!(
                    %product_id,
                    requested = amount + 1,
                    available = stock.amount,
                    "add rejected: insufficient stock"
                );
                return Err(CartError::InsufficientStock {
                    product_id,
                    requested: amount + 1,
                    available: stock.amount,
                });
            }

            let mut next = self.cart.clone();
            next.set_amount(product_id, amount + 1);
            return self.commit(next);
        }

        let product = self.api.product(product_id)?;
        let mut next = self.cart.clone();
        next.push_new(CartItem::from_product(product, 1));
        self.commit(next)
    }

    /// Remove a product from the cart entirely.
    ///
    /// Removing a product that is not in the cart is an error and leaves
    /// the cart untouched. No network call is made.
    pub fn remove_product(&mut self, product_id: ProductId) -> Result<(), CartError> {
        let mut next = self.cart.clone();
        if !next.remove(product_id) {
            warn!(%product_id, "remove rejected: product not in cart");
            return Err(CartError::NotInCart(product_id));
        }
        self.commit(next)
    }

    /// Set the quantity of a product already in the cart.
    ///
    /// A requested amount of zero or less is silently ignored. Otherwise
    /// the amount is validated against the stock endpoint and clamped to
    /// the reported stock on write.
    pub fn update_product_amount(
        &mut self,
        product_id: ProductId,
        amount: i64,
    ) -> Result<(), CartError> {
        if amount <= 0 {
            return Ok(());
        }

        let stock = self.api.stock(product_id)?;

        if amount > stock.amount {
            warn!(
                %product_id,
                requested = amount,
                available = stock.amount,
                "update rejected: insufficient stock"
            );
            return Err(CartError::InsufficientStock {
                product_id,
                requested: amount,
                available: stock.amount,
            });
        }

        let mut next = self.cart.clone();
        if !next.set_amount(product_id, amount.min(stock.amount)) {
            warn!(%product_id, "update rejected: product not in cart");
            return Err(CartError::NotInCart(product_id));
        }
        self.commit(next)
    }

    /// Persist `next` and make it the committed cart.
    fn commit(&mut self, next: Cart) -> Result<(), CartError> {
        self.storage.save(&next)?;
        debug!(
            products = next.unique_item_count(),
            units = next.item_count(),
            "cart committed"
        );
        self.cart = next;
        Ok(())
    }
}

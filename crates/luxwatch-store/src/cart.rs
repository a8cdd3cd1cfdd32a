//! Cart state: a pure reducer plus a persisting wrapper.

use luxwatch_core::{saturating_sum, CartItem, OrderSummary, Product};
use rust_decimal::Decimal;

use crate::error::StoreError;
use crate::persist::{persist, rehydrate};
use crate::storage::KeyValueStorage;

/// Storage key for the persisted cart.
pub const CART_STORAGE_KEY: &str = "luxury-watch-cart";

#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Adds `quantity` to the existing line, or appends a new one. Stock is
    /// not checked here.
    Add { product: Product, quantity: u32 },
    Remove { product_id: String },
    /// Sets the quantity exactly; zero or less removes the line.
    UpdateQuantity { product_id: String, quantity: i64 },
    Clear,
    /// Replaces the whole cart, e.g. with rehydrated state.
    Load(Vec<CartItem>),
}

/// Applies one action. Lines stay in insertion order, one per product id,
/// each with quantity at least 1.
#[must_use]
pub fn reduce_cart(mut state: Vec<CartItem>, action: CartAction) -> Vec<CartItem> {
    match action {
        CartAction::Add { quantity: 0, .. } => state,
        CartAction::Add { product, quantity } => {
            if let Some(line) = state.iter_mut().find(|i| i.product.id == product.id) {
                line.quantity = line.quantity.saturating_add(quantity);
            } else {
                state.push(CartItem { product, quantity });
            }
            state
        }
        CartAction::Remove { product_id } => {
            state.retain(|i| i.product.id != product_id);
            state
        }
        CartAction::UpdateQuantity {
            product_id,
            quantity,
        } => {
            if quantity <= 0 {
                state.retain(|i| i.product.id != product_id);
            } else if let Some(line) = state.iter_mut().find(|i| i.product.id == product_id) {
                line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
            }
            state
        }
        CartAction::Clear => Vec::new(),
        CartAction::Load(items) => normalize(items),
    }
}

/// Drops zero-quantity lines and repeated product ids, keeping the first.
fn normalize(items: Vec<CartItem>) -> Vec<CartItem> {
    let mut out: Vec<CartItem> = Vec::with_capacity(items.len());
    for item in items {
        if item.quantity > 0 && !out.iter().any(|o| o.product.id == item.product.id) {
            out.push(item);
        }
    }
    out
}

#[must_use]
pub fn total_items(items: &[CartItem]) -> u32 {
    items.iter().fold(0u32, |acc, i| acc.saturating_add(i.quantity))
}

/// Σ `finalPrice × quantity`.
#[must_use]
pub fn total_price(items: &[CartItem]) -> Decimal {
    saturating_sum(items.iter().map(CartItem::line_total))
}

/// Cart bound to a storage backend. Every dispatch writes the full cart.
pub struct CartStore<S: KeyValueStorage> {
    storage: S,
    items: Vec<CartItem>,
}

impl<S: KeyValueStorage> CartStore<S> {
    /// Rehydrates from storage. Unreadable state starts an empty cart.
    pub fn open(storage: S) -> Self {
        let saved = rehydrate(&storage, CART_STORAGE_KEY);
        let items = reduce_cart(Vec::new(), CartAction::Load(saved));
        tracing::debug!(lines = items.len(), "cart rehydrated");
        Self { storage, items }
    }

    /// Applies `action` and persists the result.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the cart cannot be written. The in-memory
    /// state has already changed by then.
    pub fn dispatch(&mut self, action: CartAction) -> Result<(), StoreError> {
        self.items = reduce_cart(std::mem::take(&mut self.items), action);
        persist(&self.storage, CART_STORAGE_KEY, &self.items)
    }

    /// # Errors
    ///
    /// See [`CartStore::dispatch`].
    pub fn add_item(&mut self, product: Product, quantity: u32) -> Result<(), StoreError> {
        self.dispatch(CartAction::Add { product, quantity })
    }

    /// # Errors
    ///
    /// See [`CartStore::dispatch`].
    pub fn remove_item(&mut self, product_id: &str) -> Result<(), StoreError> {
        self.dispatch(CartAction::Remove {
            product_id: product_id.to_owned(),
        })
    }

    /// # Errors
    ///
    /// See [`CartStore::dispatch`].
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) -> Result<(), StoreError> {
        self.dispatch(CartAction::UpdateQuantity {
            product_id: product_id.to_owned(),
            quantity,
        })
    }

    /// # Errors
    ///
    /// See [`CartStore::dispatch`].
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.dispatch(CartAction::Clear)
    }

    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub fn total_items(&self) -> u32 {
        total_items(&self.items)
    }

    #[must_use]
    pub fn total_price(&self) -> Decimal {
        total_price(&self.items)
    }

    #[must_use]
    pub fn is_in_cart(&self, product_id: &str) -> bool {
        self.items.iter().any(|i| i.product.id == product_id)
    }

    /// Quantity of the line for `product_id`, or 0.
    #[must_use]
    pub fn quantity_of(&self, product_id: &str) -> u32 {
        self.items
            .iter()
            .find(|i| i.product.id == product_id)
            .map_or(0, |i| i.quantity)
    }

    #[must_use]
    pub fn summary(&self) -> OrderSummary {
        OrderSummary::from_subtotal(self.total_price(), self.total_items())
    }
}

#[cfg(test)]
#[path = "cart_test.rs"]
mod tests;

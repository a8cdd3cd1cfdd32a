//! Wishlist state: a pure reducer plus a persisting wrapper.

use chrono::{DateTime, Duration, Utc};
use luxwatch_core::{saturating_sum, Product, WishlistItem};
use rust_decimal::Decimal;

use crate::error::StoreError;
use crate::persist::{persist, rehydrate};
use crate::storage::KeyValueStorage;

/// Storage key for the persisted wishlist.
pub const WISHLIST_STORAGE_KEY: &str = "luxury-watch-wishlist";

/// Window for [`WishlistStats::recently_added`].
pub const RECENT_WINDOW_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq)]
pub enum WishlistAction {
    /// No-op if the product is already saved.
    Add(Product),
    Remove { product_id: String },
    Clear,
    Load(Vec<WishlistItem>),
}

/// Applies one action. `now` stamps newly added entries.
#[must_use]
pub fn reduce_wishlist(
    mut state: Vec<WishlistItem>,
    action: WishlistAction,
    now: DateTime<Utc>,
) -> Vec<WishlistItem> {
    match action {
        WishlistAction::Add(product) => {
            if !state.iter().any(|i| i.product.id == product.id) {
                state.push(WishlistItem {
                    product,
                    added_at: now,
                });
            }
            state
        }
        WishlistAction::Remove { product_id } => {
            state.retain(|i| i.product.id != product_id);
            state
        }
        WishlistAction::Clear => Vec::new(),
        WishlistAction::Load(items) => {
            let mut out: Vec<WishlistItem> = Vec::with_capacity(items.len());
            for item in items {
                if !out.iter().any(|o| o.product.id == item.product.id) {
                    out.push(item);
                }
            }
            out
        }
    }
}

/// Aggregates shown above the saved-items list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WishlistStats {
    pub count: usize,
    pub total_value: Decimal,
    /// Zero for an empty wishlist. Not rounded.
    pub average_price: Decimal,
    /// Entries saved less than [`RECENT_WINDOW_DAYS`] before `now`.
    pub recently_added: usize,
}

impl WishlistStats {
    #[must_use]
    pub fn from_items(items: &[WishlistItem], now: DateTime<Utc>) -> Self {
        let count = items.len();
        let total_value = saturating_sum(items.iter().map(|i| i.product.final_price));
        let average_price = if count == 0 {
            Decimal::ZERO
        } else {
            total_value / Decimal::from(count)
        };
        let window = Duration::days(RECENT_WINDOW_DAYS);
        let recently_added = items
            .iter()
            .filter(|i| now.signed_duration_since(i.added_at) < window)
            .count();
        Self {
            count,
            total_value,
            average_price,
            recently_added,
        }
    }
}

/// Wishlist bound to a storage backend. Every dispatch writes the full list.
pub struct WishlistStore<S: KeyValueStorage> {
    storage: S,
    items: Vec<WishlistItem>,
}

impl<S: KeyValueStorage> WishlistStore<S> {
    /// Rehydrates from storage. Unreadable state starts an empty wishlist.
    pub fn open(storage: S) -> Self {
        let saved = rehydrate(&storage, WISHLIST_STORAGE_KEY);
        let items = reduce_wishlist(Vec::new(), WishlistAction::Load(saved), Utc::now());
        tracing::debug!(entries = items.len(), "wishlist rehydrated");
        Self { storage, items }
    }

    /// Applies `action` at `now` and persists the result.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the wishlist cannot be written.
    pub fn dispatch_at(
        &mut self,
        action: WishlistAction,
        now: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        self.items = reduce_wishlist(std::mem::take(&mut self.items), action, now);
        persist(&self.storage, WISHLIST_STORAGE_KEY, &self.items)
    }

    /// # Errors
    ///
    /// See [`WishlistStore::dispatch_at`].
    pub fn dispatch(&mut self, action: WishlistAction) -> Result<(), StoreError> {
        self.dispatch_at(action, Utc::now())
    }

    /// # Errors
    ///
    /// See [`WishlistStore::dispatch_at`].
    pub fn add_item(&mut self, product: Product) -> Result<(), StoreError> {
        self.dispatch(WishlistAction::Add(product))
    }

    /// # Errors
    ///
    /// See [`WishlistStore::dispatch_at`].
    pub fn remove_item(&mut self, product_id: &str) -> Result<(), StoreError> {
        self.dispatch(WishlistAction::Remove {
            product_id: product_id.to_owned(),
        })
    }

    /// Saves the product if absent, removes it otherwise. Returns whether it
    /// is saved afterwards.
    ///
    /// # Errors
    ///
    /// See [`WishlistStore::dispatch_at`].
    pub fn toggle(&mut self, product: Product) -> Result<bool, StoreError> {
        if self.is_in_wishlist(&product.id) {
            self.remove_item(&product.id)?;
            Ok(false)
        } else {
            self.add_item(product)?;
            Ok(true)
        }
    }

    /// # Errors
    ///
    /// See [`WishlistStore::dispatch_at`].
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.dispatch(WishlistAction::Clear)
    }

    #[must_use]
    pub fn items(&self) -> &[WishlistItem] {
        &self.items
    }

    #[must_use]
    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    /// Σ `finalPrice`.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        saturating_sum(self.items.iter().map(|i| i.product.final_price))
    }

    #[must_use]
    pub fn is_in_wishlist(&self, product_id: &str) -> bool {
        self.items.iter().any(|i| i.product.id == product_id)
    }

    #[must_use]
    pub fn stats(&self, now: DateTime<Utc>) -> WishlistStats {
        WishlistStats::from_items(&self.items, now)
    }
}

#[cfg(test)]
#[path = "wishlist_test.rs"]
mod tests;

//! Checks saved cart and wishlist entries against the current catalog.
//!
//! Entries hold a copy of the product taken when they were added and are
//! never rewritten by a catalog refresh. Callers ask here at render time.

use luxwatch_core::{CartItem, Product, WishlistItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available,
    /// Still listed, but with no stock.
    OutOfStock,
    /// No product with this id in the current catalog.
    Unavailable,
}

impl Availability {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::OutOfStock => "out of stock",
            Self::Unavailable => "no longer available",
        }
    }
}

/// Status of one product id in `catalog`.
#[must_use]
pub fn availability(product_id: &str, catalog: &[Product]) -> Availability {
    match catalog.iter().find(|p| p.id == product_id) {
        None => Availability::Unavailable,
        Some(p) if p.is_in_stock() => Availability::Available,
        Some(_) => Availability::OutOfStock,
    }
}

/// Cart lines paired with their current status, in cart order.
#[must_use]
pub fn cart_availability<'a>(
    items: &'a [CartItem],
    catalog: &[Product],
) -> Vec<(&'a CartItem, Availability)> {
    items
        .iter()
        .map(|i| (i, availability(&i.product.id, catalog)))
        .collect()
}

/// Wishlist entries paired with their current status, in list order.
#[must_use]
pub fn wishlist_availability<'a>(
    items: &'a [WishlistItem],
    catalog: &[Product],
) -> Vec<(&'a WishlistItem, Availability)> {
    items
        .iter()
        .map(|i| (i, availability(&i.product.id, catalog)))
        .collect()
}

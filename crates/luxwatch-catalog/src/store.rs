//! In-memory product catalog shared by readers and the refresh task.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use luxwatch_core::Product;

use crate::query::{matches_search, FacetOptions, PriceRange, ProductFilters};
use crate::source::{CatalogOrigin, CatalogSource};

/// Advisory shown when a refresh comes back with nothing.
pub const NO_PRODUCTS_MESSAGE: &str = "No products available at the moment";

/// How many related products a detail page shows.
pub const DEFAULT_RELATED_LIMIT: usize = 4;

/// An immutable view of the catalog at one point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSnapshot {
    pub products: Vec<Product>,
    /// `None` until the first load completes.
    pub origin: Option<CatalogOrigin>,
    pub error: Option<String>,
    pub loaded_at: Option<DateTime<Utc>>,
    pub loading: bool,
}

impl CatalogSnapshot {
    fn initial() -> Self {
        Self {
            products: Vec::new(),
            origin: None,
            error: None,
            loaded_at: None,
            loading: true,
        }
    }

    #[must_use]
    pub fn using_fallback(&self) -> bool {
        self.origin == Some(CatalogOrigin::Fallback)
    }
}

/// Holds the current snapshot and swaps it wholesale on refresh.
///
/// Readers clone an `Arc` and never block a refresh for longer than the
/// pointer swap.
pub struct CatalogStore {
    source: Box<dyn CatalogSource>,
    current: RwLock<Arc<CatalogSnapshot>>,
    /// Refreshes that have started but not yet published.
    in_flight: AtomicUsize,
}

impl CatalogStore {
    #[must_use]
    pub fn new(source: impl CatalogSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            current: RwLock::new(Arc::new(CatalogSnapshot::initial())),
            in_flight: AtomicUsize::new(0),
        }
    }

    /// Loads from the source and publishes the result.
    ///
    /// An empty load keeps the previous products and records
    /// [`NO_PRODUCTS_MESSAGE`]. A non-empty load replaces them. `loading`
    /// stays set until every overlapping refresh has published.
    pub async fn refresh(&self) -> Arc<CatalogSnapshot> {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        self.update(|snap| {
            snap.loading = true;
        });

        let load = self.source.load().await;
        let count = load.products.len();

        let published = self.update(move |snap| {
            snap.loading = self.in_flight.fetch_sub(1, Ordering::SeqCst) > 1;
            snap.loaded_at = Some(Utc::now());
            if load.products.is_empty() {
                snap.error = Some(NO_PRODUCTS_MESSAGE.to_owned());
            } else {
                snap.products = load.products;
                snap.origin = Some(load.origin);
                snap.error = load.advisory;
            }
        });

        if count == 0 {
            tracing::warn!(source = self.source.name(), "catalog refresh returned no products");
        } else {
            tracing::info!(
                source = self.source.name(),
                count,
                origin = ?published.origin,
                "catalog refreshed"
            );
        }
        published
    }

    fn update(&self, f: impl FnOnce(&mut CatalogSnapshot)) -> Arc<CatalogSnapshot> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = CatalogSnapshot::clone(&guard);
        f(&mut next);
        let next = Arc::new(next);
        *guard = Arc::clone(&next);
        next
    }

    #[must_use]
    pub fn snapshot(&self) -> Arc<CatalogSnapshot> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        self.snapshot().products.clone()
    }

    #[must_use]
    pub fn get_by_id(&self, id: &str) -> Option<Product> {
        self.snapshot().products.iter().find(|p| p.id == id).cloned()
    }

    /// Case-insensitive substring search over name, brand, description and
    /// model number. A blank query returns the whole catalog.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<Product> {
        self.snapshot()
            .products
            .iter()
            .filter(|p| matches_search(p, query))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn filter(&self, filters: &ProductFilters) -> Vec<Product> {
        self.snapshot()
            .products
            .iter()
            .filter(|p| filters.matches(p))
            .cloned()
            .collect()
    }

    /// Other products sharing the brand or the type, in catalog order.
    #[must_use]
    pub fn related(&self, product: &Product, limit: usize) -> Vec<Product> {
        self.snapshot()
            .products
            .iter()
            .filter(|p| p.id != product.id)
            .filter(|p| p.brand == product.brand || p.watch_type == product.watch_type)
            .take(limit)
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn facet_options(&self) -> FacetOptions {
        FacetOptions::from_products(&self.snapshot().products)
    }

    #[must_use]
    pub fn price_bounds(&self) -> Option<PriceRange> {
        PriceRange::observed(&self.snapshot().products)
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;

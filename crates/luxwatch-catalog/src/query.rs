//! Search, facet filtering and sorting over a catalog snapshot.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use luxwatch_core::{Product, WatchType};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Price window used before any catalog has been observed.
pub const DEFAULT_PRICE_CEILING: Decimal = Decimal::from_parts(500_000, 0, 0, false, 0);

/// Inclusive `finalPrice` window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    #[serde(with = "rust_decimal::serde::float")]
    pub min: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub max: Decimal,
}

impl PriceRange {
    #[must_use]
    pub fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    /// Smallest and largest `finalPrice` in `products`, or `None` when empty.
    #[must_use]
    pub fn observed(products: &[Product]) -> Option<Self> {
        let mut prices = products.iter().map(|p| p.final_price);
        let first = prices.next()?;
        let (min, max) = prices.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Some(Self { min, max })
    }

    #[must_use]
    pub fn contains(&self, price: Decimal) -> bool {
        price >= self.min && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::new(Decimal::ZERO, DEFAULT_PRICE_CEILING)
    }
}

/// Exact-match facets plus an optional price window. `None` means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilters {
    pub brand: Option<String>,
    pub watch_type: Option<WatchType>,
    pub case_material: Option<String>,
    pub strap_material: Option<String>,
    pub price_range: Option<PriceRange>,
}

impl ProductFilters {
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let exact = |want: Option<&String>, have: &str| want.is_none_or(|w| w == have);
        exact(self.brand.as_ref(), &product.brand)
            && self.watch_type.is_none_or(|t| t == product.watch_type)
            && exact(self.case_material.as_ref(), &product.case_material)
            && exact(self.strap_material.as_ref(), &product.strap_material)
            && self
                .price_range
                .is_none_or(|r| r.contains(product.final_price))
    }
}

/// Sort order for listing pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortBy {
    #[default]
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "price-low")]
    PriceLow,
    #[serde(rename = "price-high")]
    PriceHigh,
    #[serde(rename = "brand")]
    Brand,
}

impl SortBy {
    pub const ALL: [SortBy; 4] = [Self::Name, Self::PriceLow, Self::PriceHigh, Self::Brand];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Brand => "brand",
        }
    }

    fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            Self::Name => compare_text(&a.name, &b.name),
            Self::Brand => compare_text(&a.brand, &b.brand),
            Self::PriceLow => a.final_price.cmp(&b.final_price),
            Self::PriceHigh => b.final_price.cmp(&a.final_price),
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown keys sort by name.
impl FromStr for SortBy {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s.trim())
            .unwrap_or_default())
    }
}

/// Case-insensitive first so "audemars" and "Audemars" sit together, then
/// byte order to keep the ordering total.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// The full listing-page query. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub search: String,
    pub brand: Option<String>,
    pub watch_type: Option<WatchType>,
    pub case_material: Option<String>,
    pub strap_material: Option<String>,
    pub price_range: PriceRange,
    pub sort_by: SortBy,
    /// Observed catalog extremes the range was seeded from.
    observed_range: PriceRange,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::with_range(PriceRange::default())
    }
}

impl FilterState {
    fn with_range(range: PriceRange) -> Self {
        Self {
            search: String::new(),
            brand: None,
            watch_type: None,
            case_material: None,
            strap_material: None,
            price_range: range,
            sort_by: SortBy::Name,
            observed_range: range,
        }
    }

    /// Fresh state whose price window spans the catalog's observed
    /// `finalPrice` extremes. An empty catalog keeps the default window.
    #[must_use]
    pub fn for_catalog(products: &[Product]) -> Self {
        Self::with_range(PriceRange::observed(products).unwrap_or_default())
    }

    /// Clears search and facets and restores the observed price window.
    pub fn reset(&mut self) {
        *self = Self::with_range(self.observed_range);
    }

    #[must_use]
    pub fn observed_range(&self) -> PriceRange {
        self.observed_range
    }

    /// Number of constraints narrowing the listing. Sort order is not one.
    #[must_use]
    pub fn active_filter_count(&self) -> usize {
        [
            !self.search.is_empty(),
            self.brand.is_some(),
            self.watch_type.is_some(),
            self.case_material.is_some(),
            self.strap_material.is_some(),
            self.price_range != self.observed_range,
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    #[must_use]
    pub fn facets(&self) -> ProductFilters {
        ProductFilters {
            brand: self.brand.clone(),
            watch_type: self.watch_type,
            case_material: self.case_material.clone(),
            strap_material: self.strap_material.clone(),
            price_range: Some(self.price_range),
        }
    }
}

/// Case-insensitive substring match over name, brand, description and
/// model number. A blank query matches everything.
#[must_use]
pub fn matches_search(product: &Product, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    [
        &product.name,
        &product.brand,
        &product.description,
        &product.model_number,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&needle))
}

/// Runs search, facets, the price window and the sort, in that order.
/// The sort is stable, so ties keep catalog order.
#[must_use]
pub fn apply_filters(catalog: &[Product], state: &FilterState) -> Vec<Product> {
    let facets = state.facets();
    let mut out: Vec<Product> = catalog
        .iter()
        .filter(|p| matches_search(p, &state.search))
        .filter(|p| facets.matches(p))
        .cloned()
        .collect();
    out.sort_by(|a, b| state.sort_by.compare(a, b));
    out
}

/// Distinct non-empty values for each facet, sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetOptions {
    pub brands: Vec<String>,
    pub types: Vec<WatchType>,
    pub case_materials: Vec<String>,
    pub strap_materials: Vec<String>,
}

impl FacetOptions {
    #[must_use]
    pub fn from_products(products: &[Product]) -> Self {
        fn distinct<'a>(values: impl Iterator<Item = &'a String>) -> Vec<String> {
            values
                .filter(|v| !v.trim().is_empty())
                .cloned()
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect()
        }

        let mut types: Vec<WatchType> = products
            .iter()
            .map(|p| p.watch_type)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        types.sort_by_key(|t| t.as_str());

        Self {
            brands: distinct(products.iter().map(|p| &p.brand)),
            types,
            case_materials: distinct(products.iter().map(|p| &p.case_material)),
            strap_materials: distinct(products.iter().map(|p| &p.strap_material)),
        }
    }
}

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;

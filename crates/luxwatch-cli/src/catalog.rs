//! Catalog browsing command handlers.

use clap::{Args, Subcommand};
use luxwatch_catalog::{apply_filters, CatalogStore, FilterState, SortBy, DEFAULT_RELATED_LIMIT};
use luxwatch_core::{Product, WatchType};
use rust_decimal::Decimal;

use crate::format::{product_row, rupees};

/// Sub-commands available under `catalog`.
#[derive(Debug, Subcommand)]
pub enum CatalogCommands {
    /// List products, optionally searched, filtered and sorted
    List(ListArgs),
    /// Show one product and others like it
    Show {
        /// Product id (e.g., rolex-submariner-001)
        id: String,
    },
    /// Show the distinct brands, types and materials on offer
    Facets,
}

/// Filters for `catalog list`. Unset facets match everything.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Case-insensitive text matched against name, brand, description and model number
    #[arg(long)]
    pub search: Option<String>,
    /// Exact brand name
    #[arg(long)]
    pub brand: Option<String>,
    /// Watch type (e.g., Diving)
    #[arg(long = "type")]
    pub watch_type: Option<WatchType>,
    /// Exact case material
    #[arg(long = "case")]
    pub case_material: Option<String>,
    /// Exact strap material
    #[arg(long = "strap")]
    pub strap_material: Option<String>,
    /// Lowest final price to include
    #[arg(long)]
    pub min: Option<Decimal>,
    /// Highest final price to include
    #[arg(long)]
    pub max: Option<Decimal>,
    /// One of name, price-low, price-high, brand
    #[arg(long, default_value = "name")]
    pub sort: SortBy,
}

impl ListArgs {
    /// Seeds a filter state from `products` and applies these arguments on
    /// top. An omitted bound keeps the catalog's observed extreme.
    pub(crate) fn into_state(self, products: &[Product]) -> FilterState {
        let mut state = FilterState::for_catalog(products);
        state.search = self.search.unwrap_or_default();
        state.brand = self.brand;
        state.watch_type = self.watch_type;
        state.case_material = self.case_material;
        state.strap_material = self.strap_material;
        if let Some(min) = self.min {
            state.price_range.min = min;
        }
        if let Some(max) = self.max {
            state.price_range.max = max;
        }
        state.sort_by = self.sort;
        state
    }
}

/// Dispatches a `catalog` sub-command against a loaded store.
///
/// # Errors
///
/// Returns an error if `show` names a product that is not in the catalog.
pub(crate) fn run_catalog(store: &CatalogStore, command: CatalogCommands) -> anyhow::Result<()> {
    match command {
        CatalogCommands::List(args) => {
            run_catalog_list(store, args);
            Ok(())
        }
        CatalogCommands::Show { id } => run_catalog_show(store, &id),
        CatalogCommands::Facets => {
            run_catalog_facets(store);
            Ok(())
        }
    }
}

fn run_catalog_list(store: &CatalogStore, args: ListArgs) {
    let products = store.products();
    let state = args.into_state(&products);
    let listed = apply_filters(&products, &state);

    let active = state.active_filter_count();
    println!(
        "{} of {} products (sorted by {}{})",
        listed.len(),
        products.len(),
        state.sort_by,
        if active == 0 {
            String::new()
        } else {
            format!(", {active} filter(s) active")
        }
    );
    if listed.is_empty() {
        println!("no products match; try fewer filters");
        return;
    }

    println!(
        "{:<24}{:<18}{:<28}{:<13}PRICE",
        "ID", "BRAND", "NAME", "TYPE"
    );
    for product in &listed {
        println!("{}", product_row(product));
    }
}

fn run_catalog_show(store: &CatalogStore, id: &str) -> anyhow::Result<()> {
    let product = store
        .get_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("product '{id}' not found; run `catalog list` to see ids"))?;

    println!("{} {}", product.brand, product.name);
    println!("Model:     {}", product.model_number);
    println!("Type:      {}", product.watch_type);
    println!(
        "Case:      {} / Dial: {}",
        product.case_material, product.dial_color
    );
    println!(
        "Strap:     {} / {}",
        product.strap_material, product.strap_color
    );
    println!("Warranty:  {}", product.warranty);
    match product.discount_badge() {
        Some(pct) => println!(
            "Price:     {} (was {}, -{pct}%)",
            rupees(product.final_price),
            rupees(product.price)
        ),
        None => println!("Price:     {}", rupees(product.final_price)),
    }
    if !product.has_consistent_pricing() {
        tracing::debug!(
            id = %product.id,
            listed = %product.final_price,
            computed = %product.computed_final_price(),
            "final price differs from price less discount"
        );
    }
    if product.is_in_stock() {
        println!("Stock:     {} available", product.stock_quantity);
    } else {
        println!("Stock:     out of stock");
    }
    if let Some(image) = product.primary_image() {
        println!("Image:     {image}");
    }
    println!();
    println!("{}", product.description);

    let related = store.related(&product, DEFAULT_RELATED_LIMIT);
    if !related.is_empty() {
        println!();
        println!("You may also like:");
        for other in &related {
            println!("  {}", product_row(other));
        }
    }
    Ok(())
}

fn run_catalog_facets(store: &CatalogStore) {
    let facets = store.facet_options();
    let types: Vec<&str> = facets.types.iter().map(|t| t.as_str()).collect();

    println!("Brands:          {}", facets.brands.join(", "));
    println!("Types:           {}", types.join(", "));
    println!("Case materials:  {}", facets.case_materials.join(", "));
    println!("Strap materials: {}", facets.strap_materials.join(", "));
    if let Some(range) = store.price_bounds() {
        println!(
            "Price range:     {} - {}",
            rupees(range.min),
            rupees(range.max)
        );
    }
}

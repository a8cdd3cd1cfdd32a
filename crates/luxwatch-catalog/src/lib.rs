pub mod client;
pub mod csv;
pub mod error;
pub mod fallback;
pub mod ingest;
pub mod mapping;
pub mod payload;
pub mod query;
pub mod refresh;
pub mod source;
pub mod store;

pub use client::SheetsClient;
pub use error::CatalogError;
pub use fallback::{fallback_catalog, FALLBACK_LEN};
pub use ingest::{ingest_catalog, parse_catalog_csv, try_ingest_catalog, IngestOutcome};
pub use payload::CatalogPayload;
pub use query::{apply_filters, FacetOptions, FilterState, PriceRange, ProductFilters, SortBy};
pub use refresh::RefreshTask;
pub use source::{
    CatalogLoad, CatalogOrigin, CatalogSource, EndpointSource, SheetSource, StaticSource,
};
pub use store::{CatalogSnapshot, CatalogStore, DEFAULT_RELATED_LIMIT, NO_PRODUCTS_MESSAGE};

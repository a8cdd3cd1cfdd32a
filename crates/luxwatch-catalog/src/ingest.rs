//! Sheet export → product list, with the static catalog as the floor.

use luxwatch_core::Product;

use crate::client::SheetsClient;
use crate::csv::{parse_csv_line, parse_header};
use crate::error::CatalogError;
use crate::fallback::fallback_catalog;
use crate::mapping::map_row;

/// Result of one ingestion attempt. Always carries a product list.
#[derive(Debug, Clone, PartialEq)]
pub struct IngestOutcome {
    pub products: Vec<Product>,
    /// Why the fallback catalog was served, if it was.
    pub fallback_reason: Option<String>,
}

impl IngestOutcome {
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.fallback_reason.is_some()
    }
}

/// Parses a full CSV export into products.
///
/// Blank lines are dropped before anything else, so row indices (and the
/// synthetic ids derived from them) count non-blank lines only.
///
/// # Errors
///
/// - [`CatalogError::EmptyBody`] if the text is empty or whitespace.
/// - [`CatalogError::TooFewLines`] if there is no data row after the header.
pub fn parse_catalog_csv(text: &str) -> Result<Vec<Product>, CatalogError> {
    if text.trim().is_empty() {
        return Err(CatalogError::EmptyBody);
    }

    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.len() < 2 {
        return Err(CatalogError::TooFewLines { lines: lines.len() });
    }

    let header_len = parse_header(lines[0]).len();
    let mut products = Vec::with_capacity(lines.len() - 1);

    for (row_index, line) in lines.iter().enumerate().skip(1) {
        let values = parse_csv_line(line);
        if values.len() < header_len {
            tracing::debug!(
                row_index,
                fields = values.len(),
                expected = header_len,
                "skipping short CSV row"
            );
            continue;
        }
        products.push(map_row(&values, row_index));
    }

    Ok(products)
}

/// Fetches and parses the sheet at `url`, surfacing every failure.
///
/// # Errors
///
/// Any [`CatalogError`] from the fetch or the parse.
pub async fn try_ingest_catalog(
    client: &SheetsClient,
    url: &str,
) -> Result<Vec<Product>, CatalogError> {
    let text = client.fetch_csv(url).await?;
    let products = parse_catalog_csv(&text)?;
    tracing::info!(count = products.len(), "parsed products from sheet");
    Ok(products)
}

/// Fetches and parses the sheet at `url`, serving the fallback catalog on
/// any failure. Never errors.
pub async fn ingest_catalog(client: &SheetsClient, url: &str) -> IngestOutcome {
    match try_ingest_catalog(client, url).await {
        Ok(products) => IngestOutcome {
            products,
            fallback_reason: None,
        },
        Err(e) => {
            tracing::warn!(url, error = %e, "sheet ingestion failed; serving fallback catalog");
            IngestOutcome {
                products: fallback_catalog(),
                fallback_reason: Some(e.to_string()),
            }
        }
    }
}

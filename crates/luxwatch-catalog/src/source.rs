//! Where a catalog load comes from.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use luxwatch_core::{AppConfig, Product};
use serde::Serialize;

use crate::client::SheetsClient;
use crate::error::CatalogError;
use crate::fallback::fallback_catalog;
use crate::ingest::ingest_catalog;
use crate::payload::CatalogPayload;

/// Which path produced the products in a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogOrigin {
    /// Parsed from the sheet export.
    Live,
    /// The built-in catalog, served because ingestion failed.
    Fallback,
    /// Decoded from the internal products endpoint.
    Endpoint,
}

/// One completed load. Sources never fail; problems surface as `advisory`.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogLoad {
    pub products: Vec<Product>,
    pub origin: CatalogOrigin,
    pub advisory: Option<String>,
}

pub type LoadFuture<'a> = Pin<Box<dyn Future<Output = CatalogLoad> + Send + 'a>>;

/// A producer of catalog loads, polled by [`crate::store::CatalogStore::refresh`].
pub trait CatalogSource: Send + Sync {
    fn load(&self) -> LoadFuture<'_>;

    /// Short label for logs.
    fn name(&self) -> &'static str;
}

/// Reads the published sheet, degrading to the built-in catalog.
pub struct SheetSource {
    client: SheetsClient,
    url: String,
}

impl SheetSource {
    #[must_use]
    pub fn new(client: SheetsClient, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, CatalogError> {
        let client = SheetsClient::new(config.request_timeout_secs, &config.user_agent)?;
        Ok(Self::new(client, config.sheet_url.clone()))
    }
}

impl CatalogSource for SheetSource {
    fn load(&self) -> LoadFuture<'_> {
        Box::pin(async move {
            let outcome = ingest_catalog(&self.client, &self.url).await;
            let origin = if outcome.is_fallback() {
                CatalogOrigin::Fallback
            } else {
                CatalogOrigin::Live
            };
            CatalogLoad {
                products: outcome.products,
                origin,
                advisory: outcome.fallback_reason,
            }
        })
    }

    fn name(&self) -> &'static str {
        "sheet"
    }
}

/// Reads the internal products endpoint. Any transport or decode failure
/// yields an empty load, which the store reports as "no products".
pub struct EndpointSource {
    client: reqwest::Client,
    url: String,
}

impl EndpointSource {
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the HTTP client cannot be built.
    pub fn new(url: impl Into<String>, timeout_secs: u64) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    async fn fetch(&self) -> Result<CatalogPayload, CatalogError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }
        let body = response.text().await?;
        CatalogPayload::parse(&body)
    }
}

impl CatalogSource for EndpointSource {
    fn load(&self) -> LoadFuture<'_> {
        Box::pin(async move {
            match self.fetch().await {
                Ok(payload) => {
                    let origin = if payload.using_fallback() {
                        CatalogOrigin::Fallback
                    } else {
                        CatalogOrigin::Endpoint
                    };
                    let advisory = payload.error().map(str::to_owned);
                    CatalogLoad {
                        products: payload.into_products(),
                        origin,
                        advisory,
                    }
                }
                Err(e) => {
                    tracing::warn!(url = %self.url, error = %e, "products endpoint fetch failed");
                    CatalogLoad {
                        products: Vec::new(),
                        origin: CatalogOrigin::Endpoint,
                        advisory: None,
                    }
                }
            }
        })
    }

    fn name(&self) -> &'static str {
        "endpoint"
    }
}

/// Serves a fixed product list. Used for offline runs and tests.
pub struct StaticSource {
    products: Vec<Product>,
    origin: CatalogOrigin,
    advisory: Option<String>,
}

impl StaticSource {
    #[must_use]
    pub fn live(products: Vec<Product>) -> Self {
        Self {
            products,
            origin: CatalogOrigin::Live,
            advisory: None,
        }
    }

    /// The built-in catalog, flagged as a fallback load.
    #[must_use]
    pub fn fallback(reason: impl Into<String>) -> Self {
        Self {
            products: fallback_catalog(),
            origin: CatalogOrigin::Fallback,
            advisory: Some(reason.into()),
        }
    }
}

impl CatalogSource for StaticSource {
    fn load(&self) -> LoadFuture<'_> {
        let load = CatalogLoad {
            products: self.products.clone(),
            origin: self.origin,
            advisory: self.advisory.clone(),
        };
        Box::pin(async move { load })
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

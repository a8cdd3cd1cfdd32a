//! Wire shape of the internal `/api/products` endpoint.

use luxwatch_core::Product;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Body of `GET /api/products`.
///
/// A healthy live load is a bare array. When the sheet could not be read the
/// endpoint answers with an object carrying the fallback products and the
/// reason, so the storefront can show its advisory banner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CatalogPayload {
    Products(Vec<Product>),
    Fallback(FallbackPayload),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FallbackPayload {
    pub products: Vec<Product>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub using_mock_data: bool,
}

impl CatalogPayload {
    /// Decodes either payload shape.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Deserialize`] if the body matches neither shape.
    pub fn parse(body: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(body).map_err(|source| CatalogError::Deserialize {
            context: "catalog payload".to_owned(),
            source,
        })
    }

    /// Builds the payload the endpoint serves for a given load.
    #[must_use]
    pub fn from_load(products: Vec<Product>, fallback_reason: Option<String>) -> Self {
        match fallback_reason {
            None => Self::Products(products),
            Some(error) => Self::Fallback(FallbackPayload {
                products,
                error: Some(error),
                using_mock_data: true,
            }),
        }
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        match self {
            Self::Products(products) => products,
            Self::Fallback(fb) => &fb.products,
        }
    }

    #[must_use]
    pub fn into_products(self) -> Vec<Product> {
        match self {
            Self::Products(products) => products,
            Self::Fallback(fb) => fb.products,
        }
    }

    #[must_use]
    pub fn using_fallback(&self) -> bool {
        matches!(self, Self::Fallback(fb) if fb.using_mock_data)
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Products(_) => None,
            Self::Fallback(fb) => fb.error.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::fallback_catalog;

    #[test]
    fn bare_array_parses_as_live() {
        let body = serde_json::to_string(&fallback_catalog()).unwrap();
        let payload = CatalogPayload::parse(&body).unwrap();
        assert!(!payload.using_fallback());
        assert_eq!(payload.error(), None);
        assert_eq!(payload.into_products().len(), 6);
    }

    #[test]
    fn object_shape_parses_as_fallback() {
        let payload = CatalogPayload::from_load(fallback_catalog(), Some("boom".to_owned()));
        let body = serde_json::to_string(&payload).unwrap();
        assert!(body.contains("\"usingMockData\":true"));

        let parsed = CatalogPayload::parse(&body).unwrap();
        assert!(parsed.using_fallback());
        assert_eq!(parsed.error(), Some("boom"));
        assert_eq!(parsed.products().len(), 6);
    }

    #[test]
    fn empty_array_is_valid() {
        let payload = CatalogPayload::parse("[]").unwrap();
        assert!(payload.products().is_empty());
    }

    #[test]
    fn garbage_is_a_deserialize_error() {
        let err = CatalogPayload::parse(r#"{"nope":1}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Deserialize { .. }), "got: {err:?}");
    }

    #[test]
    fn prices_serialize_as_json_numbers() {
        let body = serde_json::to_value(CatalogPayload::from_load(fallback_catalog(), None)).unwrap();
        let first = &body[0];
        assert!(first["price"].is_number());
        assert_eq!(first["type"], "Diving");
        assert_eq!(first["stockQuantity"], 3);
    }
}

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use luxwatch_catalog::{CatalogPayload, FacetOptions, PriceRange, DEFAULT_RELATED_LIMIT};
use luxwatch_core::Product;
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

const MAX_RELATED_LIMIT: usize = 24;

#[derive(Debug, Deserialize)]
pub(super) struct RelatedQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub(super) struct FacetsData {
    #[serde(flatten)]
    facets: FacetOptions,
    price_range: Option<PriceRange>,
}

pub(super) fn normalize_related_limit(limit: Option<usize>) -> usize {
    limit
        .unwrap_or(DEFAULT_RELATED_LIMIT)
        .clamp(1, MAX_RELATED_LIMIT)
}

/// Storefront catalog feed. A live catalog is a bare array; a fallback
/// catalog is wrapped with the failure reason and `usingMockData`.
pub(super) async fn list_products(State(state): State<AppState>) -> Json<CatalogPayload> {
    let mut snapshot = state.catalog.snapshot();
    if snapshot.loaded_at.is_none() {
        snapshot = state.catalog.refresh().await;
    }

    let fallback_reason = snapshot.using_fallback().then(|| {
        snapshot
            .error
            .clone()
            .unwrap_or_else(|| "catalog unavailable".to_owned())
    });
    Json(CatalogPayload::from_load(
        snapshot.products.clone(),
        fallback_reason,
    ))
}

pub(super) async fn get_product(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Product>>, ApiError> {
    let product = state.catalog.get_by_id(&id).ok_or_else(|| {
        ApiError::new(
            req_id.0.clone(),
            "not_found",
            format!("product {id} not found"),
        )
    })?;

    Ok(Json(ApiResponse {
        data: product,
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn list_related_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<String>,
    Query(query): Query<RelatedQuery>,
) -> Result<Json<ApiResponse<Vec<Product>>>, ApiError> {
    let product = state.catalog.get_by_id(&id).ok_or_else(|| {
        ApiError::new(
            req_id.0.clone(),
            "not_found",
            format!("product {id} not found"),
        )
    })?;

    let data = state
        .catalog
        .related(&product, normalize_related_limit(query.limit));

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn get_facets(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<FacetsData>> {
    Json(ApiResponse {
        data: FacetsData {
            facets: state.catalog.facet_options(),
            price_range: state.catalog.price_bounds(),
        },
        meta: ResponseMeta::new(req_id.0),
    })
}

//! Request handlers. Each one delegates to [`InventoryService`] and lets
//! [`ApiError`] pick the status code for a failure.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::ApiError;
use crate::domain::{Product, ProductCreate, ProductId, ProductReplace};
use crate::inventory::InventoryService;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// `true` keeps only products with stock left.
    pub available: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct Confirmation {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[instrument(skip(service))]
pub async fn list_products(
    State(service): State<InventoryService>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = if params.available.unwrap_or(false) {
        service.list_available().await?
    } else {
        service.list_all().await?
    };
    Ok(Json(products))
}

#[instrument(skip(service))]
pub async fn get_product(
    State(service): State<InventoryService>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>, ApiError> {
    Ok(Json(service.get_by_id(id).await?))
}

#[instrument(skip(service, request))]
pub async fn create_product(
    State(service): State<InventoryService>,
    Json(request): Json<ProductCreate>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let product = service.create(request).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Full replace: fields missing from the body are reset to zero values.
#[instrument(skip(service, request))]
pub async fn update_product(
    State(service): State<InventoryService>,
    Path(id): Path<ProductId>,
    Json(request): Json<ProductReplace>,
) -> Result<Json<Product>, ApiError> {
    Ok(Json(service.update(id, request).await?))
}

#[instrument(skip(service))]
pub async fn delete_product(
    State(service): State<InventoryService>,
    Path(id): Path<ProductId>,
) -> Result<Json<Confirmation>, ApiError> {
    service.delete(id).await?;
    Ok(Json(Confirmation {
        message: format!("Product with ID#{id} was deleted."),
    }))
}

#[instrument(skip(service))]
pub async fn purchase_product(
    State(service): State<InventoryService>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>, ApiError> {
    Ok(Json(service.purchase(id).await?))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

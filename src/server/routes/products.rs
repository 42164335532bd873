use axum::{
    Json,
    extract::{Path, Query, State},
};
use ecomoving_schema::Product;
use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogQuery, ProductSource};
use crate::error::SiteError;
use crate::server::router::SiteState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRequest {
    /// Image the editor had selected; becomes the main image.
    #[serde(default)]
    pub active_image: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub id: String,
    pub table: ProductSource,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub id: String,
    pub message: &'static str,
}

pub async fn list_products(
    State(state): State<SiteState>,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<Vec<Product>>, SiteError> {
    Ok(Json(state.catalog.list(query).await?))
}

pub async fn get_product(
    State(state): State<SiteState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, SiteError> {
    Ok(Json(state.catalog.get(&id).await?))
}

/// Replaces the in-memory product; nothing is written remotely.
pub async fn update_product(
    State(state): State<SiteState>,
    Path(id): Path<String>,
    Json(mut product): Json<Product>,
) -> Result<Json<Product>, SiteError> {
    product.id = id;
    Ok(Json(state.catalog.update(product).await?))
}

pub async fn save_product(
    State(state): State<SiteState>,
    Path(id): Path<String>,
    body: Option<Json<SaveRequest>>,
) -> Result<Json<SaveResponse>, SiteError> {
    let active_image = body.and_then(|Json(req)| req.active_image);
    let table = state.catalog.save(&id, active_image).await?;
    Ok(Json(SaveResponse {
        id,
        table,
        message: "Producto actualizado exitosamente en el catálogo",
    }))
}

pub async fn delete_product(
    State(state): State<SiteState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, SiteError> {
    state.catalog.remove(&id).await?;
    Ok(Json(DeleteResponse {
        id,
        message: "Producto eliminado del catálogo",
    }))
}

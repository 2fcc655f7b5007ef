use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::error;

use crate::connector::api::{ApiError, Container};
use crate::domain::Product;

/// Absent fields deserialize to empty strings so they reach the
/// required-field validation and surface as the usual 500 JSON body
/// instead of a framework-level rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateProductRequest {
    pub name: String,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
}

/// `GET /products`: every product, newest first.
pub async fn list_products(
    State(container): State<Arc<Container>>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = container
        .list_products_use_case()
        .execute()
        .await
        .map_err(|e| {
            error!("Failed to list products: {e}");
            ApiError::internal("Error fetching products", Some(e.to_string()))
        })?;

    Ok(Json(products))
}

/// `POST /products`: create one product, respond 201 with the stored
/// record. Validation failures surface as 500 exactly like storage
/// failures; there is no dedicated 400 path.
pub async fn create_product(
    State(container): State<Arc<Container>>,
    Json(request): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let product = container
        .create_product_use_case()
        .execute(
            request.name,
            request.title,
            request.description,
            request.image_url,
        )
        .await
        .map_err(|e| {
            error!("Failed to add product: {e}");
            ApiError::internal("Error adding product", Some(e.to_string()))
        })?;

    Ok((StatusCode::CREATED, Json(product)))
}

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use super::container::Container;
use super::controller::{chat, create_product, generate_content, list_products};

/// Wire the HTTP surface: product CRUD plus the two AI proxy routes.
pub fn build_router(container: Arc<Container>) -> Router {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/ai/generate-content", post(generate_content))
        .route("/ai/chat", post(chat))
        .with_state(container)
}

use async_trait::async_trait;

use crate::domain::{DomainError, Product};

/// Persistence for product records.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a single product. No cross-record consistency is required.
    async fn insert(&self, product: &Product) -> Result<(), DomainError>;

    /// All products, newest first (`created_at` descending). Unbounded.
    async fn list(&self) -> Result<Vec<Product>, DomainError>;
}

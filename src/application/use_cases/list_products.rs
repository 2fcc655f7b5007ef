use std::sync::Arc;

use crate::application::ProductRepository;
use crate::domain::{DomainError, Product};

pub struct ListProductsUseCase {
    products: Arc<dyn ProductRepository>,
}

impl ListProductsUseCase {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    /// All products, newest first. Ordering is delegated to the adapter.
    pub async fn execute(&self) -> Result<Vec<Product>, DomainError> {
        self.products.list().await
    }
}

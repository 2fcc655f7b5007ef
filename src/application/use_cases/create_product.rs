use std::sync::Arc;

use crate::application::ProductRepository;
use crate::domain::{DomainError, Product};

pub struct CreateProductUseCase {
    products: Arc<dyn ProductRepository>,
}

impl CreateProductUseCase {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    /// Validate, persist, and return the stored record with its generated
    /// `id`, `rating`, and `created_at`.
    pub async fn execute(
        &self,
        name: String,
        title: String,
        description: String,
        image_url: Option<String>,
    ) -> Result<Product, DomainError> {
        let product = Product::new(name, title, description, image_url)?;
        self.products.insert(&product).await?;
        Ok(product)
    }
}

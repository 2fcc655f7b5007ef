use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;

use crate::application::{
    CreateProductUseCase, GenerateContentUseCase, ListProductsUseCase, MarketingChatUseCase,
    ProductRepository, TextGenerator,
};
use crate::{DuckdbProductRepository, HfInferenceClient, MockTextGenerator};

pub struct ContainerConfig {
    pub data_dir: String,
    /// Keep products in an in-memory database instead of a file.
    pub memory_storage: bool,
    /// Serve canned model output instead of calling the inference API.
    /// No credential is required in this mode.
    pub mock_model: bool,
}

/// Owns the adapters and hands out per-request use cases. Shared across
/// requests as the axum state; holds no mutable state of its own.
pub struct Container {
    products: Arc<dyn ProductRepository>,
    generator: Arc<dyn TextGenerator>,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let products: Arc<dyn ProductRepository> = if config.memory_storage {
            debug!("Using in-memory product storage");
            Arc::new(DuckdbProductRepository::in_memory()?)
        } else {
            let db_path = PathBuf::from(&config.data_dir).join("shopsmith.duckdb");
            debug!("Using DuckDB product storage at {:?}", db_path);
            Arc::new(DuckdbProductRepository::new(&db_path)?)
        };

        let generator: Arc<dyn TextGenerator> = if config.mock_model {
            debug!("Using mock text generator");
            Arc::new(MockTextGenerator::new())
        } else {
            Arc::new(
                HfInferenceClient::from_env()
                    .context("HUGGINGFACE_API_KEY must be set (or pass --mock-model)")?,
            )
        };

        Ok(Self {
            products,
            generator,
        })
    }

    /// Assemble from explicit parts. Lets tests inject scripted or failing
    /// collaborators behind the same wiring the binary uses.
    pub fn with_parts(
        products: Arc<dyn ProductRepository>,
        generator: Arc<dyn TextGenerator>,
    ) -> Self {
        Self {
            products,
            generator,
        }
    }

    pub fn list_products_use_case(&self) -> ListProductsUseCase {
        ListProductsUseCase::new(self.products.clone())
    }

    pub fn create_product_use_case(&self) -> CreateProductUseCase {
        CreateProductUseCase::new(self.products.clone())
    }

    pub fn generate_content_use_case(&self) -> GenerateContentUseCase {
        GenerateContentUseCase::new(self.generator.clone())
    }

    pub fn chat_use_case(&self) -> MarketingChatUseCase {
        MarketingChatUseCase::new(self.generator.clone())
    }
}

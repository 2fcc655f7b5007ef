pub mod application;
pub mod connector;
pub mod domain;

pub use application::{
    CreateProductUseCase, GenerateContentUseCase, ListProductsUseCase, MarketingChatUseCase,
    ProductRepository, TextGenerator, DEFAULT_REPLY_MARKER,
};

pub use connector::{
    build_router, ApiError, Container, ContainerConfig, DuckdbProductRepository,
    HfInferenceClient, MockTextGenerator,
};

pub use domain::{ChatReply, DomainError, GeneratedContent, Product};

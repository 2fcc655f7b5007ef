mod duckdb_product_repository;
mod hf_inference_client;
mod mock_text_generator;

pub use duckdb_product_repository::*;
pub use hf_inference_client::*;
pub use mock_text_generator::*;

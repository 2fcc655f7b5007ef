mod chat;
mod create_product;
mod generate_content;
mod list_products;

pub use chat::*;
pub use create_product::*;
pub use generate_content::*;
pub use list_products::*;

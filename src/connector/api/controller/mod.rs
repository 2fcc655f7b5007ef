mod ai_controller;
mod product_controller;

pub use ai_controller::*;
pub use product_controller::*;

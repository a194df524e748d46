pub mod config;
pub mod deck;
pub mod errors;
pub mod handlers;
pub mod includes;
pub mod models;
pub mod render;
pub mod scroll_spy;
pub mod templates_structs;

pub mod deck_config;
pub mod deck_source;
pub mod slide;

pub mod api;
pub mod config;
pub mod error;
pub mod pagination;
pub mod render;
pub mod suggest;
pub mod upstream;

pub mod config;
pub mod loader;
pub mod models;
pub mod render;
pub mod search;
pub mod session;

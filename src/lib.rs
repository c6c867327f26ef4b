//! Terminal portfolio viewer built around a paginated project carousel.

pub mod app;
pub mod config;
pub mod core;
pub mod error;
pub mod ui;

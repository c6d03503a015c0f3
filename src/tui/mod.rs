//! Interactive storefront terminal UI.
//!
//! This module provides a bubbletea-rs application showing the product
//! grid, the product modal with its sales report, the staged toast review
//! feed, the sorted review list, and the review detail view with
//! previous/next and swipe navigation.

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;
mod storage;

pub use app::StorefrontApp;
pub use storage::{
    AppSettings, set_app_settings, set_data_provider, set_initial_terminal_size,
    set_telemetry_sink,
};

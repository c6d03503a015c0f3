//! Shared test utilities.

pub mod storefront_server;

//! Storefront catalogue data: products, reviews, and the sales report.
//!
//! This module owns the domain models, their wire deserialisation, and the
//! [`DataProvider`] seam through which the rest of the crate loads data. Each
//! fetch resolves once or fails with a [`FetchError`]; nothing is cached.

pub mod error;
pub mod markup;
pub mod models;
pub mod provider;

pub use error::FetchError;
pub use markup::ImageFallback;
pub use models::{DateRange, Product, ProductListing, Review, ReviewFeed, SalesReport};
pub use provider::{DataProvider, Endpoints, HttpDataProvider};

#[cfg(test)]
pub use provider::MockDataProvider;

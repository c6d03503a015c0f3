//! Data providers for the storefront endpoints.
//!
//! The [`DataProvider`] trait is the seam between the presentation layer and
//! the remote endpoints. Each operation resolves once or fails once; there is
//! no cache and no retry. [`HttpDataProvider`] implements it with reqwest,
//! and tests substitute the mockall-generated `MockDataProvider`.

mod error_mapping;
mod http;

pub use http::{
    DEFAULT_PRODUCTS_URL, DEFAULT_REQUEST_TIMEOUT, DEFAULT_SALES_REPORT_URL, Endpoints,
    HttpDataProvider,
};

use async_trait::async_trait;

use super::error::FetchError;
use super::models::{DateRange, ProductListing, ReviewFeed, SalesReport};

/// Capability supplying the three storefront data operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DataProvider: Send + Sync {
    /// Fetch the product listing.
    async fn products(&self) -> Result<ProductListing, FetchError>;

    /// Fetch the sales report for one product over an inclusive date range.
    async fn sales_report(
        &self,
        product_id: u64,
        range: &DateRange,
    ) -> Result<SalesReport, FetchError>;

    /// Fetch the review feed in endpoint order.
    async fn reviews(&self) -> Result<ReviewFeed, FetchError>;
}

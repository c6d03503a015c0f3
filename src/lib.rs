//! Storefront library crate: product catalogue, sales reports, and a staged
//! review feed.
//!
//! The library fetches products, per-product sales reports, and customer
//! reviews over HTTP, orders the reviews for display, discloses the newest
//! ones through a timed reveal, and pages through them in a detail view.
//! The [`tui`] module wires these pieces into an interactive terminal
//! storefront.

pub mod catalog;
pub mod config;
pub mod logging;
pub mod reviews;
pub mod telemetry;
pub mod tui;

pub use catalog::{
    DataProvider, DateRange, Endpoints, FetchError, HttpDataProvider, Product, ProductListing,
    Review, ReviewFeed, SalesReport,
};
pub use config::{OperationMode, StorefrontConfig};
pub use reviews::{DetailNavigator, RevealScheduler, SortOrder, sort_reviews};

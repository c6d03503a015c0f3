//! reqwest-backed implementation of [`DataProvider`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use super::DataProvider;
use super::error_mapping::{map_decode_error, map_status_error, map_transport_error};
use crate::catalog::error::FetchError;
use crate::catalog::models::{
    ApiProductListing, ApiReviewFeed, DateRange, ProductListing, ReviewFeed, SalesReport,
};

/// Default products endpoint.
pub const DEFAULT_PRODUCTS_URL: &str = "https://getproducts-l5dreh5uiq-uc.a.run.app";

/// Default sales report endpoint.
pub const DEFAULT_SALES_REPORT_URL: &str = "https://getsalesreport-l5dreh5uiq-uc.a.run.app";

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Validated endpoint URLs for the three data operations.
///
/// The reviews endpoint has no public default; fetching reviews without one
/// fails with [`FetchError::MissingEndpoint`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    products: Url,
    reviews: Option<Url>,
    sales_report: Url,
}

impl Endpoints {
    /// Parses and validates endpoint URLs.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidUrl`] when any URL fails to parse or does
    /// not use HTTP(S).
    ///
    /// # Examples
    ///
    /// ```
    /// use storefront::catalog::Endpoints;
    ///
    /// let endpoints = Endpoints::parse(
    ///     "https://shop.example/products",
    ///     Some("https://shop.example/reviews"),
    ///     "https://shop.example/sales",
    /// )
    /// .expect("valid endpoints");
    /// assert_eq!(endpoints.products().as_str(), "https://shop.example/products");
    ///
    /// assert!(Endpoints::parse("not a url", None, "https://shop.example/sales").is_err());
    /// ```
    pub fn parse(
        products: &str,
        reviews: Option<&str>,
        sales_report: &str,
    ) -> Result<Self, FetchError> {
        Ok(Self {
            products: parse_endpoint(products)?,
            reviews: reviews
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(parse_endpoint)
                .transpose()?,
            sales_report: parse_endpoint(sales_report)?,
        })
    }

    /// Returns the public default endpoints, without a reviews endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidUrl`] if the built-in defaults fail to
    /// parse.
    pub fn defaults() -> Result<Self, FetchError> {
        Self::parse(DEFAULT_PRODUCTS_URL, None, DEFAULT_SALES_REPORT_URL)
    }

    /// Products endpoint.
    #[must_use]
    pub const fn products(&self) -> &Url {
        &self.products
    }

    /// Reviews endpoint, when configured.
    #[must_use]
    pub const fn reviews(&self) -> Option<&Url> {
        self.reviews.as_ref()
    }

    /// Sales report endpoint.
    #[must_use]
    pub const fn sales_report(&self) -> &Url {
        &self.sales_report
    }
}

fn parse_endpoint(value: &str) -> Result<Url, FetchError> {
    let url = Url::parse(value.trim())
        .map_err(|error| FetchError::InvalidUrl(format!("{value}: {error}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(FetchError::InvalidUrl(format!(
            "{value}: unsupported scheme '{}'",
            url.scheme()
        )));
    }
    Ok(url)
}

/// Data provider calling the storefront endpoints over HTTP.
#[derive(Debug, Clone)]
pub struct HttpDataProvider {
    client: Client,
    endpoints: Endpoints,
}

impl HttpDataProvider {
    /// Creates a provider with the given endpoints and per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Configuration`] when the HTTP client cannot be
    /// constructed.
    pub fn new(endpoints: Endpoints, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| FetchError::Configuration {
                message: format!("failed to configure HTTP client: {error}"),
            })?;
        Ok(Self { client, endpoints })
    }

    /// Returns the configured endpoints.
    #[must_use]
    pub const fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        operation: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<T, FetchError> {
        let response = request
            .send()
            .await
            .map_err(|error| map_transport_error(operation, &error))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|error| map_transport_error(operation, &error))?;

        if !status.is_success() {
            tracing::warn!(operation, status = status.as_u16(), "request failed");
            return Err(map_status_error(operation, status, &body));
        }

        serde_json::from_str(&body).map_err(|error| map_decode_error(operation, &error))
    }
}

#[async_trait]
impl DataProvider for HttpDataProvider {
    async fn products(&self) -> Result<ProductListing, FetchError> {
        tracing::debug!(url = %self.endpoints.products, "fetching products");
        let request = self.client.get(self.endpoints.products.clone());
        let listing: ApiProductListing = self.get_json("products", request).await?;
        Ok(listing.into())
    }

    async fn sales_report(
        &self,
        product_id: u64,
        range: &DateRange,
    ) -> Result<SalesReport, FetchError> {
        tracing::debug!(product_id, %range, "fetching sales report");
        let request = self
            .client
            .get(self.endpoints.sales_report.clone())
            .query(&[
                ("start_date", range.start().to_string()),
                ("end_date", range.end().to_string()),
                ("product_no", product_id.to_string()),
            ]);
        let report: serde_json::Value = self.get_json("sales report", request).await?;
        Ok(SalesReport(report))
    }

    async fn reviews(&self) -> Result<ReviewFeed, FetchError> {
        let url = self
            .endpoints
            .reviews
            .clone()
            .ok_or_else(|| FetchError::MissingEndpoint {
                resource: "reviews".to_owned(),
            })?;
        tracing::debug!(%url, "fetching reviews");
        let feed: ApiReviewFeed = self.get_json("reviews", self.client.get(url)).await?;
        Ok(feed.into())
    }
}

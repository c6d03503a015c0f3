//! Error types exposed by the catalogue data layer.

use thiserror::Error;

/// Errors surfaced while configuring or calling the storefront endpoints.
///
/// Each variant is a terminal, read-only value carrying a human-readable
/// message. There is no retry policy attached to any variant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// No endpoint is configured for the requested resource.
    #[error("{resource} endpoint is not configured")]
    MissingEndpoint {
        /// Resource whose endpoint is missing (e.g. `reviews`).
        resource: String,
    },

    /// An endpoint URL could not be parsed.
    #[error("endpoint URL is invalid: {0}")]
    InvalidUrl(String),

    /// A product number was required but not supplied.
    #[error("product number is required (use --product-no or -p)")]
    MissingProductNumber,

    /// The requested date range is malformed or inverted.
    #[error("invalid date range: {message}")]
    InvalidDateRange {
        /// Details about the rejected range.
        message: String,
    },

    /// Networking failed while calling an endpoint.
    #[error("network error while loading {operation}: {message}")]
    Network {
        /// Operation being performed (e.g. `products`).
        operation: String,
        /// Transport-level error detail.
        message: String,
    },

    /// The endpoint answered with a non-success status.
    #[error("{operation} request failed with status {status}: {message}")]
    Status {
        /// Operation being performed.
        operation: String,
        /// HTTP status code.
        status: u16,
        /// Message extracted from the response body.
        message: String,
    },

    /// The response body did not match the expected shape.
    #[error("could not decode {operation} response: {message}")]
    Decode {
        /// Operation being performed.
        operation: String,
        /// Decoder error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}

impl FetchError {
    /// Returns true when the failure happened before any request was sent.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::MissingEndpoint { .. }
                | Self::InvalidUrl(_)
                | Self::MissingProductNumber
                | Self::InvalidDateRange { .. }
                | Self::Configuration { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::FetchError;

    #[rstest]
    #[case::missing_endpoint(
        FetchError::MissingEndpoint { resource: "reviews".to_owned() },
        "reviews endpoint is not configured"
    )]
    #[case::status(
        FetchError::Status {
            operation: "products".to_owned(),
            status: 503,
            message: "unavailable".to_owned(),
        },
        "products request failed with status 503: unavailable"
    )]
    #[case::decode(
        FetchError::Decode {
            operation: "reviews".to_owned(),
            message: "missing field `articles`".to_owned(),
        },
        "could not decode reviews response: missing field `articles`"
    )]
    fn display_messages_are_human_readable(#[case] error: FetchError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    fn configuration_failures_are_classified() {
        assert!(FetchError::MissingProductNumber.is_configuration());
        assert!(FetchError::InvalidUrl("nope".to_owned()).is_configuration());
        assert!(
            !FetchError::Network {
                operation: "products".to_owned(),
                message: "timed out".to_owned(),
            }
            .is_configuration()
        );
    }
}

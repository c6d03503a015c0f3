//! Helpers for the rich-text review bodies.
//!
//! Review bodies arrive as HTML fragments. The storefront never renders the
//! markup; it only needs the first embedded image (used as the toast
//! thumbnail) and a plain-text preview. Both are pure functions so they can
//! be tested without a rendering environment.

use std::sync::LazyLock;

use regex::Regex;

/// Placeholder used when neither the review nor the catalogue has an image.
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/40";

static IMG_SRC: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r#"(?is)<img\b[^>]*?\ssrc\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s>]+))"#).ok()
});

static TAG: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").ok());

/// Returns the `src` of the first `<img>` element in `html`, if any.
///
/// Empty `src` attributes are treated as absent.
///
/// # Examples
///
/// ```
/// use storefront::catalog::markup::first_image;
///
/// let html = r#"<p>Great!</p><img alt="x" src="https://cdn.example/a.jpg">"#;
/// assert_eq!(first_image(html).as_deref(), Some("https://cdn.example/a.jpg"));
/// assert_eq!(first_image("<p>no pictures</p>"), None);
/// ```
#[must_use]
pub fn first_image(html: &str) -> Option<String> {
    let pattern = IMG_SRC.as_ref()?;
    pattern
        .captures_iter(html)
        .filter_map(|captures| {
            captures
                .get(1)
                .or_else(|| captures.get(2))
                .or_else(|| captures.get(3))
        })
        .map(|found| found.as_str().trim())
        .find(|src| !src.is_empty())
        .map(ToOwned::to_owned)
}

/// Strips tags and collapses whitespace, decoding the handful of entities
/// that commonly appear in review bodies.
#[must_use]
pub fn plain_text(html: &str) -> String {
    let without_tags = TAG
        .as_ref()
        .map_or_else(|| html.to_owned(), |tag| tag.replace_all(html, " ").into_owned());

    let decoded = without_tags
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");

    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Resolves the image shown when a review has no embedded picture.
///
/// Preference order: the catalogue image (the first product's detail image
/// once products have loaded), then the configured placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFallback {
    catalogue_image: Option<String>,
    placeholder: String,
}

impl Default for ImageFallback {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEHOLDER_IMAGE)
    }
}

impl ImageFallback {
    /// Creates a fallback with only a placeholder.
    #[must_use]
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            catalogue_image: None,
            placeholder: placeholder.into(),
        }
    }

    /// Records the catalogue image to prefer over the placeholder.
    pub fn set_catalogue_image(&mut self, image: Option<String>) {
        self.catalogue_image = image.filter(|value| !value.trim().is_empty());
    }

    /// Returns `image` when present, otherwise the best fallback.
    #[must_use]
    pub fn resolve<'a>(&'a self, image: Option<&'a str>) -> &'a str {
        image
            .or(self.catalogue_image.as_deref())
            .unwrap_or(self.placeholder.as_str())
    }
}

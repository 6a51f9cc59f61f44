//! Error taxonomy for locator resolution and upstream fetching.
//!
//! Distinct causes are kept apart here; the HTTP boundary in `serve` maps them
//! to status codes and generic client-facing messages.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The URL's reference segment does not match `<tractate>.<page>[.<section>]`.
    #[error("invalid reference format: {0}")]
    InvalidRef(String),
    /// Both the direct and the `"Bavli "`-prefixed upstream lookups failed.
    #[error("text not found upstream: {0}")]
    NotFound(String),
    /// The input (or configured base) URL could not be parsed at all.
    #[error("malformed url: {0}")]
    UrlParse(#[from] url::ParseError),
    /// Transport-level failure talking to the upstream API.
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
    /// Upstream returned a body that is not the expected JSON shape.
    #[error("malformed upstream response: {0}")]
    MalformedBody(#[from] serde_json::Error),
}

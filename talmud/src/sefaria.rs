//! Sefaria text API client with the `"Bavli "`-prefix fallback.
//!
//! HTTP access goes through the [`HttpClient`] trait so unit tests can inject
//! canned replies; [`ReqwestHttpClient`] is the production implementation.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use crate::error::FetchError;

/// Default Sefaria texts endpoint. The reference is appended as one
/// percent-encoded path segment.
pub const DEFAULT_BASE_URL: &str = "https://www.sefaria.org/api/texts/";

/// Upstream request timeout. The upstream service configures none and leans on
/// platform defaults; an explicit bound keeps a stuck fetch from pinning the
/// request forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// One upstream reply: whether the status was a success, plus the raw body.
/// The body of a failed reply is kept only for logging.
pub struct HttpReply {
    pub ok: bool,
    pub body: String,
}

/// Issues a GET and returns the reply. Abstraction for testing.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: &str) -> Result<HttpReply, FetchError>;
}

/// Reqwest-based HTTP client.
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("client builder with only a timeout cannot fail");
        Self { client }
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str) -> Result<HttpReply, FetchError> {
        let response = self.client.get(url).send().await?;
        let ok = response.status().is_success();
        let body = response.text().await?;
        Ok(HttpReply { ok, body })
    }
}

/// Bilingual text response from Sefaria. `he` and `text` are indexed in
/// parallel; nothing guarantees equal lengths.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TextResponse {
    #[serde(default)]
    pub he: Vec<String>,
    #[serde(default)]
    pub text: Vec<String>,
}

/// Client for the Sefaria texts endpoint.
pub struct SefariaClient {
    base: Url,
    http: Arc<dyn HttpClient>,
}

impl SefariaClient {
    /// Creates a client against [`DEFAULT_BASE_URL`] with a reqwest transport.
    pub fn new() -> Self {
        Self {
            base: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
            http: Arc::new(ReqwestHttpClient::new()),
        }
    }

    /// Creates a client with a custom base URL and transport (tests, local mirrors).
    pub fn with_client(base_url: &str, http: Arc<dyn HttpClient>) -> Result<Self, FetchError> {
        Ok(Self {
            base: Url::parse(base_url)?,
            http,
        })
    }

    /// Custom base URL with the default reqwest transport.
    pub fn with_base_url(base_url: &str) -> Result<Self, FetchError> {
        Self::with_client(base_url, Arc::new(ReqwestHttpClient::new()))
    }

    /// Appends the reference to the base as one percent-encoded path segment.
    /// The reference is client-controlled; `push` encodes `/` (and never
    /// re-parses), so it cannot rewrite the host or climb out of the base —
    /// a bogus reference just 404s upstream into `NotFound`.
    fn reference_url(&self, reference: &str) -> Result<Url, FetchError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .push(reference);
        Ok(url)
    }

    /// Fetches `"<tractate>.<page>"`, retrying once with the `"Bavli "` prefix
    /// when the direct reference is not found under that name upstream.
    pub async fn fetch_reference(
        &self,
        tractate: &str,
        page: &str,
    ) -> Result<TextResponse, FetchError> {
        let reference = format!("{tractate}.{page}");
        let reply = self.http.get(self.reference_url(&reference)?.as_str()).await?;
        let reply = if reply.ok {
            reply
        } else {
            tracing::debug!("direct reference {reference} failed, retrying with Bavli prefix");
            let fallback = format!("Bavli {reference}");
            let retry = self.http.get(self.reference_url(&fallback)?.as_str()).await?;
            if retry.ok {
                retry
            } else {
                return Err(FetchError::NotFound(reference));
            }
        };
        let text: TextResponse = serde_json::from_str(&reply.body)?;
        Ok(text)
    }
}

impl Default for SefariaClient {
    fn default() -> Self {
        Self::new()
    }
}

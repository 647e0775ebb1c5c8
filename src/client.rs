//! Client construction and request dispatch.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::{
    ApiError, ImageResponse, NewsResponse, PlacesResponse, Result, SearchRequest, SearchResponse,
    VideoResponse,
};

/// Production endpoint of the Serper API.
pub const DEFAULT_BASE_URL: &str = "https://google.serper.dev";

/// Timeout applied to the default transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const API_KEY_HEADER: &str = "X-API-KEY";
const FALLBACK_ERROR_MESSAGE: &str = "unknown error";

/// Search verticals exposed by the API, each with its own endpoint path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Vertical {
    Search,
    Images,
    News,
    Videos,
    Places,
}

impl Vertical {
    fn path(self) -> &'static str {
        match self {
            Self::Search => "/search",
            Self::Images => "/images",
            Self::News => "/news",
            Self::Videos => "/videos",
            Self::Places => "/places",
        }
    }
}

/// Error envelope returned by the API with status >= 400.
#[derive(Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    message: String,
}

/// Common interface over the five vertical operations.
///
/// Implemented by [`Client`]; embedding applications can implement it
/// themselves to mock the API in their own tests.
#[async_trait]
pub trait SearchApi: Send + Sync {
    /// Performs a web search.
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse>;

    /// Performs an image search.
    async fn images(&self, request: &SearchRequest) -> Result<ImageResponse>;

    /// Performs a news search.
    async fn news(&self, request: &SearchRequest) -> Result<NewsResponse>;

    /// Performs a video search.
    async fn videos(&self, request: &SearchRequest) -> Result<VideoResponse>;

    /// Performs a places search.
    async fn places(&self, request: &SearchRequest) -> Result<PlacesResponse>;
}

/// Builder for [`Client`].
///
/// Overrides are applied in call order and later calls win on conflicting
/// settings. In particular, [`http_client`](Self::http_client) replaces the
/// transport and discards a previously set timeout, while a
/// [`timeout`](Self::timeout) set afterwards is applied per-request on the
/// replacement transport.
pub struct ClientBuilder {
    api_key: String,
    base_url: String,
    http: Option<reqwest::Client>,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            http: None,
            timeout: None,
        }
    }

    /// Sets a custom base URL (e.g., for a proxy).
    ///
    /// An empty string is ignored and the current value kept.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        if !base_url.is_empty() {
            self.base_url = base_url;
        }
        self
    }

    /// Replaces the transport with a custom `reqwest::Client`.
    ///
    /// The replacement's own configuration governs from here on, so any
    /// timeout set earlier on this builder is discarded.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self.timeout = None;
        self
    }

    /// Sets the request timeout on the current transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the client, validating the base URL.
    pub fn build(self) -> Result<Client> {
        Url::parse(&self.base_url)?;
        let base_url = self.base_url.trim_end_matches('/').to_string();

        let (http, request_timeout) = match self.http {
            // Custom transport; a timeout set after it applies per-request.
            Some(http) => (http, self.timeout),
            None => {
                let http = reqwest::Client::builder()
                    .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
                    .build()?;
                (http, None)
            }
        };

        Ok(Client {
            api_key: self.api_key,
            base_url,
            http,
            request_timeout,
        })
    }
}

/// Typed client for the Serper search API.
///
/// Holds the API key, the base URL and the HTTP transport. Immutable after
/// construction and usable from any number of concurrent tasks; each
/// operation is a single stateless POST round trip.
#[derive(Debug)]
pub struct Client {
    api_key: String,
    base_url: String,
    http: reqwest::Client,
    request_timeout: Option<Duration>,
}

impl Client {
    /// Creates a client with default transport and base URL.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder(api_key).build()
    }

    /// Returns a builder for a client with custom configuration.
    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(api_key)
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Performs a web search.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        self.execute(Vertical::Search, request).await
    }

    /// Performs an image search.
    pub async fn images(&self, request: &SearchRequest) -> Result<ImageResponse> {
        self.execute(Vertical::Images, request).await
    }

    /// Performs a news search.
    pub async fn news(&self, request: &SearchRequest) -> Result<NewsResponse> {
        self.execute(Vertical::News, request).await
    }

    /// Performs a video search.
    pub async fn videos(&self, request: &SearchRequest) -> Result<VideoResponse> {
        self.execute(Vertical::Videos, request).await
    }

    /// Performs a places search.
    pub async fn places(&self, request: &SearchRequest) -> Result<PlacesResponse> {
        self.execute(Vertical::Places, request).await
    }

    /// Issues one POST to the vertical's endpoint and decodes the result.
    ///
    /// A status >= 400 is classified into [`ApiError`] from the service's
    /// error envelope; transport and decode failures propagate as their own
    /// error kinds.
    async fn execute<T: DeserializeOwned>(
        &self,
        vertical: Vertical,
        request: &SearchRequest,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, vertical.path());
        let payload = serde_json::to_vec(request)?;

        debug!(path = vertical.path(), "dispatching search request");

        let mut http_request = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .body(payload);
        if let Some(timeout) = self.request_timeout {
            http_request = http_request.timeout(timeout);
        }

        let response = http_request.send().await?;
        let status = response.status().as_u16();

        if status >= 400 {
            let body = response.bytes().await?;
            let message = serde_json::from_slice::<ErrorEnvelope>(&body)
                .ok()
                .map(|envelope| envelope.message)
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string());
            warn!(status, error = %message, "search request rejected");
            return Err(ApiError {
                status_code: status,
                message,
            }
            .into());
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl SearchApi for Client {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        Client::search(self, request).await
    }

    async fn images(&self, request: &SearchRequest) -> Result<ImageResponse> {
        Client::images(self, request).await
    }

    async fn news(&self, request: &SearchRequest) -> Result<NewsResponse> {
        Client::news(self, request).await
    }

    async fn videos(&self, request: &SearchRequest) -> Result<VideoResponse> {
        Client::videos(self, request).await
    }

    async fn places(&self, request: &SearchRequest) -> Result<PlacesResponse> {
        Client::places(self, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientError;

    #[test]
    fn test_vertical_paths() {
        assert_eq!(Vertical::Search.path(), "/search");
        assert_eq!(Vertical::Images.path(), "/images");
        assert_eq!(Vertical::News.path(), "/news");
        assert_eq!(Vertical::Videos.path(), "/videos");
        assert_eq!(Vertical::Places.path(), "/places");
    }

    #[test]
    fn test_client_new_defaults() {
        let client = Client::new("test-key").unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
        assert!(client.request_timeout.is_none());
    }

    #[test]
    fn test_builder_custom_base_url() {
        let client = Client::builder("key")
            .base_url("https://proxy.example.com")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://proxy.example.com");
    }

    #[test]
    fn test_builder_empty_base_url_is_ignored() {
        let client = Client::builder("key").base_url("").build().unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let client = Client::builder("key")
            .base_url("https://proxy.example.com/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://proxy.example.com");
    }

    #[test]
    fn test_builder_invalid_base_url() {
        let err = Client::builder("key")
            .base_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, ClientError::UrlParse(_)));
    }

    #[test]
    fn test_timeout_then_http_client_last_wins() {
        // The replacement transport governs; the earlier timeout is dropped.
        let custom = reqwest::Client::new();
        let client = Client::builder("key")
            .timeout(Duration::from_secs(5))
            .http_client(custom)
            .build()
            .unwrap();
        assert!(client.request_timeout.is_none());
    }

    #[test]
    fn test_http_client_then_timeout_last_wins() {
        let custom = reqwest::Client::new();
        let client = Client::builder("key")
            .http_client(custom)
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(client.request_timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_timeout_on_default_transport() {
        // With no custom transport the timeout lands on the transport itself,
        // not on individual requests.
        let client = Client::builder("key")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert!(client.request_timeout.is_none());
    }
}

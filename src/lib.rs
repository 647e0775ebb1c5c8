//! # serper-client
//!
//! A typed async client for the [Serper](https://serper.dev) search API.
//!
//! This library covers the five search verticals exposed by the API:
//!
//! - Web search (organic results, knowledge graph, related searches)
//! - Images
//! - News
//! - Videos
//! - Places
//!
//! Every operation is a single stateless HTTPS round trip; retries, caching
//! and rate limiting are left to the embedding application.
//!
//! ## Example
//!
//! ```rust,no_run
//! use serper_client::{Client, SearchRequest};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = Client::new(std::env::var("SERPER_API_KEY")?)?;
//!
//!     let request = SearchRequest::new("rust programming").with_gl("us");
//!     let response = client.search(&request).await?;
//!
//!     for result in &response.organic {
//!         println!("{}. {} - {}", result.position, result.title, result.link);
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod request;
mod response;

pub use client::{Client, ClientBuilder, SearchApi, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{ApiError, ClientError, Result};
pub use request::SearchRequest;
pub use response::{
    BaseResponse, ImageResponse, ImageResult, KnowledgeGraph, NewsResponse, NewsResult,
    OrganicResult, Parameters, PeopleAlsoAsk, PlaceResult, PlacesResponse, RelatedSearch,
    SearchResponse, Sitelink, VideoResponse, VideoResult,
};

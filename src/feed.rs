//! Remote listing feed access.
//!
//! The feed is an opaque HTTP JSON provider: one GET returning an array of
//! listings. Any transport error, non-2xx status, or undecodable body is a
//! fetch failure; the availability resolver recovers from all of them.

use async_trait::async_trait;

use crate::model::Listing;

/// Default endpoint of the hosted listing feed.
pub const FEED_URL: &str = "https://api.npoint.io/433d2b54b3c3bb324e23";

/// Why a fetch attempt failed.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FeedError {
    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("undecodable feed body: {0}")]
    Decode(String),
}

/// Source of current listings.
///
/// [`HttpFeed`] is the production implementation; tests substitute stub
/// sources to drive the failure paths deterministically.
#[async_trait]
pub trait ListingSource: Send + Sync {
    async fn fetch_listings(&self) -> Result<Vec<Listing>, FeedError>;
}

/// HTTP implementation of [`ListingSource`].
pub struct HttpFeed {
    client: reqwest::Client,
    url: String,
}

impl HttpFeed {
    /// Feed client against the default hosted endpoint.
    pub fn new() -> Self {
        Self::with_url(FEED_URL)
    }

    /// Feed client against a custom endpoint (self-hosted feeds).
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

impl Default for HttpFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ListingSource for HttpFeed {
    async fn fetch_listings(&self) -> Result<Vec<Listing>, FeedError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FeedError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FeedError::Status(response.status().as_u16()));
        }

        response
            .json::<Vec<Listing>>()
            .await
            .map_err(|e| FeedError::Decode(e.to_string()))
    }
}

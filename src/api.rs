use log::debug;
use reqwest::Client;
use thiserror::Error;
use url::Url;

use crate::{
    config::Config,
    post::{Post, PostsResponse},
};

/// The one failure mode of the view: the initial retrieval rejected.
/// Every cause (connect error, bad status, undecodable body) collapses into
/// the same user-facing message; the source only shows up in debug logs.
#[derive(Debug, Error)]
#[error("Failed to fetch posts")]
pub struct FetchError {
    #[source]
    source: Option<reqwest::Error>,
}

impl From<reqwest::Error> for FetchError {
    fn from(source: reqwest::Error) -> Self {
        Self {
            source: Some(source),
        }
    }
}

#[cfg(test)]
impl FetchError {
    /// State-machine tests reject the fetch without opening a socket.
    pub(crate) fn stub() -> Self {
        Self { source: None }
    }
}

#[derive(Debug, Clone)]
pub struct PostsClient {
    client: Client,
    endpoint: Url,
}

impl PostsClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            endpoint: config.endpoint().clone(),
        }
    }

    /// One-shot retrieval of the full post collection. Issued once per mount,
    /// never retried.
    pub async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError> {
        debug!("GET {}", self.endpoint);
        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await?
            .error_for_status()?;
        let payload: PostsResponse = response.json().await?;
        debug!("fetched {} posts", payload.posts.len());
        Ok(payload.posts)
    }
}

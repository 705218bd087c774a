//! Record source composing the file cache and the REST client.

use crate::cache::FileCache;
use crate::client::{ClientError, RestClient};
use crate::types::Browser;
use std::future::Future;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("client error: {0}")]
    Client(#[from] ClientError),

    #[error("catalog API returned no browsers")]
    Empty,
}

/// Cache-first browser source.
///
/// Serves the cached catalog while it is fresh, otherwise fetches from the
/// API and refreshes the cache.
pub struct BrowserSource {
    cache: FileCache,
    cache_path: PathBuf,
    client: RestClient,
}

impl BrowserSource {
    pub fn new(cache: FileCache, cache_path: PathBuf, client: RestClient) -> Self {
        Self {
            cache,
            cache_path,
            client,
        }
    }

    pub async fn fetch(&self) -> Result<Vec<Browser>, SourceError> {
        match self.cache.read::<Vec<Browser>>(&self.cache_path) {
            Ok(Some(browsers)) if !browsers.is_empty() => {
                debug!(count = browsers.len(), "catalog served from cache");
                return Ok(browsers);
            }
            Ok(_) => {}
            Err(err) => warn!(%err, "cache read failed"),
        }

        let browsers = self.client.browsers().await?;
        if browsers.is_empty() {
            return Err(SourceError::Empty);
        }

        if let Err(err) = self.cache.write(&self.cache_path, &browsers) {
            warn!(%err, "failed to refresh catalog cache");
        }

        info!(count = browsers.len(), "catalog fetched from API");
        Ok(browsers)
    }

    /// Adapts the source into the one-shot fetch future the search engine
    /// consumes.
    pub fn into_fetch(self) -> impl Future<Output = Result<Vec<Browser>, SourceError>> + Send {
        async move { self.fetch().await }
    }
}

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

use crate::error::{CatalogError, Result};
use crate::types::RawProduct;

/// Port for retrieving a data source payload.
#[async_trait]
pub trait PayloadFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Value>;
}

/// reqwest-backed fetcher used outside of tests.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PayloadFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Value> {
        debug!(%url, "fetching catalog payload");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CatalogError::Load {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(CatalogError::Load {
                url: url.to_string(),
                message: format!("unexpected status {}", response.status()),
            });
        }

        response.json::<Value>().await.map_err(|e| CatalogError::Load {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

/// Memoizes data source payloads by location for the lifetime of the
/// session.
///
/// Failures are not cached, so a later call may retry. A payload that is
/// not an array is stored as an empty list rather than an error.
pub struct FetchCache {
    fetcher: Arc<dyn PayloadFetcher>,
    entries: Mutex<HashMap<String, Arc<Vec<RawProduct>>>>,
}

impl FetchCache {
    pub fn new(fetcher: Arc<dyn PayloadFetcher>) -> Self {
        Self {
            fetcher,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// The raw record list for a location, fetching it on first use.
    pub async fn get(&self, url: &str) -> Result<Arc<Vec<RawProduct>>> {
        {
            let entries = self.entries.lock().unwrap();
            if let Some(records) = entries.get(url) {
                debug!(%url, "fetch cache hit");
                return Ok(records.clone());
            }
        }

        let payload = self.fetcher.fetch(url).await?;
        let records = match payload {
            Value::Array(items) => items,
            _ => {
                warn!(%url, "payload is not an array, storing empty list");
                Vec::new()
            }
        };
        let records = Arc::new(records);

        let mut entries = self.entries.lock().unwrap();
        entries.insert(url.to_string(), records.clone());
        Ok(records)
    }
}

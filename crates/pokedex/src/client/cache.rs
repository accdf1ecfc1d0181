//! URL-keyed memoization of upstream responses
//!
//! Keys are the exact request URL strings: no normalization, no TTL, no
//! size bound. Only successful responses are stored, so a failed URL is
//! retried on its next request. The cache lives as long as its owner keeps
//! the `Arc`; tests build a fresh one per case.

use super::transport::Transport;
use crate::error::Error;
use log::{debug, trace};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

pub struct FetchCache {
    transport: Arc<dyn Transport>,
    entries: RwLock<HashMap<String, Arc<Value>>>,
}

impl FetchCache {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Stored payload for `url`, fetching and storing it on first use.
    ///
    /// No lock is held while the request is in flight, so concurrent misses
    /// on one URL may both hit the network; the later write wins.
    pub async fn get_or_fetch(&self, url: &str) -> Result<Arc<Value>, Error> {
        let cached = self.entries.read().await.get(url).cloned();
        if let Some(value) = cached {
            trace!("cache hit: {url}");
            return Ok(value);
        }

        debug!("cache miss: {url}");
        let value = Arc::new(self.transport.get_json(url).await?);

        self.entries
            .write()
            .await
            .insert(url.to_string(), Arc::clone(&value));

        Ok(value)
    }

    /// Typed view of [`FetchCache::get_or_fetch`]
    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, Error> {
        let value = self.get_or_fetch(url).await?;
        let typed = T::deserialize(value.as_ref())
            .map_err(|e| Error::Decode(format!("{url}: {e}")))?;
        Ok(typed)
    }

    pub async fn contains(&self, url: &str) -> bool {
        self.entries.read().await.contains_key(url)
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Drop every entry
    pub async fn clear(&self) {
        let mut entries = self.entries.write().await;
        debug!("clearing {} cached responses", entries.len());
        entries.clear();
    }
}

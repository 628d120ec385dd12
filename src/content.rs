//! Prefix-scoped cache over the backend key/value content store.
//!
//! The overlay lets marketing copy be edited without code changes: every
//! read site supplies an explicit fallback, so a missing key or an
//! unreachable backend is never an error. Writes go through to the backend
//! first and only touch the cache once the backend confirms the store.

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::backend::ContentStore;
use crate::backend::errors::BackendResult;
use crate::domain::content::ContentEntry;
use crate::domain::types::ContentKey;

pub struct ContentOverlay<B> {
    backend: B,
    prefix: String,
    /// `None` until the one-time automatic load has run.
    cache: RwLock<Option<HashMap<String, String>>>,
}

impl<B: ContentStore> ContentOverlay<B> {
    pub fn new(backend: B, prefix: impl Into<String>) -> Self {
        Self {
            backend,
            prefix: prefix.into(),
            cache: RwLock::new(None),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Runs the automatic load exactly once per overlay instance. A failed
    /// load degrades to an empty mapping so reads fall back; it is not
    /// retried until an explicit [`refresh`](Self::refresh).
    async fn ensure_loaded(&self) {
        if self.cache.read().await.is_some() {
            return;
        }
        let mut guard = self.cache.write().await;
        if guard.is_some() {
            return;
        }
        let loaded = match self.backend.load_content(&self.prefix).await {
            Ok(items) => items.into_iter().map(|e| (e.key, e.value)).collect(),
            Err(err) => {
                log::warn!("Failed to load content for prefix {}: {err}", self.prefix);
                HashMap::new()
            }
        };
        *guard = Some(loaded);
    }

    /// Returns the stored value for `key`, or `fallback` when absent.
    pub async fn get(&self, key: &str, fallback: &str) -> String {
        self.ensure_loaded().await;
        self.cache
            .read()
            .await
            .as_ref()
            .and_then(|map| map.get(key))
            .cloned()
            .unwrap_or_else(|| fallback.to_string())
    }

    /// Write-through update. On backend failure the cache is left untouched
    /// and the error is returned; on success the cached key is updated with
    /// the document the backend stored.
    pub async fn set(&self, key: &ContentKey, value: &str) -> BackendResult<ContentEntry> {
        let entry = ContentEntry::new(key, value);
        let stored = self.backend.store_content(&entry).await?;
        self.ensure_loaded().await;
        let mut guard = self.cache.write().await;
        guard
            .get_or_insert_with(HashMap::new)
            .insert(stored.key.clone(), stored.value.clone());
        Ok(stored)
    }

    /// Reloads the prefix mapping, replacing the cache wholesale. Last
    /// fetch wins; nothing is merged. On failure the previous cache stays.
    pub async fn refresh(&self) -> BackendResult<()> {
        let items = self.backend.load_content(&self.prefix).await?;
        let mut guard = self.cache.write().await;
        *guard = Some(items.into_iter().map(|e| (e.key, e.value)).collect());
        Ok(())
    }
}

//! reqwest implementation of the backend REST contract.

use reqwest::StatusCode;
use serde::Deserialize;

use crate::backend::errors::{BackendError, BackendResult};
use crate::backend::{ContentStore, PropertyCatalog};
use crate::domain::content::ContentEntry;
use crate::domain::property::PropertyListing;
use crate::forms::properties::FilterCriteria;

/// HTTP client for the content/catalog backend. Cheap to clone; the inner
/// reqwest client is reference-counted.
#[derive(Clone)]
pub struct HttpBackend {
    base_url: Option<String>,
    client: reqwest::Client,
}

/// Envelope used by the backend for collection responses.
#[derive(Deserialize)]
struct Items<T> {
    #[serde(default)]
    items: Vec<T>,
}

impl HttpBackend {
    /// `base_url` is the backend host, e.g. `https://api.example.com`. When
    /// `None` the site runs in degraded mode: content falls back to the
    /// hard-coded copy and listings render empty.
    pub fn new(base_url: Option<String>) -> Self {
        let base_url = base_url
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.base_url.is_some()
    }

    fn url(&self, path: &str) -> BackendResult<String> {
        match &self.base_url {
            Some(base) => Ok(format!("{base}{path}")),
            None => Err(BackendError::Unconfigured),
        }
    }
}

impl ContentStore for HttpBackend {
    async fn load_content(&self, prefix: &str) -> BackendResult<Vec<ContentEntry>> {
        if !self.is_configured() {
            return Ok(Vec::new());
        }
        let url = self.url("/api/content")?;
        let response = self
            .client
            .get(url)
            .query(&[("prefix", prefix)])
            .send()
            .await?
            .error_for_status()?;
        let envelope: Items<ContentEntry> = response.json().await?;
        Ok(envelope.items)
    }

    async fn store_content(&self, entry: &ContentEntry) -> BackendResult<ContentEntry> {
        let url = self.url("/api/content")?;
        let response = self
            .client
            .post(url)
            .json(entry)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}

impl PropertyCatalog for HttpBackend {
    async fn list_properties(
        &self,
        filters: &FilterCriteria,
        limit: usize,
    ) -> BackendResult<Vec<PropertyListing>> {
        if !self.is_configured() {
            return Ok(Vec::new());
        }
        let url = self.url("/api/properties")?;
        let mut query = vec![("limit".to_string(), limit.to_string())];
        query.extend(filters.to_query_pairs());
        let response = self
            .client
            .get(url)
            .query(&query)
            .send()
            .await?
            .error_for_status()?;
        let envelope: Items<PropertyListing> = response.json().await?;
        Ok(envelope.items)
    }

    async fn get_property(&self, id: &str) -> BackendResult<PropertyListing> {
        let url = self.url(&format!("/api/properties/{id}"))?;
        let response = self.client.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(BackendError::NotFound);
        }
        let response = response.error_for_status()?;
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_envelope_decodes_with_and_without_items() {
        let envelope: Items<ContentEntry> = serde_json::from_str("{}").unwrap();
        assert!(envelope.items.is_empty());

        let envelope: Items<ContentEntry> =
            serde_json::from_str(r#"{"items":[{"key":"homepage.brand","value":"Aurum"}]}"#)
                .unwrap();
        assert_eq!(envelope.items[0].key, "homepage.brand");
        assert_eq!(envelope.items[0].value, "Aurum");
    }

    #[test]
    fn base_url_is_normalized() {
        let backend = HttpBackend::new(Some("http://localhost:8000/".to_string()));
        assert_eq!(
            backend.url("/api/content").unwrap(),
            "http://localhost:8000/api/content"
        );
    }

    #[test]
    fn blank_base_url_counts_as_unconfigured() {
        let backend = HttpBackend::new(Some(String::new()));
        assert!(!backend.is_configured());
        assert!(matches!(
            backend.url("/api/content"),
            Err(BackendError::Unconfigured)
        ));
    }

    #[actix_web::test]
    async fn unconfigured_backend_degrades_to_empty_reads() {
        let backend = HttpBackend::new(None);
        let content = backend.load_content("homepage.").await.unwrap();
        assert!(content.is_empty());
        let listings = backend
            .list_properties(&FilterCriteria::default(), 30)
            .await
            .unwrap();
        assert!(listings.is_empty());
    }

    #[actix_web::test]
    async fn unconfigured_backend_rejects_writes_and_detail() {
        let backend = HttpBackend::new(None);
        let entry = ContentEntry {
            key: "homepage.brand".to_string(),
            value: "Aurum".to_string(),
        };
        assert!(matches!(
            backend.store_content(&entry).await,
            Err(BackendError::Unconfigured)
        ));
        assert!(matches!(
            backend.get_property("99").await,
            Err(BackendError::Unconfigured)
        ));
    }
}

//! Clients for the external content/catalog backend.
//!
//! The backend service owns storage and querying; this layer only speaks its
//! REST contract. Traits keep the service layer testable without a network.

use crate::backend::errors::BackendResult;
use crate::domain::content::ContentEntry;
use crate::domain::property::PropertyListing;
use crate::forms::properties::FilterCriteria;

pub mod errors;
pub mod http;

pub use http::HttpBackend;

/// Read/write access to the key/value content store.
pub trait ContentStore {
    /// Fetches every entry whose key starts with `prefix`. An unconfigured
    /// backend yields an empty mapping, not an error.
    fn load_content(
        &self,
        prefix: &str,
    ) -> impl Future<Output = BackendResult<Vec<ContentEntry>>>;

    /// Write-through create-or-overwrite of a single entry. Returns the
    /// stored document as the backend persisted it.
    fn store_content(
        &self,
        entry: &ContentEntry,
    ) -> impl Future<Output = BackendResult<ContentEntry>>;
}

/// Read access to the property catalog.
pub trait PropertyCatalog {
    /// Lists up to `limit` records matching `filters`. Empty filter fields
    /// are omitted from the backend query entirely. An unconfigured backend
    /// yields an empty list.
    fn list_properties(
        &self,
        filters: &FilterCriteria,
        limit: usize,
    ) -> impl Future<Output = BackendResult<Vec<PropertyListing>>>;

    /// Fetches one record by id. A backend 404 maps to
    /// [`errors::BackendError::NotFound`].
    fn get_property(
        &self,
        id: &str,
    ) -> impl Future<Output = BackendResult<PropertyListing>>;
}

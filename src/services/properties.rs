//! Listings and detail page services.

use crate::backend::PropertyCatalog;
use crate::backend::errors::BackendError;
use crate::dto::properties::{PropertiesPageData, PropertyCard, PropertyPageData};
use crate::forms::properties::FilterCriteria;
use crate::services::{ServiceError, ServiceResult};

/// Matches the original catalog page size.
pub const DEFAULT_LISTING_LIMIT: usize = 30;

/// Fetches the filtered listings grid. Filtering itself is delegated to the
/// backend query string; this layer only decides which fields to send.
pub async fn load_properties_page<C>(
    catalog: &C,
    filters: FilterCriteria,
) -> ServiceResult<PropertiesPageData>
where
    C: PropertyCatalog,
{
    let listings = catalog
        .list_properties(&filters, DEFAULT_LISTING_LIMIT)
        .await
        .map_err(|err| {
            log::error!("Failed to list properties: {err}");
            ServiceError::from(err)
        })?;

    let query_string = filters.to_query_string();

    Ok(PropertiesPageData {
        properties: listings.iter().map(PropertyCard::from).collect(),
        filters,
        query_string,
    })
}

/// Fetches one record for the detail page. A backend 404 becomes
/// [`ServiceError::NotFound`] so the route can render the not-found state.
pub async fn load_property_page<C>(catalog: &C, id: &str) -> ServiceResult<PropertyPageData>
where
    C: PropertyCatalog,
{
    let listing = catalog.get_property(id).await.map_err(|err| match err {
        BackendError::NotFound => ServiceError::NotFound,
        other => {
            log::error!("Failed to load property {id}: {other}");
            ServiceError::from(other)
        }
    })?;

    Ok(PropertyPageData::from(listing))
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::backend::errors::BackendResult;
    use crate::domain::property::PropertyListing;

    #[derive(Default)]
    struct FakeCatalog {
        listings: Vec<PropertyListing>,
        fail_with_status: Option<u16>,
        seen_queries: Mutex<Vec<Vec<(String, String)>>>,
    }

    impl PropertyCatalog for FakeCatalog {
        async fn list_properties(
            &self,
            filters: &FilterCriteria,
            _limit: usize,
        ) -> BackendResult<Vec<PropertyListing>> {
            if let Some(status) = self.fail_with_status {
                return Err(BackendError::Status(status));
            }
            self.seen_queries
                .lock()
                .unwrap()
                .push(filters.to_query_pairs());
            Ok(self.listings.clone())
        }

        async fn get_property(&self, id: &str) -> BackendResult<PropertyListing> {
            if let Some(status) = self.fail_with_status {
                return Err(BackendError::Status(status));
            }
            self.listings
                .iter()
                .find(|l| l.id == id)
                .cloned()
                .ok_or(BackendError::NotFound)
        }
    }

    fn rumah_a() -> PropertyListing {
        PropertyListing {
            id: "1".to_string(),
            title: "Rumah A".to_string(),
            price: 1_500_000_000,
            location: "BSD".to_string(),
            ..PropertyListing::default()
        }
    }

    #[actix_web::test]
    async fn listings_page_renders_one_card_with_formatted_price() {
        let catalog = FakeCatalog {
            listings: vec![rumah_a()],
            ..FakeCatalog::default()
        };
        let page = load_properties_page(&catalog, FilterCriteria::default())
            .await
            .unwrap();

        assert_eq!(page.properties.len(), 1);
        assert_eq!(page.properties[0].title, "Rumah A");
        assert_eq!(page.properties[0].price_formatted, "Rp 1.500.000.000");
        assert_eq!(page.properties[0].location, "BSD");
        assert_eq!(page.query_string, "");
    }

    #[actix_web::test]
    async fn filters_pass_through_without_empty_fields() {
        let catalog = FakeCatalog::default();
        let filters = FilterCriteria {
            location: Some("BSD".to_string()),
            bedrooms: Some(3),
            ..FilterCriteria::default()
        };
        load_properties_page(&catalog, filters).await.unwrap();

        let seen = catalog.seen_queries.lock().unwrap();
        assert_eq!(
            seen[0],
            vec![
                ("location".to_string(), "BSD".to_string()),
                ("bedrooms".to_string(), "3".to_string()),
            ]
        );
    }

    #[actix_web::test]
    async fn missing_record_maps_to_not_found() {
        let catalog = FakeCatalog::default();
        let result = load_property_page(&catalog, "99").await;
        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[actix_web::test]
    async fn backend_failure_surfaces_as_backend_error() {
        let catalog = FakeCatalog {
            fail_with_status: Some(502),
            ..FakeCatalog::default()
        };
        let result = load_properties_page(&catalog, FilterCriteria::default()).await;
        assert!(matches!(
            result,
            Err(ServiceError::Backend(BackendError::Status(502)))
        ));
    }
}

//! Data rendered by the listings and detail templates.

use serde::Serialize;

use crate::domain::property::PropertyListing;
use crate::forms::properties::FilterCriteria;

/// One card on the listings grid.
#[derive(Debug, Serialize, PartialEq)]
pub struct PropertyCard {
    pub id: String,
    pub title: String,
    pub price_formatted: String,
    pub location: String,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
}

impl From<&PropertyListing> for PropertyCard {
    fn from(listing: &PropertyListing) -> Self {
        Self {
            id: listing.id.clone(),
            title: listing.title.clone(),
            price_formatted: format_rupiah(listing.price),
            location: listing.location.clone(),
            bedrooms: listing.bedrooms,
            bathrooms: listing.bathrooms,
        }
    }
}

/// Data required to render the listings page.
#[derive(Debug, Serialize)]
pub struct PropertiesPageData {
    pub properties: Vec<PropertyCard>,
    /// Criteria echoed back into the filter form.
    pub filters: FilterCriteria,
    /// Query string reproducing the current search, for shareable links.
    pub query_string: String,
}

/// Data required to render the detail page.
#[derive(Debug, Serialize)]
pub struct PropertyPageData {
    pub id: String,
    pub title: String,
    pub price_formatted: String,
    pub location: String,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub building_area_sqm: Option<f64>,
    pub land_area_sqm: Option<f64>,
    pub description: String,
}

impl From<PropertyListing> for PropertyPageData {
    fn from(listing: PropertyListing) -> Self {
        Self {
            id: listing.id,
            title: listing.title,
            price_formatted: format_rupiah(listing.price),
            location: listing.location,
            bedrooms: listing.bedrooms,
            bathrooms: listing.bathrooms,
            building_area_sqm: listing.building_area_sqm,
            land_area_sqm: listing.land_area_sqm,
            description: listing
                .description
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| "Tidak ada deskripsi.".to_string()),
        }
    }
}

/// Formats a whole-rupiah amount the id-ID way: `Rp 1.500.000.000`.
pub fn format_rupiah(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut groups = Vec::new();
    let mut end = digits.len();
    while end > 3 {
        groups.push(&digits[end - 3..end]);
        end -= 3;
    }
    groups.push(&digits[..end]);
    groups.reverse();
    let sign = if amount < 0 { "-" } else { "" };
    format!("Rp {sign}{}", groups.join("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_billions_with_dot_separators() {
        assert_eq!(format_rupiah(1_500_000_000), "Rp 1.500.000.000");
    }

    #[test]
    fn formats_small_amounts_without_separators() {
        assert_eq!(format_rupiah(0), "Rp 0");
        assert_eq!(format_rupiah(950), "Rp 950");
        assert_eq!(format_rupiah(1_000), "Rp 1.000");
    }

    #[test]
    fn card_carries_formatted_price() {
        let listing = PropertyListing {
            id: "1".to_string(),
            title: "Rumah A".to_string(),
            price: 1_500_000_000,
            location: "BSD".to_string(),
            ..PropertyListing::default()
        };
        let card = PropertyCard::from(&listing);
        assert_eq!(card.price_formatted, "Rp 1.500.000.000");
        assert_eq!(card.location, "BSD");
    }

    #[test]
    fn missing_description_gets_placeholder() {
        let listing = PropertyListing {
            id: "2".to_string(),
            title: "Kavling B".to_string(),
            price: 900_000_000,
            location: "Surabaya".to_string(),
            ..PropertyListing::default()
        };
        let page = PropertyPageData::from(listing);
        assert_eq!(page.description, "Tidak ada deskripsi.");
    }
}

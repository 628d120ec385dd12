//! Property catalog records exposed by the backend.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A single property record from the backend catalog. This layer never
/// mutates listings; it only holds request-scoped copies for rendering.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct PropertyListing {
    pub id: String,
    pub title: String,
    /// Price in whole rupiah, no minor units.
    pub price: i64,
    pub location: String,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub building_area_sqm: Option<f64>,
    pub land_area_sqm: Option<f64>,
    pub description: Option<String>,
}

/// Closed set of property types accepted by the catalog filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    House,
    Shophouse,
    Kavling,
}

impl PropertyType {
    pub const ALL: [PropertyType; 3] = [
        PropertyType::House,
        PropertyType::Shophouse,
        PropertyType::Kavling,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::House => "house",
            PropertyType::Shophouse => "shophouse",
            PropertyType::Kavling => "kavling",
        }
    }

    /// Label shown in the filter select.
    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::House => "Rumah",
            PropertyType::Shophouse => "Ruko/Shophouse",
            PropertyType::Kavling => "Kavling",
        }
    }
}

impl Display for PropertyType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "house" => Ok(PropertyType::House),
            "shophouse" => Ok(PropertyType::Shophouse),
            "kavling" => Ok(PropertyType::Kavling),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_type_round_trips_through_str() {
        for pt in PropertyType::ALL {
            assert_eq!(pt.as_str().parse::<PropertyType>(), Ok(pt));
        }
        assert!("villa".parse::<PropertyType>().is_err());
    }

    #[test]
    fn listing_deserializes_with_optional_fields_absent() {
        let listing: PropertyListing = serde_json::from_str(
            r#"{"id":"1","title":"Rumah A","price":1500000000,"location":"BSD"}"#,
        )
        .unwrap();
        assert_eq!(listing.price, 1_500_000_000);
        assert!(listing.bedrooms.is_none());
        assert!(listing.description.is_none());
    }
}

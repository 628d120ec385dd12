//! Catalog filter state mirrored to and from the URL query string.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::property::PropertyType;

/// Client-side filter state for the listings page. The URL query string is
/// the single source of truth: criteria parse from it and serialize back to
/// it, with empty fields omitted in both directions, so a shared link
/// reproduces the search.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_property_type"
    )]
    pub property_type: Option<PropertyType>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_value"
    )]
    pub location: Option<String>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_value"
    )]
    pub min_price: Option<i64>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_value"
    )]
    pub max_price: Option<i64>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_value"
    )]
    pub bedrooms: Option<u32>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Backend query parameters in contract order, with empty fields
    /// omitted entirely rather than sent as empty matches.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(property_type) = self.property_type {
            pairs.push(("type".to_string(), property_type.to_string()));
        }
        if let Some(location) = &self.location {
            pairs.push(("location".to_string(), location.clone()));
        }
        if let Some(min_price) = self.min_price {
            pairs.push(("min_price".to_string(), min_price.to_string()));
        }
        if let Some(max_price) = self.max_price {
            pairs.push(("max_price".to_string(), max_price.to_string()));
        }
        if let Some(bedrooms) = self.bedrooms {
            pairs.push(("bedrooms".to_string(), bedrooms.to_string()));
        }
        pairs
    }

    /// URL-encoded query string for shareable listing links. Empty criteria
    /// produce an empty string.
    pub fn to_query_string(&self) -> String {
        serde_html_form::to_string(self).unwrap_or_default()
    }

    pub fn from_query_str(query: &str) -> Result<Self, serde_html_form::de::Error> {
        serde_html_form::from_str(query)
    }
}

/// The query string is user-editable: absent, empty or malformed values
/// are dropped rather than failing the whole request.
fn lenient_value<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| value.parse().ok()))
}

/// Unknown type values are dropped rather than failing the whole query.
fn lenient_property_type<'de, D>(deserializer: D) -> Result<Option<PropertyType>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.as_deref().and_then(|value| value.trim().parse().ok()))
}

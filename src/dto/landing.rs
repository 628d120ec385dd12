//! Data rendered by the landing page template.

use serde::Serialize;

/// Navigation copy shared by every page's base template.
#[derive(Debug, Serialize)]
pub struct NavData {
    pub brand: String,
    pub koleksi: String,
    pub sorotan: String,
    pub kontak: String,
}

/// Every text the landing template renders, already resolved through the
/// content overlay with its hard-coded fallback.
#[derive(Debug, Serialize)]
pub struct LandingPageData {
    pub brand: String,
    pub hero_kicker: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_cta_primary: String,
    pub hero_cta_secondary: String,
    pub hero_spline_url: String,
    pub collections_title: String,
    pub collections_subtitle: String,
    pub featured_title: String,
    pub featured_subtitle: String,
    pub footer_title: String,
    pub footer_subtitle: String,
}

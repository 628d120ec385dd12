//! Landing page assembly.
//!
//! Every read goes through the overlay with an explicit fallback, so the
//! page renders fully even when the backend is unavailable or a key was
//! never written.

use crate::backend::ContentStore;
use crate::content::ContentOverlay;
use crate::domain::content::fallback;
use crate::dto::landing::{LandingPageData, NavData};

/// Resolves the navigation copy shared by every page.
pub async fn load_nav<B: ContentStore>(overlay: &ContentOverlay<B>) -> NavData {
    NavData {
        brand: overlay.get("homepage.brand", fallback::BRAND).await,
        koleksi: overlay
            .get("homepage.nav.koleksi", fallback::NAV_KOLEKSI)
            .await,
        sorotan: overlay
            .get("homepage.nav.sorotan", fallback::NAV_SOROTAN)
            .await,
        kontak: overlay
            .get("homepage.nav.kontak", fallback::NAV_KONTAK)
            .await,
    }
}

/// Resolves every text the landing template renders. Infallible: absence of
/// a value is not an error, it falls back.
pub async fn load_landing_page<B: ContentStore>(overlay: &ContentOverlay<B>) -> LandingPageData {
    LandingPageData {
        brand: overlay.get("homepage.brand", fallback::BRAND).await,
        hero_kicker: overlay
            .get("homepage.hero.kicker", fallback::HERO_KICKER)
            .await,
        hero_title: overlay
            .get("homepage.hero.title", fallback::HERO_TITLE)
            .await,
        hero_subtitle: overlay
            .get("homepage.hero.subtitle", fallback::HERO_SUBTITLE)
            .await,
        hero_cta_primary: overlay
            .get("homepage.hero.cta_primary", fallback::HERO_CTA_PRIMARY)
            .await,
        hero_cta_secondary: overlay
            .get("homepage.hero.cta_secondary", fallback::HERO_CTA_SECONDARY)
            .await,
        hero_spline_url: overlay
            .get("homepage.hero.spline_url", fallback::HERO_SPLINE_URL)
            .await,
        collections_title: overlay
            .get("homepage.collections.title", fallback::COLLECTIONS_TITLE)
            .await,
        collections_subtitle: overlay
            .get(
                "homepage.collections.subtitle",
                fallback::COLLECTIONS_SUBTITLE,
            )
            .await,
        featured_title: overlay
            .get("homepage.featured.title", fallback::FEATURED_TITLE)
            .await,
        featured_subtitle: overlay
            .get("homepage.featured.subtitle", fallback::FEATURED_SUBTITLE)
            .await,
        footer_title: overlay
            .get("homepage.footer.title", fallback::FOOTER_TITLE)
            .await,
        footer_subtitle: overlay
            .get("homepage.footer.subtitle", fallback::FOOTER_SUBTITLE)
            .await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::HttpBackend;

    #[actix_web::test]
    async fn unconfigured_backend_yields_all_fallback_copy() {
        let overlay = ContentOverlay::new(HttpBackend::new(None), "homepage.");
        let page = load_landing_page(&overlay).await;

        assert_eq!(page.brand, "Aurum Estates");
        assert_eq!(page.hero_title, "Tingkatkan Gaya Hidup Anda di Jantung Kota");
        assert_eq!(page.hero_cta_primary, "Jelajahi Koleksi");
        assert_eq!(page.footer_title, "Jadwalkan private viewing");

        let nav = load_nav(&overlay).await;
        assert_eq!(nav.brand, "Aurum Estates");
        assert_eq!(nav.koleksi, "Koleksi");
    }
}

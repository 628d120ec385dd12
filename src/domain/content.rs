//! Editable marketing copy served from the backend key/value store.

use serde::{Deserialize, Serialize};

use crate::domain::types::{ContentKey, TypeConstraintError};

/// One editable text value keyed by a dotted identifier.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentEntry {
    pub key: String,
    pub value: String,
}

impl ContentEntry {
    pub fn new(key: &ContentKey, value: impl Into<String>) -> Self {
        Self {
            key: key.to_string(),
            value: value.into(),
        }
    }
}

/// How an editor field's value is validated before write-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Url,
}

/// Static description of one editor field: its key, the label shown to the
/// operator and the fallback text the site renders when no overlay value
/// exists.
#[derive(Debug, Clone, Copy)]
pub struct ContentField {
    pub key: &'static str,
    pub label: &'static str,
    pub fallback: &'static str,
    pub kind: FieldKind,
}

impl ContentField {
    pub fn content_key(&self) -> Result<ContentKey, TypeConstraintError> {
        ContentKey::new(self.key)
    }
}

/// Default copy for the homepage. Every read site in the landing service
/// passes one of these as its explicit fallback so the page renders fully
/// even when the backend is unreachable.
pub mod fallback {
    pub const BRAND: &str = "Aurum Estates";
    pub const NAV_KOLEKSI: &str = "Koleksi";
    pub const NAV_SOROTAN: &str = "Sorotan";
    pub const NAV_KONTAK: &str = "Kontak";
    pub const HERO_KICKER: &str = "Mewah • Kontemporer • Urban";
    pub const HERO_TITLE: &str = "Tingkatkan Gaya Hidup Anda di Jantung Kota";
    pub const HERO_SUBTITLE: &str = "Koleksi hunian dan investasi utama: rumah mewah, shophouse premium, serta kavling strategis — dirancang untuk gaya hidup modern.";
    pub const HERO_CTA_PRIMARY: &str = "Jelajahi Koleksi";
    pub const HERO_CTA_SECONDARY: &str = "Jadwalkan Kunjungan";
    pub const HERO_SPLINE_URL: &str =
        "https://prod.spline.design/1VHYoewWfi45VYZ5/scene.splinecode";
    pub const COLLECTIONS_TITLE: &str = "Hunian & Investasi";
    pub const COLLECTIONS_SUBTITLE: &str =
        "Pilih rumah berkelas, shophouse bernilai sewa, dan kavling strategis di lokasi prima.";
    pub const FEATURED_TITLE: &str = "Properti Pilihan";
    pub const FEATURED_SUBTITLE: &str =
        "Sekilas dari koleksi kami. Hubungi tim untuk katalog pribadi lengkap.";
    pub const FOOTER_TITLE: &str = "Jadwalkan private viewing";
    pub const FOOTER_SUBTITLE: &str =
        "Tim concierge kami akan menyiapkan tur sesuai preferensi Anda.";
}

/// The closed set of homepage fields exposed by the content editor, in the
/// order they are displayed and persisted.
pub const HOMEPAGE_FIELDS: &[ContentField] = &[
    ContentField {
        key: "homepage.brand",
        label: "Nama Brand",
        fallback: fallback::BRAND,
        kind: FieldKind::Text,
    },
    ContentField {
        key: "homepage.nav.koleksi",
        label: "Menu: Koleksi",
        fallback: fallback::NAV_KOLEKSI,
        kind: FieldKind::Text,
    },
    ContentField {
        key: "homepage.nav.sorotan",
        label: "Menu: Sorotan",
        fallback: fallback::NAV_SOROTAN,
        kind: FieldKind::Text,
    },
    ContentField {
        key: "homepage.nav.kontak",
        label: "Menu: Kontak",
        fallback: fallback::NAV_KONTAK,
        kind: FieldKind::Text,
    },
    ContentField {
        key: "homepage.hero.kicker",
        label: "Hero Kicker",
        fallback: fallback::HERO_KICKER,
        kind: FieldKind::Text,
    },
    ContentField {
        key: "homepage.hero.title",
        label: "Hero Judul",
        fallback: fallback::HERO_TITLE,
        kind: FieldKind::Text,
    },
    ContentField {
        key: "homepage.hero.subtitle",
        label: "Hero Subjudul",
        fallback: fallback::HERO_SUBTITLE,
        kind: FieldKind::Text,
    },
    ContentField {
        key: "homepage.hero.cta_primary",
        label: "CTA Utama",
        fallback: fallback::HERO_CTA_PRIMARY,
        kind: FieldKind::Text,
    },
    ContentField {
        key: "homepage.hero.cta_secondary",
        label: "CTA Sekunder",
        fallback: fallback::HERO_CTA_SECONDARY,
        kind: FieldKind::Text,
    },
    ContentField {
        key: "homepage.hero.spline_url",
        label: "URL Spline Scene (Hero)",
        fallback: fallback::HERO_SPLINE_URL,
        kind: FieldKind::Url,
    },
    ContentField {
        key: "homepage.collections.title",
        label: "Koleksi: Judul",
        fallback: fallback::COLLECTIONS_TITLE,
        kind: FieldKind::Text,
    },
    ContentField {
        key: "homepage.collections.subtitle",
        label: "Koleksi: Subjudul",
        fallback: fallback::COLLECTIONS_SUBTITLE,
        kind: FieldKind::Text,
    },
    ContentField {
        key: "homepage.featured.title",
        label: "Unggulan: Judul",
        fallback: fallback::FEATURED_TITLE,
        kind: FieldKind::Text,
    },
    ContentField {
        key: "homepage.featured.subtitle",
        label: "Unggulan: Subjudul",
        fallback: fallback::FEATURED_SUBTITLE,
        kind: FieldKind::Text,
    },
    ContentField {
        key: "homepage.footer.title",
        label: "Footer: Judul",
        fallback: fallback::FOOTER_TITLE,
        kind: FieldKind::Text,
    },
    ContentField {
        key: "homepage.footer.subtitle",
        label: "Footer: Subjudul",
        fallback: fallback::FOOTER_SUBTITLE,
        kind: FieldKind::Text,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn homepage_fields_are_valid_content_keys() {
        for field in HOMEPAGE_FIELDS {
            assert!(field.content_key().is_ok(), "invalid key: {}", field.key);
        }
    }

    #[test]
    fn homepage_fields_are_unique() {
        let mut keys: Vec<_> = HOMEPAGE_FIELDS.iter().map(|f| f.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), HOMEPAGE_FIELDS.len());
    }
}

//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Glob passed to tera, e.g. `templates/**/*.html`.
    pub templates_dir: String,
    pub assets_dir: String,
    /// Cookie signing key material; must be at least 64 bytes.
    pub secret: String,
    /// Base URL of the content/catalog backend. Unset means degraded mode:
    /// fallback copy and empty listings instead of hard failures.
    pub backend_url: Option<String>,
}

//! Domain entities shared across the site's service layer.

pub mod content;
pub mod property;
pub mod types;

//! Form definitions backing the site routes.

use thiserror::Error;

pub mod editor;
pub mod properties;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("invalid url in field {0}")]
    InvalidUrl(String),
}

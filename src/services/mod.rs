//! Page services: pure-ish functions the routes call, kept independent of
//! actix so they can be tested against fake backends.

use thiserror::Error;

use crate::backend::errors::BackendError;

pub mod editor;
pub mod landing;
pub mod properties;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found")]
    NotFound,

    #[error(transparent)]
    Backend(#[from] BackendError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

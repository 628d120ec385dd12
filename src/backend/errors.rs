use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend base url is not configured")]
    Unconfigured,

    #[error("record not found")]
    NotFound,

    #[error("backend returned status {0}")]
    Status(u16),

    #[error("network error: {0}")]
    Network(String),

    #[error("decode error: {0}")]
    Decode(String),
}

pub type BackendResult<T> = Result<T, BackendError>;

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            BackendError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            BackendError::Status(status.as_u16())
        } else {
            BackendError::Network(err.to_string())
        }
    }
}

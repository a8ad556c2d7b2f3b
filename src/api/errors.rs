use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Record not found")]
    NotFound,

    #[error("Unexpected response status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Invalid url: {0}")]
    InvalidUrl(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return ApiError::Decode(err.to_string());
        }
        match err.status() {
            Some(status) if status == reqwest::StatusCode::NOT_FOUND => ApiError::NotFound,
            Some(status) => ApiError::Status {
                status: status.as_u16(),
                body: err.to_string(),
            },
            None if err.is_builder() => ApiError::InvalidUrl(err.to_string()),
            None => ApiError::Transport(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

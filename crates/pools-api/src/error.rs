use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use shared::models::api::ApiResponse;
use std::fmt;

/// Failures surfaced by the pools endpoints.
#[derive(Debug)]
pub enum PoolsApiError {
    NotFound(String),
    Internal(String),
}

impl PoolsApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            PoolsApiError::NotFound(_) => StatusCode::NOT_FOUND,
            PoolsApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &str {
        match self {
            PoolsApiError::NotFound(msg) | PoolsApiError::Internal(msg) => msg,
        }
    }
}

impl fmt::Display for PoolsApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolsApiError::NotFound(msg) => write!(f, "Not found: {msg}"),
            PoolsApiError::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for PoolsApiError {}

impl From<PoolsApiError> for HttpResponse {
    fn from(err: PoolsApiError) -> Self {
        ApiResponse::error(err.message()).into_http(err.status_code())
    }
}

/// Failures while loading the pool dataset at start-up.
#[derive(Debug)]
pub enum FixtureError {
    Io(std::io::Error),
    Serialization(serde_json::Error),
    DuplicateId(String),
    InvalidRecord { id: String, reason: String },
}

impl fmt::Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixtureError::Io(e) => write!(f, "IO error: {e}"),
            FixtureError::Serialization(e) => write!(f, "Serialization error: {e}"),
            FixtureError::DuplicateId(id) => write!(f, "Duplicate pool id: {id}"),
            FixtureError::InvalidRecord { id, reason } => {
                write!(f, "Invalid pool {id}: {reason}")
            }
        }
    }
}

impl std::error::Error for FixtureError {}

impl From<std::io::Error> for FixtureError {
    fn from(err: std::io::Error) -> Self {
        FixtureError::Io(err)
    }
}

impl From<serde_json::Error> for FixtureError {
    fn from(err: serde_json::Error) -> Self {
        FixtureError::Serialization(err)
    }
}

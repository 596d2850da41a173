use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Error, Debug)]
pub enum WebError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("upstream news source failed: {0}")]
    Upstream(lh_core::Error),
}

impl From<lh_core::Error> for WebError {
    fn from(err: lh_core::Error) -> Self {
        match err {
            lh_core::Error::NotFound(what) => WebError::NotFound(format!("not found: {}", what)),
            lh_core::Error::Invalid(what) => WebError::Validation(what),
            other => WebError::Upstream(other),
        }
    }
}

impl WebError {
    pub fn status(&self) -> StatusCode {
        match self {
            WebError::Validation(_) => StatusCode::BAD_REQUEST,
            WebError::NotFound(_) => StatusCode::NOT_FOUND,
            WebError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            WebError::Upstream(e) => error!("❌ Upstream error: {}", e),
            other => warn!("⚠️ {}: {}", status, other),
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub type WebResult<T> = std::result::Result<T, WebError>;

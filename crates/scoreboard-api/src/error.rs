//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
///
/// Serialised as `{"error": "<code>", "message": "<text>"}`, where the code is
/// stable and the message is for humans.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("malformed request: {0}")]
  MalformedRequest(String),

  #[error("storage unavailable: {0}")]
  Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  pub fn storage(e: impl std::error::Error + Send + Sync + 'static) -> Self {
    ApiError::Storage(Box::new(e))
  }

  /// Machine-readable error code.
  pub fn code(&self) -> &'static str {
    match self {
      ApiError::MalformedRequest(_) => "malformed_request",
      ApiError::Storage(_) => "storage_unavailable",
    }
  }

  pub fn status(&self) -> StatusCode {
    match self {
      ApiError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
      ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

impl From<serde_json::Error> for ApiError {
  fn from(e: serde_json::Error) -> Self {
    ApiError::MalformedRequest(e.to_string())
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    if let ApiError::Storage(e) = &self {
      tracing::error!(error = %e, "storage failure");
    }
    let body = json!({ "error": self.code(), "message": self.to_string() });
    (self.status(), Json(body)).into_response()
  }
}

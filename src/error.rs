//! Error types for the build log server

use axum::{
  Json,
  extract::rejection::JsonRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use tracing::error;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("Database error: {0}")]
  Database(#[from] sea_orm::DbErr),

  #[error("{0}")]
  Validation(String),

  #[error("Build not found")]
  BuildNotFound,

  #[error("Invalid build id")]
  InvalidId,

  #[error("Invalid request body: {0}")]
  Json(#[from] JsonRejection),
}

impl Error {
  pub fn validation(message: impl Into<String>) -> Self {
    Self::Validation(message.into())
  }

  pub fn status(&self) -> StatusCode {
    match self {
      Error::Validation(_) | Error::InvalidId | Error::Json(_) => {
        StatusCode::BAD_REQUEST
      }
      Error::BuildNotFound => StatusCode::NOT_FOUND,
      Error::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    let status = self.status();

    let body = match &self {
      Error::Database(err) => {
        error!("Database failure: {err}");
        json::json!({ "message": "Server error", "error": err.to_string() })
      }
      Error::Json(rejection) => json::json!({
        "message": "Invalid request body",
        "error": rejection.body_text(),
      }),
      _ => json::json!({ "message": self.to_string() }),
    };

    (status, Json(body)).into_response()
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use http_body_util::BodyExt;
  use sea_orm::DbErr;

  use super::*;

  async fn render(err: Error) -> (StatusCode, json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, json::from_slice(&bytes).unwrap())
  }

  #[tokio::test]
  async fn test_database_error_is_server_error() {
    let err = Error::Database(DbErr::Custom("connection lost".into()));
    let (status, body) = render(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Server error");
    assert!(body["error"].as_str().unwrap().contains("connection lost"));
  }

  #[tokio::test]
  async fn test_client_errors() {
    let (status, body) = render(Error::BuildNotFound).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json::json!({ "message": "Build not found" }));

    let (status, body) = render(Error::InvalidId).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("error").is_none());

    let (status, body) = render(Error::validation("Invalid status")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid status");
  }
}

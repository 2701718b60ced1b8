use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State, rejection::JsonRejection},
  http::StatusCode,
};
use chrono::DateTime as UtcDateTime;
use serde::{Deserialize, Serialize};

use crate::{entity::build, prelude::*, state::AppState};

type Body<T> = std::result::Result<Json<T>, JsonRejection>;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReq {
  pub project_name: Option<String>,
  pub build_type: Option<String>,
  pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateReq {
  pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Message {
  pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Health {
  pub status: &'static str,
  pub timestamp: UtcDateTime<Utc>,
}

pub async fn health() -> Json<Health> {
  Json(Health { status: "OK", timestamp: Utc::now() })
}

pub async fn list(
  State(app): State<Arc<AppState>>,
) -> Result<Json<Vec<build::Model>>> {
  Ok(Json(app.sv().build.all().await?))
}

pub async fn create(
  State(app): State<Arc<AppState>>,
  body: Body<CreateReq>,
) -> Result<(StatusCode, Json<build::Model>)> {
  let Json(req) = body?;

  let build = app
    .sv()
    .build
    .create(
      req.project_name.as_deref().unwrap_or_default(),
      req.build_type.as_deref().unwrap_or_default(),
      req.description,
    )
    .await?;

  Ok((StatusCode::CREATED, Json(build)))
}

pub async fn get(
  State(app): State<Arc<AppState>>,
  Path(id): Path<String>,
) -> Result<Json<build::Model>> {
  Ok(Json(app.sv().build.by_id(&id).await?))
}

pub async fn update(
  State(app): State<Arc<AppState>>,
  Path(id): Path<String>,
  body: Body<UpdateReq>,
) -> Result<Json<build::Model>> {
  let Json(req) = body?;
  let status = req.status.as_deref().unwrap_or_default();

  Ok(Json(app.sv().build.set_status(&id, status).await?))
}

pub async fn delete(
  State(app): State<Arc<AppState>>,
  Path(id): Path<String>,
) -> Result<Json<Message>> {
  app.sv().build.delete(&id).await?;
  info!(%id, "build deleted");

  Ok(Json(Message { message: "Build deleted successfully" }))
}

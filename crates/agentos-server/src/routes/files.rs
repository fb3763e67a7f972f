use agentos_core::error::AgentOsError;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct FileQuery {
    #[serde(default)]
    pub path: Option<String>,
}

/// GET /api/files?path=<relative path>: read a file inside the sandbox.
pub async fn get_file(
    State(app): State<AppState>,
    Query(query): Query<FileQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let path = query
        .path
        .filter(|p| !p.is_empty())
        .ok_or(AgentOsError::MissingField("file path"))?;

    let gateway = app.gateway.clone();
    let content = tokio::task::spawn_blocking(move || gateway.read(&path))
        .await
        .map_err(AppError::join)??;

    Ok(Json(serde_json::json!({ "content": content })))
}

#[derive(Deserialize)]
pub struct WriteFileBody {
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// POST /api/files: overwrite a file inside the sandbox.
pub async fn put_file(
    State(app): State<AppState>,
    body: Result<Json<WriteFileBody>, JsonRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Json(body) = body.map_err(|e| AppError::bad_request(e.body_text()))?;
    let (Some(path), Some(content)) = (body.path.filter(|p| !p.is_empty()), body.content) else {
        return Err(AgentOsError::MissingField("file path and content").into());
    };

    let gateway = app.gateway.clone();
    tokio::task::spawn_blocking(move || gateway.write(&path, &content))
        .await
        .map_err(AppError::join)??;

    Ok(Json(serde_json::json!({ "success": true })))
}

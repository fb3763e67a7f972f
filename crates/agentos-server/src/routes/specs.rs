use agentos_core::error::AgentOsError;
use agentos_core::specs;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateSpecBody {
    #[serde(default)]
    pub name: Option<String>,
}

/// POST /api/scaffold/spec: create a spec directory with seed files.
pub async fn create_spec(
    State(app): State<AppState>,
    body: Result<Json<CreateSpecBody>, JsonRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Json(body) = body.map_err(|e| AppError::bad_request(e.body_text()))?;
    let name = body
        .name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .ok_or(AgentOsError::MissingField("spec name"))?;

    let layout = app.layout.clone();
    let created = name.clone();
    let path = tokio::task::spawn_blocking(move || specs::create(&layout, &created))
        .await
        .map_err(AppError::join)??;

    Ok(Json(serde_json::json!({
        "success": true,
        "path": path.display().to_string(),
        "prompt": specs::shape_prompt(&name),
    })))
}

/// DELETE /api/scaffold/spec/{name}: remove a spec directory.
pub async fn delete_spec(
    State(app): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let layout = app.layout.clone();
    tokio::task::spawn_blocking(move || specs::delete(&layout, &name))
        .await
        .map_err(AppError::join)??;

    Ok(Json(serde_json::json!({ "success": true })))
}

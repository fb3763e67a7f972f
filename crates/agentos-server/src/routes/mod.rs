pub mod files;
pub mod runtime;
pub mod specs;
pub mod status;

use axum::http::{StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Json;

/// Fallback for unknown routes; keeps every response JSON.
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": format!("no route for {}", uri.path()) })),
    )
}

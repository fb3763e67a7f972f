use agentos_core::recommend::{self, NextAction};
use agentos_core::status::{ProjectState, ServiceHealth, StatusReport};
use axum::extract::State;
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;

/// Aggregate the project from disk while the service probes run.
async fn collect(app: &AppState) -> Result<ProjectState, AppError> {
    let layout = app.layout.clone();
    let (services, state) = tokio::join!(
        app.prober.check(),
        tokio::task::spawn_blocking(move || {
            ProjectState::collect(&layout, ServiceHealth::default())
        })
    );
    let mut state = state.map_err(AppError::join)?;
    state.services = services;
    Ok(state)
}

/// GET /api/status: full project snapshot with the next recommended step.
pub async fn get_status(State(app): State<AppState>) -> Result<Json<StatusReport>, AppError> {
    let state = collect(&app).await?;
    Ok(Json(StatusReport::new(state)))
}

/// GET /api/next: only the recommendation.
pub async fn get_next(State(app): State<AppState>) -> Result<Json<NextAction>, AppError> {
    let state = collect(&app).await?;
    Ok(Json(recommend::recommend(&state)))
}

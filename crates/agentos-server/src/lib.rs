pub mod error;
pub mod probe;
pub mod routes;
pub mod state;

use agentos_core::config::Config;
use axum::routing::{delete, get, post};
use axum::Router;
use std::path::PathBuf;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the axum Router with all API routes and middleware.
/// Used by `serve()` and available for integration testing.
pub fn build_router(app_state: state::AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Status
        .route("/api/status", get(routes::status::get_status))
        .route("/api/next", get(routes::status::get_next))
        // Files
        .route(
            "/api/files",
            get(routes::files::get_file).post(routes::files::put_file),
        )
        // Specs
        .route("/api/scaffold/spec", post(routes::specs::create_spec))
        .route(
            "/api/scaffold/spec/{name}",
            delete(routes::specs::delete_spec),
        )
        .route("/api/specs/{name}", delete(routes::specs::delete_spec))
        // Dashboard bootstrap
        .route(
            "/runtime-config.json",
            get(routes::runtime::get_runtime_config),
        )
        .fallback(routes::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

/// Start the control center API on `config.ports.api`.
pub async fn serve(root: PathBuf, config: Config, open_browser: bool) -> anyhow::Result<()> {
    let addr = format!("0.0.0.0:{}", config.ports.api);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    serve_on(root, config, listener, open_browser).await
}

/// Start the control center API on a pre-bound listener.
///
/// Unlike `serve`, this accepts a `TcpListener` that was already bound so the
/// caller can read the actual port before starting (useful when `port = 0` and
/// the OS picks a free port).
pub async fn serve_on(
    root: PathBuf,
    config: Config,
    listener: tokio::net::TcpListener,
    open_browser: bool,
) -> anyhow::Result<()> {
    let actual_port = listener.local_addr()?.port();
    let app_state = state::AppState::new(root, config)?;

    tracing::info!(
        root = %app_state.layout.root.display(),
        sandbox = %app_state.layout.sandbox().display(),
        "control center API listening on http://localhost:{actual_port}"
    );

    if open_browser {
        let url = format!("http://localhost:{actual_port}/api/status");
        let _ = open::that(&url);
    }

    axum::serve(listener, build_router(app_state)).await?;
    Ok(())
}

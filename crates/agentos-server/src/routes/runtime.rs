use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RuntimePorts {
    pub api: u16,
    pub app: u16,
    pub design: u16,
}

/// Where the dashboard finds each service.
#[derive(Debug, Serialize)]
pub struct RuntimeConfig {
    pub api: String,
    pub app: String,
    pub design: String,
    pub ports: RuntimePorts,
}

/// GET /runtime-config.json
pub async fn get_runtime_config(State(app): State<AppState>) -> Json<RuntimeConfig> {
    let host = &app.config.probe.host;
    let ports = &app.config.ports;
    Json(RuntimeConfig {
        api: format!("http://{host}:{}", ports.api),
        app: format!("http://{host}:{}", ports.app),
        design: format!("http://{host}:{}", ports.design),
        ports: RuntimePorts {
            api: ports.api,
            app: ports.app,
            design: ports.design,
        },
    })
}

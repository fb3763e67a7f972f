use crate::probe::ServiceProber;
use agentos_core::config::Config;
use agentos_core::gateway::FileGateway;
use agentos_core::paths::ProjectLayout;
use std::path::PathBuf;
use std::sync::Arc;

/// Shared application state passed to all route handlers. Read-only after
/// startup; every request recomputes project state from disk.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub layout: Arc<ProjectLayout>,
    pub gateway: FileGateway,
    pub prober: Arc<ServiceProber>,
}

impl AppState {
    pub fn new(root: PathBuf, config: Config) -> anyhow::Result<Self> {
        let layout = ProjectLayout::new(root, &config);
        let prober = ServiceProber::new(&config)?;
        Ok(Self {
            gateway: FileGateway::new(layout.sandbox()),
            layout: Arc::new(layout),
            prober: Arc::new(prober),
            config: Arc::new(config),
        })
    }
}

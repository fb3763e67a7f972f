pub mod config;
pub mod file;
pub mod next;
pub mod serve;
pub mod spec;
pub mod status;

use agentos_core::config::Config;
use agentos_core::paths::ProjectLayout;
use agentos_core::status::{ProjectState, ServiceHealth};
use agentos_server::probe::ServiceProber;
use std::path::Path;

/// Aggregate project state with live service probes, as the API does.
pub(crate) fn collect_state(root: &Path, config: &Config) -> anyhow::Result<ProjectState> {
    let layout = ProjectLayout::new(root, config);
    let prober = ServiceProber::new(config)?;
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let services: ServiceHealth = rt.block_on(prober.check());
    Ok(ProjectState::collect(&layout, services))
}

use agentos_core::config::Config;
use anyhow::Context;
use std::path::Path;

pub fn run(root: &Path, config: Config, open: bool) -> anyhow::Result<()> {
    for warning in config.validate() {
        tracing::warn!(level = ?warning.level, "{}", warning.message);
    }
    config.ensure_valid().context("refusing to start")?;

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(agentos_server::serve(root.to_path_buf(), config, open))
}

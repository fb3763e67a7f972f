use crate::output::print_json;
use agentos_core::config::{Config, WarnLevel};
use agentos_core::paths;
use clap::Subcommand;
use std::path::Path;

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Print the effective config (file, defaults and overrides)
    Show,

    /// Validate the config for common mistakes
    Validate,

    /// Write control-center.yaml with the effective values
    Init {
        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn run(
    root: &Path,
    config: &Config,
    subcmd: ConfigSubcommand,
    json: bool,
) -> anyhow::Result<()> {
    match subcmd {
        ConfigSubcommand::Show => show(config, json),
        ConfigSubcommand::Validate => validate(config, json),
        ConfigSubcommand::Init { force } => init(root, config, force),
    }
}

fn show(config: &Config, json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(config);
    }
    println!(
        "ports:   api={} design={} app={}",
        config.ports.api, config.ports.design, config.ports.app
    );
    println!(
        "paths:   agent_os={} app={} design={} product_plan={}",
        config.paths.agent_os, config.paths.app, config.paths.design, config.paths.product_plan
    );
    println!(
        "probe:   host={} timeout_ms={}",
        config.probe.host, config.probe.timeout_ms
    );
    Ok(())
}

fn validate(config: &Config, json: bool) -> anyhow::Result<()> {
    let warnings = config.validate();

    if json {
        print_json(&serde_json::json!({ "warnings": warnings }))?;
    } else if warnings.is_empty() {
        println!("Config is valid. No warnings.");
    } else {
        for w in &warnings {
            let prefix = match w.level {
                WarnLevel::Warning => "warning",
                WarnLevel::Error => "error",
            };
            println!("[{prefix}] {}", w.message);
        }
    }

    if warnings.iter().any(|w| w.level == WarnLevel::Error) {
        anyhow::bail!("config validation found errors");
    }
    Ok(())
}

fn init(root: &Path, config: &Config, force: bool) -> anyhow::Result<()> {
    let path = paths::config_path(root);
    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }
    config.save(root)?;
    println!("Wrote {}", path.display());
    Ok(())
}

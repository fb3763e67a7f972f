mod cmd;
mod output;
mod root;

use agentos_core::config::Config;
use anyhow::Context;
use clap::{Parser, Subcommand};
use cmd::{config::ConfigSubcommand, file::FileSubcommand, spec::SpecSubcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "agentos",
    about = "Agent OS control center: project status, next steps, specs and files",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from agent-os/ or .git/)
    #[arg(long, global = true, env = "AGENTOS_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    /// Port of the design tool dev server
    #[arg(long, global = true, env = "DESIGN_PORT")]
    design_port: Option<u16>,

    /// Port of the application dev server
    #[arg(long, global = true, env = "APP_PORT")]
    app_port: Option<u16>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the control center HTTP API
    Serve {
        /// Port to listen on (0 = OS-assigned)
        #[arg(long, env = "PORT")]
        port: Option<u16>,

        /// Open the status endpoint in a browser
        #[arg(long)]
        open: bool,
    },

    /// Show the aggregated project status
    Status,

    /// Show the single recommended next step
    Next,

    /// Manage feature specs
    Spec {
        #[command(subcommand)]
        subcommand: SpecSubcommand,
    },

    /// Read or write files inside agent-os/
    File {
        #[command(subcommand)]
        subcommand: FileSubcommand,
    },

    /// Inspect and validate control-center.yaml
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

/// Load `control-center.yaml` and apply flag / env port overrides.
fn load_config(root: &Path, cli: &Cli) -> anyhow::Result<Config> {
    let mut config = Config::load(root).context("failed to load config")?;
    if let Some(port) = cli.design_port {
        config.ports.design = port;
    }
    if let Some(port) = cli.app_port {
        config.ports.app = port;
    }
    if let Commands::Serve { port: Some(port), .. } = cli.command {
        config.ports.api = port;
    }
    Ok(config)
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = load_config(&root, &cli).and_then(|config| match cli.command {
        Commands::Serve { open, .. } => cmd::serve::run(&root, config, open),
        Commands::Status => cmd::status::run(&root, &config, cli.json),
        Commands::Next => cmd::next::run(&root, &config, cli.json),
        Commands::Spec { subcommand } => cmd::spec::run(&root, &config, subcommand, cli.json),
        Commands::File { subcommand } => cmd::file::run(&root, &config, subcommand, cli.json),
        Commands::Config { subcommand } => cmd::config::run(&root, &config, subcommand, cli.json),
    });

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

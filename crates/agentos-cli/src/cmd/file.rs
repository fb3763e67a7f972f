use crate::output::print_json;
use agentos_core::config::Config;
use agentos_core::gateway::FileGateway;
use agentos_core::paths::ProjectLayout;
use anyhow::Context;
use clap::Subcommand;
use std::io::Read;
use std::path::Path;

#[derive(Subcommand)]
pub enum FileSubcommand {
    /// Print a file from agent-os/
    Get {
        /// Path relative to agent-os/
        path: String,
    },

    /// Overwrite a file in agent-os/
    Put {
        /// Path relative to agent-os/
        path: String,
        /// New content; `-` reads from stdin
        content: String,
    },
}

pub fn run(
    root: &Path,
    config: &Config,
    subcmd: FileSubcommand,
    json: bool,
) -> anyhow::Result<()> {
    let layout = ProjectLayout::new(root, config);
    let gateway = FileGateway::new(layout.sandbox());

    match subcmd {
        FileSubcommand::Get { path } => {
            let content = gateway.read(&path)?;
            if json {
                print_json(&serde_json::json!({ "content": content }))?;
            } else {
                print!("{content}");
            }
        }
        FileSubcommand::Put { path, content } => {
            let content = if content == "-" {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("failed to read content from stdin")?;
                buf
            } else {
                content
            };
            gateway.write(&path, &content)?;
            if json {
                print_json(&serde_json::json!({ "success": true }))?;
            } else {
                println!("Wrote {path}");
            }
        }
    }
    Ok(())
}

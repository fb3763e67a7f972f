use crate::output::{checklist_cell, print_json, print_table};
use agentos_core::config::Config;
use agentos_core::paths::ProjectLayout;
use agentos_core::specs;
use clap::Subcommand;
use std::path::Path;

#[derive(Subcommand)]
pub enum SpecSubcommand {
    /// Create specs/<name>/ with a stub spec.md and tasks.md
    Create {
        /// Spec name (letters, digits, '-' or '_')
        name: String,
    },

    /// Delete a spec directory and everything in it
    Delete {
        /// Spec name
        name: String,
    },

    /// List specs with their task progress
    List,
}

pub fn run(
    root: &Path,
    config: &Config,
    subcmd: SpecSubcommand,
    json: bool,
) -> anyhow::Result<()> {
    let layout = ProjectLayout::new(root, config);
    match subcmd {
        SpecSubcommand::Create { name } => create(&layout, &name, json),
        SpecSubcommand::Delete { name } => delete(&layout, &name, json),
        SpecSubcommand::List => list(&layout, json),
    }
}

fn create(layout: &ProjectLayout, name: &str, json: bool) -> anyhow::Result<()> {
    let path = specs::create(layout, name)?;
    let name = name.trim();
    let prompt = specs::shape_prompt(name);

    if json {
        print_json(&serde_json::json!({
            "success": true,
            "path": path.display().to_string(),
            "prompt": prompt,
        }))?;
    } else {
        println!("Created spec '{name}' at {}", path.display());
        println!("Next: {prompt}");
    }
    Ok(())
}

fn delete(layout: &ProjectLayout, name: &str, json: bool) -> anyhow::Result<()> {
    specs::delete(layout, name)?;
    if json {
        print_json(&serde_json::json!({ "success": true }))?;
    } else {
        println!("Deleted spec '{name}'");
    }
    Ok(())
}

fn list(layout: &ProjectLayout, json: bool) -> anyhow::Result<()> {
    let specs = specs::list(layout);

    if json {
        return print_json(&specs);
    }
    if specs.is_empty() {
        println!("No specs. Run: agentos spec create <name>");
        return Ok(());
    }

    let rows = specs
        .iter()
        .map(|s| {
            vec![
                s.name.clone(),
                checklist_cell(&s.tasks),
                s.tasks.next_item.clone().unwrap_or_default(),
            ]
        })
        .collect();
    print_table(&["SPEC", "TASKS", "NEXT TASK"], rows);
    Ok(())
}

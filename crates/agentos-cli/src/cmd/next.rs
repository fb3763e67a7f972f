use crate::output::print_json;
use agentos_core::config::Config;
use agentos_core::recommend;
use std::path::Path;

pub fn run(root: &Path, config: &Config, json: bool) -> anyhow::Result<()> {
    let state = super::collect_state(root, config)?;
    let next = recommend::recommend(&state);

    if json {
        return print_json(&next);
    }

    println!("Phase:    {}", next.phase);
    println!("Step:     {}", next.title);
    println!("About:    {}", next.description);
    if let Some(label) = &next.action_label {
        println!("Action:   {label}");
    }
    if let Some(prompt) = &next.prompt {
        println!("Prompt:   {prompt}");
    }
    Ok(())
}

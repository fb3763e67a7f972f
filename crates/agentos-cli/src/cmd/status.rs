use crate::output::{checklist_cell, print_json, print_table, yes_no};
use agentos_core::config::Config;
use agentos_core::status::{ProjectState, StatusReport};
use std::path::Path;

pub fn run(root: &Path, config: &Config, json: bool) -> anyhow::Result<()> {
    let state = super::collect_state(root, config)?;
    if json {
        return print_json(&StatusReport::new(state));
    }
    print_human(&StatusReport::new(state));
    Ok(())
}

fn print_human(report: &StatusReport) {
    let state: &ProjectState = &report.state;
    println!("Project: {}", state.project_root);
    println!();

    let product = &state.product;
    print_table(
        &["DOCUMENT", "STATUS", "NEXT"],
        vec![
            row("mission", &product.mission),
            row("roadmap", &product.roadmap),
            row("tech stack", &product.tech_stack),
        ],
    );
    println!();

    let design = &state.design;
    print_table(
        &["DESIGN", "INITIALIZED", "TOKENS", "SHELL", "EXPORTED"],
        vec![vec![
            String::new(),
            yes_no(design.initialized),
            yes_no(design.tokens),
            yes_no(design.shell),
            yes_no(design.exported),
        ]],
    );
    println!();

    if state.specs.is_empty() {
        println!("No specs yet.");
    } else {
        let rows = state
            .specs
            .iter()
            .map(|s| {
                vec![
                    s.name.clone(),
                    checklist_cell(&s.spec),
                    checklist_cell(&s.tasks),
                    s.tasks.next_item.clone().unwrap_or_default(),
                ]
            })
            .collect();
        print_table(&["SPEC", "DOC", "TASKS", "NEXT TASK"], rows);
    }
    println!();

    let services = &state.services;
    println!(
        "Scaffolded: {}   Design OS: {}   App: {}",
        yes_no(state.implementation.scaffolded),
        if services.design { "up" } else { "down" },
        if services.app { "up" } else { "down" },
    );
    println!();

    let next = &report.next;
    println!("Next: [{}] {}", next.phase, next.title);
    println!("      {}", next.description);
}

fn row(label: &str, status: &agentos_core::checklist::ChecklistStatus) -> Vec<String> {
    vec![
        label.to_string(),
        checklist_cell(status),
        status.next_item.clone().unwrap_or_default(),
    ]
}

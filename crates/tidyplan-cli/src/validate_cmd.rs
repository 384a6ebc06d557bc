//! `tidyplan validate --json <file>`

use anyhow::{Context, Result, bail};

use tidyplan_core::{ProjectTemplate, import_template, validate_template};

/// Import a template file, validate it, and print a one-line summary.
///
/// Warnings go to stderr; validation errors are fatal.
pub fn run_validate(path: &str) -> Result<()> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read template file: {path}"))?;

    let template =
        import_template(&bytes).with_context(|| format!("failed to import template: {path}"))?;

    let report = validate_template(&template);
    for warning in &report.warnings {
        eprintln!("Warning: {warning}");
    }
    if !report.is_valid {
        bail!(
            "template {:?} failed validation: {}",
            template.name,
            report.errors.join("; ")
        );
    }

    let (lists, tasks) = count(&template);
    println!(
        "Template {:?} is valid: {} phases, {} task lists, {} tasks.",
        template.name,
        template.phases.len(),
        lists,
        tasks
    );

    Ok(())
}

/// Count task lists and tasks across all phases.
pub fn count(template: &ProjectTemplate) -> (usize, usize) {
    let lists = template.phases.iter().map(|p| p.task_lists.len()).sum();
    let tasks = template
        .phases
        .iter()
        .flat_map(|p| &p.task_lists)
        .map(|l| l.tasks.len())
        .sum();
    (lists, tasks)
}

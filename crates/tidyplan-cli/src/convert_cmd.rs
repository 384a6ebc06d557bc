//! `tidyplan convert --in <file> [--out <file>]`

use anyhow::{Context, Result, bail};

use tidyplan_core::{ExportOptions, export_template, import_template, validate_template};

use crate::validate_cmd::count;

/// Import a template file (modern passthrough or legacy migration),
/// validate the result, and write the canonical JSON form.
pub fn run_convert(input: &str, out: Option<&str>) -> Result<()> {
    let bytes =
        std::fs::read(input).with_context(|| format!("failed to read template file: {input}"))?;

    let template =
        import_template(&bytes).with_context(|| format!("failed to import template: {input}"))?;

    let report = validate_template(&template);
    if !report.is_valid {
        bail!(
            "converted template {:?} failed validation: {}",
            template.name,
            report.errors.join("; ")
        );
    }

    let json = export_template(&template, &ExportOptions::default())
        .context("failed to serialize template")?;

    match out {
        Some(path) => {
            std::fs::write(path, &json).with_context(|| format!("failed to write to {path}"))?;
            let (_, tasks) = count(&template);
            println!(
                "Converted template {:?}: {} phases, {} tasks written to {}",
                template.name,
                template.phases.len(),
                tasks,
                path
            );
        }
        None => {
            tracing::debug!(name = %template.name, "writing canonical template to stdout");
            print!("{json}");
        }
    }

    Ok(())
}

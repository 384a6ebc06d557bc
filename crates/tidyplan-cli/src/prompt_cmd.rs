//! `tidyplan make-prompt --in <file>`

use anyhow::{Context, Result};

use tidyplan_core::{PlanDefaults, build_plan_prompt};

/// Read a requirements file and print the generation prompt to stdout.
pub fn run_make_prompt(input: &str) -> Result<()> {
    let requirements = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read requirements file: {input}"))?;

    let prompt = build_plan_prompt(&requirements, &PlanDefaults::from_env());
    print!("{prompt}");

    Ok(())
}

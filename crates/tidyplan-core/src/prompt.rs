//! Generation-prompt construction.
//!
//! Builds the instruction text sent to a generative provider whose reply
//! re-enters the pipeline through [`crate::decode_plan`]. The schema
//! section is generated from the same tables the decoder reads (key
//! names, enum variants, priority labels, date patterns), so the
//! advertised schema and the accepted schema cannot drift apart.

use crate::dates::DATE_PATTERNS;
use crate::defaults::PlanDefaults;
use crate::plan::decode::{PRIORITY_LABELS, PRIORITY_MAX, PRIORITY_MIN, keys};
use crate::plan::model::ExitTag;

/// Build the full prompt for a free-form requirements text.
///
/// The prompt states the output contract, embeds the plan schema, the
/// value tables and the defaulting rules, then appends the user's text.
pub fn build_plan_prompt(requirements: &str, defaults: &PlanDefaults) -> String {
    let mut prompt = String::with_capacity(4096);

    prompt.push_str("# Tidy-up Plan Generator\n\n");
    prompt.push_str(
        "You turn a household tidy-up request into a structured task plan. \
         Reply with exactly one JSON object matching the schema below -- no \
         prose before or after it. A ```json fence around the object is \
         accepted but not required.\n\n",
    );

    prompt.push_str(&schema_section(defaults));
    prompt.push_str(&rules_section());

    prompt.push_str("## Requirements\n\n");
    prompt.push_str(requirements.trim());
    prompt.push('\n');

    prompt
}

/// The JSON schema section, generated from the decoder's own tables.
fn schema_section(defaults: &PlanDefaults) -> String {
    let exit_tags: Vec<&str> = ExitTag::ALL.iter().map(|tag| tag.as_str()).collect();
    let date_patterns: Vec<&str> = DATE_PATTERNS.iter().map(|(label, _)| *label).collect();

    let mut out = String::with_capacity(1024);
    out.push_str("## Output Schema\n\n```json\n{\n");
    out.push_str(&format!(
        "  \"{}\": \"string -- short plan title\",\n",
        canonical(keys::PROJECT)
    ));
    out.push_str(&format!(
        "  \"{}\": {{ \"{}\": \"{}\", \"{}\": \"{}\" }},\n",
        canonical(keys::LOCALE),
        canonical(keys::COUNTRY),
        defaults.locale.country,
        canonical(keys::CITY),
        defaults.locale.city,
    ));
    out.push_str(&format!("  \"{}\": [\n    {{\n", canonical(keys::TASKS)));
    out.push_str(&format!(
        "      \"{}\": \"string -- optional, generated when omitted\",\n",
        canonical(keys::TASK_ID)
    ));
    out.push_str(&format!(
        "      \"{}\": \"string -- REQUIRED, non-empty\",\n",
        canonical(keys::TASK_TITLE)
    ));
    out.push_str(&format!(
        "      \"{}\": \"string -- room or area, optional\",\n",
        canonical(keys::TASK_AREA)
    ));
    out.push_str(&format!(
        "      \"{}\": \"{}\",\n",
        canonical(keys::TASK_EXIT_TAG),
        exit_tags.join(" | ")
    ));
    out.push_str(&format!(
        "      \"{}\": {},\n",
        canonical(keys::TASK_PRIORITY),
        PRIORITY_MAX
    ));
    out.push_str(&format!(
        "      \"{}\": 30,\n",
        canonical(keys::TASK_EFFORT_MIN)
    ));
    out.push_str(&format!(
        "      \"{}\": [\"string\"],\n",
        canonical(keys::TASK_LABELS)
    ));
    out.push_str(&format!(
        "      \"{}\": [\"string\"],\n",
        canonical(keys::TASK_LINKS)
    ));
    out.push_str(&format!(
        "      \"{}\": [\"string\"],\n",
        canonical(keys::TASK_CHECKLIST)
    ));
    out.push_str(&format!(
        "      \"{}\": \"string -- why this task matters, optional\",\n",
        canonical(keys::TASK_RATIONALE)
    ));
    out.push_str(&format!(
        "      \"{}\": \"string -- optional reference link\",\n",
        canonical(keys::TASK_URL)
    ));
    out.push_str(&format!(
        "      \"{}\": \"{}\"\n",
        canonical(keys::TASK_DUE_AT),
        date_patterns[0]
    ));
    out.push_str("    }\n  ]\n}\n```\n\n");
    out
}

/// Field rules: enums, defaults, and accepted shapes.
fn rules_section() -> String {
    let mut out = String::with_capacity(1024);
    out.push_str("## Field Rules\n\n");
    out.push_str(&format!(
        "- `{}` must contain at least one task; tasks with a blank `{}` are discarded.\n",
        canonical(keys::TASKS),
        canonical(keys::TASK_TITLE)
    ));
    out.push_str(&format!(
        "- `{}` defaults to `{}` when omitted.\n",
        canonical(keys::TASK_EXIT_TAG),
        ExitTag::default().as_str()
    ));
    out.push_str(&format!(
        "- `{}` is an integer from {} to {}; these labels are also accepted: ",
        canonical(keys::TASK_PRIORITY),
        PRIORITY_MIN,
        PRIORITY_MAX
    ));
    let labels: Vec<String> = PRIORITY_LABELS
        .iter()
        .map(|(label, value)| format!("`{label}` = {value}"))
        .collect();
    out.push_str(&labels.join(", "));
    out.push_str(".\n");
    out.push_str(&format!(
        "- `{}` is whole minutes of effort.\n",
        canonical(keys::TASK_EFFORT_MIN)
    ));
    let date_patterns: Vec<String> = DATE_PATTERNS
        .iter()
        .map(|(label, _)| format!("`{label}`"))
        .collect();
    out.push_str(&format!(
        "- `{}` accepts {}; other forms are treated as unspecified.\n",
        canonical(keys::TASK_DUE_AT),
        date_patterns.join(", ")
    ));
    out.push_str(&format!(
        "- `{}` may be omitted; a single-item checklist is derived from `{}` when present.\n",
        canonical(keys::TASK_CHECKLIST),
        canonical(keys::TASK_RATIONALE)
    ));
    out.push('\n');
    out
}

/// The advertised name for a field is the first (canonical) accepted key.
fn canonical(keys: &[&'static str]) -> &'static str {
    keys[0]
}

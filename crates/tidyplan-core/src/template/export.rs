//! Deterministic template export.
//!
//! Output is pretty-printed JSON with lexicographically sorted keys, so
//! repeated exports of an unchanged template are byte-identical and the
//! canonical form is a fixed point under re-import.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::template::model::{ListColor, ProjectTemplate, TaskPriority};

/// Named export customizations. Applied to a copy; the caller's template
/// is never mutated.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Drop tasks flagged `isOptional`.
    pub skip_optional_tasks: bool,
    /// Color override for every task list of the named phase.
    pub phase_colors: BTreeMap<String, ListColor>,
    /// Priority override for tasks by title.
    pub task_priorities: BTreeMap<String, TaskPriority>,
}

/// Errors from serializing a template.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to serialize template: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Serialize a template deterministically, applying `options` to a copy.
///
/// Keys are sorted lexicographically (serde_json's object map is ordered),
/// output is pretty-printed and newline-terminated.
pub fn export_template(
    template: &ProjectTemplate,
    options: &ExportOptions,
) -> Result<String, ExportError> {
    let mut copy = template.clone();
    apply_customizations(&mut copy, options);

    let value = serde_json::to_value(&copy)?;
    let mut out = serde_json::to_string_pretty(&value)?;
    out.push('\n');
    Ok(out)
}

fn apply_customizations(template: &mut ProjectTemplate, options: &ExportOptions) {
    for phase in &mut template.phases {
        let color_override = options.phase_colors.get(&phase.title).copied();
        for list in &mut phase.task_lists {
            if let Some(color) = color_override {
                list.color = color;
            }
            if options.skip_optional_tasks {
                list.tasks.retain(|task| !task.is_optional.unwrap_or(false));
            }
            for task in &mut list.tasks {
                if let Some(priority) = options.task_priorities.get(&task.title) {
                    task.priority = *priority;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::import::import_template;

    fn template() -> ProjectTemplate {
        let json = r#"{
            "name": "Garage overhaul",
            "description": "Three weekends",
            "category": "declutter",
            "version": "2.0",
            "phases": [{
                "title": "Sort",
                "order": 0,
                "taskLists": [{
                    "name": "Bench",
                    "color": "green",
                    "order": 0,
                    "tasks": [
                        {"title": "Clear surface", "priority": "high"},
                        {"title": "Oil the vise", "isOptional": true}
                    ]
                }]
            }],
            "metadata": {"author": "sam", "difficulty": "beginner"}
        }"#;
        import_template(json.as_bytes()).expect("fixture should import")
    }

    #[test]
    fn repeated_export_is_byte_identical() {
        let t = template();
        let first = export_template(&t, &ExportOptions::default()).unwrap();
        let second = export_template(&t, &ExportOptions::default()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn keys_are_sorted_lexicographically() {
        let out = export_template(&template(), &ExportOptions::default()).unwrap();
        let category = out.find("\"category\"").unwrap();
        let description = out.find("\"description\"").unwrap();
        let metadata = out.find("\"metadata\"").unwrap();
        let name = out.find("\"name\"").unwrap();
        assert!(category < description && description < metadata && metadata < name);
    }

    #[test]
    fn export_ends_with_newline() {
        let out = export_template(&template(), &ExportOptions::default()).unwrap();
        assert!(out.ends_with("}\n"));
    }

    #[test]
    fn skip_optional_tasks_drops_flagged_tasks_only() {
        let t = template();
        let options = ExportOptions {
            skip_optional_tasks: true,
            ..ExportOptions::default()
        };
        let out = export_template(&t, &options).unwrap();
        assert!(out.contains("Clear surface"));
        assert!(!out.contains("Oil the vise"));
        // Caller's template is untouched.
        assert_eq!(t.phases[0].task_lists[0].tasks.len(), 2);
    }

    #[test]
    fn phase_color_override_applies_to_its_lists() {
        let t = template();
        let mut options = ExportOptions::default();
        options
            .phase_colors
            .insert("Sort".to_owned(), ListColor::Purple);
        let out = export_template(&t, &options).unwrap();
        assert!(out.contains("\"purple\""));
        assert!(!out.contains("\"green\""));
        assert_eq!(t.phases[0].task_lists[0].color, ListColor::Green);
    }

    #[test]
    fn task_priority_override_applies_by_title() {
        let t = template();
        let mut options = ExportOptions::default();
        options
            .task_priorities
            .insert("Clear surface".to_owned(), TaskPriority::Low);
        let out = export_template(&t, &options).unwrap();
        let reimported = import_template(out.as_bytes()).unwrap();
        assert_eq!(
            reimported.phases[0].task_lists[0].tasks[0].priority,
            TaskPriority::Low
        );
        assert_eq!(
            t.phases[0].task_lists[0].tasks[0].priority,
            TaskPriority::High
        );
    }

    #[test]
    fn canonical_form_is_a_fixed_point() {
        let first = export_template(&template(), &ExportOptions::default()).unwrap();
        let reimported = import_template(first.as_bytes()).unwrap();
        let second = export_template(&reimported, &ExportOptions::default()).unwrap();
        assert_eq!(first, second);
    }
}

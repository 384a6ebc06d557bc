//! Structural validation of modern templates.
//!
//! Validation never mutates and never fails: problems come back as data so
//! callers decide whether to block on them.

use std::fmt;

use crate::template::model::ProjectTemplate;

/// Worst issue level found during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Valid,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Valid => "valid",
            Self::Warning => "warning",
            Self::Error => "error",
        };
        f.write_str(s)
    }
}

/// Outcome of [`validate_template`].
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub severity: Severity,
}

/// Check the structural invariants of a modern template.
///
/// Errors: blank template name, no phases, a phase with a blank title or
/// no task lists, a task list with no tasks, a task with a blank title.
/// Warnings: missing template description, phase orders that do not
/// ascend, a task list with a blank name.
pub fn validate_template(template: &ProjectTemplate) -> ValidationReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if template.name.trim().is_empty() {
        errors.push("template name must not be empty".to_owned());
    }
    if template.description.is_none() {
        warnings.push("template has no description".to_owned());
    }
    if template.phases.is_empty() {
        errors.push("template must contain at least one phase".to_owned());
    }

    let mut last_order: Option<i32> = None;
    for (index, phase) in template.phases.iter().enumerate() {
        if phase.title.trim().is_empty() {
            errors.push(format!("phase {index} has an empty title"));
        }
        if phase.task_lists.is_empty() {
            errors.push(format!(
                "phase {:?} must contain at least one task list",
                phase.title
            ));
        }
        if let Some(previous) = last_order {
            if phase.order <= previous {
                warnings.push(format!(
                    "phase {:?} order {} does not ascend past {}",
                    phase.title, phase.order, previous
                ));
            }
        }
        last_order = Some(phase.order);

        for list in &phase.task_lists {
            if list.name.trim().is_empty() {
                warnings.push(format!("a task list in phase {:?} has a blank name", phase.title));
            }
            if list.tasks.is_empty() {
                errors.push(format!(
                    "task list {:?} in phase {:?} must contain at least one task",
                    list.name, phase.title
                ));
            }
            for task in &list.tasks {
                if task.title.trim().is_empty() {
                    errors.push(format!(
                        "a task in list {:?} of phase {:?} has an empty title",
                        list.name, phase.title
                    ));
                }
            }
        }
    }

    let severity = if !errors.is_empty() {
        Severity::Error
    } else if !warnings.is_empty() {
        Severity::Warning
    } else {
        Severity::Valid
    };

    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
        warnings,
        severity,
    }
}

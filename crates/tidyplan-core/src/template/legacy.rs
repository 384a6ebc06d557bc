//! Legacy flat-steps template schema and its migration to the modern shape.
//!
//! The legacy generation predates phases and task lists: each document
//! carries a flat `steps` array, and enum-like fields are raw strings.
//! Migration is structural and total -- every legacy step becomes exactly
//! one phase holding one synthesized task list, and every raw string maps
//! into its closed enum with a defined fallback.

use serde::Deserialize;

use crate::template::model::{
    Difficulty, ListColor, PhaseTemplate, ProjectTemplate, TaskListTemplate, TaskPriority,
    TaskTemplate, TemplateCategory, TemplateMetadata,
};

/// Name given to the task list synthesized for each migrated step.
pub const SYNTHESIZED_LIST_NAME: &str = "Tasks";

/// Author recorded when the legacy document has no author metadata.
pub const AUTHOR_PLACEHOLDER: &str = "unknown";

/// Version recorded when the legacy document has none.
pub const LEGACY_DEFAULT_VERSION: &str = "1.0";

// ---------------------------------------------------------------------------
// Legacy wire types
// ---------------------------------------------------------------------------

/// Top-level legacy template: flat `steps` instead of `phases`.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyTemplate {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub goal: Option<String>,
    /// Raw category string, mapped during migration.
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    pub steps: Vec<LegacyStep>,
    #[serde(default)]
    pub metadata: Option<LegacyMetadata>,
}

/// One legacy step: a title, an explicit order, and a flat task list.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyStep {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub order: i32,
    #[serde(default)]
    pub prerequisites: Option<Vec<String>>,
    #[serde(default)]
    pub tasks: Vec<LegacyTask>,
}

/// One legacy task with a raw priority string.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyTask {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Legacy metadata block with raw-string enum fields.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyMetadata {
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
}

// ---------------------------------------------------------------------------
// Migration
// ---------------------------------------------------------------------------

/// Convert a legacy template to the modern schema.
///
/// Each step becomes one phase retaining the step's `order` verbatim; the
/// step's tasks land in a single synthesized task list (fixed name, order
/// 0). Modern-only fields (`estimatedHours`, `dependsOn`, `subtasks`,
/// `templateReference`) are left unset, never fabricated.
pub fn convert_legacy(legacy: LegacyTemplate) -> ProjectTemplate {
    let category = TemplateCategory::from_label_or_default(legacy.category.as_deref().unwrap_or(""));
    let metadata = convert_metadata(legacy.metadata);

    let phases = legacy.steps.into_iter().map(convert_step).collect();

    ProjectTemplate {
        name: legacy.name,
        description: legacy.description,
        goal: legacy.goal,
        category,
        version: legacy
            .version
            .unwrap_or_else(|| LEGACY_DEFAULT_VERSION.to_owned()),
        phases,
        metadata,
    }
}

fn convert_step(step: LegacyStep) -> PhaseTemplate {
    let tasks = step.tasks.into_iter().map(convert_task).collect();
    PhaseTemplate {
        title: step.title,
        description: step.description,
        order: step.order,
        prerequisites: step.prerequisites.unwrap_or_default(),
        template_reference: None,
        estimated_duration: None,
        task_lists: vec![TaskListTemplate {
            name: SYNTHESIZED_LIST_NAME.to_owned(),
            description: None,
            color: ListColor::default(),
            order: 0,
            tasks,
        }],
    }
}

fn convert_task(task: LegacyTask) -> TaskTemplate {
    TaskTemplate {
        title: task.title,
        description: task.description,
        priority: TaskPriority::from_label_or_default(task.priority.as_deref().unwrap_or("")),
        estimated_duration: None,
        deadline: None,
        tags: task.tags.unwrap_or_default(),
        template_links: None,
        is_optional: None,
        estimated_hours: None,
        depends_on: Vec::new(),
        subtasks: Vec::new(),
    }
}

fn convert_metadata(metadata: Option<LegacyMetadata>) -> TemplateMetadata {
    let (author, difficulty) = match metadata {
        Some(m) => (m.author, m.difficulty),
        None => (None, None),
    };
    TemplateMetadata {
        author: author
            .filter(|a| !a.trim().is_empty())
            .unwrap_or_else(|| AUTHOR_PLACEHOLDER.to_owned()),
        difficulty: Difficulty::from_label_or_default(difficulty.as_deref().unwrap_or("")),
        tags: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legacy_from(json: &str) -> LegacyTemplate {
        serde_json::from_str(json).expect("legacy document should parse")
    }

    #[test]
    fn step_count_and_order_preserved() {
        let legacy = legacy_from(
            r#"{
                "name": "Old plan",
                "steps": [
                    {"title": "First", "order": 3, "tasks": [{"title": "t"}]},
                    {"title": "Second", "order": 7, "tasks": [{"title": "u"}]}
                ]
            }"#,
        );
        let modern = convert_legacy(legacy);
        assert_eq!(modern.phases.len(), 2);
        assert_eq!(modern.phases[0].order, 3);
        assert_eq!(modern.phases[1].order, 7);
    }

    #[test]
    fn each_step_gets_one_synthesized_list() {
        let legacy = legacy_from(
            r#"{"name": "X", "steps": [{"title": "S", "order": 0,
                "tasks": [{"title": "a"}, {"title": "b"}]}]}"#,
        );
        let modern = convert_legacy(legacy);
        let phase = &modern.phases[0];
        assert_eq!(phase.task_lists.len(), 1);
        assert_eq!(phase.task_lists[0].name, SYNTHESIZED_LIST_NAME);
        assert_eq!(phase.task_lists[0].order, 0);
        assert_eq!(phase.task_lists[0].tasks.len(), 2);
    }

    #[test]
    fn raw_priority_maps_with_medium_fallback() {
        let legacy = legacy_from(
            r#"{"name": "X", "steps": [{"title": "S", "order": 0, "tasks": [
                {"title": "a", "priority": "HIGH"},
                {"title": "b", "priority": "low"},
                {"title": "c", "priority": "whenever"},
                {"title": "d"}
            ]}]}"#,
        );
        let tasks = &convert_legacy(legacy).phases[0].task_lists[0].tasks;
        let priorities: Vec<TaskPriority> = tasks.iter().map(|t| t.priority).collect();
        assert_eq!(
            priorities,
            vec![
                TaskPriority::High,
                TaskPriority::Low,
                TaskPriority::Medium,
                TaskPriority::Medium,
            ]
        );
    }

    #[test]
    fn category_and_difficulty_fall_back_when_unrecognized() {
        let legacy = legacy_from(
            r#"{"name": "X", "category": "alchemy",
                "metadata": {"difficulty": "brutal"},
                "steps": [{"title": "S", "order": 0, "tasks": [{"title": "t"}]}]}"#,
        );
        let modern = convert_legacy(legacy);
        assert_eq!(modern.category, TemplateCategory::Other);
        assert_eq!(modern.metadata.difficulty, Difficulty::Intermediate);
    }

    #[test]
    fn missing_author_gets_placeholder() {
        let legacy = legacy_from(
            r#"{"name": "X", "steps": [{"title": "S", "order": 0, "tasks": [{"title": "t"}]}]}"#,
        );
        assert_eq!(convert_legacy(legacy).metadata.author, AUTHOR_PLACEHOLDER);
    }

    #[test]
    fn present_author_is_kept() {
        let legacy = legacy_from(
            r#"{"name": "X", "metadata": {"author": "kim"},
                "steps": [{"title": "S", "order": 0, "tasks": [{"title": "t"}]}]}"#,
        );
        assert_eq!(convert_legacy(legacy).metadata.author, "kim");
    }

    #[test]
    fn modern_only_fields_stay_unset() {
        let legacy = legacy_from(
            r#"{"name": "X", "steps": [{"title": "S", "order": 0,
                "tasks": [{"title": "t", "priority": "high"}]}]}"#,
        );
        let modern = convert_legacy(legacy);
        let phase = &modern.phases[0];
        assert_eq!(phase.template_reference, None);
        let task = &phase.task_lists[0].tasks[0];
        assert_eq!(task.estimated_hours, None);
        assert!(task.depends_on.is_empty());
        assert!(task.subtasks.is_empty());
    }

    #[test]
    fn missing_version_defaults() {
        let legacy = legacy_from(
            r#"{"name": "X", "steps": [{"title": "S", "order": 0, "tasks": [{"title": "t"}]}]}"#,
        );
        assert_eq!(convert_legacy(legacy).version, LEGACY_DEFAULT_VERSION);
    }

    #[test]
    fn prerequisites_default_to_empty() {
        let legacy = legacy_from(
            r#"{"name": "X", "steps": [
                {"title": "A", "order": 0, "tasks": [{"title": "t"}]},
                {"title": "B", "order": 1, "prerequisites": ["A"], "tasks": [{"title": "u"}]}
            ]}"#,
        );
        let modern = convert_legacy(legacy);
        assert!(modern.phases[0].prerequisites.is_empty());
        assert_eq!(modern.phases[1].prerequisites, vec!["A".to_owned()]);
    }
}

//! Modern project-template schema.
//!
//! These types map directly to the on-disk JSON format and are
//! (de)serialized via `serde`. Raw enum-like strings from older documents
//! never reach these types: each closed enum provides a label lookup with
//! a defined fallback, used during migration.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Template category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    Declutter,
    Renovation,
    Moving,
    Organization,
    Cleaning,
    #[default]
    Other,
}

impl TemplateCategory {
    pub const ALL: &'static [TemplateCategory] = &[
        TemplateCategory::Declutter,
        TemplateCategory::Renovation,
        TemplateCategory::Moving,
        TemplateCategory::Organization,
        TemplateCategory::Cleaning,
        TemplateCategory::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Declutter => "declutter",
            Self::Renovation => "renovation",
            Self::Moving => "moving",
            Self::Organization => "organization",
            Self::Cleaning => "cleaning",
            Self::Other => "other",
        }
    }

    /// Map a raw label case-insensitively; unrecognized or blank labels
    /// fall back to [`TemplateCategory::Other`].
    pub fn from_label_or_default(label: &str) -> Self {
        let needle = label.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(needle))
            .unwrap_or_default()
    }
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Difficulty rating carried in template metadata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: &'static [Difficulty] = &[
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Map a raw label case-insensitively; unrecognized or blank labels
    /// fall back to [`Difficulty::Intermediate`].
    pub fn from_label_or_default(label: &str) -> Self {
        let needle = label.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.as_str().eq_ignore_ascii_case(needle))
            .unwrap_or_default()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task priority in templates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TaskPriority {
    pub const ALL: &'static [TaskPriority] =
        &[TaskPriority::Low, TaskPriority::Medium, TaskPriority::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Map a raw label case-insensitively; unrecognized or blank labels
    /// fall back to [`TaskPriority::Medium`].
    pub fn from_label_or_default(label: &str) -> Self {
        let needle = label.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.as_str().eq_ignore_ascii_case(needle))
            .unwrap_or_default()
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display color of a task list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListColor {
    Red,
    Orange,
    Yellow,
    Green,
    #[default]
    Blue,
    Purple,
    Gray,
}

impl ListColor {
    pub const ALL: &'static [ListColor] = &[
        ListColor::Red,
        ListColor::Orange,
        ListColor::Yellow,
        ListColor::Green,
        ListColor::Blue,
        ListColor::Purple,
        ListColor::Gray,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Gray => "gray",
        }
    }
}

impl fmt::Display for ListColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Structs
// ---------------------------------------------------------------------------

/// Top-level modern template: phases, each holding task lists of tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTemplate {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    pub category: TemplateCategory,
    pub version: String,
    pub phases: Vec<PhaseTemplate>,
    pub metadata: TemplateMetadata,
}

/// One ordered phase of a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseTemplate {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// 0-based, ascending. Carried over verbatim during legacy migration.
    pub order: i32,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_duration: Option<String>,
    pub task_lists: Vec<TaskListTemplate>,
}

/// A named list of tasks within a phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskListTemplate {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub color: ListColor,
    pub order: i32,
    pub tasks: Vec<TaskTemplate>,
}

/// A single template task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskTemplate {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_links: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_optional: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f64>,
    #[serde(default)]
    pub depends_on: Vec<String>,
    #[serde(default)]
    pub subtasks: Vec<TaskTemplate>,
}

/// Template authorship and rating metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateMetadata {
    pub author: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_label_fallback_is_other() {
        assert_eq!(
            TemplateCategory::from_label_or_default("Declutter"),
            TemplateCategory::Declutter
        );
        assert_eq!(
            TemplateCategory::from_label_or_default("sorcery"),
            TemplateCategory::Other
        );
        assert_eq!(
            TemplateCategory::from_label_or_default(""),
            TemplateCategory::Other
        );
    }

    #[test]
    fn difficulty_label_fallback_is_intermediate() {
        assert_eq!(
            Difficulty::from_label_or_default("ADVANCED"),
            Difficulty::Advanced
        );
        assert_eq!(
            Difficulty::from_label_or_default("impossible"),
            Difficulty::Intermediate
        );
    }

    #[test]
    fn priority_label_fallback_is_medium() {
        assert_eq!(TaskPriority::from_label_or_default("HIGH"), TaskPriority::High);
        assert_eq!(TaskPriority::from_label_or_default("low"), TaskPriority::Low);
        assert_eq!(
            TaskPriority::from_label_or_default("critical"),
            TaskPriority::Medium
        );
        assert_eq!(TaskPriority::from_label_or_default(""), TaskPriority::Medium);
    }

    #[test]
    fn wire_keys_are_camel_case() {
        let task = TaskTemplate {
            title: "T".to_owned(),
            description: None,
            priority: TaskPriority::High,
            estimated_duration: None,
            deadline: None,
            tags: vec![],
            template_links: None,
            is_optional: Some(true),
            estimated_hours: Some(1.5),
            depends_on: vec!["other".to_owned()],
            subtasks: vec![],
        };
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"isOptional\""));
        assert!(json.contains("\"estimatedHours\""));
        assert!(json.contains("\"dependsOn\""));
        assert!(!json.contains("\"templateLinks\""), "skipped when absent");
    }

    #[test]
    fn list_color_defaults_to_blue() {
        assert_eq!(ListColor::default(), ListColor::Blue);
    }

    #[test]
    fn modern_document_roundtrips_through_serde() {
        let json = r#"{
            "name": "Garage overhaul",
            "category": "declutter",
            "version": "2.0",
            "phases": [{
                "title": "Sort",
                "order": 0,
                "taskLists": [{
                    "name": "Bench",
                    "color": "green",
                    "order": 0,
                    "tasks": [{"title": "Clear surface", "priority": "high"}]
                }]
            }],
            "metadata": {"author": "sam", "difficulty": "beginner"}
        }"#;
        let template: ProjectTemplate = serde_json::from_str(json).unwrap();
        assert_eq!(template.phases.len(), 1);
        assert_eq!(template.phases[0].task_lists[0].color, ListColor::Green);
        assert_eq!(
            template.phases[0].task_lists[0].tasks[0].priority,
            TaskPriority::High
        );

        let reencoded = serde_json::to_string(&template).unwrap();
        let reparsed: ProjectTemplate = serde_json::from_str(&reencoded).unwrap();
        assert_eq!(template, reparsed);
    }
}

//! Project templates: modern schema, legacy migration, validation, export.

pub mod export;
pub mod import;
pub mod legacy;
pub mod model;
pub mod sample;
pub mod validate;

pub use export::{ExportError, ExportOptions, export_template};
pub use import::{TemplateImportError, import_template};
pub use legacy::{LegacyStep, LegacyTask, LegacyTemplate, convert_legacy};
pub use model::{
    Difficulty, ListColor, PhaseTemplate, ProjectTemplate, TaskListTemplate, TaskPriority,
    TaskTemplate, TemplateCategory, TemplateMetadata,
};
pub use sample::{LEGACY_SAMPLE, MODERN_SAMPLE};
pub use validate::{Severity, ValidationReport, validate_template};

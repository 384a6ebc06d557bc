//! Tolerant ingestion, normalization and migration of tidy-up plans and
//! project templates.
//!
//! Two document families flow through this crate:
//!
//! - **Plans**: loosely structured JSON task-plan suggestions (typically
//!   model output, possibly fenced) are normalized into a strict [`Plan`]
//!   by [`decode_plan`]. Field-level problems are recovered silently;
//!   only document-level failures surface as errors.
//! - **Templates**: modern [`ProjectTemplate`] documents pass through
//!   unchanged, legacy flat-steps documents are migrated to the modern
//!   schema by [`import_template`], validated by [`validate_template`],
//!   and re-encoded deterministically by [`export_template`].
//!
//! [`build_plan_prompt`] generates the instruction text for a generative
//! provider from the same tables the decoder reads, so the advertised
//! schema and the accepted schema cannot drift apart.

pub mod dates;
pub mod defaults;
pub mod fence;
pub mod plan;
pub mod prompt;
pub mod template;

pub use dates::normalize_date;
pub use defaults::PlanDefaults;
pub use fence::strip_code_fence;
pub use plan::{ExitTag, Locale, Plan, PlanDecodeError, TidyTask, decode_plan};
pub use prompt::build_plan_prompt;
pub use template::{
    Difficulty, ExportError, ExportOptions, LegacyTemplate, ListColor, PhaseTemplate,
    ProjectTemplate, Severity, TaskListTemplate, TaskPriority, TaskTemplate, TemplateCategory,
    TemplateImportError, TemplateMetadata, ValidationReport, export_template, import_template,
    validate_template,
};

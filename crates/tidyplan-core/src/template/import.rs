//! Template import: modern passthrough or legacy migration.

use thiserror::Error;

use crate::fence::strip_code_fence;
use crate::template::legacy::{LegacyTemplate, convert_legacy};
use crate::template::model::ProjectTemplate;

/// Errors from importing a template buffer.
#[derive(Debug, Error)]
pub enum TemplateImportError {
    #[error("input is not valid UTF-8: {0}")]
    NotUtf8(#[from] std::str::Utf8Error),

    #[error(
        "unsupported template: input matches neither the modern schema ({modern}) \
         nor the legacy steps schema ({legacy})"
    )]
    Unsupported { modern: String, legacy: String },
}

/// Import a template document from a byte buffer.
///
/// Modern decode is attempted first: the two schema generations are
/// structurally disjoint (`phases` vs `steps`), so trying modern first
/// costs nothing and keeps the path forward-compatible. A modern document
/// passes through unchanged; a legacy document is migrated; anything else
/// fails whole -- no partial structure is ever emitted.
pub fn import_template(bytes: &[u8]) -> Result<ProjectTemplate, TemplateImportError> {
    let text = std::str::from_utf8(bytes)?;
    let stripped = strip_code_fence(text);

    let modern_err = match serde_json::from_str::<ProjectTemplate>(stripped) {
        Ok(template) => return Ok(template),
        Err(e) => e,
    };

    match serde_json::from_str::<LegacyTemplate>(stripped) {
        Ok(legacy) => {
            tracing::debug!(steps = legacy.steps.len(), "migrating legacy template");
            Ok(convert_legacy(legacy))
        }
        Err(legacy_err) => Err(TemplateImportError::Unsupported {
            modern: modern_err.to_string(),
            legacy: legacy_err.to_string(),
        }),
    }
}

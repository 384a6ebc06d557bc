//! Strict plan model produced by the tolerant decoder.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Destination for an item once its task is done.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExitTag {
    #[default]
    Keep,
    Donate,
    Sell,
    Recycle,
    Trash,
}

impl ExitTag {
    /// All variants, in wire order. Generation prompts are built from this
    /// table, so the advertised value set cannot drift from the decoder's.
    pub const ALL: &'static [ExitTag] = &[
        ExitTag::Keep,
        ExitTag::Donate,
        ExitTag::Sell,
        ExitTag::Recycle,
        ExitTag::Trash,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Keep => "KEEP",
            Self::Donate => "DONATE",
            Self::Sell => "SELL",
            Self::Recycle => "RECYCLE",
            Self::Trash => "TRASH",
        }
    }

    /// Case-insensitive label lookup. Returns `None` for unrecognized
    /// labels; the decoder falls back to [`ExitTag::Keep`] on `None`.
    pub fn from_label(label: &str) -> Option<ExitTag> {
        let needle = label.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(needle))
    }
}

impl fmt::Display for ExitTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Structs
// ---------------------------------------------------------------------------

/// Country/city pair attached to a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    pub country: String,
    pub city: String,
}

/// A normalized tidy-up plan. Invariant: `tasks` is never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Project title, defaulted when the input carries none.
    pub project: String,
    /// Locale, filled field-by-field from caller defaults.
    pub locale: Locale,
    /// Ordered tasks; at least one.
    pub tasks: Vec<TidyTask>,
}

/// A single normalized task within a [`Plan`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TidyTask {
    /// Stable id; generated when the input has none.
    pub id: String,
    /// Non-empty trimmed title.
    pub title: String,
    /// Free-text area or room, if given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    /// Where the item goes when the task completes.
    #[serde(rename = "exitTag", default)]
    pub exit_tag: ExitTag,
    /// Priority 1 (lowest) to 4 (highest).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    /// Estimated effort in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effort_min: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checklist: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Canonical `yyyy-MM-dd` due date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_tag_label_lookup_is_case_insensitive() {
        assert_eq!(ExitTag::from_label("donate"), Some(ExitTag::Donate));
        assert_eq!(ExitTag::from_label("DONATE"), Some(ExitTag::Donate));
        assert_eq!(ExitTag::from_label(" Trash "), Some(ExitTag::Trash));
    }

    #[test]
    fn exit_tag_unknown_label_yields_none() {
        assert_eq!(ExitTag::from_label("burn"), None);
        assert_eq!(ExitTag::from_label(""), None);
    }

    #[test]
    fn exit_tag_default_is_keep() {
        assert_eq!(ExitTag::default(), ExitTag::Keep);
    }

    #[test]
    fn exit_tag_serializes_uppercase() {
        let json = serde_json::to_string(&ExitTag::Recycle).unwrap();
        assert_eq!(json, "\"RECYCLE\"");
    }

    #[test]
    fn all_table_matches_display() {
        for tag in ExitTag::ALL {
            assert_eq!(ExitTag::from_label(tag.as_str()), Some(*tag));
            assert_eq!(tag.to_string(), tag.as_str());
        }
    }
}

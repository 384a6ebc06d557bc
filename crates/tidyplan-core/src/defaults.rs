//! Caller-supplied defaults used to fill blank or missing plan fields.

use crate::plan::Locale;

/// Project title used when the input carries none.
pub const DEFAULT_PROJECT_TITLE: &str = "Tidy-up plan";

/// Built-in locale fallbacks, overridable via environment.
pub const DEFAULT_COUNTRY: &str = "US";
pub const DEFAULT_CITY: &str = "Seattle";

/// Defaults injected into [`crate::decode_plan`].
///
/// The decoder fills a blank project title from `project_title` and blank
/// locale fields from `locale`, country and city independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanDefaults {
    pub project_title: String,
    pub locale: Locale,
}

impl Default for PlanDefaults {
    fn default() -> Self {
        Self {
            project_title: DEFAULT_PROJECT_TITLE.to_owned(),
            locale: Locale {
                country: DEFAULT_COUNTRY.to_owned(),
                city: DEFAULT_CITY.to_owned(),
            },
        }
    }
}

impl PlanDefaults {
    /// Resolve defaults using the chain: env var > built-in default.
    ///
    /// Honors `TIDYPLAN_DEFAULT_COUNTRY` and `TIDYPLAN_DEFAULT_CITY`; blank
    /// values are treated as unset.
    pub fn from_env() -> Self {
        let country = env_or("TIDYPLAN_DEFAULT_COUNTRY", DEFAULT_COUNTRY);
        let city = env_or("TIDYPLAN_DEFAULT_CITY", DEFAULT_CITY);
        Self {
            project_title: DEFAULT_PROJECT_TITLE.to_owned(),
            locale: Locale { country, city },
        }
    }
}

fn env_or(var: &str, fallback: &str) -> String {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => value.trim().to_owned(),
        _ => fallback.to_owned(),
    }
}

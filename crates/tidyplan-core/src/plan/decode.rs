//! Tolerant plan decoder: raw model output in, strict [`Plan`] out.
//!
//! Every field is read through an explicit multi-shape reader (try the
//! typed form, then the tolerated alternates) that returns an optional
//! value instead of failing. Field-level problems are absorbed by
//! defaulting or dropping; only document-level problems surface as
//! [`PlanDecodeError`].

use serde_json::{Map, Value};
use thiserror::Error;
use uuid::Uuid;

use crate::dates::normalize_date;
use crate::defaults::PlanDefaults;
use crate::fence::strip_code_fence;
use crate::plan::model::{ExitTag, Locale, Plan, TidyTask};

/// Errors from decoding a plan document.
#[derive(Debug, Error)]
pub enum PlanDecodeError {
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    #[error("plan contains no usable tasks")]
    MissingTasks,
}

// ---------------------------------------------------------------------------
// Accepted key names
// ---------------------------------------------------------------------------

/// Accepted key names per field, canonical name first. Readers try them in
/// order; generation prompts advertise the canonical name. Shared with
/// `crate::prompt` so the two cannot drift.
pub(crate) mod keys {
    pub const PROJECT: &[&str] = &["project", "title", "name"];
    pub const LOCALE: &[&str] = &["locale", "location"];
    pub const COUNTRY: &[&str] = &["country"];
    pub const CITY: &[&str] = &["city", "town"];
    pub const TASKS: &[&str] = &["tasks", "items"];

    pub const TASK_ID: &[&str] = &["id"];
    pub const TASK_TITLE: &[&str] = &["title", "name"];
    pub const TASK_AREA: &[&str] = &["area", "room", "zone"];
    pub const TASK_EXIT_TAG: &[&str] = &["exitTag", "exit_tag", "tag"];
    pub const TASK_PRIORITY: &[&str] = &["priority"];
    pub const TASK_EFFORT_MIN: &[&str] = &["effort_min", "effort", "minutes"];
    pub const TASK_LABELS: &[&str] = &["labels", "tags"];
    pub const TASK_LINKS: &[&str] = &["links"];
    pub const TASK_CHECKLIST: &[&str] = &["checklist", "steps"];
    pub const TASK_RATIONALE: &[&str] = &["rationale", "reason"];
    pub const TASK_URL: &[&str] = &["url", "link"];
    pub const TASK_DUE_AT: &[&str] = &["due_at", "due", "due_date", "deadline"];
}

/// Label-to-priority mapping for non-numeric priority values. Matched
/// case-insensitively; shared with `crate::prompt`.
pub(crate) const PRIORITY_LABELS: &[(&str, u8)] = &[
    ("urgent", 4),
    ("high", 4),
    ("medium", 3),
    ("normal", 3),
    ("low", 2),
];

pub(crate) const PRIORITY_MIN: u8 = 1;
pub(crate) const PRIORITY_MAX: u8 = 4;

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// Decode raw (possibly fenced) text into a [`Plan`].
///
/// Blank project title and blank locale fields are filled from `defaults`,
/// country and city independently. Tasks without a usable title are
/// dropped; all other task-level problems are recovered by defaulting.
pub fn decode_plan(text: &str, defaults: &PlanDefaults) -> Result<Plan, PlanDecodeError> {
    let stripped = strip_code_fence(text);

    let root: Value = serde_json::from_str(stripped)
        .map_err(|e| PlanDecodeError::InvalidJson(e.to_string()))?;
    let root = root
        .as_object()
        .ok_or_else(|| PlanDecodeError::InvalidJson("top-level value is not an object".into()))?;

    let project =
        read_string(root, keys::PROJECT).unwrap_or_else(|| defaults.project_title.clone());

    let locale_obj = field(root, keys::LOCALE).and_then(Value::as_object);
    let country = locale_obj
        .and_then(|obj| read_string(obj, keys::COUNTRY))
        .unwrap_or_else(|| defaults.locale.country.clone());
    let city = locale_obj
        .and_then(|obj| read_string(obj, keys::CITY))
        .unwrap_or_else(|| defaults.locale.city.clone());
    // Unreachable when defaults are populated; kept as a guard so a blank
    // locale can never leave the decoder.
    if country.trim().is_empty() || city.trim().is_empty() {
        return Err(PlanDecodeError::InvalidJson(
            "locale is blank after defaulting".into(),
        ));
    }

    let raw_tasks = field(root, keys::TASKS)
        .and_then(Value::as_array)
        .filter(|tasks| !tasks.is_empty())
        .ok_or(PlanDecodeError::MissingTasks)?;

    let mut tasks = Vec::with_capacity(raw_tasks.len());
    for (index, raw) in raw_tasks.iter().enumerate() {
        match decode_task(raw) {
            Some(task) => tasks.push(task),
            None => tracing::warn!(index, "dropping task without a usable title"),
        }
    }
    if tasks.is_empty() {
        return Err(PlanDecodeError::MissingTasks);
    }

    tracing::debug!(project = %project, tasks = tasks.len(), "decoded plan");
    Ok(Plan {
        project,
        locale: Locale { country, city },
        tasks,
    })
}

/// Decode one raw task. Returns `None` only when no usable title exists.
fn decode_task(raw: &Value) -> Option<TidyTask> {
    let obj = raw.as_object()?;
    let title = read_string(obj, keys::TASK_TITLE)?;

    let id = read_string(obj, keys::TASK_ID).unwrap_or_else(|| Uuid::new_v4().to_string());

    let exit_tag = read_string(obj, keys::TASK_EXIT_TAG)
        .and_then(|label| ExitTag::from_label(&label))
        .unwrap_or_default();

    let checklist = read_string_list(obj, keys::TASK_CHECKLIST)
        .or_else(|| read_string(obj, keys::TASK_RATIONALE).map(|rationale| vec![rationale]));

    let due_at = read_string(obj, keys::TASK_DUE_AT).and_then(|raw| normalize_date(&raw));

    Some(TidyTask {
        id,
        title,
        area: read_string(obj, keys::TASK_AREA),
        exit_tag,
        priority: read_priority(obj),
        effort_min: read_effort_min(obj),
        labels: read_string_list(obj, keys::TASK_LABELS),
        links: read_string_list(obj, keys::TASK_LINKS),
        checklist,
        url: read_string(obj, keys::TASK_URL),
        due_at,
    })
}

// ---------------------------------------------------------------------------
// Multi-shape field readers
// ---------------------------------------------------------------------------

/// First present key from `keys`, in order.
fn field<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| obj.get(*key))
}

/// Read a string field: strings are trimmed (blank counts as missing),
/// numbers are stringified, anything else is absent.
fn read_string(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    match field(obj, keys)? {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_owned())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Read an array of strings: entries are trimmed, empties dropped, and an
/// empty result counts as absent.
fn read_string_list(obj: &Map<String, Value>, keys: &[&str]) -> Option<Vec<String>> {
    let items = field(obj, keys)?.as_array()?;
    let cleaned: Vec<String> = items
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect();
    (!cleaned.is_empty()).then_some(cleaned)
}

/// Read a priority: an integer in `[PRIORITY_MIN, PRIORITY_MAX]`, or a
/// numeric string in that range, or a known label.
fn read_priority(obj: &Map<String, Value>) -> Option<u8> {
    match field(obj, keys::TASK_PRIORITY)? {
        Value::Number(n) => n.as_i64().and_then(priority_in_range),
        Value::String(s) => {
            let trimmed = s.trim();
            match trimmed.parse::<i64>() {
                Ok(n) => priority_in_range(n),
                Err(_) => priority_from_label(trimmed),
            }
        }
        _ => None,
    }
}

fn priority_in_range(n: i64) -> Option<u8> {
    (i64::from(PRIORITY_MIN)..=i64::from(PRIORITY_MAX))
        .contains(&n)
        .then_some(n as u8)
}

/// Case-insensitive priority label lookup against [`PRIORITY_LABELS`].
pub(crate) fn priority_from_label(label: &str) -> Option<u8> {
    let needle = label.trim();
    PRIORITY_LABELS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(needle))
        .map(|(_, priority)| *priority)
}

/// Read effort minutes: an integer, or the first integer embedded in a
/// string label such as `"30 min"`.
fn read_effort_min(obj: &Map<String, Value>) -> Option<u32> {
    match field(obj, keys::TASK_EFFORT_MIN)? {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => parse_embedded_minutes(s),
        _ => None,
    }
}

fn parse_embedded_minutes(s: &str) -> Option<u32> {
    let digits: String = s
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

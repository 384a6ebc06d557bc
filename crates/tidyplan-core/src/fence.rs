//! Markdown code-fence stripping for raw model output.
//!
//! Generative providers frequently wrap JSON responses in triple-backtick
//! fences with an optional language tag. [`strip_code_fence`] removes that
//! wrapping before any decode attempt.

const FENCE: &str = "```";

/// Strip a surrounding markdown code fence from `text`.
///
/// The leading and trailing strips are independent: a text whose first line
/// starts with a fence token has that whole line removed even when no
/// closing fence exists, and a trailing fence is removed even without a
/// leading one. This mirrors how the inputs actually arrive (truncated
/// responses, fences glued to the payload) and is intentionally not gated
/// on a matched pair. Idempotent on unfenced text.
pub fn strip_code_fence(text: &str) -> &str {
    let mut s = text.trim();

    if s.starts_with(FENCE) {
        // Drop the fence token and a possible language tag with it.
        s = match s.find('\n') {
            Some(idx) => &s[idx + 1..],
            None => "",
        };
    }

    if s.ends_with(FENCE) {
        if let Some(idx) = s.rfind(FENCE) {
            s = &s[..idx];
        }
    }

    s.trim()
}

use once_cell::sync::Lazy;
use regex::Regex;

pub const UNTITLED_SESSION: &str = "Untitled Session";

const MAX_SLUG_CHARS: usize = 40;
const MAX_SUMMARY_CHARS: usize = 60;

static NON_ALPHANUMERIC_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Filesystem-safe slug of a title
///
/// Lowercases, collapses every run of characters outside `[a-z0-9]` into one `-`,
/// keeps the first 40 characters, then trims `-` from both ends.
///
/// # Examples
///
/// ```
/// use session_transcripts::text::slugify;
///
/// assert_eq!(slugify("Fix the Build (again)!"), "fix-the-build-again");
/// ```
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let hyphenated = NON_ALPHANUMERIC_RUN.replace_all(&lowered, "-");
    let truncated: String = hyphenated.chars().take(MAX_SLUG_CHARS).collect();
    truncated.trim_matches('-').to_string()
}

/// Short single-line summary of a message: first 60 characters, newlines as spaces,
/// `...` appended when anything was cut
pub fn summarize(text: &str) -> String {
    let head: String = text.chars().take(MAX_SUMMARY_CHARS).collect();
    let mut summary = head.replace('\n', " ");
    if text.chars().nth(MAX_SUMMARY_CHARS).is_some() {
        summary.push_str("...");
    }
    summary
}

/// Pick the session title: external title, then first user message, then a placeholder
pub fn derive_title(external: Option<&str>, first_user_text: Option<&str>) -> String {
    if let Some(title) = external.filter(|t| !t.trim().is_empty()) {
        return title.to_string();
    }
    match first_user_text {
        Some(text) if !text.is_empty() => summarize(text),
        _ => UNTITLED_SESSION.to_string(),
    }
}

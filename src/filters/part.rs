use crate::models::{Part, PartKind, Timestamp};

/// Text of a part that belongs in a transcript
///
/// Only non-synthetic `text` parts with non-blank content qualify; reasoning,
/// tool calls, step markers, files and the rest are dropped.
pub fn extract_part_text(part: &Part) -> Option<String> {
    if part.kind != PartKind::Text || part.synthetic.unwrap_or(false) {
        return None;
    }

    let text = part.text.as_deref()?.trim();
    if text.is_empty() { None } else { Some(text.to_string()) }
}

/// A part's own start time, falling back to the time its message was created
pub fn part_timestamp(part: &Part, message_created: Option<Timestamp>) -> Option<Timestamp> {
    part.started().or(message_created)
}

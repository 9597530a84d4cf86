use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{BlockKind, ClaudeRecord, ContentBlock, MessageContent, Role};

/// Record types that never carry conversation
const NON_CONVERSATION_TYPES: [&str; 4] =
    ["queue-operation", "file-history-snapshot", "system", "summary"];

/// Harness markers such as `<command-name>` or `<local-command-stdout>`
static COMMAND_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<(local-)?command-").unwrap());

pub fn is_command_message(content: &str) -> bool {
    COMMAND_TAG.is_match(content)
}

/// Whole-record drops that do not depend on the role or content
pub fn should_skip_record(record: &ClaudeRecord) -> bool {
    if record.record_type.as_deref().is_some_and(|t| NON_CONVERSATION_TYPES.contains(&t)) {
        return true;
    }
    if record.message.is_none() {
        return true;
    }
    record.is_meta.unwrap_or(false)
}

/// Classify one record and pull out its visible text
///
/// Returns `None` when the record is dropped or extracts to nothing.
pub fn extract_message(record: &ClaudeRecord) -> Option<(Role, String)> {
    if should_skip_record(record) {
        return None;
    }

    let message = record.message.as_ref()?;
    let role = Role::parse(message.role.as_deref()?)?;

    let text = match (role, message.content.as_ref()?) {
        (Role::User, MessageContent::Text(content)) => {
            if is_command_message(content) {
                return None;
            }
            content.trim().to_string()
        }
        (Role::User, MessageContent::Blocks(blocks)) => {
            if is_tool_result_only(blocks) {
                return None;
            }
            join_text_blocks(blocks)
        }
        (Role::Assistant, MessageContent::Blocks(blocks)) => join_text_blocks(blocks),
        // Assistant turns are always block lists; a bare string is not a reply
        (Role::Assistant, MessageContent::Text(_)) => return None,
        (_, MessageContent::Other(_)) => return None,
    };

    if text.is_empty() { None } else { Some((role, text)) }
}

/// True when the message answers tool calls and has no text of its own
fn is_tool_result_only(blocks: &[ContentBlock]) -> bool {
    let has_tool_result = blocks.iter().any(|b| b.kind() == Some(&BlockKind::ToolResult));
    let has_text = blocks.iter().any(|b| b.kind() == Some(&BlockKind::Text));
    has_tool_result && !has_text
}

/// Newline-joined text of the non-synthetic `text` blocks, trimmed
pub fn join_text_blocks(blocks: &[ContentBlock]) -> String {
    let texts: Vec<&str> = blocks
        .iter()
        .filter_map(|block| match block {
            ContentBlock::Typed(typed)
                if typed.kind == BlockKind::Text && !typed.synthetic.unwrap_or(false) =>
            {
                typed.text.as_deref()
            }
            _ => None,
        })
        .collect();

    texts.join("\n").trim().to_string()
}

use serde::Deserialize;
use serde_json::Value;

use super::Timestamp;

/// One line of a Claude Code session JSONL file
///
/// Every field is optional: records are looked up defensively and a missing
/// field is a filtering decision, not a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaudeRecord {
    #[serde(rename = "type", default)]
    pub record_type: Option<String>,
    #[serde(default)]
    pub message: Option<ClaudeMessage>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient_timestamp")]
    pub timestamp: Option<Timestamp>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_non_empty_string")]
    pub session_id: Option<String>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_non_empty_string")]
    pub cwd: Option<String>,
    #[serde(default)]
    pub is_meta: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClaudeMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<MessageContent>,
}

/// Message content is either a plain string or a list of typed blocks
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Blocks(Vec<ContentBlock>),
    Other(Value),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ContentBlock {
    Typed(TypedBlock),
    /// Anything that is not an object with a `type` field
    Other(Value),
}

impl ContentBlock {
    pub fn kind(&self) -> Option<&BlockKind> {
        match self {
            ContentBlock::Typed(block) => Some(&block.kind),
            ContentBlock::Other(_) => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypedBlock {
    #[serde(rename = "type")]
    pub kind: BlockKind,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub synthetic: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Text,
    ToolUse,
    ToolResult,
    Thinking,
    RedactedThinking,
    Image,
    #[serde(other)]
    Other,
}

/// `sessions-index.json` sidecar written next to the session files
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionsIndex {
    #[serde(default)]
    pub entries: Vec<SessionsIndexEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionsIndexEntry {
    #[serde(default)]
    pub full_path: Option<String>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_non_empty_string")]
    pub session_id: Option<String>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_non_empty_string")]
    pub summary: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_with_string_content() {
        let json = r#"{"type":"user","message":{"role":"user","content":"hello"},"timestamp":"2024-01-01T10:05:00Z","sessionId":"s1","cwd":"/tmp/p"}"#;
        let record: ClaudeRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.record_type.as_deref(), Some("user"));
        assert_eq!(record.session_id.as_deref(), Some("s1"));
        assert_eq!(record.cwd.as_deref(), Some("/tmp/p"));
        assert!(record.timestamp.is_some());
        let message = record.message.unwrap();
        assert!(matches!(message.content, Some(MessageContent::Text(ref s)) if s == "hello"));
    }

    #[test]
    fn test_record_with_mixed_blocks() {
        let json = r#"{"type":"assistant","message":{"role":"assistant","content":[
            {"type":"thinking","thinking":"hmm"},
            {"type":"text","text":"answer"},
            {"type":"tool_use","id":"t1","name":"read","input":{}},
            "stray string",
            {"type":"server_tool_use"}
        ]}}"#;
        let record: ClaudeRecord = serde_json::from_str(json).unwrap();

        let Some(MessageContent::Blocks(blocks)) = record.message.unwrap().content else {
            panic!("expected block content");
        };
        let kinds: Vec<_> = blocks.iter().map(|b| b.kind().cloned()).collect();
        assert_eq!(
            kinds,
            vec![
                Some(BlockKind::Thinking),
                Some(BlockKind::Text),
                Some(BlockKind::ToolUse),
                None,
                Some(BlockKind::Other),
            ]
        );
    }

    #[test]
    fn test_record_without_message() {
        let json = r#"{"type":"file-history-snapshot","messageId":"m1","snapshot":{}}"#;
        let record: ClaudeRecord = serde_json::from_str(json).unwrap();
        assert!(record.message.is_none());
        assert!(record.timestamp.is_none());
    }

    #[test]
    fn test_unusual_content_shape_is_tolerated() {
        let json = r#"{"type":"user","message":{"role":"user","content":42}}"#;
        let record: ClaudeRecord = serde_json::from_str(json).unwrap();
        assert!(matches!(record.message.unwrap().content, Some(MessageContent::Other(_))));
    }

    #[test]
    fn test_sessions_index() {
        let json = r#"{"version":1,"entries":[{"sessionId":"s1","fullPath":"/p/s1.jsonl","summary":"Fix the build"},{"sessionId":"s2","summary":""}]}"#;
        let index: SessionsIndex = serde_json::from_str(json).unwrap();
        assert_eq!(index.entries.len(), 2);
        assert_eq!(index.entries[0].summary.as_deref(), Some("Fix the build"));
        assert_eq!(index.entries[1].summary, None);
    }
}

use serde::Deserialize;

use super::Timestamp;

/// `session/global/<id>.json`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionInfo {
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_non_empty_string")]
    pub id: Option<String>,
    #[serde(
        rename = "parentID",
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_non_empty_string"
    )]
    pub parent_id: Option<String>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_non_empty_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_non_empty_string")]
    pub directory: Option<String>,
    #[serde(default)]
    pub time: Option<TimeInfo>,
}

impl SessionInfo {
    /// Sub-sessions are spawned by an agent inside another session
    pub fn is_sub_session(&self) -> bool {
        self.parent_id.is_some()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimeInfo {
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient_timestamp")]
    pub created: Option<Timestamp>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient_timestamp")]
    pub start: Option<Timestamp>,
}

/// `message/<sessionId>/<id>.json`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageInfo {
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_non_empty_string")]
    pub id: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_non_empty_string")]
    pub agent: Option<String>,
    #[serde(default)]
    pub time: Option<TimeInfo>,
}

impl MessageInfo {
    pub fn created(&self) -> Option<Timestamp> {
        self.time.as_ref().and_then(|t| t.created)
    }
}

/// `part/<messageId>/<id>.json`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Part {
    #[serde(rename = "type", default)]
    pub kind: PartKind,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub synthetic: Option<bool>,
    #[serde(default)]
    pub time: Option<TimeInfo>,
}

impl Part {
    pub fn started(&self) -> Option<Timestamp> {
        self.time.as_ref().and_then(|t| t.start)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PartKind {
    Text,
    Reasoning,
    Tool,
    StepStart,
    StepFinish,
    File,
    Compaction,
    Subtask,
    Snapshot,
    Patch,
    #[default]
    #[serde(other)]
    Other,
}

/// A message together with the parts stored for it
#[derive(Debug, Clone)]
pub struct OpenCodeMessage {
    pub info: MessageInfo,
    pub parts: Vec<Part>,
}

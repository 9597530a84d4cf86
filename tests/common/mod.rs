//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

/// Builder for a Claude Code project directory holding session JSONL files
pub struct ClaudeProjectBuilder {
    temp_dir: TempDir,
}

impl ClaudeProjectBuilder {
    /// Create a new builder with an empty project directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the project directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a session file with raw content
    pub fn with_raw_session(self, filename: &str, content: &str) -> Self {
        fs::write(self.temp_dir.path().join(filename), content)
            .expect("Failed to write session file");
        self
    }

    /// Add a session file built from records
    pub fn with_session(self, filename: &str, records: &[RecordBuilder]) -> Self {
        let content = records.iter().map(|r| r.to_json()).collect::<Vec<_>>().join("\n");
        self.with_raw_session(filename, &content)
    }

    /// Add a sessions-index.json sidecar mapping file names to summaries
    pub fn with_index(self, summaries: &[(&str, &str)]) -> Self {
        let entries: Vec<Value> = summaries
            .iter()
            .map(|(filename, summary)| {
                json!({
                    "fullPath": self.temp_dir.path().join(filename).to_string_lossy(),
                    "summary": summary,
                })
            })
            .collect();
        let index = json!({ "version": 1, "entries": entries });
        fs::write(self.temp_dir.path().join("sessions-index.json"), index.to_string())
            .expect("Failed to write sessions index");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for ClaudeProjectBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one line of a session JSONL file
pub struct RecordBuilder {
    record_type: String,
    role: String,
    content: Value,
    timestamp: Value,
    session_id: String,
    cwd: Option<String>,
    is_meta: bool,
}

impl RecordBuilder {
    /// Create a new user message with string content
    pub fn user(text: &str) -> Self {
        Self {
            record_type: "user".to_string(),
            role: "user".to_string(),
            content: json!(text),
            timestamp: json!("2024-01-01T10:05:00Z"),
            session_id: "s1".to_string(),
            cwd: None,
            is_meta: false,
        }
    }

    /// Create a new assistant message with a single text block
    pub fn assistant(text: &str) -> Self {
        Self {
            record_type: "assistant".to_string(),
            role: "assistant".to_string(),
            content: json!([{ "type": "text", "text": text }]),
            timestamp: json!("2024-01-01T10:06:00Z"),
            session_id: "s1".to_string(),
            cwd: None,
            is_meta: false,
        }
    }

    /// Replace the content with a list of blocks
    pub fn blocks(mut self, blocks: Vec<Value>) -> Self {
        self.content = Value::Array(blocks);
        self
    }

    /// Set the record type (e.g. "system", "summary")
    pub fn record_type(mut self, record_type: &str) -> Self {
        self.record_type = record_type.to_string();
        self
    }

    pub fn timestamp(mut self, timestamp: &str) -> Self {
        self.timestamp = json!(timestamp);
        self
    }

    pub fn session_id(mut self, session_id: &str) -> Self {
        self.session_id = session_id.to_string();
        self
    }

    pub fn cwd(mut self, cwd: &str) -> Self {
        self.cwd = Some(cwd.to_string());
        self
    }

    pub fn meta(mut self) -> Self {
        self.is_meta = true;
        self
    }

    /// A text block
    pub fn text_block(text: &str) -> Value {
        json!({ "type": "text", "text": text })
    }

    /// A thinking block
    pub fn thinking_block(text: &str) -> Value {
        json!({ "type": "thinking", "thinking": text })
    }

    /// A tool_use block
    pub fn tool_use_block(id: &str, name: &str) -> Value {
        json!({ "type": "tool_use", "id": id, "name": name, "input": {} })
    }

    /// A tool_result block
    pub fn tool_result_block(tool_use_id: &str, content: &str) -> Value {
        json!({ "type": "tool_result", "tool_use_id": tool_use_id, "content": content })
    }

    /// Convert to a JSON line
    pub fn to_json(&self) -> String {
        let mut record = json!({
            "type": self.record_type,
            "message": { "role": self.role, "content": self.content },
            "timestamp": self.timestamp,
            "sessionId": self.session_id,
        });
        if let Some(cwd) = &self.cwd {
            record["cwd"] = json!(cwd);
        }
        if self.is_meta {
            record["isMeta"] = json!(true);
        }
        record.to_string()
    }
}

/// Builder for an OpenCode storage tree
pub struct OpenCodeStorageBuilder {
    temp_dir: TempDir,
}

impl OpenCodeStorageBuilder {
    /// Create a storage root with an empty session directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir_all(temp_dir.path().join("session").join("global"))
            .expect("Failed to create session dir");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    fn write_json(&self, relative: PathBuf, value: &Value) {
        let path = self.temp_dir.path().join(relative);
        fs::create_dir_all(path.parent().expect("path has parent")).expect("Failed to create dir");
        fs::write(path, value.to_string()).expect("Failed to write json file");
    }

    /// Add a session file (`session/global/<id>.json`)
    pub fn with_session(self, session: Value) -> Self {
        let id = session["id"].as_str().unwrap_or("unnamed").to_string();
        self.write_json(PathBuf::from("session/global").join(format!("{}.json", id)), &session);
        self
    }

    /// Add a message file (`message/<sessionId>/<id>.json`)
    pub fn with_message(self, session_id: &str, message: Value) -> Self {
        let id = message["id"].as_str().expect("message needs an id").to_string();
        self.write_json(PathBuf::from("message").join(session_id).join(format!("{}.json", id)), &message);
        self
    }

    /// Add a part file (`part/<messageId>/<partId>.json`)
    pub fn with_part(self, message_id: &str, part_id: &str, part: Value) -> Self {
        self.write_json(PathBuf::from("part").join(message_id).join(format!("{}.json", part_id)), &part);
        self
    }

    /// Add a message with one text part in a single step
    pub fn with_text_message(
        self,
        session_id: &str,
        message_id: &str,
        role: &str,
        created_ms: i64,
        text: &str,
    ) -> Self {
        self.with_message(
            session_id,
            json!({ "id": message_id, "sessionID": session_id, "role": role, "time": { "created": created_ms } }),
        )
        .with_part(message_id, &format!("prt_{}", message_id), json!({ "type": "text", "text": text }))
    }

    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for OpenCodeStorageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// File names in a directory, sorted
pub fn list_outputs(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("Failed to read output dir")
        .map(|e| e.expect("dir entry").file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

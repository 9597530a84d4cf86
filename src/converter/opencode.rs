use std::path::{Path, PathBuf};

use anyhow::Result;

use super::{ConvertError, SessionAdapter, SessionHeader};
use crate::filters::{extract_part_text, part_timestamp};
use crate::models::{CandidateTurn, OpenCodeMessage, Role, Timestamp};
use crate::parsers::OpenCodeStorage;

/// A session file inside an OpenCode storage tree
#[derive(Debug, Clone)]
pub struct OpenCodeSessionFile {
    pub path: PathBuf,
    storage: OpenCodeStorage,
}

/// Format B: session, message and part files spread over a storage tree
#[derive(Debug, Default, Clone, Copy)]
pub struct OpenCodeAdapter;

impl SessionAdapter for OpenCodeAdapter {
    type Source = OpenCodeSessionFile;
    type Record = OpenCodeMessage;

    const SORT_TURNS: bool = true;
    const REQUIRE_START: bool = true;

    fn discover(&self, root: &Path) -> Result<Vec<Self::Source>> {
        let storage = OpenCodeStorage::open(root)?;
        let files = storage.session_files()?;
        if files.is_empty() {
            tracing::warn!("No session files found in {}", storage.session_dir().display());
        }

        Ok(files
            .into_iter()
            .map(|path| OpenCodeSessionFile { path, storage: storage.clone() })
            .collect())
    }

    fn describe(&self, source: &Self::Source) -> String {
        source.path.display().to_string()
    }

    fn session_header(&self, source: &Self::Source) -> Result<SessionHeader, ConvertError> {
        let session = source
            .storage
            .load_session(&source.path)
            .map_err(|e| ConvertError::InvalidSession(format!("{:#}", e)))?;

        if let Some(parent) = &session.parent_id {
            return Err(ConvertError::SubSession(parent.clone()));
        }
        let id = session.id.ok_or(ConvertError::MissingSessionId)?;

        Ok(SessionHeader {
            id: Some(id),
            title: session.title,
            project_path: session.directory,
            started_at: None,
        })
    }

    fn load_records<'a>(
        &'a self,
        source: &'a Self::Source,
        header: &SessionHeader,
    ) -> Result<Box<dyn Iterator<Item = Self::Record> + 'a>, ConvertError> {
        let session_id = header.id.as_deref().ok_or(ConvertError::MissingSessionId)?;
        let files = source.storage.message_files(session_id)?;
        if files.is_empty() {
            return Err(ConvertError::NoMessages(session_id.to_string()));
        }

        Ok(Box::new(files.into_iter().filter_map(move |path| source.storage.load_message(&path))))
    }

    fn resolve_timestamp(&self, record: &Self::Record) -> Option<Timestamp> {
        record.info.created()
    }

    fn extract_turns(&self, record: &Self::Record) -> Vec<CandidateTurn> {
        // Messages without a creation time are not part of the timeline
        let Some(created) = record.info.created() else {
            return Vec::new();
        };
        let Some(role) = record.info.role.as_deref().and_then(Role::parse) else {
            return Vec::new();
        };

        record
            .parts
            .iter()
            .filter_map(|part| {
                let text = extract_part_text(part)?;
                Some(CandidateTurn {
                    role,
                    text,
                    timestamp: part_timestamp(part, Some(created)),
                    agent: record.info.agent.clone(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn message(json: &str, parts: &[&str]) -> OpenCodeMessage {
        OpenCodeMessage {
            info: serde_json::from_str(json).unwrap(),
            parts: parts.iter().map(|p| serde_json::from_str(p).unwrap()).collect(),
        }
    }

    #[test]
    fn test_session_header_rejections() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "session/global/a.json", r#"{"id":"a","title":"Top","directory":"/w"}"#);
        write(dir.path(), "session/global/b.json", r#"{"id":"b","parentID":"a"}"#);
        write(dir.path(), "session/global/c.json", r#"{"title":"no id"}"#);
        write(dir.path(), "session/global/d.json", "{{{");

        let sources = OpenCodeAdapter.discover(dir.path()).unwrap();
        assert_eq!(sources.len(), 4);

        let header = OpenCodeAdapter.session_header(&sources[0]).unwrap();
        assert_eq!(header.id.as_deref(), Some("a"));
        assert_eq!(header.title.as_deref(), Some("Top"));
        assert_eq!(header.project_path.as_deref(), Some("/w"));

        assert!(matches!(OpenCodeAdapter.session_header(&sources[1]), Err(ConvertError::SubSession(p)) if p == "a"));
        assert!(matches!(OpenCodeAdapter.session_header(&sources[2]), Err(ConvertError::MissingSessionId)));
        assert!(matches!(OpenCodeAdapter.session_header(&sources[3]), Err(ConvertError::InvalidSession(_))));
    }

    #[test]
    fn test_load_records_without_messages() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "session/global/a.json", r#"{"id":"a"}"#);
        let sources = OpenCodeAdapter.discover(dir.path()).unwrap();
        let header = OpenCodeAdapter.session_header(&sources[0]).unwrap();

        let result = OpenCodeAdapter.load_records(&sources[0], &header);
        assert!(matches!(result, Err(ConvertError::NoMessages(id)) if id == "a"));
    }

    #[test]
    fn test_extract_turns_one_per_text_part() {
        let record = message(
            r#"{"id":"m1","role":"assistant","agent":"Planner-Sisyphus","time":{"created":1704103500000}}"#,
            &[
                r#"{"type":"step-start"}"#,
                r#"{"type":"text","text":"first","time":{"start":1704103510000}}"#,
                r#"{"type":"reasoning","text":"hidden"}"#,
                r#"{"type":"text","text":"second"}"#,
                r#"{"type":"text","text":"auto","synthetic":true}"#,
            ],
        );

        let turns = OpenCodeAdapter.extract_turns(&record);
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].text, "first");
        assert_eq!(turns[0].timestamp.unwrap().timestamp_millis(), 1704103510000);
        assert_eq!(turns[1].timestamp.unwrap().timestamp_millis(), 1704103500000);
        assert_eq!(turns[1].agent.as_deref(), Some("Planner-Sisyphus"));
    }

    #[test]
    fn test_extract_turns_requires_time_and_role() {
        let untimed = message(r#"{"id":"m1","role":"user"}"#, &[r#"{"type":"text","text":"x"}"#]);
        assert!(OpenCodeAdapter.extract_turns(&untimed).is_empty());

        let tool = message(
            r#"{"id":"m1","role":"tool","time":{"created":1704103500000}}"#,
            &[r#"{"type":"text","text":"x"}"#],
        );
        assert!(OpenCodeAdapter.extract_turns(&tool).is_empty());
    }
}

use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Result, bail};

use super::{ConvertError, SessionAdapter, SessionHeader};
use crate::filters::extract_message;
use crate::models::{CandidateTurn, ClaudeRecord, SessionsIndex, Timestamp};
use crate::parsers::{load_sessions_index, open_session_records};
use crate::utils::list_files_with_extension;

/// A Claude Code session JSONL file plus the sidecar index of its directory
#[derive(Debug, Clone)]
pub struct ClaudeSessionFile {
    pub path: PathBuf,
    index: Option<Rc<SessionsIndex>>,
}

impl ClaudeSessionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let index = path.parent().and_then(load_sessions_index).map(Rc::new);
        Self { path, index }
    }
}

/// Format A: one JSONL file per session, records already in chronological order
#[derive(Debug, Default, Clone, Copy)]
pub struct ClaudeAdapter;

impl SessionAdapter for ClaudeAdapter {
    type Source = ClaudeSessionFile;
    type Record = ClaudeRecord;

    const SORT_TURNS: bool = false;
    const REQUIRE_START: bool = false;

    fn discover(&self, root: &Path) -> Result<Vec<Self::Source>> {
        if root.is_file() {
            return Ok(vec![ClaudeSessionFile::new(root)]);
        }
        if !root.is_dir() {
            bail!("Path not found: {}", root.display());
        }

        let files = list_files_with_extension(root, "jsonl")?;
        if files.is_empty() {
            tracing::warn!("No JSONL files found in {}", root.display());
        }

        // One index read shared by every session of the directory
        let index = load_sessions_index(root).map(Rc::new);
        Ok(files.into_iter().map(|path| ClaudeSessionFile { path, index: index.clone() }).collect())
    }

    fn describe(&self, source: &Self::Source) -> String {
        source.path.display().to_string()
    }

    fn session_header(&self, source: &Self::Source) -> Result<SessionHeader, ConvertError> {
        let title = source
            .index
            .as_deref()
            .and_then(|index| index.summary_for(&source.path))
            .map(str::to_string);
        Ok(SessionHeader { title, ..SessionHeader::default() })
    }

    fn load_records<'a>(
        &'a self,
        source: &'a Self::Source,
        _header: &SessionHeader,
    ) -> Result<Box<dyn Iterator<Item = Self::Record> + 'a>, ConvertError> {
        Ok(Box::new(open_session_records(&source.path)?))
    }

    fn resolve_timestamp(&self, record: &Self::Record) -> Option<Timestamp> {
        record.timestamp
    }

    fn observe(&self, header: &mut SessionHeader, record: &Self::Record) {
        if header.id.is_none() {
            header.id = record.session_id.clone();
        }
        if header.project_path.is_none() {
            header.project_path = record.cwd.clone();
        }
    }

    fn extract_turns(&self, record: &Self::Record) -> Vec<CandidateTurn> {
        extract_message(record)
            .map(|(role, text)| CandidateTurn { role, text, timestamp: record.timestamp, agent: None })
            .into_iter()
            .collect()
    }
}

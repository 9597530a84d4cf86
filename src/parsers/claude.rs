use std::fs::File;
use std::io::{BufRead, BufReader, Split};
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::models::{ClaudeRecord, SessionsIndex};
use crate::utils::{read_json, safe_open_file};

/// Sidecar file mapping session files to summaries
pub const SESSIONS_INDEX_FILE: &str = "sessions-index.json";

/// Lazily parsed records of one session JSONL file
///
/// Lines that are blank, not valid UTF-8, or not valid JSON are skipped; a read
/// error ends the sequence early. Opening the file again restarts the sequence.
pub struct ClaudeRecords {
    lines: Split<BufReader<File>>,
    path: PathBuf,
    line_num: usize,
    parsed: usize,
    skipped: usize,
}

impl ClaudeRecords {
    fn finish(&self) {
        if self.skipped > 0 {
            tracing::debug!(
                "Parsed {}: {} records ({} malformed lines skipped)",
                self.path.display(),
                self.parsed,
                self.skipped
            );
        }
    }
}

impl Iterator for ClaudeRecords {
    type Item = ClaudeRecord;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(e)) => {
                    tracing::warn!(
                        "Failed to read {} after line {}: {}",
                        self.path.display(),
                        self.line_num,
                        e
                    );
                    self.finish();
                    return None;
                }
                None => {
                    self.finish();
                    return None;
                }
            };
            self.line_num += 1;

            if line.trim_ascii().is_empty() {
                continue;
            }

            match serde_json::from_slice::<ClaudeRecord>(&line) {
                Ok(record) => {
                    self.parsed += 1;
                    return Some(record);
                }
                Err(e) => {
                    tracing::debug!(
                        "Skipping malformed line {} in {}: {}",
                        self.line_num,
                        self.path.display(),
                        e
                    );
                    self.skipped += 1;
                }
            }
        }
    }
}

/// Open a session JSONL file as a lazy record sequence
pub fn open_session_records(path: &Path) -> Result<ClaudeRecords> {
    let file = safe_open_file(path)?;
    Ok(ClaudeRecords {
        lines: BufReader::new(file).split(b'\n'),
        path: path.to_path_buf(),
        line_num: 0,
        parsed: 0,
        skipped: 0,
    })
}

/// Parse every record of a session JSONL file
pub fn parse_session_file(path: &Path) -> Result<Vec<ClaudeRecord>> {
    Ok(open_session_records(path)?.collect())
}

/// Load the sidecar index that lives next to the session files in `dir`
///
/// A missing or unreadable index is not an error: summaries then fall back to
/// the first user message.
pub fn load_sessions_index(dir: &Path) -> Option<SessionsIndex> {
    let index_path = dir.join(SESSIONS_INDEX_FILE);
    if !index_path.is_file() {
        return None;
    }

    match read_json::<SessionsIndex>(&index_path) {
        Ok(index) => Some(index),
        Err(e) => {
            tracing::debug!("Ignoring unreadable sessions index: {:#}", e);
            None
        }
    }
}

impl SessionsIndex {
    /// Summary recorded for a session file
    ///
    /// Entries are matched on their `fullPath`; when no entry matches, an entry whose
    /// `sessionId` equals the file stem is used.
    pub fn summary_for(&self, session_path: &Path) -> Option<&str> {
        let by_path = self
            .entries
            .iter()
            .find(|entry| entry.full_path.as_deref().is_some_and(|p| Path::new(p) == session_path));

        let entry = by_path.or_else(|| {
            let stem = session_path.file_stem()?.to_str()?;
            self.entries.iter().find(|entry| entry.session_id.as_deref() == Some(stem))
        })?;

        entry.summary.as_deref()
    }
}

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use crate::models::{MessageInfo, OpenCodeMessage, Part, SessionInfo};
use crate::utils::{list_files_with_extension, read_json};

/// An OpenCode storage directory
///
/// ```text
/// storage/
///   session/global/<sessionId>.json
///   message/<sessionId>/<messageId>.json
///   part/<messageId>/<partId>.json
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenCodeStorage {
    root: PathBuf,
}

impl OpenCodeStorage {
    /// Open a storage root, failing if it is not a directory or has no session directory
    pub fn open(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            bail!("Not a directory: {}", root.display());
        }

        let storage = Self { root: root.to_path_buf() };
        let session_dir = storage.session_dir();
        if !session_dir.is_dir() {
            bail!("Session directory not found: {}", session_dir.display());
        }

        Ok(storage)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn session_dir(&self) -> PathBuf {
        self.root.join("session").join("global")
    }

    pub fn message_dir(&self, session_id: &str) -> PathBuf {
        self.root.join("message").join(session_id)
    }

    pub fn part_dir(&self, message_id: &str) -> PathBuf {
        self.root.join("part").join(message_id)
    }

    /// Session files, sorted by name
    pub fn session_files(&self) -> Result<Vec<PathBuf>> {
        list_files_with_extension(&self.session_dir(), "json")
    }

    pub fn load_session(&self, path: &Path) -> Result<SessionInfo> {
        read_json(path)
    }

    /// Message files of a session, sorted by name; an absent directory yields none
    pub fn message_files(&self, session_id: &str) -> Result<Vec<PathBuf>> {
        let dir = self.message_dir(session_id);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }
        list_files_with_extension(&dir, "json")
    }

    /// Load one message and its parts; `None` if the message file is unreadable
    pub fn load_message(&self, path: &Path) -> Option<OpenCodeMessage> {
        let info: MessageInfo = match read_json(path) {
            Ok(info) => info,
            Err(e) => {
                tracing::debug!("Skipping message: {:#}", e);
                return None;
            }
        };

        let parts = match info.id.as_deref() {
            Some(message_id) => self.load_parts(message_id),
            None => Vec::new(),
        };

        Some(OpenCodeMessage { info, parts })
    }

    /// Parts of a message in file-name order; unreadable parts are skipped
    pub fn load_parts(&self, message_id: &str) -> Vec<Part> {
        let dir = self.part_dir(message_id);
        if !dir.is_dir() {
            return Vec::new();
        }

        let files = match list_files_with_extension(&dir, "json") {
            Ok(files) => files,
            Err(e) => {
                tracing::debug!("Skipping parts of {}: {:#}", message_id, e);
                return Vec::new();
            }
        };

        files
            .iter()
            .filter_map(|path| match read_json::<Part>(path) {
                Ok(part) => Some(part),
                Err(e) => {
                    tracing::debug!("Skipping part: {:#}", e);
                    None
                }
            })
            .collect()
    }
}

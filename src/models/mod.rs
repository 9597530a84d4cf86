//! Data models for session logs and the transcripts derived from them.
//!
//! - [`claude`] - Claude Code JSONL records (format A) and the `sessions-index.json` sidecar
//! - [`opencode`] - OpenCode storage tree entities (format B): sessions, messages, parts
//! - [`transcript`] - Format-independent turns and sessions produced by the pipeline
//!
//! Raw models use lenient custom deserializers from `crate::parsers::deserializers`
//! so that a wrong-typed optional field never rejects a whole record.

pub mod claude;
pub mod opencode;
pub mod transcript;

pub use claude::{BlockKind, ClaudeMessage, ClaudeRecord, ContentBlock, MessageContent, SessionsIndex};
pub use opencode::{MessageInfo, OpenCodeMessage, Part, PartKind, SessionInfo};
pub use transcript::{CandidateTurn, Role, Session, Timestamp, Turn};

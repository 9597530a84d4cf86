//! Session Transcripts - Convert AI assistant session logs into plain-text transcripts
//!
//! This library turns the local session logs of two conversational coding assistants
//! into compact, human-readable transcripts suitable for text indexing. It supports:
//!
//! - Claude Code session JSONL files (`~/.claude/projects/<project>/*.jsonl`)
//! - OpenCode storage trees (`~/.local/share/opencode/storage`)
//! - Filtering tool calls, reasoning, command markers and synthetic entries
//! - Collapsing long code blocks and file dumps
//! - Skipping sessions already converted in the same run
//!
//! # Example
//!
//! ```no_run
//! use session_transcripts::{ClaudeAdapter, Converter};
//! use std::path::Path;
//!
//! let mut converter = Converter::new(ClaudeAdapter, "transcripts")?;
//! let summary = converter.convert_all(Path::new("/Users/alice/.claude/projects/-Users-alice-app"))?;
//! println!("Converted {} session(s)", summary.converted);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod converter;
pub mod filters;
pub mod models;
pub mod parsers;
pub mod text;
pub mod utils;
pub mod writer;

// Re-export commonly used types
pub use converter::{ClaudeAdapter, ConvertError, Converter, OpenCodeAdapter, RunSummary, SessionAdapter};
pub use models::{Role, Session, Turn};
pub use text::normalize;
pub use utils::paths::{encode_project_dir, format_path_with_tilde};

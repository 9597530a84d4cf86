//! Message filtering: decide which records are conversation and extract their text.
//!
//! - [`message`] - Claude Code JSONL records (format A): record types, meta flags,
//!   command markers, tool-result-only turns and block selection
//! - [`part`] - OpenCode parts (format B): text parts only, synthetic parts dropped

pub mod message;
pub mod part;

pub use message::{extract_message, is_command_message, should_skip_record};
pub use part::{extract_part_text, part_timestamp};

//! Record loaders for the two supported session sources
//!
//! # Error Handling Strategy
//!
//! Loaders follow a **graceful degradation** approach suitable for batch conversion:
//!
//! - **Individual record failures**: A malformed JSONL line, a line that is not valid
//!   UTF-8, or an unreadable message/part file is logged at debug level and skipped.
//!   One bad record never fails the session it belongs to.
//!
//! - **Optional metadata**: A missing or broken `sessions-index.json` only degrades the
//!   session summary.
//!
//! - **Source failures**: A session file that cannot be opened (missing, too large) is
//!   an error for that session; the caller decides whether the batch continues.
//!
//! - **Laziness**: JSONL records are parsed as they are consumed, and every call to
//!   [`claude::open_session_records`] starts a fresh pass over the file.

pub mod claude;
pub mod deserializers;
pub mod opencode;

pub use claude::{SESSIONS_INDEX_FILE, load_sessions_index, open_session_records, parse_session_file};
pub use opencode::OpenCodeStorage;

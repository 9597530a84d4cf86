//! Session conversion shared by both source formats.
//!
//! A [`SessionAdapter`] supplies format-specific loading and filtering; the
//! [`Converter`] drives it through normalization, assembly and writing. Per-run
//! state (processed session ids, agent name casing) lives in the converter's
//! [`Assembler`], never in globals.

pub mod adapter;
pub mod assembler;
pub mod claude;
pub mod error;
pub mod opencode;
pub mod pipeline;

pub use adapter::{SessionAdapter, SessionHeader};
pub use assembler::Assembler;
pub use claude::{ClaudeAdapter, ClaudeSessionFile};
pub use error::ConvertError;
pub use opencode::{OpenCodeAdapter, OpenCodeSessionFile};
pub use pipeline::{ConvertedSession, Converter, RunSummary};

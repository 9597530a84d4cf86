//! Shared conversion pipeline: load → filter → normalize → assemble → write.
//!
//! # Error Handling Strategy
//!
//! - **Fatal**: an unusable source root or output directory aborts the run before any
//!   session is attempted.
//! - **Per session**: every other failure is reported and the run moves on. Skips
//!   (no turns, duplicates, missing ids or timestamps) are warnings; I/O failures are
//!   errors. Sub-sessions are skipped quietly.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::{Assembler, ConvertError, SessionAdapter};
use crate::writer::write_session;

/// A session that made it to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedSession {
    pub path: PathBuf,
    pub turn_count: usize,
}

impl ConvertedSession {
    pub fn file_name(&self) -> String {
        self.path.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_default()
    }
}

/// Outcome counts of one run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Converts every session of one source format into transcripts in `output_dir`
pub struct Converter<A: SessionAdapter> {
    adapter: A,
    assembler: Assembler,
    output_dir: PathBuf,
}

impl<A: SessionAdapter> Converter<A> {
    /// Create a converter, creating the output directory if needed
    pub fn new(adapter: A, output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir).with_context(|| {
            format!("Failed to create output directory: {}", output_dir.display())
        })?;

        Ok(Self { adapter, assembler: Assembler::new(), output_dir })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Convert one session source
    pub fn convert_source(&mut self, source: &A::Source) -> Result<ConvertedSession, ConvertError> {
        let mut header = self.adapter.session_header(source)?;
        if let Some(id) = &header.id
            && self.assembler.is_processed(id)
        {
            return Err(ConvertError::Duplicate(id.clone()));
        }

        let mut candidates = Vec::new();
        for record in self.adapter.load_records(source, &header)? {
            if header.started_at.is_none() {
                header.started_at = self.adapter.resolve_timestamp(&record);
            }
            self.adapter.observe(&mut header, &record);
            candidates.extend(self.adapter.extract_turns(&record));
        }

        if candidates.is_empty() {
            return Err(ConvertError::NoTurns);
        }
        if A::REQUIRE_START && header.started_at.is_none() {
            return Err(ConvertError::MissingTimestamp);
        }

        let session = self.assembler.assemble(header, candidates, A::SORT_TURNS)?;
        let path = write_session(&self.output_dir, &session)?;

        Ok(ConvertedSession { path, turn_count: session.turns.len() })
    }

    /// Discover and convert every session under `root`
    ///
    /// # Errors
    ///
    /// Only discovery failures are returned; per-session failures are logged and
    /// counted in the [`RunSummary`].
    pub fn convert_all(&mut self, root: &Path) -> Result<RunSummary> {
        let sources = self.adapter.discover(root)?;
        let mut summary = RunSummary::default();

        for source in &sources {
            self.convert_and_report(source, &mut summary);
        }

        Ok(summary)
    }

    /// Convert one source and print or log the outcome
    pub fn convert_and_report(&mut self, source: &A::Source, summary: &mut RunSummary) {
        match self.convert_source(source) {
            Ok(converted) => {
                println!("✓ {} ({} messages)", converted.file_name(), converted.turn_count);
                summary.converted += 1;
            }
            Err(e) if e.is_silent() => {
                tracing::debug!("Skipping {}: {}", self.adapter.describe(source), e);
                summary.skipped += 1;
            }
            Err(e) if e.is_skippable() => {
                tracing::warn!("{}: {}", self.adapter.describe(source), e);
                summary.skipped += 1;
            }
            Err(e) => {
                tracing::error!("{}: {:#}", self.adapter.describe(source), e);
                summary.failed += 1;
            }
        }
    }
}

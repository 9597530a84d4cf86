use std::path::Path;

use anyhow::Result;

use super::ConvertError;
use crate::models::{CandidateTurn, Timestamp};

/// Session-level metadata gathered before and while records are loaded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionHeader {
    pub id: Option<String>,
    /// Title or summary supplied by the source itself
    pub title: Option<String>,
    pub project_path: Option<String>,
    pub started_at: Option<Timestamp>,
}

/// Source-format adapter driving the shared conversion pipeline
///
/// An adapter knows how to find sessions, load their raw records and filter those
/// records into candidate turns. Normalization, assembly and writing are shared.
pub trait SessionAdapter {
    /// One discovered session
    type Source;
    /// One raw record of a session
    type Record;

    /// Whether turns are reordered by timestamp (stable) before rendering
    const SORT_TURNS: bool;
    /// Whether a session without a resolvable start time is rejected
    const REQUIRE_START: bool;

    /// Enumerate the sessions under `root`
    ///
    /// Errors here are fatal to the run: the root itself is unusable.
    fn discover(&self, root: &Path) -> Result<Vec<Self::Source>>;

    /// Human-readable name of a source for log messages
    fn describe(&self, source: &Self::Source) -> String;

    /// Metadata available before any record is read
    fn session_header(&self, source: &Self::Source) -> Result<SessionHeader, ConvertError>;

    /// Lazy sequence of the session's raw records
    fn load_records<'a>(
        &'a self,
        source: &'a Self::Source,
        header: &SessionHeader,
    ) -> Result<Box<dyn Iterator<Item = Self::Record> + 'a>, ConvertError>;

    /// Time of a record, used to seed the session start
    fn resolve_timestamp(&self, record: &Self::Record) -> Option<Timestamp>;

    /// Fill header gaps from metadata carried on records
    fn observe(&self, _header: &mut SessionHeader, _record: &Self::Record) {}

    /// Apply the format's filter rules to one record
    fn extract_turns(&self, record: &Self::Record) -> Vec<CandidateTurn>;
}
